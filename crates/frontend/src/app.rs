use crate::shared::page_config::page_config;
use crate::viewer::ui::page::MatrixPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Конфигурация читается один раз при старте: встроенная или из разметки страницы
    let config = page_config();

    view! {
        <MatrixPage config=config />
    }
}
