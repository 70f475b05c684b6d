//! Конфигурация просмотрщика из разметки страницы.
//!
//! Хост может переопределить настройки, положив TOML в
//! `<script type="text/toml" id="matrix-config">` внутри `index.html`.
//! Если элемента нет или TOML некорректен, используется встроенная конфигурация.

use matrix::ViewerConfig;

const CONFIG_ELEMENT_ID: &str = "matrix-config";

fn inline_config() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

pub fn page_config() -> ViewerConfig {
    matrix::load_config(inline_config().as_deref())
}
