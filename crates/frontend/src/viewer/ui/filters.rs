use leptos::prelude::*;
use matrix::FilterField;

/// Выпадающий список одного измерения: «Все» плюс достижимые значения
#[component]
pub fn FilterSelect(
    field: FilterField,
    /// Значения, доступные при остальных фильтрах
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Текущий выбор, пустая строка означает «Все»
    #[prop(into)]
    selected: Signal<String>,
    on_select: Callback<(FilterField, String)>,
) -> impl IntoView {
    view! {
        <label class="filter">
            <span class="filter-title">{field.title()}</span>
            <select
                id={format!("filter-{}", field.key())}
                prop:value=move || selected.get()
                on:change=move |ev| {
                    on_select.run((field, event_target_value(&ev)));
                }
            >
                <option value="">"Все"</option>
                {move || {
                    let current = selected.get();
                    options
                        .get()
                        .into_iter()
                        .map(|value| {
                            let is_selected = value == current;
                            let label = value.clone();
                            view! {
                                <option value={value} selected={is_selected}>
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}
