use leptos::prelude::*;
use matrix::{DisplayRow, LogicalField};

/// CSS класс колонки: ширина задаётся стилями страницы
fn column_class(field: LogicalField) -> &'static str {
    match field {
        LogicalField::Number => "col-id",
        LogicalField::Function => "col-function",
        LogicalField::Role => "col-role role",
        LogicalField::Department | LogicalField::Division | LogicalField::Position => "col-text",
        LogicalField::Comment => "col-text-wide",
        _ => "col-text-medium",
    }
}

fn render_row(row: DisplayRow) -> impl IntoView {
    let DisplayRow {
        cells,
        role_tooltip,
    } = row;

    view! {
        <tr>
            {LogicalField::ALL
                .into_iter()
                .zip(cells)
                .map(|(field, value)| {
                    if field == LogicalField::Role {
                        // подсказка рисуется CSS по атрибуту data-tooltip
                        view! {
                            <td class={column_class(field)} data-tooltip={role_tooltip.clone()}>
                                {value}
                            </td>
                        }
                            .into_any()
                    } else {
                        view! { <td class={column_class(field)}>{value}</td> }.into_any()
                    }
                })
                .collect_view()}
        </tr>
    }
}

#[component]
pub fn MatrixTable(#[prop(into)] rows: Signal<Vec<DisplayRow>>) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <table id="matrix">
                <thead>
                    <tr>
                        {LogicalField::ALL
                            .into_iter()
                            .map(|field| view! { <th class={column_class(field)}>{field.title()}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            view! {
                                <tr class="placeholder">
                                    <td colspan={LogicalField::ALL.len().to_string()}>
                                        "Нет строк, соответствующих фильтрам"
                                    </td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            rows.into_iter().map(render_row).collect_view().into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
