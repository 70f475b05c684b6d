use super::filters::FilterSelect;
use super::table::MatrixTable;
use crate::shared::export::download_bytes;
use crate::viewer::loader::fetch_matrix;
use crate::viewer::state::{self, LoadState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use matrix::export::{build_workbook, export_file_name, XLSX_MIME};
use matrix::{FilterField, MatrixSession, ViewerConfig};

#[component]
pub fn MatrixPage(config: ViewerConfig) -> impl IntoView {
    let config = StoredValue::new(config);

    // Единственный контроллер: данные, сопоставление колонок и фильтры
    let session = RwSignal::new(None::<MatrixSession>);
    let load_state = RwSignal::new(LoadState::Loading);
    let export_error = RwSignal::new(None::<String>);

    // Загрузить данные при монтировании
    Effect::new(move |_| {
        spawn_local(async move {
            let url = config.with_value(|c| c.data.url.clone());
            match fetch_matrix(&url).await {
                Ok(parsed) => {
                    let opened = config.with_value(|c| state::open_session(parsed, c));
                    session.set(Some(opened));
                    load_state.set(LoadState::Ready);
                }
                Err(e) if e.is_no_data() => {
                    log::warn!("CSV {} has no rows", url);
                    load_state.set(LoadState::NoData);
                }
                Err(e) => {
                    log::error!("Ошибка загрузки CSV: {}", e);
                    load_state.set(LoadState::Failed(e.to_string()));
                }
            }
        });
    });

    // Зеркалим фильтры в localStorage после каждого изменения
    Effect::new(move |_| {
        session.with(|s| {
            if let Some(s) = s {
                config.with_value(|c| state::persist_filters(s, c));
            }
        });
    });

    let filter_view = Memo::new(move |_| session.with(|s| s.as_ref().map(MatrixSession::view)));
    let rows = Memo::new(move |_| {
        session.with(|s| s.as_ref().map(MatrixSession::display_rows).unwrap_or_default())
    });

    let on_select = Callback::new(move |(field, value): (FilterField, String)| {
        session.update(|s| {
            if let Some(s) = s.as_mut() {
                s.select(field, &value);
            }
        });
    });

    let on_clear = move |_| {
        session.update(|s| {
            if let Some(s) = s.as_mut() {
                s.clear_all();
            }
        });
    };

    let on_export = move |_| {
        export_error.set(None);
        let data = rows.get_untracked();
        let (prefix, sheet) = config.with_value(|c| {
            (c.export.file_prefix.clone(), c.export.sheet_name.clone())
        });

        let result = build_workbook(&data, &sheet)
            .map_err(|e| e.to_string())
            .and_then(|bytes| {
                let filename = export_file_name(&prefix, chrono::Utc::now());
                download_bytes(&bytes, &filename, XLSX_MIME)
            });

        if let Err(e) = result {
            log::warn!("Экспорт не выполнен: {}", e);
            export_error.set(Some(e));
        }
    };

    let counter = move || {
        filter_view.with(|v| {
            v.as_ref()
                .map(|v| format!("Показано: {} из {}", v.rows.len(), v.total))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="matrix-page">
            <h2>"Функциональная матрица"</h2>

            // Статус загрузки
            {move || match load_state.get() {
                LoadState::Loading => {
                    view! { <div class="matrix-status">"Загрузка..."</div> }.into_any()
                }
                LoadState::NoData => {
                    view! { <div class="matrix-status">"Нет данных: файл матрицы пуст"</div> }
                        .into_any()
                }
                LoadState::Failed(err) => {
                    view! {
                        <div class="matrix-error">
                            "Не удалось загрузить данные. Проверь data.csv. " {err}
                        </div>
                    }
                        .into_any()
                }
                LoadState::Ready => view! { <></> }.into_any(),
            }}

            <Show when=move || load_state.get() == LoadState::Ready>
                <div class="controls">
                    {FilterField::ALL
                        .into_iter()
                        .map(|field| {
                            let options = Signal::derive(move || {
                                filter_view
                                    .with(|v| v.as_ref().map(|v| v.options(field).to_vec()))
                                    .unwrap_or_default()
                            });
                            let selected = Signal::derive(move || {
                                filter_view
                                    .with(|v| {
                                        v.as_ref()
                                            .and_then(|v| v.assignment.get(field).map(str::to_string))
                                    })
                                    .unwrap_or_default()
                            });
                            view! {
                                <FilterSelect
                                    field=field
                                    options=options
                                    selected=selected
                                    on_select=on_select
                                />
                            }
                        })
                        .collect_view()}

                    <button id="clear" on:click=on_clear>
                        "Сбросить фильтры"
                    </button>
                    <button id="export" on:click=on_export>
                        "Экспорт в Excel"
                    </button>
                </div>

                <div class="matrix-counter">{counter}</div>

                {move || {
                    export_error
                        .get()
                        .map(|err| view! { <div class="matrix-error">{err}</div> })
                }}

                <MatrixTable rows=rows />
            </Show>
        </div>
    }
}
