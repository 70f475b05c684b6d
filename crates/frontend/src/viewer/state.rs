use crate::shared::storage;
use matrix::{MatrixSession, ViewerConfig};

/// Состояние загрузки страницы
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// Файл прочитан, но строк в нём нет
    NoData,
    Failed(String),
}

/// Создаёт сессию после успешной загрузки и восстанавливает сохранённые фильтры
pub fn open_session(parsed: matrix::ParsedCsv, config: &ViewerConfig) -> MatrixSession {
    if !parsed.issues.is_empty() {
        log::warn!("CSV loaded with {} parse issues", parsed.issues.len());
    }

    let mut session = MatrixSession::new(parsed.dataset);
    if config.filters.persist {
        if let Some(stored) = storage::load_filters(&config.filters.storage_key) {
            session.restore(stored);
        }
    }
    session
}

pub fn persist_filters(session: &MatrixSession, config: &ViewerConfig) {
    if config.filters.persist {
        storage::save_filters(&config.filters.storage_key, session.assignment());
    }
}
