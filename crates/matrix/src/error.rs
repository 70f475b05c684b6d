use thiserror::Error;

/// Ошибки загрузки матрицы. Любая из них прерывает текущую загрузку целиком.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Ошибка запроса: {0}")]
    Request(String),

    #[error("CSV не найден ({status} {status_text})")]
    Http { status: u16, status_text: String },

    #[error("В CSV нет строки заголовков: {0}")]
    MissingHeader(String),

    #[error("Файл загружен, но не содержит ни одной строки данных")]
    EmptyDataset,
}

impl LoadError {
    /// Пустой набор данных показывается отдельным сообщением, не как сбой загрузки
    pub fn is_no_data(&self) -> bool {
        matches!(self, LoadError::EmptyDataset)
    }
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Нет данных для экспорта")]
    NothingToExport,

    #[error("Ошибка формирования XLSX: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Некорректная конфигурация: {0}")]
    Toml(#[from] toml::de::Error),
}
