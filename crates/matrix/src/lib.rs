//! Матрица ответственности: загрузка CSV, сопоставление колонок и каскадные фильтры.
//!
//! Крейт не зависит от DOM и используется фронтендом как библиотека.

pub mod collation;
pub mod config;
pub mod csv_source;
pub mod error;
pub mod export;
pub mod field;
pub mod filter;
pub mod persist;
pub mod record;
pub mod resolver;
pub mod roles;
pub mod session;
pub mod view;

pub use config::{load_config, ViewerConfig};
pub use csv_source::{load_dataset, parse_csv, ParseIssue, ParsedCsv};
pub use error::{ExportError, LoadError};
pub use field::{FilterField, LogicalField};
pub use filter::{FilterAssignment, FilterView};
pub use record::{Dataset, Record};
pub use resolver::ColumnResolution;
pub use session::MatrixSession;
pub use view::DisplayRow;
