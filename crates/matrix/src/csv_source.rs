//! Загрузка матрицы из текста CSV.
//!
//! Формат: первая строка содержит заголовки, разделитель `,`, поля могут быть
//! заключены в кавычки (внутри кавычек допускаются запятые и переводы строк).
//! Ошибки отдельных строк не прерывают загрузку: строка либо дополняется
//! пустыми значениями, либо пропускается, а проблема попадает в `issues`.

use crate::error::LoadError;
use crate::record::Dataset;
use std::fmt;

const BOM: char = '\u{FEFF}';

/// Сколько символов исходного текста писать в лог для диагностики
const PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseIssueKind {
    TooFewFields { expected: usize, found: usize },
    TooManyFields { expected: usize, found: usize },
    Malformed(String),
}

/// Нефатальная проблема разбора конкретной строки файла
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Номер строки в файле (с 1), если парсер его знает
    pub line: Option<u64>,
    pub kind: ParseIssueKind,
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "строка {}: ", line)?;
        }
        match &self.kind {
            ParseIssueKind::TooFewFields { expected, found } => {
                write!(f, "мало полей (ожидалось {}, найдено {})", expected, found)
            }
            ParseIssueKind::TooManyFields { expected, found } => {
                write!(f, "лишние поля (ожидалось {}, найдено {})", expected, found)
            }
            ParseIssueKind::Malformed(msg) => write!(f, "строка пропущена: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParsedCsv {
    pub dataset: Dataset,
    pub issues: Vec<ParseIssue>,
}

fn clean_header(raw: &str) -> String {
    raw.trim_start_matches(BOM).trim().to_string()
}

fn clean_value(raw: &str) -> String {
    raw.replace('\r', "").trim().to_string()
}

/// Разбирает CSV в набор строк.
///
/// Возвращает ошибку только если есть данные, но нет строки заголовков;
/// пустой файл даёт пустой набор. Всё остальное собирается в
/// `ParsedCsv::issues` и пишется в лог.
pub fn parse_csv(text: &str) -> Result<ParsedCsv, LoadError> {
    let preview: String = text.chars().take(PREVIEW_CHARS).collect();
    log::debug!("CSV RAW (preview): {}", preview);

    // Strip UTF-8 BOM if present
    let text = text.trim_start_matches(BOM);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = match reader.headers() {
        Ok(h) => h.iter().map(clean_header).collect(),
        Err(e) => return Err(LoadError::MissingHeader(e.to_string())),
    };

    if headers.iter().all(|h| h.is_empty()) {
        // пустой файл: нет ни заголовков, ни данных
        let has_data = reader
            .records()
            .any(|r| r.map_or(true, |r| r.iter().any(|v| !clean_value(v).is_empty())));
        if has_data {
            return Err(LoadError::MissingHeader("пустая первая строка".to_string()));
        }
        log::info!("CSV is empty");
        return Ok(ParsedCsv {
            dataset: Dataset::from_rows(Vec::new(), Vec::new()),
            issues: Vec::new(),
        });
    }

    let expected = headers.len();
    let mut rows = Vec::new();
    let mut issues = Vec::new();

    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                let issue = ParseIssue {
                    line: e.position().map(|p| p.line()),
                    kind: ParseIssueKind::Malformed(e.to_string()),
                };
                log::warn!("Skipping malformed CSV record: {}", issue);
                issues.push(issue);
                continue;
            }
        };

        let values: Vec<String> = record.iter().map(clean_value).collect();
        if values.iter().all(|v| v.is_empty()) {
            continue;
        }

        let found = values.len();
        let line = record.position().map(|p| p.line());
        if found < expected {
            issues.push(ParseIssue {
                line,
                kind: ParseIssueKind::TooFewFields { expected, found },
            });
        } else if found > expected {
            issues.push(ParseIssue {
                line,
                kind: ParseIssueKind::TooManyFields { expected, found },
            });
        }

        rows.push(values);
    }

    if !issues.is_empty() {
        log::warn!("CSV parse issues: {}", issues.len());
        for issue in &issues {
            log::warn!("  {}", issue);
        }
    }

    let dataset = Dataset::from_rows(headers, rows);
    log::info!(
        "CSV parsed: {} rows, headers: {:?}",
        dataset.len(),
        dataset.headers()
    );

    Ok(ParsedCsv { dataset, issues })
}

/// Как [`parse_csv`], но пустой результат считается отдельной ошибкой «нет данных»
pub fn load_dataset(text: &str) -> Result<ParsedCsv, LoadError> {
    let parsed = parse_csv(text)?;
    if parsed.dataset.is_empty() {
        return Err(LoadError::EmptyDataset);
    }
    Ok(parsed)
}
