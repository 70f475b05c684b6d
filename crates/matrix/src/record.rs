use std::collections::HashMap;

/// Одна строка матрицы: заголовок колонки -> значение ячейки.
///
/// Значения уже нормализованы при загрузке (обрезаны пробелы, удалены `\r`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    cells: HashMap<String, String>,
}

impl Record {
    pub fn new(cells: HashMap<String, String>) -> Self {
        Self { cells }
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells.get(header).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Набор строк, полученный за одну загрузку. После создания не меняется.
///
/// Все записи содержат одинаковый набор ключей: каждый заголовок из `headers`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Record>,
}

impl Dataset {
    /// Собирает набор из заголовков и строк-значений по позициям.
    /// Недостающие ячейки заполняются пустой строкой, лишние отбрасываются.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|values| {
                let mut values = values.into_iter();
                let mut cells = HashMap::with_capacity(headers.len());
                for header in &headers {
                    let value = values.next().unwrap_or_default();
                    // при дублирующихся заголовках побеждает первая колонка
                    cells.entry(header.clone()).or_insert(value);
                }
                Record::new(cells)
            })
            .collect();

        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_rows_pads_and_truncates() {
        let ds = Dataset::from_rows(
            headers(&["a", "b"]),
            vec![
                vec!["1".into()],
                vec!["x".into(), "y".into(), "z".into()],
            ],
        );
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows()[0].get("a"), Some("1"));
        assert_eq!(ds.rows()[0].get("b"), Some(""));
        assert_eq!(ds.rows()[1].get("b"), Some("y"));
        assert_eq!(ds.rows()[1].len(), 2);
    }

    #[test]
    fn test_duplicate_header_keeps_first_value() {
        let ds = Dataset::from_rows(
            headers(&["role", "role"]),
            vec![vec!["О".into(), "В".into()]],
        );
        assert_eq!(ds.rows()[0].get("role"), Some("О"));
    }

    #[test]
    fn test_record_from_iter() {
        let r: Record = [("department", "IT")].into_iter().collect();
        assert_eq!(r.get("department"), Some("IT"));
        assert_eq!(r.get("role"), None);
    }
}
