//! Сопоставление логических полей с реальными заголовками CSV.
//!
//! Для каждого поля, первое совпадение побеждает:
//! 1. точное совпадение нормализованного заголовка с кандидатом;
//! 2. заголовок, содержащий кандидата как подстроку (заголовки в порядке файла,
//!    кандидаты в порядке приоритета);
//! 3. поле остаётся несопоставленным.
//!
//! Несопоставленное поле никогда не фильтрует строки и отображается пустым.

use crate::field::LogicalField;
use crate::record::Dataset;

/// Кандидаты короче этого участвуют только в точном совпадении:
/// "по" иначе нашлось бы внутри "Подразделение".
const MIN_SUBSTRING_CANDIDATE_CHARS: usize = 3;

/// Нижний регистр, пробельные последовательности схлопнуты в один пробел
pub fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Ищет заголовок для одного поля по списку кандидатов.
/// Возвращает индекс заголовка в `headers`.
fn match_header(normalized_headers: &[String], candidates: &[&str]) -> Option<usize> {
    let candidates: Vec<String> = candidates
        .iter()
        .map(|c| normalize(c))
        .filter(|c| !c.is_empty())
        .collect();

    for candidate in &candidates {
        if let Some(idx) = normalized_headers.iter().position(|h| h == candidate) {
            return Some(idx);
        }
    }

    for candidate in &candidates {
        if candidate.chars().count() < MIN_SUBSTRING_CANDIDATE_CHARS {
            continue;
        }
        if let Some(idx) = normalized_headers
            .iter()
            .position(|h| h.contains(candidate.as_str()))
        {
            return Some(idx);
        }
    }

    None
}

/// Результат сопоставления: для каждого логического поля заголовок или `None`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnResolution {
    headers: [Option<String>; 15],
}

impl ColumnResolution {
    /// Сопоставление по произвольному набору кандидатов
    pub fn resolve<'a, F>(headers: &[String], candidates: F) -> Self
    where
        F: Fn(LogicalField) -> &'a [&'a str],
    {
        let normalized: Vec<String> = headers.iter().map(|h| normalize(h)).collect();
        let mut resolution = Self::default();

        for field in LogicalField::ALL {
            resolution.headers[field.index()] =
                match_header(&normalized, candidates(field)).map(|idx| headers[idx].clone());
        }

        resolution
    }

    /// Сопоставление по встроенным кандидатам [`LogicalField::candidates`]
    pub fn for_headers(headers: &[String]) -> Self {
        Self::resolve(headers, |field| field.candidates())
    }

    pub fn for_dataset(dataset: &Dataset) -> Self {
        let resolution = Self::for_headers(dataset.headers());
        let missing = resolution.unresolved();
        if !missing.is_empty() {
            log::warn!(
                "Columns not found in CSV: {:?}",
                missing.iter().map(|f| f.key()).collect::<Vec<_>>()
            );
        }
        resolution
    }

    pub fn header(&self, field: LogicalField) -> Option<&str> {
        self.headers[field.index()].as_deref()
    }

    pub fn is_resolved(&self, field: LogicalField) -> bool {
        self.headers[field.index()].is_some()
    }

    pub fn unresolved(&self) -> Vec<LogicalField> {
        LogicalField::ALL
            .into_iter()
            .filter(|f| !self.is_resolved(*f))
            .collect()
    }

    /// Явная привязка поля к заголовку (для тестов и ручной настройки)
    pub fn with(mut self, field: LogicalField, header: impl Into<String>) -> Self {
        self.headers[field.index()] = Some(header.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_latin_headers_resolve_exactly() {
        let names: Vec<&str> = LogicalField::ALL.iter().map(|f| f.key()).collect();
        let res = ColumnResolution::for_headers(&headers(&names));
        for field in LogicalField::ALL {
            assert_eq!(res.header(field), Some(field.key()));
        }
        assert!(res.unresolved().is_empty());
    }

    #[test]
    fn test_russian_headers_resolve() {
        let res = ColumnResolution::for_headers(&headers(&[
            "№",
            "Функция",
            "Департамент",
            "Подразделение",
            "Должность",
            "Роль",
            "ПО",
        ]));
        assert_eq!(res.header(LogicalField::Number), Some("№"));
        assert_eq!(res.header(LogicalField::Function), Some("Функция"));
        assert_eq!(res.header(LogicalField::Division), Some("Подразделение"));
        assert_eq!(res.header(LogicalField::Role), Some("Роль"));
        assert_eq!(res.header(LogicalField::Software), Some("ПО"));
        assert_eq!(res.header(LogicalField::Comment), None);
    }

    #[test]
    fn test_normalization_collapses_whitespace_and_case() {
        let res = ColumnResolution::for_headers(&headers(&["  От   КОГО ", "Как  оцифровать"]));
        assert_eq!(res.header(LogicalField::FromHow), Some("  От   КОГО "));
        assert_eq!(res.header(LogicalField::HowToDigitize), Some("Как  оцифровать"));
    }

    #[test]
    fn test_exact_match_beats_earlier_substring_match() {
        let res = ColumnResolution::for_headers(&headers(&["Роль (описание)", "Роль"]));
        assert_eq!(res.header(LogicalField::Role), Some("Роль"));
    }

    #[test]
    fn test_substring_match_uses_file_order() {
        let res = ColumnResolution::for_headers(&headers(&["Код", "Роль в процессе", "Роль сотрудника"]));
        assert_eq!(res.header(LogicalField::Role), Some("Роль в процессе"));
    }

    #[test]
    fn test_candidate_priority_in_substring_phase() {
        let cands: &[&str] = &["бета", "альфа"];
        let res = ColumnResolution::resolve(&headers(&["альфа-колонка", "бета-колонка"]), |f| {
            if f == LogicalField::Metric {
                cands
            } else {
                &[]
            }
        });
        assert_eq!(res.header(LogicalField::Metric), Some("бета-колонка"));
    }

    #[test]
    fn test_short_candidate_is_exact_only() {
        let res = ColumnResolution::for_headers(&headers(&["Подразделение"]));
        assert_eq!(res.header(LogicalField::Software), None);
    }

    #[test]
    fn test_disjoint_or_empty_inputs_are_unresolved() {
        let res = ColumnResolution::for_headers(&headers(&["foo", "bar"]));
        assert_eq!(res.unresolved().len(), LogicalField::ALL.len());

        let res = ColumnResolution::for_headers(&[]);
        assert_eq!(res.unresolved().len(), LogicalField::ALL.len());

        let res = ColumnResolution::resolve(&headers(&["function"]), |_| &[]);
        assert_eq!(res.header(LogicalField::Function), None);
    }
}
