//! Каскадные фильтры.
//!
//! Набор значений каждого выпадающего списка считается по строкам, прошедшим
//! все *остальные* активные фильтры. Так пользователю никогда не предлагается
//! комбинация, дающая пустую таблицу, а собственный выбор в списке не сужает
//! сам этот список.

use crate::collation;
use crate::field::FilterField;
use crate::record::{Dataset, Record};
use crate::resolver::ColumnResolution;
use std::collections::{BTreeMap, BTreeSet};

/// Текущие значения фильтров. Отсутствие ключа означает «Все».
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterAssignment {
    values: BTreeMap<FilterField, String>,
}

impl FilterAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FilterField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Пустая строка снимает фильтр
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.values.remove(&field);
        } else {
            self.values.insert(field, value);
        }
    }

    pub fn unset(&mut self, field: FilterField) {
        self.values.remove(&field);
    }

    pub fn with(mut self, field: FilterField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Копия без ограничения по `field`
    pub fn without(&self, field: FilterField) -> Self {
        let mut copy = self.clone();
        copy.unset(field);
        copy
    }

    /// Снимает все фильтры
    pub fn cleared(&self) -> Self {
        Self::new()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Активные фильтры в порядке [`FilterField::ALL`]
    pub fn active(&self) -> impl Iterator<Item = (FilterField, &str)> + '_ {
        self.values.iter().map(|(f, v)| (*f, v.as_str()))
    }
}

fn record_matches(record: &Record, resolution: &ColumnResolution, assignment: &FilterAssignment) -> bool {
    assignment.active().all(|(field, value)| {
        match resolution.header(field.logical()) {
            Some(header) => record.get(header).unwrap_or("") == value,
            // несопоставленная колонка ничего не отсекает
            None => true,
        }
    })
}

/// Индексы строк набора, прошедших фильтры, в исходном порядке
pub fn filtered_indices(
    dataset: &Dataset,
    resolution: &ColumnResolution,
    assignment: &FilterAssignment,
) -> Vec<usize> {
    dataset
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, r)| record_matches(r, resolution, assignment))
        .map(|(idx, _)| idx)
        .collect()
}

pub fn filtered_rows<'d>(
    dataset: &'d Dataset,
    resolution: &ColumnResolution,
    assignment: &FilterAssignment,
) -> Vec<&'d Record> {
    dataset
        .rows()
        .iter()
        .filter(|r| record_matches(r, resolution, assignment))
        .collect()
}

/// Значения, доступные для `target` при всех остальных фильтрах.
///
/// Собственное значение `target` в `assignment` не учитывается. Пустые
/// значения не попадают в список; результат отсортирован [`collation::compare`].
pub fn reachable_values(
    dataset: &Dataset,
    resolution: &ColumnResolution,
    assignment: &FilterAssignment,
    target: FilterField,
) -> Vec<String> {
    let Some(header) = resolution.header(target.logical()) else {
        return Vec::new();
    };

    let others = assignment.without(target);
    let distinct: BTreeSet<&str> = dataset
        .rows()
        .iter()
        .filter(|r| record_matches(r, resolution, &others))
        .filter_map(|r| r.get(header))
        .filter(|v| !v.is_empty())
        .collect();

    let mut values: Vec<String> = distinct.into_iter().map(str::to_string).collect();
    collation::sort_values(&mut values);
    values
}

/// Сохраняет прежний выбор, если он всё ещё достижим, иначе сбрасывает в «Все»
pub fn reconcile_selection(previous: Option<&str>, reachable: &[String]) -> Option<String> {
    match previous {
        Some(value) if !value.is_empty() && reachable.iter().any(|r| r == value) => {
            Some(value.to_string())
        }
        _ => None,
    }
}

/// Согласует все фильтры после изменения.
///
/// Измерения проверяются по очереди, только что изменённое (`changed`)
/// последним, чтобы при конфликте сбрасывался более старый выбор. Каждый
/// сброс только расширяет остальные списки, поэтому один проход даёт
/// неподвижную точку: повторный вызов ничего не меняет.
pub fn reconcile(
    dataset: &Dataset,
    resolution: &ColumnResolution,
    assignment: &FilterAssignment,
    changed: Option<FilterField>,
) -> FilterAssignment {
    let mut result = assignment.clone();
    let order = FilterField::ALL
        .into_iter()
        .filter(|f| Some(*f) != changed)
        .chain(changed);

    for field in order {
        let Some(previous) = result.get(field) else {
            continue;
        };
        let reachable = reachable_values(dataset, resolution, &result, field);
        if reconcile_selection(Some(previous), &reachable).is_none() {
            log::debug!("Filter {} reset: {:?} is no longer reachable", field.key(), previous);
            result.unset(field);
        }
    }

    result
}

/// Принимает сохранённые фильтры по одному в порядке [`FilterField::ALL`],
/// оставляя только значения, совместимые с уже принятыми.
///
/// В отличие от [`reconcile`], одно устаревшее значение не тянет за собой
/// сброс остальных: после каждого шага есть хотя бы одна строка, подходящая
/// под все принятые фильтры.
pub fn restore_assignment(
    dataset: &Dataset,
    resolution: &ColumnResolution,
    stored: &FilterAssignment,
) -> FilterAssignment {
    let mut result = FilterAssignment::new();
    for (field, value) in stored.active() {
        let reachable = reachable_values(dataset, resolution, &result, field);
        if reachable.iter().any(|v| v == value) {
            result.set(field, value);
        } else {
            log::info!("Stored filter {} = {:?} dropped", field.key(), value);
        }
    }
    result
}

/// Всё, что нужно отрисовать после пересчёта: списки значений и видимые строки
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterView {
    pub assignment: FilterAssignment,
    pub options: BTreeMap<FilterField, Vec<String>>,
    /// Индексы видимых строк в наборе данных
    pub rows: Vec<usize>,
    pub total: usize,
}

impl FilterView {
    pub fn compute(dataset: &Dataset, resolution: &ColumnResolution, assignment: &FilterAssignment) -> Self {
        let options = FilterField::ALL
            .into_iter()
            .map(|f| (f, reachable_values(dataset, resolution, assignment, f)))
            .collect();

        Self {
            assignment: assignment.clone(),
            options,
            rows: filtered_indices(dataset, resolution, assignment),
            total: dataset.len(),
        }
    }

    pub fn options(&self, field: FilterField) -> &[String] {
        self.options.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::LogicalField;
    use pretty_assertions::assert_eq;

    const HEADERS: [&str; 4] = ["department", "position", "role", "function"];

    fn dataset(rows: &[[&str; 4]]) -> Dataset {
        Dataset::from_rows(
            HEADERS.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    fn sample() -> Dataset {
        dataset(&[
            ["IT", "Engineer", "В", "Разработка"],
            ["IT", "Lead", "О", "Разработка"],
            ["HR", "Manager", "К", "Найм"],
        ])
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_filters_returns_everything() {
        let ds = sample();
        let res = ColumnResolution::for_dataset(&ds);
        let rows = filtered_rows(&ds, &res, &FilterAssignment::new());
        assert_eq!(rows.len(), 3);
        assert_eq!(
            reachable_values(&ds, &res, &FilterAssignment::new(), FilterField::Department),
            strings(&["HR", "IT"])
        );
    }

    #[test]
    fn test_department_narrows_other_dimensions() {
        let ds = sample();
        let res = ColumnResolution::for_dataset(&ds);
        let a = FilterAssignment::new().with(FilterField::Department, "IT");
        let rows = filtered_rows(&ds, &res, &a);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.get("department") == Some("IT")));
        assert_eq!(
            reachable_values(&ds, &res, &a, FilterField::Role),
            strings(&["В", "О"])
        );
        // собственный фильтр не сужает свой список
        assert_eq!(
            reachable_values(&ds, &res, &a, FilterField::Department),
            strings(&["HR", "IT"])
        );
    }

    #[test]
    fn test_impossible_combination_gives_empty_rows() {
        let ds = sample();
        let res = ColumnResolution::for_dataset(&ds);
        let a = FilterAssignment::new()
            .with(FilterField::Department, "IT")
            .with(FilterField::Position, "Manager");
        assert!(filtered_rows(&ds, &res, &a).is_empty());
        assert!(FilterView::compute(&ds, &res, &a).is_empty());
    }

    #[test]
    fn test_narrowing_resets_unreachable_role() {
        let ds = sample();
        let res = ColumnResolution::for_dataset(&ds);
        let a = FilterAssignment::new()
            .with(FilterField::Role, "К")
            .with(FilterField::Department, "IT");
        let reconciled = reconcile(&ds, &res, &a, Some(FilterField::Department));
        assert_eq!(reconciled.get(FilterField::Role), None);
        assert_eq!(reconciled.get(FilterField::Department), Some("IT"));
    }

    #[test]
    fn test_unresolved_field_never_filters() {
        let ds = sample();
        let res = ColumnResolution::for_dataset(&ds);
        assert!(!res.is_resolved(LogicalField::Division));
        let a = FilterAssignment::new().with(FilterField::Division, "Несуществующий");
        assert_eq!(filtered_rows(&ds, &res, &a).len(), 3);
        assert!(reachable_values(&ds, &res, &a, FilterField::Division).is_empty());
    }

    #[test]
    fn test_empty_dataset() {
        let ds = dataset(&[]);
        let res = ColumnResolution::for_dataset(&ds);
        let a = FilterAssignment::new().with(FilterField::Role, "О");
        assert!(filtered_rows(&ds, &res, &a).is_empty());
        for field in FilterField::ALL {
            assert!(reachable_values(&ds, &res, &a, field).is_empty());
        }
        assert!(reconcile(&ds, &res, &a, None).is_empty());
    }

    #[test]
    fn test_empty_cells_are_not_offered() {
        let ds = dataset(&[["IT", "", "О", ""], ["", "Lead", "О", ""]]);
        let res = ColumnResolution::for_dataset(&ds);
        let a = FilterAssignment::new();
        assert_eq!(reachable_values(&ds, &res, &a, FilterField::Department), strings(&["IT"]));
        assert!(reachable_values(&ds, &res, &a, FilterField::Function).is_empty());
    }

    #[test]
    fn test_reconcile_selection_rules() {
        let reachable = strings(&["IT", "HR"]);
        assert_eq!(reconcile_selection(None, &reachable), None);
        assert_eq!(reconcile_selection(Some(""), &reachable), None);
        assert_eq!(reconcile_selection(Some("IT"), &reachable), Some("IT".to_string()));
        assert_eq!(reconcile_selection(Some("Sales"), &reachable), None);
    }

    #[test]
    fn test_recently_changed_filter_wins_conflict() {
        let ds = sample();
        let res = ColumnResolution::for_dataset(&ds);
        // "HR" + "Разработка" несовместимы; пользователь только что выбрал функцию
        let a = FilterAssignment::new()
            .with(FilterField::Department, "HR")
            .with(FilterField::Function, "Разработка");
        let reconciled = reconcile(&ds, &res, &a, Some(FilterField::Function));
        assert_eq!(reconciled.get(FilterField::Function), Some("Разработка"));
        assert_eq!(reconciled.get(FilterField::Department), None);
    }

    #[test]
    fn test_restore_keeps_compatible_values() {
        let ds = sample();
        let res = ColumnResolution::for_dataset(&ds);
        let stored = FilterAssignment::new()
            .with(FilterField::Department, "HR")
            .with(FilterField::Position, "Уволен")
            .with(FilterField::Role, "К");
        let restored = restore_assignment(&ds, &res, &stored);
        assert_eq!(
            restored,
            FilterAssignment::new()
                .with(FilterField::Department, "HR")
                .with(FilterField::Role, "К")
        );
        assert_eq!(reconcile(&ds, &res, &restored, None), restored);
    }

    #[test]
    fn test_cleared_drops_every_filter() {
        let a = FilterAssignment::new()
            .with(FilterField::Function, "Закупки")
            .with(FilterField::Role, "О");
        let cleared = a.cleared();
        assert!(cleared.is_empty());
        assert_eq!(cleared, FilterAssignment::new());
        assert_eq!(a.active().count(), 2);
    }

    #[test]
    fn test_set_empty_value_unsets() {
        let mut a = FilterAssignment::new().with(FilterField::Role, "О");
        a.set(FilterField::Role, "");
        assert!(a.is_empty());
    }

    #[test]
    fn test_view_options_are_sorted() {
        let ds = dataset(&[
            ["Склад", "", "", ""],
            ["бухгалтерия", "", "", ""],
            ["Администрация", "", "", ""],
        ]);
        let res = ColumnResolution::for_dataset(&ds);
        let view = FilterView::compute(&ds, &res, &FilterAssignment::new());
        assert_eq!(
            view.options(FilterField::Department),
            &strings(&["Администрация", "бухгалтерия", "Склад"])[..]
        );
        assert_eq!(view.rows, vec![0, 1, 2]);
        assert_eq!(view.total, 3);
    }
}
