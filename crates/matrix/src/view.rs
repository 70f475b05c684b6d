use crate::field::LogicalField;
use crate::record::Record;
use crate::resolver::ColumnResolution;
use crate::roles;

/// Строка таблицы, готовая к отображению или экспорту
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayRow {
    /// Значения в порядке [`LogicalField::ALL`]
    pub cells: [String; 15],
    /// Описание роли для подсказки; пусто для неизвестного кода
    pub role_tooltip: String,
}

impl DisplayRow {
    pub fn cell(&self, field: LogicalField) -> &str {
        &self.cells[field.index()]
    }
}

pub fn project(record: &Record, resolution: &ColumnResolution) -> DisplayRow {
    let cells: [String; 15] = LogicalField::ALL.map(|field| {
        resolution
            .header(field)
            .and_then(|h| record.get(h))
            .unwrap_or_default()
            .to_string()
    });

    let role_tooltip = roles::describe(&cells[LogicalField::Role.index()])
        .unwrap_or_default()
        .to_string();

    DisplayRow { cells, role_tooltip }
}

pub fn display_rows<'a, I>(rows: I, resolution: &ColumnResolution) -> Vec<DisplayRow>
where
    I: IntoIterator<Item = &'a Record>,
{
    rows.into_iter().map(|r| project(r, resolution)).collect()
}
