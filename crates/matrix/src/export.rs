//! Экспорт отфильтрованной матрицы в XLSX.
//!
//! Книга собирается в памяти; скачивание файла делает фронтенд.

use crate::error::ExportError;
use crate::field::LogicalField;
use crate::view::DisplayRow;
use chrono::{DateTime, Utc};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Ширина колонки в символах Excel
fn column_width(field: LogicalField) -> f64 {
    match field {
        LogicalField::Number => 6.0,
        LogicalField::Role => 8.0,
        LogicalField::Function | LogicalField::Comment => 40.0,
        LogicalField::Department | LogicalField::Division | LogicalField::Position => 22.0,
        _ => 28.0,
    }
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_text_wrap()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_background_color(Color::RGB(0xD9E1F2))
        .set_border(FormatBorder::Thin)
}

fn cell_format() -> Format {
    Format::new()
        .set_text_wrap()
        .set_align(FormatAlign::Top)
        .set_border(FormatBorder::Thin)
}

/// Собирает книгу с одним листом: строка заголовков и строки матрицы
pub fn build_workbook(rows: &[DisplayRow], sheet_name: &str) -> Result<Vec<u8>, ExportError> {
    if rows.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    let header = header_format();
    let body = cell_format();

    for field in LogicalField::ALL {
        let col = field.index() as u16;
        worksheet.set_column_width(col, column_width(field))?;
        worksheet.write_string_with_format(0, col, field.title(), &header)?;
    }

    for (idx, row) in rows.iter().enumerate() {
        let excel_row = idx as u32 + 1;
        for field in LogicalField::ALL {
            worksheet.write_string_with_format(excel_row, field.index() as u16, row.cell(field), &body)?;
        }
    }

    let last_col = (LogicalField::ALL.len() - 1) as u16;
    worksheet.set_freeze_panes(1, 0)?;
    worksheet.autofilter(0, 0, rows.len() as u32, last_col)?;

    let bytes = workbook.save_to_buffer()?;
    log::info!("XLSX export: {} rows, {} bytes", rows.len(), bytes.len());
    Ok(bytes)
}

/// Имя файла вида `functional-matrix-20240315-140226.xlsx`
pub fn export_file_name(prefix: &str, now: DateTime<Utc>) -> String {
    format!("{}-{}.xlsx", prefix, now.format("%Y%m%d-%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn row(function: &str, role: &str) -> DisplayRow {
        let mut r = DisplayRow::default();
        r.cells[LogicalField::Function.index()] = function.to_string();
        r.cells[LogicalField::Role.index()] = role.to_string();
        r
    }

    #[test]
    fn test_workbook_is_zip_archive() {
        let bytes = build_workbook(&[row("Закупки", "О"), row("Продажи", "В")], "Матрица").unwrap();
        assert!(bytes.len() > 100);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_empty_export_is_rejected() {
        assert!(matches!(
            build_workbook(&[], "Матрица"),
            Err(ExportError::NothingToExport)
        ));
    }

    #[test]
    fn test_invalid_sheet_name_is_reported() {
        // Excel запрещает `[` и `]` в именах листов
        assert!(matches!(
            build_workbook(&[row("a", "b")], "[bad]"),
            Err(ExportError::Xlsx(_))
        ));
    }

    #[test]
    fn test_export_file_name() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(
            export_file_name("functional-matrix", now),
            "functional-matrix-20240315-140226.xlsx"
        );
    }
}
