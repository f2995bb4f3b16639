//! Write a [`Report`] to an `.xlsx` workbook.
//!
//! One worksheet per table, header row in bold, columns sized from
//! [`Table::column_widths`].

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use tracing::debug;

use crate::error::AppError;
use crate::report::{Cell, Report, Table};

/// Write `report` to `path`, replacing any existing file.
pub fn write_report(path: &Path, report: &Report) -> Result<(), AppError> {
    let write_err = |e: XlsxError| AppError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let header = Format::new().set_bold();
    let mut workbook = Workbook::new();

    for table in &report.tables {
        let sheet = workbook.add_worksheet();
        write_table(sheet, table, &header).map_err(write_err)?;
        debug!(sheet = %table.name, rows = table.rows.len(), "wrote worksheet");
    }

    workbook.save(path).map_err(write_err)?;
    Ok(())
}

fn write_table(sheet: &mut Worksheet, table: &Table, header: &Format) -> Result<(), XlsxError> {
    sheet.set_name(&table.name)?;

    for (col, title) in table.headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, title, header)?;
    }

    for (i, row) in table.rows.iter().enumerate() {
        let r = i as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            let c = col as u16;
            match cell {
                // Empty text (e.g. a record without a CVE id) stays a blank cell.
                Cell::Text(s) if s.is_empty() => {}
                Cell::Text(s) => {
                    sheet.write_string(r, c, s)?;
                }
                Cell::Number(n) => {
                    sheet.write_number(r, c, *n)?;
                }
                Cell::Count(n) => {
                    sheet.write_number(r, c, *n as f64)?;
                }
            }
        }
    }

    for (col, width) in table.column_widths().into_iter().enumerate() {
        sheet.set_column_width(col as u16, width as f64)?;
    }

    Ok(())
}
