use std::path::{Path, PathBuf};

use anyhow::Context;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::handout::HandoutRecord;

pub const OUTPUT_FILE_NAME: &str = "achieve_handout_web_data.xlsx";
pub const SHEET_NAME: &str = "Handouts";
pub const HEADERS: [&str; 3] = ["Title", "URL", "Resource Link"];

const URL_COLUMN: u16 = 1;
const COLUMN_WIDTHS: [f64; 3] = [48.0, 60.0, 60.0];

/// The user's documents folder, or `~/Documents` where the platform has no notion of one.
pub fn documents_dir() -> anyhow::Result<PathBuf> {
    dirs::document_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
        .context("couldn't locate the user's documents directory")
}

/// Sheet rows in output order, one per handout, without the header.
fn rows(handouts: &[HandoutRecord]) -> impl Iterator<Item = [&str; 3]> {
    handouts
        .iter()
        .map(|h| [h.title.as_str(), h.url.as_str(), h.resource_link.as_str()])
}

/// Writes the handouts to `dir/achieve_handout_web_data.xlsx`, replacing any
/// previous export, and returns the path written.
pub fn export(handouts: &[HandoutRecord], dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("couldn't create output directory {}", dir.display()))?;
    let output_file = dir.join(OUTPUT_FILE_NAME);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    fill_worksheet(worksheet, handouts)?;
    workbook
        .save(&output_file)
        .with_context(|| format!("couldn't write {}", output_file.display()))?;

    log::info!("wrote {} handouts to {}", handouts.len(), output_file.display());
    Ok(output_file)
}

fn fill_worksheet(worksheet: &mut Worksheet, handouts: &[HandoutRecord]) -> Result<(), XlsxError> {
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    for (col, (header, width)) in HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *header, &header_format)?;
        worksheet.set_column_width(col, width)?;
    }

    for (row, cells) in rows(handouts).enumerate() {
        let row = row as u32 + 1;
        for (col, cell) in cells.into_iter().enumerate() {
            let col = col as u16;
            if col == URL_COLUMN && !cell.is_empty() {
                write_link(worksheet, row, col, cell)?;
            } else {
                worksheet.write_string(row, col, cell)?;
            }
        }
    }
    Ok(())
}

// Relative or odd-scheme URLs can't be hyperlinks in xlsx; keep them as text.
fn write_link(worksheet: &mut Worksheet, row: u32, col: u16, url: &str) -> Result<(), XlsxError> {
    if let Err(e) = worksheet.write_url(row, col, url) {
        log::debug!("writing {url:?} as plain text: {e}");
        worksheet.write_string(row, col, url)?;
    }
    Ok(())
}

/// Opens the export with the host's default application. Failure only warns.
pub fn open_export(path: &Path) {
    if let Err(e) = open::that(path) {
        log::warn!("couldn't open {}: {e}", path.display());
    }
}
