//! Bulk import of attendees from a spreadsheet.
//!
//! The first row is a header and is always skipped. Every other row is read
//! as `first name, last name, table, guests`. Rows missing a name or with a
//! table outside `principal` / 1..=22 are dropped; a bad or missing guest
//! count becomes 0 and anything above the maximum is clamped. Nothing is
//! appended unless the whole file could be read.

use crate::commands::{CmdMessage, CmdResult};
use crate::config::GuestConfig;
use crate::error::{GuestError, Result};
use crate::model::{Attendee, Table, MAX_GUESTS};
use crate::sheet::{self, Cell, Row};
use std::path::Path;
use tracing::debug;

pub fn run(attendees: &mut Vec<Attendee>, path: &Path, config: &GuestConfig) -> Result<CmdResult> {
    if !config.accepts_import(path) {
        return Err(GuestError::Import(format!(
            "{} is not one of the accepted file types ({})",
            path.display(),
            config.import_extensions.join(" ")
        )));
    }

    let rows = sheet::read_rows(path)?;
    let imported = normalize_rows(&rows);
    debug!(
        rows = rows.len().saturating_sub(1),
        accepted = imported.len(),
        "normalized import rows"
    );

    attendees.extend(imported.iter().cloned());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} attendees",
        imported.len()
    )));
    Ok(result.with_affected(imported))
}

/// Turns raw rows (header included) into fresh attendees.
pub fn normalize_rows(rows: &[Row]) -> Vec<Attendee> {
    rows.iter()
        .enumerate()
        .skip(1)
        .filter_map(|(line, row)| {
            let attendee = normalize_row(row);
            if attendee.is_none() {
                debug!(row = line + 1, "dropping import row");
            }
            attendee
        })
        .collect()
}

fn normalize_row(row: &[Cell]) -> Option<Attendee> {
    let cell = |i: usize| row.get(i).cloned().unwrap_or(Cell::Empty);

    let first_name = cell(0).text()?;
    let last_name = cell(1).text()?;
    let table = parse_table(&cell(2))?;
    let guests = parse_guests(&cell(3));

    Some(Attendee::new(&first_name, &last_name, table, guests))
}

fn parse_table(cell: &Cell) -> Option<Table> {
    let text = cell.text()?;
    if text.eq_ignore_ascii_case("principal") {
        return Some(Table::Principal);
    }
    Table::from_number(cell.number()?)
}

fn parse_guests(cell: &Cell) -> u8 {
    match cell.number() {
        Some(n) => n.trunc().clamp(0.0, f64::from(MAX_GUESTS)) as u8,
        None => 0,
    }
}
