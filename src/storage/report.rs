//! Tabular rendering and file export of the parking ledger.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};

use crate::domain::{ClockTime, Departure, ParkingRecord};

/// The `strftime` pattern for exported ledger filenames, producing names
/// like `ParkingLogs_2025-11-11_15-30.txt`.
const FILENAME_FORMAT: &str = "ParkingLogs_%Y-%m-%d_%H-%M.txt";

const TITLE: &str = "PARKADE PARKING LEDGER";
const BANNER_RULE: &str = "+==========================================+";
const BANNER_WIDTH: usize = 45;

const INDEX_WIDTH: usize = 5;
const PLATE_WIDTH: usize = 15;
const TIME_WIDTH: usize = 15;
const SEPARATOR_WIDTH: usize = 60;

const STILL_PARKED: &str = "[Still Parked]";
const FEE_PLACEHOLDER: &str = "-";

/// A read-only tabular view over the ledger's records.
///
/// Rendering has no side effects: the same records always produce the
/// same output, and the view can be rendered any number of times. One
/// `Report` serves both the on-screen ledger view and the exported file,
/// so the two are always identical.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    records: &'a [ParkingRecord],
}

/// One display row of the ledger table.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    /// 1-based position in the ledger.
    pub index: usize,
    /// The vehicle's license plate.
    pub plate: &'a str,
    /// The rendered entry time.
    pub entry: ClockTime,
    /// The departure, absent while the vehicle is still parked.
    pub departure: Option<Departure>,
}

impl<'a> Report<'a> {
    /// Creates a report over the given records.
    ///
    /// Pass [`Lot::records`](crate::Lot::records); the report borrows the
    /// ledger rather than copying it.
    #[must_use]
    pub const fn new(records: &'a [ParkingRecord]) -> Self {
        Self { records }
    }

    /// The display rows, one per record, in entry order.
    ///
    /// The iterator is lazy and restartable; call it as often as needed.
    pub fn rows(&self) -> impl Iterator<Item = Row<'a>> {
        self.records.iter().enumerate().map(|(i, record)| Row {
            index: i + 1,
            plate: record.plate(),
            entry: record.entry(),
            departure: record.departure().copied(),
        })
    }

    /// Writes the full ledger rendering: title banner, column header,
    /// one line per record, and a closing rule.
    ///
    /// Still-parked rows show `[Still Parked]` in the exit column and a
    /// dash in the fee column.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{BANNER_RULE}")?;
        writeln!(out, "{}", centered(TITLE, BANNER_WIDTH))?;
        writeln!(out, "{BANNER_RULE}")?;

        if self.records.is_empty() {
            writeln!(out, "No vehicles have been logged yet.")?;
            return Ok(());
        }

        writeln!(
            out,
            "{:<INDEX_WIDTH$}{:<PLATE_WIDTH$}{:<TIME_WIDTH$}{:<TIME_WIDTH$}{}",
            "#", "License Plate", "Entry Time", "Exit Time", "Fee"
        )?;
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;

        for row in self.rows() {
            let exit = row
                .departure
                .map_or_else(|| STILL_PARKED.to_string(), |d| d.exit.to_string());
            let fee = row
                .departure
                .map_or_else(|| FEE_PLACEHOLDER.to_string(), |d| format!("{:.2}", d.fee));
            writeln!(
                out,
                "{:<INDEX_WIDTH$}{:<PLATE_WIDTH$}{:<TIME_WIDTH$}{:<TIME_WIDTH$}{}",
                row.index,
                row.plate,
                row.entry.to_string(),
                exit,
                fee
            )?;
        }

        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
    }

    /// Exports the ledger rendering to a timestamped file under `dir`.
    ///
    /// The filename is derived from `at` (the driver passes
    /// `Local::now()`), so each export lands in its own file. Returns the
    /// path of the created file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written; the
    /// in-memory ledger is unaffected either way.
    pub fn export(&self, dir: &Path, at: DateTime<Local>) -> io::Result<PathBuf> {
        let path = dir.join(at.format(FILENAME_FORMAT).to_string());
        tracing::info!(path = %path.display(), "exporting parking ledger");

        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(path)
    }
}

fn centered(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.len()) / 2;
    format!("{}{text}", " ".repeat(pad))
}
