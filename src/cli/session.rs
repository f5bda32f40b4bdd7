//! The interactive operator session.
//!
//! A thin driver around the core: it collects already-parsed data from
//! menu prompts, calls into the lot, and displays the returned results.
//! No failure here is fatal; every error is reported and the menu loop
//! continues.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use chrono::Local;
use dialoguer::{Confirm, Input, Select};
use non_empty_string::NonEmptyString;
use parkade::{ClockTime, Lot, RecordId, Report};
use tracing::instrument;

use super::terminal::Colorize;

const BANNER_RULE: &str = "+==========================================+";
const BANNER_WIDTH: usize = 45;

/// One operator session over a single in-memory lot.
pub struct Session {
    lot: Lot,
    export_dir: PathBuf,
}

impl Session {
    pub const fn new(lot: Lot, export_dir: PathBuf) -> Self {
        Self { lot, export_dir }
    }

    /// Runs the menu loop until the operator quits.
    ///
    /// Quitting performs a final save, matching the ledger's
    /// session-only lifetime: the exported file is the only thing that
    /// outlives the process.
    pub fn run(mut self) -> anyhow::Result<()> {
        banner("PARKADE PARKING LEDGER");

        loop {
            println!();
            println!(
                " Available spaces: {:>3} / {}",
                self.lot.available(),
                self.lot.capacity()
            );

            let choice = Select::new()
                .with_prompt("Menu")
                .items(&[
                    "Vehicle entry",
                    "Vehicle exit",
                    "View ledger",
                    "Save ledger to file",
                    "Quit",
                ])
                .default(0)
                .interact()?;

            match choice {
                0 => self.vehicle_entry()?,
                1 => self.vehicle_exit()?,
                2 => self.view_ledger()?,
                3 => self.save_ledger(),
                _ => {
                    self.save_ledger();
                    println!("Exiting the program. Goodbye!");
                    return Ok(());
                }
            }
        }
    }

    #[instrument(skip(self))]
    fn vehicle_entry(&mut self) -> anyhow::Result<()> {
        if self.lot.is_full() {
            println!("{}", "Parking full: no available spaces.".warning());
            return Ok(());
        }

        let plate = prompt_plate()?;
        let entry = prompt_time("Entry time (HH:MM)")?;

        match self.lot.admit(plate, entry) {
            Ok(_) => {
                println!("{}", "Vehicle entered successfully.".success());
                println!("Slots remaining: {}", self.lot.available());
            }
            Err(error) => println!("{}", error.to_string().warning()),
        }
        Ok(())
    }

    #[instrument(skip(self))]
    fn vehicle_exit(&mut self) -> anyhow::Result<()> {
        let parked: Vec<(RecordId, String)> = self
            .lot
            .active()
            .map(|(id, record)| {
                (
                    id,
                    format!("{:<15} entered {}", record.plate(), record.entry()),
                )
            })
            .collect();

        if parked.is_empty() {
            println!("No vehicles are currently parked.");
            return Ok(());
        }

        let labels: Vec<&str> = parked.iter().map(|(_, label)| label.as_str()).collect();
        let selection = Select::new()
            .with_prompt("Select a vehicle to exit")
            .items(&labels)
            .default(0)
            .interact()?;
        let id = parked[selection].0;

        let exit = prompt_time("Exit time (HH:MM)")?;
        let card_presented = Confirm::new()
            .with_prompt("Do you have your parking card?")
            .default(true)
            .interact()?;
        let overnight = Confirm::new()
            .with_prompt("Was the car parked overnight?")
            .default(false)
            .interact()?;

        match self.lot.release(id, exit, overnight, card_presented) {
            Ok(fee) => self.print_exit_summary(id, fee),
            Err(error) => println!("{}", error.to_string().warning()),
        }
        Ok(())
    }

    fn print_exit_summary(&self, id: RecordId, fee: f64) {
        let Some(record) = self.lot.record(id) else {
            return;
        };

        banner("EXIT SUMMARY");
        println!(" License plate: {}", record.plate());
        println!(" Entry time:    {}", record.entry());
        if let Some(departure) = record.departure() {
            println!(" Exit time:     {}", departure.exit);
        }
        println!(" Parking fee:   {fee:.2} units");
        println!("{}", "-".repeat(BANNER_WIDTH).dim());
        println!("{}", "Vehicle exited successfully.".success());
        println!("Slots remaining: {}", self.lot.available());
    }

    #[instrument(skip(self))]
    fn view_ledger(&self) -> anyhow::Result<()> {
        let report = Report::new(self.lot.records());
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        report.write_to(&mut lock)?;
        lock.flush()?;
        Ok(())
    }

    /// Exports the ledger, reporting failure without aborting: the
    /// in-memory ledger is never lost to an export error.
    #[instrument(skip(self))]
    fn save_ledger(&self) {
        let report = Report::new(self.lot.records());
        match report.export(&self.export_dir, Local::now()) {
            Ok(path) => println!(
                "{}",
                format!("Parking logs saved to '{}'.", path.display()).success()
            ),
            Err(error) => println!(
                "{}",
                format!("Could not save parking logs: {error}").warning()
            ),
        }
    }
}

fn banner(title: &str) {
    let pad = BANNER_WIDTH.saturating_sub(title.len()) / 2;
    println!("{BANNER_RULE}");
    println!("{}{title}", " ".repeat(pad));
    println!("{BANNER_RULE}");
}

/// Prompts for a license plate, re-prompting until it is non-empty.
fn prompt_plate() -> anyhow::Result<NonEmptyString> {
    let raw: String = Input::new()
        .with_prompt("License plate")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("license plate must not be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    NonEmptyString::new(raw.trim().to_string())
        .map_err(|_| anyhow::anyhow!("license plate must not be empty"))
}

/// Prompts for an `HH:MM` time, re-prompting on malformed input so the
/// core is only ever handed validated values.
fn prompt_time(prompt: &str) -> anyhow::Result<ClockTime> {
    let raw: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| input.parse::<ClockTime>().map(|_| ()))
        .interact_text()?;

    Ok(raw.parse()?)
}
