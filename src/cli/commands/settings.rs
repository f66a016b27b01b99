//! Cost-sheet commands - show the sheets, edit them field by field.
//!
//! Edits are merge-style: only the flags the user passes change, the rest of
//! the sheet is kept as stored. Clamping happens in the core savers.

use crate::{core::settings as settings_ops, errors::Result};
use clap::Subcommand;
use sea_orm::DatabaseConnection;

/// Subcommands for the fixed-cost sheet, variable-cost sheet, and labor model
#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Print all three cost sheets
    Show,

    /// Edit the fixed-cost sheet (unspecified fields keep their value)
    SetFixed {
        /// Monthly rent
        #[arg(long)]
        rent: Option<f64>,

        /// Monthly water bill
        #[arg(long)]
        water: Option<f64>,

        /// Monthly electricity bill
        #[arg(long)]
        electricity: Option<f64>,

        /// Monthly internet bill
        #[arg(long)]
        internet: Option<f64>,

        /// Monthly accounting fees
        #[arg(long)]
        accounting: Option<f64>,

        /// Monthly marketing spend
        #[arg(long)]
        marketing: Option<f64>,

        /// Monthly taxes
        #[arg(long)]
        taxes: Option<f64>,

        /// Other monthly fixed costs
        #[arg(long)]
        other: Option<f64>,

        /// Units the workshop can produce per month
        #[arg(long)]
        capacity: Option<f64>,
    },

    /// Edit the variable-cost sheet (unspecified fields keep their value)
    SetVariable {
        /// Sublimation paper cost per sheet
        #[arg(long)]
        sublimation_paper: Option<f64>,

        /// Photo paper cost per sheet
        #[arg(long)]
        photo_paper: Option<f64>,

        /// DTF film cost per sheet
        #[arg(long)]
        dtf_film: Option<f64>,

        /// Xerox print cost per sheet
        #[arg(long)]
        xerox_cost: Option<f64>,

        /// Adhesive vinyl cost per sheet
        #[arg(long)]
        adhesive_vinyl: Option<f64>,

        /// Power film cost per sheet
        #[arg(long)]
        power_film: Option<f64>,

        /// Ink cost per unit
        #[arg(long)]
        ink: Option<f64>,

        /// Heat press energy cost per unit
        #[arg(long)]
        press_energy: Option<f64>,

        /// Printer energy cost per unit
        #[arg(long)]
        printer_energy: Option<f64>,

        /// Card processing fee percent
        #[arg(long)]
        card_fee: Option<f64>,

        /// Material waste percent
        #[arg(long)]
        waste: Option<f64>,
    },

    /// Set the labor schedule; the hourly rate is re-derived from it
    SetLabor {
        /// Monthly salary target
        #[arg(long)]
        salary: f64,

        /// Working days per month
        #[arg(long, default_value_t = 22.0)]
        days: f64,

        /// Working hours per day
        #[arg(long, default_value_t = 8.0)]
        hours: f64,
    },
}

/// Executes a settings subcommand.
///
/// # Errors
/// Returns an error if a sheet is missing or a save fails.
pub async fn run(db: &DatabaseConnection, command: SettingsCommand) -> Result<()> {
    match command {
        SettingsCommand::Show => show(db).await?,

        SettingsCommand::SetFixed {
            rent,
            water,
            electricity,
            internet,
            accounting,
            marketing,
            taxes,
            other,
            capacity,
        } => {
            let mut sheet = settings_ops::get_fixed_costs(db).await?;
            if let Some(v) = rent {
                sheet.rent = v;
            }
            if let Some(v) = water {
                sheet.water = v;
            }
            if let Some(v) = electricity {
                sheet.electricity = v;
            }
            if let Some(v) = internet {
                sheet.internet = v;
            }
            if let Some(v) = accounting {
                sheet.accounting = v;
            }
            if let Some(v) = marketing {
                sheet.marketing = v;
            }
            if let Some(v) = taxes {
                sheet.taxes = v;
            }
            if let Some(v) = other {
                sheet.other = v;
            }
            if let Some(v) = capacity {
                sheet.monthly_capacity = v;
            }
            settings_ops::save_fixed_costs(db, sheet).await?;
            println!("Fixed-cost sheet saved.");
        }

        SettingsCommand::SetVariable {
            sublimation_paper,
            photo_paper,
            dtf_film,
            xerox_cost,
            adhesive_vinyl,
            power_film,
            ink,
            press_energy,
            printer_energy,
            card_fee,
            waste,
        } => {
            let mut sheet = settings_ops::get_variable_costs(db).await?;
            if let Some(v) = sublimation_paper {
                sheet.sublimation_paper = v;
            }
            if let Some(v) = photo_paper {
                sheet.photo_paper = v;
            }
            if let Some(v) = dtf_film {
                sheet.dtf_film = v;
            }
            if let Some(v) = xerox_cost {
                sheet.xerox_cost = v;
            }
            if let Some(v) = adhesive_vinyl {
                sheet.adhesive_vinyl = v;
            }
            if let Some(v) = power_film {
                sheet.power_film = v;
            }
            if let Some(v) = ink {
                sheet.ink = v;
            }
            if let Some(v) = press_energy {
                sheet.press_energy = v;
            }
            if let Some(v) = printer_energy {
                sheet.printer_energy = v;
            }
            if let Some(v) = card_fee {
                sheet.card_fee_percent = v;
            }
            if let Some(v) = waste {
                sheet.waste_percent = v;
            }
            settings_ops::save_variable_costs(db, sheet).await?;
            println!("Variable-cost sheet saved.");
        }

        SettingsCommand::SetLabor {
            salary,
            days,
            hours,
        } => {
            let labor = settings_ops::save_labor(db, salary, days, hours).await?;
            println!(
                "Labor model saved: {:.2}/hour ({:.1} days x {:.1} hours)",
                labor.hourly_rate, labor.days_per_month, labor.hours_per_day
            );
        }
    }

    Ok(())
}

async fn show(db: &DatabaseConnection) -> Result<()> {
    let fixed = settings_ops::get_fixed_costs(db).await?;
    let variable = settings_ops::get_variable_costs(db).await?;
    let labor = settings_ops::get_labor(db).await?;

    let total_fixed = fixed.rent
        + fixed.water
        + fixed.electricity
        + fixed.internet
        + fixed.accounting
        + fixed.marketing
        + fixed.taxes
        + fixed.other;

    println!("Fixed costs (monthly)");
    println!("  rent          {:>10.2}", fixed.rent);
    println!("  water         {:>10.2}", fixed.water);
    println!("  electricity   {:>10.2}", fixed.electricity);
    println!("  internet      {:>10.2}", fixed.internet);
    println!("  accounting    {:>10.2}", fixed.accounting);
    println!("  marketing     {:>10.2}", fixed.marketing);
    println!("  taxes         {:>10.2}", fixed.taxes);
    println!("  other         {:>10.2}", fixed.other);
    println!("  total         {total_fixed:>10.2}");
    println!("  capacity      {:>10.1} units/month", fixed.monthly_capacity);
    println!();
    println!("Variable costs (per sheet / per unit)");
    println!("  sublimation paper  {:>10.4}", variable.sublimation_paper);
    println!("  photo paper        {:>10.4}", variable.photo_paper);
    println!("  dtf film           {:>10.4}", variable.dtf_film);
    println!("  xerox              {:>10.4}", variable.xerox_cost);
    println!("  adhesive vinyl     {:>10.4}", variable.adhesive_vinyl);
    println!("  power film         {:>10.4}", variable.power_film);
    println!("  ink                {:>10.4}", variable.ink);
    println!("  press energy       {:>10.4}", variable.press_energy);
    println!("  printer energy     {:>10.4}", variable.printer_energy);
    println!("  card fee           {:>9.2}%", variable.card_fee_percent);
    println!("  waste              {:>9.2}%", variable.waste_percent);
    println!();
    println!("Labor");
    println!("  target salary {:>10.2}", labor.target_salary);
    println!(
        "  schedule      {:>7.1} days x {:.1} hours",
        labor.days_per_month, labor.hours_per_day
    );
    println!("  hourly rate   {:>10.2}", labor.hourly_rate);

    Ok(())
}
