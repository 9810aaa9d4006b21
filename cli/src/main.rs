mod days;
mod logging;
mod statement;
mod tui;

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, ValueEnum};
use remunera_core::{
    parse_amount, parse_amount_field, parse_benefit_input, AddBenefitOutcome, ConfigurationStore,
    DateSelection, FileSettingsRepository, Settings, SettingsRepository,
};
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(name = "remunera")]
#[command(about = "Monthly total compensation statement calculator", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory holding settings.json (defaults to ~/.remunera)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Text,
    Json,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the compensation statement for a month
    Statement {
        /// Reference year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
        /// Reference month, 1-12 (defaults to the current month)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        /// Override the meal-allowance day count instead of using business days
        #[arg(long)]
        days: Option<u32>,
        /// Include the profit-share (PLR) estimate
        #[arg(long)]
        plr: bool,
        /// Leave out the meal voucher
        #[arg(long)]
        no_va: bool,
        /// Add a benefit, e.g. --add "Auxílio Creche=150"
        #[arg(long = "add", value_name = "NAME=VALUE")]
        add: Vec<String>,
        /// Remove a benefit by id
        #[arg(long = "remove", value_name = "ID")]
        remove: Vec<String>,
        /// Override an amount, e.g. --set salary=2500 (prefixes such as "sal" work)
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Write the statement to a file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Show business days for a month, or for every month of a year
    Days {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },
    /// Write the default settings file
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
    /// Open the Terminal User Interface
    Tui,
}

fn resolve_period(year: Option<i32>, month: Option<u32>) -> DateSelection {
    let current = DateSelection::current();
    DateSelection::new(
        year.unwrap_or(current.year),
        month.map(|m| m as i32 - 1).unwrap_or(current.month as i32),
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let repo = FileSettingsRepository::new(cli.data_dir.clone())?;
    let settings = repo.load()?;

    let in_tui = matches!(cli.command, None | Some(Commands::Tui));
    let log_file = if in_tui {
        Some(logging::log_file_path(cli.data_dir.clone())?)
    } else {
        None
    };
    logging::init_logging(cli.verbose, settings.log_level.as_deref(), log_file)?;
    debug!("{}", repo.describe_source());

    match cli.command {
        Some(Commands::Statement { year, month, days, plr, no_va, add, remove, set, format, output }) => {
            let period = resolve_period(year, month);
            let mut store = ConfigurationStore::with_template(period, settings.profile);

            for assignment in &set {
                let (key, value) = assignment.split_once('=')
                    .ok_or_else(|| anyhow!("Expected FIELD=VALUE, got '{}'", assignment))?;
                let field = parse_amount_field(key.trim())?;
                let amount = parse_amount(value)
                    .ok_or_else(|| anyhow!("Invalid amount '{}' for {}", value, field.name()))?;
                store.set_amount(field, amount)?;
            }
            if plr {
                store.set_plr_enabled(true);
            }
            if no_va {
                store.set_va_enabled(false);
            }
            if let Some(days) = days {
                store.set_refectory_days(days);
            }
            for entry in &add {
                let Some(input) = parse_benefit_input(entry) else {
                    println!("Warning: Expected NAME=VALUE, got '{}'", entry);
                    continue;
                };
                if let AddBenefitOutcome::Rejected(reason) = store.add_benefit(&input.name, &input.value) {
                    println!("Warning: Benefit '{}' ignored: {}", entry, reason);
                }
            }
            for id in &remove {
                match store.remove_benefit(id) {
                    Ok(Some(removed)) => debug!("Removed {}", removed.name),
                    Ok(None) => println!("Warning: No benefit with id '{}'", id),
                    Err(e) => println!("Warning: {}", e),
                }
            }

            let statement = store.statement();
            let colored = output.is_none();
            let rendered = match format {
                OutputFormat::Table => statement::render_table(&statement, colored),
                OutputFormat::Text => statement::render_text(&statement),
                OutputFormat::Json => serde_json::to_string_pretty(&statement)?,
            };

            match output {
                Some(path) => {
                    fs::write(&path, rendered)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Statement for {} written to {}", period, path.display());
                    println!("Statement written to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        },
        Some(Commands::Days { year, month }) => {
            let period = resolve_period(year, month);
            match month {
                Some(_) => println!("{}: {} business days", period, period.business_days()),
                None => println!("{}", days::render_year(period.year)),
            }
        },
        Some(Commands::Init { force }) => {
            if repo.exists() && !force {
                bail!("Settings already exist at {} (use --force to overwrite)", repo.path().display());
            }
            repo.save(&Settings::default())?;
            println!("Settings written to {}", repo.path().display());
        },
        Some(Commands::Tui) | None => {
            let store = ConfigurationStore::with_template(DateSelection::current(), settings.profile);
            let export_dir = std::env::current_dir()?;
            if let Err(e) = tui::run(store, export_dir) {
                warn!("TUI exited with error: {:#}", e);
                return Err(e);
            }
        }
    }
    Ok(())
}
