use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser as ClapParser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::parser::{
    Dialect, DispatchMode, ParseResult, Parser, ParserRegistry, Update,
};
use crate::sheet::{Sheet, SheetHeader};
use crate::table::{PriceTable, Settlement};

/// Update a numbered price table from shorthand messages
#[derive(ClapParser, Debug)]
#[command(name = "pricegrid", version, about)]
pub struct Cli {
    /// More log output (repeat for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show which dialect a message would be parsed with
    Detect {
        /// Message text, or `-` to read stdin
        message: String,
    },

    /// Parse a message against the standard table layout
    Parse {
        /// Message text, or `-` to read stdin
        message: String,
        /// Try every dialect in priority order instead of sniffing
        #[arg(long)]
        strict: bool,
        /// Force a dialect instead of detecting one
        #[arg(long, conflicts_with = "strict")]
        dialect: Option<Dialect>,
        /// Print updates as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new sheet file
    New {
        sheet: PathBuf,
        #[arg(long)]
        name: Option<String>,
        /// Sheet date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Game type
        #[arg(long)]
        kind: Option<String>,
        /// Open number
        #[arg(long)]
        open: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Add an amount to one slot
    Add {
        sheet: PathBuf,
        number: String,
        /// Amount to add; negative values correct earlier entries
        #[arg(allow_negative_numbers = true)]
        price: f64,
    },

    /// Parse a message and add its updates to a sheet
    Apply {
        sheet: PathBuf,
        /// Message text, or `-` to read stdin
        message: String,
        #[arg(long)]
        strict: bool,
    },

    /// Undo the last manual entry, or the last message with --message
    Undo {
        sheet: PathBuf,
        #[arg(long)]
        message: bool,
    },

    /// Empty every slot of a sheet
    Reset { sheet: PathBuf },

    /// Print a sheet's values and totals
    Show {
        sheet: PathBuf,
        /// Open number, overriding the sheet header
        #[arg(long)]
        open: Option<String>,
        #[arg(long)]
        json: bool,
    },
}

/// Set up structured logging on stderr
pub fn setup_logging(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pricegrid={}", level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", level);
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Detect { message } => {
            let message = read_message(&message)?;
            let dialect = ParserRegistry::new().select(&message)?;
            println!("{}", dialect);
        }

        Command::Parse {
            message,
            strict,
            dialect,
            json,
        } => {
            let message = read_message(&message)?;
            let table = PriceTable::standard();
            let result = match dialect {
                Some(dialect) => ParseResult {
                    dialect,
                    updates: dialect.parse(&message, &table),
                },
                None => registry(strict).parse(&message, &table)?,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_updates(&result);
            }
        }

        Command::New {
            sheet,
            name,
            date,
            kind,
            open,
            force,
        } => {
            if sheet.exists() && !force {
                bail!(
                    "Sheet already exists: {} (use --force to overwrite)",
                    sheet.display()
                );
            }
            let header = SheetHeader {
                name,
                date: Some(date.unwrap_or_else(|| Local::now().date_naive())),
                kind,
                open,
            };
            Sheet::new(header).save(&sheet)?;
            println!("✓ Created {}", sheet.display());
        }

        Command::Add {
            sheet,
            number,
            price,
        } => {
            update_sheet(&sheet, |s| {
                let value = s.table.add_entry(&number, price)?;
                println!("✓ {} = {:.2}", number.trim(), value);
                Ok(())
            })?;
        }

        Command::Apply {
            sheet,
            message,
            strict,
        } => {
            let message = read_message(&message)?;
            update_sheet(&sheet, |s| {
                let result = registry(strict).parse(&message, &s.table)?;
                let applied = s.table.apply_updates(&result.updates);
                println!("✓ Applied {} updates ({})", applied, result.dialect);
                print_settlement(&s.settle(None));
                Ok(())
            })?;
        }

        Command::Undo { sheet, message } => {
            update_sheet(&sheet, |s| {
                if message {
                    s.table.undo_message()?;
                    println!("✓ Reverted last message");
                } else {
                    let entry = s.table.undo_last()?;
                    println!("✓ Reverted {} to {}", entry.number, format_price(entry.previous));
                }
                Ok(())
            })?;
        }

        Command::Reset { sheet } => {
            update_sheet(&sheet, |s| {
                s.table.reset();
                println!("✓ All slots emptied");
                Ok(())
            })?;
        }

        Command::Show { sheet, open, json } => {
            let sheet = Sheet::load(&sheet)?;
            let settlement = sheet.settle(open.as_deref());

            if json {
                println!("{}", serde_json::to_string_pretty(&settlement)?);
                return Ok(());
            }

            println!("{}\n", sheet.header_line());
            for (number, price) in sheet.table.filled() {
                println!("  {:>4}  {:>10.2}", number, price);
            }
            println!();
            print_settlement(&settlement);

            let text = sheet.table.to_text();
            if !text.is_empty() {
                println!("\n{}", text);
            }
        }
    }

    Ok(())
}

fn registry(strict: bool) -> ParserRegistry {
    if strict {
        ParserRegistry::with_mode(DispatchMode::Strict)
    } else {
        ParserRegistry::new()
    }
}

/// Load a sheet, apply `f`, and save it back
fn update_sheet<F>(path: &Path, f: F) -> Result<()>
where
    F: FnOnce(&mut Sheet) -> Result<()>,
{
    let mut sheet = Sheet::load(path)?;
    f(&mut sheet)?;
    sheet.save(path)
}

/// Take the message argument, reading stdin when it is `-`
fn read_message(arg: &str) -> Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read message from stdin")?;
    Ok(buf)
}

fn print_updates(result: &ParseResult) {
    println!("Dialect: {}", result.dialect);
    if result.is_empty() {
        println!("No updates recognized");
        return;
    }
    for Update { number, new_price } in &result.updates {
        println!("  {:>4}  {:>10.2}", number, new_price);
    }
    println!("Total:   {:.2}", result.total());
}

fn print_settlement(settlement: &Settlement) {
    println!("Grand total:  {:.2}", settlement.grand_total);
    println!("Commission:   {:.2}", settlement.commission);
    if let Some(open) = &settlement.open {
        println!("Open ({}):    {:.2}", open, settlement.open_price);
    }
    println!("Final total:  {:.2}", settlement.final_total);
}

fn format_price(price: Option<f64>) -> String {
    price
        .map(|p| format!("{:.2}", p))
        .unwrap_or_else(|| "XX".to_string())
}
