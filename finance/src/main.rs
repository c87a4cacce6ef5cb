// Finance CLI entry point
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use finance::calculations;
use finance::validators;
use finance::{BrazilianCsvParser, FinanceSettings};
use shared::utils::{brazilian_format, format_cnpj, format_cpf};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "finance", version, about = "Farm finance calculations and document checks")]
struct Cli {
    /// JSON settings file; built-in defaults are used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Weighted average unit cost of the stock batches in a CSV file
    StockCost { csv: PathBuf },
    /// Sum and mean of the `Valor` column of a CSV file
    Total { csv: PathBuf },
    /// Check a CPF or CNPJ
    Document { id: String },
    /// Monthly installment of a loan (Price table)
    Installment {
        principal: f64,
        /// Annual interest rate in percent
        annual_rate: f64,
        months: u32,
    },
    /// Funrural contribution on a sale
    Funrural {
        sale_value: f64,
        /// Aliquot in percent; defaults to the configured one
        #[arg(long)]
        aliquot: Option<f64>,
    },
    /// Days until (or past) a due date
    Due { date: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = FinanceSettings::load_or_default(cli.config.as_deref())
        .context("Failed to load settings")?;

    run(cli.command, &settings)
}

fn run(command: Command, settings: &FinanceSettings) -> Result<()> {
    match command {
        Command::StockCost { csv } => {
            info!(path = %csv.display(), "Computing weighted average cost");
            let batches = BrazilianCsvParser::from_settings(settings).load_stock_batches(&csv)?;
            let cost = calculations::weighted_average_cost(&batches);
            let quantity: f64 = batches.iter().map(|b| b.quantity).sum();
            println!("Batches: {}", batches.len());
            println!("Quantity: {}", brazilian_format::format_decimal(quantity, 2));
            println!("Average unit cost: {}", brazilian_format::format_currency(cost));
            for batch in &batches {
                if !validators::validate_stock_quantity_with_min(batch.quantity, settings.min_stock) {
                    tracing::warn!(quantity = batch.quantity, min_stock = settings.min_stock, "Batch below minimum stock");
                }
            }
        }
        Command::Total { csv } => {
            info!(path = %csv.display(), "Summing values");
            let entries = BrazilianCsvParser::from_settings(settings).load_values(&csv)?;
            let values: Vec<f64> = entries.iter().map(|e| e.value).collect();
            println!("Entries: {}", entries.len());
            println!("Total: {}", brazilian_format::format_currency(calculations::sum_values(&entries)));
            println!("Mean: {}", brazilian_format::format_currency(calculations::average(&values)));
        }
        Command::Document { id } => {
            info!(%id, "Validating document");
            if validators::validate_cpf(&id) {
                println!("Valid CPF: {}", format_cpf(&id).unwrap_or(id));
            } else if validators::validate_cnpj(&id) {
                println!("Valid CNPJ: {}", format_cnpj(&id).unwrap_or(id));
            } else {
                anyhow::bail!("Invalid CPF/CNPJ: {}", id);
            }
        }
        Command::Installment { principal, annual_rate, months } => {
            info!(principal, annual_rate, months, "Computing installment");
            let installment = calculations::loan_installment(principal, annual_rate, months);
            println!(
                "{} x {}",
                months,
                brazilian_format::format_currency(calculations::round_to_cents(installment))
            );
        }
        Command::Funrural { sale_value, aliquot } => {
            let aliquot = aliquot.unwrap_or(settings.funrural_aliquot);
            info!(sale_value, aliquot, "Computing Funrural");
            let tax = calculations::funrural_with_aliquot(sale_value, aliquot);
            println!("Funrural ({}%): {}", brazilian_format::format_decimal(aliquot, 2), brazilian_format::format_currency(tax));
        }
        Command::Due { date } => {
            let due = NaiveDate::parse_from_str(date.trim(), &settings.date_format)
                .with_context(|| format!("Invalid due date '{}', expected format {}", date, settings.date_format))?;
            info!(%due, "Computing days until due");
            let days = calculations::days_until_due(due);
            if days >= 0 {
                println!("Due in {} day(s)", days);
            } else {
                println!("Overdue by {} day(s)", calculations::days_overdue(due));
            }
        }
    }
    Ok(())
}
