use amortizer::export::csv::write_csv;
use amortizer::export::{html, table};
use amortizer::{generate, summarize, LoanParameters, Method};
use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Table,
    Html,
    #[cfg(feature = "serde")]
    Json,
    Csv,
}

#[derive(Parser)]
#[command(version, about = "Loan amortization schedules")]
struct Cli {
    /// Loan principal (i.e. 100000 or 900.50)
    amount: f64,

    /// Number of monthly payments
    period: u32,

    /// Nominal annual interest rate in percent (i.e. 9.5 for 9.5%)
    interest_rate: f64,

    /// Amortization method: straight or annuity
    #[arg(short, long, default_value_t = Method::Annuity)]
    method: Method,

    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Print summary statistics instead of the schedule
    #[arg(short, long)]
    summary: bool,

    /// Directory the csv file is written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    SimpleLogger::new()
        .with_level(if cli.verbose {
            LevelFilter::Info
        } else {
            LevelFilter::Warn
        })
        .init()?;

    let result = run(&cli);
    if let Err(e) = &result {
        error!("{}", e);
    }
    result
}

fn run(cli: &Cli) -> Result<()> {
    let loan = LoanParameters::new(cli.amount, cli.period, cli.interest_rate)?;
    let schedule = generate(&loan, cli.method)?;
    info!(
        "{} amortization of {} over {} months at {}%",
        cli.method, loan.amount, loan.period, loan.interest_rate
    );

    if cli.summary {
        let summary = summarize(&schedule)?;
        match cli.format {
            Format::Table => println!("{}", table::summary_table(&summary)),
            Format::Html => println!("{}", html::summary_to_html(&summary)),
            #[cfg(feature = "serde")]
            Format::Json => println!("{}", amortizer::export::json::summary_to_json(&summary)?),
            Format::Csv => bail!("summary statistics cannot be exported to csv"),
        }
        return Ok(());
    }

    match cli.format {
        Format::Table => println!("{}", table::schedule_table(&schedule)),
        Format::Html => println!("{}", html::schedule_to_html(&schedule)),
        #[cfg(feature = "serde")]
        Format::Json => println!("{}", amortizer::export::json::schedule_to_json(&schedule)?),
        Format::Csv => {
            let path = write_csv(&cli.out_dir, &schedule)?;
            println!("Data was recorded to {}", path.display());
        }
    }
    Ok(())
}
