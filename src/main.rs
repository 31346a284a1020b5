use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};
use mortgage_check::application::engine::MortgageEngine;
use mortgage_check::application::loader::RateLoader;
use mortgage_check::config::MortgageConfig;
use mortgage_check::infrastructure::in_memory::InMemoryRateStore;
use mortgage_check::interfaces::csv::rate_writer::RateWriter;
use mortgage_check::interfaces::csv::request_reader::RequestReader;
use mortgage_check::interfaces::csv::result_writer::ResultWriter;
use mortgage_check::logger;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML file with the income multiplier and interest rates
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate the mortgage requests in a CSV file
    Evaluate {
        /// Input requests CSV file
        input: PathBuf,
    },
    /// List the configured interest rates by maturity period
    Rates {
        #[arg(long, value_enum, default_value_t = RateFormat::Csv)]
        format: RateFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RateFormat {
    Csv,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let config = match &cli.config {
        Some(path) => MortgageConfig::from_file(path).into_diagnostic()?,
        None => {
            tracing::warn!("no configuration file given, running without interest rates");
            MortgageConfig::default()
        }
    };

    let store = InMemoryRateStore::new();
    RateLoader::new(&config.rates)
        .load(&store)
        .await
        .into_diagnostic()?;
    let engine = MortgageEngine::new(config.policy(), Box::new(store));

    match cli.command {
        Command::Evaluate { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = RequestReader::new(file);
            let stdout = io::stdout();
            let mut writer = ResultWriter::new(stdout.lock()).into_diagnostic()?;

            for request in reader.requests() {
                match request {
                    Ok(request) => match engine.evaluate(&request).await {
                        Ok(result) => writer.write(&request, &result).into_diagnostic()?,
                        Err(e) => eprintln!("Error evaluating request: {}", e),
                    },
                    Err(e) => eprintln!("Error reading request: {}", e),
                }
            }

            writer.flush().into_diagnostic()?;
        }
        Command::Rates { format } => {
            let rates = engine.interest_rates().await.into_diagnostic()?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            match format {
                RateFormat::Csv => RateWriter::new(&mut out)
                    .write_rates(&rates)
                    .into_diagnostic()?,
                RateFormat::Json => {
                    serde_json::to_writer_pretty(&mut out, &rates).into_diagnostic()?;
                    writeln!(out).into_diagnostic()?;
                }
            }
        }
    }

    Ok(())
}
