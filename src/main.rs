use clap::{Args, Parser, Subcommand};
use fincalc::application::calculator::Calculator;
use fincalc::config::{CalculatorConfig, DEFAULT_MAX_TERM_MONTHS};
use fincalc::domain::ports::FieldSource;
use fincalc::domain::request::Debt;
use fincalc::interfaces::csv::request_reader::RequestReader;
use fincalc::interfaces::csv::result_writer::{BatchRecord, ResultWriter};
use fincalc::interfaces::csv::schedule_writer::ScheduleWriter;
use fincalc::interfaces::json::{self, CalculationResponse};
use miette::{IntoDiagnostic, Result};
use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Longest debt payoff, in months, the simulator will run
    #[arg(
        long,
        global = true,
        env = "FINCALC_MAX_TERM_MONTHS",
        default_value_t = DEFAULT_MAX_TERM_MONTHS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_term_months: u32,

    /// Log filter such as `debug` or `fincalc=trace`. Falls back to RUST_LOG.
    #[arg(long, global = true, env = "FINCALC_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a single calculation and print the JSON response
    Calc {
        /// Operation tag, e.g. `installment` (or its legacy name `parcelamento`)
        operation: String,

        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Answer JSON requests, one response per output line
    Json {
        /// File holding one request object or an array of them. Reads stdin if omitted.
        input: Option<PathBuf>,
    },
    /// Run every request of a CSV file and write the results as CSV
    Batch {
        /// CSV with header `operation,a,b,principal,rate,months,payment`
        input: PathBuf,
    },
    /// Print the month-by-month schedule of a debt payoff as CSV
    Schedule {
        #[command(flatten)]
        fields: FieldArgs,
    },
}

/// Raw operation inputs. Values are kept as text so `12,5` works as well as `12.5`.
#[derive(Args)]
struct FieldArgs {
    #[arg(long, allow_hyphen_values = true)]
    a: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    b: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    principal: Option<String>,
    /// Percentage per month
    #[arg(long, allow_hyphen_values = true)]
    rate: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    months: Option<String>,
    /// Fixed monthly payment
    #[arg(long, allow_hyphen_values = true)]
    payment: Option<String>,
}

impl FieldSource for FieldArgs {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        let value = match name {
            "a" => &self.a,
            "b" => &self.b,
            "principal" => &self.principal,
            "rate" => &self.rate,
            "months" => &self.months,
            "payment" => &self.payment,
            _ => return None,
        };
        value.as_deref().map(Cow::Borrowed)
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let config = CalculatorConfig::default().with_max_term_months(cli.max_term_months);
    let calculator = Calculator::with_config(config);

    match cli.command {
        Command::Calc { operation, fields } => calc(&calculator, &operation, &fields),
        Command::Json { input } => answer_json(&calculator, input),
        Command::Batch { input } => batch(&calculator, input),
        Command::Schedule { fields } => schedule(&calculator, &fields),
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(directives: Option<&str>) {
    let filter = match directives {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn calc(calculator: &Calculator, operation: &str, fields: &FieldArgs) -> Result<ExitCode> {
    let response = json::respond_to(calculator, operation, fields);
    print_json(&response)?;

    if response.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn answer_json(calculator: &Calculator, input: Option<PathBuf>) -> Result<ExitCode> {
    let document = match input {
        Some(path) => fs::read_to_string(path).into_diagnostic()?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).into_diagnostic()?;
            buffer
        }
    };

    for envelope in json::parse_envelopes(&document)? {
        print_json(&json::respond(calculator, &envelope))?;
    }
    Ok(ExitCode::SUCCESS)
}

fn batch(calculator: &Calculator, input: PathBuf) -> Result<ExitCode> {
    let file = File::open(input).into_diagnostic()?;
    let reader = RequestReader::new(file);

    let stdout = io::stdout();
    let mut writer = ResultWriter::new(stdout.lock());
    let mut failed = 0u64;
    let mut row = 0u64;

    for request in reader.requests() {
        row += 1;
        let record = match request {
            Ok(request) => {
                let response = json::respond_to(calculator, &request.operation, &request);
                BatchRecord::from_response(row, &request.operation, &response)?
            }
            Err(e) => {
                warn!(row, error = %e, "skipping unreadable request row");
                BatchRecord::unreadable(row, e.to_string())
            }
        };
        if record.status != "ok" {
            failed += 1;
        }
        writer.write(&record)?;
    }
    writer.flush()?;

    info!(rows = row, failed, "batch complete");
    Ok(ExitCode::SUCCESS)
}

fn schedule(calculator: &Calculator, fields: &FieldArgs) -> Result<ExitCode> {
    let debt = Debt::from_fields(fields)?;
    let schedule = calculator.payoff_schedule(&debt)?;

    let stdout = io::stdout();
    ScheduleWriter::new(stdout.lock()).write_schedule(&schedule)?;
    Ok(ExitCode::SUCCESS)
}

fn print_json(response: &CalculationResponse) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer(&mut out, response).into_diagnostic()?;
    writeln!(out).into_diagnostic()?;
    Ok(())
}
