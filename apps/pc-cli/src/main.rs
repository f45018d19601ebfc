use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use pc_app::{AppResult, PressureInput, handle_json_request, handle_phase_change, to_json};
use pc_table::PhaseTable;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pc-cli")]
#[command(about = "Saturation specific-volume lookup by pressure", long_about = None)]
struct Cli {
    /// Reference table file (.yaml, .yml or .json); defaults to the built-in table
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up specific volumes at one pressure
    Lookup {
        /// Pressure in MPa, or with a unit tag (e.g. "50 kPa", "14.7psia")
        #[arg(allow_hyphen_values = true)]
        pressure: String,
    },
    /// Print the reference table
    Table,
    /// Evaluate a linear pressure sweep
    Sweep {
        /// Start pressure
        #[arg(allow_hyphen_values = true)]
        start: String,
        /// End pressure
        #[arg(allow_hyphen_values = true)]
        end: String,
        /// Number of points including both ends
        #[arg(long, default_value_t = 11)]
        points: usize,
    },
    /// Handle a JSON request body `{"pressure": ...}` read from stdin
    Request {
        /// Request body; read from stdin when omitted
        #[arg(long)]
        body: Option<String>,
    },
}

fn main() -> ExitCode {
    // stdout carries JSON only; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            if err.is_client_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    // built once, then only borrowed by the handlers
    let table = pc_app::load_table_or_reference(cli.table.as_deref())?;
    tracing::debug!(points = table.len(), range = ?table.pressure_range(), "table ready");

    match cli.command {
        Commands::Lookup { pressure } => cmd_lookup(&table, pressure),
        Commands::Table => cmd_table(&table),
        Commands::Sweep { start, end, points } => cmd_sweep(&table, &start, &end, points),
        Commands::Request { body } => cmd_request(&table, body),
    }
}

fn cmd_lookup(table: &PhaseTable, pressure: String) -> AppResult<()> {
    let response = handle_phase_change(table, &PressureInput::Text(pressure))?;
    println!("{}", to_json(&response)?);
    Ok(())
}

fn cmd_table(table: &PhaseTable) -> AppResult<()> {
    println!(
        "{:>12}  {:>14}  {:>14}",
        "P [MPa]", "v_f [m3/kg]", "v_g [m3/kg]"
    );
    for p in table.points() {
        println!(
            "{:>12}  {:>14}  {:>14}",
            p.pressure, p.liquid_volume, p.vapor_volume
        );
    }
    Ok(())
}

fn cmd_sweep(table: &PhaseTable, start: &str, end: &str, points: usize) -> AppResult<()> {
    let sweep = pc_app::sweep(table, start, end, points)?;
    println!("{}", serde_json::to_string_pretty(&sweep)?);
    Ok(())
}

fn cmd_request(table: &PhaseTable, body: Option<String>) -> AppResult<()> {
    let body = match body {
        Some(b) => b,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let response = handle_json_request(table, &body)?;
    println!("{}", to_json(&response)?);
    Ok(())
}
