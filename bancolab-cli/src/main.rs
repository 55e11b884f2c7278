//! Bancolab CLI — dashboard, check and summary commands.
//!
//! Commands:
//! - `dashboard` — load the datasets and launch the terminal UI
//! - `check` — validate all seven dataset files, report row counts and
//!   how many fields were coerced to missing
//! - `summary` — print the derived tables (weighted GAR, mean ROE,
//!   annual returns)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use bancolab_core::data::{DataConfig, DataStore, DatasetStats};

#[derive(Parser)]
#[command(
    name = "bancolab",
    about = "Bancolab CLI — ESG and financial dashboard over the IBEX35 bank datasets"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the datasets and launch the terminal dashboard.
    Dashboard {
        /// Directory holding the dataset CSV files.
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// TOML config with data_dir and per-dataset file names.
        /// Takes precedence over --data-dir.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Validate the seven dataset files and report load statistics.
    Check {
        /// Directory holding the dataset CSV files.
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// TOML config with data_dir and per-dataset file names.
        /// Takes precedence over --data-dir.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the derived tables: weighted GAR, mean ROE, annual returns.
    Summary {
        /// Directory holding the dataset CSV files.
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// TOML config with data_dir and per-dataset file names.
        /// Takes precedence over --data-dir.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Dashboard { data_dir, config } => {
            // No subscriber here: the TUI owns the terminal in raw mode.
            let config = resolve_config(data_dir, config)?;
            let store = DataStore::load(&config).with_context(|| {
                format!("failed to load datasets from {}", config.data_dir.display())
            })?;
            bancolab_tui::run(store)
        }
        Commands::Check { data_dir, config } => {
            init_tracing();
            run_check(resolve_config(data_dir, config)?)
        }
        Commands::Summary { data_dir, config } => {
            init_tracing();
            run_summary(resolve_config(data_dir, config)?)
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn resolve_config(data_dir: PathBuf, config_path: Option<PathBuf>) -> Result<DataConfig> {
    match config_path {
        Some(path) => DataConfig::from_file(&path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(DataConfig::with_data_dir(data_dir)),
    }
}

fn run_check(config: DataConfig) -> Result<()> {
    let store = DataStore::load(&config)
        .with_context(|| format!("dataset check failed for {}", config.data_dir.display()))?;
    let stats = &store.stats;

    println!("Datasets: {}", config.data_dir.display());
    println!();
    println!("{:<20} {:>8} {:>10}", "Dataset", "Rows", "Coerced");
    println!("{}", "-".repeat(40));
    print_stats_row("cotizaciones", stats.prices);
    print_stats_row("datosfinancieros", stats.financials);
    print_stats_row("emisiones", stats.emissions);
    print_stats_row("ratings", stats.ratings);
    print_stats_row("gestionriesgos", stats.risks);
    print_stats_row("volatilidadmensual", stats.volatility);
    print_stats_row("gar", stats.gar);
    println!();

    println!("Banks:     {}", store.banks().join(", "));
    println!("Providers: {}", store.rating_providers().join(", "));
    if stats.total_coerced() > 0 {
        println!();
        println!(
            "NOTE: {} field(s) were coerced to missing; they render as blanks.",
            stats.total_coerced()
        );
    }
    println!();
    println!("All datasets OK.");
    Ok(())
}

fn print_stats_row(name: &str, stats: DatasetStats) {
    println!("{:<20} {:>8} {:>10}", name, stats.rows, stats.coerced);
}

fn run_summary(config: DataConfig) -> Result<()> {
    let store = DataStore::load(&config)
        .with_context(|| format!("failed to load datasets from {}", config.data_dir.display()))?;

    println!("=== GAR Ponderado (%) ===");
    println!("{:<14} {:>6} {:>10}", "Banco", "Año", "GAR");
    for point in &store.gar_weighted {
        match point.gar {
            Some(gar) => println!("{:<14} {:>6} {:>10.1}", point.bank, point.year, gar),
            None => println!("{:<14} {:>6} {:>10}", point.bank, point.year, "-"),
        }
    }

    println!();
    println!("=== ROE medio (%) ===");
    println!("{:<14} {:>6} {:>10}", "Banco", "Año", "ROE");
    for point in &store.roe {
        match point.roe {
            Some(roe) => println!("{:<14} {:>6} {:>10.2}", point.bank, point.year, roe),
            None => println!("{:<14} {:>6} {:>10}", point.bank, point.year, "-"),
        }
    }

    println!();
    println!("=== Rentabilidad Bursátil anual ===");
    println!("{:<14} {:>6} {:>10}", "Banco", "Año", "Rent.");
    for point in &store.returns {
        println!(
            "{:<14} {:>6} {:>9.2}%",
            point.bank,
            point.year,
            point.ret * 100.0
        );
    }

    Ok(())
}
