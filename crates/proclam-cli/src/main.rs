//! CLI for proclam — mock classifier output from a confusion matrix.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "proclam")]
#[command(about = "proclam — mock classifier output from truth labels and a confusion matrix")]
#[command(version = proclam_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate probabilistic predictions for each truth label.
    /// Each row is the confusion-matrix row of the true class plus Gaussian noise,
    /// renormalized to sum to 1.
    Simulate {
        /// JSON file with the confusion matrix (array of rows)
        #[arg(long)]
        cm: String,

        /// JSON file with the true class of every item (array of integers)
        #[arg(long)]
        truth: String,

        /// Simulator config JSON (scheme, seed, noise_std); flags below override it
        #[arg(long)]
        config: Option<String>,

        /// Name of the simulated classifier
        #[arg(long)]
        scheme: Option<String>,

        /// Random seed (default 0)
        #[arg(long)]
        seed: Option<u64>,

        /// Standard deviation of the per-entry Gaussian noise (default 0.03)
        #[arg(long)]
        noise_std: Option<f64>,

        /// Reserve an extra "other" class (bookkeeping only; output width is unchanged)
        #[arg(long)]
        other: bool,

        /// Output format
        #[arg(long, default_value = "json", value_parser = ["json", "csv"])]
        format: String,

        /// Write predictions to a file instead of stdout
        #[arg(long)]
        output: Option<String>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            cm,
            truth,
            config,
            scheme,
            seed,
            noise_std,
            other,
            format,
            output,
        } => commands::simulate::run(commands::simulate::SimulateCommandConfig {
            cm_path: &cm,
            truth_path: &truth,
            config_path: config.as_deref(),
            scheme: scheme.as_deref(),
            seed,
            noise_std,
            other,
            format: &format,
            output_path: output.as_deref(),
        }),
    }
}
