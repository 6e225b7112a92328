use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use college_buddy_bunk::config::Config;
use college_buddy_bunk::models::RawQuery;
use college_buddy_bunk::{advice, calculator, import, report};

#[derive(Parser)]
#[command(name = "bunk-calculator")]
#[command(about = "Attendance bunk calculator for College Buddy", long_about = None)]
struct Cli {
    /// Enable trace-level logging on stderr
    #[arg(long, global = true)]
    debug: bool,

    /// Attendance threshold in percent, e.g. 80 or 80% (overrides BUNK_THRESHOLD_PERCENT)
    #[arg(long, global = true, allow_hyphen_values = true)]
    threshold: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Work out how many full days can still be bunked
    Calculate {
        #[arg(long, allow_hyphen_values = true)]
        total_working_days: String,
        #[arg(long, allow_hyphen_values = true)]
        lectures_per_day: String,
        #[arg(long, allow_hyphen_values = true)]
        attended: String,
        #[arg(long, allow_hyphen_values = true)]
        days_passed: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate every student in a CSV file and write a markdown report
    Batch {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
        #[arg(long)]
        label: Option<String>,
    },
    /// Show tips for bunking responsibly
    Tips,
    /// Generate a random excuse
    Excuse,
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(threshold: Option<&str>) -> anyhow::Result<Config> {
    let config = Config::from_env()?
        .with_threshold_override(threshold)
        .context("invalid --threshold")?;
    debug!(threshold = config.threshold.percent(), "loaded configuration");
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match cli.command {
        Commands::Calculate {
            total_working_days,
            lectures_per_day,
            attended,
            days_passed,
            json,
        } => {
            let config = load_config(cli.threshold.as_deref())?;
            let raw = RawQuery::new(total_working_days, lectures_per_day, attended, days_passed);
            let result = match calculator::evaluate_raw(&raw, config.threshold) {
                Ok(result) => result,
                Err(err) => anyhow::bail!(report::describe_error(&err)),
            };
            debug!(?result, "calculation complete");

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", report::describe_result(&result, config.threshold));
            }
        }
        Commands::Batch { csv, out, label } => {
            let config = load_config(cli.threshold.as_deref())?;
            let entries = import::evaluate_csv(&csv, config.threshold)?;
            let generated_on = chrono::Local::now().date_naive();
            let output = report::build_report(label.as_deref(), generated_on, config.threshold, &entries);
            std::fs::write(&out, output)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!(
                "Evaluated {} students from {}. Report written to {}.",
                entries.len(),
                csv.display(),
                out.display()
            );
        }
        Commands::Tips => {
            println!("Top tips to bunk like a pro:");
            for tip in advice::TIPS.iter() {
                println!("- {}: {}", tip.title, tip.description);
            }
            println!();
            println!("{}", advice::WARNING.title);
            println!("{}", advice::WARNING.description);
        }
        Commands::Excuse => {
            let excuse = advice::random_excuse(&mut rand::thread_rng());
            println!("Excuse generated: {excuse}");
        }
    }

    Ok(())
}
