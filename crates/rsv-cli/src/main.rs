use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "rsv")]
#[command(about = "Report safety validator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count safe reports (one report per input line)
    Count {
        /// Reports file, or `-` for stdin
        #[arg(long)]
        input: String,

        /// Allow one level to be dropped per report (overrides config)
        #[arg(long, default_value_t = false)]
        dampened: bool,

        /// Layered config paths in merge order
        #[arg(long = "config")]
        config_paths: Vec<String>,
    },

    /// Print a verdict line per report
    Check {
        /// Reports file, or `-` for stdin
        #[arg(long)]
        input: String,

        /// Layered config paths in merge order
        #[arg(long = "config")]
        config_paths: Vec<String>,

        /// Emit JSON instead of key=value lines
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print batch counts and every dampener removal
    Summary {
        /// Reports file, or `-` for stdin
        #[arg(long)]
        input: String,

        /// Layered config paths in merge order
        #[arg(long = "config")]
        config_paths: Vec<String>,

        /// Emit JSON instead of the text summary
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Compute layered config hash + print canonical JSON
    ConfigHash {
        /// Paths in merge order (base -> overrides...)
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Silent if the file does not exist.
    let _ = dotenvy::from_filename(".env.local");

    init_tracing();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Count {
            input,
            dampened,
            config_paths,
        } => commands::count::run_count(&input, dampened, &config_paths)?,

        Commands::Check {
            input,
            config_paths,
            json,
        } => commands::check::run_check(&input, &config_paths, json)?,

        Commands::Summary {
            input,
            config_paths,
            json,
        } => commands::check::run_summary(&input, &config_paths, json)?,

        Commands::ConfigHash { paths } => {
            let loaded = commands::load_config(&paths)?;
            println!("config_hash={}", loaded.config_hash);
            println!("{}", loaded.canonical_json);
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays machine-parseable.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
