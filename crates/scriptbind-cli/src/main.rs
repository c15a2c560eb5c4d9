//! scriptbind CLI - Script registration generator
//!
//! Commands:
//! - `scriptbind generate` - Write the registration file and inject constructors
//! - `scriptbind scan` - Report discovered script classes without writing anything
//! - `scriptbind check` - Validate a scriptbind.toml configuration

use clap::{Parser, Subcommand};

mod check;
mod generate;
mod logging;
mod project;
mod scan;

#[derive(Parser)]
#[command(name = "scriptbind")]
#[command(author, version, about = "Registration code generator for script classes", long_about = None)]
struct Cli {
    /// Log filter, e.g. `debug` or `scriptbind_codegen=trace` (default: $RUST_LOG, then info)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate registration code for a project's scripts
    Generate {
        /// Project root containing the scripts directory (default: current directory)
        #[arg(short, long)]
        project: Option<String>,

        /// Path to scriptbind.toml (default: <project>/scriptbind.toml if present)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// List script classes, messages, and properties without writing files
    Scan {
        /// Project root containing the scripts directory (default: current directory)
        #[arg(short, long)]
        project: Option<String>,

        /// Path to scriptbind.toml (default: <project>/scriptbind.toml if present)
        #[arg(short, long)]
        config: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a scriptbind.toml configuration
    Check {
        /// Path to scriptbind.toml (default: ./scriptbind.toml)
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_level.as_deref())?;

    match cli.command {
        Commands::Generate { project, config } => {
            generate::run(project, config)?;
        }
        Commands::Scan {
            project,
            config,
            json,
        } => {
            scan::run(project, config, json)?;
        }
        Commands::Check { config } => {
            check::check(config)?;
        }
    }

    Ok(())
}
