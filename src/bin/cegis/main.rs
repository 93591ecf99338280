use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{event, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use cegis::cmdline::args::CegisArgs;
use cegis::cmdline::CommandLine;
use cegis::config::meta::CegisLogLevel;
use cegis::config::CegisOptions;
use cegis::options::OptionsTable;

#[derive(Debug, Clone, Subcommand)]
pub enum CegisCommands {
    /// Write an options file holding the default CEGIS settings
    New { config: Option<PathBuf> },
    /// Print the effective CEGIS settings and where each one came from
    Show {
        /// Options file to read settings from
        #[arg(long)]
        options: Option<PathBuf>,
        /// Print the settings as an options file instead of a report
        #[arg(long)]
        toml: bool,
        #[command(flatten)]
        cegis: CegisArgs,
    },
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct CegisParams {
    #[arg(long, value_enum, global = true, default_value_t = CegisLogLevel::Info)]
    log_level: CegisLogLevel,
    #[command(subcommand)]
    command: CegisCommands,
}

fn main() -> anyhow::Result<()> {
    let params = CegisParams::parse();
    init_logging(params.log_level)?;
    match params.command {
        CegisCommands::New { config } => new(config.unwrap_or(PathBuf::from("./cegis.toml"))),
        CegisCommands::Show {
            options,
            toml,
            cegis,
        } => show(options, toml, &cegis),
    }
}

fn init_logging(log_level: CegisLogLevel) -> anyhow::Result<()> {
    let level = Level::from(log_level);
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .from_env()?
        .add_directive(format!("cegis={level}").parse()?);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    event!(Level::DEBUG, "Logging at {log_level}");
    Ok(())
}

fn new(path: PathBuf) -> anyhow::Result<()> {
    let cmdline = CommandLine::new();
    let options = OptionsTable::new();
    let defaults = CegisOptions::new(&cmdline, &options).snapshot()?;
    fs::write(&path, defaults.to_toml()?)?;
    event!(Level::INFO, "Wrote default options to {}", path.display());
    Ok(())
}

fn show(options: Option<PathBuf>, toml: bool, cegis: &CegisArgs) -> anyhow::Result<()> {
    let options = match options {
        Some(path) => OptionsTable::load(path)?,
        None => OptionsTable::new(),
    };
    let resolved = CegisOptions::new(cegis, &options).snapshot()?;
    if toml {
        print!("{}", resolved.to_toml()?);
    } else {
        println!("{resolved}");
    }
    Ok(())
}
