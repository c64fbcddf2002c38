use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

pub mod controller;
pub mod loader;
pub mod profile;

use self::controller::build_navigator;

/// Look up words through a dmenu-style picker
#[derive(Debug, Parser)]
#[command(name = "lexi", about, version)]
struct Cli {
    /// Config file, bypasses profile lookup
    #[arg(long)]
    config: Option<PathBuf>,

    /// Profile name under the user config directory
    #[arg(long, default_value = "main")]
    profile: String,

    /// Word list used for suggestions, overrides the config
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Write the loaded config as the selected profile and exit
    #[arg(long)]
    init_profile: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to load .env: {e}");
    }

    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = profile::load_config(cli.config.as_deref(), &cli.profile)?;

    if cli.init_profile {
        config.validate()?;
        let path = profile::save_profile(&cli.profile, &config)?;
        println!("{}", path.display());
        return Ok(());
    }

    config.apply_env();
    config.validate()?;

    let words_path = cli
        .dictionary
        .unwrap_or_else(|| PathBuf::from(&config.dictionary.words_path));
    let words = loader::load_words_or_empty(&words_path);

    let mut navigator = build_navigator(&config, words)?;
    navigator.run().await?;

    Ok(())
}

/// Logs go to stderr, stdout belongs to the picker protocol
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "lexi={level},lexi_core={level},lexi_oxford={level},lexi_menu={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
