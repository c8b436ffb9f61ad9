use anyhow::{Context, Result};
use modelci::cli::Cli;
use modelci::{ScriptGenerator, SpecFileLoader};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging; stdout carries the script
    let default_level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    let generated = ScriptGenerator::new(SpecFileLoader::new())
        .generate(&cli.path)
        .with_context(|| format!("FATAL: cannot generate CI script for {:?}", cli.path))?;

    println!("{}", generated.script);

    Ok(())
}
