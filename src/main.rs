use anyhow::Context;
use clap::Parser;
use minset::cli::Cli;
use minset::data::Alphabet;
use minset::engines::generation::RunOutcome;
use minset::{ConfigManager, MinsetRunner};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if cli.list_alphabets {
        for alphabet in Alphabet::available() {
            println!(
                "{:<8} {:>2} letters  {}",
                alphabet.name(),
                alphabet.len(),
                alphabet.description()
            );
        }
        return Ok(());
    }

    let mut manager = ConfigManager::load(cli.config.as_deref()).context("loading configuration")?;
    manager
        .update(|config| cli.apply_overrides(config))
        .context("invalid configuration")?;

    if cli.print_config {
        print!("{}", manager.to_toml_string()?);
        return Ok(());
    }

    let runner = MinsetRunner::new(manager.into_inner())?;
    let summary = runner.run().context("minset run failed")?;

    match summary.outcome {
        RunOutcome::Converged {
            repeat,
            fold,
            generation,
        } => log::info!(
            "Stopped early: pool converged in repeat {}, fold {}, generation {}",
            repeat + 1,
            fold + 1,
            generation
        ),
        RunOutcome::Completed { .. } => log::info!("Run completed"),
    }

    Ok(())
}
