use anyhow::{Context, Result};
use colored::Colorize;

use czmoji::cli::{self, Command};
use czmoji::config::{self, AppConfig};
use czmoji::error::Error;
use czmoji::prompt::TerminalHost;
use czmoji::questions::{Answers, Schedule};
use czmoji::session::ScriptedHost;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("CZMOJI_LOG", "warn")).init();

    if let Err(e) = run() {
        if matches!(e.downcast_ref::<Error>(), Some(Error::Aborted)) {
            eprintln!("{}", "Cancelled.".dimmed());
            std::process::exit(130);
        }
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = cli::parse();

    if let Some(Command::Config { path: true }) = cli.command {
        let path = config::global_config_path()
            .context("Could not determine global config directory")?;
        println!("{}", path.display());
        return Ok(());
    }

    let cfg = AppConfig::load(cli.overrides())?;

    match cli.command {
        Some(Command::Config { .. }) => {
            print!("{}", cfg.to_toml()?);
        }
        Some(Command::Types) => {
            for choice in cfg.types.choices() {
                println!("{choice}");
            }
        }
        Some(Command::Questions) => {
            let specs = czmoji::describe(&Schedule::build(&cfg));
            println!(
                "{}",
                serde_json::to_string_pretty(&specs).context("Failed to serialize questions")?
            );
        }
        None => {
            let message = match &cli.answers {
                Some(path) => {
                    let content = std::fs::read_to_string(path)
                        .with_context(|| format!("Failed to read {}", path.display()))?;
                    let script: Answers = serde_json::from_str(&content)
                        .with_context(|| format!("Failed to parse {}", path.display()))?;
                    czmoji::compose(&cfg, &mut ScriptedHost::new(script))?
                }
                None => czmoji::compose(&cfg, &mut TerminalHost)?,
            };

            match &cli.output {
                Some(path) => std::fs::write(path, format!("{message}\n"))
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => println!("{message}"),
            }
        }
    }

    Ok(())
}
