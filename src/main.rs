use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use timeless_text::config::{CliConfig, Command, YearsArgs};
use timeless_text::{Catalog, format_elapsed_years, logger, render_content};

fn main() -> Result<ExitCode> {
    let config = CliConfig::parse();
    logger::init_cli_logger(config.verbose);

    // One "today" for the whole invocation
    let today = config.today();
    let catalog = config.load_catalog().context("Failed to load catalog")?;
    tracing::debug!(%today, "starting timeless-text");

    match &config.command {
        Command::Years(args) => run_years(args, today, catalog.as_ref()),
        Command::Render { file } => {
            let content = match file {
                Some(path) => fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read stdin")?;
                    buf
                }
            };
            print!("{}", render_content(&content, today, catalog.as_ref()));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_years(
    args: &YearsArgs,
    today: chrono::NaiveDate,
    catalog: &dyn Catalog,
) -> Result<ExitCode> {
    let request = args.to_request();

    match format_elapsed_years(&request, today, catalog) {
        Ok(rendered) => {
            if args.json {
                let body = serde_json::json!({ "ok": true, "result": rendered });
                println!("{body}");
            } else {
                println!("{rendered}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_validation() => {
            let message = e
                .source_message()
                .map(|source| catalog.translate(source))
                .unwrap_or_else(|| e.to_string());
            if args.json {
                let body = serde_json::json!({ "ok": false, "kind": e.kind(), "message": message });
                println!("{body}");
            } else {
                eprintln!("{message}");
            }
            Ok(ExitCode::from(2))
        }
        Err(e) => Err(e.into()),
    }
}
