use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::age::today_utc;
use crate::error::Result;
use crate::locale::{Catalog, EnglishCatalog, TomlCatalog};
use crate::request::FormatRequest;

#[derive(Debug, Clone, Parser)]
#[command(name = "timeless-text")]
#[command(about = "Keep \"n years\" phrases up to date")]
pub struct CliConfig {
    /// Date to count up to (YYYY-MM-DD). Defaults to today in UTC.
    #[arg(long, global = true, value_parser = parse_today)]
    pub today: Option<NaiveDate>,

    /// TOML translation catalog.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Compute elapsed years for one set of parameters.
    Years(YearsArgs),
    /// Replace [timeless-text ...] placeholders in a file, or stdin.
    Render {
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Args)]
pub struct YearsArgs {
    #[arg(short = 'y', long = "y")]
    pub year: Option<String>,

    #[arg(short = 'm', long = "m")]
    pub month: Option<String>,

    #[arg(short = 'd', long = "d")]
    pub day: Option<String>,

    /// Comma-separated list of YYYY-MM-DD dates to sum.
    #[arg(long)]
    pub combined: Option<String>,

    /// Print only the number.
    #[arg(long)]
    pub text: bool,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

impl YearsArgs {
    pub fn to_request(&self) -> FormatRequest {
        FormatRequest {
            year: self.year.clone(),
            month: self.month.clone(),
            day: self.day.clone(),
            combined: self.combined.clone(),
            text: self.text,
        }
    }
}

impl CliConfig {
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(today_utc)
    }

    pub fn load_catalog(&self) -> Result<Box<dyn Catalog>> {
        match &self.catalog {
            Some(path) => Ok(Box::new(TomlCatalog::from_file(path)?)),
            None => Ok(Box::new(EnglishCatalog)),
        }
    }
}

fn parse_today(raw: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}
