//! List command implementation.
//!
//! This module implements the `ls` command, which displays instance
//! directories in various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::utils::{load_settings, scan_instances, GlobalOptions};
use clap::{Args, ValueEnum};
use epghelper::config::OutputFormat;
use epghelper::output::{format_size, format_timestamp, render_instance_table};
use epghelper::{Instance, Settings};
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 5] = ["port", "created_at", "size_bytes", "path", "url"];

/// List existing databases.
#[derive(Args)]
pub struct LsCommand {
    /// Output format (defaults to the configured format, else table)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<ListFormat>,
}

/// Output format for the ls command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ListFormat {
    /// Box-drawn table with a total row (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl From<ListFormat> for OutputFormat {
    fn from(format: ListFormat) -> Self {
        match format {
            ListFormat::Table => OutputFormat::Table,
            ListFormat::Json => OutputFormat::Json,
            ListFormat::Csv => OutputFormat::Csv,
            ListFormat::Tsv => OutputFormat::Tsv,
        }
    }
}

impl LsCommand {
    /// Execute the ls command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = load_settings(global)?;
        let instances = scan_instances(&settings, &global.logger)?;

        let format = self
            .format
            .map_or(settings.output_format, OutputFormat::from);

        match format {
            OutputFormat::Table => format_as_table(&instances, &settings)?,
            OutputFormat::Json => format_as_json(&instances, &settings)?,
            OutputFormat::Csv => format_as_delimited(&instances, &settings, b',')?,
            OutputFormat::Tsv => format_as_delimited(&instances, &settings, b'\t')?,
        }

        Ok(())
    }
}

fn format_as_table(instances: &[Instance], settings: &Settings) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write!(handle, "{}", render_instance_table(instances, settings))?;
    Ok(())
}

fn format_as_json(instances: &[Instance], settings: &Settings) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json_data: Vec<serde_json::Value> = instances
        .iter()
        .map(|i| {
            serde_json::json!({
                "port": i.port(),
                "created_at": format_timestamp(i.created()),
                "size_bytes": i.size(),
                "size": format_size(i.size()),
                "path": i.path().display().to_string(),
                "url": i.url(settings),
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut handle, &json_data)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;

    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

fn format_as_delimited(
    instances: &[Instance],
    settings: &Settings,
    delimiter: u8,
) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for i in instances {
        writer
            .write_record(&[
                i.port().to_string(),
                format_timestamp(i.created()),
                i.size().to_string(),
                i.path().display().to_string(),
                i.url(settings),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
