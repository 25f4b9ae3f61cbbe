//! Output formatting for CLI results

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod json;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(table::format_table(self)),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

/// Print a single item as a FIELD/VALUE table, or as JSON with the service message
pub fn print_record<T: Tabled + Serialize>(
    item: &T,
    message: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", table::format_record(item)),
        OutputFormat::Json => println!("{}", json::format_json_with_message(item, message)?),
    }
    Ok(())
}

/// Print the acknowledgement of a write operation
pub fn print_ack(
    message: Option<&str>,
    default_message: &str,
    data: Option<&serde_json::Value>,
    format: OutputFormat,
) -> Result<()> {
    let message = message.filter(|m| !m.is_empty()).unwrap_or(default_message);
    match format {
        OutputFormat::Table => println!("{} {}", "✓".green(), message),
        OutputFormat::Json => {
            let data = data.unwrap_or(&serde_json::Value::Null);
            println!("{}", json::format_json_with_message(data, Some(message))?);
        }
    }
    Ok(())
}
