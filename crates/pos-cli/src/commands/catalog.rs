//! Implementation of the `pos catalog` subcommands.
//!
//! `list` prints the entries of whichever catalog `pos scan` would run
//! against; `path` prints only the resolution result, without loading
//! anything.

use crate::{
    cli::{CatalogCommands, ListFormat, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    command: CatalogCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match command {
        CatalogCommands::List { format } => list(format, &global, &config, &output),
        CatalogCommands::Path => path(&global, &config, &output),
    }
}

fn list(
    format: ListFormat,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let catalog = super::resolve_catalog(global, config)?;
    let entries = catalog.entries();

    match format {
        ListFormat::Table => {
            output.header("Catalog entries:")?;
            if entries.is_empty() {
                output.info("the catalog is empty")?;
                return Ok(());
            }
            let width = entries
                .iter()
                .map(|e| e.barcode().len())
                .max()
                .unwrap_or(0)
                .max("BARCODE".len());
            output.print(&format!("  {:<width$}  PRICE", "BARCODE"))?;
            for entry in &entries {
                output.print(&format!("  {:<width$}  {}", entry.barcode(), entry.price()))?;
            }
        }

        ListFormat::List => {
            for entry in &entries {
                println!("{}", entry.barcode());
            }
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }

        ListFormat::Csv => {
            println!("barcode,price");
            for entry in &entries {
                println!("{},{}", csv_field(entry.barcode()), csv_field(entry.price()));
            }
        }
    }

    Ok(())
}

fn path(global: &GlobalArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    if let Some(path) = &global.catalog {
        output.print(&path.display().to_string())?;
    } else if let Some(path) = &config.catalog_path {
        output.print(&path.display().to_string())?;
    } else {
        output.print("built-in demo catalog")?;
    }
    Ok(())
}

/// Quote a CSV field when it contains a comma, a quote, or a newline.
/// Prices like `7,95 €` would otherwise split the row.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_pass_through() {
        assert_eq!(csv_field("123"), "123");
        assert_eq!(csv_field("$9.50"), "$9.50");
    }

    #[test]
    fn comma_fields_are_quoted() {
        assert_eq!(csv_field("7,95 €"), "\"7,95 €\"");
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        assert_eq!(csv_field("5\" nails"), "\"5\"\" nails\"");
    }
}
