//! `pos init` — write a starter catalog file, and optionally a default
//! configuration file, so `--catalog` has something real to point at.

use serde::Serialize;

use pos_adapters::builtin_catalog::builtin_entries;
use pos_core::domain::PriceEntry;

use crate::{
    cli::{InitArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// On-disk shape of the starter catalog: one `[[entry]]` table per product,
/// the exact format `load_catalog` reads back.
#[derive(Serialize)]
struct StarterCatalog {
    entry: Vec<PriceEntry>,
}

/// Create a starter catalog seeded with the built-in demo entries.
pub fn execute(
    args: InitArgs,
    _global: GlobalArgs,
    _config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    output.info("Initialising starter catalog...")?;

    // Bail early if the file already exists and --force was not given.
    if args.path.exists() && !args.force {
        output.warning(&format!(
            "Catalog already exists at {}  (use --force to overwrite)",
            args.path.display(),
        ))?;
        return Ok(());
    }

    let toml = render_starter_catalog()?;

    // Ensure parent directory exists.
    if let Some(parent) = args.path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("Failed to create directory '{}'", parent.display()),
            source: e,
        })?;
    }

    std::fs::write(&args.path, &toml).map_err(|e| CliError::IoError {
        message: format!("Failed to write catalog to '{}'", args.path.display()),
        source: e,
    })?;

    output.success(&format!("Catalog created at {}", args.path.display()))?;

    if args.with_config {
        write_default_config(args.force, &output)?;
    }

    output.info(&format!(
        "Try it: pos scan 123 --catalog {}",
        args.path.display(),
    ))?;

    Ok(())
}

/// Render the demo entries as a TOML catalog with a short header comment.
fn render_starter_catalog() -> CliResult<String> {
    let starter = StarterCatalog {
        entry: builtin_entries(),
    };

    let body = toml::to_string_pretty(&starter).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise starter catalog: {e}"),
        source: Some(Box::new(e)),
    })?;

    Ok(format!(
        "# Product catalog\n# One entry table per product; prices are display strings.\n\n{body}"
    ))
}

/// `--with-config`: also drop a default config file into the platform
/// config directory.
fn write_default_config(force: bool, output: &OutputManager) -> CliResult<()> {
    let config_path = AppConfig::config_path();

    if config_path.exists() && !force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let default_config = AppConfig::default();
    let toml = toml::to_string_pretty(&default_config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("Failed to create config directory '{}'", parent.display()),
            source: e,
        })?;
    }

    std::fs::write(&config_path, &toml).map_err(|e| CliError::IoError {
        message: format!("Failed to write config to '{}'", config_path.display()),
        source: e,
    })?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pos_adapters::load_catalog;
    use pos_core::application::ports::Catalog;

    #[test]
    fn starter_catalog_lists_every_demo_entry() {
        let rendered = render_starter_catalog().unwrap();

        // The header comment must not contain the literal table marker, or
        // this count would no longer equal the number of products.
        let blocks = rendered.matches("[[entry]]").count();
        assert_eq!(blocks, builtin_entries().len());
        assert!(rendered.starts_with("# Product catalog\n"));
        assert!(rendered.contains("barcode = \"123\""));
        assert!(rendered.contains("price = \"$9.50\""));
    }

    #[test]
    fn starter_catalog_round_trips_through_the_loader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, render_starter_catalog().unwrap()).unwrap();

        let catalog = load_catalog(&path).unwrap();

        assert_eq!(catalog.len(), builtin_entries().len());
        assert!(catalog.contains_barcode("123"));
        assert_eq!(catalog.find_price("123").as_deref(), Some("$9.50"));
    }
}
