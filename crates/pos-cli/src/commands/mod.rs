//! Command implementations.
//!
//! Each command translates CLI arguments into calls on the core and the
//! adapters, then displays results.  No business logic lives here.

pub mod catalog;
pub mod completions;
pub mod init;
pub mod scan;

use tracing::debug;

use pos_adapters::{InMemoryCatalog, builtin_catalog, load_catalog};

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult};

/// Resolve the catalog a command runs against.
///
/// Order: `--catalog` flag, then `catalog_path` from config, then the
/// built-in demo catalog.  Only named files can fail to load; the built-in
/// fallback always succeeds.
pub(crate) fn resolve_catalog(
    global: &GlobalArgs,
    config: &AppConfig,
) -> CliResult<InMemoryCatalog> {
    if let Some(path) = &global.catalog {
        debug!(path = %path.display(), "loading catalog from --catalog");
        return Ok(load_catalog(path)?);
    }

    if let Some(path) = &config.catalog_path {
        debug!(path = %path.display(), "loading catalog from config");
        return Ok(load_catalog(path)?);
    }

    debug!("using built-in demo catalog");
    Ok(builtin_catalog())
}
