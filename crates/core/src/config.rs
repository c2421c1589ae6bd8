//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Library code never reads process-wide environment variables; the
//! binaries read them and hand the plain values to the helpers here.

use crate::{CoreError, CoreResult};
use catalog::Catalog;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    catalog: Arc<Catalog>,
}

impl CoreConfig {
    /// Create a new `CoreConfig` around a loaded catalog.
    pub fn new(catalog: Catalog) -> Self {
        if catalog.is_empty() {
            tracing::warn!("condition catalog is empty; every prediction will be empty");
        }
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// Interpret the raw value of the catalog-path environment variable.
///
/// `None`, empty and whitespace-only values mean "use the built-in catalog".
pub fn catalog_path_from_env_value(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Load the condition catalog without reading environment variables.
///
/// If `override_path` is provided it must point at a YAML catalog file. Otherwise the built-in
/// catalog is used.
///
/// # Errors
///
/// Returns [`CoreError`] if the override is not a file, cannot be read, or fails catalog
/// validation.
pub fn resolve_catalog(override_path: Option<PathBuf>) -> CoreResult<Catalog> {
    let catalog = match override_path {
        Some(path) => load_catalog_file(&path)?,
        None => Catalog::builtin()?,
    };

    tracing::info!(
        conditions = catalog.len(),
        body_systems = catalog.body_systems().len(),
        "condition catalog loaded"
    );

    Ok(catalog)
}

fn load_catalog_file(path: &Path) -> CoreResult<Catalog> {
    if !path.is_file() {
        return Err(CoreError::InvalidInput(format!(
            "catalog override is not a file: {}",
            path.display()
        )));
    }

    let contents = std::fs::read_to_string(path).map_err(|source| CoreError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Catalog::parse(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn blank_env_value_means_builtin() {
        assert_eq!(catalog_path_from_env_value(None), None);
        assert_eq!(catalog_path_from_env_value(Some("   ".into())), None);
        assert_eq!(
            catalog_path_from_env_value(Some(" /etc/catalog.yaml ".into())),
            Some(PathBuf::from("/etc/catalog.yaml"))
        );
    }

    #[test]
    fn resolves_builtin_catalog_without_override() {
        let catalog = resolve_catalog(None).expect("builtin");
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn resolves_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"conditions:
  - name: Sunburn
    symptoms: [Redness, Blisters]
    description: Skin damage from ultraviolet exposure.
    severity: mild
    recommendations:
      medications: [Aloe vera gel]
      diet: [Drink extra water]
      precautions: [Avoid further sun exposure]
"#
        )
        .expect("write catalog");

        let catalog = resolve_catalog(Some(file.path().to_path_buf())).expect("load file");
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("Sunburn").is_some());
    }

    #[test]
    fn rejects_missing_override_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = resolve_catalog(Some(dir.path().join("missing.yaml")))
            .expect_err("missing file rejected");
        assert!(matches!(err, CoreError::InvalidInput(msg) if msg.contains("not a file")));
    }

    #[test]
    fn surfaces_catalog_validation_errors() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "conditions:\n  - name: Broken\n").expect("write catalog");

        let err = resolve_catalog(Some(file.path().to_path_buf())).expect_err("invalid catalog");
        assert!(matches!(err, CoreError::Catalog(_)));
    }

    #[test]
    fn config_shares_catalog_between_clones() {
        let cfg = CoreConfig::new(Catalog::builtin().expect("builtin"));
        let clone = cfg.clone();
        assert!(std::ptr::eq(cfg.catalog(), clone.catalog()));
    }
}
