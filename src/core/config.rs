//! Model spec files (`.spec.yml`) and the loader that turns a repository of
//! them into a [`Catalog`].

use crate::core::{Catalog, CatalogSource, ModelDescriptor, KEY_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// File name every model directory uses to describe its models
pub const SPEC_FILE_NAME: &str = ".spec.yml";

/// Error types for catalog loading
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("model path {0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// One model entry of a spec file as written in YAML
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpecEntry {
    /// Model name, the last segment of the directory key
    pub name: String,

    /// Documentation files
    #[serde(default)]
    pub docs: Vec<String>,

    /// Files to validate
    #[serde(default)]
    pub build: Vec<String>,

    /// Whether CI validates this model
    #[serde(default, rename = "run-ci")]
    pub run_ci: bool,
}

impl From<SpecEntry> for ModelDescriptor {
    fn from(entry: SpecEntry) -> Self {
        ModelDescriptor {
            name: entry.name,
            docs: entry.docs,
            build_files: entry.build,
            run_ci: entry.run_ci,
        }
    }
}

/// Parsed contents of a single `.spec.yml`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecFile {
    pub entries: Vec<SpecEntry>,
}

impl SpecFile {
    /// Load a spec file from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse spec file contents
    ///
    /// An empty document describes no models.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let entries: Option<Vec<SpecEntry>> = serde_yaml::from_str(yaml)?;
        Ok(Self {
            entries: entries.unwrap_or_default(),
        })
    }
}

/// Builds a catalog by scanning a repository for `.spec.yml` files
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecFileLoader;

impl SpecFileLoader {
    pub fn new() -> Self {
        Self
    }

    fn scan(
        &self,
        dir: &Path,
        segments: &mut Vec<String>,
        catalog: &mut Catalog,
    ) -> Result<(), CatalogError> {
        let io_err = |source: std::io::Error| CatalogError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut entries = std::fs::read_dir(dir)
            .map_err(io_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(io_err)?;
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let file_name = entry.file_name().to_string_lossy().into_owned();
            let file_type = entry.file_type().map_err(|source| CatalogError::Io {
                path: entry.path(),
                source,
            })?;

            // Spec files may be symlinks; directories are never followed
            if file_name == SPEC_FILE_NAME && entry.path().is_file() {
                let spec = SpecFile::from_file(entry.path())?;
                debug!(
                    "Loaded {} model(s) from {}",
                    spec.entries.len(),
                    entry.path().display()
                );
                for spec_entry in spec.entries {
                    let key = directory_key(segments, &spec_entry.name);
                    catalog.insert(key, spec_entry.into());
                }
            } else if file_type.is_dir() && !file_name.starts_with('.') {
                segments.push(file_name);
                self.scan(&entry.path(), segments, catalog)?;
                segments.pop();
            }
        }

        Ok(())
    }
}

impl CatalogSource for SpecFileLoader {
    fn load(&self, root: &Path) -> Result<Catalog, CatalogError> {
        if !root.is_dir() {
            return Err(CatalogError::NotADirectory(root.to_path_buf()));
        }

        let mut catalog = Catalog::new(model_root(root));
        self.scan(root, &mut Vec::new(), &mut catalog)?;
        debug!(
            "Catalog for {} has {} directory key(s)",
            catalog.model_root(),
            catalog.len()
        );
        Ok(catalog)
    }
}

/// Join the relative directory segments and the model name into a key
fn directory_key(segments: &[String], name: &str) -> String {
    let mut key = String::new();
    for segment in segments {
        key.push_str(segment);
        key.push(KEY_SEPARATOR);
    }
    key.push_str(name);
    key
}

/// The root as given, without trailing separators
fn model_root(root: &Path) -> String {
    let raw = root.to_string_lossy();
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() && raw.starts_with('/') {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}
