//! Model catalog domain model

use std::collections::HashMap;

/// Separator between the segments of a directory key
pub const KEY_SEPARATOR: char = ':';

/// A single model entry as described by a repository spec file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModelDescriptor {
    /// Logical model name
    pub name: String,

    /// Documentation files for the model
    pub docs: Vec<String>,

    /// Files handed to the validator, each prefixed with a grouping label
    pub build_files: Vec<String>,

    /// Whether the model takes part in CI validation
    pub run_ci: bool,
}

impl ModelDescriptor {
    /// Create a descriptor with no files that does not run in CI
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_build_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.build_files = files.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_docs<I, S>(mut self, docs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.docs = docs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_run_ci(mut self, run_ci: bool) -> Self {
        self.run_ci = run_ci;
        self
    }
}

/// All model metadata of a repository
///
/// Descriptor lists keep the order the loader produced them in. The map
/// itself is unordered; use [`Catalog::sorted_keys`] to walk it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Root directory every resolved path is based on
    model_root: String,

    /// Directory key -> descriptors found under it
    models: HashMap<String, Vec<ModelDescriptor>>,
}

impl Catalog {
    /// Create an empty catalog rooted at `model_root`
    pub fn new(model_root: impl Into<String>) -> Self {
        Self {
            model_root: model_root.into(),
            models: HashMap::new(),
        }
    }

    /// Append a descriptor under a directory key
    pub fn insert(&mut self, key: impl Into<String>, descriptor: ModelDescriptor) {
        self.models.entry(key.into()).or_default().push(descriptor);
    }

    /// Builder-style variant of [`Catalog::insert`]
    pub fn with_model(mut self, key: impl Into<String>, descriptor: ModelDescriptor) -> Self {
        self.insert(key, descriptor);
        self
    }

    pub fn model_root(&self) -> &str {
        &self.model_root
    }

    /// Descriptors registered under `key`, in insertion order
    pub fn descriptors(&self, key: &str) -> &[ModelDescriptor] {
        self.models.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Directory keys in ascending byte order
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.models.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// A directory key split into its directory part and model name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryKey<'a> {
    /// Every segment but the last
    pub directory: Vec<&'a str>,

    /// The last segment
    pub model_name: &'a str,
}

impl<'a> DirectoryKey<'a> {
    /// Split a key such as `acl:openconfig-acl`
    ///
    /// Returns the raw segments when there are fewer than two of them.
    pub fn parse(key: &'a str) -> Result<Self, Vec<&'a str>> {
        let mut directory: Vec<&'a str> = key.split(KEY_SEPARATOR).collect();
        if directory.len() < 2 {
            return Err(directory);
        }
        let model_name = directory.pop().unwrap_or_default();
        Ok(Self {
            directory,
            model_name,
        })
    }
}
