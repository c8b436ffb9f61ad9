//! Turns a catalog into validator command lines

use crate::core::{Catalog, DirectoryKey, ModelDescriptor};
use crate::generation::path;
use thiserror::Error;
use tracing::{debug, error};

/// A skipped unit of work, recorded without aborting the build
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("cannot parse directory {segments:?}, expected at least 2 elements")]
    MalformedDirectoryKey { key: String, segments: Vec<String> },

    #[error("invalid filename {parts:?} in {key}, expected at least 2 parts")]
    MalformedBuildFile {
        key: String,
        file: String,
        parts: Vec<String>,
    },
}

/// How the external validator is invoked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorCommand {
    /// Validator executable
    pub program: String,

    /// Shell variable holding the plugin directory
    pub plugin_dir_var: String,

    /// Flags passed after the plugin directory
    pub flags: Vec<String>,

    /// Extra search path, appended to the model root
    pub include_suffix: String,
}

impl Default for ValidatorCommand {
    fn default() -> Self {
        Self {
            program: "pyang".to_string(),
            plugin_dir_var: "PLUGIN_DIR".to_string(),
            flags: vec!["--openconfig".to_string(), "--oc-only".to_string()],
            include_suffix: "third_party/ietf".to_string(),
        }
    }
}

impl ValidatorCommand {
    /// Render the command line validating `files`
    ///
    /// The file section is left empty when there are no files.
    pub fn render(&self, model_root: &str, files: &[String]) -> String {
        format!(
            "{} --plugindir ${} {} -p {} -p {}/{} {}",
            self.program,
            self.plugin_dir_var,
            self.flags.join(" "),
            model_root,
            model_root,
            self.include_suffix,
            files.join(" ")
        )
    }
}

/// Commands produced from a catalog, plus everything skipped on the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOutput {
    pub commands: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildOutput {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Walks a catalog and produces one command per CI-eligible descriptor
#[derive(Debug, Clone, Default)]
pub struct CommandBuilder {
    validator: ValidatorCommand,
}

impl CommandBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_validator(mut self, validator: ValidatorCommand) -> Self {
        self.validator = validator;
        self
    }

    pub fn validator(&self) -> &ValidatorCommand {
        &self.validator
    }

    /// Build commands in sorted key order
    pub fn build(&self, catalog: &Catalog) -> BuildOutput {
        let mut output = BuildOutput::default();

        for key in catalog.sorted_keys() {
            let parsed = match DirectoryKey::parse(key) {
                Ok(parsed) => parsed,
                Err(segments) => {
                    record(
                        &mut output,
                        Diagnostic::MalformedDirectoryKey {
                            key: key.to_string(),
                            segments: segments.iter().map(|s| s.to_string()).collect(),
                        },
                    );
                    continue;
                }
            };
            let directory = path::join(parsed.directory.as_slice());

            for descriptor in catalog.descriptors(key).iter().filter(|d| d.run_ci) {
                let files = self.resolve_files(
                    catalog.model_root(),
                    key,
                    &directory,
                    descriptor,
                    &mut output,
                );
                debug!(
                    "{}/{}: {} file(s) for {}",
                    directory,
                    parsed.model_name,
                    files.len(),
                    descriptor.name
                );
                output
                    .commands
                    .push(self.validator.render(catalog.model_root(), &files));
            }
        }

        output
    }

    fn resolve_files(
        &self,
        model_root: &str,
        key: &str,
        directory: &str,
        descriptor: &ModelDescriptor,
        output: &mut BuildOutput,
    ) -> Vec<String> {
        let mut files = Vec::with_capacity(descriptor.build_files.len());

        for file in &descriptor.build_files {
            let parts: Vec<&str> = file.split('/').collect();
            if parts.len() < 2 {
                record(
                    output,
                    Diagnostic::MalformedBuildFile {
                        key: key.to_string(),
                        file: file.clone(),
                        parts: parts.iter().map(|p| p.to_string()).collect(),
                    },
                );
                continue;
            }
            let file_name = path::join(&parts[1..]);
            files.push(path::join(&[model_root, directory, file_name.as_str()]));
        }

        files
    }
}

fn record(output: &mut BuildOutput, diagnostic: Diagnostic) {
    error!("{}", diagnostic);
    output.diagnostics.push(diagnostic);
}
