//! Test utility functions for modelci
#![allow(dead_code)]

use modelci::core::{Catalog, CatalogError, CatalogSource, ModelDescriptor};
use modelci::generation::{CommandBuilder, GeneratedScript, ScriptGenerator};
use std::path::Path;

/// Catalog source that hands out a prepared catalog
pub struct InMemorySource {
    catalog: Catalog,
}

impl InMemorySource {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl CatalogSource for InMemorySource {
    fn load(&self, _root: &Path) -> Result<Catalog, CatalogError> {
        Ok(self.catalog.clone())
    }
}

/// A CI-eligible descriptor with the given build files
pub fn ci_model(name: &str, files: &[&str]) -> ModelDescriptor {
    ModelDescriptor::new(name)
        .with_build_files(files.iter().copied())
        .with_run_ci(true)
}

/// A descriptor excluded from CI
pub fn skipped_model(name: &str, files: &[&str]) -> ModelDescriptor {
    ModelDescriptor::new(name).with_build_files(files.iter().copied())
}

/// Run the whole generator over an in-memory catalog
pub fn generate(catalog: Catalog) -> GeneratedScript {
    let root = catalog.model_root().to_string();
    ScriptGenerator::new(InMemorySource::new(catalog))
        .generate(&root)
        .expect("generation should succeed")
}

/// Build commands only
pub fn build_commands(catalog: &Catalog) -> Vec<String> {
    CommandBuilder::new().build(catalog).commands
}

/// The command the default validator produces for `files`
pub fn expected_command(root: &str, files: &[&str]) -> String {
    format!(
        "pyang --plugindir $PLUGIN_DIR --openconfig --oc-only -p {} -p {}/third_party/ietf {}",
        root,
        root,
        files.join(" ")
    )
}

/// Commands embedded in a rendered script, in script order
pub fn script_commands(script: &str) -> Vec<String> {
    script
        .lines()
        .filter_map(|line| line.strip_prefix("log=$(")?.strip_suffix(')'))
        .map(str::to_string)
        .collect()
}

/// Assert the script's footer and header are intact
pub fn assert_script_frame(script: &str) {
    assert!(script.starts_with("#!/bin/bash\n"), "missing shebang:\n{}", script);
    assert!(script.contains("\nFAIL=0\n"), "missing failure counter:\n{}", script);
    assert!(
        script.ends_with("if [ $FAIL -ne 0 ]; then\n\texit 127\nfi"),
        "missing footer:\n{}",
        script
    );
}

/// Write a spec file at `dir` (relative to `root`), creating directories
pub fn write_spec(root: &Path, dir: &str, yaml: &str) {
    let target = root.join(dir);
    std::fs::create_dir_all(&target).expect("create model directory");
    std::fs::write(target.join(".spec.yml"), yaml).expect("write spec file");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_commands_extracts_in_order() {
        let script = "log=$(pyang a)\nres=$(echo $?)\nlog=$(pyang b)\n";
        assert_eq!(script_commands(script), vec!["pyang a", "pyang b"]);
    }

    #[test]
    fn test_expected_command_matches_builder() {
        let catalog = Catalog::new("/root").with_model("a:m", ci_model("m", &["x/f.yang"]));
        assert_eq!(
            build_commands(&catalog),
            vec![expected_command("/root", &["/root/a/f.yang"])]
        );
    }
}
