//! CI script generation
//!
//! Loader → [`CommandBuilder`] → [`ScriptRenderer`]. Each stage only
//! consumes the output of the previous one.

pub mod builder;
pub mod path;
pub mod renderer;

pub use builder::{BuildOutput, CommandBuilder, Diagnostic, ValidatorCommand};
pub use renderer::{render_template, RenderError, ScriptRenderer, FAILURE_EXIT_CODE};

use crate::core::{CatalogError, CatalogSource};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Fatal generation errors
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("specify the model repository path, got: {0:?}")]
    EmptyModelPath(String),

    #[error("cannot read models: {0}")]
    Catalog(#[from] CatalogError),

    #[error("cannot generate script: {0}")]
    Render(#[from] RenderError),
}

/// Result of a generation run
#[derive(Debug, Clone)]
pub struct GeneratedScript {
    /// Rendered script text, without a trailing newline
    pub script: String,

    /// Validator commands embedded in the script, in order
    pub commands: Vec<String>,

    /// Units of work skipped while building commands
    pub diagnostics: Vec<Diagnostic>,
}

/// Wires a catalog source to the builder and renderer
#[derive(Debug, Clone)]
pub struct ScriptGenerator<S> {
    source: S,
    builder: CommandBuilder,
    renderer: ScriptRenderer,
}

impl<S: CatalogSource> ScriptGenerator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            builder: CommandBuilder::new(),
            renderer: ScriptRenderer::new(),
        }
    }

    pub fn with_builder(mut self, builder: CommandBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Generate the script for the repository at `model_path`
    pub fn generate(&self, model_path: &str) -> Result<GeneratedScript, GenerateError> {
        if model_path.is_empty() {
            return Err(GenerateError::EmptyModelPath(model_path.to_string()));
        }

        let catalog = self.source.load(Path::new(model_path))?;
        let BuildOutput {
            commands,
            diagnostics,
        } = self.builder.build(&catalog);
        debug!(
            "Built {} command(s) from {} directory key(s), {} skipped",
            commands.len(),
            catalog.len(),
            diagnostics.len()
        );

        let script = self.renderer.render(commands.as_slice())?;
        Ok(GeneratedScript {
            script,
            commands,
            diagnostics,
        })
    }
}
