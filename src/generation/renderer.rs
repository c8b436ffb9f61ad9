//! Shell script rendering

use regex::{Captures, Regex};
use std::collections::HashMap;
use thiserror::Error;

/// Placeholders have the form `{{ name }}`
const PLACEHOLDER_PATTERN: &str = r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}";

/// Exit status of the generated script when any validation failed
pub const FAILURE_EXIT_CODE: u8 = 127;

const SCRIPT_TEMPLATE: &str = r#"#!/bin/bash

export PLUGIN_DIR=$(/usr/bin/env python -c \
      'import openconfig_pyang; import os; \
       print("{}/plugins".format(os.path.dirname(openconfig_pyang.__file__)))')

FAIL=0

{{ commands }}

if [ $FAIL -ne 0 ]; then
	exit {{ failure_exit_code }}
fi"#;

const COMMAND_TEMPLATE: &str = r#"
log=$({{ command }})
res=$(echo $?)
if [ $res -ne 0 ]; then
	echo ${log}
	FAIL=$((FAIL+1))
fi
"#;

/// Error types for script rendering
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template references unknown placeholder '{0}'")]
    UnresolvedPlaceholder(String),

    #[error("invalid placeholder pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Replace every `{{ name }}` in `template` with its value
///
/// Fails without producing output if any placeholder has no value.
/// Substituted values are not scanned for further placeholders.
pub fn render_template(
    template: &str,
    variables: &HashMap<&str, String>,
) -> Result<String, RenderError> {
    substitute(&placeholder_regex()?, template, variables)
}

fn placeholder_regex() -> Result<Regex, RenderError> {
    Ok(Regex::new(PLACEHOLDER_PATTERN)?)
}

/// [`render_template`] with an already compiled placeholder pattern
fn substitute(
    placeholder: &Regex,
    template: &str,
    variables: &HashMap<&str, String>,
) -> Result<String, RenderError> {
    if let Some(missing) = placeholder
        .captures_iter(template)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
        .find(|name| !variables.contains_key(name))
    {
        return Err(RenderError::UnresolvedPlaceholder(missing.to_string()));
    }

    let rendered = placeholder.replace_all(template, |caps: &Captures| {
        caps.get(1)
            .and_then(|name| variables.get(name.as_str()))
            .cloned()
            .unwrap_or_default()
    });
    Ok(rendered.into_owned())
}

/// Embeds validator commands into the CI script
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptRenderer;

impl ScriptRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the script running `commands` in order
    pub fn render<S: AsRef<str>>(&self, commands: &[S]) -> Result<String, RenderError> {
        let placeholder = placeholder_regex()?;

        let mut blocks = String::new();
        for command in commands {
            let variables = HashMap::from([("command", command.as_ref().to_string())]);
            blocks.push_str(&substitute(&placeholder, COMMAND_TEMPLATE, &variables)?);
        }

        let variables = HashMap::from([
            ("commands", blocks),
            ("failure_exit_code", FAILURE_EXIT_CODE.to_string()),
        ]);
        substitute(&placeholder, SCRIPT_TEMPLATE, &variables)
    }
}
