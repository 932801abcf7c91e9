//! Configuration system with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment > File > Defaults

mod defaults;
mod loading;
mod tests;
mod validation;

use intelli_docs::{GlobalNameSet, PipelineOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use defaults::*;
pub use loading::DEFAULT_CONFIG_FILE;

/// Intelli configuration - loaded from intelli.config.json, INTELLI_* or CLI args.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IntelliConfig {
    /// Raw documentation dump with "- `signature`comment" bullets
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Intermediate signature/comment records
    #[serde(default = "default_intermediate")]
    pub intermediate: PathBuf,

    /// Signatures that need manual handling
    #[serde(default = "default_problems")]
    pub problems: PathBuf,

    /// Static JavaScript the generated body is appended to
    #[serde(default = "default_template")]
    pub template: PathBuf,

    /// Final intellisense stub
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Optional file receiving the synthetic statements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statements: Option<PathBuf>,

    /// Optional JSON dump of the per-object member grouping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dump_groups: Option<PathBuf>,

    /// Field separator used in the intermediate file
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Prefix marking non-global aliases
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Global objects exempt from aliasing
    #[serde(default = "default_globals")]
    pub globals: Vec<String>,
}

impl Default for IntelliConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            intermediate: default_intermediate(),
            problems: default_problems(),
            template: default_template(),
            output: default_output(),
            statements: None,
            dump_groups: None,
            separator: default_separator(),
            prefix: default_prefix(),
            globals: default_globals(),
        }
    }
}

impl IntelliConfig {
    /// Generate JSON Schema for intelli.config.json.
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(IntelliConfig);
        serde_json::to_value(schema).unwrap_or_default()
    }

    /// Pipeline settings described by this configuration.
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            input: self.input.clone(),
            intermediate: self.intermediate.clone(),
            problems: self.problems.clone(),
            template: self.template.clone(),
            output: self.output.clone(),
            statements: self.statements.clone(),
            dump_groups: self.dump_groups.clone(),
            separator: self.separator.clone(),
            globals: GlobalNameSet::new(self.globals.iter().cloned(), self.prefix.clone()),
        }
    }
}
