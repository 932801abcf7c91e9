use crate::cli::StageArgs;
use crate::config::IntelliConfig;
use crate::error::{ConfigError, Result};
use figment::{
    providers::{Env, Format as _, Json, Serialized},
    Figment,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "intelli.config.json";

const ENV_PREFIX: &str = "INTELLI_";

const ENV_KEYS: &[&str] = &[
    "input",
    "intermediate",
    "problems",
    "template",
    "output",
    "statements",
    "dump_groups",
    "separator",
    "prefix",
    "globals",
];

/// CLI flags that were actually given.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    intermediate: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    problems: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    template: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    statements: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dump_groups: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    globals: Vec<String>,
}

impl From<&StageArgs> for Overrides {
    fn from(args: &StageArgs) -> Self {
        Self {
            input: args.input.clone(),
            intermediate: args.intermediate.clone(),
            problems: args.problems.clone(),
            template: args.template.clone(),
            output: args.output.clone(),
            statements: args.statements.clone(),
            dump_groups: args.dump_groups.clone(),
            separator: args.separator.clone(),
            prefix: args.prefix.clone(),
            globals: args.globals.clone(),
        }
    }
}

impl IntelliConfig {
    /// Load configuration from multiple sources and validate it.
    /// Priority: CLI args > environment variables > config file > defaults
    pub fn load(args: &StageArgs, config_path: Option<&Path>) -> Result<Self> {
        let config: Self = Self::figment(args, config_path)?
            .extract()
            .map_err(|e| ConfigError::Extract(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Layered provider stack used by [`IntelliConfig::load`].
    pub fn figment(args: &StageArgs, config_path: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()).into());
            }
            Some(path) => figment = figment.merge(Json::file(path)),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    figment = figment.merge(Json::file(default_path));
                }
            }
        }

        // INTELLI_DUMP_GROUPS -> dumpGroups, matching the file's field names
        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .only(ENV_KEYS)
                .map(|key| camel_case(key.as_str()).into())
                .lowercase(false),
        );

        Ok(figment.merge(Serialized::defaults(Overrides::from(args))))
    }
}

fn camel_case(key: &str) -> String {
    let mut output = String::with_capacity(key.len());
    let mut upper = false;
    for c in key.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            output.extend(c.to_uppercase());
            upper = false;
        } else {
            output.extend(c.to_lowercase());
        }
    }
    output
}
