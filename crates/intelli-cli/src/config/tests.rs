#[cfg(test)]
mod tests {
    use crate::cli::StageArgs;
    use crate::config::*;
    use crate::error::{CliError, ConfigError};
    use figment::Jail;
    use std::path::{Path, PathBuf};

    #[test]
    fn test_defaults() {
        let config = IntelliConfig::default();
        assert_eq!(config.intermediate, PathBuf::from("intellisense.js"));
        assert_eq!(config.template, PathBuf::from("intelli_tail.js"));
        assert_eq!(config.output, PathBuf::from("../qminer.intellisense.js"));
        assert_eq!(config.separator, "$SEPARATOR$");
        assert_eq!(config.prefix, "_");
        assert!(config.globals.contains(&"qm".to_string()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let json_val = serde_json::to_value(IntelliConfig::default()).unwrap();
        assert!(json_val.get("intermediate").is_some());
        assert!(json_val.get("dumpGroups").is_none());
        assert!(json_val.get("statements").is_none());

        let config: IntelliConfig =
            serde_json::from_str(r#"{ "dumpGroups": "groups.json" }"#).unwrap();
        assert_eq!(config.dump_groups, Some(PathBuf::from("groups.json")));
        assert_eq!(config.prefix, "_");

        assert!(serde_json::from_str::<IntelliConfig>(r#"{ "unknown": 1 }"#).is_err());
    }

    #[test]
    fn test_validation() {
        assert!(IntelliConfig {
            separator: String::new(),
            ..IntelliConfig::default()
        }
        .validate()
        .is_err());

        assert!(IntelliConfig {
            separator: "a\nb".to_string(),
            ..IntelliConfig::default()
        }
        .validate()
        .is_err());

        assert!(IntelliConfig {
            prefix: "1".to_string(),
            ..IntelliConfig::default()
        }
        .validate()
        .is_err());

        assert!(IntelliConfig {
            globals: vec!["not-valid".to_string()],
            ..IntelliConfig::default()
        }
        .validate()
        .is_err());

        let err = IntelliConfig {
            output: PathBuf::from("intelli_tail.js"),
            ..IntelliConfig::default()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::ConflictingOptions(_))
        ));

        assert!(IntelliConfig {
            prefix: "$".to_string(),
            globals: vec![],
            ..IntelliConfig::default()
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn test_pipeline_options() {
        let config = IntelliConfig {
            globals: vec!["api".to_string()],
            prefix: "$".to_string(),
            statements: Some(PathBuf::from("intelli_body.js")),
            ..IntelliConfig::default()
        };
        let options = config.pipeline_options();
        assert_eq!(options.globals.alias("api"), "api");
        assert_eq!(options.globals.alias("vec"), "$vec");
        assert_eq!(options.statements, Some(PathBuf::from("intelli_body.js")));
        assert_eq!(options.output, config.output);
    }

    #[test]
    fn test_json_schema() {
        let schema = IntelliConfig::json_schema();
        assert!(schema["properties"].get("dumpGroups").is_some());
        assert!(schema["properties"].get("globals").is_some());
    }

    #[test]
    fn test_load_precedence() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"{ "template": "file_tail.js", "prefix": "f_", "output": "file.js" }"#,
            )?;
            jail.set_env("INTELLI_PREFIX", "e_");
            jail.set_env("INTELLI_DUMP_GROUPS", "env_groups.json");

            let args = StageArgs {
                output: Some(PathBuf::from("cli.js")),
                ..StageArgs::default()
            };
            let config = IntelliConfig::load(&args, None).unwrap();

            assert_eq!(config.template, PathBuf::from("file_tail.js"));
            assert_eq!(config.prefix, "e_");
            assert_eq!(config.dump_groups, Some(PathBuf::from("env_groups.json")));
            assert_eq!(config.output, PathBuf::from("cli.js"));
            assert_eq!(config.intermediate, default_intermediate());
            Ok(())
        });
    }

    #[test]
    fn test_load_without_config_file_uses_defaults() {
        Jail::expect_with(|_jail| {
            let config = IntelliConfig::load(&StageArgs::default(), None).unwrap();
            assert_eq!(config, IntelliConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_explicit_missing_config_file() {
        Jail::expect_with(|_jail| {
            let err =
                IntelliConfig::load(&StageArgs::default(), Some(Path::new("missing.json")))
                    .unwrap_err();
            assert!(matches!(err, CliError::Config(ConfigError::NotFound(_))));
            Ok(())
        });
    }

    #[test]
    fn test_unknown_field_in_file_is_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file(DEFAULT_CONFIG_FILE, r#"{ "entry": "src/index.ts" }"#)?;
            let err = IntelliConfig::load(&StageArgs::default(), None).unwrap_err();
            assert!(matches!(err, CliError::Config(ConfigError::Extract(_))));
            Ok(())
        });
    }

    #[test]
    fn test_cli_globals_replace_defaults() {
        Jail::expect_with(|_jail| {
            let args = StageArgs {
                globals: vec!["api".to_string()],
                ..StageArgs::default()
            };
            let config = IntelliConfig::load(&args, None).unwrap();
            assert_eq!(config.globals, vec!["api".to_string()]);
            Ok(())
        });
    }
}
