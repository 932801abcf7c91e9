use intelli_docs::{DEFAULT_GLOBALS, DEFAULT_PRIVATE_PREFIX, DEFAULT_SEPARATOR};
use std::path::PathBuf;

pub fn default_input() -> PathBuf {
    PathBuf::from("intellisense_doc.md")
}

pub fn default_intermediate() -> PathBuf {
    PathBuf::from("intellisense.js")
}

pub fn default_problems() -> PathBuf {
    PathBuf::from("problems.js")
}

pub fn default_template() -> PathBuf {
    PathBuf::from("intelli_tail.js")
}

pub fn default_output() -> PathBuf {
    PathBuf::from("../qminer.intellisense.js")
}

pub fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

pub fn default_prefix() -> String {
    DEFAULT_PRIVATE_PREFIX.to_string()
}

pub fn default_globals() -> Vec<String> {
    DEFAULT_GLOBALS.iter().map(|name| name.to_string()).collect()
}
