//! Alias resolution for identifiers appearing in signatures.
//!
//! Every identifier that is not a known global of the scripting host is
//! rewritten with a private prefix (`vec` becomes `_vec`) so the generated
//! stub never shadows a real runtime binding.

use std::collections::BTreeSet;

/// Top-level objects the scripting host exposes.
pub const DEFAULT_GLOBALS: &[&str] = &["qm", "la", "process", "http", "console", "fs"];

/// Marker prepended to non-global identifiers.
pub const DEFAULT_PRIVATE_PREFIX: &str = "_";

/// Fixed set of global identifiers exempt from aliasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalNameSet {
    names: BTreeSet<String>,
    prefix: String,
}

impl Default for GlobalNameSet {
    fn default() -> Self {
        Self::new(DEFAULT_GLOBALS.iter().copied(), DEFAULT_PRIVATE_PREFIX)
    }
}

impl GlobalNameSet {
    pub fn new<I, S>(names: I, prefix: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            prefix: prefix.into(),
        }
    }

    pub fn contains(&self, ident: &str) -> bool {
        self.names.contains(ident)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Display name for `ident`: unchanged for globals, prefixed otherwise.
    pub fn alias(&self, ident: &str) -> String {
        if self.contains(ident) {
            ident.to_string()
        } else {
            format!("{}{}", self.prefix, ident)
        }
    }

    /// Prefixes `expr` when `owner` is not a global.
    ///
    /// Used for whole source expressions (`vec.minus(vec2)`), where only the
    /// leading object decides whether the expression gets the prefix.
    pub fn alias_owned(&self, owner: &str, expr: &str) -> String {
        if self.contains(owner) {
            expr.to_string()
        } else {
            format!("{}{}", self.prefix, expr)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn globals_are_left_alone() {
        let globals = GlobalNameSet::default();
        assert_eq!(globals.alias("qm"), "qm");
        assert_eq!(globals.alias("console"), "console");
    }

    #[test]
    fn locals_get_the_prefix() {
        let globals = GlobalNameSet::default();
        assert_eq!(globals.alias("vec"), "_vec");
        assert_eq!(globals.alias_owned("vec", "vec.minus(vec2)"), "_vec.minus(vec2)");
        assert_eq!(globals.alias_owned("la", "la.newVec()"), "la.newVec()");
    }

    #[test]
    fn custom_prefix_and_names() {
        let globals = GlobalNameSet::new(["api"], "$");
        assert_eq!(globals.alias("api"), "api");
        assert_eq!(globals.alias("qm"), "$qm");
        assert_eq!(globals.iter().collect::<Vec<_>>(), vec!["api"]);
    }
}
