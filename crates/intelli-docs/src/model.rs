use std::fmt;

use serde::{Deserialize, Serialize};

/// A documentation bullet split into its signature and trailing comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocRecord {
    /// Signature text, e.g. `len = vec.length`.
    pub signature: String,
    /// Free-form comment that followed the closing backtick.
    pub comment: String,
}

impl DocRecord {
    /// Creates a new record.
    pub fn new(signature: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            comment: comment.into(),
        }
    }

    /// Serializes the record as one intermediate line (without the newline).
    pub fn to_line(&self, separator: &str) -> String {
        format!("{}{}{}", self.signature, separator, self.comment)
    }

    /// Parses one intermediate line. A line without the separator is treated
    /// as a bare signature with an empty comment.
    pub fn parse_line(line: &str, separator: &str) -> Self {
        match line.split_once(separator) {
            Some((signature, comment)) => Self::new(signature, comment),
            None => Self::new(line, ""),
        }
    }
}

/// Whether a documented member is a plain property or a callable method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Property,
    Method,
}

/// Normalized description of one accepted signature line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDescriptor {
    /// Owning object, private-prefixed unless it is a global.
    pub owning_object: String,
    /// Member path with the owning object stripped (`length`, `minus`).
    pub bare_member_name: String,
    /// Aliased source expression, including the argument text for methods.
    pub qualified_path: String,
    /// Alias of the value a property holds or a method returns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_alias: Option<String>,
    /// Aliased arguments in call order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub argument_aliases: Vec<String>,
    /// Comment with surrounding whitespace and dashes stripped.
    pub comment: String,
    /// Property or method.
    pub kind: MemberKind,
    /// Original signature, kept for diagnostics.
    pub raw_line: String,
}

impl MemberDescriptor {
    /// Returns `true` for method descriptors.
    pub fn is_method(&self) -> bool {
        self.kind == MemberKind::Method
    }

    /// Number of `.` separators in the qualified path.
    pub fn path_depth(&self) -> usize {
        self.qualified_path.matches('.').count()
    }
}

/// Reason a signature line was routed to the problems artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemKind {
    /// Contains `[`.
    IndexedAccess,
    /// Contains `{`.
    ObjectLiteral,
    /// Contains `'` or `"`.
    StringLiteral,
    /// A property without `=`.
    MissingAssignment,
    /// No `.` separating an owning object from the member.
    MissingOwner,
    /// Ends in `)` without an opening parenthesis.
    UnbalancedCall,
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::IndexedAccess => "indexed property access is not supported",
            Self::ObjectLiteral => "object literal arguments are not supported",
            Self::StringLiteral => "string literal arguments are not supported",
            Self::MissingAssignment => "properties should have a return value",
            Self::MissingOwner => "signature has no owning object",
            Self::UnbalancedCall => "call has no opening parenthesis",
        };
        f.write_str(text)
    }
}

/// A rejected signature line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub kind: ProblemKind,
    /// Signature exactly as it appeared in the intermediate file.
    pub line: String,
}

/// Ordered collection of rejected lines awaiting manual remediation.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ProblemSink {
    problems: Vec<Problem>,
}

impl ProblemSink {
    pub fn push(&mut self, problem: Problem) {
        self.problems.push(problem);
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Problem> {
        self.problems.iter()
    }

    /// Renders the problems artifact: one raw line per problem.
    pub fn render(&self) -> String {
        let mut output = String::new();
        for problem in &self.problems {
            output.push_str(&problem.line);
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_intermediate_line() {
        let record = DocRecord::parse_line(
            "len = vec.length$SEPARATOR$documentation for length",
            "$SEPARATOR$",
        );
        assert_eq!(record.signature, "len = vec.length");
        assert_eq!(record.comment, "documentation for length");
    }

    #[test]
    fn line_without_separator_has_empty_comment() {
        let record = DocRecord::parse_line("qm.gc()", "$SEPARATOR$");
        assert_eq!(record.signature, "qm.gc()");
        assert!(record.comment.is_empty());
    }

    #[test]
    fn problem_sink_renders_raw_lines_in_order() {
        let mut sink = ProblemSink::default();
        sink.push(Problem {
            kind: ProblemKind::IndexedAccess,
            line: "rec = store[recId]".to_string(),
        });
        sink.push(Problem {
            kind: ProblemKind::MissingOwner,
            line: "dir()".to_string(),
        });
        assert_eq!(sink.render(), "rec = store[recId]\ndir()\n");
        assert_eq!(sink.len(), 2);
    }
}
