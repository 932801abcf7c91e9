//! Classification and normalization of documented signatures.
//!
//! A signature ending in `)` is a method call, anything else is a property
//! access. Both are rewritten into a synthetic JavaScript statement with every
//! non-global identifier replaced by its private alias, and described by a
//! [`MemberDescriptor`] for the stub emitter.

use tracing::{debug, warn};

use crate::alias::GlobalNameSet;
use crate::error::{DocsError, Result};
use crate::index::MemberIndex;
use crate::model::{DocRecord, MemberDescriptor, MemberKind, Problem, ProblemKind, ProblemSink};

/// An accepted signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Key under which the descriptor is stored in the [`MemberIndex`].
    pub key: String,
    /// Synthetic JavaScript statement for the record.
    pub statement: String,
    pub descriptor: MemberDescriptor,
}

/// What happened to a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Empty signature, nothing to do.
    Skipped,
    /// Unsupported shape, needs manual handling.
    Problem(Problem),
    Accepted(Normalized),
}

/// Everything produced by normalizing a full record stream.
#[derive(Debug, Default, Clone)]
pub struct Normalization {
    pub members: MemberIndex,
    pub problems: ProblemSink,
    /// Synthetic statements in input order.
    pub statements: Vec<String>,
    pub properties: usize,
    pub methods: usize,
    pub skipped: usize,
}

impl Normalization {
    /// Renders the synthetic statements, one per line.
    pub fn render_statements(&self) -> String {
        let mut output = String::new();
        for statement in &self.statements {
            output.push_str(statement);
            output.push('\n');
        }
        output
    }
}

/// Turns signature records into member descriptors.
#[derive(Debug, Clone, Default)]
pub struct SignatureNormalizer {
    globals: GlobalNameSet,
}

impl SignatureNormalizer {
    pub fn new(globals: GlobalNameSet) -> Self {
        Self { globals }
    }

    pub fn globals(&self) -> &GlobalNameSet {
        &self.globals
    }

    /// Normalize every record, stopping at the first fatal inconsistency.
    pub fn run<'a, I>(&self, records: I) -> Result<Normalization>
    where
        I: IntoIterator<Item = &'a DocRecord>,
    {
        let mut result = Normalization::default();
        for record in records {
            match self.normalize(record)? {
                LineOutcome::Skipped => result.skipped += 1,
                LineOutcome::Problem(problem) => {
                    warn!(line = %problem.line, "{}", problem.kind);
                    result.problems.push(problem);
                }
                LineOutcome::Accepted(normalized) => {
                    match normalized.descriptor.kind {
                        MemberKind::Property => result.properties += 1,
                        MemberKind::Method => result.methods += 1,
                    }
                    result.statements.push(normalized.statement);
                    result.members.insert(normalized.key, normalized.descriptor);
                }
            }
        }
        Ok(result)
    }

    /// Classify and normalize a single record.
    pub fn normalize(&self, record: &DocRecord) -> Result<LineOutcome> {
        let line = record.signature.trim();
        if line.is_empty() {
            return Ok(LineOutcome::Skipped);
        }
        if let Some(kind) = unsupported_shape(line) {
            return Ok(problem(kind, line));
        }

        let comment = clean_comment(&record.comment);
        if line.ends_with(')') {
            debug!(line, "method");
            self.method(line, comment)
        } else {
            debug!(line, "property");
            Ok(self.property(line, comment))
        }
    }

    /// `len = vec.length` becomes `_vec.length = _len`.
    fn property(&self, line: &str, comment: String) -> LineOutcome {
        let Some((lhs, rhs)) = line.split_once('=') else {
            return problem(ProblemKind::MissingAssignment, line);
        };
        let (lhs, rhs) = (lhs.trim(), rhs.trim());
        let Some((owner, member)) = rhs.split_once('.') else {
            return problem(ProblemKind::MissingOwner, line);
        };

        let qualified_path = self.globals.alias_owned(owner, rhs);
        let return_alias = self.globals.alias(lhs);
        let statement = format!("{qualified_path} = {return_alias}");

        LineOutcome::Accepted(Normalized {
            key: qualified_path.clone(),
            statement,
            descriptor: MemberDescriptor {
                owning_object: self.globals.alias(owner),
                bare_member_name: member.to_string(),
                qualified_path,
                return_alias: Some(return_alias),
                argument_aliases: Vec::new(),
                comment,
                kind: MemberKind::Property,
                raw_line: line.to_string(),
            },
        })
    }

    /// `vec3 = vec.minus(vec2)` becomes
    /// `_vec.minus = function (_vec2) { ... return _vec3; }`.
    fn method(&self, line: &str, comment: String) -> Result<LineOutcome> {
        let (return_alias, call) = match line.split_once('=') {
            Some((lhs, rhs)) => {
                let lhs = lhs.trim();
                if self.globals.contains(lhs) {
                    return Err(DocsError::GlobalReturnTarget {
                        line: line.to_string(),
                        target: lhs.to_string(),
                    });
                }
                (Some(self.globals.alias(lhs)), rhs.trim())
            }
            None => (None, line),
        };

        let Some(open) = call.find('(') else {
            return Ok(problem(ProblemKind::UnbalancedCall, line));
        };
        let Some((owner, _)) = call[..open].split_once('.') else {
            return Ok(problem(ProblemKind::MissingOwner, line));
        };
        let dot = owner.len();
        let member = &call[dot + 1..open];
        let arguments = &call[open + 1..call.len() - 1];

        let argument_aliases: Vec<String> = arguments
            .split(',')
            .map(str::trim)
            .filter(|arg| !arg.is_empty())
            .map(|arg| self.globals.alias(arg))
            .collect();

        let path = self.globals.alias_owned(owner, &call[..open]);
        let body = match &return_alias {
            Some(ret) => format!("{{\n/// <summary>{comment}</summary>\nreturn {ret};\n}}"),
            None => format!("{{\n/// <summary>{comment}</summary>\n}}"),
        };
        let statement = format!(
            "{path} = function ({}) {body}",
            argument_aliases.join(", ")
        );

        Ok(LineOutcome::Accepted(Normalized {
            key: path,
            statement,
            descriptor: MemberDescriptor {
                owning_object: self.globals.alias(owner),
                bare_member_name: member.to_string(),
                qualified_path: self.globals.alias_owned(owner, call),
                return_alias,
                argument_aliases,
                comment,
                kind: MemberKind::Method,
                raw_line: line.to_string(),
            },
        }))
    }
}

fn unsupported_shape(line: &str) -> Option<ProblemKind> {
    if line.contains('[') {
        Some(ProblemKind::IndexedAccess)
    } else if line.contains('{') {
        Some(ProblemKind::ObjectLiteral)
    } else if line.contains(['\'', '"']) {
        Some(ProblemKind::StringLiteral)
    } else {
        None
    }
}

fn problem(kind: ProblemKind, line: &str) -> LineOutcome {
    LineOutcome::Problem(Problem {
        kind,
        line: line.to_string(),
    })
}

/// Trims the comment, then strips the `--` leaders doc authors put in front.
fn clean_comment(comment: &str) -> String {
    comment.trim().trim_matches('-').to_string()
}
