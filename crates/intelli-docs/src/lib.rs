//! Documentation-to-stub generation for editor intellisense.
//!
//! This crate provides:
//! - An extractor that pulls `` - `signature`comment `` bullets out of a raw doc dump.
//! - A normalizer that classifies each signature as a property or a method and
//!   rewrites non-global identifiers into private-prefixed aliases.
//! - Member and per-object indexes that collect documented overloads.
//! - An emitter producing XML-doc annotated JavaScript object literals, plus a JSON dump.
//! - An assembler that appends the generated body to a static template.

#![deny(clippy::all)]

pub mod alias;
pub mod assembler;
pub mod error;
pub mod extractor;
pub mod index;
pub mod model;
pub mod pipeline;
pub mod signature;

pub mod generators;

pub use alias::{GlobalNameSet, DEFAULT_GLOBALS, DEFAULT_PRIVATE_PREFIX};
pub use assembler::{write_staged, Assembler};
pub use error::{DocsError, Result};
pub use extractor::{DocExtractor, ExtractReport, DEFAULT_SEPARATOR};
pub use index::{MemberIndex, ObjectGroupIndex};
pub use model::{DocRecord, MemberDescriptor, MemberKind, Problem, ProblemKind, ProblemSink};
pub use pipeline::{Pipeline, PipelineOptions, PipelineReport};
pub use signature::{LineOutcome, Normalization, Normalized, SignatureNormalizer};

pub use generators::intellisense::render_intellisense;

#[cfg(feature = "json")]
pub use generators::json::render_json;
