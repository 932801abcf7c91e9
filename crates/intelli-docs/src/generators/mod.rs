//! Output generators for the grouped members.

pub mod intellisense;

#[cfg(feature = "json")]
pub mod json;
