//! Staged artifact writes and final stub assembly.
//!
//! Every artifact is written to a temporary file next to its destination and
//! renamed into place only once it is complete. When anything fails the
//! temporary file is dropped and the previous artifact, if any, is untouched.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{DocsError, Result};

/// Write `contents` to `path` through a staged temporary file.
pub fn write_staged(path: &Path, contents: &str) -> Result<()> {
    stage(path, |file| file.write_all(contents.as_bytes()))
}

/// Write `path` through a staged temporary file filled by `fill`.
pub(crate) fn stage<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|error| DocsError::io(dir, error))?;

    let mut staged = NamedTempFile::new_in(dir).map_err(|error| DocsError::io(dir, error))?;
    let written = fill(staged.as_file_mut()).and_then(|()| staged.as_file_mut().flush());
    written.map_err(|error| DocsError::io(staged.path(), error))?;
    staged
        .persist(path)
        .map_err(|error| DocsError::io(path, error.error))?;
    debug!(path = %path.display(), "wrote artifact");
    Ok(())
}

/// Copies the static template and appends the generated stub body.
#[derive(Debug, Default, Clone, Copy)]
pub struct Assembler;

impl Assembler {
    pub fn new() -> Self {
        Self
    }

    /// Produce `output` as `template` followed by `body`.
    ///
    /// The template is copied verbatim; the body is appended after it with no
    /// merging against what the template already contains.
    pub fn assemble(&self, template: &Path, body: &str, output: &Path) -> Result<()> {
        let mut source = File::open(template).map_err(|error| DocsError::io(template, error))?;
        stage(output, |file| {
            io::copy(&mut source, file)?;
            file.write_all(body.as_bytes())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn appends_body_after_template() {
        let temp = TempDir::new().unwrap();
        let template = temp.path().join("intelli_tail.js");
        let output = temp.path().join("out").join("stub.js");
        fs::write(&template, "// tail\n").unwrap();

        Assembler::new()
            .assemble(&template, "var _vec = {\n}\n\n", &output)
            .unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "// tail\nvar _vec = {\n}\n\n"
        );
    }

    #[test]
    fn missing_template_leaves_output_untouched() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("stub.js");
        fs::write(&output, "previous").unwrap();

        let err = Assembler::new()
            .assemble(&temp.path().join("missing.js"), "body", &output)
            .unwrap_err();

        assert!(matches!(err, DocsError::Io { .. }));
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[test]
    fn staged_write_replaces_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("problems.js");
        fs::write(&path, "old\n").unwrap();

        write_staged(&path, "").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
