//! End-to-end driver tying the stages together.
//!
//! ```text
//! raw docs --extract--> intermediate --normalize--> members --group--> objects
//!                                         |                              |
//!                                      problems                    stub body
//!                                                                        |
//!                                             template + body --assemble--> stub
//! ```

use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::alias::GlobalNameSet;
use crate::assembler::{stage, write_staged, Assembler};
use crate::error::{DocsError, Result};
use crate::extractor::{DocExtractor, ExtractReport, DEFAULT_SEPARATOR};
use crate::generators::intellisense::render_intellisense;
use crate::index::ObjectGroupIndex;
use crate::model::DocRecord;
use crate::signature::SignatureNormalizer;

/// File locations and settings for one run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Raw documentation dump.
    pub input: PathBuf,
    /// Extracted `signature<SEPARATOR>comment` records.
    pub intermediate: PathBuf,
    /// Rejected signatures, one per line.
    pub problems: PathBuf,
    /// Static JavaScript the generated body is appended to.
    pub template: PathBuf,
    /// Final stub.
    pub output: PathBuf,
    /// Synthetic statements, when requested.
    pub statements: Option<PathBuf>,
    /// JSON dump of the object groups, when requested.
    pub dump_groups: Option<PathBuf>,
    pub separator: String,
    pub globals: GlobalNameSet,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from("intellisense_doc.md"),
            intermediate: PathBuf::from("intellisense.js"),
            problems: PathBuf::from("problems.js"),
            template: PathBuf::from("intelli_tail.js"),
            output: PathBuf::from("../qminer.intellisense.js"),
            statements: None,
            dump_groups: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            globals: GlobalNameSet::default(),
        }
    }
}

/// Counters for a generation run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PipelineReport {
    /// Present when the extraction stage ran.
    pub extract: Option<ExtractReport>,
    pub records: usize,
    pub properties: usize,
    pub methods: usize,
    pub problems: usize,
    pub objects: usize,
    /// Accepted members left out of the stub because their path is nested.
    pub nested_dropped: usize,
}

/// Runs the extraction and generation stages against files on disk.
#[derive(Debug, Clone)]
pub struct Pipeline {
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Both stages, extraction first.
    pub fn run(&self) -> Result<PipelineReport> {
        let extract = self.extract()?;
        let mut report = self.generate()?;
        report.extract = Some(extract);
        Ok(report)
    }

    /// Raw documentation to intermediate records.
    pub fn extract(&self) -> Result<ExtractReport> {
        let input = &self.options.input;
        let source = File::open(input).map_err(|error| DocsError::io(input, error))?;
        let extractor = DocExtractor::new(self.options.separator.clone());

        // A read failure halfway through must leave the previous intermediate.
        let mut records = Vec::new();
        let report = extractor
            .extract(BufReader::new(source), &mut records)
            .map_err(|error| DocsError::io(input, error))?;
        stage(&self.options.intermediate, |file| file.write_all(&records))?;

        info!(
            input = %self.options.input.display(),
            records = report.records_written,
            "extracted documentation records"
        );
        Ok(report)
    }

    /// Intermediate records to problems, statements and the final stub.
    ///
    /// Nothing is written when normalization hits a fatal inconsistency.
    pub fn generate(&self) -> Result<PipelineReport> {
        let intermediate = read(&self.options.intermediate)?;
        let records: Vec<DocRecord> = intermediate
            .lines()
            .map(|line| DocRecord::parse_line(line.trim(), &self.options.separator))
            .collect();

        let normalizer = SignatureNormalizer::new(self.options.globals.clone());
        let normalization = normalizer.run(&records)?;
        let groups = ObjectGroupIndex::from_members(&normalization.members);

        write_staged(&self.options.problems, &normalization.problems.render())?;
        if let Some(path) = &self.options.statements {
            write_staged(path, &normalization.render_statements())?;
        }
        if let Some(path) = &self.options.dump_groups {
            write_staged(path, &dump_groups(&groups)?)?;
        }

        let body = render_intellisense(&groups);
        Assembler::new().assemble(&self.options.template, &body, &self.options.output)?;

        let report = PipelineReport {
            extract: None,
            records: records.len(),
            properties: normalization.properties,
            methods: normalization.methods,
            problems: normalization.problems.len(),
            objects: groups.len(),
            nested_dropped: groups.dropped(),
        };
        info!(
            output = %self.options.output.display(),
            objects = report.objects,
            problems = report.problems,
            "generated intellisense stub"
        );
        Ok(report)
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|error| DocsError::io(path, error))
}

#[cfg(feature = "json")]
fn dump_groups(groups: &ObjectGroupIndex) -> Result<String> {
    crate::generators::json::render_json(groups)
}

#[cfg(not(feature = "json"))]
fn dump_groups(_groups: &ObjectGroupIndex) -> Result<String> {
    Err(DocsError::Other {
        message: "dumping object groups requires the `json` feature".to_string(),
    })
}
