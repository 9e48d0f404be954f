//! Chart.yaml reader
//!
//! Reads the top-level `version:` key of a Helm chart. `appVersion:` and
//! nested keys are not considered.

use regex::Regex;

use crate::reader::traits::{VersionReader, file_patterns, find_marker};
use crate::reader::types::ReaderKind;

/// Reader for Helm Chart.yaml files
pub struct HelmChartReader {
    file_patterns: Vec<Regex>,
    /// Match: `version: 1.2.3` at the start of a line
    version_re: Regex,
}

impl HelmChartReader {
    pub fn new() -> Self {
        Self {
            file_patterns: file_patterns(&[r"^Chart\.yaml$"]),
            version_re: Regex::new(r#"(?m)^version:[ \t]*["']?([^\s"'#]+)"#).unwrap(),
        }
    }
}

impl Default for HelmChartReader {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionReader for HelmChartReader {
    fn kind(&self) -> ReaderKind {
        ReaderKind::HelmChart
    }

    fn file_patterns(&self) -> &[Regex] {
        &self.file_patterns
    }

    fn marker(&self) -> &'static str {
        "version"
    }

    fn locate_version(&self, content: &str) -> Option<String> {
        find_marker(&self.version_re, content)
    }
}
