//! setup.py reader

use regex::Regex;

use crate::reader::traits::{VersionReader, file_patterns, find_marker};
use crate::reader::types::ReaderKind;

/// Reader for setuptools setup.py scripts
pub struct PythonSetupReader {
    file_patterns: Vec<Regex>,
    /// Match: `version="1.2.11"` or `version = '1.2.11'`
    version_re: Regex,
}

impl PythonSetupReader {
    pub fn new() -> Self {
        Self {
            file_patterns: file_patterns(&[r"^setup\.py$"]),
            version_re: Regex::new(r#"\bversion\s*=\s*['"]([^'"]*)['"]"#).unwrap(),
        }
    }
}

impl Default for PythonSetupReader {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionReader for PythonSetupReader {
    fn kind(&self) -> ReaderKind {
        ReaderKind::Python
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
