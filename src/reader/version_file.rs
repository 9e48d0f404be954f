//! Plain VERSION file reader
//!
//! There is no marker: the first dotted numeric run of the whole file is the
//! version. A file without any digits has no version.

use regex::Regex;

use crate::reader::traits::{VersionReader, file_patterns};
use crate::reader::types::ReaderKind;
use crate::version::normalize::first_numeric_run;

/// Reader for a plain VERSION file
pub struct VersionFileReader {
    file_patterns: Vec<Regex>,
}

impl VersionFileReader {
    pub fn new() -> Self {
        Self {
            file_patterns: file_patterns(&[r"^VERSION$"]),
        }
    }
}

impl Default for VersionFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionReader for VersionFileReader {
    fn kind(&self) -> ReaderKind {
        ReaderKind::VersionFile
    }

    fn file_patterns(&self) -> &[Regex] {
        &self.file_patterns
    }

    fn marker(&self) -> &'static str {
        "version number"
    }

    fn locate_version(&self, content: &str) -> Option<String> {
        first_numeric_run(content).map(str::to_string)
    }
}
