//! Makefile reader
//!
//! Format examples:
//! - `VERSION = 1.2.4`
//! - `VERSION := 1.2.4`
//! - `VERSION ?= 1.2.4`

use regex::Regex;

use crate::reader::traits::{VersionReader, file_patterns, find_marker};
use crate::reader::types::ReaderKind;

/// Reader for Makefiles declaring a `VERSION` variable
pub struct MakefileReader {
    file_patterns: Vec<Regex>,
    version_re: Regex,
}

impl MakefileReader {
    pub fn new() -> Self {
        Self {
            file_patterns: file_patterns(&[r"^Makefile$"]),
            version_re: Regex::new(r"(?m)^[ \t]*VERSION[ \t]*[:?]?=[ \t]*(\S+)").unwrap(),
        }
    }
}

impl Default for MakefileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionReader for MakefileReader {
    fn kind(&self) -> ReaderKind {
        ReaderKind::Makefile
    }

    fn file_patterns(&self) -> &[Regex] {
        &self.file_patterns
    }

    fn marker(&self) -> &'static str {
        "VERSION"
    }

    fn locate_version(&self, content: &str) -> Option<String> {
        find_marker(&self.version_re, content)
    }
}
