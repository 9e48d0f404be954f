//! configure.ac reader
//!
//! The version is the second argument of `AC_INIT`, bracket-quoted or not:
//! `AC_INIT([package], [1.2.5], [bug-report@example.com])`

use regex::Regex;

use crate::reader::traits::{VersionReader, file_patterns, find_marker};
use crate::reader::types::ReaderKind;

/// Reader for autoconf configure.ac files
pub struct AutomakeReader {
    file_patterns: Vec<Regex>,
    ac_init_re: Regex,
}

impl AutomakeReader {
    pub fn new() -> Self {
        Self {
            file_patterns: file_patterns(&[r"^configure\.ac$"]),
            ac_init_re: Regex::new(r"AC_INIT\(\s*\[?[^,\]]*\]?\s*,\s*\[?\s*([^,\]\)\s]+)").unwrap(),
        }
    }
}

impl Default for AutomakeReader {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionReader for AutomakeReader {
    fn kind(&self) -> ReaderKind {
        ReaderKind::Automake
    }

    fn file_patterns(&self) -> &[Regex] {
        &self.file_patterns
    }

    fn marker(&self) -> &'static str {
        "AC_INIT"
    }

    fn locate_version(&self, content: &str) -> Option<String> {
        find_marker(&self.ac_init_re, content)
    }
}
