//! CMakeLists.txt reader
//!
//! Reads the `VERSION` argument of the `project()` command. The `VERSION`
//! keyword of `cmake_minimum_required()` is ignored.

use regex::Regex;

use crate::reader::traits::{VersionReader, file_patterns, find_marker};
use crate::reader::types::ReaderKind;

/// Reader for CMake projects
pub struct CMakeReader {
    file_patterns: Vec<Regex>,
    project_re: Regex,
}

impl CMakeReader {
    pub fn new() -> Self {
        Self {
            file_patterns: file_patterns(&[r"^CMakeLists\.txt$"]),
            project_re: Regex::new(r"(?i)\bproject\s*\([^)]*?\bVERSION\s+([0-9][0-9.]*)").unwrap(),
        }
    }
}

impl Default for CMakeReader {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionReader for CMakeReader {
    fn kind(&self) -> ReaderKind {
        ReaderKind::CMake
    }

    fn file_patterns(&self) -> &[Regex] {
        &self.file_patterns
    }

    fn marker(&self) -> &'static str {
        "project VERSION"
    }

    fn locate_version(&self, content: &str) -> Option<String> {
        find_marker(&self.project_re, content)
    }
}
