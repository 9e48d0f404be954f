//! package.json reader

use regex::Regex;

use crate::reader::traits::{VersionReader, file_patterns, find_marker};
use crate::reader::types::ReaderKind;

/// Reader for npm package.json manifests
pub struct PackageJsonReader {
    file_patterns: Vec<Regex>,
    /// Match: `"version": "1.2.10"`
    version_re: Regex,
}

impl PackageJsonReader {
    pub fn new() -> Self {
        Self {
            file_patterns: file_patterns(&[r"^package\.json$"]),
            version_re: Regex::new(r#""version"\s*:\s*"([^"]*)""#).unwrap(),
        }
    }
}

impl Default for PackageJsonReader {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionReader for PackageJsonReader {
    fn kind(&self) -> ReaderKind {
        ReaderKind::JsPackage
    }

    fn file_patterns(&self) -> &[Regex] {
        &self.file_patterns
    }

    fn marker(&self) -> &'static str {
        "\"version\""
    }

    fn locate_version(&self, content: &str) -> Option<String> {
        find_marker(&self.version_re, content)
    }
}
