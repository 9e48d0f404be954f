//! Gradle reader
//!
//! Covers the Groovy build script, the Kotlin DSL build script and
//! gradle.properties. All three declare the version as a line-level
//! assignment:
//! - `version = '1.2.7'` or `version '1.2.7'` (build.gradle)
//! - `version = "1.2.8"` (build.gradle.kts)
//! - `version=1.2.7` (gradle.properties)

use regex::Regex;

use crate::reader::traits::{VersionReader, file_patterns, find_marker};
use crate::reader::types::ReaderKind;

/// Reader for Gradle builds
pub struct GradleReader {
    file_patterns: Vec<Regex>,
    version_re: Regex,
}

impl GradleReader {
    pub fn new() -> Self {
        Self {
            file_patterns: file_patterns(&[
                r"^build\.gradle$",
                r"^build\.gradle\.kts$",
                r"^gradle\.properties$",
            ]),
            version_re: Regex::new(r#"(?m)^[ \t]*version(?:[ \t]*[=:][ \t]*|[ \t]+)['"]?([^'"\s]+)"#).unwrap(),
        }
    }
}

impl Default for GradleReader {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionReader for GradleReader {
    fn kind(&self) -> ReaderKind {
        ReaderKind::Gradle
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
