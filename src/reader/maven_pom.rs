//! pom.xml reader
//!
//! Only the project's own `<version>` is wanted. Blocks that carry versions
//! of other artifacts (`<parent>`, dependencies, build and reporting plugins,
//! profiles) are cut out before searching.

use regex::Regex;

use crate::reader::traits::{VersionReader, file_patterns, find_marker};
use crate::reader::types::ReaderKind;

/// Reader for Maven project object model files
pub struct MavenPomReader {
    file_patterns: Vec<Regex>,
    foreign_blocks_re: Regex,
    version_re: Regex,
}

impl MavenPomReader {
    pub fn new() -> Self {
        Self {
            file_patterns: file_patterns(&[r"^pom\.xml$"]),
            foreign_blocks_re: Regex::new(
                r"(?s)<parent>.*?</parent>|<dependencyManagement>.*?</dependencyManagement>|<dependencies>.*?</dependencies>|<build>.*?</build>|<profiles>.*?</profiles>|<reporting>.*?</reporting>|<pluginRepositories>.*?</pluginRepositories>|<!--.*?-->",
            )
            .unwrap(),
            version_re: Regex::new(r"<version>\s*([^<\s]*)\s*</version>").unwrap(),
        }
    }
}

impl Default for MavenPomReader {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionReader for MavenPomReader {
    fn kind(&self) -> ReaderKind {
        ReaderKind::MavenPom
    }

    fn file_patterns(&self) -> &[Regex] {
        &self.file_patterns
    }

    fn marker(&self) -> &'static str {
        "<version>"
    }

    fn locate_version(&self, content: &str) -> Option<String> {
        let project_only = self.foreign_blocks_re.replace_all(content, "");
        find_marker(&self.version_re, &project_only)
    }
}
