//! .NET readers
//!
//! Project files and global assembly metadata keep the assembly version
//! behind different markers but hold the same dotted value:
//! - project file: `<AssemblyVersion>2016.7.00</AssemblyVersion>`
//! - GlobalAssemblyInfo.cs: `[assembly: AssemblyVersion("2016.7.00.00")]`
//!
//! Both are served by [`CsharpReader`], parameterized by its marker.

use regex::Regex;

use crate::reader::traits::{VersionReader, file_patterns, find_marker};
use crate::reader::types::ReaderKind;

/// Reader for .NET assembly versions
pub struct CsharpReader {
    kind: ReaderKind,
    file_patterns: Vec<Regex>,
    marker_re: Regex,
}

impl CsharpReader {
    /// Reader for `*.csproj` project files
    pub fn project() -> Self {
        Self {
            kind: ReaderKind::CsharpProject,
            file_patterns: file_patterns(&[r"\.csproj$"]),
            marker_re: Regex::new(r"AssemblyVersion>([0-9.]*)").unwrap(),
        }
    }

    /// Reader for `GlobalAssemblyInfo.cs`, including prefixed variants such as
    /// `SharedGlobalAssemblyInfo.cs`
    pub fn global_assembly() -> Self {
        Self {
            kind: ReaderKind::GlobalAssembly,
            file_patterns: file_patterns(&[r"GlobalAssemblyInfo\.cs$"]),
            marker_re: Regex::new(r#"AssemblyVersion\("([0-9.]*)"\)"#).unwrap(),
        }
    }
}

impl VersionReader for CsharpReader {
    fn kind(&self) -> ReaderKind {
        self.kind
    }

    fn file_patterns(&self) -> &[Regex] {
        &self.file_patterns
    }

    fn marker(&self) -> &'static str {
        "AssemblyVersion"
    }

    fn locate_version(&self, content: &str) -> Option<String> {
        find_marker(&self.marker_re, content)
    }
}
