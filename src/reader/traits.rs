//! Version reader trait definition

use std::path::Path;

use regex::Regex;

use crate::reader::types::ReaderKind;
use crate::version::error::DetectError;
use crate::version::normalize::normalize_version;

/// Trait for reading a project version from one build-manifest format
///
/// Implementors only know where their format keeps the version. Turning the
/// located text into `major.minor.patch` is shared by [`read_version`](VersionReader::read_version).
pub trait VersionReader: Send + Sync {
    /// Returns the format this reader handles
    fn kind(&self) -> ReaderKind;

    /// Stable identifier used in diagnostics
    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// File name patterns, matched against a bare file name (not a path)
    fn file_patterns(&self) -> &[Regex];

    /// Human readable name of the version marker, used when it is missing
    fn marker(&self) -> &'static str;

    /// Locate the text holding the version, or `None` when the marker is absent
    fn locate_version(&self, content: &str) -> Option<String>;

    /// Check if any of the file patterns matches the given file name
    fn matches_file_name(&self, file_name: &str) -> bool {
        self.file_patterns()
            .iter()
            .any(|pattern| pattern.is_match(file_name))
    }

    /// Read `path` and return its normalized `major.minor.patch` version
    ///
    /// Content is decoded lossily, so manifests in legacy encodings still
    /// yield their (ASCII) version marker.
    fn read_version(&self, path: &Path) -> Result<String, DetectError> {
        let bytes = std::fs::read(path).map_err(|source| DetectError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);

        let located = self.locate_version(&content).ok_or_else(|| {
            DetectError::VersionMarkerNotFound {
                marker: self.marker(),
                path: path.to_path_buf(),
                reader: self.name(),
            }
        })?;

        normalize_version(&located).map_err(|source| DetectError::MalformedVersion {
            path: path.to_path_buf(),
            reader: self.name(),
            source,
        })
    }
}

/// Return the first capture group of the first match, or the whole match when
/// the pattern has no group
pub(crate) fn find_marker(re: &Regex, content: &str) -> Option<String> {
    let caps = re.captures(content)?;
    caps.get(1)
        .or_else(|| caps.get(0))
        .map(|m| m.as_str().to_string())
}

/// Compile file name patterns known to be valid
pub(crate) fn file_patterns(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r"version:\s*(\S+)", "version: 1.2.3", Some("1.2.3"))]
    #[case(r"AssemblyVersion>[0-9.]*", "<AssemblyVersion>1.0.0<", Some("AssemblyVersion>1.0.0"))]
    #[case(r"version:\s*(\S+)", "name: demo", None)]
    fn find_marker_prefers_first_group(
        #[case] pattern: &str,
        #[case] content: &str,
        #[case] expected: Option<&str>,
    ) {
        let re = Regex::new(pattern).unwrap();
        assert_eq!(find_marker(&re, content).as_deref(), expected);
    }
}
