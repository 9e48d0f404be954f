//! Version detection strategy
//!
//! Two entry modes:
//! - explicit file: the reader is chosen from the file name
//! - auto-detect: the first reader in the registry with a matching file in
//!   the directory wins, and all of its matching files become candidates
//!
//! Candidates are tried in order. A candidate without the reader's version
//! marker is skipped. Any other failure stops detection.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use semver::Version;
use tracing::debug;

use crate::reader::registry::ReaderRegistry;
use crate::reader::traits::VersionReader;
use crate::reader::types::ReaderKind;
use crate::version::error::DetectError;

/// Result of a successful detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub version: Version,
    /// Reader that produced the version
    pub reader: ReaderKind,
    /// File the version was read from
    pub path: PathBuf,
}

/// Detection request: a base directory and an optional file relative to it
#[derive(Debug, Clone, Default)]
pub struct Strategy {
    dir: PathBuf,
    file: Option<PathBuf>,
    registry: ReaderRegistry,
}

impl Strategy {
    /// Create a strategy for `dir`. An empty path means the current working directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    /// Read the version from this file instead of auto-detecting
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into()).filter(|f: &PathBuf| !f.as_os_str().is_empty());
        self
    }

    /// Use `registry` instead of the default set of readers
    pub fn with_registry(mut self, registry: ReaderRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Detect the project version
    pub fn read_version(&self) -> Result<Version, DetectError> {
        self.detect().map(|detection| detection.version)
    }

    /// Detect the project version, along with the reader and file it came from
    pub fn detect(&self) -> Result<Detection, DetectError> {
        let dir = self.base_dir()?;

        let (reader, candidates) = match &self.file {
            Some(file) => {
                let reader = self.reader_for_file(file)?;
                (reader, vec![dir.join(file)])
            }
            None => self.auto_detect(&dir)?,
        };

        let explicit = self.file.is_some();
        for path in &candidates {
            debug!(
                "Reading version from file {} using reader {}",
                path.display(),
                reader.name()
            );
            match reader.read_version(path) {
                Ok(version) => {
                    debug!("Found version {}", version);
                    return Ok(Detection {
                        version: Version::parse(&version)?,
                        reader: reader.kind(),
                        path: path.clone(),
                    });
                }
                Err(err @ DetectError::VersionMarkerNotFound { .. }) if explicit => {
                    return Err(err);
                }
                Err(DetectError::VersionMarkerNotFound { .. }) => {
                    debug!("File {} has no version", path.display());
                }
                Err(err) => return Err(err),
            }
        }

        Err(DetectError::NoVersionFound {
            paths: candidates,
            reader: reader.name(),
        })
    }

    /// Find the reader for an explicitly given file, matching on its base name
    pub fn reader_for_file(&self, file: &Path) -> Result<Arc<dyn VersionReader>, DetectError> {
        file.file_name()
            .and_then(|name| self.registry.reader_for_file_name(&name.to_string_lossy()))
            .cloned()
            .ok_or_else(|| DetectError::NoReaderForFile {
                path: file.to_path_buf(),
            })
    }

    /// Select a reader and its candidate files from the entries of `dir`
    ///
    /// Subdirectories are not searched. Candidates are ordered by pattern, then
    /// by file name.
    pub fn auto_detect(
        &self,
        dir: &Path,
    ) -> Result<(Arc<dyn VersionReader>, Vec<PathBuf>), DetectError> {
        let files = list_files(dir)?;

        for reader in self.registry.iter() {
            let mut candidates: Vec<PathBuf> = Vec::new();
            for pattern in reader.file_patterns() {
                for (_, path) in files.iter().filter(|(name, _)| pattern.is_match(name)) {
                    if !candidates.contains(path) {
                        debug!(
                            "Adding file {} as a candidate to read version using {} reader",
                            path.display(),
                            reader.name()
                        );
                        candidates.push(path.clone());
                    }
                }
            }
            if !candidates.is_empty() {
                return Ok((Arc::clone(reader), candidates));
            }
        }

        Err(DetectError::NoDetectableFile {
            dir: dir.to_path_buf(),
        })
    }

    fn base_dir(&self) -> Result<PathBuf, DetectError> {
        if self.dir.as_os_str().is_empty() {
            return std::env::current_dir().map_err(DetectError::CurrentDir);
        }
        std::path::absolute(&self.dir).map_err(DetectError::CurrentDir)
    }
}

/// Non-directory entries of `dir` as (file name, path), sorted by file name
///
/// The name is lossily decoded for pattern matching only; the path keeps the
/// original bytes so non-UTF-8 names stay readable.
fn list_files(dir: &Path) -> Result<Vec<(String, PathBuf)>, DetectError> {
    let list_err = |source: std::io::Error| DetectError::ListDir {
        dir: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        files.push((entry.file_name().to_string_lossy().into_owned(), path));
    }
    files.sort();
    Ok(files)
}
