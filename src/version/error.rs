use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a located version substring into `major.minor.patch`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("version value {value:?} has fewer than 3 components")]
    TooFewComponents { value: String },

    #[error("invalid component {component:?} in version value {value:?}: {source}")]
    InvalidComponent {
        value: String,
        component: String,
        #[source]
        source: ParseIntError,
    },
}

/// Failure to detect a project version
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("failed to get current working directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not list files, in directory {}: {source}", dir.display())]
    ListDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not find a file version reader for {}", path.display())]
    NoReaderForFile { path: PathBuf },

    #[error("could not find a file to read version from, in directory {}", dir.display())]
    NoDetectableFile { dir: PathBuf },

    #[error("{marker} not found in file {} using reader {reader}", path.display())]
    VersionMarkerNotFound {
        marker: &'static str,
        path: PathBuf,
        reader: &'static str,
    },

    #[error("malformed version in file {} using reader {reader}: {source}", path.display())]
    MalformedVersion {
        path: PathBuf,
        reader: &'static str,
        #[source]
        source: VersionError,
    },

    #[error("could not find version from {paths:?} using reader {reader}")]
    NoVersionFound {
        paths: Vec<PathBuf>,
        reader: &'static str,
    },

    #[error("invalid semantic version: {0}")]
    InvalidSemver(#[from] semver::Error),
}
