//! Ordered set of version readers
//!
//! The order is the auto-detection priority: when a directory holds files for
//! several formats, the first reader in the registry with a matching file wins.

use std::sync::Arc;

use crate::config::ReadersConfig;
use crate::reader::csharp::CsharpReader;
use crate::reader::traits::VersionReader;
use crate::reader::types::ReaderKind;
use crate::reader::{
    AutomakeReader, CMakeReader, GradleReader, HelmChartReader, MakefileReader, MavenPomReader,
    PackageJsonReader, PythonSetupReader, VersionFileReader,
};

/// Immutable, ordered collection of version readers
#[derive(Clone)]
pub struct ReaderRegistry {
    readers: Vec<Arc<dyn VersionReader>>,
}

impl ReaderRegistry {
    /// Create a registry from readers already in priority order
    pub fn new(readers: Vec<Arc<dyn VersionReader>>) -> Self {
        Self { readers }
    }

    /// Create the default registry, keeping only the readers enabled in `config`
    pub fn from_config(config: &ReadersConfig) -> Self {
        let readers = ReaderKind::ALL
            .into_iter()
            .filter(|kind| config.is_enabled(*kind))
            .map(create_reader)
            .collect();
        Self::new(readers)
    }

    /// Iterate over readers in priority order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn VersionReader>> {
        self.readers.iter()
    }

    /// Kinds of the registered readers, in priority order
    pub fn kinds(&self) -> Vec<ReaderKind> {
        self.readers.iter().map(|reader| reader.kind()).collect()
    }

    /// Check if no reader is registered
    pub fn is_empty(&self) -> bool {
        self.readers.is_empty()
    }

    /// Find the first reader whose file patterns match `file_name`
    pub fn reader_for_file_name(&self, file_name: &str) -> Option<&Arc<dyn VersionReader>> {
        self.readers
            .iter()
            .find(|reader| reader.matches_file_name(file_name))
    }
}

impl Default for ReaderRegistry {
    fn default() -> Self {
        Self::from_config(&ReadersConfig::default())
    }
}

impl std::fmt::Debug for ReaderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.kinds()).finish()
    }
}

/// Create the reader handling `kind`
pub fn create_reader(kind: ReaderKind) -> Arc<dyn VersionReader> {
    match kind {
        ReaderKind::HelmChart => Arc::new(HelmChartReader::new()),
        ReaderKind::Makefile => Arc::new(MakefileReader::new()),
        ReaderKind::Automake => Arc::new(AutomakeReader::new()),
        ReaderKind::CMake => Arc::new(CMakeReader::new()),
        ReaderKind::Python => Arc::new(PythonSetupReader::new()),
        ReaderKind::MavenPom => Arc::new(MavenPomReader::new()),
        ReaderKind::JsPackage => Arc::new(PackageJsonReader::new()),
        ReaderKind::Gradle => Arc::new(GradleReader::new()),
        ReaderKind::GlobalAssembly => Arc::new(CsharpReader::global_assembly()),
        ReaderKind::CsharpProject => Arc::new(CsharpReader::project()),
        ReaderKind::VersionFile => Arc::new(VersionFileReader::new()),
    }
}
