//! Reader layer
//! - traits.rs: VersionReader trait definition
//! - types.rs: ReaderKind, the closed set of supported formats
//! - registry.rs: ordered ReaderRegistry used for auto-detection
//! - one module per build-manifest format

pub mod automake;
pub mod cmake;
pub mod csharp;
pub mod gradle;
pub mod helm_chart;
pub mod makefile;
pub mod maven_pom;
pub mod package_json;
pub mod python_setup;
pub mod registry;
pub mod traits;
pub mod types;
pub mod version_file;

pub use automake::AutomakeReader;
pub use cmake::CMakeReader;
pub use csharp::CsharpReader;
pub use gradle::GradleReader;
pub use helm_chart::HelmChartReader;
pub use makefile::MakefileReader;
pub use maven_pom::MavenPomReader;
pub use package_json::PackageJsonReader;
pub use python_setup::PythonSetupReader;
pub use registry::ReaderRegistry;
pub use traits::VersionReader;
pub use types::ReaderKind;
pub use version_file::VersionFileReader;
