//! Common types for version readers

/// Build-manifest format handled by a version reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReaderKind {
    /// Helm chart (Chart.yaml)
    HelmChart,
    /// Makefile with a `VERSION :=` assignment
    Makefile,
    /// Autoconf script (configure.ac)
    Automake,
    /// CMake project (CMakeLists.txt)
    CMake,
    /// Python setuptools script (setup.py)
    Python,
    /// Maven project object model (pom.xml)
    MavenPom,
    /// npm manifest (package.json)
    JsPackage,
    /// Gradle build script or properties (build.gradle, build.gradle.kts, gradle.properties)
    Gradle,
    /// .NET global assembly metadata (GlobalAssemblyInfo.cs)
    GlobalAssembly,
    /// .NET project file (*.csproj)
    CsharpProject,
    /// Plain VERSION file
    VersionFile,
}

impl ReaderKind {
    /// All reader kinds, in default auto-detection priority
    pub const ALL: [ReaderKind; 11] = [
        ReaderKind::HelmChart,
        ReaderKind::Makefile,
        ReaderKind::Automake,
        ReaderKind::CMake,
        ReaderKind::Python,
        ReaderKind::MavenPom,
        ReaderKind::JsPackage,
        ReaderKind::Gradle,
        ReaderKind::GlobalAssembly,
        ReaderKind::CsharpProject,
        ReaderKind::VersionFile,
    ];

    /// Returns the string representation of the reader kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ReaderKind::HelmChart => "helm-chart",
            ReaderKind::Makefile => "makefile",
            ReaderKind::Automake => "automake",
            ReaderKind::CMake => "cmake",
            ReaderKind::Python => "python",
            ReaderKind::MavenPom => "maven-pom",
            ReaderKind::JsPackage => "js-package",
            ReaderKind::Gradle => "gradle",
            ReaderKind::GlobalAssembly => "csharp",
            ReaderKind::CsharpProject => "csharp-project",
            ReaderKind::VersionFile => "version-file",
        }
    }
}

impl std::fmt::Display for ReaderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReaderKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReaderKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or(())
    }
}
