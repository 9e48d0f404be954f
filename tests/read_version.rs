//! Version detection against checked-in manifest fixtures

mod helper;

use std::path::Path;

use rstest::rstest;
use semver::Version;

use helper::{testdata_dir, write_project};
use version_detect::reader::csharp::CsharpReader;
use version_detect::{DetectError, ReaderKind, Strategy, VersionReader};

#[test]
fn auto_detect_selects_helm_chart_first() {
    let detection = Strategy::new(testdata_dir("")).detect().unwrap();

    assert_eq!(detection.version, Version::new(1, 2, 3));
    assert_eq!(detection.reader, ReaderKind::HelmChart);
    assert_eq!(detection.path, testdata_dir("Chart.yaml"));
}

#[test]
fn auto_detect_tries_build_gradle_before_properties() {
    let strategy = Strategy::new(testdata_dir("gradle"));

    let (reader, candidates) = strategy.auto_detect(&testdata_dir("gradle")).unwrap();
    assert_eq!(reader.kind(), ReaderKind::Gradle);
    assert_eq!(
        candidates,
        vec![
            testdata_dir("gradle/build.gradle"),
            testdata_dir("gradle/gradle.properties"),
        ]
    );

    let detection = strategy.detect().unwrap();
    assert_eq!(detection.version, Version::new(1, 2, 7));
    assert_eq!(detection.path, testdata_dir("gradle/build.gradle"));
}

#[test]
fn auto_detect_matches_csharp_project_by_extension() {
    let detection = Strategy::new(testdata_dir("csharp")).detect().unwrap();

    assert_eq!(detection.reader, ReaderKind::CsharpProject);
    assert_eq!(detection.path, testdata_dir("csharp/project1.csproj"));
    assert_eq!(detection.version, Version::new(2016, 7, 0));
}

#[rstest]
#[case("Chart.yaml", ReaderKind::HelmChart, "1.2.3")]
#[case("Makefile", ReaderKind::Makefile, "1.2.4")]
#[case("configure.ac", ReaderKind::Automake, "1.2.5")]
#[case("CMakeLists.txt", ReaderKind::CMake, "1.2.6")]
#[case("build.gradle", ReaderKind::Gradle, "1.2.7")]
#[case("gradle.properties", ReaderKind::Gradle, "1.2.7")]
#[case("build.gradle.kts", ReaderKind::Gradle, "1.2.8")]
#[case("pom.xml", ReaderKind::MavenPom, "1.2.9")]
#[case("package.json", ReaderKind::JsPackage, "1.2.10")]
#[case("setup.py", ReaderKind::Python, "1.2.11")]
#[case("csharp.csproj", ReaderKind::CsharpProject, "2016.7.0")]
#[case("GlobalAssemblyInfo.cs", ReaderKind::GlobalAssembly, "2016.7.0")]
fn explicit_file_uses_matching_reader(
    #[case] file: &str,
    #[case] reader: ReaderKind,
    #[case] expected: &str,
) {
    let detection = Strategy::new(testdata_dir(""))
        .with_file(file)
        .detect()
        .unwrap();

    assert_eq!(detection.reader, reader);
    assert_eq!(detection.version, Version::parse(expected).unwrap());
    assert_eq!(detection.path, testdata_dir(file));
}

#[test]
fn explicit_file_may_carry_directory_components() {
    let version = Strategy::new(env!("CARGO_MANIFEST_DIR"))
        .with_file(Path::new("tests/testdata/Chart.yaml"))
        .read_version()
        .unwrap();

    assert_eq!(version, Version::new(1, 2, 3));
}

#[test]
fn explicit_unknown_file_names_the_file() {
    let err = Strategy::new(testdata_dir(""))
        .with_file("something.else")
        .read_version()
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "could not find a file version reader for something.else"
    );
    assert!(matches!(err, DetectError::NoReaderForFile { path } if path == Path::new("something.else")));
}

#[test]
fn directory_without_manifest_names_the_directory() {
    let project = write_project(&[("README.md", "# demo\n"), ("src/main.rs", "fn main() {}\n")]);

    let err = Strategy::new(project.path()).read_version().unwrap_err();

    assert!(matches!(err, DetectError::NoDetectableFile { dir } if dir == project.path()));
}

#[test]
fn global_assembly_reader_reports_missing_marker() {
    let path = testdata_dir("Chart.yaml");

    let err = CsharpReader::global_assembly()
        .read_version(&path)
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        format!(
            "AssemblyVersion not found in file {} using reader csharp",
            path.display()
        )
    );
}

#[test]
fn global_assembly_reader_reports_missing_file() {
    let path = testdata_dir("does-not-exists.cs");

    let err = CsharpReader::global_assembly()
        .read_version(&path)
        .unwrap_err();

    assert!(matches!(err, DetectError::Io { path: p, .. } if p == path));
}

#[test]
fn malformed_version_is_not_skipped() {
    let project = write_project(&[
        ("build.gradle", "version = '2.0'\n"),
        ("gradle.properties", "version=2.0.1\n"),
    ]);

    let err = Strategy::new(project.path()).read_version().unwrap_err();

    assert!(matches!(err, DetectError::MalformedVersion { .. }));
}

#[test]
fn version_file_is_used_when_nothing_else_matches() {
    let project = write_project(&[("VERSION", "3.1.4\n"), ("README.md", "# demo\n")]);

    let detection = Strategy::new(project.path()).detect().unwrap();

    assert_eq!(detection.reader, ReaderKind::VersionFile);
    assert_eq!(detection.version, Version::new(3, 1, 4));
}
