use super::*;
use pretty_assertions::assert_eq;

fn extension() -> ReportingExtension {
    ReportingExtension::new(ProjectLayout::new("/work/app", "app"))
}

#[test]
fn test_constants() {
    assert_eq!(ReportingExtension::NAME, "reporting");
    assert_eq!(ReportingExtension::DEFAULT_REPORTS_DIR_NAME, "reports");
}

#[test]
fn test_conventional_base_directory() {
    let reporting = extension();

    assert_eq!(reporting.base_directory(), PathBuf::from("/work/app/build/reports"));
    assert!(!reporting.has_explicit_base_directory());
}

#[test]
fn test_convention_follows_build_dir() {
    let mut reporting = extension();
    reporting.set_build_dir("out");

    assert_eq!(reporting.base_directory(), PathBuf::from("/work/app/out/reports"));
    assert_eq!(
        reporting.file("tests/index.html"),
        PathBuf::from("/work/app/out/reports/tests/index.html")
    );
}

#[test]
fn test_explicit_base_directory() {
    let mut reporting = extension();
    reporting.set_base_directory("our-reports");

    assert_eq!(reporting.base_directory(), PathBuf::from("/work/app/our-reports"));
    assert!(reporting.has_explicit_base_directory());

    // An explicit directory no longer follows the build directory.
    reporting.set_build_dir("out");
    assert_eq!(reporting.base_directory(), PathBuf::from("/work/app/our-reports"));

    reporting.reset_base_directory();
    assert_eq!(reporting.base_directory(), PathBuf::from("/work/app/out/reports"));
}

#[test]
fn test_absolute_base_directory() {
    let mut reporting = extension();
    reporting.set_base_directory("/var/reports");
    assert_eq!(reporting.base_directory(), PathBuf::from("/var/reports"));
}

#[test]
fn test_file_is_resolved_lazily() {
    let mut reporting = extension();
    let before = reporting.file("problems/problems-report.json");
    reporting.set_base_directory("elsewhere");
    let after = reporting.file("problems/problems-report.json");

    assert_eq!(
        before,
        PathBuf::from("/work/app/build/reports/problems/problems-report.json")
    );
    assert_eq!(
        after,
        PathBuf::from("/work/app/elsewhere/problems/problems-report.json")
    );
}

#[test]
fn test_file_normalizes() {
    let reporting = extension();

    assert_eq!(
        reporting.file("./a/../b/c.txt"),
        PathBuf::from("/work/app/build/reports/b/c.txt")
    );
    assert_eq!(reporting.file("../logs"), PathBuf::from("/work/app/build/logs"));
}

#[test]
fn test_file_keeps_absolute_paths() {
    assert_eq!(extension().file("/tmp/x.json"), PathBuf::from("/tmp/x.json"));
}

#[test]
fn test_normalize_edges() {
    assert_eq!(normalize(Path::new("/../a")), PathBuf::from("/a"));
    assert_eq!(normalize(Path::new("../a/./b")), PathBuf::from("../a/b"));
    assert_eq!(normalize(Path::new("a/b/../../..")), PathBuf::from(".."));
}

#[test]
fn test_api_doc_title() {
    assert_eq!(extension().api_doc_title(), "app API");

    let versioned = ReportingExtension::new(
        ProjectLayout::new("/work/app", "app").with_version("1.2"),
    );
    assert_eq!(versioned.api_doc_title(), "app 1.2 API");

    let unspecified = ReportingExtension::new(
        ProjectLayout::new("/work/app", "app").with_version("unspecified"),
    );
    assert_eq!(unspecified.api_doc_title(), "app API");
}

#[test]
fn test_layout_accessors() {
    let layout = ProjectLayout::new("/work/app/./", "app").with_build_dir("/tmp/build");

    assert_eq!(layout.project_dir(), Path::new("/work/app"));
    assert_eq!(layout.build_dir(), Path::new("/tmp/build"));
    assert_eq!(layout.name(), "app");
    assert_eq!(layout.version(), None);
}

#[test]
fn test_reports_container() {
    let mut reporting = extension();
    assert!(reporting.reports().is_empty());

    assert!(reporting
        .reports_mut()
        .register(crate::SimpleReport::new("html", "HTML", crate::OutputType::Directory))
        .is_ok());
    assert_eq!(reporting.reports().len(), 1);
}
