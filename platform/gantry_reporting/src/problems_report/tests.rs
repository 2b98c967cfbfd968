use super::*;
use crate::{OutputType, ProjectLayout};
use gantry_problems::{taxonomy, ProblemDefinition, ProblemLocation, Severity};
use pretty_assertions::assert_eq;
use std::path::Path;

fn extension() -> ReportingExtension {
    ReportingExtension::new(ProjectLayout::new("/work/app", "app"))
}

#[test]
fn test_default_destination() {
    assert_eq!(
        ProblemsReport::destination(&extension()),
        PathBuf::from("/work/app/build/reports/problems/problems-report.json")
    );
}

#[test]
fn test_destination_follows_base_directory() {
    let mut reporting = extension();
    reporting.set_base_directory("/var/ci/reports");

    assert_eq!(
        ProblemsReport::destination(&reporting),
        PathBuf::from("/var/ci/reports/problems/problems-report.json")
    );
}

#[test]
fn test_declared_report_overrides_location() {
    let mut reporting = extension();
    if let Ok(report) = reporting.reports_mut().register(SimpleReport::new(
        ProblemsReport::NAME,
        "Problems report",
        OutputType::File,
    )) {
        report.set_output_location("diagnostics.json");
    }

    assert_eq!(
        ProblemsReport::destination(&reporting),
        Path::new("/work/app/build/reports/diagnostics.json")
    );
}

#[test]
fn test_render() {
    let problems = vec![
        Problem::new(ProblemDefinition::new(taxonomy::compilation_java(), Severity::Error))
            .with_contextual_label("cannot find symbol")
            .with_location(ProblemLocation::line_in_file("src/Main.java", 3)),
        Problem::new(ProblemDefinition::new(taxonomy::deprecation(), Severity::Warning)),
    ];

    let Ok(json) = ProblemsReport::render("app", &problems) else {
        panic!("report should render");
    };
    let Ok(value) = serde_json::from_str::<serde_json::Value>(&json) else {
        panic!("report should be valid JSON");
    };

    assert_eq!(value["project"], "app");
    assert_eq!(
        value["summary"],
        serde_json::json!({ "errors": 1, "warnings": 1, "advice": 0 })
    );
    assert_eq!(value["problems"][0]["contextualLabel"], "cannot find symbol");
    assert_eq!(value["problems"][0]["problemDefinition"]["id"][0]["id"], "java");
    assert_eq!(value["problems"][1]["problemDefinition"]["severity"], "WARNING");
}

#[test]
fn test_render_empty() {
    let Ok(json) = ProblemsReport::render("app", &[]) else {
        panic!("report should render");
    };
    assert!(json.contains("\"problems\": []"));
}
