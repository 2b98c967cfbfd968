use super::*;
use crate::project;
use gantry_problems::{taxonomy, DocLink, Problem, ProblemDefinition, ProblemLocation};
use std::fmt;

#[derive(Debug)]
struct Unreachable;

impl fmt::Display for Unreachable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "repository unreachable")
    }
}

impl std::error::Error for Unreachable {}

fn sample_problem() -> Problem {
    Problem::new(
        ProblemDefinition::new(taxonomy::deprecation(), Severity::Warning).with_documentation(
            DocLink::new("https://docs.example.org/jcenter")
                .with_consult_message("consult the upgrade guide"),
        ),
    )
    .with_contextual_label("`jcenter()` is deprecated")
    .with_details("JCenter is read-only.")
    .with_location(ProblemLocation::line_column_in_file("build.gantry", 4, 5, None))
    .with_location(ProblemLocation::task_path(":app:dependencies"))
    .with_solution("use mavenCentral() instead")
}

fn render(problem: &Problem, mode: ColorMode) -> String {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, mode, false);
    emitter.emit(&project(problem));
    emitter.flush();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_terminal_emitter_no_color() {
    let text = render(&sample_problem(), ColorMode::Never);

    assert!(text.starts_with("warning[deprecation]: `jcenter()` is deprecated\n"));
    assert!(text.contains("  --> build.gantry:4:5\n"));
    assert!(text.contains("  ::: task ':app:dependencies'\n"));
    assert!(text.contains("  = details: JCenter is read-only.\n"));
    assert!(text.contains("  = help: use mavenCentral() instead\n"));
    assert!(text.contains(
        "  = docs: consult the upgrade guide (https://docs.example.org/jcenter)\n"
    ));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_terminal_emitter_with_color() {
    let text = render(&sample_problem(), ColorMode::Always);

    assert!(text.contains("\x1b["));
    assert!(text.contains("deprecation"));
}

#[test]
fn test_nested_group_path_and_fallback_headline() {
    let problem = Problem::new(ProblemDefinition::new(
        taxonomy::compilation_java(),
        Severity::Error,
    ));
    let text = render(&problem, ColorMode::Never);

    assert!(text.starts_with("error[compilation:java]: Java compilation\n"));
}

#[test]
fn test_failure_chain() {
    let problem = sample_problem().with_failure(Unreachable);
    let text = render(&problem, ColorMode::Never);

    assert!(text.contains("  = caused by: repository unreachable\n"));
}

#[test]
fn test_emit_all() {
    let first = sample_problem();
    let second = Problem::new(ProblemDefinition::new(taxonomy::generic(), Severity::Advice))
        .with_contextual_label("consider enabling the configuration cache");

    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.emit_all(&[project(&first), project(&second)]);
    emitter.flush();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("`jcenter()` is deprecated"));
    assert!(text.contains("advice[generic]: consider enabling the configuration cache"));
}

fn summary(counts: SeverityCounts) -> String {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.emit_summary(&counts);
    emitter.flush();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_emit_summary_errors() {
    let text = summary(SeverityCounts {
        errors: 2,
        warnings: 1,
        advice: 0,
    });
    assert_eq!(text, "error: 2 errors, 1 warning reported\n");
}

#[test]
fn test_emit_summary_warnings_only() {
    let text = summary(SeverityCounts {
        errors: 0,
        warnings: 3,
        advice: 1,
    });
    assert_eq!(text, "warning: 3 warnings, 1 advice reported\n");
}

#[test]
fn test_emit_summary_empty() {
    assert_eq!(summary(SeverityCounts::default()), "");
}

// --- ColorMode Tests ---

#[test]
fn test_color_mode_auto_follows_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
}

#[test]
fn test_color_mode_always_and_never_ignore_tty() {
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_color_mode_default_is_auto() {
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}
