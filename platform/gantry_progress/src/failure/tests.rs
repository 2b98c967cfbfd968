use super::*;
use pretty_assertions::assert_eq;

#[derive(Debug)]
struct ReadFailed;

impl fmt::Display for ReadFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not read gantry.toml")
    }
}

impl Error for ReadFailed {}

#[derive(Debug)]
struct ConfigureFailed(ReadFailed);

impl fmt::Display for ConfigureFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not configure project")
    }
}

impl Error for ConfigureFailed {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

#[derive(Debug)]
struct SyncFailed(ConfigureFailed);

impl fmt::Display for SyncFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "project sync failed")
    }
}

impl Error for SyncFailed {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

#[test]
fn test_same_object_is_exposed() {
    let failure: Failure = Arc::new(ConfigureFailed(ReadFailed));
    let view = FailureView::new(&failure);

    assert!(Arc::ptr_eq(view.get(), &failure));
}

#[test]
fn test_message_and_causes() {
    let failure: Failure = Arc::new(ConfigureFailed(ReadFailed));
    let view = FailureView::new(&failure);

    assert_eq!(view.message(), "could not configure project");
    let causes: Vec<String> = view.causes().map(ToString::to_string).collect();
    assert_eq!(causes, vec!["could not read gantry.toml".to_string()]);
}

#[test]
fn test_nested_causes_outermost_first() {
    let failure: Failure = Arc::new(SyncFailed(ConfigureFailed(ReadFailed)));
    let view = FailureView::new(&failure);

    let causes: Vec<String> = view.causes().map(ToString::to_string).collect();
    assert_eq!(
        causes,
        vec![
            "could not configure project".to_string(),
            "could not read gantry.toml".to_string(),
        ]
    );
    assert!(view
        .causes()
        .last()
        .is_some_and(|cause| cause.downcast_ref::<ReadFailed>().is_some()));
}

#[test]
fn test_causes_outlive_view() {
    let failure: Failure = Arc::new(SyncFailed(ConfigureFailed(ReadFailed)));
    let causes: Vec<&(dyn Error + 'static)> = FailureView::new(&failure).causes().collect();

    assert_eq!(causes.len(), 2);
}

#[test]
fn test_no_causes() {
    let failure: Failure = Arc::new(ReadFailed);

    assert_eq!(FailureView::new(&failure).causes().count(), 0);
}

#[test]
fn test_downcast_through_view() {
    let failure: Failure = Arc::new(ConfigureFailed(ReadFailed));
    let view = FailureView::new(&failure);

    assert!(view.get().downcast_ref::<ConfigureFailed>().is_some());
}

#[test]
fn test_equality_is_identity() {
    let first: Failure = Arc::new(ReadFailed);
    let second: Failure = Arc::new(ReadFailed);

    assert_eq!(FailureView::new(&first), FailureView::new(&first));
    assert_ne!(FailureView::new(&first), FailureView::new(&second));
}

#[test]
fn test_serialize() {
    let failure: Failure = Arc::new(ConfigureFailed(ReadFailed));
    let json = serde_json::to_value(FailureView::new(&failure)).ok();

    assert_eq!(
        json,
        Some(serde_json::json!({
            "message": "could not configure project",
            "causes": ["could not read gantry.toml"],
        }))
    );
}
