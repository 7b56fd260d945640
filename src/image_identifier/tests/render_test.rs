use crate::config::Config;
use crate::error::IdentifyError;
use crate::image_identifier::core::{init, transition, Msg, State};
use crate::image_identifier::render::{format_confidence, view_model};
use crate::image_identifier::tests::fixture::{ranking, stub_handle, url};
use crate::view::interface::{ResultRow, ViewStatus};

#[test]
fn test_format_confidence() {
    assert_eq!(format_confidence(0.82), "82.00%");
    assert_eq!(format_confidence(0.123456), "12.35%");
    assert_eq!(format_confidence(1.0), "100.00%");
}

#[test]
fn test_loading_view() {
    let (state, _) = init(&Config::default());

    let view_model = view_model(&state);

    assert_eq!(view_model.status, ViewStatus::ModelLoading);
    assert!(!view_model.can_identify);
}

#[test]
fn test_failed_view() {
    let (state, _) = init(&Config::default());
    let (state, _) = transition(
        state,
        Msg::ModelLoadDone(Err(IdentifyError::ModelLoad("offline".to_string()))),
    );

    assert_eq!(
        view_model(&state).status,
        ViewStatus::ModelFailed("model failed to load: offline".to_string())
    );
}

#[test]
fn test_ready_view_with_results() {
    let state = State {
        pending_classifications: 1,
        ..ready_with_results()
    };

    let view_model = view_model(&state);

    assert_eq!(view_model.status, ViewStatus::Ready);
    assert_eq!(view_model.image, Some(url("cat")));
    assert!(view_model.can_identify);
    assert!(view_model.identifying);
    assert_eq!(
        view_model.results,
        vec![
            ResultRow {
                label: "tabby cat".to_string(),
                confidence: "82.00%".to_string(),
                best_guess: true,
            },
            ResultRow {
                label: "tiger cat".to_string(),
                confidence: "10.00%".to_string(),
                best_guess: false,
            },
        ]
    );
    assert_eq!(view_model.recent_images, vec![url("cat"), url("dog")]);
}

#[test]
fn test_view_surfaces_error() {
    let (state, _) = transition(ready_with_results(), Msg::ImageSelected(None));
    let (state, _) = transition(state, Msg::ClassifyRequested);

    let view_model = view_model(&state);

    assert!(!view_model.can_identify);
    assert_eq!(
        view_model.error,
        Some("not ready: no image selected".to_string())
    );
}

fn ready_with_results() -> State {
    let (state, _) = init(&Config::default());
    let (state, _) = transition(state, Msg::ModelLoadDone(Ok(stub_handle())));
    let (state, _) = transition(state, Msg::ImageSelected(Some(url("dog"))));
    let (state, _) = transition(state, Msg::ImageSelected(Some(url("cat"))));
    let generation = state.generation;
    let (state, _) = transition(
        state,
        Msg::ClassifyDone {
            generation,
            image: url("cat"),
            result: Ok(ranking(&[("tabby cat", 0.82), ("tiger cat", 0.1)])),
        },
    );
    state
}
