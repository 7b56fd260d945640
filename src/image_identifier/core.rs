use crate::config::Config;
use crate::error::IdentifyError;
use crate::image_identifier::history::History;
use crate::image_source::interface::ImageRef;
use crate::model_provider::interface::{Classification, ClassifierHandle};

#[derive(Clone, Debug, PartialEq, Default)]
pub enum ModelLoadState {
    #[default]
    Unloaded,
    Loading,
    Ready,
    Failed {
        message: String,
    },
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct State {
    pub load_state: ModelLoadState,
    pub classifier: Option<ClassifierHandle>,
    pub current_image: Option<ImageRef>,
    pub results: Vec<Classification>,
    pub history: History,
    /// Bumped every time a selection invalidates the results. Classify
    /// completions carrying an older generation are dropped.
    pub generation: u64,
    pub pending_classifications: usize,
    pub error: Option<IdentifyError>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    ModelLoadRequested,
    ModelLoadDone(Result<ClassifierHandle, IdentifyError>),
    ImageSelected(Option<ImageRef>),
    HistoryItemSelected(ImageRef),
    ClassifyRequested,
    ClassifyDone {
        generation: u64,
        image: ImageRef,
        result: Result<Vec<Classification>, IdentifyError>,
    },
    Shutdown,
}

impl Msg {
    pub fn to_display_string(&self) -> String {
        match self {
            Msg::ClassifyDone {
                generation,
                image,
                result: Ok(results),
            } => format!(
                "ClassifyDone {{ generation: {}, image: {}, results: {} }}",
                generation,
                image,
                results.len()
            ),
            msg => format!("{:?}", msg),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    LoadModel,
    Classify {
        classifier: ClassifierHandle,
        image: ImageRef,
        generation: u64,
    },
    ReleaseImage(ImageRef),
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::Classify {
                image, generation, ..
            } => format!(
                "Classify {{ image: {}, generation: {} }}",
                image, generation
            ),
            effect => format!("{:?}", effect),
        }
    }
}

pub fn init(config: &Config) -> (State, Vec<Effect>) {
    let state = State {
        history: History::new(config.history_capacity),
        ..State::default()
    };

    transition(state, Msg::ModelLoadRequested)
}

/// True when `msg` is a classify completion the current state no longer
/// cares about.
pub fn is_stale(state: &State, msg: &Msg) -> bool {
    match msg {
        Msg::ClassifyDone {
            generation, image, ..
        } => !targets_current(state, *generation, image),
        _ => false,
    }
}

fn targets_current(state: &State, generation: u64, image: &ImageRef) -> bool {
    generation == state.generation && state.current_image.as_ref() == Some(image)
}

pub fn transition(state: State, msg: Msg) -> (State, Vec<Effect>) {
    match msg {
        Msg::ModelLoadRequested => {
            let can_load = state.classifier.is_none()
                && matches!(
                    state.load_state,
                    ModelLoadState::Unloaded | ModelLoadState::Failed { .. }
                );
            if !can_load {
                return (state, vec![]);
            }

            (
                State {
                    load_state: ModelLoadState::Loading,
                    ..state
                },
                vec![Effect::LoadModel],
            )
        }

        Msg::ModelLoadDone(result) => {
            if state.load_state != ModelLoadState::Loading {
                return (state, vec![]);
            }

            match result {
                Ok(classifier) => (
                    State {
                        load_state: ModelLoadState::Ready,
                        classifier: Some(classifier),
                        ..state
                    },
                    vec![],
                ),
                Err(error) => (
                    State {
                        load_state: ModelLoadState::Failed {
                            message: error.to_string(),
                        },
                        ..state
                    },
                    vec![],
                ),
            }
        }

        Msg::ImageSelected(image) => select(state, image),

        Msg::HistoryItemSelected(image) => {
            if !state.history.contains(&image) || state.current_image.as_ref() == Some(&image) {
                return (state, vec![]);
            }
            select(state, Some(image))
        }

        Msg::ClassifyRequested => {
            let Some(classifier) = state.classifier.clone() else {
                return not_ready(state, "model is not loaded");
            };
            let Some(image) = state.current_image.clone() else {
                return not_ready(state, "no image selected");
            };

            let effect = Effect::Classify {
                classifier,
                image,
                generation: state.generation,
            };
            (
                State {
                    pending_classifications: state.pending_classifications + 1,
                    error: None,
                    ..state
                },
                vec![effect],
            )
        }

        Msg::ClassifyDone {
            generation,
            image,
            result,
        } => {
            let stale = !targets_current(&state, generation, &image);
            let state = State {
                pending_classifications: state.pending_classifications.saturating_sub(1),
                ..state
            };

            if stale {
                return (state, vec![]);
            }

            match result {
                Ok(results) => (
                    State {
                        results,
                        error: None,
                        ..state
                    },
                    vec![],
                ),
                Err(error) => (
                    State {
                        error: Some(error),
                        ..state
                    },
                    vec![],
                ),
            }
        }

        Msg::Shutdown => {
            let mut held: Vec<ImageRef> = state
                .history
                .entries()
                .iter()
                .filter(|image| image.is_blob())
                .cloned()
                .collect();
            if let Some(current) = state.current_image.as_ref() {
                if current.is_blob() && !held.contains(current) {
                    held.push(current.clone());
                }
            }

            (state, held.into_iter().map(Effect::ReleaseImage).collect())
        }
    }
}

fn select(state: State, image: Option<ImageRef>) -> (State, Vec<Effect>) {
    let changed = image.is_some() && image != state.current_image;
    let mut history = state.history;

    let evicted = match (&image, changed) {
        (Some(image), true) => history.push(image.clone()),
        _ => vec![],
    };

    (
        State {
            current_image: image,
            results: vec![],
            history,
            generation: state.generation + 1,
            error: None,
            ..state
        },
        evicted
            .into_iter()
            .filter(ImageRef::is_blob)
            .map(Effect::ReleaseImage)
            .collect(),
    )
}

fn not_ready(state: State, reason: &'static str) -> (State, Vec<Effect>) {
    (
        State {
            error: Some(IdentifyError::NotReady(reason)),
            ..state
        },
        vec![],
    )
}
