use super::main::ImageIdentifier;
use crate::image_identifier::core::{ModelLoadState, State};
use crate::view::interface::{ResultRow, ViewModel, ViewStatus};
use std::sync::PoisonError;

pub fn format_confidence(probability: f32) -> String {
    format!("{:.2}%", probability * 100.0)
}

pub fn view_model(state: &State) -> ViewModel {
    let status = match &state.load_state {
        ModelLoadState::Unloaded => ViewStatus::ModelUnloaded,
        ModelLoadState::Loading => ViewStatus::ModelLoading,
        ModelLoadState::Failed { message } => ViewStatus::ModelFailed(message.clone()),
        ModelLoadState::Ready => ViewStatus::Ready,
    };

    ViewModel {
        status,
        image: state.current_image.clone(),
        can_identify: state.current_image.is_some() && state.classifier.is_some(),
        identifying: state.pending_classifications > 0,
        results: state
            .results
            .iter()
            .enumerate()
            .map(|(index, classification)| ResultRow {
                label: classification.label.clone(),
                confidence: format_confidence(classification.probability),
                best_guess: index == 0,
            })
            .collect(),
        recent_images: state.history.entries().to_vec(),
        error: state.error.as_ref().map(ToString::to_string),
    }
}

impl ImageIdentifier {
    pub fn render(&self, state: &State) {
        let rendered = self
            .view
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .render(&view_model(state));

        if let Err(e) = rendered {
            let _ = self.logger.error(&format!("Failed to render: {}", e));
        }
    }
}
