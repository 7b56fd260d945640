use super::main::ImageIdentifier;
use crate::error::IdentifyError;
use crate::image_identifier::core::{Effect, Msg};
use crate::model_provider::interface::ClassifierHandle;

impl ImageIdentifier {
    pub fn run_effect(&self, effect: Effect) {
        let _ = self
            .logger
            .info(&format!("Running effect: {}", effect.to_display_string()));

        match effect {
            Effect::LoadModel => {
                let loaded = self
                    .model_provider
                    .load()
                    .map(ClassifierHandle::new)
                    .map_err(|e| IdentifyError::ModelLoad(e.to_string()));
                if let Err(e) = &loaded {
                    let _ = self.logger.error(&e.to_string());
                }
                self.send(Msg::ModelLoadDone(loaded));
            }
            Effect::Classify {
                classifier,
                image,
                generation,
            } => {
                let result = classifier
                    .classify(&image)
                    .map_err(|e| IdentifyError::Classify(e.to_string()));
                if let Err(e) = &result {
                    let _ = self.logger.error(&format!("{} ({})", e, image));
                }
                self.send(Msg::ClassifyDone {
                    generation,
                    image,
                    result,
                });
            }
            Effect::ReleaseImage(image) => {
                if let Err(e) = self.image_source.release(&image) {
                    let _ = self
                        .logger
                        .error(&format!("Failed to release {}: {}", image, e));
                }
            }
        }
    }
}
