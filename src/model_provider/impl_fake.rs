use crate::config::Config;
use crate::image_source::interface::ImageRef;
use crate::library::logger::interface::Logger;
use crate::model_provider::interface::{Classification, ImageClassifier, ModelProvider};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

const LABELS: [&str; 16] = [
    "tabby cat",
    "tiger cat",
    "Egyptian cat",
    "golden retriever",
    "Labrador retriever",
    "beagle",
    "sports car",
    "mountain bike",
    "coffee mug",
    "water bottle",
    "laptop",
    "desktop computer",
    "goldfish",
    "daisy",
    "pizza",
    "banana",
];

const HINT_BOOST: f32 = 4.0;

pub struct ModelProviderFake {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ModelProviderFake {
    pub fn new(config: Config, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            config,
            logger: logger.with_namespace("model_provider").with_namespace("fake"),
        }
    }
}

impl ModelProvider for ModelProviderFake {
    fn load(
        &self,
    ) -> Result<Arc<dyn ImageClassifier + Send + Sync>, Box<dyn std::error::Error + Send + Sync>>
    {
        self.logger.info("Loading model...")?;
        std::thread::sleep(self.config.fake_model_load_duration);
        self.logger.info("Model loaded")?;

        Ok(Arc::new(ImageClassifierFake::new(
            self.config.classify_top_k,
            self.config.fake_classify_duration,
            self.logger.clone(),
        )))
    }
}

/// Produces a plausible looking ranking. Labels sharing a word with the
/// image reference (e.g. "cat" in `https://x/cat.png`) are favoured.
pub struct ImageClassifierFake {
    top_k: usize,
    duration: Duration,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierFake {
    pub fn new(top_k: usize, duration: Duration, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            top_k,
            duration,
            logger,
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn name(&self) -> &str {
        "fake"
    }

    fn classify(
        &self,
        image: &ImageRef,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger
            .info(&format!("Classifying {} with fake classifier...", image))?;
        std::thread::sleep(self.duration);

        let hint = image.as_str().to_lowercase();
        let mut rng = rand::rng();

        let mut scored: Vec<(&str, f32)> = LABELS
            .iter()
            .map(|label| {
                let mut score = rng.random_range(0.0..1.0_f32);
                if label
                    .split_whitespace()
                    .any(|word| hint.contains(&word.to_lowercase()))
                {
                    score += HINT_BOOST;
                }
                (*label, score)
            })
            .collect();

        let total: f32 = scored.iter().map(|(_, score)| score).sum();
        if total <= 0.0 {
            return Err("fake classifier produced no scores".into());
        }

        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(self.top_k);

        Ok(scored
            .into_iter()
            .map(|(label, score)| Classification {
                label: label.to_string(),
                probability: score / total,
            })
            .collect())
    }
}
