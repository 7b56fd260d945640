use crate::image_source::interface::ImageRef;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    /// In `[0, 1]`.
    pub probability: f32,
}

pub trait ImageClassifier {
    fn name(&self) -> &str;

    /// Returns labels ordered by descending probability.
    fn classify(
        &self,
        image: &ImageRef,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>>;
}

pub trait ModelProvider {
    fn load(
        &self,
    ) -> Result<Arc<dyn ImageClassifier + Send + Sync>, Box<dyn std::error::Error + Send + Sync>>;
}

/// A loaded classifier as held by the image identifier state.
#[derive(Clone)]
pub struct ClassifierHandle {
    classifier: Arc<dyn ImageClassifier + Send + Sync>,
}

impl ClassifierHandle {
    pub fn new(classifier: Arc<dyn ImageClassifier + Send + Sync>) -> Self {
        Self { classifier }
    }

    pub fn name(&self) -> &str {
        self.classifier.name()
    }

    pub fn classify(
        &self,
        image: &ImageRef,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        self.classifier.classify(image)
    }
}

impl fmt::Debug for ClassifierHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassifierHandle({})", self.name())
    }
}

impl PartialEq for ClassifierHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.classifier, &other.classifier)
    }
}
