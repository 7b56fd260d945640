use crate::image_source::interface::ImageRef;
use std::error::Error;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewStatus {
    #[default]
    ModelUnloaded,
    ModelLoading,
    ModelFailed(String),
    Ready,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub label: String,
    /// Already formatted, e.g. `82.00%`.
    pub confidence: String,
    pub best_guess: bool,
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewModel {
    pub status: ViewStatus,
    pub image: Option<ImageRef>,
    pub can_identify: bool,
    pub identifying: bool,
    pub results: Vec<ResultRow>,
    pub recent_images: Vec<ImageRef>,
    pub error: Option<String>,
}

pub trait View: Send + Sync {
    fn render(&mut self, view_model: &ViewModel) -> Result<(), Box<dyn Error + Send + Sync>>;
}
