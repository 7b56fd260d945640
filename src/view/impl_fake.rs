use crate::view::interface::{View, ViewModel};
use std::error::Error;

#[derive(Default)]
pub struct ViewFake {
    rendered: Vec<ViewModel>,
}

impl ViewFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rendered(&self) -> &[ViewModel] {
        &self.rendered
    }
}

impl View for ViewFake {
    fn render(&mut self, view_model: &ViewModel) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.rendered.push(view_model.clone());
        Ok(())
    }
}
