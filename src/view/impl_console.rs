use crate::view::interface::{View, ViewModel, ViewStatus};
use std::error::Error;
use std::io::Write;

pub struct ViewConsole<W: Write + Send + Sync> {
    writer: W,
}

impl ViewConsole<std::io::Stdout> {
    pub fn new() -> Self {
        Self {
            writer: std::io::stdout(),
        }
    }
}

impl<W: Write + Send + Sync> ViewConsole<W> {
    #[allow(dead_code)]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    #[allow(dead_code)]
    pub fn writer(&self) -> &W {
        &self.writer
    }
}

pub fn render_lines(view_model: &ViewModel) -> Vec<String> {
    let mut lines = vec![];

    match &view_model.status {
        ViewStatus::ModelLoading => {
            lines.push("Model loading ....".to_string());
            return lines;
        }
        ViewStatus::ModelUnloaded => lines.push("Model not loaded (type `load`)".to_string()),
        ViewStatus::ModelFailed(message) => {
            lines.push(format!("Error: {}", message));
            lines.push("Type `load` to retry".to_string());
        }
        ViewStatus::Ready => {}
    }

    lines.push("Image Identification".to_string());

    match &view_model.image {
        Some(image) => lines.push(format!("Image: {}", image)),
        None => lines.push("Image: (none)".to_string()),
    }

    if view_model.identifying {
        lines.push("Identifying...".to_string());
    } else if view_model.can_identify {
        lines.push("Type `identify` to identify the image".to_string());
    }

    if let Some(error) = &view_model.error {
        lines.push(format!("Error: {}", error));
    }

    for row in &view_model.results {
        let best_guess = if row.best_guess { " Best Guess" } else { "" };
        lines.push(format!(
            "  {} - Confidence level : {}{}",
            row.label, row.confidence, best_guess
        ));
    }

    if !view_model.recent_images.is_empty() {
        lines.push("Recent Images".to_string());
        for (index, image) in view_model.recent_images.iter().enumerate() {
            lines.push(format!("  {}. {}", index + 1, image));
        }
    }

    lines
}

impl<W: Write + Send + Sync> View for ViewConsole<W> {
    fn render(&mut self, view_model: &ViewModel) -> Result<(), Box<dyn Error + Send + Sync>> {
        writeln!(self.writer, "────────────────────────────────")?;
        for line in render_lines(view_model) {
            writeln!(self.writer, "{}", line)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
