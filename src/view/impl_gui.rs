use crate::image_identifier::main::ImageIdentifier;
use crate::image_source::interface::ImageSelection;
use crate::view::interface::{View, ViewModel, ViewStatus};
use eframe::egui;
use std::error::Error;
use std::sync::{Arc, Mutex, PoisonError};

const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Shares the latest view model with the egui window.
#[derive(Clone, Default)]
pub struct ViewGui {
    view_model: Arc<Mutex<ViewModel>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl ViewGui {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, context: egui::Context) {
        *self.context.lock().unwrap_or_else(PoisonError::into_inner) = Some(context);
    }

    pub fn latest(&self) -> ViewModel {
        self.view_model
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl View for ViewGui {
    fn render(&mut self, view_model: &ViewModel) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self
            .view_model
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = view_model.clone();

        if let Some(context) = self
            .context
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            context.request_repaint();
        }
        Ok(())
    }
}

pub struct GuiApp {
    identifier: ImageIdentifier,
    view: ViewGui,
    url_input: String,
}

impl GuiApp {
    pub fn new(identifier: ImageIdentifier, view: ViewGui) -> Self {
        Self {
            identifier,
            view,
            url_input: String::new(),
        }
    }

    fn inputs(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Upload Image").clicked() {
                let picked = rfd::FileDialog::new()
                    .add_filter("image", &IMAGE_EXTENSIONS)
                    .pick_file();
                self.identifier
                    .select_image(ImageSelection::Files(picked.into_iter().collect()));
            }

            ui.label("OR");

            let response = ui.add(
                egui::TextEdit::singleline(&mut self.url_input).hint_text("Paste an image URL"),
            );
            if response.changed() {
                self.identifier
                    .select_image(ImageSelection::Url(self.url_input.clone()));
            }
        });
    }

    fn main_content(&mut self, ui: &mut egui::Ui, view_model: &ViewModel) {
        if let Some(image) = &view_model.image {
            ui.label(egui::RichText::new(image.as_str()).monospace());
        }

        if let Some(error) = &view_model.error {
            ui.colored_label(egui::Color32::RED, error.as_str());
        }

        for row in &view_model.results {
            ui.horizontal(|ui| {
                ui.strong(row.label.as_str());
                ui.label(format!("Confidence level : {}", row.confidence));
                if row.best_guess {
                    ui.colored_label(egui::Color32::DARK_GREEN, "Best Guess");
                }
            });
        }

        if view_model.image.is_some() {
            let label = if view_model.identifying {
                "Identifying..."
            } else {
                "Identify Image"
            };
            if ui
                .add_enabled(view_model.can_identify, egui::Button::new(label))
                .clicked()
            {
                self.url_input.clear();
                self.identifier.classify_current_image();
            }
        }
    }

    fn recent_images(&mut self, ui: &mut egui::Ui, view_model: &ViewModel) {
        if view_model.recent_images.is_empty() {
            return;
        }

        ui.separator();
        ui.heading("Recent Images");
        egui::ScrollArea::horizontal().show(ui, |ui| {
            ui.horizontal(|ui| {
                for image in &view_model.recent_images {
                    let selected = view_model.image.as_ref() == Some(image);
                    if ui.selectable_label(selected, image.as_str()).clicked() {
                        self.identifier.select_from_history(image.clone());
                    }
                }
            });
        });
    }
}

impl eframe::App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view_model = self.view.latest();

        egui::CentralPanel::default().show(ctx, |ui| {
            match &view_model.status {
                ViewStatus::ModelLoading => {
                    ui.heading("Model loading ....");
                    return;
                }
                ViewStatus::ModelFailed(message) => {
                    ui.colored_label(egui::Color32::RED, message.as_str());
                    if ui.button("Retry").clicked() {
                        self.identifier.request_model_load();
                    }
                }
                ViewStatus::ModelUnloaded => {
                    if ui.button("Load Model").clicked() {
                        self.identifier.request_model_load();
                    }
                }
                ViewStatus::Ready => {}
            }

            ui.heading("Image Identification");
            self.inputs(ui);
            ui.separator();
            self.main_content(ui, &view_model);
            self.recent_images(ui, &view_model);
        });
    }
}
