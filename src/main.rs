use config::Config;
use image_identifier::main::ImageIdentifier;
use image_source::impl_blob_store::ImageSourceBlobStore;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use model_provider::impl_fake::ModelProviderFake;
use std::sync::{Arc, Mutex};
use view::console_input::run_console_input;
use view::impl_console::ViewConsole;
use view::impl_gui::{GuiApp, ViewGui};

mod config;
mod error;
mod image_identifier;
mod image_source;
mod library;
mod model_provider;
mod view;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let model_provider = Arc::new(ModelProviderFake::new(config.clone(), logger.clone()));

    let image_source = Arc::new(ImageSourceBlobStore::new(logger.clone()));

    if std::env::args().any(|arg| arg == "--console") {
        let view = Arc::new(Mutex::new(ViewConsole::new()));

        let identifier = ImageIdentifier::new(config, logger, model_provider, image_source, view);

        let runner = identifier.clone();
        let handle = std::thread::spawn(move || runner.run());

        run_console_input(&identifier, std::io::stdin().lock())?;

        identifier.shutdown();
        handle
            .join()
            .map_err(|_| "image identifier thread panicked")??;

        return Ok(());
    }

    let view = ViewGui::new();

    let identifier = ImageIdentifier::new(
        config,
        logger,
        model_provider,
        image_source,
        Arc::new(Mutex::new(view.clone())),
    );

    let runner = identifier.clone();
    let handle = std::thread::spawn(move || runner.run());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    let app = GuiApp::new(identifier.clone(), view.clone());
    eframe::run_native(
        "Image Identification",
        options,
        Box::new(move |cc| {
            view.attach(cc.egui_ctx.clone());
            Box::new(app)
        }),
    )?;

    identifier.shutdown();
    handle
        .join()
        .map_err(|_| "image identifier thread panicked")??;

    Ok(())
}
