use crate::config::Config;
use crate::error::IdentifyError;
use crate::image_identifier::core::{init, Msg, State};
use crate::image_source::interface::{ImageRef, ImageSelection, ImageSource};
use crate::library::logger::interface::Logger;
use crate::model_provider::interface::ModelProvider;
use crate::view::interface::View;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex, PoisonError};

/// Owns the live [`State`] and the adapters its effects talk to. Cloning is
/// cheap; every clone feeds the same message queue.
#[derive(Clone)]
pub struct ImageIdentifier {
    pub state: Arc<Mutex<State>>,
    pub msg_sender: Sender<Msg>,
    pub msg_receiver: Arc<Mutex<Receiver<Msg>>>,
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub model_provider: Arc<dyn ModelProvider + Send + Sync>,
    pub image_source: Arc<dyn ImageSource + Send + Sync>,
    pub view: Arc<Mutex<dyn View + Send + Sync>>,
}

impl ImageIdentifier {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        model_provider: Arc<dyn ModelProvider + Send + Sync>,
        image_source: Arc<dyn ImageSource + Send + Sync>,
        view: Arc<Mutex<dyn View + Send + Sync>>,
    ) -> Self {
        let (msg_sender, msg_receiver) = channel();
        let (initial, _) = init(&config);

        Self {
            state: Arc::new(Mutex::new(initial)),
            msg_sender,
            msg_receiver: Arc::new(Mutex::new(msg_receiver)),
            logger: logger.with_namespace("image_identifier"),
            config,
            model_provider,
            image_source,
            view,
        }
    }

    pub fn snapshot(&self) -> State {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn request_model_load(&self) {
        self.send(Msg::ModelLoadRequested);
    }

    /// Resolves on the calling thread so the blob reference exists before
    /// the selection is queued.
    pub fn select_image(&self, selection: ImageSelection) {
        let image = self.image_source.resolve(selection);
        self.send(Msg::ImageSelected(image));
    }

    pub fn classify_current_image(&self) {
        self.send(Msg::ClassifyRequested);
    }

    pub fn select_from_history(&self, image: ImageRef) {
        self.send(Msg::HistoryItemSelected(image));
    }

    pub fn shutdown(&self) {
        self.send(Msg::Shutdown);
    }

    pub(super) fn send(&self, msg: Msg) {
        let _ = self.msg_sender.send(msg);
    }

    pub(super) fn recv(&self) -> Result<Msg, IdentifyError> {
        self.msg_receiver
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .recv()
            .map_err(|_| IdentifyError::Disconnected)
    }

    pub(super) fn store(&self, state: State) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }
}
