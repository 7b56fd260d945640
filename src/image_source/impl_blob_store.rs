use crate::image_source::interface::{ImageRef, ImageSelection, ImageSource};
use crate::library::logger::interface::Logger;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

const BLOB_PREFIX: &str = "blob:image-identify/";
const URL_SCHEMES: [&str; 4] = ["http://", "https://", "file://", "data:"];

pub struct ImageSourceBlobStore {
    logger: Arc<dyn Logger + Send + Sync>,
    next_id: AtomicU64,
    blobs: Mutex<HashMap<String, PathBuf>>,
}

impl ImageSourceBlobStore {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("image_source").with_namespace("blob_store"),
            next_id: AtomicU64::new(1),
            blobs: Mutex::new(HashMap::new()),
        }
    }

    #[allow(dead_code)]
    pub fn path_of(&self, image: &ImageRef) -> Option<PathBuf> {
        match image {
            ImageRef::Blob(key) => self.blobs().get(key).cloned(),
            ImageRef::Url(_) => None,
        }
    }

    #[allow(dead_code)]
    pub fn live_count(&self) -> usize {
        self.blobs().len()
    }

    fn blobs(&self) -> std::sync::MutexGuard<'_, HashMap<String, PathBuf>> {
        self.blobs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn allocate(&self, path: &Path) -> Option<ImageRef> {
        if !path.is_file() {
            let _ = self
                .logger
                .info(&format!("Ignoring selection, not a file: {}", path.display()));
            return None;
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let key = format!("{}{}", BLOB_PREFIX, id);
        self.blobs().insert(key.clone(), path.to_path_buf());
        let _ = self
            .logger
            .info(&format!("Allocated {} for {}", key, path.display()));

        Some(ImageRef::Blob(key))
    }
}

fn has_supported_scheme(url: &str) -> bool {
    let lowered = url.to_ascii_lowercase();
    URL_SCHEMES
        .iter()
        .any(|scheme| lowered.starts_with(scheme) && lowered.len() > scheme.len())
}

impl ImageSource for ImageSourceBlobStore {
    fn resolve(&self, selection: ImageSelection) -> Option<ImageRef> {
        match selection {
            ImageSelection::Files(files) => files.first().and_then(|path| self.allocate(path)),
            ImageSelection::Url(text) => {
                let url = text.trim();
                if url.is_empty() {
                    return None;
                }
                if !has_supported_scheme(url) {
                    let _ = self
                        .logger
                        .info(&format!("Ignoring unresolvable url: {}", url));
                    return None;
                }
                Some(ImageRef::Url(url.to_string()))
            }
        }
    }

    fn release(&self, image: &ImageRef) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        match image {
            ImageRef::Url(_) => Ok(()),
            ImageRef::Blob(key) => match self.blobs().remove(key) {
                Some(path) => {
                    self.logger
                        .info(&format!("Released {} for {}", key, path.display()))?;
                    Ok(())
                }
                None => Err(format!("Unknown blob reference: {}", key).into()),
            },
        }
    }
}
