use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageRef {
    Url(String),
    /// Reference allocated by an [`ImageSource`] for a local file. Must be
    /// released once nothing holds it anymore.
    Blob(String),
}

impl ImageRef {
    pub fn as_str(&self) -> &str {
        match self {
            ImageRef::Url(url) => url,
            ImageRef::Blob(key) => key,
        }
    }

    pub fn is_blob(&self) -> bool {
        matches!(self, ImageRef::Blob(_))
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSelection {
    /// Files picked by the user. Only the first one is used; an empty list
    /// means nothing is selected.
    Files(Vec<PathBuf>),
    Url(String),
}

pub trait ImageSource {
    fn resolve(&self, selection: ImageSelection) -> Option<ImageRef>;
    fn release(&self, image: &ImageRef) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
