use crate::image_source::interface::ImageRef;

/// Most-recent-first list of selected images without duplicates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct History {
    entries: Vec<ImageRef>,
    capacity: Option<usize>,
}

impl History {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            entries: Vec::new(),
            // The front entry is the current image and must survive a push.
            capacity: capacity.map(|capacity| capacity.max(1)),
        }
    }

    /// Moves `image` to the front and returns whatever fell off the end.
    pub fn push(&mut self, image: ImageRef) -> Vec<ImageRef> {
        self.entries.retain(|entry| entry != &image);
        self.entries.insert(0, image);

        match self.capacity {
            Some(capacity) if self.entries.len() > capacity => self.entries.split_off(capacity),
            _ => vec![],
        }
    }

    pub fn contains(&self, image: &ImageRef) -> bool {
        self.entries.contains(image)
    }

    pub fn entries(&self) -> &[ImageRef] {
        &self.entries
    }
}
