use std::collections::BTreeSet;
use thiserror::Error;

pub const MODAL_IMAGE_SLOTS: usize = 3;
const TECHNOLOGY_DELIMITER: char = ',';

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub images: Vec<ImageRef>,
    /// Comma-delimited technology labels, as authored.
    pub technologies: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ShowcaseError {
    #[error("no project record for `{0}`")]
    UnknownProject(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingProjectPolicy {
    Silent,
    Notify,
}

impl MissingProjectPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "silent" => Some(Self::Silent),
            "notify" => Some(Self::Notify),
            _ => None,
        }
    }

    /// Visible message for a failed activation, if this policy shows one.
    pub fn notice(self, error: &ShowcaseError) -> Option<String> {
        match self {
            Self::Silent => None,
            Self::Notify => Some(match error {
                ShowcaseError::UnknownProject(_) => {
                    "Project details are unavailable right now.".to_string()
                }
            }),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectCatalog {
    records: Vec<ProjectRecord>,
}

impl ProjectCatalog {
    pub fn new(records: Vec<ProjectRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Result<&ProjectRecord, ShowcaseError> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .ok_or_else(|| ShowcaseError::UnknownProject(id.to_string()))
    }
}

pub fn split_technologies(raw: &str) -> Vec<String> {
    raw.split(TECHNOLOGY_DELIMITER)
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalContent {
    pub project_id: String,
    pub name: String,
    pub description: String,
    pub slots: [Option<ImageRef>; MODAL_IMAGE_SLOTS],
    pub badges: Vec<String>,
}

impl ModalContent {
    pub fn from_record(record: &ProjectRecord) -> Self {
        let mut slots: [Option<ImageRef>; MODAL_IMAGE_SLOTS] = Default::default();
        for (slot, image) in slots.iter_mut().zip(record.images.iter()) {
            *slot = Some(image.clone());
        }

        Self {
            project_id: record.id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            slots,
            badges: record
                .technologies
                .as_deref()
                .map(split_technologies)
                .unwrap_or_default(),
        }
    }

    pub fn image_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

/// Cyclic slide selector with exactly one active slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    count: usize,
}

impl Carousel {
    /// Returns `None` when there is nothing to cycle through.
    pub fn new(count: usize) -> Option<Self> {
        (count > 0).then_some(Self { index: 0, count })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.count;
        self.index
    }

    pub fn prev(&mut self) -> usize {
        self.index = (self.index + self.count - 1) % self.count;
        self.index
    }

    /// Jumps to `target`; out-of-range indicators are ignored.
    pub fn jump(&mut self, target: usize) -> usize {
        if target < self.count {
            self.index = target;
        }
        self.index
    }

    pub fn is_active(&self, slide: usize) -> bool {
        slide == self.index
    }
}

/// Shared modal state driven by card activations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Showcase {
    content: Option<ModalContent>,
    carousel: Option<Carousel>,
    failed_images: BTreeSet<usize>,
    open: bool,
}

impl Showcase {
    pub fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Populates the modal from the record behind `id`.
    ///
    /// On failure the modal is left exactly as it was. Re-activating the
    /// project that is already open keeps its carousel position.
    pub fn activate(&mut self, catalog: &ProjectCatalog, id: &str) -> Result<(), ShowcaseError> {
        let record = catalog.get(id)?;
        if self.open && self.content.as_ref().is_some_and(|content| content.project_id == id) {
            return Ok(());
        }

        self.content = Some(ModalContent::from_record(record));
        self.carousel = None;
        self.failed_images.clear();
        self.open = true;
        Ok(())
    }

    /// Called once the modal has finished its show transition.
    pub fn shown(&mut self) {
        if !self.open {
            return;
        }

        let count = self.content.as_ref().map_or(0, ModalContent::image_count);
        self.carousel = Carousel::new(count);
    }

    pub fn close(&mut self) {
        self.open = false;
        self.carousel = None;
    }

    pub fn next_slide(&mut self) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.next();
        }
    }

    pub fn prev_slide(&mut self) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.prev();
        }
    }

    pub fn jump_to(&mut self, slide: usize) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.jump(slide);
        }
    }

    pub fn image_failed(&mut self, slot: usize) {
        self.failed_images.insert(slot);
    }

    pub fn image_visible(&self, slot: usize) -> bool {
        let present = self
            .content
            .as_ref()
            .and_then(|content| content.slots.get(slot))
            .is_some_and(Option::is_some);

        present && !self.failed_images.contains(&slot)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarqueeItem<'a> {
    pub key: String,
    pub record: &'a ProjectRecord,
    pub duplicate: bool,
}

/// Card list followed by a decorative copy, so a half-width scroll loops seamlessly.
pub fn marquee_track(records: &[ProjectRecord]) -> Vec<MarqueeItem<'_>> {
    let originals = records.iter().map(|record| MarqueeItem {
        key: record.id.clone(),
        record,
        duplicate: false,
    });
    let copies = records.iter().map(|record| MarqueeItem {
        key: format!("{}-copy", record.id),
        record,
        duplicate: true,
    });

    originals.chain(copies).collect()
}
