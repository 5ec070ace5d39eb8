//! Data models for mapdots
//!
//! Defines the core data structures: Dot and its content.
//! The serialized form matches the persisted slot layout, so these types
//! are written to and read from storage directly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::clamp_percent;

/// Title given to a freshly placed dot
pub const DEFAULT_TITLE: &str = "New Location";

/// Description given to a freshly placed dot
pub const DEFAULT_DESCRIPTION: &str = "Edit this description in the panel.";

/// Image shown for a freshly placed dot
pub const DEFAULT_IMAGE_URL: &str = "https://placehold.co/300x200/cccccc/000000?text=Placeholder";

/// Image a host shows when a dot's own image fails to load
pub const IMAGE_NOT_FOUND_URL: &str =
    "https://placehold.co/300x200/cccccc/000000?text=Image+Not+Found";

/// Generate a new opaque dot identifier
pub fn generate_dot_id() -> String {
    format!("dot_{}", Uuid::new_v4().simple())
}

/// User-editable content attached to a dot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DotContent {
    pub title: String,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl Default for DotContent {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
        }
    }
}

impl DotContent {
    /// Replace a single field, leaving the others untouched
    pub fn set(&mut self, field: ContentField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContentField::Title => self.title = value,
            ContentField::Description => self.description = value,
            ContentField::ImageUrl => self.image_url = value,
        }
    }

    /// Read a single field
    pub fn get(&self, field: ContentField) -> &str {
        match field {
            ContentField::Title => &self.title,
            ContentField::Description => &self.description,
            ContentField::ImageUrl => &self.image_url,
        }
    }
}

/// Names of the editable content fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentField {
    Title,
    Description,
    #[serde(alias = "image_url")]
    ImageUrl,
}

impl ContentField {
    pub const ALL: [ContentField; 3] = [
        ContentField::Title,
        ContentField::Description,
        ContentField::ImageUrl,
    ];

    /// Name of the field in the persisted layout
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentField::Title => "title",
            ContentField::Description => "description",
            ContentField::ImageUrl => "imageUrl",
        }
    }
}

impl fmt::Display for ContentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(ContentField::Title),
            "description" => Ok(ContentField::Description),
            "imageUrl" | "image_url" | "image-url" => Ok(ContentField::ImageUrl),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Returned when parsing a content field name fails
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content field '{0}' (expected title, description or imageUrl)")]
pub struct UnknownField(pub String);

/// A single map annotation
///
/// Position is stored as percentages of the map image's rendered box,
/// top-left origin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dot {
    /// Unique identifier, never changes after creation
    pub id: String,
    /// Horizontal position, 0..=100
    pub x: f64,
    /// Vertical position, 0..=100
    pub y: f64,
    pub content: DotContent,
}

impl Dot {
    /// Create a dot at the given position with default content
    pub fn new(x: f64, y: f64) -> Self {
        Self::with_id(generate_dot_id(), x, y)
    }

    /// Create a dot with a specific ID (for loading and tests)
    pub fn with_id(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x: clamp_percent(x),
            y: clamp_percent(y),
            content: DotContent::default(),
        }
    }

    /// Set the position, clamping each axis to 0..=100
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = clamp_percent(x);
        self.y = clamp_percent(y);
    }

    /// Shift the position by a percentage delta, then clamp
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.set_position(self.x + dx, self.y + dy);
    }
}
