//! Photo records and gallery sections.
//!
//! A photo's `id` is the handle every list operation keys on and must be
//! unique within its section. `src` is either a server asset path (seed
//! data) or an inline data URI (photos added through the manager).

#[cfg(test)]
#[path = "photo_test.rs"]
mod photo_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single gallery photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Unique identifier within the owning section.
    pub id: String,
    /// Image location: a server asset path or an inline data URI.
    pub src: String,
    /// Alternative text for accessibility.
    pub alt: String,
    /// Optional caption shown on hover.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl Photo {
    /// Build a photo with a freshly minted id for `section`.
    #[must_use]
    pub fn new(section: GallerySection, src: String, alt: String, caption: Option<String>) -> Self {
        Self { id: photo_id(section.id_prefix()), src, alt, caption }
    }
}

/// The two curated photo sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GallerySection {
    /// Portrait, street, and lifestyle work.
    #[default]
    Portfolio,
    /// Moments with friends and family.
    Personal,
}

impl GallerySection {
    /// Stable id prefix used when minting photo ids for this section.
    #[must_use]
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Portfolio => "portfolio",
            Self::Personal => "personal",
        }
    }

    /// Section heading shown on the photography page.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Portfolio => "My Photography",
            Self::Personal => "With Friends & Loved Ones",
        }
    }

    /// Supporting line under the section heading.
    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Portfolio => {
                "A collection of moments I've captured — street, portraits, journeys, and everyday life."
            }
            Self::Personal => "Personal moments and memories with the people who matter most.",
        }
    }

    /// Short label used in the manager's section selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Portfolio => "Portfolio",
            Self::Personal => "Personal",
        }
    }
}

/// Mint a fresh photo id with the given prefix.
///
/// Ids embed a v4 uuid so successive calls never collide, keeping the
/// per-section uniqueness invariant independent of insertion timing.
#[must_use]
pub fn photo_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}
