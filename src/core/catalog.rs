//! Option catalogs
//!
//! Static, read-only lists of everything a user can pick in the studio: space
//! types, style moodboards, output aspect ratios and quality levels.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::error::StudioError;

/// Moodboard id that requires a user-supplied style image
pub const CUSTOM_MOODBOARD_ID: &str = "custom";

/// Aspect ratio token that keeps the room photo's own proportions
pub const ORIGINAL_ASPECT_RATIO: &str = "original";

/// Default quality token
pub const STANDARD_QUALITY: &str = "standard";

/// Room category being redesigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpaceType {
    #[default]
    #[serde(rename = "Living Room")]
    LivingRoom,
    Bedroom,
    Kitchen,
    Office,
    Bathroom,
    Other,
}

impl SpaceType {
    /// Every space type in display order
    pub const ALL: [SpaceType; 6] = [
        SpaceType::LivingRoom,
        SpaceType::Bedroom,
        SpaceType::Kitchen,
        SpaceType::Office,
        SpaceType::Bathroom,
        SpaceType::Other,
    ];

    /// Value sent to the generation service
    pub fn as_str(&self) -> &'static str {
        match self {
            SpaceType::LivingRoom => "Living Room",
            SpaceType::Bedroom => "Bedroom",
            SpaceType::Kitchen => "Kitchen",
            SpaceType::Office => "Office",
            SpaceType::Bathroom => "Bathroom",
            SpaceType::Other => "Other",
        }
    }

    /// Label shown in the picker
    pub fn label(&self) -> &'static str {
        match self {
            SpaceType::Office => "Home Office",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for SpaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpaceType {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        let squashed: String = wanted
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect();
        SpaceType::ALL
            .into_iter()
            .find(|space| {
                space.as_str().eq_ignore_ascii_case(wanted)
                    || space.label().eq_ignore_ascii_case(wanted)
                    || format!("{:?}", space).eq_ignore_ascii_case(&squashed)
            })
            .ok_or_else(|| StudioError::invalid_selection("space type", s))
    }
}

/// A named style the redesign should follow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodboardOption {
    pub id: Cow<'static, str>,
    pub name: Cow<'static, str>,
}

impl MoodboardOption {
    const fn new(id: &'static str, name: &'static str) -> Self {
        Self {
            id: Cow::Borrowed(id),
            name: Cow::Borrowed(name),
        }
    }

    /// Whether this option asks for a user-supplied reference image
    pub fn is_custom(&self) -> bool {
        self.id == CUSTOM_MOODBOARD_ID
    }
}

impl Default for MoodboardOption {
    fn default() -> Self {
        MOODBOARDS[0].clone()
    }
}

/// Style moodboards; the last entry is the custom upload slot
pub static MOODBOARDS: [MoodboardOption; 8] = [
    MoodboardOption::new("minimalist", "Minimalist"),
    MoodboardOption::new("bohemian", "Bohemian"),
    MoodboardOption::new("industrial", "Industrial"),
    MoodboardOption::new("scandinavian", "Scandinavian"),
    MoodboardOption::new("mid-century", "Mid-Century"),
    MoodboardOption::new("coastal", "Coastal"),
    MoodboardOption::new("farmhouse", "Farmhouse"),
    MoodboardOption::new(CUSTOM_MOODBOARD_ID, "Upload Your Own"),
];

/// A token plus its display name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOption {
    pub id: &'static str,
    pub name: &'static str,
}

/// Output aspect ratios
pub static ASPECT_RATIOS: [CatalogOption; 5] = [
    CatalogOption { id: ORIGINAL_ASPECT_RATIO, name: "Original" },
    CatalogOption { id: "1:1", name: "Square (1:1)" },
    CatalogOption { id: "3:4", name: "Portrait (3:4)" },
    CatalogOption { id: "4:3", name: "Landscape (4:3)" },
    CatalogOption { id: "16:9", name: "Wide (16:9)" },
];

/// Output quality levels
pub static QUALITY_LEVELS: [CatalogOption; 3] = [
    CatalogOption { id: STANDARD_QUALITY, name: "Standard" },
    CatalogOption { id: "hd", name: "HD" },
    CatalogOption { id: "ultra", name: "Ultra HD" },
];

/// Look up a moodboard by id
pub fn find_moodboard(id: &str) -> Option<&'static MoodboardOption> {
    MOODBOARDS.iter().find(|m| m.id == id)
}

/// Whether `token` is a known aspect ratio
pub fn is_aspect_ratio(token: &str) -> bool {
    ASPECT_RATIOS.iter().any(|o| o.id == token)
}

/// Whether `token` is a known quality level
pub fn is_quality(token: &str) -> bool {
    QUALITY_LEVELS.iter().any(|o| o.id == token)
}
