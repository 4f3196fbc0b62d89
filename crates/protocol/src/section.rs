use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named anchor region of the page.
///
/// Declaration order is the priority order used when resolving the active
/// section: when two sections both cover the probe line, the earlier one
/// wins.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Hero,
    About,
    Skills,
    Projects,
    Education,
    Certifications,
    Contact,
}

impl SectionId {
    /// Every section, in priority order.
    pub const ORDER: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Education,
        SectionId::Certifications,
        SectionId::Contact,
    ];

    /// The element id of the section's anchor in the document.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Education => "education",
            SectionId::Certifications => "certifications",
            SectionId::Contact => "contact",
        }
    }

    /// Position in [`SectionId::ORDER`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section: {0:?}")]
pub struct ParseSectionError(pub String);

impl FromStr for SectionId {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ORDER
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ParseSectionError(s.to_owned()))
    }
}
