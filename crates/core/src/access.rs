//! Feature-gated section visibility.

use serde::Serialize;
use crate::error::{AccessError, Result};
use crate::feature::{Feature, FeatureFlags};
use crate::section::SectionRequirements;

/// Resolves section visibility against one feature-flag snapshot.
#[derive(Debug, Clone, Copy)]
pub struct FeatureAccess<'a> {
    sections: &'a SectionRequirements,
    flags: &'a FeatureFlags,
}

/// Visibility decision for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionVisibility {
    /// Section name
    pub section: String,

    /// Whether the section is shown
    pub visible: bool,

    /// Features that can entitle the section
    pub required: Vec<Feature>,

    /// Required features that are currently enabled
    pub granted_by: Vec<Feature>,
}

impl<'a> FeatureAccess<'a> {
    /// Create a resolver over a section table and a flag snapshot.
    pub fn new(sections: &'a SectionRequirements, flags: &'a FeatureFlags) -> Self {
        Self { sections, flags }
    }

    /// Features that can entitle a section.
    pub fn required_features(&self, section: &str) -> Result<&'a [Feature]> {
        self.sections.get(section).ok_or_else(|| {
            tracing::warn!("Section '{}' has no entry in the requirement table", section);
            AccessError::UnknownSection(section.to_string())
        })
    }

    /// Whether a section should be shown.
    ///
    /// Sections without requirements are always visible; otherwise one
    /// enabled feature from the list is enough.
    pub fn is_section_visible(&self, section: &str) -> Result<bool> {
        let required = self.required_features(section)?;
        Ok(self.decide(required))
    }

    /// Names of every visible section, in name order.
    pub fn visible_sections(&self) -> Vec<&'a str> {
        self.sections
            .iter()
            .filter(|(_, required)| self.decide(required))
            .map(|(name, _)| name)
            .collect()
    }

    /// Full visibility report for every section in the table.
    pub fn visibility(&self) -> Vec<SectionVisibility> {
        self.sections
            .iter()
            .map(|(name, required)| SectionVisibility {
                section: name.to_string(),
                visible: self.decide(required),
                required: required.to_vec(),
                granted_by: required
                    .iter()
                    .copied()
                    .filter(|feature| self.flags.is_enabled(*feature))
                    .collect(),
            })
            .collect()
    }

    fn decide(&self, required: &[Feature]) -> bool {
        required.is_empty() || required.iter().any(|feature| self.flags.is_enabled(*feature))
    }
}
