//! Section requirement table.
//!
//! Maps each navigable UI section to the features that entitle a tenant to
//! see it. Any one listed feature is enough; an empty list means the section
//! is always shown.

use std::collections::BTreeMap;
use std::path::Path;
use serde::Serialize;
use crate::error::AccessError;
use crate::feature::Feature;

/// Static section → required-features table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SectionRequirements {
    sections: BTreeMap<String, Vec<Feature>>,
}

impl SectionRequirements {
    /// Create an empty table.
    pub fn empty() -> Self {
        Self {
            sections: BTreeMap::new(),
        }
    }

    /// Add or replace a section.
    pub fn with_section(
        mut self,
        name: impl Into<String>,
        required: impl IntoIterator<Item = Feature>,
    ) -> Self {
        self.sections.insert(name.into(), required.into_iter().collect());
        self
    }

    /// Parse a table from JSON of the form `{"tasks": ["taskManagement"]}`.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        let mut sections = BTreeMap::new();
        for (name, features) in raw {
            let required = features
                .iter()
                .map(|f| f.parse::<Feature>())
                .collect::<Result<Vec<_>, AccessError>>()?;
            sections.insert(name, required);
        }
        tracing::debug!("Loaded section table with {} sections", sections.len());
        Ok(Self { sections })
    }

    /// Load a table from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Required features for a section, if the section is known.
    pub fn get(&self, section: &str) -> Option<&[Feature]> {
        self.sections.get(section).map(Vec::as_slice)
    }

    /// Whether the section has an entry.
    pub fn contains(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Iterate sections in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Feature])> {
        self.sections
            .iter()
            .map(|(name, required)| (name.as_str(), required.as_slice()))
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the table has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for SectionRequirements {
    fn default() -> Self {
        use Feature::*;
        const ALWAYS: [Feature; 0] = [];

        Self::empty()
            .with_section("dashboard", ALWAYS)
            .with_section("profile", ALWAYS)
            .with_section("team", ALWAYS)
            .with_section("tasks", [TaskManagement])
            .with_section("leave", [LeaveManagement])
            .with_section("attendance", [Attendance])
            .with_section("meetings", [Meetings])
            .with_section("analytics", [Analytics])
            .with_section("reports", [Reports, Analytics])
            .with_section("integrations", [ApiAccess])
            .with_section("branding", [CustomBranding])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = SectionRequirements::default();
        assert_eq!(table.len(), 11);
        assert_eq!(table.get("dashboard").map(<[Feature]>::is_empty), Some(true));
        assert_eq!(
            table.get("reports"),
            Some(&[Feature::Reports, Feature::Analytics][..])
        );
        assert!(table.get("payroll").is_none());
    }

    #[test]
    fn test_from_json_preserves_requirement_order() {
        let table = SectionRequirements::from_json_str(
            r#"{"overview": [], "work": ["meetings", "taskManagement"]}"#,
        )
        .unwrap();
        assert_eq!(
            table.get("work"),
            Some(&[Feature::Meetings, Feature::TaskManagement][..])
        );
        let names: Vec<_> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["overview", "work"]);
    }

    #[test]
    fn test_from_json_unknown_feature() {
        let err = SectionRequirements::from_json_str(r#"{"payroll": ["payroll"]}"#).unwrap_err();
        assert!(matches!(err, AccessError::UnknownFeature(name) if name == "payroll"));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = SectionRequirements::from_json_str(r#"{"tasks": "taskManagement"}"#).unwrap_err();
        assert!(matches!(err, AccessError::InvalidConfig(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sections.json");
        std::fs::write(&path, r#"{"tasks": ["taskManagement"]}"#).unwrap();

        let table = SectionRequirements::load(&path).unwrap();
        assert_eq!(table.get("tasks"), Some(&[Feature::TaskManagement][..]));

        let missing = SectionRequirements::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(missing, AccessError::Io(_)));
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let table = SectionRequirements::empty().with_section("tasks", [Feature::TaskManagement]);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json, serde_json::json!({"tasks": ["taskManagement"]}));
    }
}
