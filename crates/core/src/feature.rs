//! Tenant feature entitlements.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use crate::error::AccessError;

/// A named entitlement granted by the tenant's subscription plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    /// Task boards and assignment
    TaskManagement,
    /// Leave requests and approvals
    LeaveManagement,
    /// Meeting scheduling
    Meetings,
    /// Analytics dashboards
    Analytics,
    /// Exportable reports
    Reports,
    /// Attendance tracking
    Attendance,
    /// Public API keys
    ApiAccess,
    /// Tenant branding
    CustomBranding,
}

impl Feature {
    /// All known features.
    pub const ALL: [Feature; 8] = [
        Feature::TaskManagement,
        Feature::LeaveManagement,
        Feature::Meetings,
        Feature::Analytics,
        Feature::Reports,
        Feature::Attendance,
        Feature::ApiAccess,
        Feature::CustomBranding,
    ];

    /// Wire name of the feature.
    pub fn as_str(self) -> &'static str {
        match self {
            Feature::TaskManagement => "taskManagement",
            Feature::LeaveManagement => "leaveManagement",
            Feature::Meetings => "meetings",
            Feature::Analytics => "analytics",
            Feature::Reports => "reports",
            Feature::Attendance => "attendance",
            Feature::ApiAccess => "apiAccess",
            Feature::CustomBranding => "customBranding",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Feature {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|feature| feature.as_str() == s)
            .ok_or_else(|| AccessError::UnknownFeature(s.to_string()))
    }
}

/// Snapshot of a tenant's feature flags.
///
/// The payload must be a JSON object of booleans. Keys missing from it
/// default to disabled; keys the client does not know are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    /// Task boards and assignment
    pub task_management: bool,

    /// Leave requests and approvals
    pub leave_management: bool,

    /// Meeting scheduling
    pub meetings: bool,

    /// Analytics dashboards
    pub analytics: bool,

    /// Exportable reports
    pub reports: bool,

    /// Attendance tracking
    pub attendance: bool,

    /// Public API keys
    pub api_access: bool,

    /// Tenant branding
    pub custom_branding: bool,
}

impl FeatureFlags {
    /// Flags with every feature enabled.
    pub fn all_enabled() -> Self {
        let mut flags = Self::default();
        for feature in Feature::ALL {
            flags.set(feature, true);
        }
        flags
    }

    /// Parse a flat JSON object of named booleans.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether a feature is enabled.
    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::TaskManagement => self.task_management,
            Feature::LeaveManagement => self.leave_management,
            Feature::Meetings => self.meetings,
            Feature::Analytics => self.analytics,
            Feature::Reports => self.reports,
            Feature::Attendance => self.attendance,
            Feature::ApiAccess => self.api_access,
            Feature::CustomBranding => self.custom_branding,
        }
    }

    /// Enable or disable a feature.
    pub fn set(&mut self, feature: Feature, enabled: bool) {
        let slot = match feature {
            Feature::TaskManagement => &mut self.task_management,
            Feature::LeaveManagement => &mut self.leave_management,
            Feature::Meetings => &mut self.meetings,
            Feature::Analytics => &mut self.analytics,
            Feature::Reports => &mut self.reports,
            Feature::Attendance => &mut self.attendance,
            Feature::ApiAccess => &mut self.api_access,
            Feature::CustomBranding => &mut self.custom_branding,
        };
        *slot = enabled;
    }

    /// Builder-style variant of [`FeatureFlags::set`].
    pub fn with(mut self, feature: Feature, enabled: bool) -> Self {
        self.set(feature, enabled);
        self
    }

    /// Enabled features, in declaration order.
    pub fn enabled(&self) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|feature| self.is_enabled(*feature))
            .collect()
    }
}

impl<'de> Deserialize<'de> for FeatureFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        let mut flags = FeatureFlags::default();
        for (name, value) in raw {
            let Ok(feature) = name.parse::<Feature>() else {
                continue;
            };
            let enabled = value.as_bool().ok_or_else(|| {
                let message = format!("feature `{}` must be a boolean, got {}", name, value);
                <D::Error as de::Error>::custom(message)
            })?;
            flags.set(feature, enabled);
        }
        Ok(flags)
    }
}
