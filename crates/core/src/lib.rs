//! Workforce access core.
//!
//! Role vocabulary mapping, feature-gated section visibility, entity id
//! extraction, and the client session model shared by the storage and CLI
//! crates.

#![warn(missing_docs)]

// Identities and errors
mod id;
mod error;

// Access control
mod role;
mod feature;
mod section;
mod access;

// Backend payloads and client state
mod entity;
mod session;

// Re-exports
pub use id::*;
pub use error::{AccessError, Result};

pub use role::{to_ui_role, to_api_role, is_admin_role, UiRole, API_ROLES, API_DEPARTMENT_HEAD};
pub use feature::{Feature, FeatureFlags};
pub use section::SectionRequirements;
pub use access::{FeatureAccess, SectionVisibility};

pub use entity::{extract_id, EntityRef};
pub use session::{ClientState, Preferences, Session, Theme};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
