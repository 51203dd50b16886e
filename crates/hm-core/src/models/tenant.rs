//! Tenant entity - an independently managed hotel account.

use crate::slug::TenantIdentifiers;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use uuid::Uuid;

/// A tenant is the unit of data isolation: one hotel account with its own
/// staff, roles, and settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: Uuid,
    pub name: String,
    /// Normalized unique identifier derived from the name
    /// (e.g., "le-grand-hotel-x7k2"). Fixed at creation.
    pub slug: String,
    /// Human-facing uppercase form of the slug, handed to users for login.
    /// Fixed at creation.
    pub code: String,
    pub timezone: String,
    /// Free-form settings map; carries the display code under "code"
    pub settings: Value,
    pub created_at: DateTime<Utc>,
}

impl Tenant {
    /// Create a new tenant from a display name and derived identifiers.
    pub fn new(name: String, identifiers: TenantIdentifiers) -> Self {
        let TenantIdentifiers { slug, code } = identifiers;
        Self {
            id: Uuid::new_v4(),
            name,
            slug,
            code: code.clone(),
            timezone: String::from("UTC"),
            settings: json!({ "code": code }),
            created_at: Utc::now(),
        }
    }

    /// The code shown to users: prefers the settings-stored display code,
    /// falls back to the raw slug.
    pub fn public_code(&self) -> String {
        self.settings
            .get("code")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| self.slug.clone())
    }
}
