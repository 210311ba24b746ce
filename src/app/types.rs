/**
 * Shared Types Module
 *
 * Defines the identity record model shared by the forms, the session
 * store and the views: user profile, nested address and account role.
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role, fixed at signup. Drives dashboard selection and
/// every guard redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Doctor,
}

impl Role {
    /// Label shown on the role toggle buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Patient => "Patient",
            Role::Doctor => "Doctor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Patient => write!(f, "patient"),
            Role::Doctor => write!(f, "doctor"),
        }
    }
}

/// Postal address attached to every profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub line1: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.line1, self.city, self.state, self.pincode
        )
    }
}

/// A validated user profile. Produced by the signup form (or the login
/// mock) and held by the session for the lifetime of the process; the
/// password is kept verbatim and never persisted anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    /// Embedded `data:` URI, absent until a picture is attached.
    pub profile_picture: Option<String>,
    pub username: String,
    pub email: String,
    pub password: String,
    pub address: Address,
    pub role: Role,
}

impl UserProfile {
    /// Display name used by the header and the dashboards.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Fallback avatar letter when no picture is attached.
    pub fn initial(&self) -> char {
        self.first_name.chars().next().unwrap_or('?')
    }
}
