// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role of a user account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Read-only visitor.
    Guest,
    /// Regular member.
    #[default]
    User,
    /// Administrator.
    Admin,
}

impl UserRole {
    /// Wire name of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Guest => "GUEST",
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GUEST" => Ok(Self::Guest),
            "USER" => Ok(Self::User),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

/// Category of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventCategory {
    /// Sports
    Sports,
    /// Study
    Study,
    /// Music
    Music,
    /// Tech
    Tech,
    /// Workshop
    Workshop,
    /// Social
    Social,
    /// Garage Sale
    GarageSale,
    /// Other
    Other,
}

impl EventCategory {
    /// All categories, in display order.
    pub const ALL: [EventCategory; 8] = [
        Self::Sports,
        Self::Study,
        Self::Music,
        Self::Tech,
        Self::Workshop,
        Self::Social,
        Self::GarageSale,
        Self::Other,
    ];

    /// Wire name of the category, e.g. `GARAGE_SALE`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sports => "SPORTS",
            Self::Study => "STUDY",
            Self::Music => "MUSIC",
            Self::Tech => "TECH",
            Self::Workshop => "WORKSHOP",
            Self::Social => "SOCIAL",
            Self::GarageSale => "GARAGE_SALE",
            Self::Other => "OTHER",
        }
    }

    /// Human readable label, e.g. `Garage Sale`.
    #[must_use]
    pub fn label(self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_string() + &chars.as_str().to_lowercase(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| format!("Invalid event category: {s}"))
    }
}

/// Attendance response to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RsvpStatus {
    /// Attending.
    Going,
    /// Maybe attending.
    Interested,
    /// Not attending; the backend keeps the record but the user no longer participates.
    NotGoing,
}

impl RsvpStatus {
    /// Wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Going => "GOING",
            Self::Interested => "INTERESTED",
            Self::NotGoing => "NOT_GOING",
        }
    }

    /// Whether the status counts as participating.
    #[must_use]
    pub const fn is_participating(self) -> bool {
        !matches!(self, Self::NotGoing)
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RsvpStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "GOING" => Ok(Self::Going),
            "INTERESTED" => Ok(Self::Interested),
            "NOT_GOING" => Ok(Self::NotGoing),
            _ => Err(format!("Invalid RSVP status: {s}")),
        }
    }
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Login name.
    pub username: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Account role.
    #[serde(default)]
    pub role: UserRole,
    /// Creation timestamp as sent by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Whether the account is active.
    #[serde(default, alias = "active", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// An event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Server-assigned id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Title.
    pub title: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Location.
    #[serde(default)]
    pub location: String,
    /// Local wall-clock timestamp, `YYYY-MM-DDTHH:MM:SS`.
    pub event_date: String,
    /// Category.
    pub category: EventCategory,
    /// Participant limit, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    /// Creation timestamp as sent by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Whether the event is active.
    #[serde(default, alias = "active", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// The user who created the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<User>,
}

impl Event {
    /// Id of the organizer, if known.
    #[must_use]
    pub fn organizer_id(&self) -> Option<i64> {
        self.organizer.as_ref().and_then(|u| u.id)
    }
}

/// A user's response to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    /// Server-assigned id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Responding user.
    pub user: User,
    /// The event responded to. Some endpoints omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<Event>,
    /// Response.
    pub status: RsvpStatus,
    /// When the response was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsvp_date: Option<String>,
}

impl Rsvp {
    /// Id of the event responded to, if known.
    #[must_use]
    pub fn event_id(&self) -> Option<i64> {
        self.event.as_ref().and_then(|e| e.id)
    }
}

/// A comment on an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Server-assigned id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Author.
    pub user: User,
    /// The event commented on. Some endpoints omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<Event>,
    /// Comment text.
    pub content: String,
    /// Creation timestamp as sent by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Request body for creating or updating an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Location.
    pub location: String,
    /// Local wall-clock timestamp, `YYYY-MM-DDTHH:MM:SS`.
    pub event_date: String,
    /// Category.
    pub category: EventCategory,
    /// Participant limit, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
}

/// Partial update of a user profile. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    /// New login name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// New email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
