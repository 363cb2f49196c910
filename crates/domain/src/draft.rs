//! Drafts — creation form contents — and their conversion into backend
//! create requests.
//!
//! The backend validates everything. The only conversion done here is
//! the per-resource field mapping (lessons post `org_id`, not
//! `organization_id`) and typing the subject year as a JSON number.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DraftError;
use crate::resource::ResourceKind;

/// Values typed into a resource's creation form, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Draft(BTreeMap<String, String>);

impl Draft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    /// Value of `field`, or `""` when the field was never filled in.
    #[must_use]
    pub fn value(&self, field: &str) -> &str {
        self.0.get(field).map_or("", String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Drop every entry that is not a form field of `kind`.
    #[must_use]
    pub fn restricted_to(mut self, kind: ResourceKind) -> Self {
        let fields = kind.form_fields();
        self.0.retain(|name, _| fields.iter().any(|f| f.name == name));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Draft {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// `POST /debug/organizations` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewOrganization {
    pub name: String,
    pub mail: String,
}

/// `POST /debug/users` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub email: String,
    pub organization_id: String,
}

/// `POST /debug/rooms` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRoom {
    pub name: String,
    pub org_room_id: String,
    pub caption: String,
    pub mist_zone_id: String,
    pub organization_id: String,
}

/// `POST /debug/devices` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDevice {
    pub user_id: String,
    pub device_id: String,
}

/// `POST /debug/subjects` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSubject {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub organization_id: String,
}

/// `POST /debug/lessons` body.
///
/// Times use the `datetime-local` format (`2024-04-01T09:00`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewLesson {
    pub subject_id: String,
    pub room_id: String,
    pub org_id: String,
    pub start_time: String,
    pub end_time: String,
}

/// Body of a create call, one variant per resource kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CreateRequest {
    Organization(NewOrganization),
    User(NewUser),
    Room(NewRoom),
    Device(NewDevice),
    Subject(NewSubject),
    Lesson(NewLesson),
}

impl CreateRequest {
    /// Map a creation form onto the request body expected for `kind`.
    ///
    /// Missing fields are sent empty; the backend decides whether that is
    /// acceptable.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::InvalidNumber`] when a subject year is filled in
    /// but is not an integer.
    pub fn from_draft(kind: ResourceKind, draft: &Draft) -> Result<Self, DraftError> {
        let text = |field: &str| draft.value(field).to_string();

        Ok(match kind {
            ResourceKind::Organizations => Self::Organization(NewOrganization {
                name: text("name"),
                mail: text("mail"),
            }),
            ResourceKind::Users => Self::User(NewUser {
                email: text("email"),
                organization_id: text("organization_id"),
            }),
            ResourceKind::Rooms => Self::Room(NewRoom {
                name: text("name"),
                org_room_id: text("org_room_id"),
                caption: text("caption"),
                mist_zone_id: text("mist_zone_id"),
                organization_id: text("organization_id"),
            }),
            ResourceKind::Devices => Self::Device(NewDevice {
                user_id: text("user_id"),
                device_id: text("device_id"),
            }),
            ResourceKind::Subjects => Self::Subject(NewSubject {
                name: text("name"),
                year: parse_optional_number("year", draft.value("year"))?,
                organization_id: text("organization_id"),
            }),
            ResourceKind::Lessons => Self::Lesson(NewLesson {
                subject_id: text("subject_id"),
                room_id: text("room_id"),
                org_id: text("organization_id"),
                start_time: text("start_time"),
                end_time: text("end_time"),
            }),
        })
    }

    /// The collection this request creates a record in.
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Organization(_) => ResourceKind::Organizations,
            Self::User(_) => ResourceKind::Users,
            Self::Room(_) => ResourceKind::Rooms,
            Self::Device(_) => ResourceKind::Devices,
            Self::Subject(_) => ResourceKind::Subjects,
            Self::Lesson(_) => ResourceKind::Lessons,
        }
    }
}

fn parse_optional_number(field: &'static str, value: &str) -> Result<Option<i32>, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| DraftError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}
