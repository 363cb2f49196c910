//! Resource kinds — the six record collections managed by the console.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::device::Device;
use crate::error::UnknownResource;
use crate::lesson::Lesson;
use crate::organization::Organization;
use crate::record::Tabular;
use crate::room::Room;
use crate::subject::Subject;
use crate::user::User;

/// One of the six record collections exposed under `/debug/{kind}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Organizations,
    Users,
    Rooms,
    Devices,
    Subjects,
    Lessons,
}

impl ResourceKind {
    /// Every kind, in console display order.
    pub const ALL: [Self; 6] = [
        Self::Organizations,
        Self::Users,
        Self::Rooms,
        Self::Devices,
        Self::Subjects,
        Self::Lessons,
    ];

    /// Path segment used by the backend and by console routes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Organizations => "organizations",
            Self::Users => "users",
            Self::Rooms => "rooms",
            Self::Devices => "devices",
            Self::Subjects => "subjects",
            Self::Lessons => "lessons",
        }
    }

    /// Card title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Organizations => "Organizations",
            Self::Users => "Users",
            Self::Rooms => "Rooms",
            Self::Devices => "Devices",
            Self::Subjects => "Subjects",
            Self::Lessons => "Lessons",
        }
    }

    /// Singular noun used in notifications.
    #[must_use]
    pub fn singular(self) -> &'static str {
        match self {
            Self::Organizations => "organization",
            Self::Users => "user",
            Self::Rooms => "room",
            Self::Devices => "device",
            Self::Subjects => "subject",
            Self::Lessons => "lesson",
        }
    }

    /// Table header, in cell order.
    #[must_use]
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Self::Organizations => Organization::COLUMNS,
            Self::Users => User::COLUMNS,
            Self::Rooms => Room::COLUMNS,
            Self::Devices => Device::COLUMNS,
            Self::Subjects => Subject::COLUMNS,
            Self::Lessons => Lesson::COLUMNS,
        }
    }

    /// Creation form fields, in display order.
    #[must_use]
    pub fn form_fields(self) -> &'static [FieldSpec] {
        match self {
            Self::Organizations => ORGANIZATION_FIELDS,
            Self::Users => USER_FIELDS,
            Self::Rooms => ROOM_FIELDS,
            Self::Devices => DEVICE_FIELDS,
            Self::Subjects => SUBJECT_FIELDS,
            Self::Lessons => LESSON_FIELDS,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownResource(s.to_string()))
    }
}

/// HTML input flavour of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Number,
    TextArea,
    DateTimeLocal,
}

impl InputType {
    /// Value of the `type` attribute (`textarea` is rendered as its own element).
    #[must_use]
    pub fn as_html(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Number => "number",
            Self::TextArea => "textarea",
            Self::DateTimeLocal => "datetime-local",
        }
    }
}

/// Description of a single creation form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Draft key, also the form input name.
    pub name: &'static str,
    pub label: &'static str,
    pub input: InputType,
    pub required: bool,
}

const fn field(name: &'static str, label: &'static str, input: InputType, required: bool) -> FieldSpec {
    FieldSpec {
        name,
        label,
        input,
        required,
    }
}

const ORGANIZATION_FIELDS: &[FieldSpec] = &[
    field("name", "Organization name", InputType::Text, true),
    field("mail", "Email address", InputType::Email, true),
];

const USER_FIELDS: &[FieldSpec] = &[
    field("email", "Email address", InputType::Email, true),
    field("organization_id", "Organization ID", InputType::Text, true),
];

const ROOM_FIELDS: &[FieldSpec] = &[
    field("name", "Room name", InputType::Text, true),
    field("org_room_id", "Organization room ID", InputType::Text, true),
    field("caption", "Caption", InputType::TextArea, false),
    field("mist_zone_id", "Mist zone ID", InputType::Text, false),
    field("organization_id", "Organization ID", InputType::Text, true),
];

const DEVICE_FIELDS: &[FieldSpec] = &[
    field("user_id", "User ID", InputType::Text, true),
    field("device_id", "Device ID", InputType::Text, true),
];

const SUBJECT_FIELDS: &[FieldSpec] = &[
    field("name", "Subject name", InputType::Text, true),
    field("year", "Year", InputType::Number, true),
    field("organization_id", "Organization ID", InputType::Text, true),
];

const LESSON_FIELDS: &[FieldSpec] = &[
    field("subject_id", "Subject ID", InputType::Text, true),
    field("room_id", "Room ID", InputType::Text, true),
    field("organization_id", "Organization ID", InputType::Text, true),
    field("start_time", "Start time", InputType::DateTimeLocal, true),
    field("end_time", "End time", InputType::DateTimeLocal, true),
];
