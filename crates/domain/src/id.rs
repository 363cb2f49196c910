//! Typed identifier newtypes for server-assigned record ids.
//!
//! The debug backend generates every identifier. The console never creates
//! or validates one, so the newtypes wrap the raw string as received.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an identifier received from the backend.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the raw identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

define_id!(
    /// Identifier of an [`Organization`](crate::organization::Organization).
    OrganizationId
);

define_id!(
    /// Identifier of a [`User`](crate::user::User).
    UserId
);

define_id!(
    /// Identifier of a [`Room`](crate::room::Room).
    RoomId
);

define_id!(
    /// Identifier of a [`Device`](crate::device::Device) record (not the hardware id).
    DeviceId
);

define_id!(
    /// Identifier of a [`Subject`](crate::subject::Subject).
    SubjectId
);

define_id!(
    /// Identifier of a [`Lesson`](crate::lesson::Lesson).
    LessonId
);
