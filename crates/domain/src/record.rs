//! Record — a row of any of the six resource kinds.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::device::Device;
use crate::lesson::Lesson;
use crate::organization::Organization;
use crate::resource::ResourceKind;
use crate::room::Room;
use crate::subject::Subject;
use crate::user::User;

/// A record type that renders as a console table row.
pub trait Tabular {
    /// Column names, in the same order as [`Tabular::cells`].
    const COLUMNS: &'static [&'static str];

    /// Display value of each column.
    fn cells(&self) -> Vec<String>;
}

/// A record of any resource kind.
///
/// Serializes as the inner record so JSON snapshots carry the backend shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Organization(Organization),
    User(User),
    Room(Room),
    Device(Device),
    Subject(Subject),
    Lesson(Lesson),
}

impl Record {
    /// The collection this record belongs to.
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

    /// Display value of each column of [`ResourceKind::columns`].
    #[must_use]
    pub fn cells(&self) -> Vec<String> {
        match self {
            Self::Organization(r) => r.cells(),
            Self::User(r) => r.cells(),
            Self::Room(r) => r.cells(),
            Self::Device(r) => r.cells(),
            Self::Subject(r) => r.cells(),
            Self::Lesson(r) => r.cells(),
        }
    }

    /// Decode a single record of `kind` from a JSON body.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the body does not match the
    /// record shape of `kind`.
    pub fn from_slice(kind: ResourceKind, body: &[u8]) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            ResourceKind::Organizations => Self::Organization(serde_json::from_slice(body)?),
            ResourceKind::Users => Self::User(serde_json::from_slice(body)?),
            ResourceKind::Rooms => Self::Room(serde_json::from_slice(body)?),
            ResourceKind::Devices => Self::Device(serde_json::from_slice(body)?),
            ResourceKind::Subjects => Self::Subject(serde_json::from_slice(body)?),
            ResourceKind::Lessons => Self::Lesson(serde_json::from_slice(body)?),
        })
    }

    /// Decode a JSON array of `kind` records.
    ///
    /// A `null` body decodes as an empty list.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when any element does not match the
    /// record shape of `kind`.
    pub fn list_from_slice(kind: ResourceKind, body: &[u8]) -> Result<Vec<Self>, serde_json::Error> {
        match kind {
            ResourceKind::Organizations => decode_list(body, Self::Organization),
            ResourceKind::Users => decode_list(body, Self::User),
            ResourceKind::Rooms => decode_list(body, Self::Room),
            ResourceKind::Devices => decode_list(body, Self::Device),
            ResourceKind::Subjects => decode_list(body, Self::Subject),
            ResourceKind::Lessons => decode_list(body, Self::Lesson),
        }
    }
}

fn decode_list<T: DeserializeOwned>(
    body: &[u8],
    wrap: fn(T) -> Record,
) -> Result<Vec<Record>, serde_json::Error> {
    let items: Option<Vec<T>> = serde_json::from_slice(body)?;
    Ok(items.unwrap_or_default().into_iter().map(wrap).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUBJECTS: &str = r#"[
        {"id": "s-1", "name": "Math", "year": 2024, "org_id": "o-1",
         "created_at": "2024-04-01T00:00:00Z", "updated_at": "2024-04-01T00:00:00Z"},
        {"id": "s-2", "name": "English", "year": 2024, "org_id": "o-1",
         "created_at": "2024-04-01T00:00:00Z", "updated_at": "2024-04-01T00:00:00Z"}
    ]"#;

    #[test]
    fn should_decode_list_of_requested_kind() {
        let records = Record::list_from_slice(ResourceKind::Subjects, SUBJECTS.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.kind() == ResourceKind::Subjects));
        assert_eq!(records[0].cells()[1], "Math");
    }

    #[test]
    fn should_decode_null_as_empty_list() {
        let records = Record::list_from_slice(ResourceKind::Users, b"null").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn should_reject_body_of_another_shape() {
        let result = Record::list_from_slice(ResourceKind::Devices, SUBJECTS.as_bytes());
        assert!(result.is_err());
    }

    #[test]
    fn should_serialize_without_variant_tag() {
        let record = Record::from_slice(
            ResourceKind::Organizations,
            br#"{"id": "o-1", "mail": "a@example.com", "name": "A",
                 "created_at": "2024-04-01T00:00:00Z", "updated_at": "2024-04-01T00:00:00Z"}"#,
        )
        .unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["name"], "A");
        assert!(value.get("Organization").is_none());
    }

    #[test]
    fn should_produce_one_cell_per_column() {
        let records = Record::list_from_slice(ResourceKind::Subjects, SUBJECTS.as_bytes()).unwrap();
        for record in records {
            assert_eq!(record.cells().len(), record.kind().columns().len());
        }
    }
}
