//! Room — a physical classroom, optionally mapped to a Mist zone.

use serde::{Deserialize, Serialize};

use crate::id::{OrganizationId, RoomId};
use crate::record::Tabular;
use crate::time::{self, Timestamp};

/// A room as returned by `GET /debug/rooms`.
///
/// The backend omits empty optional columns, so they default to `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub org_id: OrganizationId,
    pub org_room_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub mist_zone_id: String,
    #[serde(default)]
    pub map_id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Tabular for Room {
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "org_id",
        "org_room_id",
        "name",
        "caption",
        "mist_zone_id",
        "map_id",
        "created_at",
        "updated_at",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.org_id.to_string(),
            self.org_room_id.clone(),
            self.name.clone(),
            self.caption.clone(),
            self.mist_zone_id.clone(),
            self.map_id.clone(),
            time::display(&self.created_at),
            time::display(&self.updated_at),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_omitted_columns() {
        let json = r#"{
            "id": "r-1",
            "org_id": "o-1",
            "org_room_id": "room-101",
            "name": "Room 101",
            "created_at": "2024-04-01T00:00:00Z",
            "updated_at": "2024-04-01T00:00:00Z"
        }"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.caption, "");
        assert_eq!(room.mist_zone_id, "");
        assert_eq!(room.cells()[3], "Room 101");
    }
}
