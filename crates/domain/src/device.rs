//! Device — a student or staff terminal registered to a user.

use serde::{Deserialize, Serialize};

use crate::id::{DeviceId, UserId};
use crate::record::Tabular;
use crate::time::{self, Timestamp};

/// A device as returned by `GET /debug/devices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub user_id: UserId,
    /// Hardware identifier reported by the terminal.
    pub device_id: String,
    pub is_active: bool,
    pub last_authenticated: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Tabular for Device {
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "user_id",
        "device_id",
        "is_active",
        "last_authenticated",
        "created_at",
        "updated_at",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.user_id.to_string(),
            self.device_id.clone(),
            self.is_active.to_string(),
            time::display(&self.last_authenticated),
            time::display(&self.created_at),
            time::display(&self.updated_at),
        ]
    }
}
