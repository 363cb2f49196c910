//! Organization — the tenant that owns users, rooms, subjects and lessons.

use serde::{Deserialize, Serialize};

use crate::id::OrganizationId;
use crate::record::Tabular;
use crate::time::{self, Timestamp};

/// An organization as returned by `GET /debug/organizations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrganizationId,
    pub mail: String,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Tabular for Organization {
    const COLUMNS: &'static [&'static str] = &["id", "mail", "name", "created_at", "updated_at"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.mail.clone(),
            self.name.clone(),
            time::display(&self.created_at),
            time::display(&self.updated_at),
        ]
    }
}
