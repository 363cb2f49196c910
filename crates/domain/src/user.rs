//! User — a member of an organization.

use serde::{Deserialize, Serialize};

use crate::id::{OrganizationId, UserId};
use crate::record::Tabular;
use crate::time::{self, Timestamp};

/// A user as returned by `GET /debug/users`.
///
/// The backend also embeds the owning organization and the user's devices;
/// those relation objects are not part of the console's table and are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub org_id: OrganizationId,
    pub mail: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Tabular for User {
    const COLUMNS: &'static [&'static str] = &["id", "org_id", "mail", "created_at", "updated_at"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.org_id.to_string(),
            self.mail.clone(),
            time::display(&self.created_at),
            time::display(&self.updated_at),
        ]
    }
}
