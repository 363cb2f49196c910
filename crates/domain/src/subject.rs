//! Subject — a course taught within an organization.

use serde::{Deserialize, Serialize};

use crate::id::{OrganizationId, SubjectId};
use crate::record::Tabular;
use crate::time::{self, Timestamp};

/// A subject as returned by `GET /debug/subjects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    /// Academic year; `0` when the backend did not record one.
    #[serde(default)]
    pub year: i32,
    pub org_id: OrganizationId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Tabular for Subject {
    const COLUMNS: &'static [&'static str] =
        &["id", "name", "year", "org_id", "created_at", "updated_at"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.year.to_string(),
            self.org_id.to_string(),
            time::display(&self.created_at),
            time::display(&self.updated_at),
        ]
    }
}
