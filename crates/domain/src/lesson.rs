//! Lesson — one timetable slot of a subject in a room.

use serde::{Deserialize, Serialize};

use crate::id::{LessonId, OrganizationId, RoomId, SubjectId};
use crate::record::Tabular;
use crate::time::{self, Timestamp};

/// A lesson as returned by `GET /debug/lessons`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    pub subject_id: SubjectId,
    pub room_id: RoomId,
    pub org_id: OrganizationId,
    /// 0 = Sunday … 6 = Saturday.
    pub day_of_week: u8,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    /// Set only for one-off lessons held on a specific date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<u8>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Tabular for Lesson {
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "subject_id",
        "room_id",
        "org_id",
        "day_of_week",
        "start_time",
        "end_time",
        "date",
        "period",
        "created_at",
        "updated_at",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.subject_id.to_string(),
            self.room_id.to_string(),
            self.org_id.to_string(),
            self.day_of_week.to_string(),
            time::display(&self.start_time),
            time::display(&self.end_time),
            self.date.as_ref().map(time::display).unwrap_or_default(),
            self.period.map(|p| p.to_string()).unwrap_or_default(),
            time::display(&self.created_at),
            time::display(&self.updated_at),
        ]
    }
}
