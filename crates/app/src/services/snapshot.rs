//! Read-only view of the console state, as handed to renderers.

use serde::Serialize;

use mistdebug_domain::draft::Draft;
use mistdebug_domain::notification::Notification;
use mistdebug_domain::record::Record;
use mistdebug_domain::resource::ResourceKind;

/// State of one resource card.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceSection {
    pub kind: ResourceKind,
    /// Records from the latest successful list, plus records created since.
    pub records: Vec<Record>,
    /// An action for this resource is in flight.
    pub busy: bool,
    /// Current creation form contents.
    pub draft: Draft,
}

/// Point-in-time copy of the whole console.
#[derive(Debug, Clone, Serialize)]
pub struct ConsoleSnapshot {
    /// One section per resource kind, in [`ResourceKind::ALL`] order.
    pub sections: Vec<ResourceSection>,
    /// The notification still on screen, if any.
    pub notification: Option<Notification>,
}

impl ConsoleSnapshot {
    /// Section of `kind`.
    #[must_use]
    pub fn section(&self, kind: ResourceKind) -> Option<&ResourceSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Records of `kind`, empty when the section is missing.
    #[must_use]
    pub fn records(&self, kind: ResourceKind) -> &[Record] {
        self.section(kind).map_or(&[], |s| s.records.as_slice())
    }
}
