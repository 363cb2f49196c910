//! The console page: every resource card plus the notification banner.

use askama::Template;
use axum::extract::State;
use axum::response::Html;

use mistdebug_app::ports::DebugApi;
use mistdebug_app::services::snapshot::{ConsoleSnapshot, ResourceSection};
use mistdebug_domain::notification::Notification;
use mistdebug_domain::resource::InputType;
use mistdebug_domain::time::{self, Timestamp};

use super::render;
use crate::error::ApiError;
use crate::state::AppState;

/// Console page template.
#[derive(Template)]
#[template(path = "console.html")]
pub struct ConsoleTemplate {
    /// Seconds until the visible notification expires.
    pub refresh_seconds: Option<i64>,
    pub notification: Option<NotificationView>,
    pub cards: Vec<CardView>,
}

pub struct NotificationView {
    /// `success`, `error` or `info`.
    pub kind: &'static str,
    pub message: String,
}

pub struct CardView {
    pub kind: &'static str,
    pub title: &'static str,
    pub count: usize,
    pub busy: bool,
    pub columns: &'static [&'static str],
    pub rows: Vec<Vec<String>>,
    pub fields: Vec<FieldView>,
}

pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    /// HTML `type` attribute; unused for text areas.
    pub input: &'static str,
    pub textarea: bool,
    pub required: bool,
    /// Draft value the form is pre-filled with.
    pub value: String,
}

impl ConsoleTemplate {
    /// Build the page for `snapshot` as seen at `now`.
    #[must_use]
    pub fn new(snapshot: &ConsoleSnapshot, now: Timestamp) -> Self {
        Self {
            refresh_seconds: snapshot
                .notification
                .as_ref()
                .map(|n| seconds_until_expiry(n, now)),
            notification: snapshot.notification.as_ref().map(|n| NotificationView {
                kind: n.kind.as_str(),
                message: n.message.clone(),
            }),
            cards: snapshot.sections.iter().map(CardView::from).collect(),
        }
    }
}

impl From<&ResourceSection> for CardView {
    fn from(section: &ResourceSection) -> Self {
        let kind = section.kind;
        Self {
            kind: kind.as_str(),
            title: kind.title(),
            count: section.records.len(),
            busy: section.busy,
            columns: kind.columns(),
            rows: section.records.iter().map(|r| r.cells()).collect(),
            fields: kind
                .form_fields()
                .iter()
                .map(|field| FieldView {
                    name: field.name,
                    label: field.label,
                    input: field.input.as_html(),
                    textarea: field.input == InputType::TextArea,
                    required: field.required,
                    value: section.draft.value(field.name).to_string(),
                })
                .collect(),
        }
    }
}

/// Rounded up, and at least one second.
fn seconds_until_expiry(notification: &Notification, now: Timestamp) -> i64 {
    let millis = (notification.expires_at() - now).num_milliseconds();
    ((millis + 999) / 1000).max(1)
}

/// `GET /` — the console.
pub async fn index<A>(State(state): State<AppState<A>>) -> Result<Html<String>, ApiError>
where
    A: DebugApi + Send + Sync + 'static,
{
    let now = time::now();
    let snapshot = state.console.snapshot_at(now);
    render(&ConsoleTemplate::new(&snapshot, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use mistdebug_domain::draft::Draft;
    use mistdebug_domain::notification::NotificationKind;
    use mistdebug_domain::resource::ResourceKind;

    fn empty_snapshot(notification: Option<Notification>) -> ConsoleSnapshot {
        ConsoleSnapshot {
            sections: ResourceKind::ALL
                .into_iter()
                .map(|kind| ResourceSection {
                    kind,
                    records: vec![],
                    busy: false,
                    draft: Draft::default(),
                })
                .collect(),
            notification,
        }
    }

    #[test]
    fn should_not_refresh_without_notification() {
        let page = ConsoleTemplate::new(&empty_snapshot(None), time::now());
        assert!(page.refresh_seconds.is_none());
        assert_eq!(page.cards.len(), 6);
    }

    #[test]
    fn should_refresh_when_notification_expires() {
        let now = time::now();
        let raised = now - TimeDelta::milliseconds(500);
        let notification = Notification::new(NotificationKind::Success, "Database reset", raised);

        let page = ConsoleTemplate::new(&empty_snapshot(Some(notification)), now);

        assert_eq!(page.refresh_seconds, Some(3));
        let banner = page.notification.unwrap();
        assert_eq!(banner.kind, "success");
    }

    #[test]
    fn should_render_placeholder_for_empty_card() {
        let html = ConsoleTemplate::new(&empty_snapshot(None), time::now())
            .render()
            .unwrap();
        assert!(html.contains("No data"));
        assert!(html.contains(r#"action="/resources/lessons/create""#));
        assert!(html.contains(r#"type="datetime-local""#));
        assert!(!html.contains("http-equiv"));
    }

    #[test]
    fn should_prefill_form_from_draft() {
        let mut snapshot = empty_snapshot(None);
        snapshot.sections[0].draft = Draft::new().with("name", "Acme <Labs>");

        let html = ConsoleTemplate::new(&snapshot, time::now()).render().unwrap();

        assert!(html.contains("Acme &lt;Labs&gt;"));
    }
}
