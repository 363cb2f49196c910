//! Console service — the resource action dispatcher.
//!
//! Holds, per resource kind, the records on screen, a busy flag and the
//! creation form draft, plus the single transient notification. Every
//! action catches its own failure and turns it into an error notification;
//! prior state is left untouched when a request fails.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use mistdebug_domain::draft::{CreateRequest, Draft};
use mistdebug_domain::error::ConsoleError;
use mistdebug_domain::notification::{Notification, NotificationKind};
use mistdebug_domain::record::Record;
use mistdebug_domain::resource::ResourceKind;
use mistdebug_domain::time::{self, Timestamp};

use super::snapshot::{ConsoleSnapshot, ResourceSection};
use crate::ports::DebugApi;

/// Operator answer to a destructive action prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirmed
        } else {
            Self::Declined
        }
    }
}

/// How an action ended. Failures are already reported as notifications.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The operator declined the confirmation; nothing was sent.
    Cancelled,
    /// Another action on the same resource was in flight; nothing was sent.
    Busy,
    Failed,
}

#[derive(Debug, Default)]
struct ResourceState {
    records: Vec<Record>,
    busy: bool,
    draft: Draft,
    /// Bumped by every fetch and bulk delete; a fetch whose number is no
    /// longer current drops its rows.
    generation: u64,
}

impl ResourceState {
    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}

#[derive(Debug, Default)]
struct ConsoleState {
    resources: HashMap<ResourceKind, ResourceState>,
    notification: Option<Notification>,
}

impl ConsoleState {
    fn resource_mut(&mut self, kind: ResourceKind) -> &mut ResourceState {
        self.resources.entry(kind).or_default()
    }
}

fn lock(state: &Mutex<ConsoleState>) -> MutexGuard<'_, ConsoleState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clears the busy flag of a resource when the action ends, including when
/// the action future is dropped mid-request.
struct BusyGuard<'a> {
    state: &'a Mutex<ConsoleState>,
    kind: ResourceKind,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        lock(self.state).resource_mut(self.kind).busy = false;
    }
}

/// Application service dispatching console actions to the debug backend.
pub struct ConsoleService<A> {
    api: A,
    state: Mutex<ConsoleState>,
}

impl<A: DebugApi> ConsoleService<A> {
    /// Create a console with every resource empty.
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: Mutex::new(ConsoleState::default()),
        }
    }

    /// Fetch every record of `kind` and replace what is on screen.
    pub async fn load(&self, kind: ResourceKind) -> Outcome {
        let Some(_busy) = self.begin(kind) else {
            return Outcome::Busy;
        };

        match self.fetch(kind).await {
            Ok(()) => Outcome::Completed,
            Err(err) => {
                self.fail("Failed to load data", &err);
                Outcome::Failed
            }
        }
    }

    /// Load all six resources concurrently.
    ///
    /// Returns one outcome per kind, in [`ResourceKind::ALL`] order.
    pub async fn load_all(&self) -> [Outcome; 6] {
        let (organizations, users, rooms, devices, subjects, lessons) = tokio::join!(
            self.load(ResourceKind::Organizations),
            self.load(ResourceKind::Users),
            self.load(ResourceKind::Rooms),
            self.load(ResourceKind::Devices),
            self.load(ResourceKind::Subjects),
            self.load(ResourceKind::Lessons),
        );
        [organizations, users, rooms, devices, subjects, lessons]
    }

    /// Set one field of the creation form of `kind`.
    ///
    /// Names that are not form fields of `kind` are ignored.
    pub fn update_draft(&self, kind: ResourceKind, field: &str, value: impl Into<String>) {
        if kind.form_fields().iter().any(|f| f.name == field) {
            self.lock().resource_mut(kind).draft.set(field, value);
        }
    }

    /// Empty the creation form of `kind`.
    pub fn clear_draft(&self, kind: ResourceKind) {
        self.lock().resource_mut(kind).draft.clear();
    }

    /// Submit `draft` as a new record of `kind`.
    ///
    /// The submitted values become the resource's draft, so a failed
    /// submission keeps the form filled in. On success the created record is
    /// appended and the draft cleared.
    pub async fn create(&self, kind: ResourceKind, draft: Draft) -> Outcome {
        let Some(_busy) = self.begin(kind) else {
            return Outcome::Busy;
        };

        let draft = draft.restricted_to(kind);
        self.lock().resource_mut(kind).draft = draft.clone();

        let request = match CreateRequest::from_draft(kind, &draft) {
            Ok(request) => request,
            Err(err) => {
                self.fail("Failed to create", &err.into());
                return Outcome::Failed;
            }
        };

        match self.api.create(request).await {
            Ok(record) => {
                {
                    let mut state = self.lock();
                    let resource = state.resource_mut(kind);
                    resource.records.push(record);
                    resource.draft.clear();
                }
                tracing::info!(%kind, "record created");
                self.notify(
                    NotificationKind::Success,
                    format!("Created {}", kind.singular()),
                );
                Outcome::Completed
            }
            Err(err) => {
                self.fail("Failed to create", &err);
                Outcome::Failed
            }
        }
    }

    /// Delete every record of `kind` once the operator confirmed.
    pub async fn delete_all(&self, kind: ResourceKind, confirmation: Confirmation) -> Outcome {
        if confirmation == Confirmation::Declined {
            return Outcome::Cancelled;
        }
        let Some(_busy) = self.begin(kind) else {
            return Outcome::Busy;
        };

        match self.api.delete_all(kind).await {
            Ok(message) => {
                {
                    let mut state = self.lock();
                    let resource = state.resource_mut(kind);
                    resource.records.clear();
                    resource.next_generation();
                }
                tracing::info!(%kind, %message, "records deleted");
                self.notify(NotificationKind::Success, format!("Deleted all {kind}"));
                Outcome::Completed
            }
            Err(err) => {
                self.fail("Failed to delete", &err);
                Outcome::Failed
            }
        }
    }

    /// Ask the backend to insert its sample data, then reload everything.
    ///
    /// The reload ignores busy flags: a resource with an action in flight is
    /// refreshed too, and the older response is dropped when it lands.
    pub async fn seed(&self, confirmation: Confirmation) -> Outcome {
        if confirmation == Confirmation::Declined {
            return Outcome::Cancelled;
        }

        match self.api.seed().await {
            Ok(message) => {
                tracing::info!(%message, "seed data created");
                self.notify(NotificationKind::Success, "Seed data created");
                self.reload_all().await;
                Outcome::Completed
            }
            Err(err) => {
                self.fail("Failed to create seed data", &err);
                Outcome::Failed
            }
        }
    }

    /// Ask the backend to wipe every table, then reload everything the way
    /// [`Self::seed`] does.
    pub async fn reset(&self, confirmation: Confirmation) -> Outcome {
        if confirmation == Confirmation::Declined {
            return Outcome::Cancelled;
        }

        match self.api.reset().await {
            Ok(message) => {
                tracing::info!(%message, "database reset");
                self.notify(NotificationKind::Success, "Database reset");
                self.reload_all().await;
                Outcome::Completed
            }
            Err(err) => {
                self.fail("Failed to reset database", &err);
                Outcome::Failed
            }
        }
    }

    /// Refetch all six resources regardless of their busy flags.
    async fn reload_all(&self) {
        tokio::join!(
            self.reload(ResourceKind::Organizations),
            self.reload(ResourceKind::Users),
            self.reload(ResourceKind::Rooms),
            self.reload(ResourceKind::Devices),
            self.reload(ResourceKind::Subjects),
            self.reload(ResourceKind::Lessons),
        );
    }

    async fn reload(&self, kind: ResourceKind) {
        if let Err(err) = self.fetch(kind).await {
            self.fail("Failed to load data", &err);
        }
    }

    /// List `kind` and replace the records on screen, unless another fetch
    /// of `kind` started or a bulk delete of it finished in the meantime.
    async fn fetch(&self, kind: ResourceKind) -> Result<(), ConsoleError> {
        let generation = self.lock().resource_mut(kind).next_generation();
        let records = self.api.list(kind).await?;

        let mut state = self.lock();
        let resource = state.resource_mut(kind);
        if resource.generation == generation {
            tracing::debug!(%kind, count = records.len(), "records loaded");
            resource.records = records;
        } else {
            tracing::debug!(%kind, "superseded records dropped");
        }
        Ok(())
    }

    /// Copy of the current state, hiding an expired notification.
    pub fn snapshot(&self) -> ConsoleSnapshot {
        self.snapshot_at(time::now())
    }

    /// Copy of the state as seen at `now`.
    pub fn snapshot_at(&self, now: Timestamp) -> ConsoleSnapshot {
        let state = self.lock();
        let sections = ResourceKind::ALL
            .into_iter()
            .map(|kind| {
                let resource = state.resources.get(&kind);
                ResourceSection {
                    kind,
                    records: resource.map(|r| r.records.clone()).unwrap_or_default(),
                    busy: resource.is_some_and(|r| r.busy),
                    draft: resource.map(|r| r.draft.clone()).unwrap_or_default(),
                }
            })
            .collect();

        ConsoleSnapshot {
            sections,
            notification: state
                .notification
                .clone()
                .filter(|n| n.is_visible_at(now)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ConsoleState> {
        lock(&self.state)
    }

    fn begin(&self, kind: ResourceKind) -> Option<BusyGuard<'_>> {
        let mut state = self.lock();
        let resource = state.resource_mut(kind);
        if resource.busy {
            tracing::debug!(%kind, "action ignored, resource busy");
            return None;
        }
        resource.busy = true;
        Some(BusyGuard {
            state: &self.state,
            kind,
        })
    }

    fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        self.lock().notification = Some(Notification::new(kind, message, time::now()));
    }

    fn fail(&self, context: &str, err: &ConsoleError) {
        tracing::warn!(error = %err, "{context}");
        self.notify(
            NotificationKind::Error,
            format!("{context}: {}", err.user_message()),
        );
    }
}
