//! Debug API port — the backend's `/debug` REST surface.

use std::future::Future;

use mistdebug_domain::draft::CreateRequest;
use mistdebug_domain::error::ConsoleError;
use mistdebug_domain::record::Record;
use mistdebug_domain::resource::ResourceKind;

/// Client for the debug backend.
///
/// One request per call: implementations must not retry, cache or batch.
/// The `String` results carry the backend's confirmation message.
pub trait DebugApi {
    /// `GET /debug/{kind}` — every record of `kind`.
    fn list(
        &self,
        kind: ResourceKind,
    ) -> impl Future<Output = Result<Vec<Record>, ConsoleError>> + Send;

    /// `POST /debug/{kind}` — create one record and return it as stored.
    fn create(
        &self,
        request: CreateRequest,
    ) -> impl Future<Output = Result<Record, ConsoleError>> + Send;

    /// `DELETE /debug/{kind}` — delete every record of `kind`.
    fn delete_all(
        &self,
        kind: ResourceKind,
    ) -> impl Future<Output = Result<String, ConsoleError>> + Send;

    /// `POST /debug/seed` — insert the sample data set.
    fn seed(&self) -> impl Future<Output = Result<String, ConsoleError>> + Send;

    /// `DELETE /debug/reset` — wipe every table.
    fn reset(&self) -> impl Future<Output = Result<String, ConsoleError>> + Send;
}

impl<T: DebugApi + Send + Sync> DebugApi for std::sync::Arc<T> {
    fn list(
        &self,
        kind: ResourceKind,
    ) -> impl Future<Output = Result<Vec<Record>, ConsoleError>> + Send {
        (**self).list(kind)
    }

    fn create(
        &self,
        request: CreateRequest,
    ) -> impl Future<Output = Result<Record, ConsoleError>> + Send {
        (**self).create(request)
    }

    fn delete_all(
        &self,
        kind: ResourceKind,
    ) -> impl Future<Output = Result<String, ConsoleError>> + Send {
        (**self).delete_all(kind)
    }

    fn seed(&self) -> impl Future<Output = Result<String, ConsoleError>> + Send {
        (**self).seed()
    }

    fn reset(&self) -> impl Future<Output = Result<String, ConsoleError>> + Send {
        (**self).reset()
    }
}
