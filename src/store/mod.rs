pub mod postgres;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One persisted contact submission.
///
/// `pk`/`sk` form the storage key: `BU#<BUSINESS_UNIT_UPPER>` and
/// `CONTACT#<timestamp>#<uuid>`. `body` is the sparse submission document;
/// fields left blank by the submitter are absent as keys, not null-filled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRecord {
    pub pk: String,
    pub sk: String,
    pub contact_id: Uuid,
    pub body: serde_json::Value,
}

/// Persistence seam for the submission pipeline.
///
/// Injected into app state so tests can substitute an in-memory fake. A single
/// put attempt is made per submission; errors propagate to the caller.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn put(&self, record: &ContactRecord) -> Result<(), String>;
}
