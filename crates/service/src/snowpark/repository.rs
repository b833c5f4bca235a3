use models::snowpark::{NewSnowpark, Snowpark, SnowparkPatch};
use uuid::Uuid;

use crate::errors::ServiceError;

/// Storage seam for snowpark records.
///
/// Implementations must make single-key operations linearizable and must never expose a
/// partially written record. All calls are synchronous and bounded.
pub trait SnowparkRepository: Send + Sync {
    /// Validate, assign a fresh id, and insert.
    fn create(&self, input: NewSnowpark) -> Result<Snowpark, ServiceError>;
    fn get(&self, id: Uuid) -> Result<Snowpark, ServiceError>;
    /// Snapshot of every record, in no particular order.
    fn list(&self) -> Vec<Snowpark>;
    /// Replace the record with `patch` applied over it. Empty patches are rejected.
    fn update(&self, id: Uuid, patch: &SnowparkPatch) -> Result<Snowpark, ServiceError>;
    /// Remove the record. A second delete of the same id reports `NotFound`.
    fn delete(&self, id: Uuid) -> Result<(), ServiceError>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
