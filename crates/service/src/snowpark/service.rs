use std::sync::Arc;

use models::snowpark::{NewSnowpark, Snowpark, SnowparkPatch};
use tracing::instrument;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::snowpark::repository::SnowparkRepository;

/// Application service over a snowpark repository.
/// Constructed once at startup and shared by handle with every request handler.
pub struct SnowparkService<R: SnowparkRepository> {
    repo: Arc<R>,
}

impl<R: SnowparkRepository> Clone for SnowparkService<R> {
    fn clone(&self) -> Self {
        Self { repo: Arc::clone(&self.repo) }
    }
}

impl<R: SnowparkRepository> SnowparkService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub fn list(&self) -> Vec<Snowpark> { self.repo.list() }

    #[instrument(level = "debug", skip(self, input))]
    pub fn create(&self, input: NewSnowpark) -> Result<Snowpark, ServiceError> {
        self.repo.create(input)
    }

    pub fn get(&self, id: Uuid) -> Result<Snowpark, ServiceError> { self.repo.get(id) }

    #[instrument(level = "debug", skip(self, patch), fields(id = %id))]
    pub fn update(&self, id: Uuid, patch: &SnowparkPatch) -> Result<Snowpark, ServiceError> {
        self.repo.update(id, patch)
    }

    #[instrument(level = "debug", skip(self), fields(id = %id))]
    pub fn delete(&self, id: Uuid) -> Result<(), ServiceError> { self.repo.delete(id) }

    pub fn len(&self) -> usize { self.repo.len() }

    pub fn is_empty(&self) -> bool { self.repo.is_empty() }

    /// Insert the demo record used by fresh deployments.
    pub fn seed(&self) -> Result<Snowpark, ServiceError> {
        self.repo.create(NewSnowpark {
            name: Some("Alpine Ridge".into()),
            location: Some("North Valley".into()),
            is_open: Some(true),
            temperature_c: Some(-4),
            snow_depth_cm: Some(120),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snowpark::MemorySnowparkRepository;

    #[test]
    fn service_crud_flow() -> Result<(), anyhow::Error> {
        let svc = SnowparkService::new(Arc::new(MemorySnowparkRepository::new()));
        assert!(svc.is_empty());

        let seeded = svc.seed()?;
        assert_eq!(seeded.name, "Alpine Ridge");
        assert!(seeded.is_open);

        let handle = svc.clone();
        let created = handle.create(NewSnowpark::new("Glacier", "East"))?;
        assert_eq!(svc.len(), 2);

        let patch = SnowparkPatch { is_open: Some(true), snow_depth_cm: Some(45), ..SnowparkPatch::default() };
        let updated = svc.update(created.id, &patch)?;
        assert!(updated.is_open);
        assert_eq!(updated.snow_depth_cm, 45);
        assert_eq!(updated.name, "Glacier");

        svc.delete(created.id)?;
        assert_eq!(svc.list(), vec![seeded]);
        assert!(svc.get(created.id).is_err());
        Ok(())
    }
}
