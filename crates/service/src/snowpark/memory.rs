//! In-memory snowpark store backed by `DashMap`.
//!
//! Keys are spread over sharded locks, so operations on unrelated ids never serialize on a
//! global lock. Each single-key operation completes while holding its shard guard:
//! - create: insert-if-absent on a freshly generated id
//! - update: read-modify-write under the entry's write guard
//! - delete: atomic remove
//!
//! Id generation happens before any shard is touched.

use dashmap::{mapref::entry::Entry, DashMap};
use models::snowpark::{NewSnowpark, Snowpark, SnowparkPatch};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::snowpark::repository::SnowparkRepository;

/// Source of record ids. Must not repeat within a process lifetime.
pub type IdSource = fn() -> Uuid;

const ENTITY: &str = "snowpark";

pub struct MemorySnowparkRepository {
    records: DashMap<Uuid, Snowpark>,
    next_id: IdSource,
}

impl MemorySnowparkRepository {
    pub fn new() -> Self {
        Self::with_id_source(Uuid::new_v4)
    }

    pub fn with_id_source(next_id: IdSource) -> Self {
        Self { records: DashMap::new(), next_id }
    }
}

impl Default for MemorySnowparkRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SnowparkRepository for MemorySnowparkRepository {
    fn create(&self, input: NewSnowpark) -> Result<Snowpark, ServiceError> {
        let id = (self.next_id)();
        let record = input.into_record(id)?;
        match self.records.entry(id) {
            Entry::Occupied(_) => Err(ServiceError::CreateFailed(format!(
                "{} id {} already in use",
                ENTITY, id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    fn get(&self, id: Uuid) -> Result<Snowpark, ServiceError> {
        self.records
            .get(&id)
            .map(|r| r.value().clone())
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    fn list(&self) -> Vec<Snowpark> {
        self.records.iter().map(|r| r.value().clone()).collect()
    }

    fn update(&self, id: Uuid, patch: &SnowparkPatch) -> Result<Snowpark, ServiceError> {
        patch.validate()?;
        let mut entry = self
            .records
            .get_mut(&id)
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        let next = patch.apply(entry.value());
        *entry = next.clone();
        Ok(next)
    }

    fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.records
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn alpine(store: &MemorySnowparkRepository) -> Snowpark {
        store
            .create(NewSnowpark {
                name: Some("Alpine".into()),
                location: Some("Valley".into()),
                is_open: Some(true),
                temperature_c: Some(-4),
                snow_depth_cm: Some(120),
            })
            .unwrap()
    }

    #[test]
    fn concurrent_creates_get_distinct_ids() {
        let store = Arc::new(MemorySnowparkRepository::new());
        let per_thread = 200;
        let threads = 8;
        let ids: Vec<Uuid> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..threads)
                .map(|t| {
                    let store = Arc::clone(&store);
                    s.spawn(move || {
                        (0..per_thread)
                            .map(|i| store.create(NewSnowpark::new(format!("park-{t}-{i}"), "X")).unwrap().id)
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles.into_iter().flat_map(|h| h.join().unwrap()).collect()
        });
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), threads * per_thread);
        assert_eq!(store.len(), threads * per_thread);
    }

    #[test]
    fn create_then_get_round_trips_defaults() -> Result<(), anyhow::Error> {
        let store = MemorySnowparkRepository::new();
        let created = store.create(NewSnowpark::new("A", "B"))?;
        let found = store.get(created.id)?;
        assert_eq!(found, created);
        assert_eq!(found.name, "A");
        assert_eq!(found.location, "B");
        assert!(!found.is_open);
        assert_eq!(found.temperature_c, 0);
        assert_eq!(found.snow_depth_cm, 0);
        Ok(())
    }

    #[test]
    fn partial_update_preserves_untouched_fields() -> Result<(), anyhow::Error> {
        let store = MemorySnowparkRepository::new();
        let rec = alpine(&store);
        let patch = SnowparkPatch { temperature_c: Some(-10), ..SnowparkPatch::default() };
        let updated = store.update(rec.id, &patch)?;
        assert_eq!(updated, Snowpark { temperature_c: -10, ..rec.clone() });
        assert_eq!(store.get(rec.id)?, updated);
        Ok(())
    }

    #[test]
    fn empty_patch_is_rejected_and_record_unchanged() -> Result<(), anyhow::Error> {
        let store = MemorySnowparkRepository::new();
        let rec = alpine(&store);
        let err = store.update(rec.id, &SnowparkPatch::default()).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
        assert_eq!(store.get(rec.id)?, rec);
        Ok(())
    }

    #[test]
    fn unknown_or_deleted_ids_are_not_found() -> Result<(), anyhow::Error> {
        let store = MemorySnowparkRepository::new();
        let never = Uuid::new_v4();
        let patch = SnowparkPatch { is_open: Some(true), ..SnowparkPatch::default() };
        assert!(matches!(store.get(never), Err(ServiceError::NotFound(_))));
        assert!(matches!(store.update(never, &patch), Err(ServiceError::NotFound(_))));
        assert!(matches!(store.delete(never), Err(ServiceError::NotFound(_))));

        let rec = store.create(NewSnowpark::new("A", "B"))?;
        store.delete(rec.id)?;
        assert!(matches!(store.get(rec.id), Err(ServiceError::NotFound(_))));
        assert!(matches!(store.update(rec.id, &patch), Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[test]
    fn delete_is_one_shot() -> Result<(), anyhow::Error> {
        let store = MemorySnowparkRepository::new();
        let rec = store.create(NewSnowpark::new("A", "B"))?;
        store.delete(rec.id)?;
        let err = store.delete(rec.id).unwrap_err();
        assert_eq!(err.code(), "SnowparkNotFound");
        Ok(())
    }

    #[test]
    fn list_reflects_creates_and_deletes() -> Result<(), anyhow::Error> {
        let store = MemorySnowparkRepository::new();
        assert!(store.list().is_empty());

        let rec = store.create(NewSnowpark::new("A", "B"))?;
        assert_eq!(store.list(), vec![rec.clone()]);

        store.delete(rec.id)?;
        assert!(store.list().iter().all(|r| r.id != rec.id));
        assert!(store.is_empty());
        Ok(())
    }

    #[test]
    fn concurrent_updates_never_mix_field_values() -> Result<(), anyhow::Error> {
        let store = Arc::new(MemorySnowparkRepository::new());
        let rec = alpine(&store);
        let rounds = 250;

        std::thread::scope(|s| {
            for worker in 0..4 {
                let store = Arc::clone(&store);
                s.spawn(move || {
                    for i in 0..rounds {
                        let patch = match worker {
                            0 => SnowparkPatch { temperature_c: Some(i), ..SnowparkPatch::default() },
                            1 => SnowparkPatch { snow_depth_cm: Some(1000 + i), ..SnowparkPatch::default() },
                            2 => SnowparkPatch { name: Some(format!("name-{i}")), ..SnowparkPatch::default() },
                            _ => SnowparkPatch { is_open: Some(i % 2 == 0), ..SnowparkPatch::default() },
                        };
                        store.update(rec.id, &patch).unwrap();
                    }
                });
            }
        });

        let last = store.get(rec.id)?;
        assert_eq!(last.id, rec.id);
        assert_eq!(last.location, "Valley");
        assert!((0..rounds).contains(&last.temperature_c));
        assert!((1000..1000 + rounds).contains(&last.snow_depth_cm));
        assert!(last.name.starts_with("name-"));
        let n: i32 = last.name["name-".len()..].parse()?;
        assert!((0..rounds).contains(&n));
        Ok(())
    }

    #[test]
    fn concurrent_update_and_delete_leave_consistent_state() {
        let store = Arc::new(MemorySnowparkRepository::new());
        let rec = alpine(&store);
        std::thread::scope(|s| {
            let updater = Arc::clone(&store);
            s.spawn(move || {
                for i in 0..500 {
                    let patch = SnowparkPatch { snow_depth_cm: Some(i), ..SnowparkPatch::default() };
                    match updater.update(rec.id, &patch) {
                        Ok(r) => assert_eq!(r.snow_depth_cm, i),
                        Err(e) => assert!(matches!(e, ServiceError::NotFound(_))),
                    }
                }
            });
            let deleter = Arc::clone(&store);
            s.spawn(move || {
                deleter.delete(rec.id).unwrap();
            });
        });
        assert!(matches!(store.get(rec.id), Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn invalid_create_does_not_add_a_record() {
        let store = MemorySnowparkRepository::new();
        let before = store.len();
        for input in [
            NewSnowpark::new("", "B"),
            NewSnowpark::new("   ", "B"),
            NewSnowpark { name: Some("A".into()), ..NewSnowpark::default() },
        ] {
            let err = store.create(input).unwrap_err();
            assert!(matches!(err, ServiceError::InvalidInput(_)));
        }
        assert_eq!(store.len(), before);
    }

    #[test]
    fn colliding_id_source_reports_create_failed() -> Result<(), anyhow::Error> {
        fn fixed() -> Uuid {
            Uuid::from_u128(0x5eed)
        }
        let store = MemorySnowparkRepository::with_id_source(fixed);
        let first = store.create(NewSnowpark::new("A", "B"))?;
        let err = store.create(NewSnowpark::new("C", "D")).unwrap_err();
        assert!(matches!(err, ServiceError::CreateFailed(_)));
        assert_eq!(store.get(first.id)?.name, "A");
        assert_eq!(store.len(), 1);
        Ok(())
    }
}
