//! In-memory fighter store.
//!
//! Used as the test double for everything above the store layer, and as a
//! credential-free backend when running the client locally.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use roster_core::{Fighter, FighterId, FighterPatch, NewFighter};

use crate::traits::{FighterStore, StoreError, TransportError};

#[derive(Debug)]
struct Row {
    fighter: Fighter,
    /// Creation sequence; stands in for the `created_at` column.
    created: u64,
}

#[derive(Debug, Default)]
struct Table {
    rows: HashMap<FighterId, Row>,
    next_id: u64,
    fail_next: Option<TransportError>,
}

/// Mock fighter table held in memory.
///
/// Ids are increasing integers rendered as text, starting at `1`. Clones share
/// the same table.
#[derive(Clone, Debug, Default)]
pub struct InMemoryFighterStore {
    table: Arc<Mutex<Table>>,
}

impl InMemoryFighterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next operation fail with `error`, then behave normally.
    pub fn fail_next(&self, error: TransportError) {
        self.lock().fail_next = Some(error);
    }

    pub fn len(&self) -> usize {
        self.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Table> {
        // A poisoned lock only means another test thread panicked mid-call;
        // the table itself is still consistent.
        self.table
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Takes the table, failing first if a failure was injected.
    fn begin(&self) -> Result<MutexGuard<'_, Table>, StoreError> {
        let mut table = self.lock();
        match table.fail_next.take() {
            Some(error) => Err(StoreError::Transport(error)),
            None => Ok(table),
        }
    }
}

#[async_trait]
impl FighterStore for InMemoryFighterStore {
    async fn list(&self) -> Result<Vec<Fighter>, StoreError> {
        let table = self.begin()?;
        let mut rows: Vec<&Row> = table.rows.values().collect();
        rows.sort_by(|a, b| b.created.cmp(&a.created));
        Ok(rows.into_iter().map(|row| row.fighter.clone()).collect())
    }

    async fn get(&self, id: &FighterId) -> Result<Fighter, StoreError> {
        let table = self.begin()?;
        table
            .rows
            .get(id)
            .map(|row| row.fighter.clone())
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    async fn create(&self, fighter: NewFighter) -> Result<Fighter, StoreError> {
        let fighter = fighter.normalized()?;
        let mut table = self.begin()?;

        table.next_id += 1;
        let created = table.next_id;
        let id = FighterId::from(created);
        let fighter = Fighter::from_new(id.clone(), fighter);

        tracing::debug!(%id, name = %fighter.name, "memory store: created fighter");
        table.rows.insert(
            id,
            Row {
                fighter: fighter.clone(),
                created,
            },
        );
        Ok(fighter)
    }

    async fn update(&self, id: &FighterId, patch: FighterPatch) -> Result<(), StoreError> {
        let patch = patch.normalized()?;
        let mut table = self.begin()?;
        let row = table
            .rows
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        row.fighter = patch.apply_to(&row.fighter);
        tracing::debug!(%id, "memory store: updated fighter");
        Ok(())
    }

    async fn delete(&self, id: &FighterId) -> Result<(), StoreError> {
        let mut table = self.begin()?;
        match table.rows.remove(id) {
            Some(_) => {
                tracing::debug!(%id, "memory store: deleted fighter");
                Ok(())
            }
            None => Err(StoreError::NotFound(id.clone())),
        }
    }

    fn backend(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{FighterClass, Stat, StatKind, StatLine, ValidationError};

    fn draft(name: &str) -> NewFighter {
        NewFighter::new(name)
    }

    #[tokio::test]
    async fn create_assigns_ids_and_normalizes() {
        let store = InMemoryFighterStore::new();

        let created = store
            .create(draft(" Mystic Seer ").with_class(FighterClass::Mage))
            .await
            .unwrap();

        assert_eq!(created.id, FighterId::from("1"));
        assert_eq!(created.name, "Mystic Seer");
        assert_eq!(created.description, "A mighty mage ready for battle.");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let store = InMemoryFighterStore::new();
        let submitted = draft("Iron Shield")
            .with_class(FighterClass::Guardian)
            .with_stats(StatLine::from_values(9, 3, 4))
            .with_description("Holds the line.");

        let created = store.create(submitted.clone()).await.unwrap();
        let fetched = store.get(&created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.to_new(), submitted.normalized().unwrap());
    }

    #[tokio::test]
    async fn create_rejects_empty_name_without_touching_table() {
        let store = InMemoryFighterStore::new();
        let err = store.create(draft("")).await.unwrap_err();
        assert_eq!(err, StoreError::Validation(ValidationError::EmptyName));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let store = InMemoryFighterStore::new();
        for name in ["first", "second", "third"] {
            store.create(draft(name)).await.unwrap();
        }

        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["third", "second", "first"]);
    }

    #[tokio::test]
    async fn update_and_delete_missing_ids_are_not_found() {
        let store = InMemoryFighterStore::new();
        let missing = FighterId::from("404");

        let err = store
            .update(&missing, FighterPatch::new().with_name("x"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let err = store.delete(&missing).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound(missing));
    }

    #[tokio::test]
    async fn update_overwrites_only_patched_fields() {
        let store = InMemoryFighterStore::new();
        let created = store.create(draft("Shadow Blade")).await.unwrap();

        store
            .update(
                &created.id,
                FighterPatch::new().with_stat(StatKind::Speed, Stat::new(9)),
            )
            .await
            .unwrap();

        let fetched = store.get(&created.id).await.unwrap();
        assert_eq!(fetched.stats.speed.get(), 9);
        assert_eq!(fetched.name, "Shadow Blade");
        assert_eq!(fetched.description, created.description);
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let store = InMemoryFighterStore::new();
        let created = store.create(draft("Temp")).await.unwrap();
        store.delete(&created.id).await.unwrap();
        assert!(store.get(&created.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn injected_failure_surfaces_once() {
        let store = InMemoryFighterStore::new();
        store.fail_next(TransportError::Injected("offline".into()));

        let err = store.list().await.unwrap_err();
        assert!(matches!(err, StoreError::Transport(TransportError::Injected(_))));

        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn clones_share_table() {
        let store = InMemoryFighterStore::new();
        let other = store.clone();
        store.create(draft("Shared")).await.unwrap();
        assert_eq!(other.len(), 1);
        assert_eq!(other.backend(), "memory");
    }
}
