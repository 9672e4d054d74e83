use std::collections::HashMap;
use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::core::library::{LibraryError, LibraryResult};
use crate::patrons::domain::PatronId;
use crate::patrons::repository::{PatronEntity, PatronRepository};

#[derive(Debug, Default)]
pub struct MemoryPatronRepository {
    patrons: RwLock<HashMap<PatronId, PatronEntity>>,
}

impl MemoryPatronRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PatronRepository for MemoryPatronRepository {
    async fn create(&self, entity: &PatronEntity) -> LibraryResult<()> {
        let mut patrons = self.patrons.write().await;
        if patrons.contains_key(&entity.patron_id()) {
            return Err(LibraryError::duplicate_key(
                format!("patron with id {} already exists", entity.patron_id()).as_str()));
        }
        patrons.insert(entity.patron_id(), entity.clone());
        Ok(())
    }

    async fn update(&self, entity: &PatronEntity) -> LibraryResult<()> {
        let mut patrons = self.patrons.write().await;
        match patrons.get_mut(&entity.patron_id()) {
            Some(existing) => {
                *existing = entity.clone();
                Ok(())
            }
            None => Err(LibraryError::not_found(
                format!("patron with id {} not found", entity.patron_id()).as_str())),
        }
    }

    async fn get(&self, id: &PatronId) -> LibraryResult<PatronEntity> {
        self.patrons.read().await.get(id).cloned().ok_or_else(|| {
            LibraryError::not_found(format!("patron with id {} not found", id).as_str())
        })
    }
}
