pub mod memory_patron_repository;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;
use crate::patrons::domain::{PatronHolds, PatronId, PatronInformation};

// PatronEntity is what the repository keeps for a patron: identity plus the holds active right now
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PatronEntity {
    pub information: PatronInformation,
    pub holds: PatronHolds,
}

impl PatronEntity {
    pub fn new(information: PatronInformation, holds: PatronHolds) -> Self {
        Self {
            information,
            holds,
        }
    }

    pub fn patron_id(&self) -> PatronId {
        self.information.patron_id()
    }
}

#[async_trait]
pub trait PatronRepository: Sync + Send {
    // create a patron, failing if the id is taken
    async fn create(&self, entity: &PatronEntity) -> LibraryResult<()>;

    // replace the stored holds and classification
    async fn update(&self, entity: &PatronEntity) -> LibraryResult<()>;

    async fn get(&self, id: &PatronId) -> LibraryResult<PatronEntity>;
}
