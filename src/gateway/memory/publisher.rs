use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps published events in order so callers can inspect them
#[derive(Debug, Default)]
pub struct MemoryPublisher {
    events: RwLock<Vec<DomainEvent>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn events(&self) -> Vec<DomainEvent> {
        self.events.read().await.clone()
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let mut events = self.events.write().await;
        if events.iter().any(|e| e.event_id == event.event_id) {
            return Err(LibraryError::duplicate_key(
                format!("event {} already published", event.event_id).as_str()));
        }
        events.push(event.clone());
        Ok(())
    }
}
