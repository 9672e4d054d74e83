use async_trait::async_trait;
use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogsPublisher writes every event as a structured log line
#[derive(Debug, Default)]
pub struct LogsPublisher {}

impl LogsPublisher {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl EventPublisher for LogsPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let json = serde_json::to_string(event)?;
        info!(event_id = event.event_id.as_str(), name = event.name.as_str(), "published event {}", json);
        Ok(())
    }
}
