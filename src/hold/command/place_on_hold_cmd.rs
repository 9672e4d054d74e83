use std::str::FromStr;
use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::books::domain::BookId;
use crate::books::repository::AvailableBookRepository;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;
use crate::patrons::domain::{HoldDuration, PatronId};
use crate::patrons::domain::model::Patron;
use crate::patrons::events::PatronEvent;
use crate::patrons::policy::PlacingOnHoldPolicies;
use crate::patrons::repository::PatronRepository;

// PlaceOnHoldCommand loads the patron and book, asks the patron aggregate for a decision
// and hands the resulting event to the publisher. Holds are never written here.
pub struct PlaceOnHoldCommand {
    patron_repository: Arc<dyn PatronRepository>,
    book_repository: Arc<dyn AvailableBookRepository>,
    placing_on_hold_policies: PlacingOnHoldPolicies,
    events_publisher: Arc<dyn EventPublisher>,
}

impl PlaceOnHoldCommand {
    pub fn new(patron_repository: Arc<dyn PatronRepository>, book_repository: Arc<dyn AvailableBookRepository>,
               placing_on_hold_policies: PlacingOnHoldPolicies, events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            patron_repository,
            book_repository,
            placing_on_hold_policies,
            events_publisher,
        }
    }

    async fn place_on_hold(&self, req: &PlaceOnHoldCommandRequest) -> LibraryResult<PatronEvent> {
        let patron_id = PatronId::from_str(req.patron_id.as_str())?;
        let book_id = BookId::from_str(req.book_id.as_str())?;
        let duration = match req.days {
            Some(days) => HoldDuration::close_ended(days)?,
            None => HoldDuration::open_ended(),
        };
        let entity = self.patron_repository.get(&patron_id).await?;
        let book = self.book_repository.find_available(&book_id).await?;
        let patron = Patron::new(entity.information, self.placing_on_hold_policies.clone(), entity.holds);
        let event = PatronEvent::from(patron.place_on_hold(&book, duration));
        self.events_publisher.publish(&event.to_domain_event()?).await?;
        info!("patron {} hold on book {}: {}", patron_id, book_id, event.name());
        Ok(event)
    }
}

#[derive(Debug, Deserialize)]
pub struct PlaceOnHoldCommandRequest {
    patron_id: String,
    book_id: String,
    days: Option<i64>,
}

impl PlaceOnHoldCommandRequest {
    pub fn new(patron_id: String, book_id: String, days: Option<i64>) -> Self {
        Self {
            patron_id,
            book_id,
            days,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlaceOnHoldCommandResponse {
    event: PatronEvent,
}

impl PlaceOnHoldCommandResponse {
    pub fn new(event: PatronEvent) -> Self {
        Self {
            event,
        }
    }

    pub fn event(&self) -> &PatronEvent {
        &self.event
    }
}

#[async_trait]
impl Command<PlaceOnHoldCommandRequest, PlaceOnHoldCommandResponse> for PlaceOnHoldCommand {
    async fn execute(&self, req: PlaceOnHoldCommandRequest) -> Result<PlaceOnHoldCommandResponse, CommandError> {
        self.place_on_hold(&req)
            .await.map_err(CommandError::from).map(PlaceOnHoldCommandResponse::new)
    }
}
