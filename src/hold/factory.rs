use std::sync::Arc;
use crate::books::repository::AvailableBookRepository;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;
use crate::hold::command::place_on_hold_cmd::PlaceOnHoldCommand;
use crate::patrons::factory::default_policies;
use crate::patrons::repository::PatronRepository;

pub fn create_place_on_hold_command(config: &Configuration, patron_repository: Arc<dyn PatronRepository>,
                                    book_repository: Arc<dyn AvailableBookRepository>,
                                    via: GatewayPublisherVia) -> PlaceOnHoldCommand {
    let publisher = Arc::from(create_publisher(via));
    PlaceOnHoldCommand::new(patron_repository, book_repository, default_policies(config), publisher)
}
