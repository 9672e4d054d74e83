use std::error::Error;
use std::sync::Arc;
use lending::books::domain::{AvailableBook, BookId, LibraryBranchId};
use lending::books::factory::create_book_repository;
use lending::books::repository::AvailableBookRepository;
use lending::core::command::Command;
use lending::core::domain::Configuration;
use lending::core::library::{BookType, PatronType};
use lending::gateway::GatewayPublisherVia;
use lending::hold::command::place_on_hold_cmd::PlaceOnHoldCommandRequest;
use lending::hold::factory::create_place_on_hold_command;
use lending::patrons::domain::{PatronHolds, PatronId, PatronInformation};
use lending::patrons::factory::create_patron_repository;
use lending::patrons::repository::{PatronEntity, PatronRepository};
use lending::utils::logs::setup_tracing;

// Places one hold against freshly seeded in-memory stores and prints the outcome.
// LENDING_CONFIG, PATRON_TYPE, BOOK_TYPE and HOLD_DAYS tune the run.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = match std::env::var("LENDING_CONFIG") {
        Ok(json) => Configuration::from_json(json.as_str())?,
        Err(_) => Configuration::new(),
    };
    let patron_type = PatronType::from(std::env::var("PATRON_TYPE").unwrap_or_default());
    let book_type = BookType::from(std::env::var("BOOK_TYPE").unwrap_or_default());
    let days = match std::env::var("HOLD_DAYS") {
        Ok(days) if days == "open" => None,
        Ok(days) => Some(days.parse::<i64>()?),
        Err(_) => Some(config.hold_days),
    };

    let patrons: Arc<dyn PatronRepository> = Arc::from(create_patron_repository());
    let books: Arc<dyn AvailableBookRepository> = Arc::from(create_book_repository());
    let patron = PatronInformation::new(PatronId::new(), patron_type);
    patrons.create(&PatronEntity::new(patron, PatronHolds::empty())).await?;
    let book = AvailableBook::new(BookId::new(), book_type, LibraryBranchId::new());
    books.save(&book).await?;

    let command = create_place_on_hold_command(&config, patrons, books, GatewayPublisherVia::Logs);
    let res = command.execute(PlaceOnHoldCommandRequest::new(
        patron.patron_id().to_string(), book.book_id().to_string(), days)).await
        .map_err(|err| format!("{:?}", err))?;
    println!("{}", serde_json::to_string_pretty(res.event())?);
    Ok(())
}
