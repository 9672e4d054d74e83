use std::collections::HashMap;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::books::domain::{BookId, LibraryBranchId};
use crate::core::events::DomainEvent;
use crate::core::library::BookType;
use crate::patrons::domain::{HoldDuration, PatronId};
use crate::patrons::policy::RejectionReason;
use crate::utils::date::serializer;

const PATRON_GROUP: &str = "patron";

// BookPlacedOnHold records an approved hold
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookPlacedOnHold {
    event_id: Uuid,
    #[serde(with = "serializer")]
    when: NaiveDateTime,
    patron_id: PatronId,
    book_id: BookId,
    book_type: BookType,
    library_branch_id: LibraryBranchId,
    hold_duration: HoldDuration,
}

impl BookPlacedOnHold {
    pub fn now(patron_id: PatronId, book_id: BookId, book_type: BookType,
               library_branch_id: LibraryBranchId, hold_duration: HoldDuration) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            when: Utc::now().naive_utc(),
            patron_id,
            book_id,
            book_type,
            library_branch_id,
            hold_duration,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn when(&self) -> NaiveDateTime {
        self.when
    }

    pub fn patron_id(&self) -> PatronId {
        self.patron_id
    }

    pub fn book_id(&self) -> BookId {
        self.book_id
    }

    pub fn book_type(&self) -> BookType {
        self.book_type
    }

    pub fn library_branch_id(&self) -> LibraryBranchId {
        self.library_branch_id
    }

    pub fn hold_duration(&self) -> HoldDuration {
        self.hold_duration
    }
}

// BookHoldFailed records a hold refused by the first rejecting policy
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookHoldFailed {
    event_id: Uuid,
    #[serde(with = "serializer")]
    when: NaiveDateTime,
    patron_id: PatronId,
    reason: RejectionReason,
    book_id: BookId,
    library_branch_id: LibraryBranchId,
    hold_duration: HoldDuration,
}

impl BookHoldFailed {
    pub fn now(patron_id: PatronId, reason: RejectionReason, book_id: BookId,
               library_branch_id: LibraryBranchId, hold_duration: HoldDuration) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            when: Utc::now().naive_utc(),
            patron_id,
            reason,
            book_id,
            library_branch_id,
            hold_duration,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn when(&self) -> NaiveDateTime {
        self.when
    }

    pub fn patron_id(&self) -> PatronId {
        self.patron_id
    }

    pub fn reason(&self) -> RejectionReason {
        self.reason
    }

    pub fn book_id(&self) -> BookId {
        self.book_id
    }

    pub fn library_branch_id(&self) -> LibraryBranchId {
        self.library_branch_id
    }

    pub fn hold_duration(&self) -> HoldDuration {
        self.hold_duration
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PatronEvent {
    BookPlacedOnHold(BookPlacedOnHold),
    BookHoldFailed(BookHoldFailed),
}

impl PatronEvent {
    pub fn name(&self) -> &'static str {
        match self {
            PatronEvent::BookPlacedOnHold(_) => "book_placed_on_hold",
            PatronEvent::BookHoldFailed(_) => "book_hold_failed",
        }
    }

    pub fn patron_id(&self) -> PatronId {
        match self {
            PatronEvent::BookPlacedOnHold(e) => e.patron_id(),
            PatronEvent::BookHoldFailed(e) => e.patron_id(),
        }
    }

    pub fn event_id(&self) -> Uuid {
        match self {
            PatronEvent::BookPlacedOnHold(e) => e.event_id(),
            PatronEvent::BookHoldFailed(e) => e.event_id(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PatronEvent::BookPlacedOnHold(_))
    }

    pub fn to_domain_event(&self) -> serde_json::Result<DomainEvent> {
        let key = self.patron_id().to_string();
        let event_id = self.event_id().to_string();
        let domain_event = match self {
            PatronEvent::BookPlacedOnHold(e) => {
                let metadata = HashMap::from([("book_id".to_string(), e.book_id().to_string())]);
                DomainEvent::added(self.name(), PATRON_GROUP, key.as_str(), &metadata, self)
            }
            PatronEvent::BookHoldFailed(e) => {
                let metadata = HashMap::from([
                    ("book_id".to_string(), e.book_id().to_string()),
                    ("reason".to_string(), e.reason().to_string()),
                ]);
                DomainEvent::rejected(self.name(), PATRON_GROUP, key.as_str(), &metadata, self)
            }
        }?;
        Ok(domain_event.with_event_id(event_id.as_str()))
    }
}

impl From<Result<BookPlacedOnHold, BookHoldFailed>> for PatronEvent {
    fn from(res: Result<BookPlacedOnHold, BookHoldFailed>) -> Self {
        match res {
            Ok(placed) => PatronEvent::BookPlacedOnHold(placed),
            Err(failed) => PatronEvent::BookHoldFailed(failed),
        }
    }
}
