pub mod model;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use chrono::{Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::books::domain::{BookId, LibraryBranchId};
use crate::core::library::{LibraryError, LibraryResult, PatronType};
use crate::utils::date::{option_serializer, serializer};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub struct PatronId(Uuid);

impl PatronId {
    pub fn new() -> Self {
        PatronId(Uuid::new_v4())
    }
}

impl Default for PatronId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PatronId {
    fn from(id: Uuid) -> Self {
        PatronId(id)
    }
}

impl FromStr for PatronId {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PatronId(Uuid::parse_str(s)?))
    }
}

impl Display for PatronId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// PatronInformation is the identity and classification loaded with the patron record
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct PatronInformation {
    patron_id: PatronId,
    patron_type: PatronType,
}

impl PatronInformation {
    pub fn new(patron_id: PatronId, patron_type: PatronType) -> Self {
        Self {
            patron_id,
            patron_type,
        }
    }

    pub fn regular(patron_id: PatronId) -> Self {
        Self::new(patron_id, PatronType::Regular)
    }

    pub fn researcher(patron_id: PatronId) -> Self {
        Self::new(patron_id, PatronType::Researcher)
    }

    pub fn patron_id(&self) -> PatronId {
        self.patron_id
    }

    pub fn patron_type(&self) -> PatronType {
        self.patron_type
    }

    pub fn is_regular(&self) -> bool {
        self.patron_type == PatronType::Regular
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub struct Hold {
    pub book_id: BookId,
    pub library_branch_id: LibraryBranchId,
}

impl Hold {
    pub fn new(book_id: BookId, library_branch_id: LibraryBranchId) -> Self {
        Self {
            book_id,
            library_branch_id,
        }
    }
}

// PatronHolds are the holds active at the moment a decision is requested
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct PatronHolds {
    holds: Vec<Hold>,
}

impl PatronHolds {
    pub fn new(holds: Vec<Hold>) -> Self {
        Self { holds }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.holds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holds.is_empty()
    }
}

/// Requested hold period. `till` is `None` for an open-ended hold.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct HoldDuration {
    #[serde(with = "serializer")]
    from: NaiveDateTime,
    #[serde(with = "option_serializer")]
    till: Option<NaiveDateTime>,
}

impl HoldDuration {
    pub fn open_ended() -> Self {
        Self::open_ended_from(Utc::now().naive_utc())
    }

    pub fn open_ended_from(from: NaiveDateTime) -> Self {
        Self { from, till: None }
    }

    pub fn close_ended(days: i64) -> LibraryResult<Self> {
        Self::close_ended_from(Utc::now().naive_utc(), days)
    }

    pub fn close_ended_from(from: NaiveDateTime, days: i64) -> LibraryResult<Self> {
        if days <= 0 {
            return Err(LibraryError::validation(
                format!("hold duration must be positive, got {} days", days).as_str(), Some("400".to_string())));
        }
        let till = Duration::try_days(days)
            .and_then(|period| from.checked_add_signed(period))
            .ok_or_else(|| LibraryError::validation(
                format!("hold duration of {} days is out of range", days).as_str(), Some("400".to_string())))?;
        Ok(Self { from, till: Some(till) })
    }

    pub fn from(&self) -> NaiveDateTime {
        self.from
    }

    pub fn till(&self) -> Option<NaiveDateTime> {
        self.till
    }

    pub fn is_open_ended(&self) -> bool {
        self.till.is_none()
    }
}
