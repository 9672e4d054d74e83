//! The placing-on-hold policy capability.
//!
//! A policy looks at the book, the patron and the requested duration and either
//! allows the hold or rejects it with a [`Rejection`]. Policies are read-only and
//! shared between patrons, so they must not keep mutable state.

pub mod rules;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::books::domain::AvailableBook;
use crate::patrons::domain::HoldDuration;
use crate::patrons::domain::model::Patron;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum RejectionReason {
    RestrictedBook,
    TooManyHolds,
    OpenEndedHold,
}

impl Display for RejectionReason {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RejectionReason::RestrictedBook => write!(f, "RestrictedBook"),
            RejectionReason::TooManyHolds => write!(f, "TooManyHolds"),
            RejectionReason::OpenEndedHold => write!(f, "OpenEndedHold"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct Rejection {
    reason: RejectionReason,
}

impl Rejection {
    pub fn with_reason(reason: RejectionReason) -> Self {
        Self { reason }
    }

    pub fn reason(&self) -> RejectionReason {
        self.reason
    }
}

impl Display for Rejection {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "hold rejected: {}", self.reason)
    }
}

/// Marker for a policy that has nothing against the hold.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Allowance;

pub type PolicyDecision = Result<Allowance, Rejection>;

pub trait PlacingOnHoldPolicy: Send + Sync {
    fn evaluate(&self, book: &AvailableBook, patron: &Patron, duration: &HoldDuration) -> PolicyDecision;

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> PlacingOnHoldPolicy for F
    where F: Fn(&AvailableBook, &Patron, &HoldDuration) -> PolicyDecision + Send + Sync {
    fn evaluate(&self, book: &AvailableBook, patron: &Patron, duration: &HoldDuration) -> PolicyDecision {
        self(book, patron, duration)
    }
}

/// Ordered policy chain; order decides which rejection is surfaced.
pub type PlacingOnHoldPolicies = Vec<Arc<dyn PlacingOnHoldPolicy>>;
