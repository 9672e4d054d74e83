use crate::books::domain::AvailableBook;
use crate::patrons::domain::HoldDuration;
use crate::patrons::domain::model::Patron;
use crate::patrons::policy::{Allowance, PlacingOnHoldPolicy, PolicyDecision, Rejection, RejectionReason};

// Regular patrons cannot hold restricted books.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestrictedBookPolicy;

impl PlacingOnHoldPolicy for RestrictedBookPolicy {
    fn evaluate(&self, book: &AvailableBook, patron: &Patron, _duration: &HoldDuration) -> PolicyDecision {
        if book.is_restricted() && patron.is_regular() {
            return Err(Rejection::with_reason(RejectionReason::RestrictedBook));
        }
        Ok(Allowance)
    }

    fn name(&self) -> &str {
        "restricted_book"
    }
}

// Regular patrons are capped at max_holds concurrent holds.
#[derive(Debug, Clone, Copy)]
pub struct MaximumHoldsPolicy {
    max_holds: usize,
}

impl MaximumHoldsPolicy {
    pub fn new(max_holds: usize) -> Self {
        Self { max_holds }
    }
}

impl PlacingOnHoldPolicy for MaximumHoldsPolicy {
    fn evaluate(&self, _book: &AvailableBook, patron: &Patron, _duration: &HoldDuration) -> PolicyDecision {
        if patron.is_regular() && patron.number_of_holds() >= self.max_holds {
            return Err(Rejection::with_reason(RejectionReason::TooManyHolds));
        }
        Ok(Allowance)
    }

    fn name(&self) -> &str {
        "maximum_holds"
    }
}

// Only researchers may place open-ended holds.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenEndedHoldPolicy;

impl PlacingOnHoldPolicy for OpenEndedHoldPolicy {
    fn evaluate(&self, _book: &AvailableBook, patron: &Patron, duration: &HoldDuration) -> PolicyDecision {
        if duration.is_open_ended() && patron.is_regular() {
            return Err(Rejection::with_reason(RejectionReason::OpenEndedHold));
        }
        Ok(Allowance)
    }

    fn name(&self) -> &str {
        "open_ended_hold"
    }
}
