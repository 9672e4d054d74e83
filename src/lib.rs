//! Hold placement for the library lending context.
//!
//! [`patrons::domain::model::Patron`] decides whether an available book may be
//! placed on hold by running an ordered chain of placing-on-hold policies. The
//! first rejecting policy wins and later policies are not evaluated. The outcome
//! is one of two events, `BookPlacedOnHold` or `BookHoldFailed`; storing and
//! dispatching it is up to the caller.

pub mod books;
pub mod core;
pub mod gateway;
pub mod hold;
pub mod patrons;
pub mod utils;
