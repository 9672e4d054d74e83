use std::sync::Arc;
use crate::core::domain::Configuration;
use crate::patrons::policy::PlacingOnHoldPolicies;
use crate::patrons::policy::rules::{MaximumHoldsPolicy, OpenEndedHoldPolicy, RestrictedBookPolicy};
use crate::patrons::repository::memory_patron_repository::MemoryPatronRepository;
use crate::patrons::repository::PatronRepository;

pub fn create_patron_repository() -> Box<dyn PatronRepository> {
    Box::new(MemoryPatronRepository::new())
}

pub fn default_policies(config: &Configuration) -> PlacingOnHoldPolicies {
    vec![
        Arc::new(RestrictedBookPolicy),
        Arc::new(MaximumHoldsPolicy::new(config.max_holds)),
        Arc::new(OpenEndedHoldPolicy),
    ]
}
