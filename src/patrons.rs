pub mod domain;
pub mod events;
pub mod factory;
pub mod policy;
pub mod repository;
