pub mod command;
pub mod factory;
