pub mod action;
pub mod person;
