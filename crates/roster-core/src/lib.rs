// ABOUTME: Core library for roster, containing the shared Person domain types.
// ABOUTME: This crate defines the data model used by the store and server crates.

pub mod person;

pub use person::{NewPerson, Person};
