//! gradebook-core — Student roster model, persistence, and ranking.
//!
//! This crate holds the roster store and its flat-file serializer. The
//! `gradebook` CLI is a thin presentation layer over it: load once, call
//! store operations, save after every successful mutation.

pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod serializer;
pub mod statistics;
pub mod store;

pub use error::{Result, RosterError};
pub use model::{Grade, Record, SortOrder};
pub use serializer::{LoadOutcome, LoadStatus};
pub use store::Roster;
