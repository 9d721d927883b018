//! Global cross-model search for back-office datasets
//!
//! One free-text query fans out concurrently across every registered entity
//! (products, orders, tickets, articles, …), each with its own searchable
//! columns, and comes back as a single grouped, time-bounded response: the
//! global deadline is shared by every entity, slow or failing entities are
//! dropped rather than awaited, and the result says whether it is partial.
//!
//! The [`search`] module is the engine; [`api`] exposes it over HTTP;
//! [`fixtures`] ships a demo dataset for the bundled server binary.

pub mod api;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod search;

pub use config::Config;
pub use error::{AppError, Result};
