//! Types and rules shared by the sponsor calendar frontend.
//!
//! Everything here is free of browser APIs so it can be unit tested natively.

pub mod api;
pub mod calendar;
pub mod config;
pub mod detail;
pub mod models;
pub mod permissions;
pub mod search;

pub use api::{ApiError, Endpoint};
pub use calendar::{RequestGeneration, RequestTicket, VisibleRange};
pub use config::{AppConfig, ConfigError};
pub use models::{CalendarEvent, EventProps, NewSponsor, Sponsor};
pub use permissions::Capability;
pub use search::SearchResults;
