//! Domain layer for the TTSS client
//!
//! Plain records describing what the tracking service knows about the
//! network: stops and their platforms, routes, trips, vehicles, passages and
//! drawable paths. Every record is built fresh from a single response and
//! handed to the caller; nothing here performs I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
