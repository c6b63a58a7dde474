//! Domain models and request/response types

pub mod analytics;
pub mod enums;
pub mod equipment;
pub mod ticket;
pub mod user;
