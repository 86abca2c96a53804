//! Port traits the domain is driven through.

pub mod config_port;
pub mod record_provider;
