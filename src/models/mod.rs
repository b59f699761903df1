//! Configuration models shared across the admin service.

pub mod config;
