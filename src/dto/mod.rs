//! DTO modules that bridge services with templates and APIs.

pub mod insights;
pub mod main;
pub mod messages;
pub mod music;
pub mod table;
