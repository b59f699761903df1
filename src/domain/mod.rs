//! Record types shown by the admin dashboard pages.

pub mod action;
pub mod chart;
pub mod insight;
pub mod message;
pub mod music;
pub mod post;
pub mod report;
pub mod types;
pub mod user;
