//! HTTP handlers.
//!
//! Controllers authenticate the caller where required, convert DTOs to params, call
//! the service layer and convert the resulting domain models back to DTOs.

pub mod auth;
pub mod course;
pub mod group;
pub mod lesson;
pub mod progress;
pub mod user;
