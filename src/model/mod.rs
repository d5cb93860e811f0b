//! JSON data transfer objects exchanged with HTTP clients.
//!
//! These types define the wire format of the API. Server-side domain models convert
//! into them at the controller boundary via `into_dto()`.

pub mod api;
pub mod auth;
pub mod course;
pub mod group;
pub mod lesson;
pub mod progress;
pub mod user;
