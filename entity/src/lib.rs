//! SeaORM entity models for the course platform schema.
//!
//! One module per table. Enum columns are stored as strings and mapped with
//! `DeriveActiveEnum` so the rest of the application works with typed values.

pub mod prelude;

pub mod course;
pub mod enrollment;
pub mod group_member;
pub mod lesson;
pub mod progress;
pub mod study_group;
pub mod user;
