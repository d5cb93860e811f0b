//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Opening transactions for multi-step writes and passing
//!   them to repositories

pub mod auth;
pub mod course;
pub mod group;
pub mod lesson;
pub mod progress;
pub mod seed;
