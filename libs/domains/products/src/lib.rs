//! Products Domain
//!
//! This module provides a complete domain implementation for managing
//! products backed by an in-memory store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use domain_products::{handlers, MemoryProductRepository, ProductService};
//!
//! // Create a repository and service
//! let repository = MemoryProductRepository::new();
//! let service = ProductService::new(repository);
//!
//! // Create the Axum router
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use memory::MemoryProductRepository;
pub use models::{CreateProduct, Product, UpdateProduct};
pub use repository::ProductRepository;
pub use service::ProductService;
