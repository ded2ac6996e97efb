//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation, including API endpoints,
//! business logic, and data access. The backend uses Axum as the web framework and
//! SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation, reference and uniqueness rules, logging
//! - **Data Layer** (`data/`) - Database operations and the deletion strategies
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Tracing, database connection and migrations, CORS
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** extracts path, query and body, calls service
//! 3. **Service** validates the request, orchestrates data operations
//! 4. **Data** queries database and returns entity models
//! 5. **Controller** converts models to DTOs, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
