//! # customer-api
//!
//! REST CRUD service over a single `customer` table.
//!
//! Each layer is a thin pass-through to the next. Handlers map HTTP verbs
//! to [`service::CustomerService`] calls, the service forwards to a
//! [`persistence::CustomerStore`], and the store issues one parameterized
//! SQL statement per operation.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── CustomerService (service/)
//!     │
//!     ├── CustomerStore (persistence/)
//!     │     ├── PostgresCustomerStore
//!     │     └── InMemoryCustomerStore
//!     │
//!     └── PostgreSQL `customer` table
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
