//! Tasklane: a personal task tracker.
//!
//! This crate provides the task lifecycle (create, list, fetch, update,
//! toggle-complete, delete), a REST API over it, and the board session a
//! UI drives: an ordered in-memory task collection with a pure list-view
//! derivation (search, status filter, stable incomplete-first ordering,
//! drag reorder).
//!
//! # Architecture
//!
//! Tasklane follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`task`]: Task records, persistence ports and adapters, lifecycle service
//! - [`board`]: Client-session store and list-view derivation
//! - [`api`]: Axum REST surface mounted under `/api/tasks`

pub mod api;
pub mod board;
pub mod task;
