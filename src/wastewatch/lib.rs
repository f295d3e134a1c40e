//! # Wastewatch Architecture
//!
//! Wastewatch keeps a local record of citizen-submitted service reports (missed
//! pickups, overflowing bins, ...). It is a library first; the `wastewatch` binary is
//! one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs)                                              │
//! │  - Parses arguments, asks for confirmation, prints results  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) + Commands (commands/*.rs)                    │
//! │  - Input validation, user-facing messages                   │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (repository.rs, lookup.rs, session.rs)                │
//! │  - Id generation and uniqueness                             │
//! │  - Create / delete / clear / list, lookup, last created     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - ReportStore over a StorageBackend (FsBackend, MemBackend)│
//! │  - Tolerates missing and corrupt data                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! - Report ids are pairwise distinct within the collection.
//! - The last-created pointer never resolves to a report that no longer exists.
//! - Storage problems never fail a read, and never abort a mutation; failed writes
//!   are reported back alongside the result.
//!
//! Execution is single-threaded and synchronous. Each operation reloads the
//! collection from storage, so there is no cache to go stale.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: one module per user action
//! - [`repository`]: CRUD and id generation
//! - [`lookup`]: case-insensitive lookup by id
//! - [`session`]: the last-created pointer
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: `Report`, `NewReport`, `ReportStatus`
//! - [`tracking`]: simulated pickup progress
//! - [`config`]: configuration file
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod repository;
pub mod session;
pub mod store;
pub mod tracking;
