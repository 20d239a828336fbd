//! # Core Application Logic
//!
//! This module contains Estate's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (listings)   │
//!                    │  • FavoritesStore       │
//!                    │  • Router (back-stack)  │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No network. No UI.     │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`property`]: The `Property` listing value and its `PropertyId`
//! - [`catalog`]: The one static listing catalog, agents, categories
//! - [`favorites`]: The shared, observable favorites store
//! - [`route`]: Typed routes and their path-string form
//! - [`router`]: The back-stack and tab navigation
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer

pub mod action;
pub mod assets;
pub mod catalog;
pub mod config;
pub mod favorites;
pub mod notifications;
pub mod profile;
pub mod property;
pub mod route;
pub mod router;
pub mod state;
