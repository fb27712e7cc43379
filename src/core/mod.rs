//! # Core Application Logic
//!
//! The conversation state machine and everything it needs. Knows nothing
//! about terminals or widgets.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (state)          │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • perform() (effects)  │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │ Controller │      │    API     │
//!     │  Adapter   │      │ (async,    │      │  (reqwest) │
//!     │ (ratatui)  │      │  --check)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`conversation`]: `Message`, `Role`, the append-only `Conversation`
//! - [`language`]: `LanguageCatalog` and the code → label table
//! - [`state`]: the `App` struct
//! - [`action`]: `Action`, `Effect`, `update()`, `perform()`
//! - [`controller`]: async driver that runs actions to completion
//! - [`config`]: layered configuration

pub mod action;
pub mod config;
pub mod controller;
pub mod conversation;
pub mod language;
pub mod state;
