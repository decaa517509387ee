#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Interaction state, view derivations, and the per-session update loop
//! for the rate map dashboard.
//!
//! [`interaction::InteractionState`] is the only mutable state. Every view
//! in [`views`] is a pure function of it and the read-only
//! [`rate_map_dataset::DatasetStore`]. [`session`] serializes gestures and
//! animation ticks into one pipeline per session and publishes a fresh
//! [`rate_map_dashboard_models::ViewSnapshot`] after each change.

pub mod clock;
pub mod interaction;
pub mod selection;
pub mod session;
pub mod views;

#[cfg(test)]
mod fixtures;

pub use interaction::InteractionState;
pub use session::{
    DEFAULT_IDLE_TIMEOUT, Session, SessionError, SessionHandle, spawn_session,
};
pub use views::derive_view;
