//! Headless core of the Compass college-counseling product.
//!
//! Everything visual (routing, forms, chat) lives in the UI shell; everything
//! durable (accounts, profiles, generated recommendations) lives behind the
//! backend API. This crate holds the logic in between: the intake section
//! catalog, profile-completion evaluation, recommendation categorization and
//! fit scoring, a TTL cache in front of profile fetches, and the navigation
//! gate that unlocks downstream features.

pub mod backend;
pub mod cache;
pub mod config;
pub mod errors;
pub mod gate;
pub mod profile;
pub mod recommendations;
pub mod state;
pub mod telemetry;
