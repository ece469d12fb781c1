//! EventRater library
//!
//! This library exposes the event store, proximity sorting, rating and
//! geocoding flows used by the `eventrater` binary, for testing and
//! library use.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod geo;
pub mod services;
pub mod storage;
pub mod validation;
pub mod views;
