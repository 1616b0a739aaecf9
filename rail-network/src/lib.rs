//! National rail network journey planner and fare calculator.
//!
//! Stations are loaded into an immutable [`network::RailNetwork`], which
//! plans journeys through regional hubs and prices them leg by leg.

pub mod config;
pub mod domain;
pub mod geo;
pub mod loader;
pub mod network;
pub mod plot;
pub mod web;
