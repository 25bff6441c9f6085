//! Orrery backend core modules.
//!
//! This crate contains the server-side functionality for the Orrery planetarium
//! booking backend: configuration, database repositories, catalog queries with
//! per-read seat availability, and the atomic seat-reservation service. HTTP
//! routing and authentication live in a separate presentation layer that calls
//! into the services defined here.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
