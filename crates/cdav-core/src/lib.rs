//! Naming utilities for CalDAV/CardDAV resources.
//!
//! Two leaf components live here: a random identifier generator for object
//! resource names and a slug resolver that turns display names into
//! collection path segments.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod util;
