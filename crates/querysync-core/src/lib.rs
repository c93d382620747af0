#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! querysync-core
//!
//! Shared vocabulary for the filter/URL synchronization workspace: the
//! in-memory sidebar model, the collaborator traits the synchronizer calls
//! into, the error type and the figment-backed configuration.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;
