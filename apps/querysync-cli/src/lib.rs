//! querysync-cli
//!
//! Replays scripted sidebar interactions against the synchronizer without a
//! browser. See `scenario` for the input format.

pub mod logging;
pub mod scenario;
