//! Animation primitives for DuitKu
//!
//! Tick-driven interpolators used by the screen drivers. Time flows in
//! milliseconds of simulated frame delta, so drivers behave identically
//! under a real frame loop and under deterministic tests.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cancel;
pub mod easing;
pub mod spring;
pub mod timing;

pub use cancel::CancellationToken;
pub use easing::Easing;
pub use spring::{Spring, SpringConfig};
pub use timing::Timing;
