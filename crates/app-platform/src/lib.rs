//! Platform shell for DuitKu
//!
//! The process-level pieces that host the UI crates: tracing bootstrap,
//! color scheme detection from the environment, and the stack-backed
//! navigator the screens drive.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bootstrap;
pub mod navigator;
pub mod scheme;

pub use bootstrap::init_tracing;
pub use navigator::StackNavigator;
pub use scheme::detect_color_scheme;
