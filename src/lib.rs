//! DuitKu application core
//!
//! Facade crate for the DuitKu front-end workspace. Shells depend on this
//! crate and reach the design system and screens through [`app_ui`], the
//! collaborator interfaces and branding through [`app_core`], the animation
//! primitives through [`animation`], and the host glue through
//! [`app_platform`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use animation;
pub use app_core;
pub use app_platform;
pub use app_ui;
