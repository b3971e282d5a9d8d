//! Drawer Configuration
//!
//! Configuration for slide-out drawer components: sizing, animation, drag,
//! and dismissal behavior. The config is an immutable value object built
//! through [`DrawerConfigBuilder`]; the rendering widget only reads it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = DrawerConfig::builder()
//!     .side(DrawerSide::Left)
//!     .backdrop_opacity(0.6)
//!     .build()?;
//!
//! let width = config.resolve_width(viewport_width);
//! ```
//!
//! Derived copies go back through the builder, so every copy is re-validated:
//!
//! ```rust,ignore
//! let narrow = config.to_builder().max_drawer_extent(280.0).build()?;
//! ```

pub mod builder;
pub mod config;
pub mod errors;
pub mod sizing;

pub use builder::*;
pub use config::*;
pub use errors::*;
pub use sizing::*;
