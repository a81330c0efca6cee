//! Prelude module for convenient imports.
//!
//! ```rust
//! use bob::prelude::*;
//!
//! let numbers = Builder::new(|| 1u32);
//! assert_eq!(numbers.build_with([|n: u32| n + 1]), 2);
//! ```

pub use crate::builder::Builder;
pub use crate::config::BuilderConfig;
pub use crate::errors::{BobError, BobResult};
