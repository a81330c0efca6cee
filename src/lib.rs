//! # Bob
//!
//! Test fixture builders for arbitrary types.
//!
//! A [`Builder`] wraps a factory that produces a fresh default instance of `T`
//! on every call. Callers build one or many instances, optionally transformed
//! by override functions applied from left to right, and can derive new
//! builders that bake a fixed set of overrides into the default.
//!
//! ## Features
//!
//! - **Ordered overrides**: `build_with` applies every override in argument order
//! - **Bulk construction**: `build_many_with` passes the zero-based index to each override
//! - **Derived builders**: `override_with` layers overrides without touching the parent
//! - **Fallible overrides**: `try_*` variants stop at the first error and return it unchanged
//! - **Shareable**: builders are `Clone + Send + Sync`
//!
//! ## Quick Start
//!
//! ```
//! use bob::Builder;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! fn name_is_bob(mut u: User) -> User {
//!     u.name = "bob".into();
//!     u
//! }
//!
//! fn age_is_15(mut u: User) -> User {
//!     u.age = 15;
//!     u
//! }
//!
//! let users = Builder::new(|| User { name: "test".into(), age: 18 });
//!
//! assert_eq!(users.build(), User { name: "test".into(), age: 18 });
//! assert_eq!(users.build_with([name_is_bob, age_is_15]), User { name: "bob".into(), age: 15 });
//!
//! let many = users.build_many_with(3, [|i: usize, mut u: User| {
//!     u.name = format!("test-{i}");
//!     u
//! }]);
//! assert_eq!(many[2].name, "test-2");
//!
//! let bobs = users.override_with([name_is_bob]);
//! assert_eq!(bobs.build_with([age_is_15]), User { name: "bob".into(), age: 15 });
//! ```

pub mod builder;
pub mod config;
pub mod errors;
pub mod prelude;

pub use builder::Builder;
pub use config::BuilderConfig;
pub use errors::{BobError, BobResult};
