//! Per-builder configuration.
//!
//! Built with `typed-builder`; every field has a default so
//! `BuilderConfig::builder().build()` is always valid.

use typed_builder::TypedBuilder;

/// Settings carried by a [`Builder`](crate::Builder) and inherited by every
/// builder derived from it.
///
/// # Examples
///
/// ```
/// use bob::BuilderConfig;
///
/// // Defaults
/// let config = BuilderConfig::builder().build();
/// assert_eq!(config.label, "builder");
/// assert_eq!(config.max_count, None);
///
/// // Customised
/// let config = BuilderConfig::builder()
///     .label("users")
///     .max_count(100)
///     .build();
/// assert_eq!(config.max_count, Some(100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
#[builder(doc)]
pub struct BuilderConfig {
    /// Name used to tag log lines emitted by the builder
    #[builder(default = String::from("builder"), setter(into))]
    pub label: String,

    /// Upper bound enforced by `checked_build_many*`
    #[builder(default, setter(strip_option))]
    pub max_count: Option<usize>,
}

impl BuilderConfig {
    /// Default configuration with a custom log label.
    pub fn labelled<S: Into<String>>(label: S) -> Self {
        Self::builder().label(label).build()
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
