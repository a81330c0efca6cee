//! The fixture [`Builder`].
//!
//! A builder owns a single factory closure. Every operation calls that factory
//! afresh for each produced instance and threads the result through the
//! supplied overrides from left to right. Deriving a builder with
//! [`Builder::override_with`] wraps the parent in a new factory, so layers
//! compose in creation order: the parent's baked-in overrides run first, then
//! the child's, then whatever the call site passes.

use std::fmt;
use std::sync::Arc;

use log::{debug, trace};

use crate::config::BuilderConfig;
use crate::errors::{BobError, BobResult};

type Factory<T> = dyn Fn() -> T + Send + Sync;

/// Produces instances of `T` from a default factory.
///
/// Cloning is cheap: clones share the factory. A builder is never mutated
/// after construction.
pub struct Builder<T> {
    make_default: Arc<Factory<T>>,
    config: BuilderConfig,
    depth: usize,
}

impl<T> Clone for Builder<T> {
    fn clone(&self) -> Self {
        Self {
            make_default: Arc::clone(&self.make_default),
            config: self.config.clone(),
            depth: self.depth,
        }
    }
}

impl<T> fmt::Debug for Builder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("label", &self.config.label)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Builder<T> {
    /// Wraps `make_default` with the default [`BuilderConfig`].
    ///
    /// The factory is stored as-is and not called until something is built.
    pub fn new<F>(make_default: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::with_config(make_default, BuilderConfig::default())
    }

    pub fn with_config<F>(make_default: F, config: BuilderConfig) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            make_default: Arc::new(make_default),
            config,
            depth: 0,
        }
    }

    /// Uses `T::default` as the factory.
    ///
    /// # Example
    ///
    /// ```
    /// use bob::Builder;
    ///
    /// let strings = Builder::<String>::from_default();
    /// assert_eq!(strings.build(), "");
    /// ```
    pub fn from_default() -> Self
    where
        T: Default,
    {
        Self::new(T::default)
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Number of [`override_with`](Self::override_with) layers between this
    /// builder and the root it was derived from.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the factory output, untouched.
    pub fn build(&self) -> T {
        trace!("{}: build (depth {})", self.config.label, self.depth);
        (self.make_default)()
    }

    /// Calls the factory once and applies `overrides` in iteration order.
    ///
    /// Overrides of different types can be passed as an array of fn items or
    /// non-capturing closures, or boxed when they capture state.
    ///
    /// # Example
    ///
    /// ```
    /// use bob::Builder;
    ///
    /// let pairs = Builder::new(|| (0, 0));
    /// let pair = pairs.build_with([
    ///     |(_, b): (i32, i32)| (1, b),
    ///     |(a, _): (i32, i32)| (a, 2),
    /// ]);
    /// assert_eq!(pair, (1, 2));
    /// ```
    pub fn build_with<I>(&self, overrides: I) -> T
    where
        I: IntoIterator,
        I::Item: FnOnce(T) -> T,
    {
        overrides
            .into_iter()
            .fold(self.build(), |instance, apply| apply(instance))
    }

    /// Like [`build_with`](Self::build_with), for overrides returning `Result`.
    ///
    /// The first error is returned unchanged and the remaining overrides are
    /// skipped.
    pub fn try_build_with<I, E>(&self, overrides: I) -> Result<T, E>
    where
        I: IntoIterator,
        I::Item: FnOnce(T) -> Result<T, E>,
    {
        overrides
            .into_iter()
            .try_fold(self.build(), |instance, apply| apply(instance))
    }

    /// Builds `n` default instances.
    pub fn build_many(&self, n: usize) -> Vec<T> {
        self.build_many_with(n, std::iter::empty::<fn(usize, T) -> T>())
    }

    /// Builds `n` instances, calling the factory once per instance and then
    /// every override with the instance's zero-based index.
    ///
    /// # Example
    ///
    /// ```
    /// use bob::Builder;
    ///
    /// let ids = Builder::new(|| 100usize);
    /// assert_eq!(ids.build_many_with(3, [|i: usize, base: usize| base + i]), vec![100, 101, 102]);
    /// assert!(ids.build_many_with(0, [|i: usize, base: usize| base + i]).is_empty());
    /// ```
    pub fn build_many_with<I>(&self, n: usize, overrides: I) -> Vec<T>
    where
        I: IntoIterator,
        I::Item: Fn(usize, T) -> T,
    {
        let overrides: Vec<I::Item> = overrides.into_iter().collect();
        trace!(
            "{}: build_many n={} overrides={} (depth {})",
            self.config.label,
            n,
            overrides.len(),
            self.depth
        );

        (0..n)
            .map(|index| {
                overrides
                    .iter()
                    .fold((self.make_default)(), |instance, apply| {
                        apply(index, instance)
                    })
            })
            .collect()
    }

    /// Fallible counterpart of [`build_many_with`](Self::build_many_with).
    ///
    /// Stops at the first failing index; the factory is not called for later
    /// indices and no partial output is returned.
    pub fn try_build_many_with<I, E>(&self, n: usize, overrides: I) -> Result<Vec<T>, E>
    where
        I: IntoIterator,
        I::Item: Fn(usize, T) -> Result<T, E>,
    {
        let overrides: Vec<I::Item> = overrides.into_iter().collect();
        trace!(
            "{}: try_build_many n={} overrides={} (depth {})",
            self.config.label,
            n,
            overrides.len(),
            self.depth
        );

        (0..n)
            .map(|index| {
                overrides
                    .iter()
                    .try_fold((self.make_default)(), |instance, apply| {
                        apply(index, instance)
                    })
            })
            .collect()
    }

    /// [`build_many`](Self::build_many) guarded by [`BuilderConfig::max_count`].
    pub fn checked_build_many(&self, n: usize) -> BobResult<Vec<T>> {
        self.checked_build_many_with(n, std::iter::empty::<fn(usize, T) -> T>())
    }

    /// Rejects `n` above the configured `max_count` before calling the
    /// factory, otherwise behaves like [`build_many_with`](Self::build_many_with).
    ///
    /// # Example
    ///
    /// ```
    /// use bob::{BobError, Builder, BuilderConfig};
    ///
    /// let config = BuilderConfig::builder().max_count(2).build();
    /// let zeros = Builder::with_config(|| 0u8, config);
    ///
    /// assert_eq!(zeros.checked_build_many(2), Ok(vec![0, 0]));
    /// assert_eq!(
    ///     zeros.checked_build_many(3),
    ///     Err(BobError::InvalidArgument { requested: 3, limit: 2 })
    /// );
    /// ```
    pub fn checked_build_many_with<I>(&self, n: usize, overrides: I) -> BobResult<Vec<T>>
    where
        I: IntoIterator,
        I::Item: Fn(usize, T) -> T,
    {
        if let Some(limit) = self.config.max_count.filter(|&limit| n > limit) {
            debug!(
                "{}: rejected build_many of {} (limit {})",
                self.config.label, n, limit
            );
            return Err(BobError::InvalidArgument {
                requested: n,
                limit,
            });
        }

        Ok(self.build_many_with(n, overrides))
    }

    /// Derives a builder whose default is this builder's output with
    /// `overrides` applied.
    ///
    /// The receiver is left untouched. Overrides passed at call time on the
    /// derived builder run after the baked-in ones.
    ///
    /// # Example
    ///
    /// ```
    /// use bob::Builder;
    ///
    /// let base = Builder::new(String::new);
    /// let greeting = base
    ///     .override_with([|s: String| s + "hello"])
    ///     .override_with([|s: String| s + ", world"]);
    ///
    /// assert_eq!(greeting.build(), "hello, world");
    /// assert_eq!(greeting.build_with([|s: String| s + "!"]), "hello, world!");
    /// assert_eq!(base.build(), "");
    /// ```
    pub fn override_with<I>(&self, overrides: I) -> Builder<T>
    where
        I: IntoIterator,
        I::Item: Fn(T) -> T + Send + Sync + 'static,
    {
        let overrides: Vec<I::Item> = overrides.into_iter().collect();
        let depth = self.depth + 1;
        debug!(
            "{}: derived builder at depth {} with {} override(s)",
            self.config.label,
            depth,
            overrides.len()
        );

        let parent = self.clone();
        Builder {
            make_default: Arc::new(move || parent.build_with(overrides.iter())),
            config: self.config.clone(),
            depth,
        }
    }
}
