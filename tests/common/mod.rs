// Common test utilities and fixtures

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Once;
use std::sync::atomic::{AtomicUsize, Ordering};

use bob::Builder;

static LOGGING: Once = Once::new();

/// Route `log` output through the test harness
pub fn init_logging() {
    LOGGING.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub a: String,
    pub b: String,
}

pub fn default_target() -> Target {
    Target {
        a: "a".to_string(),
        b: "b".to_string(),
    }
}

pub fn target_builder() -> Builder<Target> {
    init_logging();
    Builder::new(default_target)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub age: u32,
}

pub fn user(name: &str, age: u32) -> User {
    User {
        name: name.to_string(),
        age,
    }
}

pub fn user_builder() -> Builder<User> {
    init_logging();
    Builder::new(|| user("test", 18))
}

pub fn name_is_bob(mut u: User) -> User {
    u.name = "bob".to_string();
    u
}

pub fn age_is_15(mut u: User) -> User {
    u.age = 15;
    u
}

/// Builder whose factory bumps the returned counter on every call
pub fn counting_builder() -> (Builder<User>, Arc<AtomicUsize>) {
    init_logging();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let builder = Builder::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        user("test", 18)
    });
    (builder, calls)
}

pub fn calls(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}
