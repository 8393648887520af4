//! Raw environment lookup.
//!
//! | Source | Backing | Use |
//! |--------|---------|-----|
//! | [`SystemEnv`] | process environment | servers, CLIs |
//! | [`StaticEnv`] | table installed once at startup | values injected by a build step |
//! | [`InMemoryEnv`] | `RwLock<HashMap>` | tests, embedding |
//!
//! The host application picks one at startup and hands it to
//! [`Env`](crate::Env); nothing inside the resolver senses which one is used.

mod injected;
mod memory;
mod system;

pub use injected::StaticEnv;
pub use memory::InMemoryEnv;
pub use system::SystemEnv;

use std::collections::HashMap;
use std::sync::Arc;

/// Read-only string lookup by key
pub trait ReadEnv {
    /// Raw value for `key`, or `None` when it is not set
    fn var(&self, key: &str) -> Option<String>;
}

impl<T: ReadEnv + ?Sized> ReadEnv for &T {
    #[inline]
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

impl<T: ReadEnv + ?Sized> ReadEnv for Box<T> {
    #[inline]
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

impl<T: ReadEnv + ?Sized> ReadEnv for Arc<T> {
    #[inline]
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

impl ReadEnv for HashMap<String, String> {
    #[inline]
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
