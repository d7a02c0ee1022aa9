//! Fast hash collections (FxHash) used for definition sets and per-side caches.

pub use rustc_hash::{FxHashMap, FxHashSet};
