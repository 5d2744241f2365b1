// crates/shared-kernel/src/value_objects/mod.rs
pub mod occurrences;

pub use occurrences::Occurrences;
