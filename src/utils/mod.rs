//! Utility modules for the static site generator.

pub mod path;
mod plural;

pub use plural::plural_count;
