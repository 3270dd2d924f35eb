//! Core business logic modules
//!
//! This module contains pure business logic with no I/O dependencies.
//! All functions are deterministic and easily testable.

pub mod placement;
pub mod storm_site;

pub use placement::check_placement;
pub use storm_site::{SlotCapacity, merge_classpath, missing_path_segments, slots_per_supervisor};
