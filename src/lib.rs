//! taxo: hierarchical category taxonomy manager
//!
//! The core is the in-memory [`domain::HierarchyStore`]: category creation
//! with sibling-unique names and bounded fan-out, lookup, and cascading
//! deletion of whole subtrees. The application layer mirrors every mutation
//! into a snapshot repository; the CLI layer translates commands into the
//! store's synchronous calls.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
