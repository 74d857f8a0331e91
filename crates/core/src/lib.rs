//! Domain types and pure logic for the relocation planner.
//!
//! Nothing in this crate performs I/O. Catalogs and reference tables are
//! built once by the caller and passed around by reference.

pub mod budget;
pub mod error;
pub mod progress;
pub mod progress_items;
pub mod reference;
pub mod timeline;
pub mod types;
