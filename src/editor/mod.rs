//! Host-editor integration seam.
//!
//! The core never talks to a host editor directly; it reads a line snapshot
//! and a cursor through [`EditorContext`] and hands back a [`DocumentEdit`]
//! splice. [`MemoryEditor`] is the rope-backed reference implementation used
//! by the CLI and the tests.

mod buffer;
mod context;

pub use buffer::MemoryEditor;
pub use context::{Cursor, DocumentEdit, EditorContext, apply_edit};
