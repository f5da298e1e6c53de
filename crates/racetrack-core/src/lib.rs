//! Core types for the race track environment.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the canonical track representation and the vocabulary shared by the
//! rest of the workspace: cell codes, overlay tiles, grid positions,
//! track validation errors and the [`Env`] trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod env;
pub mod error;
pub mod position;
pub mod presets;
pub mod track;

pub use cell::{Cell, Tile};
pub use env::{Env, Transition};
pub use error::TrackError;
pub use position::Position;
pub use track::Track;
