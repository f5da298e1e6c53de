//! Action model for the race track environment.
//!
//! An [`Action`] changes the car's speed by an increment and spends the
//! resulting speed as a split between a vertical move (always towards
//! row 0) and a horizontal move. The [`MovementSpace`] knows which
//! actions are legal, validates candidates and samples random ones.
//!
//! The speed budget is L1: `|vertical| + |horizontal| == speed`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod error;
pub mod space;

pub use action::{Action, ActionViolation};
pub use error::SpaceError;
pub use space::MovementSpace;
