//! Observation overlay and rendering for the race track environment.
//!
//! The [`Observation`] is an owned copy of the track with the car drawn on
//! it. It never aliases the canonical [`Track`](racetrack_core::Track):
//! marking the car writes to the overlay only, and erasing it reads the
//! original cell back from the track.
//!
//! [`render`] turns an overlay into an RGB frame through a [`ColorMap`].
//! [`Renderer`] adds the playback delay used by [`RenderMode::Human`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod error;
pub mod observation;
pub mod render;

pub use color::{ColorMap, Rgb};
pub use error::RenderError;
pub use observation::Observation;
pub use render::{render, RenderMode, Renderer};

/// Frame type produced by [`render`].
pub use image::RgbImage;
