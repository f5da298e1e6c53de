//! Frame rendering.

use crate::color::ColorMap;
use crate::error::RenderError;
use crate::observation::Observation;
use image::{Rgb, RgbImage};
use std::str::FromStr;
use std::time::Duration;

/// How a frame is being consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Real-time playback: the frame is followed by the render delay.
    #[default]
    Human,
    /// Raw pixels for a program; no delay.
    RgbArray,
}

impl FromStr for RenderMode {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(Self::Human),
            "rgb_array" => Ok(Self::RgbArray),
            other => Err(RenderError::UnsupportedMode {
                mode: other.to_string(),
            }),
        }
    }
}

/// Draw `obs` one pixel per tile.
///
/// The image is `cols` wide and `rows` tall, so its raw buffer is laid out
/// as `rows × cols × 3` bytes. Pure: the same overlay and colors always
/// give the same frame.
pub fn render(obs: &Observation, colors: &ColorMap) -> RgbImage {
    let cols = obs.cols();
    let tiles = obs.tiles();
    RgbImage::from_fn(cols, obs.rows(), |x, y| {
        let tile = tiles[y as usize * cols as usize + x as usize];
        Rgb(colors.get(tile))
    })
}

/// A [`ColorMap`] plus the pause that follows each human-mode frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Renderer {
    colors: ColorMap,
    delay: Duration,
}

impl Renderer {
    /// Create a renderer.
    pub fn new(colors: ColorMap, delay: Duration) -> Self {
        Self { colors, delay }
    }

    /// The colors frames are drawn with.
    pub fn colors(&self) -> &ColorMap {
        &self.colors
    }

    /// The pause after each human-mode frame.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Draw `obs`. In [`RenderMode::Human`] this blocks for the delay
    /// before returning; there is no way to cut the pause short.
    pub fn render(&self, obs: &Observation, mode: RenderMode) -> RgbImage {
        let frame = render(obs, &self.colors);
        if mode == RenderMode::Human && !self.delay.is_zero() {
            tracing::trace!(delay_ms = self.delay.as_millis() as u64, "render delay");
            std::thread::sleep(self.delay);
        }
        frame
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(ColorMap::default(), Duration::from_secs(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use racetrack_core::{Position, Tile, Track};
    use racetrack_test_utils::tracks;
    use std::time::Instant;

    #[test]
    fn mode_parsing() {
        assert_eq!("human".parse::<RenderMode>(), Ok(RenderMode::Human));
        assert_eq!("rgb_array".parse::<RenderMode>(), Ok(RenderMode::RgbArray));
        assert_eq!(
            "ansi".parse::<RenderMode>(),
            Err(RenderError::UnsupportedMode {
                mode: "ansi".to_string()
            })
        );
    }

    #[test]
    fn frame_has_track_dimensions() {
        let track = tracks::oil_strip();
        let img = render(&Observation::from_track(&track), &ColorMap::default());
        assert_eq!(img.width(), track.cols());
        assert_eq!(img.height(), track.rows());
        assert_eq!(
            img.as_raw().len(),
            (track.rows() * track.cols() * 3) as usize
        );
    }

    #[test]
    fn pixels_follow_tiles() {
        let track = tracks::three_by_three();
        let obs = Observation::with_car(&track, Position::new(2, 1));
        let colors = ColorMap::default();
        let img = render(&obs, &colors);
        assert_eq!(img.get_pixel(0, 0).0, ColorMap::GOAL);
        assert_eq!(img.get_pixel(0, 1).0, ColorMap::TRACK);
        assert_eq!(img.get_pixel(1, 2).0, ColorMap::CAR);
    }

    #[test]
    fn raw_buffer_is_row_major() {
        let track = Track::parse_ascii("G.\n..").unwrap();
        let obs = Observation::from_track(&track);
        let img = render(&obs, &ColorMap::default());
        assert_eq!(&img.as_raw()[0..3], &ColorMap::GOAL);
        assert_eq!(&img.as_raw()[3..6], &ColorMap::TRACK);
    }

    #[test]
    fn rgb_array_mode_does_not_sleep() {
        let renderer = Renderer::new(ColorMap::default(), Duration::from_secs(30));
        let obs = Observation::from_track(&tracks::three_by_three());
        let start = Instant::now();
        renderer.render(&obs, RenderMode::RgbArray);
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn human_mode_waits_for_the_delay() {
        let renderer = Renderer::new(ColorMap::default(), Duration::from_millis(20));
        let obs = Observation::from_track(&tracks::three_by_three());
        let start = Instant::now();
        renderer.render(&obs, RenderMode::Human);
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    proptest! {
        #[test]
        fn car_pixel_always_uses_car_color(
            rows in 1usize..8,
            cols in 1usize..8,
            r in 0usize..8,
            c in 0usize..8,
            car in any::<[u8; 3]>(),
        ) {
            prop_assume!(r < rows && c < cols);
            let track = Track::from_codes(&vec![vec![2u8; cols]; rows]).unwrap();
            let pos = Position::new(r as i32, c as i32);
            let obs = Observation::with_car(&track, pos);
            let colors = ColorMap::default().with(Tile::Car, car);
            let img = render(&obs, &colors);
            prop_assert_eq!(img.get_pixel(c as u32, r as u32).0, car);
        }
    }
}
