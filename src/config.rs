//! Demo configuration.
//!
//! Defaults reproduce the classic exercise layout; a few values can be
//! overridden from the environment.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use log::warn;

use crate::exercise::Mode;
use crate::math::ClipWindow;
use crate::render::MAX_DIMENSION;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const FPS: u64 = 60;
pub const GRID_SPACING: i32 = 50;
/// Side of the square drawn for every rasterized pixel.
pub const POINT_SIZE: u32 = 2;
pub const MAX_POINT_SIZE: u32 = 32;

pub const ENV_WIDTH: &str = "RASTERLAB_WIDTH";
pub const ENV_HEIGHT: &str = "RASTERLAB_HEIGHT";
pub const ENV_POINT_SIZE: &str = "RASTERLAB_POINT_SIZE";
/// Set (to anything) to log every clipping iteration.
pub const ENV_CLIP_TRACE: &str = "RASTERLAB_CLIP_TRACE";

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fps: u64,
    pub grid_spacing: i32,
    pub point_size: u32,
    pub clip_window: ClipWindow,
    pub initial_mode: Mode,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "rasterlab".to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            fps: FPS,
            grid_spacing: GRID_SPACING,
            point_size: POINT_SIZE,
            clip_window: ClipWindow::DEFAULT,
            initial_mode: Mode::default(),
        }
    }
}

impl DemoConfig {
    /// Defaults, overridden by `RASTERLAB_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        override_in_range(&lookup, ENV_WIDTH, &mut config.width, 1..=MAX_DIMENSION);
        override_in_range(&lookup, ENV_HEIGHT, &mut config.height, 1..=MAX_DIMENSION);
        override_in_range(&lookup, ENV_POINT_SIZE, &mut config.point_size, 1..=MAX_POINT_SIZE);
        config
    }

    /// Milliseconds per frame at the configured rate.
    pub fn frame_target_ms(&self) -> u64 {
        if self.fps == 0 {
            return 0;
        }
        1000 / self.fps
    }
}

fn override_in_range<F, T>(lookup: &F, key: &str, slot: &mut T, range: RangeInclusive<T>)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + PartialOrd + fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if range.contains(&value) => *slot = value,
        _ => warn!(
            "ignoring {key}={raw:?}: expected an integer in {}..={}",
            range.start(),
            range.end()
        ),
    }
}
