//! Session handle for front ends.
//!
//! A `CubeSession` is what an interactive front end keeps between user
//! actions: the live cube, the last scramble, the last solution. Solution
//! playback runs on its own copy of the cube.

pub mod config;
pub mod handle;
pub mod playback;

pub use config::SessionConfig;
pub use handle::CubeSession;
pub use playback::{Playback, PlaybackStep};
