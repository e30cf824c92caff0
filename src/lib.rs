//! Launch button and numbered pager for a single-screen Yew demo.
//!
//! The modules here hold the browser-independent state: the timed launch
//! sequence and its task ownership, and the pager with its swipe resolution.
//! The Yew components in the binary only wire these to DOM events.

pub mod config;
pub mod launch;
pub mod pager;

pub use launch::{run_launch_sequence, AppState, LaunchFrame, LaunchTask, LAUNCH_SEQUENCE};
pub use pager::{resolve_swipe, PagerState, SwipeTracker};
