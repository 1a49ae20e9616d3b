//! Layout and timing constants for TUI rendering.
//!
//! Centralized location for the numeric values the screens and the frame
//! loop share, so they can be tuned in one place.

use std::time::Duration;

/// Height of the dashboard header bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for status text and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Poll interval while something is animating (about 60 frames per second).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Poll interval when nothing moves.
pub const IDLE_INTERVAL: Duration = Duration::from_millis(250);

/// Rows scrolled per arrow key or wheel notch.
pub const SCROLL_STEP: f64 = 1.0;

/// Width of the sign-up dialog in columns.
pub const SIGNUP_DIALOG_WIDTH: u16 = 46;

/// Height of the sign-up dialog in lines.
pub const SIGNUP_DIALOG_HEIGHT: u16 = 11;
