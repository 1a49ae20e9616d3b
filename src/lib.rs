//! findeck
//!
//! Terminal finance dashboard: a phone-number sign-up screen followed by a
//! grid of widgets the user can rearrange by dragging them with the mouse.
//!
//! The drag-and-drop core lives in [`grid`] and knows nothing about the
//! terminal; [`view`] is the impure shell that feeds it mouse events and
//! draws its render snapshot.

pub mod config;
pub mod grid;
pub mod logging;
pub mod model;
pub mod signup;
pub mod view;
