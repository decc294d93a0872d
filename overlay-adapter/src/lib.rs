//! Adapter utilities for the `overlay` crate.
//!
//! The `overlay` crate is UI-agnostic and only tracks state. This crate provides small,
//! framework-neutral helpers commonly needed by adapters:
//!
//! - A clock-driven drawer controller (one `tick(now_ms)` per animation frame)
//! - Panel transition tweens for hosts without CSS transitions
//! - An in-memory inline style block usable as the drawer's mount container
//! - Inline `top`/`left` declarations from normalized tether offsets
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod style;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::DrawerController;
pub use style::{
    InlineStyle, apply_arrow_style, apply_popper_style, arrow_style, panel_transform,
    popper_style, px,
};
pub use tween::{Easing, PanelTransition, Tween};
