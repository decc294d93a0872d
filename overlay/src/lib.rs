//! Headless overlay primitives: a modal drawer lifecycle and a tether positioning adapter.
//!
//! For frame-loop driving, transition tweens and inline-style helpers, see the
//! `overlay-adapter` crate.
//!
//! This crate covers the orchestration around two overlay components:
//! - [`Drawer`]: open/close animation state with a one-frame deferred open and a delayed
//!   close, scroll locking of the mount container, close notifications with a source, and
//!   the render policy (nothing / hidden / layered with focus lock and overridable slots).
//! - [`Tether`]: owns an instance of an external [`PositioningEngine`], forces a recompute
//!   when the anchor or the floating element changes size, and forwards normalized offsets.
//!
//! It is UI-agnostic. A UI layer is expected to provide:
//! - attach/detach hooks and the open flag
//! - animation-frame boundaries and the current time (`now_ms`)
//! - the mount container ([`DrawerHost`]) and measurable element handles ([`Measure`])
//! - the positioning engine itself (constraint solving is out of scope)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod deferred;
mod drawer;
mod host;
mod locale;
mod options;
mod render;
mod scroll_lock;
mod slots;
mod state;
mod tether;
mod types;


pub use deferred::{Deferral, DeferredQueue, TaskId};
pub use drawer::Drawer;
pub use host::DrawerHost;
pub use locale::{DrawerLocale, Locale};
pub use options::{
    DEFAULT_CLOSE_DELAY_MS, DrawerOptions, OnBackdropClickCallback, OnCloseCallback,
    OnPopperUpdateCallback, TetherOptions,
};
pub use render::{FocusLockRequest, LayerRequest, LayeredDrawer, RenderPlan};
pub use scroll_lock::{LOCKED_OVERFLOW, ScrollLock};
pub use slots::{
    DrawerOverrides, PropValue, ResolvedSlot, Slot, SlotEvent, SlotEventHandler, SlotEventKind,
    SlotOverride,
};
pub use state::{DrawerPhase, DrawerViewState, SharedProps};
pub use tether::{
    EngineConfig, Measure, Modifier, ModifierPhase, ModifierValue, PositioningEngine,
    PositioningInstance, Tether, modifier_names,
};
pub use types::{
    CloseEvent, CloseSource, DrawerAnchor, DrawerSize, NormalizedOffsets, Offset, Placement,
    PlacementState, RawOffset, Size,
};
