use crate::{DrawerAnchor, DrawerSize};

/// View-level state owned by a [`crate::Drawer`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawerViewState {
    /// Set once on the first attach; never reverts.
    pub mounted: bool,
    /// Drives the slide in/out animation. Lags the open flag by one frame on open and by the
    /// close delay on close.
    pub visible: bool,
    /// Whether keyboard focus is visible on the close control.
    pub focus_visible: bool,
}

/// Lifecycle phase of a drawer, derived from the open flag and the view state.
///
/// State machine: Unmounted → ClosedHidden → Opening → Open → Closing → ClosedHidden.
///
/// A re-open while `Closing` goes straight back to `Open` once the deferred frame fires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawerPhase {
    #[default]
    Unmounted,
    ClosedHidden,
    /// Open flag is set; waiting for the next frame to flip `visible`.
    Opening,
    Open,
    /// Open flag is cleared; the exit transition is still in flight.
    Closing,
}

impl DrawerPhase {
    pub(crate) fn derive(attached: bool, is_open: bool, visible: bool) -> Self {
        match (attached, is_open, visible) {
            (false, _, _) => Self::Unmounted,
            (true, true, true) => Self::Open,
            (true, true, false) => Self::Opening,
            (true, false, true) => Self::Closing,
            (true, false, false) => Self::ClosedHidden,
        }
    }

    /// Whether content should be in the overlay layer.
    pub fn is_presented(self) -> bool {
        matches!(self, Self::Opening | Self::Open | Self::Closing)
    }

    pub fn is_animating(self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }
}

/// State flags shared by every visual slot of a drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SharedProps {
    pub animating: bool,
    pub visible: bool,
    pub open: bool,
    pub size: DrawerSize,
    pub closeable: bool,
    pub anchor: DrawerAnchor,
    pub focus_visible: bool,
    pub show_backdrop: bool,
}
