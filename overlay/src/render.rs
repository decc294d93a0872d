use alloc::borrow::Cow;

use crate::ResolvedSlot;

/// Request for the focus-containment collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FocusLockRequest {
    /// Return focus to the previously focused element when the lock is released.
    pub return_focus: bool,
    pub auto_focus: bool,
}

/// Request for the overlay-layer collaborator.
///
/// The host routes escape presses in the layer to [`crate::Drawer::on_escape`] regardless of
/// this flag; it only tells whether that press will request a close.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerRequest {
    pub escape_closes: bool,
    /// Host-defined identifier of the node the layer renders into; `None` for the default.
    pub mount_target: Option<Cow<'static, str>>,
}

/// Everything needed to render an open (or closing) drawer.
///
/// Nesting: layer → focus lock → root → { backdrop, container → { body → content, close } }.
#[derive(Clone, Debug, PartialEq)]
pub struct LayeredDrawer {
    pub layer: LayerRequest,
    pub focus_lock: FocusLockRequest,
    pub root: ResolvedSlot,
    pub backdrop: ResolvedSlot,
    pub container: ResolvedSlot,
    pub body: ResolvedSlot,
    /// Present only when the drawer is closeable.
    pub close: Option<ResolvedSlot>,
    /// Localized label (and icon title) of the close control.
    pub close_label: Cow<'static, str>,
}

impl LayeredDrawer {
    pub fn slots(&self) -> impl Iterator<Item = &ResolvedSlot> {
        [
            Some(&self.root),
            Some(&self.backdrop),
            Some(&self.container),
            Some(&self.body),
            self.close.as_ref(),
        ]
        .into_iter()
        .flatten()
    }
}

/// What the host should render for a drawer this frame.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderPlan {
    /// Render nothing; the content is not instantiated.
    Nothing,
    /// Render the content inside a visually hidden wrapper, keeping it in the tree for
    /// focus and accessibility continuity.
    Hidden,
    /// Render the content in the overlay layer, wrapped in the focus lock and slots.
    Layered(LayeredDrawer),
}

impl RenderPlan {
    pub fn renders_content(&self) -> bool {
        !matches!(self, Self::Nothing)
    }

    pub fn layered(&self) -> Option<&LayeredDrawer> {
        match self {
            Self::Layered(l) => Some(l),
            _ => None,
        }
    }
}
