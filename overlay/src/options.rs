use alloc::borrow::Cow;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{
    CloseEvent, DrawerAnchor, DrawerOverrides, DrawerSize, Modifier, ModifierValue,
    NormalizedOffsets, Placement, PlacementState,
};

/// Receives the close notification. The host decides whether to clear the open flag.
pub type OnCloseCallback = Arc<dyn Fn(CloseEvent) + Send + Sync>;

/// Fired on every backdrop click, closeable or not, before any close request.
pub type OnBackdropClickCallback = Arc<dyn Fn() + Send + Sync>;

/// Receives normalized offsets plus the raw engine state on every recompute.
pub type OnPopperUpdateCallback = Arc<dyn Fn(&NormalizedOffsets, &PlacementState) + Send + Sync>;

/// Duration of the panel's exit transition. `visible` drops only after this elapses so the
/// content is removed once the animation has finished.
pub const DEFAULT_CLOSE_DELAY_MS: u64 = 500;

/// Configuration for [`crate::Drawer`].
///
/// Heavy fields are `Arc`s, so cloning and calling `Drawer::set_options` is cheap.
pub struct DrawerOptions {
    pub animate: bool,
    /// When false, escape and backdrop clicks never request a close.
    pub closeable: bool,
    pub size: DrawerSize,
    pub anchor: DrawerAnchor,
    /// Also controls scroll locking of the mount container.
    pub show_backdrop: bool,
    /// Passed through to the focus-lock collaborator.
    pub auto_focus: bool,
    /// Keep content rendered (visually hidden) while closed.
    pub render_all: bool,
    /// Delay between clearing the open flag and `visible = false`.
    pub close_delay_ms: u64,
    /// Where the overlay layer mounts; `None` uses the host's default layer root.
    pub mount_target: Option<Cow<'static, str>>,
    pub on_close: Option<OnCloseCallback>,
    pub on_backdrop_click: Option<OnBackdropClickCallback>,
    pub overrides: DrawerOverrides,
}

impl Default for DrawerOptions {
    fn default() -> Self {
        Self {
            animate: true,
            closeable: true,
            size: DrawerSize::Default,
            anchor: DrawerAnchor::Right,
            show_backdrop: true,
            auto_focus: true,
            render_all: false,
            close_delay_ms: DEFAULT_CLOSE_DELAY_MS,
            mount_target: None,
            on_close: None,
            on_backdrop_click: None,
            overrides: DrawerOverrides::default(),
        }
    }
}

impl Clone for DrawerOptions {
    fn clone(&self) -> Self {
        Self {
            animate: self.animate,
            closeable: self.closeable,
            size: self.size,
            anchor: self.anchor,
            show_backdrop: self.show_backdrop,
            auto_focus: self.auto_focus,
            render_all: self.render_all,
            close_delay_ms: self.close_delay_ms,
            mount_target: self.mount_target.clone(),
            on_close: self.on_close.clone(),
            on_backdrop_click: self.on_backdrop_click.clone(),
            overrides: self.overrides.clone(),
        }
    }
}

impl DrawerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    pub fn with_closeable(mut self, closeable: bool) -> Self {
        self.closeable = closeable;
        self
    }

    pub fn with_size(mut self, size: DrawerSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_anchor(mut self, anchor: DrawerAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_show_backdrop(mut self, show_backdrop: bool) -> Self {
        self.show_backdrop = show_backdrop;
        self
    }

    pub fn with_auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    pub fn with_render_all(mut self, render_all: bool) -> Self {
        self.render_all = render_all;
        self
    }

    pub fn with_close_delay_ms(mut self, close_delay_ms: u64) -> Self {
        self.close_delay_ms = close_delay_ms;
        self
    }

    pub fn with_mount_target(mut self, mount_target: impl Into<Cow<'static, str>>) -> Self {
        self.mount_target = Some(mount_target.into());
        self
    }

    pub fn with_on_close(
        mut self,
        on_close: Option<impl Fn(CloseEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_close = on_close.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_backdrop_click(
        mut self,
        on_backdrop_click: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.on_backdrop_click = on_backdrop_click.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_overrides(mut self, overrides: DrawerOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

impl core::fmt::Debug for DrawerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DrawerOptions")
            .field("animate", &self.animate)
            .field("closeable", &self.closeable)
            .field("size", &self.size)
            .field("anchor", &self.anchor)
            .field("show_backdrop", &self.show_backdrop)
            .field("auto_focus", &self.auto_focus)
            .field("render_all", &self.render_all)
            .field("close_delay_ms", &self.close_delay_ms)
            .field("mount_target", &self.mount_target)
            .field("overrides", &self.overrides)
            .finish_non_exhaustive()
    }
}

/// Configuration for [`crate::Tether`].
#[derive(Default)]
pub struct TetherOptions {
    /// Recommended placement; the engine may flip it to avoid overflow.
    pub placement: Placement,
    /// Extra engine modifiers, appended after the built-in set.
    pub modifiers: Vec<Modifier>,
    /// Other engine options (e.g. `strategy = "fixed"`), handed to the engine as-is.
    pub engine_options: Vec<(Cow<'static, str>, ModifierValue)>,
    pub on_popper_update: Option<OnPopperUpdateCallback>,
}

impl Clone for TetherOptions {
    fn clone(&self) -> Self {
        Self {
            placement: self.placement,
            modifiers: self.modifiers.clone(),
            engine_options: self.engine_options.clone(),
            on_popper_update: self.on_popper_update.clone(),
        }
    }
}

impl TetherOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Vec<Modifier>) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn with_engine_option(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: ModifierValue,
    ) -> Self {
        self.engine_options.push((key.into(), value));
        self
    }

    pub fn with_on_popper_update(
        mut self,
        on_popper_update: Option<impl Fn(&NormalizedOffsets, &PlacementState) + Send + Sync + 'static>,
    ) -> Self {
        self.on_popper_update = on_popper_update.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for TetherOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TetherOptions")
            .field("placement", &self.placement)
            .field("modifiers", &self.modifiers)
            .field("engine_options", &self.engine_options)
            .finish_non_exhaustive()
    }
}
