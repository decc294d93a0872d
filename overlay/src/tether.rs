use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::{NormalizedOffsets, Placement, PlacementState, Size, TetherOptions};

/// An element handle that can report its bounding size.
pub trait Measure {
    fn bounding_size(&self) -> Size;
}

impl<T: Measure + ?Sized> Measure for &T {
    fn bounding_size(&self) -> Size {
        (**self).bounding_size()
    }
}

/// Engine modifier names used by the built-in configuration.
pub mod modifier_names {
    pub const ARROW: &str = "arrow";
    pub const COMPUTE_STYLES: &str = "computeStyles";
    pub const APPLY_STYLES: &str = "applyStyles";
    pub const APPLY_STYLE_CALLBACK: &str = "applyStyleCallback";
    pub const PREVENT_OVERFLOW: &str = "preventOverflow";
}

/// Phase in which an engine modifier runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ModifierPhase {
    BeforeRead,
    Read,
    AfterRead,
    BeforeMain,
    Main,
    AfterMain,
    BeforeWrite,
    Write,
    AfterWrite,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModifierValue {
    Bool(bool),
    Number(f64),
    Text(Cow<'static, str>),
    /// Refers to the arrow element handed to [`PositioningEngine::create`].
    ArrowElement,
}

/// One entry of the engine's modifier list. Opaque to this crate beyond its name.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifier {
    pub name: Cow<'static, str>,
    pub enabled: bool,
    pub phase: Option<ModifierPhase>,
    pub options: Vec<(Cow<'static, str>, ModifierValue)>,
}

impl Modifier {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            phase: None,
            options: Vec::new(),
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_phase(mut self, phase: ModifierPhase) -> Self {
        self.phase = Some(phase);
        self
    }

    pub fn with_option(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: ModifierValue,
    ) -> Self {
        self.options.push((key.into(), value));
        self
    }

    pub fn option(&self, key: &str) -> Option<&ModifierValue> {
        self.options
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v)
    }
}

/// Configuration handed to the engine when an instance is created.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    pub placement: Placement,
    pub modifiers: Vec<Modifier>,
    /// Caller options passed to the engine untouched (e.g. `strategy`).
    pub options: Vec<(Cow<'static, str>, ModifierValue)>,
}

impl EngineConfig {
    /// Built-in modifiers first, then `extra` in order. `options` are carried as-is.
    ///
    /// The engine must not write styles itself: offsets come back through the write-phase
    /// callback and the host applies them (as `top`/`left`, so transforms stay free for
    /// animations).
    pub fn new(
        placement: Placement,
        has_arrow: bool,
        extra: &[Modifier],
        options: &[(Cow<'static, str>, ModifierValue)],
    ) -> Self {
        use modifier_names::*;

        let mut modifiers = Vec::with_capacity(5 + extra.len());
        modifiers.push(
            Modifier::new(ARROW)
                .with_enabled(has_arrow)
                .with_option("element", ModifierValue::ArrowElement),
        );
        modifiers.push(
            Modifier::new(COMPUTE_STYLES)
                .with_option("gpuAcceleration", ModifierValue::Bool(false))
                .with_option("adaptive", ModifierValue::Bool(false)),
        );
        modifiers.push(Modifier::new(APPLY_STYLES).with_enabled(false));
        modifiers.push(Modifier::new(APPLY_STYLE_CALLBACK).with_phase(ModifierPhase::Write));
        modifiers.push(Modifier::new(PREVENT_OVERFLOW));
        modifiers.extend(extra.iter().cloned());

        Self {
            placement,
            modifiers,
            options: options.to_vec(),
        }
    }

    /// The placement in the engine's string form.
    pub fn engine_placement(&self) -> &'static str {
        self.placement.to_engine()
    }

    /// The last engine option with this key.
    pub fn option(&self, key: &str) -> Option<&ModifierValue> {
        self.options
            .iter()
            .rev()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v)
    }

    /// The last modifier with this name (later entries override earlier ones).
    pub fn modifier(&self, name: &str) -> Option<&Modifier> {
        self.modifiers.iter().rev().find(|m| m.name.as_ref() == name)
    }
}

/// A black-box positioning engine.
pub trait PositioningEngine<R> {
    type Instance: PositioningInstance;

    fn create(
        &mut self,
        anchor: &R,
        popper: &R,
        arrow: Option<&R>,
        config: &EngineConfig,
    ) -> Self::Instance;
}

/// A live engine instance.
///
/// The engine recomputes on its own for scroll/resize; the host forwards those results
/// through [`Tether::on_engine_update`].
pub trait PositioningInstance {
    /// Forces a recompute. Returns the new state when the engine computes synchronously.
    fn update(&mut self) -> Option<PlacementState>;

    fn destroy(&mut self);
}

/// Keeps a floating element tethered to an anchor through a [`PositioningEngine`].
///
/// Like the drawer, this holds no UI objects of its own: the host supplies element handles
/// (which may arrive after mount), calls [`update`](Self::update) on every render, and applies
/// the offsets it receives through `on_popper_update`.
///
/// An engine instance exists only while both the anchor and the popper are present.
pub struct Tether<R, E: PositioningEngine<R>> {
    options: TetherOptions,
    engine: E,
    anchor: Option<R>,
    popper: Option<R>,
    arrow: Option<R>,
    instance: Option<E::Instance>,
    mounted: bool,
    stale: bool,
    anchor_size: Size,
    popper_size: Size,
    anchor_ever_set: bool,
    warned_missing_anchor: bool,
    last_offsets: Option<NormalizedOffsets>,
}

impl<R: Measure, E: PositioningEngine<R>> Tether<R, E> {
    pub fn new(options: TetherOptions, engine: E) -> Self {
        odebug!(placement = ?options.placement, "Tether::new");
        Self {
            options,
            engine,
            anchor: None,
            popper: None,
            arrow: None,
            instance: None,
            mounted: false,
            stale: false,
            anchor_size: Size::ZERO,
            popper_size: Size::ZERO,
            anchor_ever_set: false,
            warned_missing_anchor: false,
            last_offsets: None,
        }
    }

    pub fn options(&self) -> &TetherOptions {
        &self.options
    }

    /// Replaces the options. A change of placement, modifiers or engine options rebuilds the
    /// engine instance on the next [`update`](Self::update).
    pub fn set_options(&mut self, options: TetherOptions) {
        if options.placement != self.options.placement
            || options.modifiers != self.options.modifiers
            || options.engine_options != self.options.engine_options
        {
            self.stale = true;
        }
        self.options = options;
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn anchor(&self) -> Option<&R> {
        self.anchor.as_ref()
    }

    pub fn popper(&self) -> Option<&R> {
        self.popper.as_ref()
    }

    pub fn arrow(&self) -> Option<&R> {
        self.arrow.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn has_instance(&self) -> bool {
        self.instance.is_some()
    }

    pub fn instance(&self) -> Option<&E::Instance> {
        self.instance.as_ref()
    }

    pub fn last_offsets(&self) -> Option<NormalizedOffsets> {
        self.last_offsets
    }

    /// Whether the missing-anchor advisory has fired for this tether.
    pub fn warned_missing_anchor(&self) -> bool {
        self.warned_missing_anchor
    }

    /// The config a new engine instance would be created with.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::new(
            self.options.placement,
            self.arrow.is_some(),
            &self.options.modifiers,
            &self.options.engine_options,
        )
    }

    /// Sets or clears the anchor. Clearing it tears the engine down; setting it while an
    /// engine instance exists rebuilds the instance on the next [`update`](Self::update), so
    /// only call this when the element actually changes.
    pub fn set_anchor(&mut self, anchor: Option<R>) {
        if anchor.is_some() {
            self.anchor_ever_set = true;
            self.stale |= self.instance.is_some();
        } else {
            self.anchor_size = Size::ZERO;
            self.destroy();
        }
        self.anchor = anchor;
    }

    /// Sets or clears the floating element. Same rebuild rules as
    /// [`set_anchor`](Self::set_anchor).
    pub fn set_popper(&mut self, popper: Option<R>) {
        if popper.is_some() {
            self.stale |= self.instance.is_some();
        } else {
            self.popper_size = Size::ZERO;
            self.destroy();
        }
        self.popper = popper;
    }

    /// Sets or clears the arrow element. The arrow is measured at creation time, so a change
    /// rebuilds the engine instance on the next [`update`](Self::update).
    pub fn set_arrow(&mut self, arrow: Option<R>) {
        if arrow.is_some() != self.arrow.is_some() {
            self.stale = true;
        }
        self.arrow = arrow;
    }

    pub fn mount(&mut self) {
        self.mounted = true;
    }

    /// Render-time reconciliation.
    ///
    /// Measures the anchor and the popper; if either size changed since the last call and an
    /// engine instance exists, forces exactly one recompute. The engine only recomputes on
    /// scroll/resize by itself, so content-driven size changes (e.g. a filtered list
    /// shrinking the popper) would otherwise leave a gap.
    ///
    /// Then creates the engine instance if both elements are present and none exists.
    ///
    /// Returns `true` if a forced recompute ran.
    pub fn update(&mut self) -> bool {
        if !self.mounted {
            return false;
        }

        if self.stale {
            self.stale = false;
            self.destroy();
        }

        let mut changed = false;
        if let Some(anchor) = &self.anchor {
            let size = anchor.bounding_size();
            if size != self.anchor_size {
                self.anchor_size = size;
                changed = true;
            }
        }
        if let Some(popper) = &self.popper {
            let size = popper.bounding_size();
            if size != self.popper_size {
                self.popper_size = size;
                changed = true;
            }
        }

        let recomputed = changed && self.instance.is_some() && self.force_update();

        if self.popper.is_some() && !self.anchor_ever_set && !self.warned_missing_anchor {
            self.warned_missing_anchor = true;
            if cfg!(debug_assertions) {
                owarn!(
                    "Tether: no anchor has been supplied for the floating element; the \
                     positioning engine stays inactive until one is set"
                );
            }
        }

        self.ensure_instance();
        recomputed
    }

    /// Forces the engine to recompute. Returns `false` when no instance exists.
    pub fn force_update(&mut self) -> bool {
        let Some(instance) = self.instance.as_mut() else {
            return false;
        };
        otrace!("Tether::force_update");
        if let Some(state) = instance.update() {
            self.on_engine_update(&state);
        }
        true
    }

    /// Write-phase callback: normalizes the engine's offsets and forwards them, with the raw
    /// state, to `on_popper_update`.
    pub fn on_engine_update(&mut self, state: &PlacementState) -> NormalizedOffsets {
        let offsets = state.normalize();
        otrace!(
            top = offsets.popper.top,
            left = offsets.popper.left,
            "Tether::on_engine_update"
        );
        self.last_offsets = Some(offsets);
        if let Some(cb) = &self.options.on_popper_update {
            cb(&offsets, state);
        }
        offsets
    }

    /// Detach: tears the engine down. Element handles are kept for a later remount.
    pub fn unmount(&mut self) {
        self.destroy();
        self.mounted = false;
    }

    /// Destroys the engine instance, if any. Safe to call repeatedly.
    pub fn destroy(&mut self) {
        if let Some(mut instance) = self.instance.take() {
            odebug!("Tether::destroy");
            instance.destroy();
        }
    }

    fn ensure_instance(&mut self) {
        if self.instance.is_some() {
            return;
        }
        if self.anchor.is_none() || self.popper.is_none() {
            return;
        }
        let config = self.engine_config();
        let (Some(anchor), Some(popper)) = (&self.anchor, &self.popper) else {
            return;
        };
        odebug!(
            placement = config.engine_placement(),
            modifiers = config.modifiers.len(),
            "Tether: creating engine instance"
        );
        let instance = self
            .engine
            .create(anchor, popper, self.arrow.as_ref(), &config);
        self.instance = Some(instance);
    }
}

impl<R, E: PositioningEngine<R>> Drop for Tether<R, E> {
    fn drop(&mut self) {
        if let Some(mut instance) = self.instance.take() {
            instance.destroy();
        }
    }
}

impl<R, E: PositioningEngine<R>> core::fmt::Debug for Tether<R, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tether")
            .field("options", &self.options)
            .field("has_anchor", &self.anchor.is_some())
            .field("has_popper", &self.popper.is_some())
            .field("has_arrow", &self.arrow.is_some())
            .field("has_instance", &self.instance.is_some())
            .field("mounted", &self.mounted)
            .field("anchor_size", &self.anchor_size)
            .field("popper_size", &self.popper_size)
            .finish_non_exhaustive()
    }
}
