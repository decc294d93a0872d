use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::SharedProps;

/// The visual slots of a drawer, outermost first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot {
    Root,
    Backdrop,
    DrawerContainer,
    DrawerBody,
    Close,
}

impl Slot {
    pub const ALL: [Self; 5] = [
        Self::Root,
        Self::Backdrop,
        Self::DrawerContainer,
        Self::DrawerBody,
        Self::Close,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Root => "Root",
            Self::Backdrop => "Backdrop",
            Self::DrawerContainer => "DrawerContainer",
            Self::DrawerBody => "DrawerBody",
            Self::Close => "Close",
        }
    }

    /// The component rendered when no override replaces it.
    pub fn default_component(self) -> &'static str {
        match self {
            Self::Root => "StyledRoot",
            Self::Backdrop => "StyledBackdrop",
            Self::DrawerContainer => "StyledDrawerContainer",
            Self::DrawerBody => "StyledDrawerBody",
            Self::Close => "StyledClose",
        }
    }
}

/// A property value passed to a slot component.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropValue {
    Bool(bool),
    Number(f64),
    Text(Cow<'static, str>),
}

impl PropValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_ref()),
            _ => None,
        }
    }
}

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for PropValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&'static str> for PropValue {
    fn from(v: &'static str) -> Self {
        Self::Text(Cow::Borrowed(v))
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        Self::Text(Cow::Owned(v))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotEventKind {
    Click,
    Focus,
    Blur,
}

/// An event raised by the host on a rendered slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotEvent {
    Click,
    /// `focus_visible` is true when focus arrived via keyboard navigation.
    Focus { focus_visible: bool },
    Blur,
}

impl SlotEvent {
    pub fn kind(&self) -> SlotEventKind {
        match self {
            Self::Click => SlotEventKind::Click,
            Self::Focus { .. } => SlotEventKind::Focus,
            Self::Blur => SlotEventKind::Blur,
        }
    }
}

/// An override-provided event handler. Runs before the drawer's own handler; both run.
pub type SlotEventHandler = Arc<dyn Fn(Slot, &SlotEvent) + Send + Sync>;

/// Replacement component and extra properties for one visual slot.
#[derive(Clone, Default)]
pub struct SlotOverride {
    pub component: Option<Cow<'static, str>>,
    /// Merged over the shared props; these win on conflict.
    pub props: BTreeMap<Cow<'static, str>, PropValue>,
    /// Composed with the drawer's own handlers, never replacing them.
    pub handlers: Vec<(SlotEventKind, SlotEventHandler)>,
}

impl SlotOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_component(mut self, component: impl Into<Cow<'static, str>>) -> Self {
        self.component = Some(component.into());
        self
    }

    pub fn with_prop(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<PropValue>,
    ) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn with_handler(
        mut self,
        kind: SlotEventKind,
        handler: impl Fn(Slot, &SlotEvent) + Send + Sync + 'static,
    ) -> Self {
        self.handlers.push((kind, Arc::new(handler)));
        self
    }

    pub(crate) fn invoke(&self, slot: Slot, event: &SlotEvent) {
        let kind = event.kind();
        for (k, handler) in &self.handlers {
            if *k == kind {
                handler(slot, event);
            }
        }
    }
}

impl fmt::Debug for SlotOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotOverride")
            .field("component", &self.component)
            .field("props", &self.props)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

/// Per-slot overrides for a drawer.
#[derive(Clone, Debug, Default)]
pub struct DrawerOverrides {
    pub root: Option<SlotOverride>,
    pub backdrop: Option<SlotOverride>,
    pub drawer_container: Option<SlotOverride>,
    pub drawer_body: Option<SlotOverride>,
    pub close: Option<SlotOverride>,
}

impl DrawerOverrides {
    pub fn get(&self, slot: Slot) -> Option<&SlotOverride> {
        match slot {
            Slot::Root => self.root.as_ref(),
            Slot::Backdrop => self.backdrop.as_ref(),
            Slot::DrawerContainer => self.drawer_container.as_ref(),
            Slot::DrawerBody => self.drawer_body.as_ref(),
            Slot::Close => self.close.as_ref(),
        }
    }

    pub fn set(&mut self, slot: Slot, ovr: Option<SlotOverride>) {
        let field = match slot {
            Slot::Root => &mut self.root,
            Slot::Backdrop => &mut self.backdrop,
            Slot::DrawerContainer => &mut self.drawer_container,
            Slot::DrawerBody => &mut self.drawer_body,
            Slot::Close => &mut self.close,
        };
        *field = ovr;
    }

    pub fn with(mut self, slot: Slot, ovr: SlotOverride) -> Self {
        self.set(slot, Some(ovr));
        self
    }
}

/// A slot ready to render: the component to use, its merged props, and the events the host
/// must route back through [`crate::Drawer::dispatch`].
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSlot {
    pub slot: Slot,
    pub component: Cow<'static, str>,
    pub props: BTreeMap<Cow<'static, str>, PropValue>,
    pub events: Vec<SlotEventKind>,
}

impl ResolvedSlot {
    pub fn prop(&self, key: &str) -> Option<&PropValue> {
        self.props.get(key)
    }

    pub fn listens(&self, kind: SlotEventKind) -> bool {
        self.events.contains(&kind)
    }
}

impl SharedProps {
    /// The shared flags as slot props.
    pub fn to_props(&self) -> BTreeMap<Cow<'static, str>, PropValue> {
        let mut props = BTreeMap::new();
        props.insert(Cow::Borrowed("animating"), PropValue::Bool(self.animating));
        props.insert(Cow::Borrowed("visible"), PropValue::Bool(self.visible));
        props.insert(Cow::Borrowed("open"), PropValue::Bool(self.open));
        props.insert(Cow::Borrowed("size"), PropValue::from(self.size.as_str()));
        props.insert(Cow::Borrowed("closeable"), PropValue::Bool(self.closeable));
        props.insert(Cow::Borrowed("anchor"), PropValue::from(self.anchor.as_str()));
        props.insert(
            Cow::Borrowed("focus_visible"),
            PropValue::Bool(self.focus_visible),
        );
        props.insert(
            Cow::Borrowed("show_backdrop"),
            PropValue::Bool(self.show_backdrop),
        );
        props
    }
}

/// Merges, in increasing precedence: shared flags, the drawer's own slot props, then the
/// override's props. Events are the union of the drawer's and the override's.
pub(crate) fn resolve_slot(
    slot: Slot,
    shared: &SharedProps,
    own_props: &[(&'static str, PropValue)],
    own_events: &[SlotEventKind],
    ovr: Option<&SlotOverride>,
) -> ResolvedSlot {
    let mut props = shared.to_props();
    for (k, v) in own_props {
        props.insert(Cow::Borrowed(*k), v.clone());
    }

    let mut events: Vec<SlotEventKind> = own_events.to_vec();
    let mut component = Cow::Borrowed(slot.default_component());

    if let Some(ovr) = ovr {
        if let Some(c) = &ovr.component {
            component = c.clone();
        }
        for (k, v) in &ovr.props {
            props.insert(k.clone(), v.clone());
        }
        events.extend(ovr.handlers.iter().map(|(k, _)| *k));
    }
    events.sort_unstable();
    events.dedup();

    ResolvedSlot {
        slot,
        component,
        props,
        events,
    }
}
