use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use overlay::{DrawerAnchor, DrawerHost, NormalizedOffsets, Offset};

/// An in-memory inline style declaration block.
///
/// Works as the mount container of a [`overlay::Drawer`]: every `overflow` write and every
/// panel scroll reset is recorded, so a host can diff against it and tests can assert on it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InlineStyle {
    props: BTreeMap<String, String>,
    overflow_writes: Vec<String>,
    scroll_resets: usize,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.props.get(name).map(String::as_str)
    }

    /// Sets a property. An empty value removes it, like assigning `""` in the DOM.
    pub fn set(&mut self, name: &str, value: &str) {
        if value.is_empty() {
            self.props.remove(name);
        } else {
            self.props.insert(name.to_string(), value.to_string());
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.props.remove(name)
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serializes as a `style` attribute value, properties in name order.
    pub fn to_css_text(&self) -> String {
        let mut out = String::new();
        for (name, value) in self.iter() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push(';');
        }
        out
    }

    /// Every value written to `overflow` through [`DrawerHost`], oldest first.
    pub fn overflow_writes(&self) -> &[String] {
        &self.overflow_writes
    }

    pub fn scroll_resets(&self) -> usize {
        self.scroll_resets
    }
}

impl DrawerHost for InlineStyle {
    fn mount_overflow(&self) -> String {
        self.get("overflow").unwrap_or_default().to_string()
    }

    fn set_mount_overflow(&mut self, value: &str) {
        self.overflow_writes.push(value.to_string());
        self.set("overflow", value);
    }

    fn reset_panel_scroll(&mut self) {
        self.scroll_resets += 1;
    }
}

pub fn px(v: i32) -> String {
    format!("{v}px")
}

fn offset_style(offset: Offset) -> [(&'static str, String); 2] {
    [("top", px(offset.top)), ("left", px(offset.left))]
}

/// `top`/`left` declarations for the floating element.
///
/// Offsets go to `top`/`left` rather than `transform`, which stays free for animations.
pub fn popper_style(offsets: &NormalizedOffsets) -> [(&'static str, String); 2] {
    offset_style(offsets.popper)
}

/// `top`/`left` declarations for the arrow element.
pub fn arrow_style(offsets: &NormalizedOffsets) -> [(&'static str, String); 2] {
    offset_style(offsets.arrow)
}

/// Writes [`popper_style`] into `style`.
pub fn apply_popper_style(style: &mut InlineStyle, offsets: &NormalizedOffsets) {
    for (name, value) in popper_style(offsets) {
        style.set(name, &value);
    }
}

/// Writes [`arrow_style`] into `style`.
pub fn apply_arrow_style(style: &mut InlineStyle, offsets: &NormalizedOffsets) {
    for (name, value) in arrow_style(offsets) {
        style.set(name, &value);
    }
}

/// The panel's `transform` at `progress` (0 closed, 1 open), sliding in from `anchor`.
///
/// Fully open is `none`.
pub fn panel_transform(anchor: DrawerAnchor, progress: f32) -> String {
    let hidden = (1.0 - progress.clamp(0.0, 1.0)) * 100.0;
    if hidden <= 0.0 {
        return "none".to_string();
    }
    match anchor {
        DrawerAnchor::Left => format!("translateX({:.1}%)", -hidden),
        DrawerAnchor::Right => format!("translateX({hidden:.1}%)"),
        DrawerAnchor::Top => format!("translateY({:.1}%)", -hidden),
        DrawerAnchor::Bottom => format!("translateY({hidden:.1}%)"),
    }
}
