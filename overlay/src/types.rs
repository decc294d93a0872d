/// What triggered a user-driven close request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum CloseSource {
    Escape,
    Backdrop,
    CloseButton,
}

impl CloseSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Escape => "escape",
            Self::Backdrop => "backdrop",
            Self::CloseButton => "closeButton",
        }
    }
}

/// Payload of the close notification sent to the host.
///
/// With `feature = "serde"`, this serializes as `{"closeSource": "escape"}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CloseEvent {
    pub close_source: CloseSource,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum DrawerSize {
    #[default]
    Default,
    Full,
    Auto,
}

impl DrawerSize {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Full => "full",
            Self::Auto => "auto",
        }
    }
}

/// The screen edge the drawer slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum DrawerAnchor {
    Left,
    #[default]
    Right,
    Top,
    Bottom,
}

impl DrawerAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// Desired placement of a tethered element relative to its anchor.
///
/// The engine treats this as a recommendation and may flip it to avoid overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Placement {
    #[default]
    Auto,
    TopLeft,
    Top,
    TopRight,
    RightTop,
    Right,
    RightBottom,
    BottomRight,
    Bottom,
    BottomLeft,
    LeftBottom,
    Left,
    LeftTop,
}

impl Placement {
    pub const ALL: [Self; 13] = [
        Self::Auto,
        Self::TopLeft,
        Self::Top,
        Self::TopRight,
        Self::RightTop,
        Self::Right,
        Self::RightBottom,
        Self::BottomRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::LeftBottom,
        Self::Left,
        Self::LeftTop,
    ];

    /// The engine's placement string: a trailing `Top`/`Left` becomes `-start`, a trailing
    /// `Right`/`Bottom` becomes `-end`.
    pub fn to_engine(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::TopLeft => "top-start",
            Self::Top => "top",
            Self::TopRight => "top-end",
            Self::RightTop => "right-start",
            Self::Right => "right",
            Self::RightBottom => "right-end",
            Self::BottomRight => "bottom-end",
            Self::Bottom => "bottom",
            Self::BottomLeft => "bottom-start",
            Self::LeftBottom => "left-end",
            Self::Left => "left",
            Self::LeftTop => "left-start",
        }
    }

    /// Parses an engine placement string. `auto-start`/`auto-end` collapse to `Auto`.
    pub fn from_engine(s: &str) -> Option<Self> {
        if s.starts_with("auto") {
            return Some(Self::Auto);
        }
        Self::ALL.into_iter().find(|p| p.to_engine() == s)
    }
}

/// A measured bounding size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Raw engine coordinates (`x` horizontal, `y` vertical).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawOffset {
    pub x: f64,
    pub y: f64,
}

impl RawOffset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A normalized `{top, left}` pair, in whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub top: i32,
    pub left: i32,
}

impl Offset {
    pub const ZERO: Self = Self { top: 0, left: 0 };

    pub fn new(top: i32, left: i32) -> Self {
        Self { top, left }
    }

    /// Floors raw engine coordinates. Non-finite coordinates become `0`.
    pub fn from_raw(raw: RawOffset) -> Self {
        Self {
            top: floor_to_i32(raw.y),
            left: floor_to_i32(raw.x),
        }
    }
}

impl From<RawOffset> for Offset {
    fn from(raw: RawOffset) -> Self {
        Self::from_raw(raw)
    }
}

/// Offsets handed to the tether's update callback. `arrow` is `{0, 0}` when the engine
/// reported no arrow data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedOffsets {
    pub popper: Offset,
    pub arrow: Offset,
}

/// Raw placement state reported by the positioning engine on every recompute.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementState {
    /// The placement the engine settled on (may differ from the requested one).
    pub placement: Placement,
    pub popper_offsets: RawOffset,
    pub arrow: Option<RawOffset>,
}

impl PlacementState {
    pub fn normalize(&self) -> NormalizedOffsets {
        NormalizedOffsets {
            popper: Offset::from_raw(self.popper_offsets),
            arrow: self.arrow.map(Offset::from_raw).unwrap_or(Offset::ZERO),
        }
    }
}

fn floor_to_i32(v: f64) -> i32 {
    if !v.is_finite() {
        return 0;
    }
    // `as` saturates and truncates toward zero.
    let t = v as i32;
    if (t as f64) > v { t.saturating_sub(1) } else { t }
}

