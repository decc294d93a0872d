/// A time-based interpolation between two progress values.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.easing.sample(t)
    }

    /// Restarts from the current sample toward `new_to`.
    ///
    /// The duration is scaled by the remaining distance, so reversing halfway through takes
    /// half of `full_duration_ms`.
    pub fn retarget(&mut self, now_ms: u64, new_to: f32, full_duration_ms: u64) {
        let cur = self.sample(now_ms);
        let delta = new_to - cur;
        let distance = (if delta < 0.0 { -delta } else { delta }).min(1.0);
        let duration_ms = (full_duration_ms as f32 * distance) as u64;
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.easing);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    #[default]
    EaseInOutCubic,
}

impl Easing {
    /// Maps `t` in `0..=1` onto the curve. Every curve fixes both endpoints.
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic if t < 0.5 => 4.0 * t * t * t,
            Self::EaseInOutCubic => {
                let u = 2.0 - 2.0 * t;
                1.0 - u * u * u / 2.0
            }
        }
    }
}

/// Progress of the drawer panel between closed (`0.0`) and open (`1.0`).
///
/// For hosts without CSS transitions: follow the drawer's `visible` flag and sample once per
/// frame. A flip mid-flight reverses from the current position.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelTransition {
    tween: Tween,
    full_duration_ms: u64,
    animate: bool,
}

impl PanelTransition {
    pub fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            tween: Tween::new(0.0, 0.0, 0, 1, easing),
            full_duration_ms: duration_ms,
            animate: true,
        }
    }

    /// A transition that jumps straight to its target.
    pub fn instant() -> Self {
        let mut t = Self::new(0, Easing::Linear);
        t.animate = false;
        t
    }

    pub fn duration_ms(&self) -> u64 {
        self.full_duration_ms
    }

    pub fn easing(&self) -> Easing {
        self.tween.easing
    }

    pub fn target(&self) -> f32 {
        self.tween.to
    }

    /// Points the transition at open or closed.
    pub fn set_visible(&mut self, visible: bool, now_ms: u64) {
        let to = if visible { 1.0 } else { 0.0 };
        if to == self.tween.to {
            return;
        }
        if self.animate {
            self.tween.retarget(now_ms, to, self.full_duration_ms);
        } else {
            self.tween = Tween::new(to, to, now_ms, 1, self.tween.easing);
        }
    }

    /// Jumps to open or closed without animating.
    pub fn snap(&mut self, visible: bool) {
        let to = if visible { 1.0 } else { 0.0 };
        self.tween = Tween::new(to, to, self.tween.start_ms, 1, self.tween.easing);
    }

    pub fn progress(&self, now_ms: u64) -> f32 {
        self.tween.sample(now_ms)
    }

    pub fn is_running(&self, now_ms: u64) -> bool {
        self.tween.from != self.tween.to && !self.tween.is_done(now_ms)
    }
}
