use overlay::{Drawer, DrawerHost, DrawerOptions, Locale, RenderPlan};

use crate::{Easing, PanelTransition};

/// A clock-driven wrapper around [`overlay::Drawer`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `mount` / `unmount` from their attach/detach hooks
/// - `set_open` when the open flag changes
/// - `tick(now_ms)` once per animation frame
///
/// Each tick is one frame boundary followed by due timers, so a deferred show fires on the
/// tick after `set_open(true, ..)` and the close delay is measured against `now_ms`. The
/// panel transition follows the drawer's `visible` flag; hosts without CSS transitions can
/// sample it with [`progress`](Self::progress).
pub struct DrawerController<H: DrawerHost> {
    drawer: Drawer<H>,
    transition: PanelTransition,
}

impl<H: DrawerHost> DrawerController<H> {
    /// The transition lasts `close_delay_ms`, so the panel is fully off-screen when the
    /// content is dropped. With `animate = false` it jumps.
    pub fn new(options: DrawerOptions, host: H) -> Self {
        let transition = if options.animate {
            PanelTransition::new(options.close_delay_ms, Easing::default())
        } else {
            PanelTransition::instant()
        };
        Self::with_transition(Drawer::new(options, host), transition)
    }

    pub fn with_transition(drawer: Drawer<H>, transition: PanelTransition) -> Self {
        Self { drawer, transition }
    }

    pub fn drawer(&self) -> &Drawer<H> {
        &self.drawer
    }

    pub fn drawer_mut(&mut self) -> &mut Drawer<H> {
        &mut self.drawer
    }

    pub fn into_drawer(self) -> Drawer<H> {
        self.drawer
    }

    pub fn transition(&self) -> &PanelTransition {
        &self.transition
    }

    pub fn mount(&mut self, now_ms: u64) {
        self.drawer.mount(now_ms);
    }

    /// Detaches the drawer; the panel snaps closed so a remount slides in again.
    pub fn unmount(&mut self) {
        self.drawer.unmount();
        self.transition.snap(false);
    }

    pub fn set_open(&mut self, is_open: bool, now_ms: u64) {
        atrace!(is_open, now_ms, "DrawerController::set_open");
        self.drawer.set_open(is_open, now_ms);
        self.sync_transition(now_ms);
    }

    /// Advances the drawer by one frame. Returns `true` if `visible` changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let shown = self.drawer.frame();
        let hidden = self.drawer.tick(now_ms);
        if shown || hidden {
            adebug!(
                now_ms,
                visible = self.drawer.is_visible(),
                "DrawerController: visibility changed"
            );
        }
        self.sync_transition(now_ms);
        shown || hidden
    }

    /// Target of the panel transition: open while the flag is set, closed otherwise.
    ///
    /// The panel starts sliding out as soon as the flag drops; `visible` only gates whether
    /// content is rendered at all.
    fn sync_transition(&mut self, now_ms: u64) {
        let target = self.drawer.is_open() && self.drawer.is_visible();
        self.transition.set_visible(target, now_ms);
    }

    /// Panel progress at `now_ms`: 0 closed, 1 open.
    pub fn progress(&self, now_ms: u64) -> f32 {
        self.transition.progress(now_ms)
    }

    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.transition.is_running(now_ms)
    }

    /// Whether the host must keep ticking every frame.
    pub fn needs_frame(&self, now_ms: u64) -> bool {
        self.drawer.has_pending_frame() || self.is_animating(now_ms)
    }

    /// When the host must tick again if it stops its frame loop; `None` when idle.
    ///
    /// Returns `now_ms` while frames are needed, otherwise the close deadline.
    pub fn next_wakeup_ms(&self, now_ms: u64) -> Option<u64> {
        if self.needs_frame(now_ms) {
            return Some(now_ms);
        }
        self.drawer.next_deadline_ms()
    }

    pub fn render(&self, locale: &Locale) -> RenderPlan {
        self.drawer.render(locale)
    }
}

impl<H: DrawerHost + core::fmt::Debug> core::fmt::Debug for DrawerController<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DrawerController")
            .field("drawer", &self.drawer)
            .field("transition", &self.transition)
            .finish()
    }
}
