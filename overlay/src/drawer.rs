use alloc::vec::Vec;

use crate::slots::resolve_slot;
use crate::{
    CloseEvent, CloseSource, Deferral, DeferredQueue, DrawerHost, DrawerOptions, DrawerPhase,
    DrawerViewState, FocusLockRequest, LayerRequest, LayeredDrawer, Locale, PropValue,
    RenderPlan, ScrollLock, SharedProps, Slot, SlotEvent, SlotEventKind, TaskId,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DrawerTask {
    Show,
    Hide,
}

/// A headless modal drawer.
///
/// The drawer owns the animation/visibility state and the scroll lock of its mount
/// container. It does not render; the host:
/// - calls `mount`/`unmount` from its attach/detach hooks
/// - calls `set_open` whenever its open flag changes
/// - calls `frame()` at each animation-frame boundary and `tick(now_ms)` from its timer
/// - renders whatever [`render`](Self::render) returns and routes slot events through
///   [`dispatch`](Self::dispatch) and escape presses through [`on_escape`](Self::on_escape)
///
/// Opening defers `visible = true` by one frame so the panel paints in its closed position
/// first and the transition runs. Closing keeps `visible` until `close_delay_ms` elapses so
/// the exit transition can finish before the content is dropped.
pub struct Drawer<H: DrawerHost> {
    options: DrawerOptions,
    host: H,
    is_open: bool,
    attached: bool,
    view: DrawerViewState,
    scroll_lock: ScrollLock,
    tasks: DeferredQueue<DrawerTask>,
    show_task: Option<TaskId>,
    hide_task: Option<TaskId>,
}

impl<H: DrawerHost> Drawer<H> {
    pub fn new(options: DrawerOptions, host: H) -> Self {
        odebug!(
            closeable = options.closeable,
            show_backdrop = options.show_backdrop,
            render_all = options.render_all,
            "Drawer::new"
        );
        Self {
            options,
            host,
            is_open: false,
            attached: false,
            view: DrawerViewState::default(),
            scroll_lock: ScrollLock::new(),
            tasks: DeferredQueue::new(),
            show_task: None,
            hide_task: None,
        }
    }

    pub fn options(&self) -> &DrawerOptions {
        &self.options
    }

    /// Replaces the options. Timing changes apply to the next transition.
    pub fn set_options(&mut self, options: DrawerOptions) {
        self.options = options;
        otrace!(
            closeable = self.options.closeable,
            show_backdrop = self.options.show_backdrop,
            "Drawer::set_options"
        );
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut DrawerOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn view_state(&self) -> DrawerViewState {
        self.view
    }

    pub fn phase(&self) -> DrawerPhase {
        DrawerPhase::derive(self.attached, self.is_open, self.view.visible)
    }

    /// The last open flag seen through `set_open`.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_visible(&self) -> bool {
        self.view.visible
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    /// Whether a deferred show is waiting for the next frame.
    pub fn has_pending_frame(&self) -> bool {
        self.tasks.has_frame_work()
    }

    /// When the pending close finishes, if one is in flight.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.tasks.next_deadline_ms()
    }

    /// Attach hook. Runs the open transition right away if the open flag is already set.
    ///
    /// Also valid after `unmount`.
    pub fn mount(&mut self, now_ms: u64) {
        if self.attached {
            return;
        }
        odebug!(is_open = self.is_open, "Drawer::mount");
        self.attached = true;
        self.view.mounted = true;
        if self.is_open {
            self.did_open(now_ms);
        }
    }

    /// Detach hook: reverts any residual scroll lock, cancels the pending frame and timer,
    /// and drops the animation state. A later `mount` starts from `ClosedHidden`.
    ///
    /// Safe to call when nothing is pending, and more than once.
    pub fn unmount(&mut self) {
        self.scroll_lock.unlock(&mut self.host);
        self.tasks.cancel_all();
        self.show_task = None;
        self.hide_task = None;
        // `mounted` stays set: it records the first attach.
        self.view.visible = false;
        self.view.focus_visible = false;
        if self.attached {
            odebug!("Drawer::unmount");
        }
        self.attached = false;
    }

    /// Applies a change of the host's open flag. Repeating the current value is a no-op.
    ///
    /// Before `mount`, the flag is only recorded.
    pub fn set_open(&mut self, is_open: bool, now_ms: u64) {
        if is_open == self.is_open {
            return;
        }
        self.is_open = is_open;
        if !self.attached {
            return;
        }
        if is_open {
            self.did_open(now_ms);
        } else {
            self.did_close(now_ms);
        }
    }

    fn did_open(&mut self, now_ms: u64) {
        otrace!(now_ms, "Drawer::did_open");
        // Residual scroll can survive from a previous session or a cancelled animation.
        self.host.reset_panel_scroll();
        self.clear_tasks();
        if self.options.show_backdrop {
            self.scroll_lock.lock(&mut self.host);
        }
        self.show_task = Some(
            self.tasks
                .schedule(now_ms, Deferral::NextFrame, DrawerTask::Show),
        );
    }

    fn did_close(&mut self, now_ms: u64) {
        otrace!(now_ms, "Drawer::did_close");
        if let Some(id) = self.show_task.take() {
            self.tasks.cancel(id);
        }
        self.scroll_lock.unlock(&mut self.host);
        if let Some(id) = self.hide_task.take() {
            self.tasks.cancel(id);
        }
        if self.view.visible {
            self.hide_task = Some(self.tasks.schedule(
                now_ms,
                Deferral::Timeout(self.options.close_delay_ms),
                DrawerTask::Hide,
            ));
        }
    }

    fn clear_tasks(&mut self) {
        if let Some(id) = self.show_task.take() {
            self.tasks.cancel(id);
        }
        if let Some(id) = self.hide_task.take() {
            self.tasks.cancel(id);
        }
    }

    /// Animation-frame boundary. Returns `true` if `visible` changed.
    pub fn frame(&mut self) -> bool {
        let mut fired = Vec::new();
        self.tasks
            .run_frame(&mut |id: TaskId, task: DrawerTask| fired.push((id, task)));
        self.apply_tasks(fired)
    }

    /// Fires due timers. Returns `true` if `visible` changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let mut fired = Vec::new();
        self.tasks
            .run_timers(now_ms, &mut |id: TaskId, task: DrawerTask| {
                fired.push((id, task));
            });
        self.apply_tasks(fired)
    }

    fn apply_tasks(&mut self, fired: Vec<(TaskId, DrawerTask)>) -> bool {
        let before = self.view.visible;
        for (id, task) in fired {
            match task {
                DrawerTask::Show => {
                    debug_assert_eq!(self.show_task, Some(id), "stale show task fired");
                    self.show_task = None;
                    self.view.visible = true;
                }
                DrawerTask::Hide => {
                    debug_assert_eq!(self.hide_task, Some(id), "stale hide task fired");
                    self.hide_task = None;
                    self.view.visible = false;
                }
            }
        }
        if before != self.view.visible {
            odebug!(visible = self.view.visible, "Drawer: visibility changed");
            true
        } else {
            false
        }
    }

    /// Sends the close notification when `source` is present.
    ///
    /// Without a source the open flag changed externally and nothing is sent, which keeps
    /// host and drawer from feeding back into each other. The drawer never clears the open
    /// flag itself.
    ///
    /// Returns `true` if `on_close` was invoked.
    pub fn request_close(&mut self, source: Option<CloseSource>) -> bool {
        let Some(close_source) = source else {
            return false;
        };
        let Some(cb) = &self.options.on_close else {
            return false;
        };
        odebug!(source = close_source.as_str(), "Drawer::request_close");
        cb(CloseEvent { close_source });
        true
    }

    /// Escape pressed in the drawer's layer.
    pub fn on_escape(&mut self) -> bool {
        if !self.options.closeable {
            return false;
        }
        self.request_close(Some(CloseSource::Escape))
    }

    /// Backdrop clicked. `on_backdrop_click` fires even when the drawer is not closeable.
    pub fn on_backdrop_click(&mut self) -> bool {
        if let Some(cb) = &self.options.on_backdrop_click {
            cb();
        }
        if !self.options.closeable {
            return false;
        }
        self.request_close(Some(CloseSource::Backdrop))
    }

    pub fn on_close_click(&mut self) -> bool {
        self.request_close(Some(CloseSource::CloseButton))
    }

    /// Focus entered the close control. Only keyboard-visible focus sets the flag.
    pub fn on_focus(&mut self, focus_visible: bool) {
        if focus_visible {
            self.view.focus_visible = true;
        }
    }

    pub fn on_blur(&mut self) {
        self.view.focus_visible = false;
    }

    /// Routes a slot event: the override's handlers run first, then the drawer's own.
    pub fn dispatch(&mut self, slot: Slot, event: SlotEvent) {
        if let Some(ovr) = self.options.overrides.get(slot) {
            ovr.invoke(slot, &event);
        }
        match (slot, event) {
            (Slot::Backdrop, SlotEvent::Click) => {
                self.on_backdrop_click();
            }
            (Slot::Close, SlotEvent::Click) => {
                self.on_close_click();
            }
            (Slot::Close, SlotEvent::Focus { focus_visible }) => self.on_focus(focus_visible),
            (Slot::Close, SlotEvent::Blur) => self.on_blur(),
            _ => {}
        }
    }

    pub fn shared_props(&self) -> SharedProps {
        SharedProps {
            animating: self.options.animate,
            visible: self.view.visible,
            open: self.is_open,
            size: self.options.size,
            closeable: self.options.closeable,
            anchor: self.options.anchor,
            focus_visible: self.view.focus_visible,
            show_backdrop: self.options.show_backdrop,
        }
    }

    /// The rendering policy.
    ///
    /// - mounted and (open or still animating out): [`RenderPlan::Layered`]
    /// - otherwise with `render_all`: [`RenderPlan::Hidden`]
    /// - otherwise: [`RenderPlan::Nothing`]
    pub fn render(&self, locale: &Locale) -> RenderPlan {
        let mounted_and_open = self.attached && (self.is_open || self.view.visible);
        if !mounted_and_open {
            return if self.options.render_all {
                RenderPlan::Hidden
            } else {
                RenderPlan::Nothing
            };
        }

        let shared = self.shared_props();
        let overrides = &self.options.overrides;
        let close_label = locale.drawer.close.clone();

        let close = self.options.closeable.then(|| {
            resolve_slot(
                Slot::Close,
                &shared,
                &[("aria-label", PropValue::Text(close_label.clone()))],
                &[
                    SlotEventKind::Click,
                    SlotEventKind::Focus,
                    SlotEventKind::Blur,
                ],
                overrides.get(Slot::Close),
            )
        });

        RenderPlan::Layered(LayeredDrawer {
            layer: LayerRequest {
                escape_closes: self.options.closeable,
                mount_target: self.options.mount_target.clone(),
            },
            focus_lock: FocusLockRequest {
                return_focus: true,
                auto_focus: self.options.auto_focus,
            },
            root: resolve_slot(
                Slot::Root,
                &shared,
                &[("data-overlay", PropValue::from("drawer"))],
                &[],
                overrides.get(Slot::Root),
            ),
            backdrop: resolve_slot(
                Slot::Backdrop,
                &shared,
                &[],
                &[SlotEventKind::Click],
                overrides.get(Slot::Backdrop),
            ),
            container: resolve_slot(
                Slot::DrawerContainer,
                &shared,
                &[],
                &[],
                overrides.get(Slot::DrawerContainer),
            ),
            body: resolve_slot(
                Slot::DrawerBody,
                &shared,
                &[],
                &[],
                overrides.get(Slot::DrawerBody),
            ),
            close,
            close_label,
        })
    }
}

impl<H: DrawerHost> Drop for Drawer<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<H: DrawerHost + core::fmt::Debug> core::fmt::Debug for Drawer<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Drawer")
            .field("options", &self.options)
            .field("host", &self.host)
            .field("is_open", &self.is_open)
            .field("attached", &self.attached)
            .field("view", &self.view)
            .field("scroll_lock", &self.scroll_lock)
            .field("pending_tasks", &self.tasks.len())
            .finish()
    }
}
