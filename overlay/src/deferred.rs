use alloc::vec::Vec;
use core::mem;

/// Identifies a scheduled deferred action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskId(u64);

impl TaskId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// When a deferred action becomes due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Deferral {
    /// On the next animation-frame boundary (see [`DeferredQueue::run_frame`]).
    NextFrame,
    /// After the given number of milliseconds.
    Timeout(u64),
}

#[derive(Clone, Debug)]
struct Timer<A> {
    id: TaskId,
    due_ms: u64,
    action: A,
}

/// A queue of cancellable deferred actions, driven by the host's frame loop and clock.
///
/// This stands in for `requestAnimationFrame`/`setTimeout`: nothing fires on its own. The
/// adapter calls [`run_frame`](Self::run_frame) at each frame boundary and
/// [`run_timers`](Self::run_timers) with the current time.
///
/// Cancellation is idempotent: cancelling a fired, cancelled, or unknown task is a no-op.
#[derive(Clone, Debug)]
pub struct DeferredQueue<A> {
    next_id: u64,
    frame: Vec<(TaskId, A)>,
    timers: Vec<Timer<A>>,
}

impl<A> Default for DeferredQueue<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> DeferredQueue<A> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            frame: Vec::new(),
            timers: Vec::new(),
        }
    }

    pub fn schedule(&mut self, now_ms: u64, deferral: Deferral, action: A) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        match deferral {
            Deferral::NextFrame => self.frame.push((id, action)),
            Deferral::Timeout(delay_ms) => self.timers.push(Timer {
                id,
                due_ms: now_ms.saturating_add(delay_ms),
                action,
            }),
        }
        otrace!(id = id.0, ?deferral, "DeferredQueue::schedule");
        id
    }

    /// Cancels a pending task. Returns `true` if something was removed.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        if let Some(pos) = self.frame.iter().position(|(t, _)| *t == id) {
            self.frame.remove(pos);
            return true;
        }
        if let Some(pos) = self.timers.iter().position(|t| t.id == id) {
            self.timers.remove(pos);
            return true;
        }
        false
    }

    /// Cancels everything. Returns the number of tasks removed.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.frame.len() + self.timers.len();
        self.frame.clear();
        self.timers.clear();
        n
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.frame.iter().any(|(t, _)| *t == id) || self.timers.iter().any(|t| t.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.frame.is_empty() && self.timers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frame.len() + self.timers.len()
    }

    pub fn has_frame_work(&self) -> bool {
        !self.frame.is_empty()
    }

    /// The earliest timer deadline, if any. Frame tasks are not included.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.timers.iter().map(|t| t.due_ms).min()
    }

    /// Fires every frame task queued before this call, in scheduling order.
    ///
    /// Tasks scheduled from inside `emit` land on the following frame.
    pub fn run_frame(&mut self, emit: &mut dyn FnMut(TaskId, A)) -> usize {
        let batch = mem::take(&mut self.frame);
        let n = batch.len();
        for (id, action) in batch {
            emit(id, action);
        }
        n
    }

    /// Fires every timer whose deadline is `<= now_ms`, ordered by deadline then by
    /// scheduling order.
    pub fn run_timers(&mut self, now_ms: u64, emit: &mut dyn FnMut(TaskId, A)) -> usize {
        if !self.timers.iter().any(|t| t.due_ms <= now_ms) {
            return 0;
        }
        let (mut due, pending): (Vec<_>, Vec<_>) = mem::take(&mut self.timers)
            .into_iter()
            .partition(|t| t.due_ms <= now_ms);
        self.timers = pending;
        due.sort_by_key(|t| (t.due_ms, t.id));
        let n = due.len();
        for t in due {
            emit(t.id, t.action);
        }
        n
    }
}
