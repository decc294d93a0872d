use alloc::string::String;

use crate::DrawerHost;

/// The overflow value written while a lock is held.
pub const LOCKED_OVERFLOW: &str = "hidden";

/// Scroll lock on a drawer's mount container.
///
/// `lock` remembers the container's previous inline overflow and writes
/// [`LOCKED_OVERFLOW`]; `unlock` restores it. Both are idempotent, so one open transition
/// locks exactly once and one close (or unmount) unlocks exactly once no matter how often
/// they are repeated in between.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollLock {
    saved: Option<String>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.saved.is_some()
    }

    /// The overflow value that will be restored on unlock.
    pub fn saved_overflow(&self) -> Option<&str> {
        self.saved.as_deref()
    }

    /// Returns `true` if the lock was acquired by this call.
    pub fn lock<H: DrawerHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.saved.is_some() {
            return false;
        }
        let prev = host.mount_overflow();
        otrace!(prev = prev.as_str(), "ScrollLock::lock");
        self.saved = Some(prev);
        host.set_mount_overflow(LOCKED_OVERFLOW);
        true
    }

    /// Returns `true` if a held lock was released by this call.
    pub fn unlock<H: DrawerHost + ?Sized>(&mut self, host: &mut H) -> bool {
        let Some(prev) = self.saved.take() else {
            return false;
        };
        otrace!(restore = prev.as_str(), "ScrollLock::unlock");
        host.set_mount_overflow(&prev);
        true
    }
}
