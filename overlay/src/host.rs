use alloc::string::String;

/// The host-side handles a [`crate::Drawer`] mutates outside its own state.
///
/// Implemented by the UI adapter. For the DOM this is the mount container's inline
/// `overflow` style plus the drawer root's `scrollTop`.
pub trait DrawerHost {
    /// Current inline `overflow` of the mount container; empty when unset.
    fn mount_overflow(&self) -> String;

    /// Writes the mount container's inline `overflow`. An empty value clears it.
    fn set_mount_overflow(&mut self, value: &str);

    /// Resets the panel root's scroll offset to zero.
    ///
    /// Called at the start of every open transition. No-op by default and when the root is
    /// not attached yet.
    fn reset_panel_scroll(&mut self) {}
}

impl<H: DrawerHost + ?Sized> DrawerHost for &mut H {
    fn mount_overflow(&self) -> String {
        (**self).mount_overflow()
    }

    fn set_mount_overflow(&mut self, value: &str) {
        (**self).set_mount_overflow(value);
    }

    fn reset_panel_scroll(&mut self) {
        (**self).reset_panel_scroll();
    }
}
