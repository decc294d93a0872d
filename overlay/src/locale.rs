use alloc::borrow::Cow;

/// Localized strings consumed by the overlay components.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Locale {
    pub drawer: DrawerLocale,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawerLocale {
    /// Accessible label of the close control.
    pub close: Cow<'static, str>,
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl Default for DrawerLocale {
    fn default() -> Self {
        Self {
            close: Cow::Borrowed("Close"),
        }
    }
}

impl Locale {
    pub fn en_us() -> Self {
        Self {
            drawer: DrawerLocale::default(),
        }
    }

    pub fn with_drawer_close(mut self, close: impl Into<Cow<'static, str>>) -> Self {
        self.drawer.close = close.into();
        self
    }
}
