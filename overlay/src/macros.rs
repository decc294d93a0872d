#[cfg(feature = "tracing")]
macro_rules! otrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "overlay", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! otrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! odebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "overlay", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! odebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! owarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "overlay", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! owarn {
    ($($tt:tt)*) => {};
}
