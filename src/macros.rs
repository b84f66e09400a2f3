#[cfg(feature = "tracing")]
macro_rules! sptrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "scrollspy", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sptrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! spdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "scrollspy", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! spdebug {
    ($($tt:tt)*) => {};
}
