//! Log target definitions for the [`tracing`] crate, for use in macros like [`tracing::info`]
//!
//! Each target is prefixed with the name of the crate that invoked the macro,
//! so `boxray_ui` can reuse this to declare its own targets.

#[macro_export]
macro_rules! tracing_targets {
    {$( $name:ident $(=$val:expr)? ),* $(,)?} => {
        $( $crate::tracing_targets!(@value $name $(=$val)? ); )*
    };

    (@value $name:ident = $val:expr) => {pub const $name: &'static str = concat!(env!("CARGO_PKG_NAME"), "::", $val);};
    (@value $name:ident)             => {$crate::tracing_targets!(@value $name = stringify!($name));};
}
