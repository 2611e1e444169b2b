//! Console logging
//!
//! On wasm32 messages go to the browser console through `web_sys::console`.
//! Native builds have no console bindings, so the macro compiles to nothing
//! there; the arguments are still type-checked.

/// Format a message and write it to the browser console.
///
/// ```rust
/// use sandfall_engine::engine_log;
///
/// engine_log!("world created: {}x{}", 320, 180);
/// ```
#[macro_export]
macro_rules! engine_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::utils::log::console_log(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = || format!($($arg)*);
        }
    }};
}

/// Same as [`engine_log!`] but routed to `console.warn`.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::utils::log::console_warn(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = || format!($($arg)*);
        }
    }};
}

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub fn console_warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}
