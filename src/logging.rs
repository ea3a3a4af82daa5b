//! Console Logging
//!
//! Browser builds write to the devtools console. Native builds (tests)
//! go through `tracing`.

pub fn log_info(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&message.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("{}", message);
    }
}

pub fn log_warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::warn_1(&message.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("{}", message);
    }
}

pub fn log_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::error_1(&message.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::error!("{}", message);
    }
}
