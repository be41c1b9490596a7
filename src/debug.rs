//! Diagnostic output, off unless `RAYSNAKE_DEBUG` is set in the environment
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);
static INIT: Once = Once::new();

/// Check if diagnostic output is enabled. The environment is consulted
/// once, on first call.
pub fn is_debug_enabled() -> bool {
    INIT.call_once(|| {
        if std::env::var("RAYSNAKE_DEBUG").is_ok() {
            DEBUG_ENABLED.store(true, Ordering::Relaxed);
        }
    });
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Print a diagnostic message to stderr when debug output is enabled
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if $crate::debug::is_debug_enabled() {
            eprintln!($($arg)*);
        }
    };
}
