//! Takes one snapshot of the global input state and prints it.
//!
//! On Linux this opens the X display named by `$DISPLAY` and polls it; on
//! Windows and macOS the state queries are system-global and need no
//! handles. Try holding keys or mouse buttons while it runs:
//!
//! ```bash
//! RUST_LOG=debug cargo run --package keypoll --example poll_once
//! ```

use anyhow::Result;
use keypoll::{InputStateCache, RawHandles};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let target = host_handles();
    let mut cache = InputStateCache::new();
    cache.refresh_all(&target);

    println!("pressed keys: {:?}", cache.pressed_keys());
    println!("button mask:  {:?}", cache.mouse_button_mask());

    Ok(())
}

#[cfg(target_os = "linux")]
fn host_handles() -> RawHandles {
    // SAFETY: XOpenDisplay(null) connects to $DISPLAY; a null return is
    // handled and degrades to an empty snapshot. The display stays open for
    // the life of the process.
    unsafe {
        let display = x11::xlib::XOpenDisplay(std::ptr::null());
        let window = if display.is_null() {
            0
        } else {
            x11::xlib::XDefaultRootWindow(display)
        };
        RawHandles {
            display: display as usize,
            window: window as usize,
        }
    }
}

#[cfg(not(target_os = "linux"))]
fn host_handles() -> RawHandles {
    // The Windows and macOS probes never read the handles.
    RawHandles::default()
}
