//! Native handle resolution, supplied by the host.
//!
//! The probes never open their own display or window connections; the host
//! owns those and lends the raw handles through [`NativeHandleSource`]. Only
//! the X11 probe actually reads them — the Windows and macOS state queries
//! are process-independent — but the seam is platform-neutral so one host
//! window type can serve every build.

/// Which native handle a probe is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// The display/connection handle (X11 `Display*`).
    Display,
    /// The window handle (X11 `Window`).
    Window,
}

/// Resolves a host window to the raw native handles the platform probes
/// need.
///
/// Returning `0` means the handle is unavailable; the affected refresh then
/// degrades to an empty snapshot instead of failing. Implementations must
/// keep any returned pointer valid for the duration of the refresh call that
/// requested it.
pub trait NativeHandleSource {
    /// Returns the requested native handle, or `0` if unavailable.
    fn native_handle(&self, kind: HandleKind) -> usize;
}

/// Pre-resolved raw handles, for hosts that already hold them.
///
/// `RawHandles::default()` carries no handles at all, which is sufficient on
/// the platforms whose probes never read them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawHandles {
    /// Display/connection handle, or `0`.
    pub display: usize,
    /// Window handle, or `0`.
    pub window: usize,
}

impl NativeHandleSource for RawHandles {
    fn native_handle(&self, kind: HandleKind) -> usize {
        match kind {
            HandleKind::Display => self.display,
            HandleKind::Window => self.window,
        }
    }
}
