//! Inert probe for targets without a native state query.
//!
//! This is load-bearing degraded behavior, not an error path: unsupported
//! builds stay linkable and every operation is a well-defined no-op. Queries
//! report nothing pressed, refreshes do nothing, and nothing ever panics.

use keypoll_core::{ButtonMask, Key};

use super::StateProbe;
use crate::handle::NativeHandleSource;

/// The do-nothing probe selected on unsupported targets.
#[derive(Debug, Default)]
pub struct InertProbe;

impl StateProbe for InertProbe {
    fn refresh_keys(&mut self, _target: &dyn NativeHandleSource) {}

    fn refresh_buttons(&mut self, _target: &dyn NativeHandleSource) {}

    fn is_key_pressed(&self, _key: Key) -> bool {
        false
    }

    fn pressed_keys(&self) -> Vec<Key> {
        Vec::new()
    }

    fn is_button_pressed(&self, _button: ButtonMask) -> bool {
        false
    }

    fn button_mask(&self) -> ButtonMask {
        ButtonMask::NONE
    }
}
