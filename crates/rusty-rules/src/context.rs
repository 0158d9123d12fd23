// File: src/context.rs
// Purpose: Optional cross-field state handed to every rule

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::value::FieldValue;

/// Reset callback supplied by the host UI. The flag tells whether the input
/// is still mounted. This crate stores it but never calls it.
pub type ResetHook = Arc<dyn Fn(bool) + Send + Sync>;

/// Field identifier to the current state of that input.
pub type InputsMap = HashMap<String, InputState>;

/// Current state of one input, as seen by rules that need other fields.
#[derive(Clone, Default)]
pub struct InputState {
    pub current_value: FieldValue,
    pub validation_error: Option<String>,
    pub on_reset: Option<ResetHook>,
}

impl InputState {
    pub fn new(current_value: impl Into<FieldValue>) -> Self {
        Self {
            current_value: current_value.into(),
            validation_error: None,
            on_reset: None,
        }
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.validation_error = Some(message.into());
        self
    }

    pub fn with_reset<F>(mut self, hook: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_reset = Some(Arc::new(hook));
        self
    }

    /// Run the host's reset callback, if any.
    pub fn reset(&self, mounted: bool) {
        if let Some(hook) = &self.on_reset {
            hook(mounted);
        }
    }
}

impl fmt::Debug for InputState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputState")
            .field("current_value", &self.current_value)
            .field("validation_error", &self.validation_error)
            .field("on_reset", &self.on_reset.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn test_reset_hook_is_host_driven() {
        let called = Arc::new(AtomicBool::new(false));
        let flag = called.clone();
        let state = InputState::new("secret").with_reset(move |mounted| {
            flag.store(mounted, Ordering::SeqCst);
        });

        assert!(!called.load(Ordering::SeqCst));
        state.reset(true);
        assert!(called.load(Ordering::SeqCst));
    }

    #[test]
    fn test_debug_hides_callback() {
        let state = InputState::new("x").with_error("bad");
        let debug = format!("{:?}", state);
        assert!(debug.contains("validation_error: Some(\"bad\")"));
        assert!(debug.contains("on_reset: false"));
    }
}
