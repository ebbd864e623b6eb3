//! # Initialization Gate
//!
//! A persisted flag recording that the default prompts have been seeded on this installation.
//! Once set it is never cleared by the application.
//!
//! Only the exact [`INITIALIZED_MARKER`] counts as set. Any other stored value is read as "not
//! yet run", which at worst triggers another (harmless, idempotent) seeding pass.

use crate::storage::FlagStore;
use tracing::debug;

pub const PROMPTS_INITIALIZED_KEY: &str = "__prompts_initialed";
pub const INITIALIZED_MARKER: &str = "1";

pub struct InitializationGate<'a, S: FlagStore> {
    store: &'a S,
}

impl<'a, S: FlagStore> InitializationGate<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn has_run(&self) -> Result<bool, S::Error> {
        let value = self.store.get_flag(PROMPTS_INITIALIZED_KEY)?;
        Ok(value.as_deref() == Some(INITIALIZED_MARKER))
    }

    pub fn mark_run(&self) -> Result<(), S::Error> {
        debug!(key = PROMPTS_INITIALIZED_KEY, "marking default prompts as seeded");
        self.store.set_flag(PROMPTS_INITIALIZED_KEY, INITIALIZED_MARKER)
    }
}

/// Snapshot of the gate, read once at startup and handed to
/// [`Promptbar::initialize`](crate::promptbar::Promptbar::initialize).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedingState {
    pub has_run: bool,
}

impl SeedingState {
    pub fn load<S: FlagStore>(gate: &InitializationGate<'_, S>) -> Result<SeedingState, S::Error> {
        Ok(SeedingState {
            has_run: gate.has_run()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::convert::Infallible;

    #[derive(Default)]
    struct MockFlags {
        flags: RefCell<HashMap<String, String>>,
        writes: RefCell<usize>,
    }

    impl FlagStore for MockFlags {
        type Error = Infallible;

        fn get_flag(&self, key: &str) -> Result<Option<String>, Infallible> {
            Ok(self.flags.borrow().get(key).cloned())
        }

        fn set_flag(&self, key: &str, value: &str) -> Result<(), Infallible> {
            *self.writes.borrow_mut() += 1;
            self.flags.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_has_run_defaults_to_false() {
        let flags = MockFlags::default();
        let gate = InitializationGate::new(&flags);
        assert_eq!(Ok(false), gate.has_run());
    }

    #[test]
    fn test_mark_run() {
        let flags = MockFlags::default();
        let gate = InitializationGate::new(&flags);

        gate.mark_run().unwrap();
        assert_eq!(Ok(true), gate.has_run());
        assert_eq!(
            Some(&INITIALIZED_MARKER.to_string()),
            flags.flags.borrow().get(PROMPTS_INITIALIZED_KEY)
        );
    }

    #[test]
    fn test_mark_run_is_idempotent() {
        let flags = MockFlags::default();
        let gate = InitializationGate::new(&flags);

        gate.mark_run().unwrap();
        gate.mark_run().unwrap();
        assert_eq!(Ok(true), gate.has_run());
        assert_eq!(1, flags.flags.borrow().len());
    }

    #[test]
    fn test_malformed_value_reads_as_not_run() {
        let flags = MockFlags::default();
        for value in ["true", "0", "", " 1", "yes"] {
            flags.set_flag(PROMPTS_INITIALIZED_KEY, value).unwrap();
            let gate = InitializationGate::new(&flags);
            assert_eq!(Ok(false), gate.has_run(), "value {:?} should not count", value);
        }
    }

    #[test]
    fn test_seeding_state_load() {
        let flags = MockFlags::default();
        let gate = InitializationGate::new(&flags);
        assert_eq!(Ok(SeedingState { has_run: false }), SeedingState::load(&gate));

        gate.mark_run().unwrap();
        assert_eq!(Ok(SeedingState { has_run: true }), SeedingState::load(&gate));
        assert_eq!(1, *flags.writes.borrow());
    }
}
