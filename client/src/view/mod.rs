//! View state machines.
//!
//! Each view owns the state an embedding UI shell renders and exposes
//! the transitions user interaction triggers. Views never navigate or
//! prompt by themselves: navigation comes back as a [`Nav`] value and
//! destructive actions go through an injected [`Confirm`] gate.

pub mod auth;
pub mod dashboard;
pub mod forum;
pub mod material;
pub mod student;
pub mod support;

use std::sync::atomic::{AtomicU64, Ordering};

/// Where the shell should take the user next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Home,
    Login,
}

/// A yes/no gate for destructive actions. The shell typically backs this
/// with a modal dialog; tests back it with a closure.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Monotonic counter guarding against stale async completions.
///
/// Every state change that invalidates in-flight work bumps the counter;
/// the completion compares its ticket before applying results.
#[derive(Debug, Default)]
pub struct Generation(AtomicU64);

impl Generation {
    /// Invalidates outstanding tickets and returns the new current one.
    pub fn bump(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn current(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.current() == ticket
    }
}
