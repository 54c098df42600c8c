//! Application state held for the lifetime of one frontend instance.
//!
//! The store is an explicitly owned value: the application context creates it
//! at start and hands out `&`/`&mut` borrows. Nothing is persisted; dropping the
//! context drops the state.

pub mod participant;

pub use participant::{Participant, ParticipantStore};
