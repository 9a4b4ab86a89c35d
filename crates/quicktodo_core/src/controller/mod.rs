//! Gesture-to-action translation and render projection.
//!
//! # Responsibility
//! - Own transient UI-only state: text buffers, id counter, edit mode.
//! - Keep the store unaware of gestures and the surface unaware of actions.
//!
//! # Invariants
//! - At most one task is in edit mode at any time.
//! - The session never holds an edit reference to an id absent from the
//!   store.

pub mod intent;
pub mod session;
