//! FFI crate wiring for the Flutter surface.
//!
//! # Responsibility
//! - Re-export the use-case API consumed by generated Dart bindings.

pub mod api;
