//! Domain model for the to-do screen.
//!
//! # Responsibility
//! - Define the canonical task record held by the store and rendered
//!   by the surface.
//!
//! # Invariants
//! - Every task is identified by a session-unique `TaskId`.
//! - Deletion is hard removal; a removed id is simply never handed out again.

pub mod task;
