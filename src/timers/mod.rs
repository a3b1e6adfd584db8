//! Cancellable scheduled tasks on a virtual clock.
//!
//! The countdown tick and the mismatch flip-back are both tasks on a
//! `Scheduler`. The active round keeps their `TaskId` handles and cancels
//! them on reset or teardown so they cannot touch a superseded round.

pub mod scheduler;

pub use scheduler::{Scheduler, TaskId};
