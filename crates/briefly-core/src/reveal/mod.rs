//! The daily reveal subsystem: phase rules, the coordinator, and the
//! midnight scheduler.

mod coordinator;
mod machine;
mod midnight;

pub use coordinator::{Coordinator, CoordinatorConfig, Countdowns};
pub use machine::{resolve_phase, Phase};
pub use midnight::{MidnightScheduler, MidnightTick};
