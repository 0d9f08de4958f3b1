//! Document-requirement policy engine for event registrations.
//!
//! Given a registration context and an organizer policy, the engine works out
//! which eligibility proofs a participant may submit, which one to pre-select,
//! and whether a submission satisfies the requirement.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
