//! Core business logic - framework-agnostic reads and the hotel eligibility gate.
//!
//! Nothing in here knows about HTTP. Every function takes the database handle
//! explicitly and returns [`crate::errors::Result`].

/// Eligibility gate combined with hotel lookups
pub mod availability;
/// Enrollment lookups
pub mod enrollment;
/// The enrollment → ticket → ticket type decision
pub mod eligibility;
/// Hotel and room lookups
pub mod hotel;
/// Session token lookups
pub mod session;
/// Ticket and ticket type lookups
pub mod ticket;
