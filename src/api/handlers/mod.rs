/// Liveness probe
pub mod health;
/// Hotel listing and hotel detail
pub mod hotels;
