//! Core derived-view computations - framework-agnostic statistics over the
//! store's collections.
//!
//! Every function in this module tree is pure and stateless: it reads the
//! collections it is given, returns structured data, and caches nothing.
//! Identical inputs produce identical outputs; wherever "now" matters it is an
//! explicit argument rather than a hidden clock read, so views are fully
//! deterministic under test.

/// Dashboard aggregates - revenue, upcoming work, top clients
pub mod dashboard;
/// Referral aggregates - conversion rate, referral value, top referrers
pub mod referral;
/// Display formatting for the dashboard report
pub mod report;
/// Roster views - client search, status groupings, counter reconciliation
pub mod roster;
