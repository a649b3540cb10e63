//! Waitlist Admin
//!
//! Terminal dashboard for reviewing service provider waitlist entries:
//! filter, search, sort, and page through providers, select rows, and
//! acknowledge onboard/reject/notes actions from a detail view.
//!
//! Pure core (`model`, `query`, `state`) with an impure shell (`source`,
//! `config`, `logging`, `view`).

pub mod config;
pub mod logging;
pub mod model;
pub mod query;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_fixtures;
