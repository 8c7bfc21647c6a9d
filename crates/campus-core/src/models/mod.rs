//! Read-only views over externally owned records.
//!
//! The engine never loads these itself — the request layer materializes
//! them (clubs, registrations, the event catalog) and passes them in.

mod activity;
mod club;
mod event;

pub use activity::UserActivity;
pub use club::ClubProfile;
pub use event::EventRecord;
