// Dashboard extras kept next to the progress ledger in the same local store:
// activity feed, daily visit streak, achievements and theme preference.

pub mod achievements;
pub mod activity;
pub mod handlers;
pub mod streak;
pub mod theme;
