//! Durable key/value preference storage and the recent files list built on it.

pub mod prefs;
pub mod recents;
