//! Roster: a terminal admin view over a member roster.
//!
//! The roster is loaded once from a JSON file or stdin, then browsed in
//! pages of ten with search, multi-select, in-place editing and deletion.
//!
//! This is the library root. It follows a Pure Core / Impure Shell split:
//! [`state`] holds every collection operation with no I/O, while [`view`]
//! owns the terminal and maps keys onto those operations.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
