//! Notice Engine: resignation notice and leave reconciliation
//!
//! This crate works out an employee's official last working day from the date
//! their resignation notice was accepted and their contractual notice term,
//! offsets any unserved notice against their leave balance, and places the
//! remaining leave either inside the notice period or after the last day.
//! Working days honour the employee's rest days and a jurisdiction's public
//! holidays, with holidays falling on rest days moved to the next working day.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod documents;
pub mod error;
pub mod models;
