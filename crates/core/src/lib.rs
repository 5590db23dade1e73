//! Core filter logic for the department report board.
//!
//! This crate holds the pure filter state machine with no web dependencies.
//! The only I/O seam is the [`lookup::FilterLookup`] trait.
//!
//! # Modules
//!
//! - `filters` - Filter state, normalization and unit-to-operator narrowing
//! - `lookup` - Site lookup contract and its wire types
//! - `session` - Action dispatch and stale lookup handling

pub mod filters;
pub mod lookup;
pub mod session;
