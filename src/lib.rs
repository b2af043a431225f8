//! Shift Aggregation and Overtime Salary Engine
//!
//! This crate turns raw check-in/check-out sessions ("shifts") into derived
//! pay fields: it groups an employee's shifts per calendar day, splits the
//! day's hours into regular and overtime portions, and prices them using
//! per-employee rates.
//!
//! The engine is synchronous, pure, and side-effect-free. All I/O (reading
//! sibling shifts, reading employee rates, writing results) belongs to the
//! calling boundary, which must also serialize recomputation per
//! employee+date so the day snapshot handed to the engine is consistent.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
