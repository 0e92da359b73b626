//! Attendance Ledger & Payroll Engine
//!
//! This crate maintains one authoritative attendance fact per employee per
//! calendar day and turns the resulting day-level facts into a prorated
//! monthly pay figure. Three independently-triggered writers feed the ledger —
//! manual clock events, bulk machine imports and leave-approval fan-out — and
//! an atomic per-key insert guarantees they can never produce duplicate or
//! conflicting facts for the same day.

#![warn(missing_docs)]

pub mod api;
pub mod attendance;
pub mod config;
pub mod error;
pub mod import;
pub mod leave;
pub mod ledger;
pub mod models;
pub mod payroll;
