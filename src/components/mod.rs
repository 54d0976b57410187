//! Reusable UI components.

pub mod account_badge;
