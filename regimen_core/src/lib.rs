#![forbid(unsafe_code)]

//! Core domain model and business logic for the 30-day regimen tracker.
//!
//! This crate provides:
//! - Domain types (days, meal slots, plans, completion state)
//! - Plan generation for the fixed 30-day cycle
//! - Completion persistence
//! - Progress calculation (accomplished days, streak)
//! - Day-unlock navigation rules
//! - Session state and intent handling

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod plan;
pub mod completion;
pub mod store;
pub mod progress;
pub mod navigation;
pub mod session;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use plan::{generate_plan, full_plan, plan_for, meal_keys_for, master_shopping_list, important_notes};
pub use completion::CompletionMap;
pub use config::Config;
pub use progress::{compute_progress, is_fully_accomplished};
pub use navigation::{advance, can_select_day, retreat, select_day, unlocked_up_to};
pub use session::{Intent, Session, SessionCtx};
