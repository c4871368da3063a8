//! Dashfilter - pipeline status filtering for a continuous-delivery dashboard
//!
//! This library provides:
//! - Read-only views over pipelines and their stages
//! - Dashboard snapshot models loaded from JSON
//! - The status filter deciding which pipelines match the selected statuses
//! - CLI command parsing and execution
//!
//! # Example
//!
//! ```
//! use dashfilter::filter::{DashboardFilter, FilterConfig, StatusFilter};
//! use dashfilter::models::{Pipeline, Stage, StageState};
//!
//! let filter = DashboardFilter::new(FilterConfig::new([StatusFilter::Building]));
//! let pipeline = Pipeline::new("up42").with_stage(Stage::new("build", StageState::Failing));
//!
//! // An in-progress failing stage still counts as building
//! assert!(filter.accepts_status_of(&pipeline));
//! ```

pub mod models;
pub mod filter;
pub mod config;
pub mod cli;
