//! Terminal rendering using ratatui.
//!
//! Consumes [`MetricSnapshot`](crate::data::MetricSnapshot)s and the latest
//! observation's extras; holds no tracking state of its own, so a plain-text
//! or web renderer could replace this module without touching the core.

pub mod common;
pub mod dashboard;
pub mod theme;

pub use theme::Theme;
