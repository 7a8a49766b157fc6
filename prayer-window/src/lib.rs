//! Prayer window resolution.
//!
//! Given yesterday's, today's and tomorrow's prayer timetables and a
//! reference moment, works out which prayer window is active, which prayer
//! comes next, and how long remains until it.

pub mod calendar;
pub mod config;
pub mod domain;
pub mod report;
pub mod resolver;
