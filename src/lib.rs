//! Heuristic authenticity scoring for social-media comments.
//!
//! Comments are collected from platform APIs or CSV files (`sources`),
//! scored independently by a fixed rule table (`analysis`), and summarised
//! into an HTML report (`report`).

pub mod analysis;
pub mod cli;
pub mod config;
pub mod report;
pub mod sources;
