//! Metabolic Calculator - Voice skill for BMR and daily caloric intake
//!
//! This crate collects weight, age, gender and height one conversational
//! turn at a time, then computes the Harris-Benedict basal metabolic rate
//! and the daily intake that maintains the user's current weight.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
