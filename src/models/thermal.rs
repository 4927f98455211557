//! Thermal systems models.
//!
//! This module contains models for the thermal design of electronics
//! enclosures.

pub mod enclosure;
