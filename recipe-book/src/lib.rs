//! Recipe Book Library
//!
//! This library exposes the recipe store and its menu for use in tests
//! and the binary.

pub mod config;
pub mod db;
pub mod error;
pub mod menu;
pub mod repositories;
pub mod services;
