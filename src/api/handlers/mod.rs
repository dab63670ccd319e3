//! API request handlers.
//!
//! This module contains all HTTP request handlers organized by functionality.

/// Health and service information handlers.
pub mod health;
/// Route table handlers.
pub mod pages;
/// Static trend data handlers.
pub mod trends;
/// Mock claim verification handlers.
pub mod verify;
