//! Diagnostic types for the frontend.
//!
//! This module defines the diagnostics the parser accumulates while it
//! works through a token stream. It includes:
//!
//! - Diagnostic structures with source line/column information
//! - Specific diagnostic variants for each grammar violation
//! - Diagnostic formatting and display functionality
//!
//! Diagnostics are collected, never thrown: the parser records one and
//! keeps going, and callers inspect the list once parsing completes.

pub mod errors;
