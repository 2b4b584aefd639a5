//! Integration tests for structural tag validation
//!
//! Tag presence, closure, last-occurrence content extraction, and
//! configuration behavior.
