//! Multi-grammar parser for variable-mutation directives.
//!
//! The model emits state mutations in one of several historically-accumulated
//! dialects inside the directive tag. This crate turns that free text into
//! structured [`ParsedCommand`]s without ever raising: unparsable fragments
//! become warnings, not stop conditions.
//!
//! # Architecture
//!
//! ```text
//! "_.set('MC.hp', 80, 100); // fell off a roof"
//!          │
//!          ▼
//! ┌──────────────────┐
//! │ STATEMENT        │  → one buffer per complete statement, comment split off
//! │ ACCUMULATION     │    (multi-line JSON arguments stay in one statement)
//! └──────────────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │ GRAMMAR CHAIN    │  → call-modern, call-legacy, JSON object, line style;
//! │ (fixed priority) │    first grammar that accepts the statement wins
//! └──────────────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │ PARSED COMMANDS  │  → { path: "MC.hp", operation: Set, value: 100, … }
//! └──────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`command`] - Output types ([`ParsedCommand`], [`Operation`], [`ParseOutcome`])
//! - [`statement`] - Line accumulation into complete statements
//! - [`literal`] - Shared textual-literal decoding into [`storylint_foundation::Value`]
//! - [`grammar`] - The four grammar strategies
//! - [`parser`] - Orchestration: [`parse`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod grammar;
pub mod literal;
pub mod parser;
pub mod statement;

pub use command::{Operation, ParseOutcome, ParsedCommand};
pub use literal::parse_value;
pub use parser::parse;
pub use statement::Statement;
