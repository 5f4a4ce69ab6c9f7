//! # Metaline - Abstract Syntax Tree
//!
//! This module defines the tokens and syntax tree of the metaline mapping
//! language, a compact notation for reshaping one JSON-like value into another.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[segments]** - Steps inside a phrase (path, property, input, map, assignment)
//! - **[phrases]** - The three phrase kinds
//! - **[program]** - An ordered list of phrases
//!
//! ## Quick Start
//!
//! ```text
//! where.directorId.in.$;limit:99
//! ```
//!
//! Given `[1, 2]` this produces `{"where": {"directorId": {"in": [1, 2]}}, "limit": 99}`.
//!
//! ## Core Concepts
//!
//! ### Phrases
//!
//! A source string is a `;`-separated list of phrases. Each phrase yields one
//! partial output and the partial outputs are deep-merged left to right.
//!
//! - **Path phrase** `a.b.$` / `a.b.#name` - nest the input (or one of its fields)
//! - **Value phrase** `a.key:value` - nest a constant
//! - **Map phrase** `$>#name` / `$>key.#name` - transform every array element
//!
//! ## Examples
//!
//! ### Pluck and dedupe
//!
//! ```text
//! $>#movieIds
//! ```
//!
//! ### Build one object per element
//!
//! ```text
//! $>id.#directorId;$>foo.#bar
//! ```
//!
//! ### Wrap a mapped array
//!
//! ```text
//! where.id.in.$>#id;limit:99
//! ```
pub mod phrases;
pub mod program;
pub mod segments;
pub mod tokens;

pub use phrases::Phrase;
pub use program::Program;
pub use segments::{Literal, Segment};
pub use tokens::{Number, Token, TokenKind};
