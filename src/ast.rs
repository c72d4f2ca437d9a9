//! # jg - Tokens and Generator Tree
//!
//! This module holds the two data models shared by the compiler stages:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[generators]** - The compiled, not-yet-evaluated output tree
//!
//! ## Quick Start
//!
//! ```text
//! name=foo id=:32 parent.child=v
//! ```
//!
//! compiles to a single object generator and evaluates to
//!
//! ```text
//! {"id":32,"name":"foo","parent":{"child":"v"}}
//! ```
//!
//! ## Core Concepts
//!
//! ### Generators
//!
//! A generator is one of four variants:
//!
//! - **Value** - a fixed scalar (`foo`, `:32`, `:true`)
//! - **Var** - a `$name` placeholder resolved against substitutions
//! - **Obj** - a set of uniquely named fields
//! - **Arr** - an ordered list of elements
//!
//! ### Merging
//!
//! Adding a field that already exists merges the two generators. Two objects
//! merge field by field, recursively. Any other pairing keeps the newer one:
//!
//! ```text
//! a.b=1 a.c=2        => {"a":{"b":"1","c":"2"}}
//! a.b=1 a={b=2 c=3}  => {"a":{"b":"2","c":"3"}}
//! a.b=1 a=x          => {"a":"x"}
//! ```
pub mod generators;
pub mod tokens;

pub use generators::{Arr, Generator, Obj};
pub use tokens::{Token, TokenKind};
