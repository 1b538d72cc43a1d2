//! # vendsync
//!
//! Core library for the vendored-tree reconciliation tool.
//!
//! This library walks a source directory tree (typically an upstream
//! vendored library) and reconciles it against a destination tree (a
//! local fork). Existing destination files are never overwritten:
//! where a counterpart exists, the incoming file is moved to a
//! marker-suffixed shadow name for manual review instead.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Core error types for the vendsync library
pub mod error;

/// Configuration file parsing and pattern matching
pub mod config;

/// Deterministic source-tree enumeration
pub mod scanner;

/// Byte-for-byte file comparison and diff generation
pub mod comparison;

/// The tree-reconciliation engine
pub mod reconcile;
