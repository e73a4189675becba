//! kiln turns a generic package skeleton into a concrete, named package.
//! It resolves package and author metadata from flags or prompts, derives the
//! identifier forms, and rewrites a fixed set of skeleton files in place.

/// Command-line interface module for the kiln application
pub mod cli;

/// Skeleton layout configuration
/// Supports JSON and YAML formats (kiln.json, kiln.yml, kiln.yaml)
pub mod config;

/// Placeholder syntax, flag names and other shared constants
pub mod constants;

/// Error types and handling for the kiln application
pub mod error;

/// Whole-file read, write and rename operations
pub mod fs;

/// Logger setup for the binary
pub mod logger;

/// Resolved package metadata and its token map
pub mod metadata;

/// Slug, studly and title case transforms
pub mod naming;

/// Step orchestration over the skeleton files
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Placeholder substitution
pub mod renderer;

/// Flag and prompt backed value resolution
pub mod resolver;
