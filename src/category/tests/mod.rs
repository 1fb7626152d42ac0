//! Unit tests for the category context.
