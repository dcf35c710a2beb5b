//! Workspace-level integration tests for memsim live in `tests/`.
//!
//! This package has no library code of its own.
