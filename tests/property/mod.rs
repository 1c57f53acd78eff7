//! Property-based tests for commitment guarantees
