//! Unit tests for `colonnade_core` types.

mod candidate_tests;
