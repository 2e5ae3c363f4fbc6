//! Property-based tests

mod search_proptest;
