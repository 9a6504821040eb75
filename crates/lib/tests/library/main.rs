//! Integration tests for buildgraph-lib.

mod query_tests;
