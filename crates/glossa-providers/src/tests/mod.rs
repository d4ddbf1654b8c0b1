//! Internal provider tests
