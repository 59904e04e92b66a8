//! Security-focused tests.
//!
//! All user input flows through two surfaces: SQL queries (parameterized by
//! the ORM) and rendered HTML (escaped by the page builder). These tests
//! drive hostile payloads through both.
