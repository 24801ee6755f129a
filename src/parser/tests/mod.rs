//! Tests for parser components and integration scenarios.

mod fields;
mod helpers;
