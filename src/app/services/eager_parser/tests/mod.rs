//! Tests for the whole-file reference parser.
