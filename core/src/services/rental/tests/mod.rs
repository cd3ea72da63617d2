//! Tests for rental lifecycle service
