//! Tests for bike management service
