//! Tests for user management service
