//! Tests for the rental workflow service
