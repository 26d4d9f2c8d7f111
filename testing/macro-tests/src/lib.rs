//! End-to-end expansion tests for the CodingKeys derive.
