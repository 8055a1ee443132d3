// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Schema-driven strategies generate arbitrary models for any resource kind;
//! the properties check that decode and encode agree with each other.

mod round_trip;
