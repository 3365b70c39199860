//! Test module organization for wireless link collection
//!
//! This module organizes tests for the extractor, the command probe and the
//! poll loop into focused test modules.

pub mod probe_tests;
