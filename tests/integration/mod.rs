//! Integration tests for feed-sanitizer
//!
//! These tests run the complete cleaning pipeline end-to-end on realistic
//! feed bodies and rewriting-service answers.

mod edge_cases;
mod feature_combinations;
mod real_world_articles;
