//! Integration tests for the scene hierarchy
//!
//! Scenario tests that drive several nodes through the public
//! [`SceneGraph`](super::SceneGraph) API.

mod hierarchy_scenarios;
