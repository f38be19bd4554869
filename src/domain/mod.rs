//! Domain Layer
//!
//! The deploy sequence as pure logic: value objects, the planner, and
//! the ports every side effect goes through.
//!
//! ## Structure
//!
//! - `value_objects/` - Steps, outcomes, invocations, venv activation
//! - `services/` - The deploy planner
//! - `ports/` - Interface definitions for infrastructure

pub mod ports;
pub mod services;
pub mod value_objects;
