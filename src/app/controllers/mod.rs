//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - Menu state tables for both menu surfaces
//! - Selection tracking and the enablement projection
//! - Command routing to the application core

pub mod menu_registry;
pub mod router;
pub mod selection;
