//! # sparse_ecs
//!
//! Sparse-set entity-component storage engine: opaque recyclable entity
//! identifiers, per-type paged pools, and views that iterate the dense side
//! of one or several pools without per-entity existence checks.
//!
//! ## Design Goals
//! - O(1) add/get/remove through a lazily paged sparse index
//! - Dense, cache-friendly iteration with free-list slot recycling
//! - Version-stamped identifiers so stale handles never alias recycled slots
//! - Single-threaded, allocation-conscious core with no internal locking
//!
//! ## Quick start
//!
//! ```
//! use sparse_ecs::prelude::*;
//!
//! struct Position { x: i32, y: i32 }
//! impl Component for Position {}
//!
//! struct Health { hp: i32 }
//! impl Component for Health {}
//!
//! let mut world = EntityRegistry::new();
//!
//! let player = world.create();
//! world.add(player, Position { x: 0, y: 0 });
//! world.add(player, Health { hp: 100 });
//!
//! for entity in &world.view::<Position>() {
//!     assert_eq!(entity, player);
//! }
//!
//! world.view_multi::<(Position, Health)>().each(|(position, health)| {
//!     position.x += 1;
//!     health.hp -= 1;
//! });
//!
//! assert!(world.has::<(Position, Health)>(player));
//! world.destroy(player);
//! assert!(!world.has::<(Position,)>(player));
//! ```

#![warn(missing_docs)]
#![allow(clippy::module_inception)]

pub mod engine;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (Public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use engine::entity::{Entities, Entity};

pub use engine::component::{family_count, family_of, Component};

pub use engine::storage::{ComponentPool, ErasedPool, PagedArray};

pub use engine::manager::EntityRegistry;

pub use engine::query::{ComponentSet, MultiView, SingleView, SingleViewIter, ViewSet};

pub use engine::types::{EntityCount, FamilyID, IndexID, VersionID, PAGE_SIZE};

// ─────────────────────────────────────────────────────────────────────────────
// Prelude
// ─────────────────────────────────────────────────────────────────────────────

/// Commonly used types.
///
/// Import with:
/// ```rust
/// use sparse_ecs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Component, Entity, EntityRegistry, MultiView, SingleView};
}
