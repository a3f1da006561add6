//! Core identifier types, sentinels, and page geometry.
//!
//! This module defines the **fundamental types and constants** shared across
//! all engine subsystems: entity identity, the per-pool sparse index, and
//! paged dense storage.
//!
//! ## Entity Representation
//!
//! Entities are an `(index, version)` pair:
//!
//! - **Index** names a slot in the registry's identity table and doubles as
//!   the key into every pool's sparse index.
//! - **Version** counts the lifetimes that have occupied that slot, so a
//!   handle held across a destroy/create cycle never matches the slot's new
//!   occupant.
//!
//! The all-ones value of each field is reserved: an entity with either field
//! at its maximum is invalid, and [`Entity::NULL`] carries both.
//!
//! [`Entity::NULL`]: crate::engine::entity::Entity::NULL
//!
//! ## Page Geometry
//!
//! Sparse indices and dense component storage are both split into fixed-size
//! pages of [`PAGE_SIZE`] slots, allocated lazily. A pool that only ever sees
//! entity indices inside one page allocates exactly one page, no matter how
//! large the index space grows elsewhere.

/// Index of an entity slot within the identity table and sparse indices.
pub type IndexID = u32;
/// Generation counter used to detect stale entity handles.
pub type VersionID = u32;
/// Count of live entities or components.
pub type EntityCount = usize;

/// Process-global identifier assigned to each component type on first use.
pub type FamilyID = usize;

/// Number of slots per sparse-index page and per dense-storage page.
pub const PAGE_SIZE: usize = 128;

/// Sparse-index entry marking "no component stored for this entity index".
///
/// Doubles as an always-out-of-bounds dense slot, so a stale sparse read
/// fails the dense bounds check rather than aliasing a live slot.
pub const ABSENT_SLOT: usize = usize::MAX;

/// Reserved index value carried by the null entity.
pub const NULL_INDEX: IndexID = IndexID::MAX;
/// Reserved version value carried by the null entity and by dense holes.
pub const NULL_VERSION: VersionID = VersionID::MAX;

const _: [(); 1] = [(); PAGE_SIZE.is_power_of_two() as usize];
