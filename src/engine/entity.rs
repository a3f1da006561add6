//! Entity handles and the identity table.
//!
//! An [`Entity`] is an opaque `(index, version)` pair naming one logical
//! object. The [`Entities`] table owns every slot ever created and recycles
//! dead slots through an explicit free list, bumping the slot's version at
//! destroy time so stale handles can never match a recycled slot (ABA
//! protection).
//!
//! ## Invariants
//! - A slot not on the free list is live, and the entity it stores has an
//!   index equal to the slot's own position.
//! - A slot on the free list keeps its position as its index; only the
//!   version advances, so the next `create` can return the slot verbatim.
//! - Versions advance by exactly one per destroy and are never reset.

use std::fmt;

use crate::engine::types::{EntityCount, IndexID, VersionID, NULL_INDEX, NULL_VERSION};

/// Opaque handle to a logical object: an index into the identity table plus
/// the generation that was live when the handle was issued.
///
/// Equality is pairwise over both fields. Two handles sharing an index but
/// differing in version denote different lifetimes of the same storage slot,
/// and never compare equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Entity {
    index: IndexID,
    version: VersionID,
}

impl Entity {
    /// The reserved invalid entity; both fields sit at their maximum.
    pub const NULL: Entity = Entity {
        index: NULL_INDEX,
        version: NULL_VERSION,
    };

    /// Creates a handle from raw parts.
    #[inline]
    pub const fn new(index: IndexID, version: VersionID) -> Self {
        Self { index, version }
    }

    /// Returns the identity-table index of this handle.
    #[inline]
    pub const fn index(self) -> IndexID {
        self.index
    }

    /// Returns the generation of this handle.
    #[inline]
    pub const fn version(self) -> VersionID {
        self.version
    }

    /// Returns `false` exactly when either field holds its reserved maximum.
    ///
    /// Holes in dense pool storage carry [`NULL_VERSION`], so linear scans
    /// use this check to skip them.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.index != NULL_INDEX && self.version != NULL_VERSION
    }
}

impl Default for Entity {
    #[inline]
    fn default() -> Self {
        Self::NULL
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}v{}", self.index, self.version)
        } else {
            f.pad("null")
        }
    }
}

/// Identity table: one slot per ever-created entity index, plus the free
/// list of destroyed slots awaiting reuse.
///
/// ## Semantics
/// * `create` pops the free list when possible; a recycled slot already
///   carries its bumped version, so the returned handle never equals any
///   handle issued for a previous lifetime of that slot.
/// * `destroy` is a no-op for handles that do not match their slot (stale
///   or never created), so double-destroy cannot recycle a slot twice.
/// * Version arithmetic wraps unguarded; exhausting the version space is a
///   precondition violation, not a checked condition.
#[derive(Default)]
pub struct Entities {
    slots: Vec<Entity>,
    free: Vec<IndexID>,
}

impl Entities {
    /// Creates an empty identity table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a live entity, recycling the most recently destroyed slot if
    /// one exists. O(1).
    pub fn create(&mut self) -> Entity {
        if let Some(index) = self.free.pop() {
            return self.slots[index as usize];
        }

        debug_assert!(
            self.slots.len() < NULL_INDEX as usize,
            "identity table exhausted the index space"
        );
        let entity = Entity::new(self.slots.len() as IndexID, 0);
        self.slots.push(entity);
        entity
    }

    /// Retires `entity`'s slot: bumps its version and pushes it on the free
    /// list. Returns `false` without touching anything when the handle is
    /// stale or was never created.
    pub fn destroy(&mut self, entity: Entity) -> bool {
        match self.slots.get_mut(entity.index as usize) {
            Some(slot) if *slot == entity => {
                slot.version = slot.version.wrapping_add(1);
                self.free.push(entity.index);
                true
            }
            _ => false,
        }
    }

    /// Returns `true` if `entity` names the current lifetime of its slot.
    ///
    /// Destroy bumps the slot's version, so a destroyed or stale handle
    /// fails the equality check without consulting the free list.
    #[inline]
    pub fn is_live(&self, entity: Entity) -> bool {
        self.slots.get(entity.index() as usize) == Some(&entity)
    }

    /// Total slots ever created, live or not.
    #[inline]
    pub fn len(&self) -> EntityCount {
        self.slots.len()
    }

    /// Returns `true` if no slot was ever created.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
