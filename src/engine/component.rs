//! Component trait and the process-global type-family registry.
//!
//! This module assigns each distinct component type a stable, compact
//! [`FamilyID`] the first time it is requested, which lets the registry keep
//! a single array of type-erased pool handles instead of a fixed schema.
//!
//! ## Design
//! - Families are assigned from a monotonically increasing sequence starting
//!   at zero, in first-use order. No ordering is guaranteed beyond that, and
//!   none of it is stable across processes.
//! - The table lives for the process lifetime behind `OnceLock`/`RwLock`;
//!   the common path is a read-lock lookup, registration takes the write
//!   lock once per type.
//!
//! ## Invariants
//! - `family_of::<T>()` returns the same value for the same `T` on every
//!   call within one process run.
//! - Family values are dense: after `n` distinct types have been seen, the
//!   assigned values are exactly `0..n`.

use std::{
    any::{type_name, TypeId},
    collections::HashMap,
    sync::{OnceLock, RwLock},
};

use crate::engine::entity::Entity;
use crate::engine::manager::EntityRegistry;
use crate::engine::types::FamilyID;

/// Marker trait for types storable in a [`ComponentPool`], carrying the
/// optional lifecycle capability.
///
/// Most component types opt in with an empty impl:
///
/// ```
/// use sparse_ecs::Component;
///
/// struct Position { x: f32, y: f32 }
/// impl Component for Position {}
/// ```
///
/// A type opts into the lifecycle capability by overriding [`on_add`] and/or
/// [`on_remove`]. The owning pool invokes each hook exactly once per
/// structural change: `on_add` after the inserted value is in place,
/// `on_remove` before the slot is unlinked.
///
/// ## Hook reentrancy
/// Hooks receive the registry with the invoking pool temporarily detached.
/// Adding or removing components of the *same* type from within its own hook
/// is a precondition violation; structural changes to other component types
/// are permitted and visible as soon as the triggering call returns.
///
/// [`ComponentPool`]: crate::engine::storage::ComponentPool
/// [`on_add`]: Component::on_add
/// [`on_remove`]: Component::on_remove
pub trait Component: 'static {
    /// Invoked by the owning pool after this value has been inserted for
    /// `entity`. The default does nothing.
    #[allow(unused_variables)]
    fn on_add(&mut self, registry: &mut EntityRegistry, entity: Entity) {}

    /// Invoked by the owning pool just before this value's slot is unlinked
    /// from `entity`. The default does nothing.
    #[allow(unused_variables)]
    fn on_remove(&mut self, registry: &mut EntityRegistry, entity: Entity) {}
}

/// Process-global mapping from component types to compact family values.
///
/// ## Invariants
/// - Every entry's value is unique and less than `next`.
/// - `next` equals the number of distinct types ever seen.
struct TypeFamilies {
    next: FamilyID,
    by_type: HashMap<TypeId, FamilyID>,
}

static FAMILIES: OnceLock<RwLock<TypeFamilies>> = OnceLock::new();

fn type_families() -> &'static RwLock<TypeFamilies> {
    FAMILIES.get_or_init(|| {
        RwLock::new(TypeFamilies {
            next: 0,
            by_type: HashMap::new(),
        })
    })
}

/// Returns the family assigned to `T`, assigning the next value in the
/// sequence if `T` has never been seen before.
///
/// ## Panics
/// Panics if the family table lock is poisoned.
pub fn family_of<T: 'static>() -> FamilyID {
    let type_id = TypeId::of::<T>();

    let families = type_families();
    if let Some(&family) = families.read().unwrap().by_type.get(&type_id) {
        return family;
    }

    let mut families = families.write().unwrap();
    // A racing registration may have won the write lock first.
    if let Some(&family) = families.by_type.get(&type_id) {
        return family;
    }

    let family = families.next;
    families.next += 1;
    families.by_type.insert(type_id, family);
    log::debug!("assigned component family {} to {}", family, type_name::<T>());
    family
}

/// Number of distinct component types seen so far in this process.
pub fn family_count() -> usize {
    type_families().read().unwrap().next
}
