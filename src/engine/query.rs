//! Views: typed iteration targets over one or several pools.
//!
//! A [`SingleView`] is a thin borrow of one pool's live dense sequence; it
//! costs nothing to build and always reflects the pool as it stands. A
//! [`MultiView`] owns a snapshot of the entities present in *every*
//! requested pool, computed once at construction by scanning the smallest
//! pool; later mutations do not update it.
//!
//! ## Component sets
//!
//! Multi-pool operations name their types as a tuple: `registry.has::<(
//! Position, Health)>(e)`, `registry.view_multi::<(Position, Health)>()`.
//! The [`ComponentSet`] and [`ViewSet`] traits are implemented for tuples up
//! to arity eight and carry the per-set pool plumbing (family resolution,
//! lazy materialization, and the disjoint mutable pool borrows `each`
//! needs).
//!
//! ## Execution model
//!
//! `each` on a multi-view re-fetches every component from its pool for every
//! snapshot entity: O(n·m) pool lookups for n entities and m types, each
//! O(1). The registry stays mutably borrowed by the view, so the pools the
//! snapshot refers to cannot be mutated underneath the iteration.

use std::marker::PhantomData;

use crate::engine::component::{family_of, Component};
use crate::engine::entity::Entity;
use crate::engine::manager::EntityRegistry;
use crate::engine::storage::ComponentPool;
use crate::engine::types::FamilyID;

// ─────────────────────────────────────────────────────────────────────────────
// SingleView
// ─────────────────────────────────────────────────────────────────────────────

/// Non-owning view over every live component of one type.
///
/// Iteration skips holes (dense slots whose entity is invalid) by linear
/// scan and yields entities in ascending dense-slot order.
pub struct SingleView<'a, T: Component> {
    pool: &'a mut ComponentPool<T>,
}

impl<'a, T: Component> SingleView<'a, T> {
    pub(crate) fn new(pool: &'a mut ComponentPool<T>) -> Self {
        Self { pool }
    }

    /// Live-component count; holes never surface, so this is also the
    /// number of entities iteration yields.
    pub fn len(&self) -> usize {
        self.pool.entities_count()
    }

    /// Returns `true` if the view yields nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the live entities in ascending dense-slot order.
    pub fn iter(&self) -> SingleViewIter<'_> {
        SingleViewIter {
            entities: self.pool.dense_entities(),
            cursor: 0,
        }
    }

    /// Invokes `f` on every live component, in dense order.
    pub fn each<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        for slot in 0..self.pool.dense_len() {
            if self.pool.entity_at(slot).is_valid() {
                f(self.pool.component_at_mut(slot));
            }
        }
    }
}

impl<'v, T: Component> IntoIterator for &'v SingleView<'_, T> {
    type Item = Entity;
    type IntoIter = SingleViewIter<'v>;

    fn into_iter(self) -> SingleViewIter<'v> {
        self.iter()
    }
}

/// Hole-skipping forward iterator over a pool's dense entity sequence.
pub struct SingleViewIter<'a> {
    entities: &'a [Entity],
    cursor: usize,
}

impl Iterator for SingleViewIter<'_> {
    type Item = Entity;

    fn next(&mut self) -> Option<Entity> {
        while let Some(&entity) = self.entities.get(self.cursor) {
            self.cursor += 1;
            if entity.is_valid() {
                return Some(entity);
            }
        }
        None
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// MultiView
// ─────────────────────────────────────────────────────────────────────────────

/// Owning view over the intersection of two or more pools.
///
/// The snapshot is computed once at construction (see
/// [`EntityRegistry::view_multi`]) and enumerates exactly the entities that
/// were present in every requested pool, in driver-scan order.
pub struct MultiView<'a, S: ViewSet> {
    registry: &'a mut EntityRegistry,
    entities: Vec<Entity>,
    set: PhantomData<S>,
}

impl<'a, S: ViewSet> MultiView<'a, S> {
    pub(crate) fn new(registry: &'a mut EntityRegistry, entities: Vec<Entity>) -> Self {
        Self {
            registry,
            entities,
            set: PhantomData,
        }
    }

    /// Snapshot size.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if the intersection is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// The snapshot itself, in enumeration order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Iterates the snapshot entities in order.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.iter().copied()
    }

    /// Invokes `f` once per snapshot entity with mutable references to each
    /// of its components, re-fetched from their pools per entity:
    ///
    /// ```
    /// # use sparse_ecs::prelude::*;
    /// # struct Position { x: f32 } impl Component for Position {}
    /// # struct Health { hp: i32 } impl Component for Health {}
    /// # let mut registry = EntityRegistry::new();
    /// registry
    ///     .view_multi::<(Position, Health)>()
    ///     .each(|(position, health)| {
    ///         position.x += 1.0;
    ///         health.hp -= 1;
    ///     });
    /// ```
    pub fn each<F>(&mut self, f: F)
    where
        F: FnMut(S::Item<'_>),
    {
        S::for_each(self.registry, &self.entities, f);
    }
}

impl<'v, S: ViewSet> IntoIterator for &'v MultiView<'_, S> {
    type Item = Entity;
    type IntoIter = std::iter::Copied<std::slice::Iter<'v, Entity>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter().copied()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Component-set tuple traits
// ─────────────────────────────────────────────────────────────────────────────

/// A list of component types usable with [`EntityRegistry::has`].
///
/// Implemented for tuples up to arity eight; the empty tuple is vacuously
/// contained by every entity.
pub trait ComponentSet: 'static {
    /// Lazily materializes every pool in the set.
    fn ensure(registry: &mut EntityRegistry);

    /// Family of every listed type, in listed order.
    fn family_ids() -> Vec<FamilyID>;

    /// Returns `true` iff every listed pool contains `entity`; a pool that
    /// was never materialized counts as empty.
    fn contains_all(registry: &EntityRegistry, entity: Entity) -> bool;
}

/// A list of two or more component types usable with
/// [`EntityRegistry::view_multi`].
///
/// The listed types must be distinct: `each` hands out one mutable pool
/// borrow per element and panics if two elements resolve to the same pool.
pub trait ViewSet: ComponentSet {
    /// Mutable references to each listed component, in listed order.
    type Item<'a>;

    /// Invokes `f` once per entity in `entities`, re-fetching each
    /// component from its pool. Callers guarantee every listed pool was
    /// materialized and contains every listed entity.
    fn for_each<F>(registry: &mut EntityRegistry, entities: &[Entity], f: F)
    where
        F: FnMut(Self::Item<'_>);
}

impl ComponentSet for () {
    fn ensure(_registry: &mut EntityRegistry) {}

    fn family_ids() -> Vec<FamilyID> {
        Vec::new()
    }

    fn contains_all(_registry: &EntityRegistry, _entity: Entity) -> bool {
        true
    }
}

macro_rules! impl_component_set {
    ($($ty:ident),+) => {
        impl<$($ty: Component),+> ComponentSet for ($($ty,)+) {
            fn ensure(registry: &mut EntityRegistry) {
                $(registry.get_pool::<$ty>();)+
            }

            fn family_ids() -> Vec<FamilyID> {
                vec![$(family_of::<$ty>()),+]
            }

            fn contains_all(registry: &EntityRegistry, entity: Entity) -> bool {
                true $(&& registry
                    .pool_ref::<$ty>()
                    .is_some_and(|pool| pool.contains(entity)))+
            }
        }
    };
}

macro_rules! impl_view_set {
    ($(($ty:ident, $pool:ident)),+) => {
        impl<$($ty: Component),+> ViewSet for ($($ty,)+) {
            type Item<'a> = ($(&'a mut $ty,)+);

            fn for_each<Func>(registry: &mut EntityRegistry, entities: &[Entity], mut f: Func)
            where
                Func: FnMut(Self::Item<'_>),
            {
                let [$($pool),+] = registry
                    .pools
                    .get_disjoint_mut([$(family_of::<$ty>()),+])
                    .expect("view sets must name distinct component types");
                $(
                    let $pool = $pool
                        .as_mut()
                        .expect("pool materialized at view construction")
                        .as_any_mut()
                        .downcast_mut::<ComponentPool<$ty>>()
                        .expect("family slot holds a pool of a different type");
                )+

                for &entity in entities {
                    f(($($pool.get_mut(entity),)+));
                }
            }
        }
    };
}

impl_component_set!(A);
impl_component_set!(A, B);
impl_component_set!(A, B, C);
impl_component_set!(A, B, C, D);
impl_component_set!(A, B, C, D, E);
impl_component_set!(A, B, C, D, E, F);
impl_component_set!(A, B, C, D, E, F, G);
impl_component_set!(A, B, C, D, E, F, G, H);

impl_view_set!((A, a), (B, b));
impl_view_set!((A, a), (B, b), (C, c));
impl_view_set!((A, a), (B, b), (C, c), (D, d));
impl_view_set!((A, a), (B, b), (C, c), (D, d), (E, e));
impl_view_set!((A, a), (B, b), (C, c), (D, d), (E, e), (F, f));
impl_view_set!((A, a), (B, b), (C, c), (D, d), (E, e), (F, f), (G, g));
impl_view_set!((A, a), (B, b), (C, c), (D, d), (E, e), (F, f), (G, g), (H, h));
