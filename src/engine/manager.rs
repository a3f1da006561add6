//! Central registry: entity identity plus the per-type pool array.
//!
//! This module defines [`EntityRegistry`], the owner and orchestration layer
//! of the engine, responsible for:
//!
//! * issuing and recycling entity identities,
//! * lazily materializing one [`ComponentPool`] per component type, indexed
//!   by the process-global family value,
//! * routing add/get/remove/has calls to the right pool through a trusted
//!   downcast,
//! * building single- and multi-type views.
//!
//! ## Ownership model
//!
//! The registry exclusively owns the identity table and every pool for its
//! whole lifetime. Views borrow the registry mutably, so the borrow checker
//! rejects structural mutation while a view is alive.
//!
//! ## Hook dispatch
//!
//! Lifecycle hooks receive `&mut EntityRegistry`. To hand a pool's hook the
//! registry without aliasing, the invoking pool is detached from its slot
//! (`Option::take`) for the duration of the structural call and restored
//! afterwards. A hook that structurally mutates its own component type
//! therefore operates on a freshly created pool that the restore step
//! discards; doing so is a documented precondition violation.

use std::any::type_name;

use crate::engine::component::{family_of, Component};
use crate::engine::entity::{Entities, Entity};
use crate::engine::query::{ComponentSet, MultiView, SingleView, ViewSet};
use crate::engine::storage::{ComponentPool, ErasedPool};
use crate::engine::types::FamilyID;

/// Owner of the entity identity table and the array of component pools.
///
/// All operations are O(1) except [`destroy`](Self::destroy) (O(total pools
/// ever materialized)) and view construction (O(driver pool's dense length)
/// for the multi-type form).
#[derive(Default)]
pub struct EntityRegistry {
    entities: Entities,
    pub(crate) pools: Vec<Option<Box<dyn ErasedPool>>>,
}

impl EntityRegistry {
    /// Creates an empty registry with no pools.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a live entity, recycling the most recently destroyed identity
    /// slot if one exists. O(1).
    pub fn create(&mut self) -> Entity {
        self.entities.create()
    }

    /// Returns `true` if `entity` names the current lifetime of its
    /// identity slot.
    pub fn is_live(&self, entity: Entity) -> bool {
        self.entities.is_live(entity)
    }

    /// Resolves `T`'s family, growing the pool array and constructing the
    /// pool on first use. O(1) amortized.
    fn ensure_pool<T: Component>(&mut self) -> FamilyID {
        let family = family_of::<T>();
        if family >= self.pools.len() {
            self.pools.resize_with(family + 1, || None);
        }
        if self.pools[family].is_none() {
            log::debug!("creating component pool for {}", type_name::<T>());
            self.pools[family] = Some(Box::new(ComponentPool::<T>::new()));
        }
        family
    }

    /// Trusted downcast of an occupied pool slot; callers guarantee the
    /// slot was ensured for `T`.
    fn pool_mut_at<T: Component>(&mut self, family: FamilyID) -> &mut ComponentPool<T> {
        self.pools[family]
            .as_mut()
            .expect("pool slot ensured before downcast")
            .as_any_mut()
            .downcast_mut::<ComponentPool<T>>()
            .expect("family slot holds a pool of a different type")
    }

    /// Read-only pool lookup that does not materialize anything; `None`
    /// when no component of type `T` was ever added through this registry.
    pub(crate) fn pool_ref<T: Component>(&self) -> Option<&ComponentPool<T>> {
        self.pools
            .get(family_of::<T>())?
            .as_ref()?
            .as_any()
            .downcast_ref::<ComponentPool<T>>()
    }

    /// Mutable variant of [`pool_ref`](Self::pool_ref); still does not
    /// materialize anything.
    fn pool_ref_mut<T: Component>(&mut self) -> Option<&mut ComponentPool<T>> {
        self.pools
            .get_mut(family_of::<T>())?
            .as_mut()?
            .as_any_mut()
            .downcast_mut::<ComponentPool<T>>()
    }

    /// Returns `T`'s pool, lazily constructing it on first use. Subsequent
    /// calls return the same pool instance.
    pub fn get_pool<T: Component>(&mut self) -> &mut ComponentPool<T> {
        let family = self.ensure_pool::<T>();
        self.pool_mut_at::<T>(family)
    }

    /// Associates `value` with `entity` and returns a reference to the
    /// stored component.
    ///
    /// Idempotent: when `entity` already holds a `T`, the stored value wins,
    /// `value` is dropped, and no hook runs. Otherwise the pool inserts and
    /// runs the [`on_add`] hook. O(1).
    ///
    /// [`on_add`]: Component::on_add
    pub fn add<T: Component>(&mut self, entity: Entity, value: T) -> &mut T {
        debug_assert!(entity.is_valid(), "add on an invalid entity");

        let family = self.ensure_pool::<T>();
        let mut boxed = self.pools[family].take().expect("pool just ensured");
        let pool = boxed
            .as_any_mut()
            .downcast_mut::<ComponentPool<T>>()
            .expect("family slot holds a pool of a different type");
        let slot = pool.insert(value, entity, self);
        self.pools[family] = Some(boxed);

        self.pool_mut_at::<T>(family).component_at_mut(slot)
    }

    /// Unchecked component lookup.
    ///
    /// ## Panics
    /// Panics if `entity` holds no `T`; gate with [`has`](Self::has) or use
    /// [`try_get`](Self::try_get).
    pub fn get<T: Component>(&self, entity: Entity) -> &T {
        self.pool_ref::<T>()
            .expect("no pool exists for this component type")
            .get(entity)
    }

    /// Mutable variant of [`get`](Self::get).
    ///
    /// ## Panics
    /// Panics if `entity` holds no `T`.
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> &mut T {
        self.pool_ref_mut::<T>()
            .expect("no pool exists for this component type")
            .get_mut(entity)
    }

    /// Checked lookup: `Some` exactly when `entity` holds a `T`. A pool
    /// that was never materialized counts as empty.
    pub fn try_get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.pool_ref::<T>()?.try_get(entity)
    }

    /// Mutable variant of [`try_get`](Self::try_get).
    pub fn try_get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.pool_ref_mut::<T>()?.try_get_mut(entity)
    }

    /// Returns `true` iff every pool named by the set `S` contains
    /// `entity`: `has::<(Position, Health)>(e)`. Vacuously true for the
    /// empty tuple; a pool that was never materialized contributes `false`.
    pub fn has<S: ComponentSet>(&self, entity: Entity) -> bool {
        S::contains_all(self, entity)
    }

    /// Removes `entity`'s `T`, running its [`on_remove`] hook first; a safe
    /// no-op when `entity` holds no `T`. O(1).
    ///
    /// [`on_remove`]: Component::on_remove
    pub fn remove<T: Component>(&mut self, entity: Entity) {
        let family = self.ensure_pool::<T>();
        let mut boxed = self.pools[family].take().expect("pool just ensured");
        let pool = boxed
            .as_any_mut()
            .downcast_mut::<ComponentPool<T>>()
            .expect("family slot holds a pool of a different type");
        pool.remove(entity, self);
        self.pools[family] = Some(boxed);
    }

    /// Removes every component from `entity` and recycles its identity
    /// slot.
    ///
    /// Every materialized pool is visited unconditionally; membership is
    /// not checked up front and each pool's `remove` no-ops for non-members,
    /// so the cost is O(total pools) per destruction, not O(components
    /// held). The identity slot is recycled only when `entity` still names
    /// its current lifetime, which makes destroying a stale or
    /// never-created handle a safe no-op.
    pub fn destroy(&mut self, entity: Entity) {
        for family in 0..self.pools.len() {
            let Some(mut pool) = self.pools[family].take() else {
                continue;
            };
            pool.remove_entity(self, entity);
            self.pools[family] = Some(pool);
        }

        self.entities.destroy(entity);
    }

    /// Builds a view over every live `T`, lazily creating the pool so a
    /// never-added type yields a defined, empty view.
    pub fn view<T: Component>(&mut self) -> SingleView<'_, T> {
        SingleView::new(self.get_pool::<T>())
    }

    /// Builds a view over the intersection of two or more pools:
    /// `view_multi::<(Position, Health)>()`.
    ///
    /// The pool with the fewest live entities drives the scan
    /// (strict-less-than comparison, earliest listed wins ties); each of its
    /// valid dense entities is kept iff every other requested pool contains
    /// it. The resulting snapshot is order-stable in driver-scan order,
    /// trimmed to exact size, and is not updated by later mutations.
    pub fn view_multi<S: ViewSet>(&mut self) -> MultiView<'_, S> {
        S::ensure(self);
        let families = S::family_ids();

        let entities = {
            let handles: Vec<&dyn ErasedPool> = families
                .iter()
                .map(|&family| self.pools[family].as_deref().expect("pool just ensured"))
                .collect();

            let mut driver = 0;
            for (candidate, handle) in handles.iter().enumerate().skip(1) {
                if handle.live_count() < handles[driver].live_count() {
                    driver = candidate;
                }
            }

            let mut entities = Vec::with_capacity(handles[driver].live_count());
            for &entity in handles[driver].dense_entities() {
                if !entity.is_valid() {
                    continue;
                }
                let in_all = handles
                    .iter()
                    .enumerate()
                    .all(|(k, handle)| k == driver || handle.contains_entity(entity));
                if in_all {
                    entities.push(entity);
                }
            }
            entities.shrink_to_fit();
            entities
        };

        MultiView::new(self, entities)
    }
}
