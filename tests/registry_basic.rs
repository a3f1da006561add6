use sparse_ecs::{Component, Entity, EntityRegistry};

#[derive(Clone, Copy, PartialEq, Debug)]
struct Position {
    x: i32,
    y: i32,
}
impl Component for Position {}

#[derive(Clone, Copy, PartialEq, Debug)]
struct Health {
    hp: i32,
}
impl Component for Health {}

struct Tag;
impl Component for Tag {}

#[test]
fn created_entities_are_valid_and_distinct() {
    let mut world = EntityRegistry::new();

    let a = world.create();
    let b = world.create();
    let c = world.create();

    assert!(a.is_valid());
    assert!(b.is_valid());
    assert!(c.is_valid());
    assert_ne!(a, Entity::NULL);
    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_eq!(a.version(), 0);
    assert_eq!(b.index(), a.index() + 1);
}

#[test]
fn null_entity_is_invalid() {
    assert!(!Entity::NULL.is_valid());
    assert!(!Entity::new(0, u32::MAX).is_valid());
    assert!(!Entity::new(u32::MAX, 0).is_valid());
    assert_eq!(Entity::default(), Entity::NULL);
}

#[test]
fn add_then_get_roundtrip() {
    let mut world = EntityRegistry::new();
    let e = world.create();

    world.add(e, Position { x: 3, y: 4 });

    assert_eq!(*world.get::<Position>(e), Position { x: 3, y: 4 });
    world.get_mut::<Position>(e).x = 7;
    assert_eq!(world.get::<Position>(e).x, 7);
}

#[test]
fn add_is_idempotent() {
    let mut world = EntityRegistry::new();
    let e = world.create();

    world.add(e, Health { hp: 100 });
    let second = world.add(e, Health { hp: 1 });

    // The second call returns the stored value and its arguments are
    // discarded.
    assert_eq!(second.hp, 100);
    assert_eq!(world.get::<Health>(e).hp, 100);
    assert_eq!(world.get_pool::<Health>().entities_count(), 1);
}

#[test]
fn has_and_try_get_agree() {
    let mut world = EntityRegistry::new();
    let e = world.create();
    let other = world.create();

    world.add(e, Position { x: 0, y: 0 });

    assert!(world.has::<(Position,)>(e));
    assert!(world.try_get::<Position>(e).is_some());
    assert!(!world.has::<(Position,)>(other));
    assert!(world.try_get::<Position>(other).is_none());

    // Never-pooled type: absent pool counts as empty.
    assert!(!world.has::<(Health,)>(e));
    assert!(world.try_get::<Health>(e).is_none());

    // The empty list is vacuously satisfied.
    assert!(world.has::<()>(e));
}

#[test]
fn has_requires_every_listed_component() {
    let mut world = EntityRegistry::new();
    let e = world.create();

    world.add(e, Position { x: 1, y: 1 });
    world.add(e, Health { hp: 10 });

    assert!(world.has::<(Position, Health)>(e));
    world.remove::<Health>(e);
    assert!(world.has::<(Position,)>(e));
    assert!(!world.has::<(Position, Health)>(e));
}

#[test]
fn remove_component_is_scoped_and_counted() {
    // Scenario B: removal clears exactly one component and one live slot.
    let mut world = EntityRegistry::new();
    let e = world.create();

    world.add(e, Position { x: 5, y: 5 });
    world.add(e, Health { hp: 50 });
    let live_before = world.get_pool::<Position>().entities_count();

    world.remove::<Position>(e);

    assert!(world.try_get::<Position>(e).is_none());
    assert_eq!(
        world.get_pool::<Position>().entities_count(),
        live_before - 1
    );
    assert_eq!(world.get::<Health>(e).hp, 50);
}

#[test]
fn remove_of_absent_component_is_noop() {
    let mut world = EntityRegistry::new();
    let e = world.create();

    world.remove::<Position>(e);
    world.add(e, Position { x: 1, y: 2 });
    world.remove::<Health>(e);

    assert_eq!(*world.get::<Position>(e), Position { x: 1, y: 2 });
}

#[test]
fn destroy_clears_every_component_type() {
    let mut world = EntityRegistry::new();
    let e = world.create();

    world.add(e, Position { x: 0, y: 0 });
    world.add(e, Health { hp: 1 });
    world.add(e, Tag);

    world.destroy(e);

    assert!(!world.has::<(Position,)>(e));
    assert!(!world.has::<(Health,)>(e));
    assert!(!world.has::<(Tag,)>(e));
    assert!(!world.is_live(e));
}

#[test]
fn destroy_then_create_reuses_index_with_bumped_version() {
    // Scenario C.
    let mut world = EntityRegistry::new();
    let e = world.create();

    world.destroy(e);
    let recycled = world.create();

    assert_eq!(recycled.index(), e.index());
    assert_eq!(recycled.version(), e.version() + 1);
    assert_ne!(recycled, e);
}

#[test]
fn destroy_of_stale_handle_is_noop() {
    let mut world = EntityRegistry::new();
    let e = world.create();

    world.destroy(e);
    world.destroy(e); // stale: slot already recycled

    let first = world.create();
    let second = world.create();

    // Only one recycled slot exists; the second create must mint a fresh
    // index instead of handing the same slot out twice.
    assert_eq!(first.index(), e.index());
    assert_eq!(first.version(), e.version() + 1);
    assert_ne!(second.index(), e.index());
}

#[test]
fn destroy_of_never_created_entity_is_noop() {
    let mut world = EntityRegistry::new();
    let e = world.create();
    world.add(e, Position { x: 9, y: 9 });

    world.destroy(Entity::new(4096, 0));
    world.destroy(Entity::NULL);

    assert!(world.is_live(e));
    assert_eq!(*world.get::<Position>(e), Position { x: 9, y: 9 });
}

#[test]
fn families_are_stable_and_distinct() {
    let first = sparse_ecs::family_of::<Position>();
    let other = sparse_ecs::family_of::<Health>();

    assert_eq!(first, sparse_ecs::family_of::<Position>());
    assert_ne!(first, other);
    assert!(sparse_ecs::family_count() > first.max(other));
}

#[test]
#[should_panic]
fn get_of_absent_component_panics() {
    let mut world = EntityRegistry::new();
    let e = world.create();
    world.add(e, Position { x: 0, y: 0 });

    let other = world.create();
    let _ = world.get::<Position>(other);
}

#[test]
fn stale_handle_never_sees_recycled_slots_component() {
    let mut world = EntityRegistry::new();
    let old = world.create();
    world.add(old, Health { hp: 1 });
    world.destroy(old);

    let fresh = world.create();
    world.add(fresh, Health { hp: 99 });
    assert_eq!(fresh.index(), old.index());

    assert!(world.try_get::<Health>(old).is_none());
    assert!(!world.has::<(Health,)>(old));
    assert_eq!(world.get::<Health>(fresh).hp, 99);
}
