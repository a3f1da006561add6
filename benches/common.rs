#![allow(dead_code)]

use sparse_ecs::{Component, Entity, EntityRegistry};

pub const ENTITIES_SMALL: usize = 10_000;
pub const ENTITIES_MED: usize = 100_000;
pub const ENTITIES_LARGE: usize = 1_000_000;

#[derive(Clone, Copy)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}
impl Component for Position {}

#[derive(Clone, Copy)]
pub struct Wealth {
    pub value: f32,
}
impl Component for Wealth {}

#[derive(Clone, Copy)]
pub struct Productivity {
    pub rate: f32,
}
impl Component for Productivity {}

/// Populates a world with `count` entities; every entity carries a
/// `Position`, every second a `Wealth`, every third a `Productivity`.
pub fn populate(count: usize) -> (EntityRegistry, Vec<Entity>) {
    let mut world = EntityRegistry::new();
    let mut entities = Vec::with_capacity(count);

    for n in 0..count {
        let e = world.create();
        world.add(
            e,
            Position {
                x: n as f32,
                y: 0.0,
            },
        );
        if n % 2 == 0 {
            world.add(e, Wealth { value: 100.0 });
        }
        if n % 3 == 0 {
            world.add(e, Productivity { rate: 1.0 });
        }
        entities.push(e);
    }

    (world, entities)
}
