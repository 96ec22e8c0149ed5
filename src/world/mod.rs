//! The minimal body registry and system driver that lets
//! [`systems::IntegrationSystem`] and [`systems::TransformSystem`] actually
//! run, standing in for the entity-component storage substrate that
//! `SPEC_FULL.md` SS1 calls out as out of scope for the physics core proper.

pub mod systems;

use std::collections::HashMap;

use crate::error::PhysicsError;
use crate::motion::Dynamics;
use crate::spatial::Shape;
use crate::vector::Vector2;

pub use systems::{IntegrationSystem, TransformSystem};

/// Opaque handle to a body registered in a [`World`].
pub type EntityId = u32;

/// Everything a single body may carry. `dynamics` and `shape` are optional
/// since not every body needs both (a purely kinematic trigger volume has a
/// shape but no dynamics; an invisible force zone could have dynamics with
/// no shape, though that's unusual).
#[derive(Debug, Clone, Default)]
pub struct Body {
    pub position: Vector2,
    /// Stamped from `position` at the start of every
    /// [`IntegrationSystem::run`] call, before integration advances it —
    /// resolves the open question in `SPEC_FULL.md` SS9 about where a
    /// previous-position source for continuous detection comes from.
    pub previous_position: Vector2,
    pub rotation: Option<f64>,
    pub scale: Vector2,
    pub dynamics: Option<Dynamics>,
    pub shape: Option<Shape>,
}

impl Body {
    pub fn new(position: Vector2) -> Self {
        Body {
            position,
            previous_position: position,
            scale: Vector2::new(1.0, 1.0),
            ..Body::default()
        }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn with_dynamics(mut self, dynamics: Dynamics) -> Self {
        self.dynamics = Some(dynamics);
        self
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }
}

/// A system that mutates a [`World`] over a timestep. Pair enumeration,
/// detection and resolution are deliberately not systems here — the spec
/// leaves broad-phase pairing as the caller's responsibility, so those stay
/// plain function calls driven by whatever loop owns the `World`.
pub trait System {
    fn run(&self, world: &mut World, dt: f64);
}

/// A small fixed-shape body registry plus an ordered list of systems to run
/// each step, replacing the entity-component storage and scheduler this
/// crate deliberately doesn't implement.
#[derive(Default)]
pub struct World {
    bodies: HashMap<EntityId, Body>,
    next_id: EntityId,
    systems: Vec<Box<dyn System>>,
}

impl World {
    pub fn new() -> Self {
        World::default()
    }

    pub fn spawn(&mut self, body: Body) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        self.bodies.insert(id, body);
        id
    }

    pub fn add_system(&mut self, system: Box<dyn System>) {
        self.systems.push(system);
    }

    pub fn body(&self, id: EntityId) -> Result<&Body, PhysicsError> {
        self.bodies.get(&id).ok_or(PhysicsError::UnknownEntity(id))
    }

    pub fn body_mut(&mut self, id: EntityId) -> Result<&mut Body, PhysicsError> {
        self.bodies.get_mut(&id).ok_or(PhysicsError::UnknownEntity(id))
    }

    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.bodies.keys().copied()
    }

    pub fn bodies_mut(&mut self) -> impl Iterator<Item = (&EntityId, &mut Body)> {
        self.bodies.iter_mut()
    }

    /// Run every registered system, in registration order, over `dt`.
    pub fn step(&mut self, dt: f64) {
        let systems = std::mem::take(&mut self.systems);
        for system in &systems {
            system.run(self, dt);
        }
        self.systems = systems;
        log::debug!("stepped world with {} bodies", self.bodies.len());
    }
}
