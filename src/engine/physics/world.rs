use glam::Vec2;
use log::{debug, info};
use rapier2d::prelude::*;
use std::fmt;

use super::body::Body;
use super::Rect;

/// Thickness of the fixed colliders walling in the world
const WALL_THICKNESS: Real = 32.0;

/// Collision group of the world edges
const WALLS: Group = Group::GROUP_1;

/// Collision group of sprite bodies
const BODIES: Group = Group::GROUP_2;

/// Top-down physics world: no gravity, rotation-locked bodies, and four fixed
/// walls just outside the world rectangle
pub struct PhysicsWorld {
    /// Always zero, the view is top-down
    gravity: Vector<Real>,

    /// Integration parameters for the physics simulation
    integration_parameters: IntegrationParameters,

    /// Physics pipeline handles collision detection and solving
    physics_pipeline: PhysicsPipeline,

    /// Island manager for sleeping bodies
    island_manager: IslandManager,

    /// Broad phase collision detection
    broad_phase: DefaultBroadPhase,

    /// Narrow phase collision detection
    narrow_phase: NarrowPhase,

    /// Impulse joint set
    impulse_joint_set: ImpulseJointSet,

    /// Multibody joint set
    multibody_joint_set: MultibodyJointSet,

    /// CCD solver for fast-moving objects
    ccd_solver: CCDSolver,

    /// Rigid body set
    rigid_body_set: RigidBodySet,

    /// Collider set
    collider_set: ColliderSet,

    /// Area bodies with world bounds are kept inside
    bounds: Rect,

    /// Whether body outlines should be reported for debugging
    debug: bool,
}

impl PhysicsWorld {
    /// Create a world covering `bounds`
    pub fn new(bounds: Rect) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        // Fixed timestep of 1/60 seconds (60 FPS); `step` overrides it
        integration_parameters.dt = 1.0 / 60.0;

        let mut world = Self {
            gravity: Vector::zeros(),
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            bounds,
            debug: false,
        };
        world.add_walls();
        world
    }

    /// Start with debug output on or off
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    fn add_walls(&mut self) {
        let size = self.bounds.size();
        let center = self.bounds.center();
        let half = WALL_THICKNESS / 2.0;

        // Horizontal walls overlap the vertical ones at the corners
        let horizontal = Vec2::new(size.x / 2.0 + WALL_THICKNESS, half);
        let vertical = Vec2::new(half, size.y / 2.0 + WALL_THICKNESS);
        let walls = [
            (Vec2::new(center.x, self.bounds.min.y - half), horizontal),
            (Vec2::new(center.x, self.bounds.max.y + half), horizontal),
            (Vec2::new(self.bounds.min.x - half, center.y), vertical),
            (Vec2::new(self.bounds.max.x + half, center.y), vertical),
        ];

        for (center, half_extents) in walls {
            let wall = ColliderBuilder::cuboid(half_extents.x, half_extents.y)
                .translation(vector![center.x, center.y])
                .friction(0.0)
                .restitution(0.0)
                .collision_groups(InteractionGroups::new(WALLS, Group::ALL))
                .build();
            self.collider_set.insert(wall);
        }
    }

    /// Back `body` with a rotation-locked rigid body and a box collider.
    ///
    /// Bodies without world bounds do not collide with the walls.
    pub fn add_body(&mut self, body: &mut Body) {
        let position = body.position();
        let rigid_body = RigidBodyBuilder::dynamic()
            .translation(vector![position.x, position.y])
            .lock_rotations()
            .gravity_scale(0.0)
            .can_sleep(false)
            .build();
        let handle = self.rigid_body_set.insert(rigid_body);

        let filter = if body.collides_with_world_bounds() {
            WALLS
        } else {
            Group::NONE
        };
        let half = body.size() * 0.5;
        let collider = ColliderBuilder::cuboid(half.x, half.y)
            .friction(0.0)
            .restitution(0.0)
            .collision_groups(InteractionGroups::new(BODIES, filter))
            .build();
        self.collider_set
            .insert_with_parent(collider, handle, &mut self.rigid_body_set);

        debug!(
            "Added body at ({}, {}), size {}x{}",
            position.x,
            position.y,
            body.size().x,
            body.size().y
        );
        body.attach(handle);
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Flip the debug flag, returning the new value
    pub fn toggle_debug(&mut self) -> bool {
        self.debug = !self.debug;
        info!(
            "Physics debug {}",
            if self.debug { "enabled" } else { "disabled" }
        );
        self.debug
    }

    /// Step the simulation by `dt` seconds, driving it with `body`'s velocity
    /// and copying the solved state back. Bodies never added to this world are
    /// left untouched.
    pub fn step(&mut self, body: &mut Body, dt: f32) {
        let Some(handle) = body.handle() else {
            return;
        };
        if dt <= 0.0 {
            return;
        }

        if let Some(rigid_body) = self.rigid_body_set.get_mut(handle) {
            let velocity = body.velocity();
            rigid_body.set_linvel(vector![velocity.x, velocity.y], true);
        }

        self.integration_parameters.dt = dt;
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );

        if let Some(rigid_body) = self.rigid_body_set.get(handle) {
            let position = rigid_body.translation();
            let velocity = rigid_body.linvel();
            body.sync(
                Vec2::new(position.x, position.y),
                Vec2::new(velocity.x, velocity.y),
            );
        }
    }
}

impl fmt::Debug for PhysicsWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhysicsWorld")
            .field("bounds", &self.bounds)
            .field("bodies", &self.rigid_body_set.len())
            .field("colliders", &self.collider_set.len())
            .field("debug", &self.debug)
            .finish()
    }
}
