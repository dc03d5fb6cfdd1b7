//! Physics collaborator boundary.
//!
//! The rest of the engine only ever talks to this module through its
//! query/command surface: create bodies, read/write linear velocity, apply
//! impulses, read/write position, destroy. Bodies carry a closed
//! [`ColliderType`] classification and an optional listener [`Entity`] used
//! to address contact begin/end notifications.
//!
//! [`Physics::step`] integrates gravity for dynamic bodies, resolves
//! circle-vs-platform overlap, and diffs the overlap set into begin/end
//! contact pairs. The [`physics_step`](crate::systems::physics::physics_step)
//! system drains those pairs into ECS events each frame.

use bevy_ecs::prelude::{Entity, Resource};
use raylib::prelude::Vector2;
use rustc_hash::FxHashSet;

/// Opaque handle to a body owned by the [`Physics`] resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(usize);

/// Simulation role of a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Never moves; platforms and sensors.
    Static,
    /// Integrated under gravity and resolved against platforms.
    Dynamic,
}

/// Closed classification tag used to dispatch contact handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColliderType {
    Player,
    Platform,
    Item,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Copy)]
enum Shape {
    Circle { radius: f32 },
    Rect { half_w: f32, half_h: f32 },
}

#[derive(Debug)]
struct Body {
    pos: Vector2,
    vel: Vector2,
    kind: BodyKind,
    shape: Shape,
    ctype: ColliderType,
    listener: Option<Entity>,
    alive: bool,
}

/// Body arena plus per-step contact bookkeeping.
#[derive(Resource)]
pub struct Physics {
    bodies: Vec<Body>,
    gravity: Vector2,
    contacts: FxHashSet<(usize, usize)>,
    began: Vec<(BodyHandle, BodyHandle)>,
    ended: Vec<(BodyHandle, BodyHandle)>,
}

impl Physics {
    /// Create a world with downward gravity in world pixels per second squared.
    pub fn new(gravity_y: f32) -> Self {
        Self {
            bodies: Vec::new(),
            gravity: Vector2 {
                x: 0.0,
                y: gravity_y,
            },
            contacts: FxHashSet::default(),
            began: Vec::new(),
            ended: Vec::new(),
        }
    }

    // ---------------- command surface ----------------

    /// Create a circle body centered at `(x, y)`.
    pub fn create_circle(&mut self, x: f32, y: f32, radius: f32, kind: BodyKind) -> BodyHandle {
        self.push_body(x, y, Shape::Circle { radius }, kind)
    }

    /// Create a rectangle body centered at `(x, y)`.
    pub fn create_rect(&mut self, x: f32, y: f32, w: f32, h: f32, kind: BodyKind) -> BodyHandle {
        self.push_body(
            x,
            y,
            Shape::Rect {
                half_w: w / 2.0,
                half_h: h / 2.0,
            },
            kind,
        )
    }

    fn push_body(&mut self, x: f32, y: f32, shape: Shape, kind: BodyKind) -> BodyHandle {
        self.bodies.push(Body {
            pos: Vector2 { x, y },
            vel: Vector2 { x: 0.0, y: 0.0 },
            kind,
            shape,
            ctype: ColliderType::Unknown,
            listener: None,
            alive: true,
        });
        BodyHandle(self.bodies.len() - 1)
    }

    pub fn set_collider_type(&mut self, handle: BodyHandle, ctype: ColliderType) {
        if let Some(body) = self.body_mut(handle) {
            body.ctype = ctype;
        }
    }

    pub fn collider_type(&self, handle: BodyHandle) -> ColliderType {
        self.body(handle).map(|b| b.ctype).unwrap_or_default()
    }

    /// Register the entity that receives contact begin/end notifications.
    pub fn set_listener(&mut self, handle: BodyHandle, entity: Entity) {
        if let Some(body) = self.body_mut(handle) {
            body.listener = Some(entity);
        }
    }

    pub fn listener(&self, handle: BodyHandle) -> Option<Entity> {
        self.body(handle).and_then(|b| b.listener)
    }

    pub fn linear_velocity(&self, handle: BodyHandle) -> Vector2 {
        self.body(handle)
            .map(|b| b.vel)
            .unwrap_or(Vector2 { x: 0.0, y: 0.0 })
    }

    pub fn set_linear_velocity(&mut self, handle: BodyHandle, velocity: Vector2) {
        if let Some(body) = self.body_mut(handle) {
            body.vel = velocity;
        }
    }

    /// Apply an instantaneous impulse at the body center (unit mass).
    pub fn apply_impulse_to_center(&mut self, handle: BodyHandle, ix: f32, iy: f32) {
        if let Some(body) = self.body_mut(handle) {
            body.vel.x += ix;
            body.vel.y += iy;
        }
    }

    pub fn position(&self, handle: BodyHandle) -> Vector2 {
        self.body(handle)
            .map(|b| b.pos)
            .unwrap_or(Vector2 { x: 0.0, y: 0.0 })
    }

    /// Relocate a body without touching its velocity.
    pub fn set_position(&mut self, handle: BodyHandle, x: f32, y: f32) {
        if let Some(body) = self.body_mut(handle) {
            body.pos = Vector2 { x, y };
        }
    }

    /// Remove a body from the simulation. Its handle becomes inert: queries
    /// return defaults and commands are ignored. Live contact pairs involving
    /// the body are dropped without emitting end pairs; a picked-up item
    /// vanishes silently instead of reporting a contact end.
    pub fn destroy(&mut self, handle: BodyHandle) {
        if let Some(body) = self.body_mut(handle) {
            body.alive = false;
        }
        self.contacts
            .retain(|&(a, b)| a != handle.0 && b != handle.0);
    }

    fn body(&self, handle: BodyHandle) -> Option<&Body> {
        match self.bodies.get(handle.0) {
            Some(body) if body.alive => Some(body),
            _ => {
                log::warn!("physics: access to dead or invalid body {handle:?}");
                None
            }
        }
    }

    fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        match self.bodies.get_mut(handle.0) {
            Some(body) if body.alive => Some(body),
            _ => {
                log::warn!("physics: access to dead or invalid body {handle:?}");
                None
            }
        }
    }

    // ---------------- stepping ----------------

    /// Integrate, resolve against platforms, and diff the contact set.
    pub fn step(&mut self, dt: f32) {
        // Integrate dynamic bodies.
        for body in self.bodies.iter_mut().filter(|b| b.alive) {
            if body.kind == BodyKind::Dynamic {
                body.vel.x += self.gravity.x * dt;
                body.vel.y += self.gravity.y * dt;
                body.pos.x += body.vel.x * dt;
                body.pos.y += body.vel.y * dt;
            }
        }

        // Overlap scan. Pairs with a dynamic participant are contacts;
        // dynamic circles are additionally pushed out of platform rects.
        let mut current: FxHashSet<(usize, usize)> = FxHashSet::default();
        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                if !self.bodies[i].alive || !self.bodies[j].alive {
                    continue;
                }
                if self.bodies[i].kind != BodyKind::Dynamic
                    && self.bodies[j].kind != BodyKind::Dynamic
                {
                    continue;
                }
                if !Self::overlaps(&self.bodies[i], &self.bodies[j]) {
                    continue;
                }
                current.insert((i, j));

                let (dyn_idx, other_idx) = if self.bodies[i].kind == BodyKind::Dynamic {
                    (i, j)
                } else {
                    (j, i)
                };
                if self.bodies[other_idx].ctype == ColliderType::Platform {
                    self.resolve_against_platform(dyn_idx, other_idx);
                }
            }
        }

        for &pair in current.iter() {
            if !self.contacts.contains(&pair) {
                self.began.push((BodyHandle(pair.0), BodyHandle(pair.1)));
            }
        }
        for &pair in self.contacts.iter() {
            if !current.contains(&pair) {
                self.ended.push((BodyHandle(pair.0), BodyHandle(pair.1)));
            }
        }
        self.contacts = current;
    }

    /// Contact pairs that started this step. Draining resets the queue.
    pub fn drain_contacts_began(&mut self) -> Vec<(BodyHandle, BodyHandle)> {
        std::mem::take(&mut self.began)
    }

    /// Contact pairs that ended this step. Draining resets the queue.
    pub fn drain_contacts_ended(&mut self) -> Vec<(BodyHandle, BodyHandle)> {
        std::mem::take(&mut self.ended)
    }

    fn overlaps(a: &Body, b: &Body) -> bool {
        match (a.shape, b.shape) {
            (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
                let dx = a.pos.x - b.pos.x;
                let dy = a.pos.y - b.pos.y;
                dx * dx + dy * dy < (ra + rb) * (ra + rb)
            }
            (Shape::Circle { radius }, Shape::Rect { half_w, half_h }) => {
                Self::circle_rect_overlap(a.pos, radius, b.pos, half_w, half_h)
            }
            (Shape::Rect { half_w, half_h }, Shape::Circle { radius }) => {
                Self::circle_rect_overlap(b.pos, radius, a.pos, half_w, half_h)
            }
            (
                Shape::Rect {
                    half_w: aw,
                    half_h: ah,
                },
                Shape::Rect {
                    half_w: bw,
                    half_h: bh,
                },
            ) => {
                (a.pos.x - b.pos.x).abs() < aw + bw && (a.pos.y - b.pos.y).abs() < ah + bh
            }
        }
    }

    fn circle_rect_overlap(
        center: Vector2,
        radius: f32,
        rect_center: Vector2,
        half_w: f32,
        half_h: f32,
    ) -> bool {
        let cx = center
            .x
            .clamp(rect_center.x - half_w, rect_center.x + half_w);
        let cy = center
            .y
            .clamp(rect_center.y - half_h, rect_center.y + half_h);
        let dx = center.x - cx;
        let dy = center.y - cy;
        dx * dx + dy * dy < radius * radius
    }

    /// Push a dynamic circle out of a platform rect along the axis of least
    /// penetration and cancel the velocity component driving it in.
    fn resolve_against_platform(&mut self, dyn_idx: usize, platform_idx: usize) {
        let (radius, pos, vel) = match self.bodies[dyn_idx].shape {
            Shape::Circle { radius } => (
                radius,
                self.bodies[dyn_idx].pos,
                self.bodies[dyn_idx].vel,
            ),
            // Only circle actors are simulated dynamically.
            Shape::Rect { .. } => return,
        };
        let (half_w, half_h) = match self.bodies[platform_idx].shape {
            Shape::Rect { half_w, half_h } => (half_w, half_h),
            Shape::Circle { .. } => return,
        };
        let rect = self.bodies[platform_idx].pos;

        let pen_left = (pos.x + radius) - (rect.x - half_w);
        let pen_right = (rect.x + half_w) - (pos.x - radius);
        let pen_top = (pos.y + radius) - (rect.y - half_h);
        let pen_bottom = (rect.y + half_h) - (pos.y - radius);
        let min_pen = pen_left.min(pen_right).min(pen_top).min(pen_bottom);
        if min_pen <= 0.0 {
            return;
        }

        let mut pos = pos;
        let mut vel = vel;
        if min_pen == pen_top {
            pos.y -= pen_top;
            if vel.y > 0.0 {
                vel.y = 0.0;
            }
        } else if min_pen == pen_bottom {
            pos.y += pen_bottom;
            if vel.y < 0.0 {
                vel.y = 0.0;
            }
        } else if min_pen == pen_left {
            pos.x -= pen_left;
            if vel.x > 0.0 {
                vel.x = 0.0;
            }
        } else {
            pos.x += pen_right;
            if vel.x < 0.0 {
                vel.x = 0.0;
            }
        }

        self.bodies[dyn_idx].pos = pos;
        self.bodies[dyn_idx].vel = vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    // ==================== COMMAND SURFACE TESTS ====================

    #[test]
    fn test_create_and_query_position() {
        let mut physics = Physics::new(0.0);
        let body = physics.create_circle(100.0, 200.0, 16.0, BodyKind::Dynamic);
        let pos = physics.position(body);
        assert!(approx_eq(pos.x, 100.0));
        assert!(approx_eq(pos.y, 200.0));
    }

    #[test]
    fn test_velocity_roundtrip_and_impulse() {
        let mut physics = Physics::new(0.0);
        let body = physics.create_circle(0.0, 0.0, 8.0, BodyKind::Dynamic);
        physics.set_linear_velocity(body, Vector2 { x: 3.0, y: -1.0 });
        physics.apply_impulse_to_center(body, 0.0, -4.0);
        let vel = physics.linear_velocity(body);
        assert!(approx_eq(vel.x, 3.0));
        assert!(approx_eq(vel.y, -5.0));
    }

    #[test]
    fn test_set_position_keeps_velocity() {
        let mut physics = Physics::new(0.0);
        let body = physics.create_circle(0.0, 0.0, 8.0, BodyKind::Dynamic);
        physics.set_linear_velocity(body, Vector2 { x: 7.0, y: 2.0 });
        physics.set_position(body, 96.0, 96.0);
        let pos = physics.position(body);
        let vel = physics.linear_velocity(body);
        assert!(approx_eq(pos.x, 96.0) && approx_eq(pos.y, 96.0));
        assert!(approx_eq(vel.x, 7.0) && approx_eq(vel.y, 2.0));
    }

    #[test]
    fn test_collider_type_and_listener() {
        let mut physics = Physics::new(0.0);
        let body = physics.create_rect(0.0, 0.0, 32.0, 32.0, BodyKind::Static);
        assert_eq!(physics.collider_type(body), ColliderType::Unknown);
        physics.set_collider_type(body, ColliderType::Platform);
        assert_eq!(physics.collider_type(body), ColliderType::Platform);
        assert!(physics.listener(body).is_none());
    }

    #[test]
    fn test_destroyed_body_is_inert() {
        let mut physics = Physics::new(0.0);
        let body = physics.create_circle(10.0, 10.0, 8.0, BodyKind::Dynamic);
        physics.destroy(body);
        let pos = physics.position(body);
        assert!(approx_eq(pos.x, 0.0) && approx_eq(pos.y, 0.0));
        physics.set_linear_velocity(body, Vector2 { x: 1.0, y: 1.0 });
        let vel = physics.linear_velocity(body);
        assert!(approx_eq(vel.x, 0.0) && approx_eq(vel.y, 0.0));
    }

    // ==================== STEP TESTS ====================

    #[test]
    fn test_gravity_integration() {
        let mut physics = Physics::new(100.0);
        let body = physics.create_circle(0.0, 0.0, 8.0, BodyKind::Dynamic);
        physics.step(0.5);
        let vel = physics.linear_velocity(body);
        let pos = physics.position(body);
        assert!(approx_eq(vel.y, 50.0));
        assert!(approx_eq(pos.y, 25.0));
    }

    #[test]
    fn test_static_bodies_ignore_gravity() {
        let mut physics = Physics::new(100.0);
        let platform = physics.create_rect(0.0, 50.0, 100.0, 10.0, BodyKind::Static);
        physics.step(1.0);
        let pos = physics.position(platform);
        assert!(approx_eq(pos.y, 50.0));
    }

    #[test]
    fn test_landing_emits_contact_begin_and_stops_fall() {
        let mut physics = Physics::new(900.0);
        let platform = physics.create_rect(50.0, 100.0, 200.0, 20.0, BodyKind::Static);
        physics.set_collider_type(platform, ColliderType::Platform);
        let actor = physics.create_circle(50.0, 70.0, 16.0, BodyKind::Dynamic);
        physics.set_collider_type(actor, ColliderType::Player);

        // Fall until contact.
        let mut began = Vec::new();
        for _ in 0..60 {
            physics.step(1.0 / 60.0);
            began.extend(physics.drain_contacts_began());
            if !began.is_empty() {
                break;
            }
        }
        assert_eq!(began.len(), 1);

        // Resting on top: vertical velocity cancelled, circle sits on the rect.
        let vel = physics.linear_velocity(actor);
        assert!(vel.y <= EPSILON);
        let pos = physics.position(actor);
        assert!(pos.y <= 90.0 + EPSILON + 1.0);
    }

    #[test]
    fn test_leaving_platform_emits_contact_end() {
        let mut physics = Physics::new(900.0);
        let platform = physics.create_rect(50.0, 100.0, 200.0, 20.0, BodyKind::Static);
        physics.set_collider_type(platform, ColliderType::Platform);
        let actor = physics.create_circle(50.0, 75.0, 16.0, BodyKind::Dynamic);

        physics.step(1.0 / 60.0);
        assert_eq!(physics.drain_contacts_began().len(), 1);

        // Launch upward hard enough to separate in one step.
        physics.set_linear_velocity(actor, Vector2 { x: 0.0, y: -600.0 });
        physics.step(1.0 / 60.0);
        assert_eq!(physics.drain_contacts_ended().len(), 1);
    }

    #[test]
    fn test_item_overlap_does_not_block() {
        let mut physics = Physics::new(0.0);
        let item = physics.create_circle(40.0, 0.0, 8.0, BodyKind::Static);
        physics.set_collider_type(item, ColliderType::Item);
        let actor = physics.create_circle(0.0, 0.0, 16.0, BodyKind::Dynamic);
        physics.set_linear_velocity(actor, Vector2 { x: 60.0, y: 0.0 });

        physics.step(0.5);
        // Overlapping the item produced a contact but no pushback.
        assert_eq!(physics.drain_contacts_began().len(), 1);
        let vel = physics.linear_velocity(actor);
        assert!(approx_eq(vel.x, 60.0));
        let pos = physics.position(actor);
        assert!(approx_eq(pos.x, 30.0));
    }

    #[test]
    fn test_side_contact_with_platform_is_reported() {
        let mut physics = Physics::new(0.0);
        let wall = physics.create_rect(100.0, 0.0, 20.0, 200.0, BodyKind::Static);
        physics.set_collider_type(wall, ColliderType::Platform);
        let actor = physics.create_circle(60.0, 0.0, 16.0, BodyKind::Dynamic);
        physics.set_linear_velocity(actor, Vector2 { x: 120.0, y: 0.0 });

        let mut began = Vec::new();
        for _ in 0..30 {
            physics.step(1.0 / 60.0);
            began.extend(physics.drain_contacts_began());
            if !began.is_empty() {
                break;
            }
        }
        assert_eq!(began.len(), 1);
        // Pushed back out of the wall, horizontal velocity cancelled.
        let pos = physics.position(actor);
        assert!(pos.x <= 90.0 - 16.0 + EPSILON + 1.0);
        let vel = physics.linear_velocity(actor);
        assert!(vel.x <= EPSILON);
    }

    #[test]
    fn test_destroy_drops_contacts_without_end_pair() {
        let mut physics = Physics::new(0.0);
        let item = physics.create_circle(10.0, 0.0, 8.0, BodyKind::Static);
        physics.set_collider_type(item, ColliderType::Item);
        physics.create_circle(0.0, 0.0, 16.0, BodyKind::Dynamic);

        physics.step(1.0 / 60.0);
        assert_eq!(physics.drain_contacts_began().len(), 1);

        physics.destroy(item);
        physics.step(1.0 / 60.0);
        // The pair disappears with the body; no end pair is reported.
        assert!(physics.drain_contacts_ended().is_empty());
    }

    #[test]
    fn test_resting_contact_does_not_rebegin() {
        let mut physics = Physics::new(900.0);
        let platform = physics.create_rect(50.0, 100.0, 200.0, 20.0, BodyKind::Static);
        physics.set_collider_type(platform, ColliderType::Platform);
        physics.create_circle(50.0, 75.0, 16.0, BodyKind::Dynamic);

        physics.step(1.0 / 60.0);
        assert_eq!(physics.drain_contacts_began().len(), 1);
        for _ in 0..10 {
            physics.step(1.0 / 60.0);
            assert!(physics.drain_contacts_began().is_empty());
            assert!(physics.drain_contacts_ended().is_empty());
        }
    }
}
