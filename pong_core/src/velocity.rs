use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use glam::Vec2;
use rand::Rng;

use crate::{GameRng, Params};

/// Puck velocity in units per tick.
///
/// The magnitude is cached next to the components and every mutator keeps the
/// two in step, so callers can read speed without a square root. `cap` is the
/// ceiling that [`Velocity::apply_force_toward`] never lets the speed exceed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    vec: Vec2,
    magnitude: f32,
    cap: f32,
}

impl Velocity {
    pub fn new(x: f32, y: f32, cap: f32) -> Self {
        let vec = Vec2::new(x, y);
        Self {
            vec,
            magnitude: vec.length(),
            cap,
        }
    }

    /// Random launch at speed `r`: within 45° of horizontal, left or right
    /// with equal odds, so the puck never leaves close to vertical.
    pub fn random_with_magnitude(rng: &mut GameRng, r: f32, cap: f32) -> Self {
        let mut angle: f32 = rng.0.gen_range(-FRAC_PI_4..=FRAC_PI_4);
        if rng.0.gen_bool(0.5) {
            angle += PI;
        }
        Self {
            vec: Vec2::new(angle.cos() * r, angle.sin() * r),
            magnitude: r,
            cap,
        }
    }

    pub fn x(&self) -> f32 {
        self.vec.x
    }

    pub fn y(&self) -> f32 {
        self.vec.y
    }

    pub fn as_vec2(&self) -> Vec2 {
        self.vec
    }

    pub fn magnitude(&self) -> f32 {
        self.magnitude
    }

    pub fn cap(&self) -> f32 {
        self.cap
    }

    pub fn reverse_x(&mut self) {
        self.vec.x = -self.vec.x;
    }

    pub fn reverse_y(&mut self) {
        self.vec.y = -self.vec.y;
    }

    /// One tick of constant-strength attraction toward `rel` (a delta from
    /// the puck), then clamp speed to `cap`.
    pub fn apply_force_toward(&mut self, force: f32, rel: Vec2) {
        // atan2(0, 0) is 0, so a zero delta pushes along +x
        let angle = rel.y.atan2(rel.x);
        let unit = Vec2::new(angle.cos(), angle.sin());

        let mut new_vec = self.vec + unit * force;
        let mut new_magnitude = new_vec.length();

        if new_magnitude > self.cap {
            new_vec *= self.cap / new_magnitude;
            new_magnitude = self.cap;
        }

        self.vec = new_vec;
        self.magnitude = new_magnitude;
    }

    /// Rotate toward `target_angle` (radians) keeping speed.
    ///
    /// `bend_factor` 0.0 keeps the current heading, 1.0 adopts the target.
    pub fn bend_toward(&mut self, target_angle: f32, bend_factor: f32) {
        if self.magnitude == 0.0 {
            return;
        }

        let current_angle = (self.vec.y / self.magnitude).clamp(-1.0, 1.0).asin();
        let mut new_angle = current_angle + bend_factor * (target_angle - current_angle);

        // asin only covers the right half-plane; mirror back for leftward travel
        if self.vec.x < 0.0 {
            new_angle = PI - new_angle;
        }

        self.vec = Vec2::new(new_angle.cos(), new_angle.sin()) * self.magnitude;
    }

    /// Bend toward screen-up (negative y)
    pub fn bend_up(&mut self, bend_factor: f32) {
        self.bend_toward(-FRAC_PI_2, bend_factor * Params::BEND_DAMPING);
    }

    /// Bend toward screen-down (positive y)
    pub fn bend_down(&mut self, bend_factor: f32) {
        self.bend_toward(FRAC_PI_2, bend_factor * Params::BEND_DAMPING);
    }
}
