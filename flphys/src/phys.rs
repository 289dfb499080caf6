//! Simulation instance, bodies, and the integration step.
//!
//! DESIGN
//! ======
//! A [`Phys`] is created once with a fixed number of bodies and never grows
//! or shrinks, so a body index stays valid for the lifetime of the instance.
//! Each [`Phys::run`] step first accumulates forces on every body, then moves
//! every body with constant acceleration over the step.

#[cfg(test)]
#[path = "phys_test.rs"]
mod phys_test;

use crate::error::PhysError;
use crate::{BALL_DRAG_COEF, G, PI};

/// A 2D quantity: metres, metres per second, or newtons depending on use.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PVec {
    pub x: f64,
    pub y: f64,
}

impl PVec {
    /// Set from polar form.
    pub fn set_polar(&mut self, len: f64, angle: f64) {
        self.x = len * angle.cos();
        self.y = len * angle.sin();
    }

    /// Euclidean length.
    #[must_use]
    pub fn len(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Angle from the +x axis in radians, in `(-π, π]`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

/// One body. Area and volume are derived from the radius and kept in sync by
/// [`PObj::set_radius`].
#[derive(Debug, Clone, Default)]
pub struct PObj {
    pub pos: PVec,
    pub mov: PVec,
    mass: f64,
    radius: f64,
    area: f64,
    volume: f64,
    force: PVec,
}

impl PObj {
    #[must_use]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn set_mass(&mut self, mass: f64) {
        self.mass = mass;
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
        self.area = PI * radius * radius;
        self.volume = (4.0 / 3.0) * PI * radius * radius * radius;
    }

    /// Reset the accumulated force to drag, buoyancy and field acceleration.
    fn apply_ambient_forces(&mut self, density: f64, accel_of_gravity: PVec, wind: PVec) {
        self.force = PVec::default();

        let relative_mov = PVec { x: self.mov.x - wind.x, y: self.mov.y - wind.y };
        let relative_speed = relative_mov.len();

        if density > 0.0 && relative_speed > 0.0 {
            let air_f = self.area * density * relative_speed * relative_speed * 0.5 * BALL_DRAG_COEF;
            let k = air_f / relative_speed;
            self.force.x -= relative_mov.x * k;
            self.force.y -= relative_mov.y * k;
        }

        // Negative when the body is lighter than the fluid it displaces.
        let relative_mass = self.mass - self.volume * density;
        self.force.x += accel_of_gravity.x * relative_mass;
        self.force.y += accel_of_gravity.y * relative_mass;
    }

    /// Advance by `time` seconds under the accumulated force.
    #[allow(clippy::float_cmp)]
    fn step(&mut self, time: f64) -> Result<(), PhysError> {
        if self.mass == 0.0 {
            return Err(PhysError::ZeroMass);
        }
        let acceleration = PVec { x: self.force.x / self.mass, y: self.force.y / self.mass };

        self.pos.x += (self.mov.x + acceleration.x * time * 0.5) * time;
        self.pos.y += (self.mov.y + acceleration.y * time * 0.5) * time;

        self.mov.x += acceleration.x * time;
        self.mov.y += acceleration.y * time;
        Ok(())
    }
}

/// One simulation instance.
///
/// Fresh instances have no fluid, no field acceleration, no wind, gravity
/// between bodies switched off, and every body zeroed.
#[derive(Debug)]
pub struct Phys {
    density: f64,
    accel_of_gravity: PVec,
    wind: PVec,
    is_gravity: bool,
    time: f64,
    objects: Vec<PObj>,
}

impl Phys {
    /// Allocate an instance with `objects_num` zeroed bodies.
    ///
    /// Returns `None` when the body storage cannot be allocated.
    #[must_use]
    pub fn create(objects_num: usize) -> Option<Self> {
        let mut objects = Vec::new();
        if objects.try_reserve_exact(objects_num).is_err() {
            return None;
        }
        objects.resize_with(objects_num, PObj::default);
        Some(Self {
            density: 0.0,
            accel_of_gravity: PVec::default(),
            wind: PVec::default(),
            is_gravity: false,
            time: 0.0,
            objects,
        })
    }

    /// Ambient fluid density in kg/m³. Zero disables drag and buoyancy.
    #[must_use]
    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn set_density(&mut self, density: f64) {
        self.density = density;
    }

    /// Constant acceleration acting on every body, m/s².
    #[must_use]
    pub fn accel_of_gravity(&self) -> &PVec {
        &self.accel_of_gravity
    }

    pub fn accel_of_gravity_mut(&mut self) -> &mut PVec {
        &mut self.accel_of_gravity
    }

    /// Velocity of the ambient fluid, m/s.
    #[must_use]
    pub fn wind(&self) -> &PVec {
        &self.wind
    }

    pub fn wind_mut(&mut self) -> &mut PVec {
        &mut self.wind
    }

    /// Body at `id`, or `None` when `id >= objects_num()`.
    #[must_use]
    pub fn object(&self, id: usize) -> Option<&PObj> {
        self.objects.get(id)
    }

    pub fn object_mut(&mut self, id: usize) -> Option<&mut PObj> {
        self.objects.get_mut(id)
    }

    #[must_use]
    pub fn objects_num(&self) -> usize {
        self.objects.len()
    }

    /// Whether bodies attract each other.
    #[must_use]
    pub fn is_gravity(&self) -> bool {
        self.is_gravity
    }

    pub fn set_is_gravity(&mut self, is_gravity: bool) {
        self.is_gravity = is_gravity;
    }

    /// Total simulated time in seconds.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Advance the simulation by `steps` steps of `step_time` seconds each.
    ///
    /// An instance without bodies is left untouched, including its clock.
    ///
    /// # Errors
    ///
    /// [`PhysError::ZeroMass`] if any body has zero mass, and
    /// [`PhysError::ZeroDist`] if gravity is on and two bodies coincide. The
    /// step in progress is abandoned and the clock is not advanced.
    pub fn run(&mut self, step_time: f64, steps: u32) -> Result<(), PhysError> {
        if self.objects.is_empty() {
            return Ok(());
        }

        for _ in 0..steps {
            for obj in &mut self.objects {
                obj.apply_ambient_forces(self.density, self.accel_of_gravity, self.wind);
            }
            if self.is_gravity && self.objects.len() > 1 {
                apply_mutual_gravity(&mut self.objects)?;
            }
            for obj in &mut self.objects {
                obj.step(step_time)?;
            }
        }
        self.time += step_time * f64::from(steps);
        Ok(())
    }
}

fn apply_mutual_gravity(objects: &mut [PObj]) -> Result<(), PhysError> {
    for i in 0..objects.len() {
        let (head, tail) = objects.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail {
            let dist = PVec { x: a.pos.x - b.pos.x, y: a.pos.y - b.pos.y };

            let dist_len = dist.len();
            if dist_len <= 0.0 {
                return Err(PhysError::ZeroDist);
            }

            let gravity_f = a.mass * b.mass * G / (dist_len * dist_len);
            let k = gravity_f / dist_len;

            a.force.x -= dist.x * k;
            a.force.y -= dist.y * k;
            b.force.x += dist.x * k;
            b.force.y += dist.y * k;
        }
    }
    Ok(())
}
