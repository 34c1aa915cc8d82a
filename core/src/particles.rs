use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::timeline::RunToken;

/// Upper bound on particles per run, whatever the configured count.
pub const MAX_CONFETTI_COUNT: usize = 1000;

pub const CONFETTI_PALETTE: [&str; 6] = [
    "#6c5ce7", "#a29bfe", "#fd79a8", "#ff7675", "#74b9ff", "#55efc4",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfettiConfig {
    pub count: usize,
    pub lifetime_ms: f64,
    pub size_min: f64,
    pub size_max: f64,
    pub speed_min: f64,
    pub speed_max: f64,
    /// Rotation rate is drawn from `[-max, max)` radians per frame.
    pub rotation_rate_max: f64,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            count: 150,
            lifetime_ms: 2000.0,
            size_min: 3.0,
            size_max: 11.0,
            speed_min: 2.0,
            speed_max: 5.0,
            rotation_rate_max: 0.1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: &'static str,
    pub speed: f64,
    pub angle: f64,
    pub rotation_rate: f64,
}

/// Where a run draws. The browser implements this over a 2D canvas context.
pub trait ConfettiSurface {
    fn clear(&mut self, width: f64, height: f64);
    /// Fills a `size` square centred on `(x, y)`, rotated by `angle` radians.
    fn fill_square(&mut self, x: f64, y: f64, angle: f64, size: f64, color: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Request another frame.
    Continue,
    /// Lifetime elapsed; this frame was the last one drawn.
    Finished,
    /// A newer run took the surface; nothing was drawn.
    Superseded,
}

pub struct ConfettiRun {
    config: ConfettiConfig,
    width: f64,
    height: f64,
    started_at_ms: f64,
    particles: Vec<Particle>,
    rng: SmallRng,
    token: RunToken,
}

impl ConfettiRun {
    pub fn new(
        config: ConfettiConfig,
        width: f64,
        height: f64,
        started_at_ms: f64,
        seed: u64,
        token: RunToken,
    ) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let width = width.max(0.0);
        let height = height.max(0.0);
        let particles = (0..config.count.min(MAX_CONFETTI_COUNT))
            .map(|_| spawn_particle(&config, width, height, &mut rng))
            .collect();
        Self {
            config,
            width,
            height,
            started_at_ms,
            particles,
            rng,
            token,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn draw<S: ConfettiSurface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.width, self.height);
        for particle in &self.particles {
            surface.fill_square(
                particle.x,
                particle.y,
                particle.angle,
                particle.size,
                particle.color,
            );
        }
    }

    /// Moves every particle one frame; particles that fell past the bottom
    /// edge re-enter just above the top at a fresh x.
    pub fn advance(&mut self) {
        let width = self.width;
        let height = self.height;
        let rng = &mut self.rng;
        for particle in &mut self.particles {
            particle.y += particle.speed;
            particle.angle += particle.rotation_rate;
            if particle.y > height {
                particle.y = -particle.size;
                particle.x = uniform(rng, 0.0, width);
            }
        }
    }

    pub fn frame<S: ConfettiSurface + ?Sized>(&mut self, surface: &mut S, now_ms: f64) -> FrameOutcome {
        if !self.token.is_current() {
            return FrameOutcome::Superseded;
        }
        self.draw(surface);
        self.advance();
        if now_ms - self.started_at_ms < self.config.lifetime_ms {
            FrameOutcome::Continue
        } else {
            FrameOutcome::Finished
        }
    }
}

fn spawn_particle(config: &ConfettiConfig, width: f64, height: f64, rng: &mut SmallRng) -> Particle {
    let color_index = rng.random_range(0..CONFETTI_PALETTE.len());
    Particle {
        x: uniform(rng, 0.0, width),
        y: uniform(rng, -height, 0.0),
        size: uniform(rng, config.size_min, config.size_max),
        color: CONFETTI_PALETTE[color_index],
        speed: uniform(rng, config.speed_min, config.speed_max),
        angle: uniform(rng, 0.0, TAU),
        rotation_rate: uniform(rng, -config.rotation_rate_max, config.rotation_rate_max),
    }
}

fn uniform(rng: &mut SmallRng, min: f64, max: f64) -> f64 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::RunSlot;

    #[test]
    fn zero_sized_surface_still_spawns() {
        let slot = RunSlot::new();
        let run = ConfettiRun::new(ConfettiConfig::default(), 0.0, 0.0, 0.0, 7, slot.begin());
        assert_eq!(run.particles().len(), 150);
        assert!(run.particles().iter().all(|p| p.x == 0.0 && p.y == 0.0));
    }

    #[test]
    fn same_seed_same_particles() {
        let slot = RunSlot::new();
        let a = ConfettiRun::new(ConfettiConfig::default(), 800.0, 600.0, 0.0, 42, slot.begin());
        let b = ConfettiRun::new(ConfettiConfig::default(), 800.0, 600.0, 0.0, 42, slot.begin());
        assert_eq!(a.particles(), b.particles());
    }
}
