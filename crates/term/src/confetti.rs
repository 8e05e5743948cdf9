//! Confetti: falling particles drawn over the game after a win.
//!
//! Purely cosmetic. Particles live in fractional cell coordinates and are
//! advanced by [`Confetti::tick`]; [`Confetti::draw`] stamps them onto a
//! framebuffer after the rest of the frame has been rendered.
//!
//! Behaviour:
//! - `start` spawns one particle per column above the visible area
//! - particles leaving the bottom edge are dropped
//! - while running, a fresh batch is added whenever fewer than
//!   [`CONFETTI_MIN_PARTICLES`] remain
//! - the effect stops by itself after [`CONFETTI_DURATION_MS`]

use log::debug;

use crate::core::{Celebration, SimpleRng};
use crate::fb::{FrameBuffer, Rgb};
use crate::game_view::Viewport;
use crate::types::{CONFETTI_DURATION_MS, CONFETTI_MIN_PARTICLES};

/// Particle palette.
pub const PALETTE: [Rgb; 15] = [
    Rgb::new(0xf4, 0x43, 0x36),
    Rgb::new(0xe9, 0x1e, 0x63),
    Rgb::new(0x9c, 0x27, 0xb0),
    Rgb::new(0x67, 0x3a, 0xb7),
    Rgb::new(0x3f, 0x51, 0xb5),
    Rgb::new(0x21, 0x96, 0xf3),
    Rgb::new(0x03, 0xa9, 0xf4),
    Rgb::new(0x00, 0xbc, 0xd4),
    Rgb::new(0x00, 0x96, 0x88),
    Rgb::new(0x4c, 0xaf, 0x50),
    Rgb::new(0x8b, 0xc3, 0x4a),
    Rgb::new(0xff, 0xeb, 0x3b),
    Rgb::new(0xff, 0xc1, 0x07),
    Rgb::new(0xff, 0x98, 0x00),
    Rgb::new(0xff, 0x57, 0x22),
];

/// Horizontal drift, columns per second.
const SPEED_X: (f32, f32) = (-6.0, 6.0);
/// Fall speed, rows per second.
const SPEED_Y: (f32, f32) = (4.0, 16.0);
/// Spin, degrees per second.
const SPIN: (f32, f32) = (-300.0, 300.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Degrees.
    pub rotation: f32,
    pub spin: f32,
    pub color: Rgb,
    pub shape: Shape,
}

impl Particle {
    /// Glyph for the particle's current orientation.
    pub fn glyph(&self) -> char {
        match self.shape {
            Shape::Circle => '●',
            Shape::Square => {
                if self.rotation.rem_euclid(90.0) < 45.0 {
                    '■'
                } else {
                    '◆'
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Confetti {
    particles: Vec<Particle>,
    rng: SimpleRng,
    viewport: Viewport,
    active: bool,
    elapsed_ms: u32,
    duration_ms: u32,
}

impl Confetti {
    pub fn new(seed: u32) -> Self {
        Self {
            particles: Vec::new(),
            rng: SimpleRng::new(seed),
            viewport: Viewport::new(80, 24),
            active: false,
            elapsed_ms: 0,
            duration_ms: CONFETTI_DURATION_MS,
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Area new particles are spread over.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Start the effect; ignored while it is already running.
    pub fn start(&mut self) {
        if self.active {
            debug!("confetti already running");
            return;
        }
        self.active = true;
        self.elapsed_ms = 0;
        self.particles.clear();
        self.spawn_batch();
        debug!("confetti started with {} particles", self.particles.len());
    }

    /// Stop and drop every particle.
    pub fn stop(&mut self) {
        if self.active || !self.particles.is_empty() {
            debug!("confetti stopped, cleared {} particles", self.particles.len());
        }
        self.active = false;
        self.particles.clear();
    }

    /// Advance the effect by `dt_ms`.
    pub fn tick(&mut self, dt_ms: u32) {
        if !self.active {
            return;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        if self.elapsed_ms >= self.duration_ms {
            self.stop();
            return;
        }

        let dt = dt_ms as f32 / 1000.0;
        let bottom = self.viewport.height as f32;
        for p in &mut self.particles {
            p.x += p.vx * dt;
            p.y += p.vy * dt;
            p.rotation += p.spin * dt;
        }
        self.particles.retain(|p| p.y <= bottom);

        if self.particles.len() < CONFETTI_MIN_PARTICLES {
            self.spawn_batch();
        }
    }

    /// Stamp visible particles onto `fb`, keeping each cell's background.
    pub fn draw(&self, fb: &mut FrameBuffer) {
        for p in &self.particles {
            if p.x < 0.0 || p.y < 0.0 {
                continue;
            }
            let (x, y) = (p.x as u16, p.y as u16);
            if let Some(cell) = fb.get(x, y) {
                let style = cell.style.with_fg(p.color).bold();
                fb.put_char(x, y, p.glyph(), style);
            }
        }
    }

    fn spawn_batch(&mut self) {
        let w = self.viewport.width.max(1) as f32;
        let h = self.viewport.height.max(1) as f32;
        let count = self.viewport.width.max(1) as usize;

        self.particles.reserve(count);
        for _ in 0..count {
            let color = PALETTE[self.rng.next_range(PALETTE.len() as u32) as usize];
            let shape = if self.rng.next_f32() > 0.5 {
                Shape::Circle
            } else {
                Shape::Square
            };
            self.particles.push(Particle {
                x: self.rng.range_f32(0.0, w),
                y: self.rng.range_f32(-h, 0.0),
                vx: self.rng.range_f32(SPEED_X.0, SPEED_X.1),
                vy: self.rng.range_f32(SPEED_Y.0, SPEED_Y.1),
                rotation: self.rng.range_f32(0.0, 360.0),
                spin: self.rng.range_f32(SPIN.0, SPIN.1),
                color,
                shape,
            });
        }
    }
}

impl Celebration for Confetti {
    fn celebrate(&mut self) {
        self.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_follows_rotation() {
        let mut p = Particle {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            rotation: 10.0,
            spin: 0.0,
            color: PALETTE[0],
            shape: Shape::Square,
        };
        assert_eq!(p.glyph(), '■');
        p.rotation = 60.0;
        assert_eq!(p.glyph(), '◆');
        p.rotation = -30.0;
        assert_eq!(p.glyph(), '◆');
        p.shape = Shape::Circle;
        assert_eq!(p.glyph(), '●');
    }

    #[test]
    fn batch_spawns_above_screen() {
        let mut confetti = Confetti::new(5);
        confetti.set_viewport(Viewport::new(30, 10));
        confetti.start();

        assert_eq!(confetti.particles().len(), 30);
        for p in confetti.particles() {
            assert!((0.0..30.0).contains(&p.x));
            assert!((-10.0..0.0).contains(&p.y));
            assert!(p.vy >= SPEED_Y.0);
        }
    }
}
