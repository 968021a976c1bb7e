//! Particle field simulation (stateful).

use rand::Rng;

use crate::color::Rgb;
use crate::surface::Surface;

/// Pointer influence reaches this far, in surface units.
pub const REPULSION_RADIUS: f32 = 250.0;
/// Particles closer than this are linked by a line.
pub const CONNECTION_DISTANCE: f32 = 140.0;
/// Hard cap on the number of particles.
pub const MAX_PARTICLES: usize = 300;
/// Smallest depth factor (farthest from the viewer).
pub const MIN_DEPTH: f32 = 0.5;
/// Exclusive upper bound of the depth factor (closest to the viewer).
pub const MAX_DEPTH: f32 = 2.0;

/// One particle per this many units of surface width.
const DENSITY_DIVISOR: f32 = 4.0;
/// Speed in units per frame for each unit of depth.
const SPEED_PER_DEPTH: f32 = 0.1;
/// Link opacity at zero distance, before depth scaling.
const LINK_BASE_OPACITY: f32 = 0.15;
/// Links fainter than this are not drawn.
const LINK_CULL_OPACITY: f32 = 0.01;

/// Particle color identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hue {
    Cyan,
    Purple,
}

impl Hue {
    pub fn rgb(self) -> Rgb {
        match self {
            Hue::Cyan => Rgb(34, 211, 238),
            Hue::Purple => Rgb(168, 85, 247),
        }
    }
}

/// A single particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Depth factor in `[MIN_DEPTH, MAX_DEPTH)`; larger is closer.
    pub z: f32,
    pub radius: f32,
    pub hue: Hue,
}

impl Particle {
    /// Spawn a particle at a random position inside `width` x `height`.
    pub fn spawn<R: Rng>(rng: &mut R, width: f32, height: f32) -> Self {
        let z = rng.gen_range(MIN_DEPTH..MAX_DEPTH);
        let heading = rng.gen_range(0.0..std::f32::consts::TAU);
        let speed = Self::speed_for_depth(z);
        Self {
            x: rng.gen_range(0.0..=width),
            y: rng.gen_range(0.0..=height),
            vx: heading.cos() * speed,
            vy: heading.sin() * speed,
            z,
            radius: Self::radius_for_depth(z),
            hue: if rng.gen_bool(0.5) {
                Hue::Cyan
            } else {
                Hue::Purple
            },
        }
    }

    /// Radius grows with depth so near particles look larger.
    pub fn radius_for_depth(z: f32) -> f32 {
        1.0 + 0.75 * z
    }

    /// Speed grows with depth so near particles move faster (parallax).
    pub fn speed_for_depth(z: f32) -> f32 {
        SPEED_PER_DEPTH * z
    }

    pub fn opacity(&self) -> f32 {
        (self.z * 0.4).min(0.8)
    }

    /// Advance one frame: move, yield to the pointer, then reflect off edges.
    fn update(&mut self, width: f32, height: f32, pointer: Option<(f32, f32)>) {
        self.x += self.vx;
        self.y += self.vy;

        if let Some(pointer) = pointer {
            self.repel(pointer);
        }

        self.reflect(width, height);
    }

    fn repel(&mut self, (px, py): (f32, f32)) {
        let dx = px - self.x;
        let dy = py - self.y;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance >= REPULSION_RADIUS || distance == 0.0 {
            return;
        }

        let force = (REPULSION_RADIUS - distance) / REPULSION_RADIUS;
        let strength = 2.0 * self.z;
        self.x -= dx / distance * force * strength;
        self.y -= dy / distance * force * strength;
    }

    fn reflect(&mut self, width: f32, height: f32) {
        if self.x < 0.0 {
            self.x = 0.0;
            self.vx = self.vx.abs();
        } else if self.x > width {
            self.x = width;
            self.vx = -self.vx.abs();
        }

        if self.y < 0.0 {
            self.y = 0.0;
            self.vy = self.vy.abs();
        } else if self.y > height {
            self.y = height;
            self.vy = -self.vy.abs();
        }
    }

    fn distance_to(&self, other: &Particle) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Number of particles for a surface `width` units wide, capped at `cap`
/// (itself never above [`MAX_PARTICLES`]).
pub fn particle_count(width: f32, cap: usize) -> usize {
    ((width / DENSITY_DIVISOR).max(0.0) as usize).min(cap.min(MAX_PARTICLES))
}

/// Opacity of the link between two particles `distance` apart with mean
/// depth `avg_z`. Zero at or beyond [`CONNECTION_DISTANCE`].
pub fn link_opacity(distance: f32, avg_z: f32) -> f32 {
    if distance >= CONNECTION_DISTANCE {
        return 0.0;
    }
    (LINK_BASE_OPACITY - distance / CONNECTION_DISTANCE * LINK_BASE_OPACITY) * avg_z * 0.5
}

/// Particle simulation owned by one background instance.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    pointer: Option<(f32, f32)>,
}

impl ParticleField {
    /// Populate a field sized to `surface`.
    ///
    /// Returns `None` when the surface has no area yet.
    pub fn start<S, R>(surface: &S, cap: usize, rng: &mut R) -> Option<Self>
    where
        S: Surface + ?Sized,
        R: Rng,
    {
        let (width, height) = (surface.width(), surface.height());
        if width <= 0.0 || height <= 0.0 {
            return None;
        }

        let count = particle_count(width, cap);
        let particles = (0..count)
            .map(|_| Particle::spawn(&mut *rng, width, height))
            .collect();
        Some(Self {
            particles,
            pointer: None,
        })
    }

    /// Build a field from existing particles.
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self {
            particles,
            pointer: None,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> Option<(f32, f32)> {
        self.pointer
    }

    /// Pointer moved to `(x, y)` in surface units.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = Some((x, y));
    }

    /// Pointer left the tracked region.
    pub fn pointer_left(&mut self) {
        self.pointer = None;
    }

    /// Advance every particle one frame within the surface bounds.
    pub fn update(&mut self, width: f32, height: f32) {
        let pointer = self.pointer;
        for particle in &mut self.particles {
            particle.update(width, height, pointer);
        }
    }

    /// Run one animation frame: clear, update, draw particles, draw links.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();
        self.update(surface.width(), surface.height());
        self.draw(surface);
    }

    /// Draw particles and links at their current positions.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for p in &self.particles {
            surface.fill_circle(p.x, p.y, p.radius, p.hue.rgb(), p.opacity());
        }

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.distance_to(b);
                if distance >= CONNECTION_DISTANCE {
                    continue;
                }
                let avg_z = (a.z + b.z) / 2.0;
                let opacity = link_opacity(distance, avg_z);
                if opacity <= LINK_CULL_OPACITY {
                    continue;
                }
                surface.stroke_line((a.x, a.y), (b.x, b.y), 0.5 * avg_z, Rgb::WHITE, opacity);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear,
        Circle { x: f32, y: f32, opacity: f32 },
        Line { opacity: f32 },
    }

    /// Surface that records draw calls instead of rasterizing them.
    struct Recorder {
        width: f32,
        height: f32,
        ops: Vec<Op>,
    }

    impl Recorder {
        fn new(width: f32, height: f32) -> Self {
            Self {
                width,
                height,
                ops: Vec::new(),
            }
        }
    }

    impl Surface for Recorder {
        fn width(&self) -> f32 {
            self.width
        }
        fn height(&self) -> f32 {
            self.height
        }
        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }
        fn fill_circle(&mut self, x: f32, y: f32, _radius: f32, _color: Rgb, opacity: f32) {
            self.ops.push(Op::Circle { x, y, opacity });
        }
        fn stroke_line(&mut self, _: (f32, f32), _: (f32, f32), _: f32, _: Rgb, opacity: f32) {
            self.ops.push(Op::Line { opacity });
        }
    }

    fn particle(x: f32, y: f32, vx: f32, vy: f32, z: f32) -> Particle {
        Particle {
            x,
            y,
            vx,
            vy,
            z,
            radius: Particle::radius_for_depth(z),
            hue: Hue::Cyan,
        }
    }

    #[test]
    fn test_particle_count() {
        assert_eq!(particle_count(640.0, MAX_PARTICLES), 160);
        assert_eq!(particle_count(2000.0, MAX_PARTICLES), 300);
        assert_eq!(particle_count(2000.0, 50), 50);
        assert_eq!(particle_count(2000.0, 1000), 300);
        assert_eq!(particle_count(3.0, MAX_PARTICLES), 0);
    }

    #[test]
    fn test_start_spawns_inside_surface() {
        let surface = Recorder::new(640.0, 320.0);
        let mut rng = StdRng::seed_from_u64(1);
        let field = ParticleField::start(&surface, MAX_PARTICLES, &mut rng).unwrap();
        assert_eq!(field.particles().len(), 160);
        for p in field.particles() {
            assert!((0.0..=640.0).contains(&p.x));
            assert!((0.0..=320.0).contains(&p.y));
            assert!((MIN_DEPTH..MAX_DEPTH).contains(&p.z));
            assert_eq!(p.radius, Particle::radius_for_depth(p.z));
            let speed = (p.vx * p.vx + p.vy * p.vy).sqrt();
            assert!((speed - Particle::speed_for_depth(p.z)).abs() < 1e-5);
        }
        assert!(field.pointer().is_none());
    }

    #[test]
    fn test_start_without_area_is_noop() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(ParticleField::start(&Recorder::new(0.0, 100.0), 300, &mut rng).is_none());
        assert!(ParticleField::start(&Recorder::new(100.0, 0.0), 300, &mut rng).is_none());
    }

    #[test]
    fn test_both_hues_appear() {
        let surface = Recorder::new(1200.0, 600.0);
        let mut rng = StdRng::seed_from_u64(3);
        let field = ParticleField::start(&surface, MAX_PARTICLES, &mut rng).unwrap();
        assert!(field.particles().iter().any(|p| p.hue == Hue::Cyan));
        assert!(field.particles().iter().any(|p| p.hue == Hue::Purple));
    }

    #[test]
    fn test_size_and_speed_grow_with_depth() {
        let mut prev = (0.0, 0.0);
        for step in 0..=30 {
            let z = MIN_DEPTH + (MAX_DEPTH - MIN_DEPTH) * step as f32 / 30.0;
            let now = (Particle::radius_for_depth(z), Particle::speed_for_depth(z));
            assert!(now.0 >= prev.0 && now.1 >= prev.1);
            prev = now;
        }
    }

    #[test]
    fn test_opacity_caps_at_point_eight() {
        assert_eq!(particle(0.0, 0.0, 0.0, 0.0, 0.5).opacity(), 0.2);
        assert_eq!(particle(0.0, 0.0, 0.0, 0.0, 1.0).opacity(), 0.4);
        assert_eq!(particle(0.0, 0.0, 0.0, 0.0, 2.0).opacity(), 0.8);
    }

    #[test]
    fn test_positions_stay_in_bounds() {
        let mut surface = Recorder::new(400.0, 200.0);
        let mut rng = StdRng::seed_from_u64(42);
        let mut field = ParticleField::start(&surface, MAX_PARTICLES, &mut rng).unwrap();
        field.pointer_moved(10.0, 10.0);
        for tick in 0..2000 {
            if tick == 1000 {
                field.pointer_moved(390.0, 150.0);
            }
            field.frame(&mut surface);
            surface.ops.clear();
            for p in field.particles() {
                assert!((0.0..=400.0).contains(&p.x), "x {} at tick {tick}", p.x);
                assert!((0.0..=200.0).contains(&p.y), "y {} at tick {tick}", p.y);
            }
        }
    }

    #[test]
    fn test_edge_crossing_inverts_velocity() {
        let mut field = ParticleField::from_particles(vec![
            particle(99.9, 50.0, 0.5, 0.0, 1.0),
            particle(50.0, 0.1, 0.0, -0.5, 1.0),
        ]);
        field.update(100.0, 100.0);
        let [a, b] = field.particles() else {
            panic!("expected two particles");
        };
        assert_eq!(a.vx, -0.5);
        assert_eq!(a.x, 100.0);
        assert_eq!(b.vy, 0.5);
        assert_eq!(b.y, 0.0);
    }

    #[test]
    fn test_shrunk_surface_pulls_particles_back() {
        let mut field =
            ParticleField::from_particles(vec![particle(300.0, 300.0, -0.1, -0.1, 1.0)]);
        field.update(100.0, 100.0);
        let p = &field.particles()[0];
        assert_eq!((p.x, p.y), (100.0, 100.0));
        assert!(p.vx < 0.0 && p.vy < 0.0);
    }

    #[test]
    fn test_pointer_pushes_nearby_particle_away() {
        let mut field = ParticleField::from_particles(vec![particle(100.0, 100.0, 0.0, 0.0, 1.0)]);
        field.pointer_moved(50.0, 100.0);
        field.update(1000.0, 1000.0);
        let p = &field.particles()[0];
        // force (250 - 50) / 250 = 0.8, strength 2 * z = 2
        assert!((p.x - 101.6).abs() < 1e-4);
        assert_eq!(p.y, 100.0);
    }

    #[test]
    fn test_pointer_beyond_radius_has_no_effect() {
        let start = particle(400.0, 400.0, 0.3, -0.2, 1.5);
        let mut with_pointer = ParticleField::from_particles(vec![start.clone()]);
        let mut without = ParticleField::from_particles(vec![start]);
        with_pointer.pointer_moved(400.0 + REPULSION_RADIUS + 1.0, 400.0);
        with_pointer.update(1000.0, 1000.0);
        without.update(1000.0, 1000.0);
        assert_eq!(with_pointer.particles(), without.particles());
    }

    #[test]
    fn test_pointer_on_particle_is_ignored() {
        let mut field = ParticleField::from_particles(vec![particle(10.0, 10.0, 0.0, 0.0, 1.0)]);
        field.pointer_moved(10.0, 10.0);
        field.update(100.0, 100.0);
        let p = &field.particles()[0];
        assert!(p.x.is_finite() && p.y.is_finite());
        assert_eq!((p.x, p.y), (10.0, 10.0));
    }

    #[test]
    fn test_pointer_left_clears_state() {
        let mut field = ParticleField::from_particles(Vec::new());
        field.pointer_moved(1.0, 2.0);
        assert_eq!(field.pointer(), Some((1.0, 2.0)));
        field.pointer_left();
        assert_eq!(field.pointer(), None);
    }

    #[test]
    fn test_link_opacity_falls_with_distance() {
        assert_eq!(link_opacity(CONNECTION_DISTANCE, 2.0), 0.0);
        assert_eq!(link_opacity(500.0, 2.0), 0.0);
        let mut prev = f32::INFINITY;
        for d in 0..140 {
            let now = link_opacity(d as f32, 1.0);
            assert!(now < prev, "not decreasing at {d}");
            assert!(now > 0.0);
            prev = now;
        }
    }

    #[test]
    fn test_frame_draws_particles_before_links() {
        let mut surface = Recorder::new(1000.0, 1000.0);
        let mut field = ParticleField::from_particles(vec![
            particle(100.0, 100.0, 0.0, 0.0, 2.0),
            particle(110.0, 100.0, 0.0, 0.0, 2.0),
            particle(800.0, 800.0, 0.0, 0.0, 2.0),
        ]);
        field.frame(&mut surface);

        assert_eq!(surface.ops[0], Op::Clear);
        assert!(matches!(
            surface.ops[1..4],
            [Op::Circle { .. }, Op::Circle { .. }, Op::Circle { .. }]
        ));
        // Only the close pair is linked, once
        assert_eq!(surface.ops.len(), 5);
        assert!(matches!(surface.ops[4], Op::Line { .. }));
    }

    #[test]
    fn test_faint_links_are_culled() {
        let mut surface = Recorder::new(1000.0, 1000.0);
        // avg z 0.5, distance 100: (0.15 - 0.107) * 0.25 ~= 0.0107 > 0.01
        // distance 120: (0.15 - 0.1286) * 0.25 ~= 0.0054, culled
        let mut field = ParticleField::from_particles(vec![
            particle(0.0, 0.0, 0.0, 0.0, 0.5),
            particle(120.0, 0.0, 0.0, 0.0, 0.5),
        ]);
        field.frame(&mut surface);
        assert!(!surface.ops.iter().any(|op| matches!(op, Op::Line { .. })));

        surface.ops.clear();
        let mut field = ParticleField::from_particles(vec![
            particle(0.0, 0.0, 0.0, 0.0, 0.5),
            particle(100.0, 0.0, 0.0, 0.0, 0.5),
        ]);
        field.frame(&mut surface);
        assert!(surface.ops.iter().any(|op| matches!(op, Op::Line { .. })));
    }

    #[test]
    fn test_links_use_current_positions() {
        let mut surface = Recorder::new(1000.0, 1000.0);
        // Start 150 apart and close in by 20 during the frame
        let mut field = ParticleField::from_particles(vec![
            particle(100.0, 100.0, 10.0, 0.0, 2.0),
            particle(250.0, 100.0, -10.0, 0.0, 2.0),
        ]);
        field.frame(&mut surface);
        assert!(surface.ops.iter().any(|op| matches!(op, Op::Line { .. })));
    }

    #[test]
    fn test_circle_opacity_matches_depth() {
        let mut surface = Recorder::new(1000.0, 1000.0);
        let mut field = ParticleField::from_particles(vec![particle(5.0, 5.0, 0.0, 0.0, 1.0)]);
        field.frame(&mut surface);
        assert_eq!(
            surface.ops[1],
            Op::Circle {
                x: 5.0,
                y: 5.0,
                opacity: 0.4
            }
        );
    }
}
