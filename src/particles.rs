//! Pointer-reactive particle field behind the intro.
//!
//! Particles rest at random spots. Near the attractor (a hovered
//! `data-particle-target` element, else the pointer, else an idle sweep) they
//! are pulled onto a wobbling ring. While an element is hovered, particles
//! that reach its centre are captured, hidden, and respawned elsewhere.

use std::f64::consts::PI;

/// World height visible to the camera; width follows the aspect ratio.
pub const WORLD_HEIGHT: f64 = 31.5;

const CAMERA_DISTANCE: f64 = 50.0;
const POINTER_SMOOTHING: f64 = 0.05;
const HIDDEN_SCALE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Vec2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    width_px: f64,
    height_px: f64,
}

impl Viewport {
    pub fn from_pixels(width_px: f64, height_px: f64) -> Self {
        let width_px = width_px.max(1.0);
        let height_px = height_px.max(1.0);
        Self {
            width: WORLD_HEIGHT * width_px / height_px,
            height: WORLD_HEIGHT,
            width_px,
            height_px,
        }
    }

    pub fn px_per_unit(&self) -> f64 {
        self.height_px / self.height
    }

    /// Canvas position of a world point plus its perspective size factor.
    pub fn to_screen(&self, point: Vec3) -> (f64, f64, f64) {
        let depth = (CAMERA_DISTANCE / (CAMERA_DISTANCE - point.z)).clamp(0.25, 4.0);
        let ppu = self.px_per_unit() * depth;
        (
            self.width_px / 2.0 + point.x * ppu,
            self.height_px / 2.0 - point.y * ppu,
            depth,
        )
    }
}

/// Where the field is being pulled, in normalised coordinates (−1..1, y up).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Attractor {
    #[default]
    Idle,
    Pointer(Vec2),
    Hovered(Vec2),
}

impl Attractor {
    pub fn point(&self) -> Option<Vec2> {
        match self {
            Self::Idle => None,
            Self::Pointer(p) | Self::Hovered(p) => Some(*p),
        }
    }

    pub fn is_hovered(&self) -> bool {
        matches!(self, Self::Hovered(_))
    }
}

/// Latest pointer and hover positions reported by DOM listeners.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    pointer: Option<Vec2>,
    hovered: Option<Vec2>,
}

impl PointerTracker {
    /// `None` once the pointer leaves the field.
    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.pointer = pointer;
    }

    pub fn set_hovered(&mut self, hovered: Option<Vec2>) {
        self.hovered = hovered;
    }

    pub fn attractor(&self) -> Attractor {
        match (self.hovered, self.pointer) {
            (Some(h), _) => Attractor::Hovered(h),
            (None, Some(p)) => Attractor::Pointer(p),
            (None, None) => Attractor::Idle,
        }
    }
}

/// Maps client coordinates into the rectangle's normalised space, or `None`
/// if the point falls outside it.
pub fn normalize_in_rect(
    client_x: f64,
    client_y: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> Option<Vec2> {
    let inside = client_x >= left
        && client_x <= left + width
        && client_y >= top
        && client_y <= top + height;
    if !inside {
        return None;
    }
    normalize_point(client_x, client_y, left, top, width, height)
}

/// Like [`normalize_in_rect`] but points outside the rectangle map past ±1.
/// Hover targets can sit anywhere on the page.
pub fn normalize_point(
    client_x: f64,
    client_y: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> Option<Vec2> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        ((client_x - left) / width) * 2.0 - 1.0,
        -(((client_y - top) / height) * 2.0 - 1.0),
    ))
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub magnet_radius: f64,
    /// Magnet radius while an element is hovered, so the whole field gathers.
    pub hover_magnet_radius: f64,
    pub ring_radius: f64,
    pub wave_speed: f64,
    pub wave_amplitude: f64,
    pub particle_size: f64,
    pub lerp_speed: f64,
    pub particle_variance: f64,
    pub rotation_speed: f64,
    pub depth_factor: f64,
    pub pulse_speed: f64,
    pub field_strength: f64,
    pub auto_animate: bool,
    pub idle_ms: f64,
    pub capture_radius: f64,
    pub respawn_delay_ms: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 500,
            magnet_radius: 10.0,
            hover_magnet_radius: 120.0,
            ring_radius: 6.0,
            wave_speed: 1.5,
            wave_amplitude: 1.0,
            particle_size: 0.6,
            lerp_speed: 0.05,
            particle_variance: 1.0,
            rotation_speed: 0.0,
            depth_factor: 0.7,
            pulse_speed: 3.0,
            field_strength: 10.0,
            auto_animate: true,
            idle_ms: 2000.0,
            capture_radius: 10.0,
            respawn_delay_ms: 1200.0,
        }
    }
}

impl FieldConfig {
    /// Fewer particles on small screens.
    pub fn for_viewport_width(width_px: f64) -> Self {
        Self {
            count: if width_px < 768.0 { 120 } else { 500 },
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
struct Particle {
    t: f64,
    speed: f64,
    rest: Vec3,
    current: Vec3,
    radius_offset: f64,
    captured_at: Option<f64>,
}

impl Particle {
    fn spawn(rng: &mut fastrand::Rng, viewport: &Viewport) -> Self {
        let rest = random_position(rng, viewport);
        Self {
            t: rng.f64() * 100.0,
            speed: 0.01 + rng.f64() / 200.0,
            rest,
            current: rest,
            radius_offset: (rng.f64() - 0.5) * 2.0,
            captured_at: None,
        }
    }
}

fn random_position(rng: &mut fastrand::Rng, viewport: &Viewport) -> Vec3 {
    Vec3::new(
        (rng.f64() - 0.5) * viewport.width,
        (rng.f64() - 0.5) * viewport.height,
        (rng.f64() - 0.5) * 20.0,
    )
}

/// One particle as the renderer should draw it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleInstance {
    pub position: Vec3,
    pub scale: f64,
    /// Angle in radians pointing at the attractor.
    pub heading: f64,
}

impl ParticleInstance {
    pub fn is_hidden(&self) -> bool {
        self.scale <= HIDDEN_SCALE
    }
}

pub struct ParticleField {
    config: FieldConfig,
    particles: Vec<Particle>,
    instances: Vec<ParticleInstance>,
    virtual_pointer: Vec2,
    last_active_ms: Option<f64>,
    rng: fastrand::Rng,
}

impl ParticleField {
    pub fn new(config: FieldConfig, viewport: Viewport, mut rng: fastrand::Rng) -> Self {
        let particles = (0..config.count)
            .map(|_| Particle::spawn(&mut rng, &viewport))
            .collect::<Vec<_>>();
        Self {
            instances: Vec::with_capacity(particles.len()),
            config,
            particles,
            virtual_pointer: Vec2::default(),
            last_active_ms: None,
            rng,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Smoothed attractor position in world units.
    pub fn virtual_pointer(&self) -> Vec2 {
        self.virtual_pointer
    }

    pub fn captured_count(&self) -> usize {
        self.particles
            .iter()
            .filter(|p| p.captured_at.is_some())
            .count()
    }

    pub fn rest_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.particles.iter().map(|p| p.rest)
    }

    /// Advances the field one animation frame.
    pub fn tick(
        &mut self,
        now_ms: f64,
        elapsed_s: f64,
        attractor: Attractor,
        viewport: Viewport,
    ) -> &[ParticleInstance] {
        let destination = self.destination(now_ms, elapsed_s, attractor, &viewport);
        self.virtual_pointer.x += (destination.x - self.virtual_pointer.x) * POINTER_SMOOTHING;
        self.virtual_pointer.y += (destination.y - self.virtual_pointer.y) * POINTER_SMOOTHING;

        let hovered = attractor.is_hovered();
        let magnet = if hovered {
            self.config.magnet_radius.max(self.config.hover_magnet_radius)
        } else {
            self.config.magnet_radius
        };
        let rotation = elapsed_s * self.config.rotation_speed;
        let pointer = self.virtual_pointer;
        let config = &self.config;

        self.instances.clear();
        for particle in self.particles.iter_mut() {
            particle.t += particle.speed / 2.0;
            let t = particle.t;

            let projection = 1.0 - particle.current.z / CAMERA_DISTANCE;
            let target_center = Vec2::new(pointer.x * projection, pointer.y * projection);

            let dx = particle.rest.x - target_center.x;
            let dy = particle.rest.y - target_center.y;
            let rest_depth = particle.rest.z * config.depth_factor;
            let mut target = Vec3::new(particle.rest.x, particle.rest.y, rest_depth);

            if dx.hypot(dy) < magnet {
                let angle = dy.atan2(dx) + rotation;
                let wave = (t * config.wave_speed + angle).sin() * (0.5 * config.wave_amplitude);
                let deviation = particle.radius_offset * (5.0 / (config.field_strength + 0.1));
                let radius = config.ring_radius + wave + deviation;
                target = Vec3::new(
                    target_center.x + radius * angle.cos(),
                    target_center.y + radius * angle.sin(),
                    rest_depth + t.sin() * config.wave_amplitude * config.depth_factor,
                );
            }

            particle.current.x += (target.x - particle.current.x) * config.lerp_speed;
            particle.current.y += (target.y - particle.current.y) * config.lerp_speed;
            particle.current.z += (target.z - particle.current.z) * config.lerp_speed;

            let distance = particle.current.xy().distance(target_center);

            if hovered && particle.captured_at.is_none() && distance < config.capture_radius {
                particle.captured_at = Some(now_ms);
                particle.current = Vec3::new(target_center.x, target_center.y, rest_depth - 2.0);
            }

            if let Some(captured_at) = particle.captured_at {
                if now_ms - captured_at > config.respawn_delay_ms {
                    let rest = random_position(&mut self.rng, &viewport);
                    particle.rest = rest;
                    particle.current = rest;
                    particle.captured_at = None;
                    particle.t = self.rng.f64() * 100.0;
                } else {
                    self.instances.push(ParticleInstance {
                        position: particle.current,
                        scale: HIDDEN_SCALE,
                        heading: 0.0,
                    });
                    continue;
                }
            }

            let distance = particle.current.xy().distance(target_center);
            let from_ring = (distance - config.ring_radius).abs();
            let ring_factor = (1.0 - from_ring / 10.0).clamp(0.0, 1.0);
            let pulse = 0.8 + (particle.t * config.pulse_speed).sin() * 0.2 * config.particle_variance;

            self.instances.push(ParticleInstance {
                position: particle.current,
                scale: ring_factor * pulse * config.particle_size,
                heading: (target_center.y - particle.current.y)
                    .atan2(target_center.x - particle.current.x)
                    + PI / 2.0,
            });
        }
        &self.instances
    }

    /// Where the virtual pointer is heading this frame, in world units.
    fn destination(
        &mut self,
        now_ms: f64,
        elapsed_s: f64,
        attractor: Attractor,
        viewport: &Viewport,
    ) -> Vec2 {
        let point = match attractor.point() {
            Some(point) => {
                self.last_active_ms = Some(now_ms);
                point
            }
            None => Vec2::default(),
        };

        let idle_for = self
            .last_active_ms
            .map(|at| now_ms - at)
            .unwrap_or(f64::INFINITY);
        if self.config.auto_animate && attractor == Attractor::Idle && idle_for > self.config.idle_ms
        {
            return Vec2::new(
                (elapsed_s * 0.5).sin() * (viewport.width / 4.0),
                elapsed_s.cos() * (viewport.height / 4.0),
            );
        }

        Vec2::new(
            point.x * viewport.width / 2.0,
            point.y * viewport.height / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::from_pixels(1600.0, 900.0)
    }

    fn field(config: FieldConfig) -> ParticleField {
        ParticleField::new(config, viewport(), fastrand::Rng::with_seed(7))
    }

    #[test]
    fn test_spawn_within_viewport() {
        let f = field(FieldConfig {
            count: 64,
            ..FieldConfig::default()
        });
        assert_eq!(f.len(), 64);
        let v = viewport();
        for p in f.rest_positions() {
            assert!(p.x.abs() <= v.width / 2.0);
            assert!(p.y.abs() <= v.height / 2.0);
            assert!(p.z.abs() <= 10.0);
        }
    }

    #[test]
    fn test_hover_takes_precedence() {
        let mut tracker = PointerTracker::default();
        assert_eq!(tracker.attractor(), Attractor::Idle);
        tracker.set_pointer(Some(Vec2::new(0.2, 0.3)));
        assert_eq!(tracker.attractor(), Attractor::Pointer(Vec2::new(0.2, 0.3)));
        tracker.set_hovered(Some(Vec2::new(-0.5, 0.5)));
        assert_eq!(tracker.attractor(), Attractor::Hovered(Vec2::new(-0.5, 0.5)));
        tracker.set_hovered(None);
        tracker.set_pointer(None);
        assert_eq!(tracker.attractor(), Attractor::Idle);
    }

    #[test]
    fn test_normalize_in_rect() {
        let rect = (100.0, 50.0, 200.0, 100.0);
        let centre = normalize_in_rect(200.0, 100.0, rect.0, rect.1, rect.2, rect.3).unwrap();
        assert_eq!(centre, Vec2::new(0.0, 0.0));
        let top_left = normalize_in_rect(100.0, 50.0, rect.0, rect.1, rect.2, rect.3).unwrap();
        assert_eq!(top_left, Vec2::new(-1.0, 1.0));
        assert!(normalize_in_rect(99.0, 60.0, rect.0, rect.1, rect.2, rect.3).is_none());
        assert!(normalize_in_rect(0.0, 0.0, 0.0, 0.0, 0.0, 10.0).is_none());

        let below = normalize_point(200.0, 250.0, rect.0, rect.1, rect.2, rect.3).unwrap();
        assert_eq!(below, Vec2::new(0.0, -3.0));
    }

    #[test]
    fn test_pointer_is_followed_smoothly() {
        let mut f = field(FieldConfig {
            count: 8,
            auto_animate: false,
            ..FieldConfig::default()
        });
        let v = viewport();
        let attractor = Attractor::Pointer(Vec2::new(1.0, 1.0));
        f.tick(0.0, 0.0, attractor, v);
        let first = f.virtual_pointer();
        assert!(first.x > 0.0 && first.x < v.width / 2.0);
        for i in 1..400 {
            f.tick(i as f64 * 16.0, i as f64 * 0.016, attractor, v);
        }
        let settled = f.virtual_pointer();
        assert!((settled.x - v.width / 2.0).abs() < 0.01);
        assert!((settled.y - v.height / 2.0).abs() < 0.01);
    }

    #[test]
    fn test_without_auto_animate_idle_stays_centred() {
        let mut f = field(FieldConfig {
            count: 4,
            auto_animate: false,
            ..FieldConfig::default()
        });
        for i in 0..50 {
            f.tick(i as f64 * 16.0, i as f64 * 0.016, Attractor::Idle, viewport());
        }
        assert_eq!(f.virtual_pointer(), Vec2::default());
    }

    #[test]
    fn test_idle_sweep_after_idle_interval() {
        let mut f = field(FieldConfig {
            count: 4,
            ..FieldConfig::default()
        });
        let v = viewport();
        f.tick(0.0, 0.0, Attractor::Pointer(Vec2::new(0.0, 0.0)), v);
        // still inside the idle window: heads back to the origin
        f.tick(1000.0, 1.0, Attractor::Idle, v);
        assert!(f.virtual_pointer().distance(Vec2::default()) < 1e-9);
        // after the window the sweep takes over
        f.tick(2500.0, 2.5, Attractor::Idle, v);
        assert!(f.virtual_pointer().distance(Vec2::default()) > 0.0);
    }

    #[test]
    fn test_particles_relax_to_rest_without_attractor() {
        let config = FieldConfig {
            count: 16,
            magnet_radius: 0.0,
            auto_animate: false,
            lerp_speed: 0.5,
            ..FieldConfig::default()
        };
        let depth = config.depth_factor;
        let mut f = field(config);
        let rest = f.rest_positions().collect::<Vec<_>>();
        let mut last = Vec::new();
        for i in 0..60 {
            last = f
                .tick(i as f64 * 16.0, i as f64 * 0.016, Attractor::Idle, viewport())
                .to_vec();
        }
        for (instance, rest) in last.iter().zip(rest) {
            assert!((instance.position.x - rest.x).abs() < 1e-6);
            assert!((instance.position.y - rest.y).abs() < 1e-6);
            assert!((instance.position.z - rest.z * depth).abs() < 1e-6);
        }
    }

    #[test]
    fn test_hover_captures_and_respawns() {
        let mut f = field(FieldConfig {
            count: 32,
            capture_radius: 1000.0,
            ..FieldConfig::default()
        });
        let v = viewport();
        let hovered = Attractor::Hovered(Vec2::new(0.0, 0.0));

        let instances = f.tick(0.0, 0.0, hovered, v).to_vec();
        assert_eq!(f.captured_count(), 32);
        assert!(instances.iter().all(|i| i.is_hidden()));

        // still hidden inside the respawn delay
        f.tick(1000.0, 1.0, hovered, v);
        assert_eq!(f.captured_count(), 32);

        f.tick(1300.0, 1.3, Attractor::Idle, v);
        assert_eq!(f.captured_count(), 0);
        for p in f.rest_positions() {
            assert!(p.x.abs() <= v.width / 2.0);
            assert!(p.y.abs() <= v.height / 2.0);
        }
    }

    #[test]
    fn test_pointer_alone_never_captures() {
        let mut f = field(FieldConfig {
            count: 32,
            capture_radius: 1000.0,
            ..FieldConfig::default()
        });
        for i in 0..20 {
            f.tick(
                i as f64 * 16.0,
                i as f64 * 0.016,
                Attractor::Pointer(Vec2::new(0.1, -0.1)),
                viewport(),
            );
        }
        assert_eq!(f.captured_count(), 0);
    }

    #[test]
    fn test_viewport_projection() {
        let v = Viewport::from_pixels(1600.0, 900.0);
        assert!((v.width - WORLD_HEIGHT * 16.0 / 9.0).abs() < 1e-9);
        let (x, y, depth) = v.to_screen(Vec3::default());
        assert_eq!((x, y, depth), (800.0, 450.0, 1.0));
        let (x, y, _) = v.to_screen(Vec3::new(v.width / 2.0, v.height / 2.0, 0.0));
        assert!((x - 1600.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }
}
