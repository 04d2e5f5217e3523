//! Geometry of the decorative starfield: star placement, the time-driven
//! rotation of the whole group, and the perspective projection onto the
//! background canvas. [`FrameLoop`] drives drawing onto any [`Surface`] and
//! stops for good on the first failure.

use serde::{Deserialize, Serialize};

use crate::error::BackgroundError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Number of stars in the field.
    pub count: usize,
    /// Stars are placed in the cube `[-half_extent, half_extent)` on every axis.
    pub half_extent: f64,
    /// Star radii are drawn from `[0, max_scale)`.
    pub max_scale: f64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 200,
            half_extent: 50.0,
            max_scale: 0.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub scale: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Starfield {
    stars: Vec<Star>,
    config: StarfieldConfig,
}

impl Starfield {
    /// Places `config.count` stars using `random`, a source of uniform values
    /// in `[0, 1)`.
    pub fn generate(config: StarfieldConfig, mut random: impl FnMut() -> f64) -> Self {
        let span = config.half_extent * 2.0;
        let coord = move |r: f64| r * span - config.half_extent;
        let stars = (0..config.count)
            .map(|_| {
                let position = Vec3::new(coord(random()), coord(random()), coord(random()));
                Star {
                    position,
                    scale: random() * config.max_scale,
                }
            })
            .collect();
        Self { stars, config }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

/// Euler rotation (radians) of the star group, applied in XYZ order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Rotation {
    /// Rotation of the group `elapsed` seconds after the loop started.
    pub fn at(elapsed: f64) -> Self {
        Self {
            x: (elapsed / 4.0).cos() / 8.0,
            y: (elapsed / 4.0).sin() / 8.0,
            z: (1.0 + (elapsed / 1.5).sin()) / 20.0,
        }
    }

    /// Rotates `p` about the origin. Same convention as an XYZ Euler matrix
    /// `Rx * Ry * Rz`, so z is applied first.
    pub fn apply(&self, p: Vec3) -> Vec3 {
        let (sz, cz) = self.z.sin_cos();
        let p = Vec3::new(p.x * cz - p.y * sz, p.x * sz + p.y * cz, p.z);
        let (sy, cy) = self.y.sin_cos();
        let p = Vec3::new(p.x * cy + p.z * sy, p.y, -p.x * sy + p.z * cy);
        let (sx, cx) = self.x.sin_cos();
        Vec3::new(p.x, p.y * cx - p.z * sx, p.y * sx + p.z * cx)
    }
}

/// Star after projection, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedStar {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Perspective camera on the z axis looking toward -z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees.
    pub fov: f64,
    pub distance: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov: 75.0,
            distance: 5.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    fn focal_length(&self, height: f64) -> f64 {
        (height / 2.0) / (self.fov.to_radians() / 2.0).tan()
    }

    /// Projects a star onto a `width` x `height` viewport. Stars outside the
    /// near/far planes yield `None`.
    pub fn project(
        &self,
        star: &Star,
        rotation: &Rotation,
        width: f64,
        height: f64,
    ) -> Option<ProjectedStar> {
        let p = rotation.apply(star.position);
        let depth = self.distance - p.z;
        if depth < self.near || depth > self.far {
            return None;
        }
        let focal = self.focal_length(height);
        Some(ProjectedStar {
            x: width / 2.0 + p.x * focal / depth,
            y: height / 2.0 - p.y * focal / depth,
            radius: star.scale * focal / depth,
        })
    }

    /// Projects every star of `field`, keeping only those that would land on
    /// screen.
    pub fn project_field<'a>(
        &'a self,
        field: &'a Starfield,
        rotation: Rotation,
        width: f64,
        height: f64,
    ) -> impl Iterator<Item = ProjectedStar> + 'a {
        field
            .stars()
            .iter()
            .filter_map(move |s| self.project(s, &rotation, width, height))
            .filter(move |p| {
                p.x + p.radius >= 0.0
                    && p.x - p.radius <= width
                    && p.y + p.radius >= 0.0
                    && p.y - p.radius <= height
            })
    }
}

/// Seconds elapsed since the first frame it observed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    start: Option<f64>,
}

impl FrameClock {
    /// `timestamp` is a frame timestamp in milliseconds.
    pub fn elapsed(&mut self, timestamp: f64) -> f64 {
        let start = *self.start.get_or_insert(timestamp);
        ((timestamp - start) / 1000.0).max(0.0)
    }
}

/// Something the projected stars can be painted on.
pub trait Surface {
    /// Clears the surface for a new frame and returns its size in pixels.
    fn begin_frame(&mut self) -> (f64, f64);

    fn fill_disc(&mut self, star: &ProjectedStar) -> Result<(), BackgroundError>;
}

/// Draws a starfield onto a surface, one frame per call.
pub struct Renderer<S> {
    surface: S,
    field: Starfield,
    camera: Camera,
    clock: FrameClock,
}

impl<S: Surface> Renderer<S> {
    pub fn new(surface: S, field: Starfield) -> Self {
        Self {
            surface,
            field,
            camera: Camera::default(),
            clock: FrameClock::default(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Draws the frame for `timestamp` (ms) and returns how many stars landed
    /// on screen.
    pub fn draw(&mut self, timestamp: f64) -> Result<usize, BackgroundError> {
        let rotation = Rotation::at(self.clock.elapsed(timestamp));
        let (width, height) = self.surface.begin_frame();
        let mut drawn = 0;
        for star in self
            .camera
            .project_field(&self.field, rotation, width, height)
        {
            self.surface.fill_disc(&star)?;
            drawn += 1;
        }
        Ok(drawn)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// Nothing to draw on yet.
    Waiting,
    Drawn(usize),
    Stopped,
}

/// Lifecycle of the animation: waiting for a surface, drawing, or stopped
/// after an error. Stopped is terminal.
pub enum FrameLoop<S> {
    Pending,
    Running(Renderer<S>),
    Stopped,
}

impl<S> Default for FrameLoop<S> {
    fn default() -> Self {
        FrameLoop::Pending
    }
}

impl<S: Surface> FrameLoop<S> {
    /// Advances one frame. While pending, `attach` is asked for a renderer;
    /// `None` means the surface isn't available yet. An attach or draw error
    /// stops the loop and is returned once; later ticks never attach or draw.
    pub fn tick(
        &mut self,
        timestamp: f64,
        attach: impl FnOnce() -> Option<Result<Renderer<S>, BackgroundError>>,
    ) -> Result<Frame, BackgroundError> {
        if let FrameLoop::Pending = self {
            match attach() {
                None => return Ok(Frame::Waiting),
                Some(Ok(renderer)) => *self = FrameLoop::Running(renderer),
                Some(Err(e)) => {
                    *self = FrameLoop::Stopped;
                    return Err(e);
                }
            }
        }
        let result = match self {
            FrameLoop::Running(renderer) => renderer.draw(timestamp),
            _ => return Ok(Frame::Stopped),
        };
        match result {
            Ok(drawn) => Ok(Frame::Drawn(drawn)),
            Err(e) => {
                *self = FrameLoop::Stopped;
                Err(e)
            }
        }
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self, FrameLoop::Stopped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(values: Vec<f64>) -> impl FnMut() -> f64 {
        let mut iter = values.into_iter().cycle();
        move || iter.next().unwrap_or_default()
    }

    fn lcg(seed: u64) -> impl FnMut() -> f64 {
        let mut state = seed;
        move || {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_generate_count_and_bounds() {
        let config = StarfieldConfig::default();
        let field = Starfield::generate(config, lcg(7));
        assert_eq!(field.len(), 200);
        for star in field.stars() {
            for c in [star.position.x, star.position.y, star.position.z] {
                assert!((-50.0..50.0).contains(&c), "coordinate {c} out of bounds");
            }
            assert!((0.0..0.2).contains(&star.scale));
        }
    }

    #[test]
    fn test_generate_extremes() {
        let config = StarfieldConfig::default();
        let field = Starfield::generate(config, sequence(vec![0.0]));
        let star = field.stars()[0];
        assert_eq!(star.position, Vec3::new(-50.0, -50.0, -50.0));
        assert_eq!(star.scale, 0.0);

        let field = Starfield::generate(config, sequence(vec![0.5, 0.75, 0.25, 0.5]));
        let star = field.stars()[0];
        assert_eq!(star.position, Vec3::new(0.0, 25.0, -25.0));
        assert_eq!(star.scale, 0.1);
    }

    #[test]
    fn test_generate_custom_config() {
        let config = StarfieldConfig {
            count: 12,
            half_extent: 5.0,
            max_scale: 1.0,
        };
        let field = Starfield::generate(config, lcg(42));
        assert_eq!(field.len(), 12);
        assert_eq!(field.config(), &config);
        assert!(field
            .stars()
            .iter()
            .all(|s| s.position.x.abs() <= 5.0 && s.position.y.abs() <= 5.0));

        let empty = Starfield::generate(StarfieldConfig { count: 0, ..config }, lcg(1));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_config_defaults_fill_missing_fields() {
        let config: StarfieldConfig = serde_json::from_str(r#"{"count": 50}"#).unwrap();
        assert_eq!(config.count, 50);
        assert_eq!(config.half_extent, 50.0);
        assert_eq!(config.max_scale, 0.2);
    }

    #[test]
    fn test_rotation_at() {
        let r = Rotation::at(0.0);
        assert!(approx(r.x, 0.125));
        assert!(approx(r.y, 0.0));
        assert!(approx(r.z, 0.05));

        let t = 2.0 * std::f64::consts::PI;
        let r = Rotation::at(t);
        assert!(approx(r.x, (t / 4.0).cos() / 8.0));
        assert!(approx(r.y, (t / 4.0).sin() / 8.0));
        assert!(approx(r.z, (1.0 + (t / 1.5).sin()) / 20.0));

        // z never rotates backwards past zero and is bounded by 0.1
        for i in 0..1000 {
            let r = Rotation::at(i as f64 * 0.37);
            assert!((0.0..=0.1).contains(&r.z));
            assert!(r.x.abs() <= 0.125 && r.y.abs() <= 0.125);
        }
    }

    #[test]
    fn test_rotation_apply() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Rotation::default().apply(p), p);

        let quarter = std::f64::consts::FRAC_PI_2;
        let r = Rotation {
            z: quarter,
            ..Default::default()
        }
        .apply(Vec3::new(1.0, 0.0, 0.0));
        assert!(approx(r.x, 0.0) && approx(r.y, 1.0) && approx(r.z, 0.0));

        let r = Rotation {
            x: quarter,
            ..Default::default()
        }
        .apply(Vec3::new(0.0, 1.0, 0.0));
        assert!(approx(r.x, 0.0) && approx(r.y, 0.0) && approx(r.z, 1.0));

        // rotation preserves distance from the origin
        let rotated = Rotation::at(3.3).apply(p);
        let len = |v: Vec3| (v.x * v.x + v.y * v.y + v.z * v.z).sqrt();
        assert!(approx(len(rotated), len(p)));
    }

    #[test]
    fn test_project_center_and_depth() {
        let camera = Camera::default();
        let star = Star {
            position: Vec3::new(0.0, 0.0, 0.0),
            scale: 0.1,
        };
        let p = camera
            .project(&star, &Rotation::default(), 800.0, 600.0)
            .unwrap();
        assert!(approx(p.x, 400.0));
        assert!(approx(p.y, 300.0));

        let far = Star {
            position: Vec3::new(0.0, 0.0, -45.0),
            scale: 0.1,
        };
        let q = camera
            .project(&far, &Rotation::default(), 800.0, 600.0)
            .unwrap();
        assert!(q.radius < p.radius);

        let behind = Star {
            position: Vec3::new(0.0, 0.0, 10.0),
            scale: 0.1,
        };
        assert!(camera
            .project(&behind, &Rotation::default(), 800.0, 600.0)
            .is_none());
    }

    #[test]
    fn test_project_axes() {
        let camera = Camera::default();
        let star = Star {
            position: Vec3::new(1.0, 1.0, 0.0),
            scale: 0.0,
        };
        let p = camera
            .project(&star, &Rotation::default(), 800.0, 600.0)
            .unwrap();
        // +x is right, +y is up
        assert!(p.x > 400.0);
        assert!(p.y < 300.0);
    }

    #[test]
    fn test_project_field_is_on_screen() {
        let camera = Camera::default();
        let field = Starfield::generate(StarfieldConfig::default(), lcg(99));
        let projected = camera
            .project_field(&field, Rotation::at(1.0), 1280.0, 720.0)
            .collect::<Vec<_>>();
        assert!(projected.len() <= field.len());
        assert!(projected
            .iter()
            .all(|p| p.x + p.radius >= 0.0 && p.x - p.radius <= 1280.0));
    }

    #[test]
    fn test_frame_clock() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.elapsed(1500.0), 0.0);
        assert_eq!(clock.elapsed(2500.0), 1.0);
        assert_eq!(clock.elapsed(4000.0), 2.5);
    }

    /// Records every frame; fails the `fail_at`-th disc if set.
    #[derive(Default)]
    struct FakeSurface {
        frames: usize,
        discs: usize,
        fail_at: Option<usize>,
    }

    impl Surface for FakeSurface {
        fn begin_frame(&mut self) -> (f64, f64) {
            self.frames += 1;
            (800.0, 600.0)
        }

        fn fill_disc(&mut self, _star: &ProjectedStar) -> Result<(), BackgroundError> {
            if self.fail_at == Some(self.discs) {
                return Err(BackgroundError::Draw("arc".to_string()));
            }
            self.discs += 1;
            Ok(())
        }
    }

    fn renderer(surface: FakeSurface) -> Renderer<FakeSurface> {
        Renderer::new(surface, Starfield::generate(StarfieldConfig::default(), lcg(3)))
    }

    #[test]
    fn test_renderer_draws_on_screen_stars() {
        let mut renderer = renderer(FakeSurface::default());
        let drawn = renderer.draw(0.0).unwrap();
        assert!(drawn > 0);
        assert!(drawn <= 200);
        renderer.draw(16.0).unwrap();
        assert_eq!(renderer.surface().frames, 2);
    }

    #[test]
    fn test_frame_loop_waits_for_surface() {
        let mut frames = FrameLoop::<FakeSurface>::default();
        assert_eq!(frames.tick(0.0, || None), Ok(Frame::Waiting));
        assert_eq!(frames.tick(16.0, || None), Ok(Frame::Waiting));
        assert!(!frames.is_stopped());

        let frame = frames.tick(32.0, || Some(Ok(renderer(FakeSurface::default()))));
        assert!(matches!(frame, Ok(Frame::Drawn(n)) if n > 0));
        // already running, so attach is not consulted again
        let frame = frames.tick(48.0, || panic!("attached twice"));
        assert!(matches!(frame, Ok(Frame::Drawn(_))));
    }

    #[test]
    fn test_frame_loop_stops_when_attach_fails() {
        let mut frames = FrameLoop::<FakeSurface>::default();
        let frame = frames.tick(0.0, || Some(Err(BackgroundError::ContextUnavailable)));
        assert_eq!(frame, Err(BackgroundError::ContextUnavailable));
        assert!(frames.is_stopped());

        for t in 1..10 {
            let frame = frames.tick(t as f64 * 16.0, || panic!("attach after failure"));
            assert_eq!(frame, Ok(Frame::Stopped));
        }
    }

    #[test]
    fn test_frame_loop_stops_when_draw_fails() {
        let mut frames = FrameLoop::default();
        let surface = FakeSurface {
            fail_at: Some(0),
            ..Default::default()
        };
        let frame = frames.tick(0.0, || Some(Ok(renderer(surface))));
        assert_eq!(frame, Err(BackgroundError::Draw("arc".to_string())));
        assert!(frames.is_stopped());
        assert_eq!(frames.tick(16.0, || None), Ok(Frame::Stopped));
    }

    #[test]
    fn test_frame_loop_stops_on_mid_run_failure() {
        let mut frames = FrameLoop::default();
        let mut renderer = renderer(FakeSurface::default());
        let first = renderer.draw(0.0).unwrap();
        renderer.surface.fail_at = Some(first + 1);

        let frame = frames.tick(16.0, || Some(Ok(renderer)));
        assert!(frame.is_err());
        assert!(frames.is_stopped());
        assert_eq!(frames.tick(32.0, || None), Ok(Frame::Stopped));
    }
}
