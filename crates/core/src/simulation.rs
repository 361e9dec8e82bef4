//! Simulation loop: input events in, frames out.
//!
//! One iteration polls the input source once. When an event arrives it is
//! applied, the pending rotation is built and applied to stars and player,
//! everything is projected and rasterized, the frame goes to the display,
//! and the pending rotation is reset to zero.

use anyhow::Result;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::StarFieldConfig;
use crate::error::FieldResult;
use crate::field::StarField;
use crate::player::TrackedPoint;
use crate::projection::{Projection, Projector};
use crate::raster::{Frame, OverdrawPolicy, Rasterizer};
use crate::rotation::RotationMatrix;
use crate::types::{Axis, InputEvent, Vec3};

/// Non-blocking source of input events.
pub trait InputSource {
    /// Return at most one pending event without waiting.
    fn poll(&mut self) -> Result<Option<InputEvent>>;

    /// Whether the user asked to leave.
    fn quit_requested(&self) -> bool {
        false
    }
}

/// Consumer of finished frames.
pub trait DisplaySink {
    fn present(&mut self, frame: &Frame, status: &Status) -> Result<()>;
}

/// The two status lines printed under the grid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Status {
    /// `Ship Position: x:y:z`
    pub position: String,
    /// `Nearest Star (Distance: d): info`
    pub nearest: String,
}

/// Rotation accumulated since the last rendered frame, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PendingRotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PendingRotation {
    pub fn add(&mut self, axis: Axis, delta: f64) {
        match axis {
            Axis::X => self.x += delta,
            Axis::Y => self.y += delta,
            Axis::Z => self.z += delta,
        }
    }

    pub fn matrix(&self) -> RotationMatrix {
        RotationMatrix::from_euler(self.x, self.y, self.z)
    }
}

#[derive(Debug, Clone)]
pub struct Simulation {
    field: StarField,
    player: TrackedPoint,
    projector: Projector,
    rasterizer: Rasterizer,
    pending: PendingRotation,
    projected: Vec<Projection>,
    frame: Frame,
    frames_rendered: u64,
}

impl Simulation {
    /// Build a simulation from config, seeding the generator from
    /// `config.seed` or OS entropy.
    pub fn new(config: &StarFieldConfig) -> FieldResult<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, &mut rng)
    }

    pub fn with_rng<R: Rng + ?Sized>(config: &StarFieldConfig, rng: &mut R) -> FieldResult<Self> {
        config.validate()?;
        let field = StarField::generate(config.num_stars, config.field_size, rng)?;
        let projector = Projector::new(config.width, config.height, config.fov)?;
        info!(
            "simulation ready: {}x{} grid, fov {}, {} stars",
            config.width, config.height, config.fov, config.num_stars
        );
        Ok(Self::from_parts(field, TrackedPoint::default(), projector))
    }

    /// Assemble a simulation from an explicit field and player.
    pub fn from_parts(field: StarField, player: TrackedPoint, projector: Projector) -> Self {
        let projected = Vec::with_capacity(field.len());
        let frame = Frame::new(projector.width(), projector.height());
        Self {
            field,
            player,
            projector,
            rasterizer: Rasterizer::default(),
            pending: PendingRotation::default(),
            projected,
            frame,
            frames_rendered: 0,
        }
    }

    pub fn with_overdraw(mut self, policy: OverdrawPolicy) -> Self {
        self.rasterizer = Rasterizer::new(policy);
        self
    }

    pub fn field(&self) -> &StarField {
        &self.field
    }

    pub fn player(&self) -> &TrackedPoint {
        &self.player
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    pub fn pending(&self) -> PendingRotation {
        self.pending
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn apply(&mut self, event: InputEvent) {
        debug!("apply {:?}", event);
        match event {
            InputEvent::RotateDelta { axis, delta } => self.pending.add(axis, delta),
            InputEvent::Translate { dx, dy, dz } => self.player.translate(Vec3::new(dx, dy, dz)),
            InputEvent::Redraw => {}
        }
    }

    /// Rotate stars and player by the pending rotation.
    pub fn update(&mut self) {
        let matrix = self.pending.matrix();
        let center = self.field.center();
        self.field.rotate(&matrix);
        self.player.rotate(&matrix, center);
    }

    /// Project and rasterize the current state.
    pub fn render(&mut self) -> FieldResult<&Frame> {
        self.projected.clear();
        let projector = self.projector;
        self.projected.extend(
            self.field
                .stars()
                .iter()
                .map(|star| projector.project(star.position)),
        );
        let marker = projector.project(self.player.position);

        self.rasterizer.rasterize_into(
            &self.projected,
            self.field.field_size(),
            marker,
            self.player.marker(),
            &mut self.frame,
        )?;
        self.frames_rendered += 1;
        Ok(&self.frame)
    }

    pub fn clear_rotation(&mut self) {
        self.pending = PendingRotation::default();
    }

    pub fn status(&self) -> Status {
        let p = self.player.position;
        let position = format!("Ship Position: {:.2}:{:.2}:{:.2}", p.x, p.y, p.z);
        let nearest = match self.field.nearest_to(p) {
            Some((star, d)) => format!("Nearest Star (Distance: {:.2}): {}", d, star.info),
            None => "Nearest Star: none".to_string(),
        };
        Status { position, nearest }
    }

    /// Render and present the first frame before any input.
    pub fn start(&mut self, display: &mut dyn DisplaySink) -> Result<()> {
        self.update();
        self.present(display)
    }

    /// Run one loop iteration. Returns `true` when a frame was presented.
    pub fn pump(
        &mut self,
        input: &mut dyn InputSource,
        display: &mut dyn DisplaySink,
    ) -> Result<bool> {
        let Some(event) = input.poll()? else {
            return Ok(false);
        };
        self.apply(event);
        self.update();
        self.present(display)?;
        self.clear_rotation();
        Ok(true)
    }

    fn present(&mut self, display: &mut dyn DisplaySink) -> Result<()> {
        self.render()?;
        let status = self.status();
        display.present(&self.frame, &status)
    }
}
