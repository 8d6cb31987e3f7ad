use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Receiver;
use winit::dpi::LogicalSize;
use winit::window::WindowId;

use rollclock_core::state::DEFAULT_TICK_INTERVAL;
use rollclock_core::{ClockError, ClockFace, ClockState, FaceStyle, SystemTimeSource, Time, TimeSource};
use rollclock_engine::coords::Viewport;
use rollclock_engine::core::{App as EngineApp, AppControl, FrameCtx};
use rollclock_engine::device::GpuInit;
use rollclock_engine::paint::Color;
use rollclock_engine::render::{RoundedRectRenderer, TextRenderer};
use rollclock_engine::text::FontId;
use rollclock_engine::window::{Runtime, RuntimeConfig};

use crate::scene::UiScene;

// ── Application ───────────────────────────────────────────────────────────

/// Rolling clock application builder.
///
/// ```rust,ignore
/// Application::new()
///     .title("Rolling Clock")
///     .font(font_bytes)
///     .run()?;
/// ```
pub struct Application {
    title: String,
    width: f64,
    height: f64,
    font: Option<Vec<u8>>,
    style: FaceStyle,
    tick_interval: Duration,
    time_source: Arc<dyn TimeSource>,
    gpu: GpuInit,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title: "Rolling Clock".to_string(),
            width: 400.0,
            height: 800.0,
            font: None,
            style: FaceStyle::default(),
            tick_interval: DEFAULT_TICK_INTERVAL,
            time_source: Arc::new(SystemTimeSource),
            gpu: GpuInit::default(),
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// TrueType / OpenType bytes for the digits. Without a font only the
    /// cells are drawn.
    pub fn font(mut self, data: Vec<u8>) -> Self {
        self.font = Some(data);
        self
    }

    pub fn style(mut self, style: FaceStyle) -> Self {
        self.style = style;
        self
    }

    /// How often the ticker samples the time source.
    pub fn tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Replace the wall clock, e.g. with a `FixedTimeSource` for demos.
    pub fn time_source(mut self, source: Arc<dyn TimeSource>) -> Self {
        self.time_source = source;
        self
    }

    pub fn gpu(mut self, gpu: GpuInit) -> Self {
        self.gpu = gpu;
        self
    }

    /// Opens the window and blocks until it closes.
    pub fn run(self) -> anyhow::Result<()> {
        let (face_w, face_h) = ClockFace::new(self.style, Time::MIDNIGHT).size();
        let config = RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
            min_size: Some(LogicalSize::new(f64::from(face_w), f64::from(face_h))),
            resizable: true,
        };
        let gpu = self.gpu.clone();
        Runtime::run(config, gpu, ClockApp::new(self))
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── ClockApp ──────────────────────────────────────────────────────────────

/// Implements the engine `App`: owns the clock, the animated face and the
/// renderers.
struct ClockApp {
    clock: ClockState,
    updates: Receiver<Time>,
    face: ClockFace,
    font: Option<FontId>,
    background: Color,
    windows: usize,

    scene: UiScene,
    rounded_rect_renderer: RoundedRectRenderer,
    text_renderer: TextRenderer,
}

impl ClockApp {
    fn new(app: Application) -> Self {
        let mut scene = UiScene::new();
        let font = app.font.as_deref().and_then(|bytes| match scene.load_font(bytes) {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("{e}; digits will not be drawn");
                None
            }
        });

        let clock = ClockState::with_interval(app.time_source, app.tick_interval);
        let updates = clock.subscribe();
        let face = ClockFace::new(app.style, clock.latest());

        Self {
            background: Color::from_srgb_array(app.style.background),
            clock,
            updates,
            face,
            font,
            windows: 0,
            scene,
            rounded_rect_renderer: RoundedRectRenderer::new(),
            text_renderer: TextRenderer::new(),
        }
    }

    /// A window appeared; the first one starts the ticker.
    fn attach(&mut self) -> Result<(), ClockError> {
        self.windows += 1;
        if self.windows > 1 {
            return Ok(());
        }

        self.clock.start()?;

        // `latest()` is fresh once the ticker is up; anything queued before it is stale.
        while self.updates.try_recv().is_ok() {}
        self.face = ClockFace::new(*self.face.style(), self.clock.latest());
        Ok(())
    }

    /// A window went away; the last one stops the ticker.
    fn detach(&mut self) {
        self.windows = self.windows.saturating_sub(1);
        if self.windows == 0 {
            self.clock.stop();
        }
    }

    /// Applies every pending publish and steps the animations by `dt`
    /// seconds. Returns how many columns were retargeted.
    fn step(&mut self, dt: f32) -> usize {
        let mut changed = 0;
        for time in self.updates.try_iter() {
            changed += self.face.update(time).len();
        }
        self.face.advance(dt);
        changed
    }
}

impl EngineApp for ClockApp {
    fn on_window_created(&mut self, window_id: WindowId) -> AppControl {
        match self.attach() {
            Ok(()) => {
                log::info!("clock attached to {window_id:?} at {}", self.face.time());
                AppControl::Continue
            }
            Err(e) => {
                log::error!("{e}");
                AppControl::Exit
            }
        }
    }

    fn on_window_destroyed(&mut self, window_id: WindowId) {
        self.detach();
        log::info!("clock detached from {window_id:?}");
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.step(ctx.time.dt);

        let (w, h) = ctx.window.logical_size();
        let frame = self.face.frame();
        self.scene.frame(&frame, self.face.style(), self.font, Viewport::new(w, h));

        let dl = &mut self.scene.draw_list;
        let fs = &self.scene.font_system;
        let r_rr = &mut self.rounded_rect_renderer;
        let r_t = &mut self.text_renderer;

        ctx.render(self.background, |rctx, target| {
            r_rr.render(rctx, target, dl);
            r_t.render(rctx, target, dl, fs);
        })
    }
}
