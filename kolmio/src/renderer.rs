use std::time::{Duration, Instant};

use crate::{
    kolmio_debug, kolmio_trace,
    pipeline::{RasterSettings, Rasterizer},
    scene::Scene,
    surface::{grayscale, DrawSurface},
};

/// Frame pacing, separated from the loop so tests can drive frames with a
/// deterministic implementation.
pub trait Ticker {
    /// Waits until the next frame should run and returns the seconds elapsed
    /// since the previous tick.
    fn tick(&mut self) -> f32;
}

/// A [Ticker] targeting a fixed frame rate off the wall clock.
pub struct IntervalTicker {
    period: Duration,
    previous: Option<Instant>,
}

impl IntervalTicker {
    pub fn with_fps(fps: u32) -> Self {
        Self {
            period: Duration::from_secs_f32(1.0 / fps.max(1) as f32),
            previous: None,
        }
    }
}

impl Ticker for IntervalTicker {
    fn tick(&mut self) -> f32 {
        let Some(previous) = self.previous else {
            self.previous = Some(Instant::now());
            return 0.0;
        };

        let elapsed = previous.elapsed();
        if elapsed < self.period {
            std::thread::sleep(self.period - elapsed);
        }
        let now = Instant::now();
        self.previous = Some(now);
        (now - previous).as_secs_f32()
    }
}

/// What a frame ended up doing, for logging and tests.
#[derive(Copy, Clone, Debug)]
pub struct FrameStats {
    pub faces: usize,
    pub millis: f32,
}

/// The frame driver: owns the surface and the rasterizer and runs the
/// per-frame work to completion, one frame at a time.
///
/// Two states: stopped and running. `start` while running and `stop` while
/// stopped are no-ops, and `tick` does no work while stopped. All scene
/// mutation happens outside, between ticks.
pub struct Renderer<S>
where
    S: DrawSurface,
{
    surface: S,
    rasterizer: Rasterizer,
    running: bool,
}

impl<S> Renderer<S>
where
    S: DrawSurface,
{
    pub fn new(surface: S, settings: RasterSettings) -> Self {
        Self {
            surface,
            rasterizer: Rasterizer::new(settings),
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        kolmio_debug!("renderer: Started");
    }

    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        kolmio_debug!("renderer: Stopped");
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn rasterizer(&self) -> &Rasterizer {
        &self.rasterizer
    }

    pub fn rasterizer_mut(&mut self) -> &mut Rasterizer {
        &mut self.rasterizer
    }

    /// The single per-tick entry point: clear, project, draw back to front.
    ///
    /// Returns `None` without doing any work while stopped.
    pub fn tick(&mut self, scene: &Scene) -> Option<FrameStats> {
        if !self.running {
            return None;
        }

        let frame_start = Instant::now();
        let settings = self.rasterizer.settings();
        self.surface.clear(settings.width, settings.height);

        let faces = self.rasterizer.project_scene(scene);
        for face in &faces {
            let color = grayscale(face.intensity);
            self.surface.fill_polygon(&face.verts, color, color);
        }

        let millis = (frame_start.elapsed().as_micros() as f32) * 1e-3;
        kolmio_trace!("tick: Drew {} faces in {:4.2}ms", faces.len(), millis);

        Some(FrameStats {
            faces: faces.len(),
            millis,
        })
    }

    /// Runs the frame loop until `input` asks to stop.
    ///
    /// `input` is the seam for the input side: it gets the scene and the
    /// elapsed seconds before every frame and returns `false` to end the
    /// loop. The frame rate comes from the ticker.
    pub fn run<T, F>(&mut self, scene: &mut Scene, ticker: &mut T, mut input: F)
    where
        T: Ticker,
        F: FnMut(&mut Scene, f32) -> bool,
    {
        self.start();
        while self.running {
            let delta = ticker.tick();
            if !input(scene, delta) {
                self.stop();
                break;
            }
            self.tick(scene);
        }
    }
}
