use anyhow::Result;
use clap::Parser;
use lumen_renderer::{Camera, FrameRenderer, LightOrbit, RenderConfig, Scene, Vec3};
use std::time::Duration;

mod cli;

use cli::Args;

/// Application state: the scene plus everything that drives it between frames.
struct App {
    scene: Scene,
    renderer: FrameRenderer,
    orbit: LightOrbit,

    // Scripted camera motion per frame
    spin: f32,
    walk: f32,

    frames_rendered: u32,
    total_time: Duration,
}

impl App {
    fn new(args: &Args) -> Result<Self> {
        let config = RenderConfig {
            bucket_size: args.bucket_size,
            num_threads: args.threads,
        };
        let renderer = FrameRenderer::new(args.width, args.height, &config)?;

        let mut camera = Camera::new();
        camera.init(args.width, args.height);

        log::info!(
            "Canvas {}x{}, {} buckets on {} threads",
            args.width,
            args.height,
            renderer.buckets().len(),
            renderer.num_threads()
        );

        Ok(Self {
            scene: Scene::new(camera),
            renderer,
            orbit: LightOrbit::default(),
            spin: args.spin,
            walk: args.walk,
            frames_rendered: 0,
            total_time: Duration::ZERO,
        })
    }

    /// Render one frame, then advance the animation for the next one.
    fn step(&mut self) {
        let stats = self.renderer.render_frame(&self.scene);
        self.frames_rendered += 1;
        self.total_time += stats.elapsed;

        log::debug!(
            "Frame {} rendered in {:.4} seconds ({} buckets)",
            self.frames_rendered,
            stats.elapsed.as_secs_f64(),
            stats.buckets
        );

        // Scene mutations only happen here, between frames
        self.orbit.advance(&mut self.scene.light);
        if self.spin != 0.0 {
            self.scene.camera.rotate(0.0, 0.0, self.spin);
        }
        if self.walk != 0.0 {
            self.scene.camera.move_game_like(Vec3::new(0.0, self.walk, 0.0));
        }
    }

    fn report(&self) {
        if self.frames_rendered == 0 {
            log::info!("No frames rendered");
            return;
        }

        let average = self.total_time.as_secs_f64() / self.frames_rendered as f64;
        let fps = if average > 0.0 { 1.0 / average } else { f64::INFINITY };
        let camera = &self.scene.camera;
        log::info!(
            "Rendered {} frames, {:.2} ms average ({:.1} fps)",
            self.frames_rendered,
            average * 1000.0,
            fps
        );
        log::info!(
            "Camera at {:?}, facing {:?}; light at {:?}",
            camera.position(),
            camera.direction(),
            self.scene.light.position
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting Lumen demo");

    let mut app = App::new(&args)?;
    for _ in 0..args.frames {
        app.step();
    }
    app.report();

    Ok(())
}
