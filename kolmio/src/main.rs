use std::path::{Path, PathBuf};

use kolmio::{
    expect, kolmio_info, model,
    renderer::{IntervalTicker, Renderer},
    scene::Scene,
    settings::{load_settings, RendererSettings},
    surface::ImageSurface,
};

/// Frames of the turntable spin before the last one is written out.
const TURNTABLE_FRAMES: u32 = 90;

fn setup_logger() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}:{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .chain(std::fs::File::create("kolmio.log")?)
        .apply()?;
    Ok(())
}

fn main() {
    if let Err(why) = setup_logger() {
        panic!("{}", why);
    };

    let mut args = std::env::args().skip(1);
    let Some(model_path) = args.next() else {
        eprintln!("Usage: kolmio MODEL [SETTINGS.yaml] [OUTPUT.png]");
        std::process::exit(1);
    };
    let settings = match args.next() {
        Some(path) => expect!(load_settings(Path::new(&path)), "Failed to load settings"),
        None => RendererSettings::default(),
    };
    let output = args
        .next()
        .map_or_else(|| PathBuf::from("render.png"), PathBuf::from);

    let mesh = expect!(model::load(Path::new(&model_path)), "Failed to load model");

    let mut scene = Scene::default();
    scene.camera_mode = settings.camera_mode;
    scene.add_object(mesh);

    let surface = ImageSurface::new(settings.raster.width, settings.raster.height);
    let mut renderer = Renderer::new(surface, settings.raster);
    let mut ticker = IntervalTicker::with_fps(settings.fps);

    // Spin the model one degree per frame and keep the last frame
    let mut remaining = TURNTABLE_FRAMES;
    renderer.run(&mut scene, &mut ticker, |scene, _delta| {
        if remaining == 0 {
            return false;
        }
        remaining -= 1;
        let rotation = scene.objects[0].rotation();
        scene.objects[0].set_rotation(None, Some(rotation.y + 1.0), None);
        true
    });

    expect!(renderer.surface().save(&output), "Failed to write output");
    kolmio_info!(
        "main: Rendered {} frames to '{}'",
        TURNTABLE_FRAMES,
        output.to_string_lossy()
    );
}
