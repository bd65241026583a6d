use std::path::PathBuf;

use anyhow::{Context, Result};
use carousel::app::App;
use carousel::constants::*;
use carousel::texture_loader::load_sorted_image_paths;
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Browse a directory of images as a sliding carousel
#[derive(Parser, Debug)]
#[command(name = "carousel")]
#[command(version)]
struct Args {
    /// Directory containing the images (png, jpg, jpeg, bmp, gif)
    image_dir: PathBuf,

    /// Window width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: i32,

    /// Window height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: u32,

    /// Slide to show first (zero-based)
    #[arg(long, value_name = "INDEX")]
    start: Option<usize>,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();

    let paths = load_sorted_image_paths(&args.image_dir)
        .with_context(|| format!("cannot show {}", args.image_dir.display()))?;
    info!("{} slides in {}", paths.len(), args.image_dir.display());

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    rl.set_exit_key(Some(KeyboardKey::KEY_Q));

    let mut app = App::new(paths, args.width as f32, args.height as f32);
    if let Some(start) = args.start {
        app.start_at(start)?;
    }

    // --- Main Loop ---
    while !rl.window_should_close() {
        if rl.is_window_resized() {
            app.resize(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        }

        app.poll_input(&mut rl);
        let dt = rl.get_frame_time();
        app.update(&mut rl, &thread, dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        app.draw(&mut d);
    }

    info!("carousel closed on slide {}", app.controller().current());
    Ok(())
}
