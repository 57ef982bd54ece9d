use clap::Parser;
use std::path::PathBuf;
use wave2d_fd::cli::{init_tracing, ProfilerGuard};
use wave2d_fd::image::*;
use wave2d_fd::init::*;
use wave2d_fd::propagator::*;
use wave2d_fd::solver::*;
use wave2d_fd::source::*;

/// Render a Ricker source spreading through a two layer model.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Output image directory, cleared first
    #[arg(short, long)]
    output_dir: PathBuf,

    /// Square model size
    #[arg(short, long, default_value = "400")]
    domain_size: usize,

    /// Number of images to write
    #[arg(short, long, default_value = "20")]
    images: usize,

    /// Steps between images
    #[arg(short, long, default_value = "40")]
    steps_per_image: usize,

    /// Kernel used for stepping
    #[arg(short, long, value_enum, default_value_t = KernelKind::Parallel)]
    kernel: KernelKind,

    /// The number of threads to use.
    #[arg(short, long, default_value = "8")]
    threads: usize,

    /// Color scale, fixed from the first non-zero frame when absent
    #[arg(long)]
    scale: Option<f32>,
}

/// Slow top half, fast bottom half.
fn layered_model(n: usize) -> Vec<f32> {
    (0..n * n)
        .map(|l| if l / n < n / 2 { 1500.0 } else { 3000.0 })
        .collect()
}

fn frame_name(output_dir: &std::path::Path, i: usize) -> PathBuf {
    let mut result = output_dir.to_path_buf();
    result.push(format!("frame_{:04}.png", i));
    result
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let _ = std::fs::remove_dir_all(&args.output_dir);
    std::fs::create_dir_all(&args.output_dir)?;

    let n = args.domain_size;
    let dx = TimingModel::DX;
    let mut propagator =
        Propagator::new(&layered_model(n), n, n, dx, None, None)?;
    let total_steps = args.images * args.steps_per_image;
    let trace = ricker(
        TimingModel::FREQ,
        total_steps,
        propagator.dt(),
        TimingModel::PEAK_TIME,
    );
    let mut table = SourceTable::new(total_steps);
    table.push(n / 2, n / 4, &trace);

    let kernel = args.kernel.build(&Default::default());
    tracing::info!(
        kernel = %kernel.label(),
        dt = propagator.dt(),
        "rendering"
    );

    let mut scale = args.scale;
    for i in 0..args.images {
        profiling::scope!("demo::frame");
        let chunk =
            table.window(i * args.steps_per_image, args.steps_per_image);
        let view = propagator.step(
            kernel.as_ref(),
            args.steps_per_image,
            &chunk.as_sources(),
        )?;
        let max = view.interior_max_abs();
        let frame_scale = match scale {
            Some(s) => s,
            None if max > 0.0 => {
                scale = Some(max);
                max
            }
            None => 1.0,
        };

        let path = frame_name(&args.output_dir, i);
        tracing::info!(frame = i, max, "writing {:?}", path);
        write_field_image(&view, frame_scale, &path)?;
        profiling::finish_frame!();
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_tracing();
    let guard = ProfilerGuard::start();
    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .thread_name(|i| format!("rayon_thread_{}", i))
        .build_global()
    {
        tracing::warn!("rayon global pool already initialized: {e}");
    }

    if let Err(e) = run(&args) {
        tracing::error!("{e}");
        drop(guard);
        std::process::exit(1);
    }
}
