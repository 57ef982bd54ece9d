use crate::build_info;
use crate::solver::*;
use crate::timing::*;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which parameter the timing sweep varies.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum Sweep {
    /// Fixed model size, varying step count
    #[default]
    NumSteps,

    /// Fixed step count, varying model size
    ModelSize,
}

/// Time the 2D wave equation kernels against each other.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Parameter to sweep.
    #[arg(short, long, value_enum, default_value_t = Sweep::NumSteps)]
    pub mode: Sweep,

    /// Kernels to time.
    #[arg(
        short,
        long,
        value_enum,
        value_delimiter = ',',
        default_values_t = KernelKind::all()
    )]
    pub kernels: Vec<KernelKind>,

    /// Repeats per measurement, the fastest is reported.
    #[arg(short = 'r', long, default_value = "10")]
    pub num_repeat: usize,

    /// Step counts for the num-steps sweep.
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = (0..=100).step_by(10).collect::<Vec<usize>>()
    )]
    pub num_steps: Vec<usize>,

    /// Square model size for the num-steps sweep.
    #[arg(long, default_value = "1000")]
    pub model_size: usize,

    /// Square model sizes for the model-size sweep.
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = (200..=2000).step_by(200).collect::<Vec<usize>>()
    )]
    pub model_sizes: Vec<usize>,

    /// Step count for the model-size sweep.
    #[arg(long, default_value = "10")]
    pub steps_for_size: usize,

    /// The number of threads to use.
    #[arg(short, long, default_value = "8")]
    pub threads: usize,

    /// Interior rows per task for the parallel kernel.
    #[arg(long, default_value = "1")]
    pub rows_per_task: usize,

    /// Rows per block for the blocked kernel.
    #[arg(long, default_value = "16")]
    pub block_rows: usize,

    /// Columns per block for the blocked kernel.
    #[arg(long, default_value = "256")]
    pub block_cols: usize,

    /// Round padded rows up to a multiple of this many bytes.
    #[arg(short, long)]
    pub align: Option<usize>,

    /// Seed for the random velocity model.
    #[arg(long, default_value = "1")]
    pub seed: u64,

    /// CSV file for the results, printed to stdout when absent.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print build information and quit
    #[arg(long)]
    pub build_info: bool,
}

impl Args {
    /// Parse arguments and set up logging, profiling and the thread pool.
    pub fn cli_setup(name: &str) -> (Self, ProfilerGuard) {
        let args = Args::parse();

        if args.build_info {
            build_info::print_report(name);
            std::process::exit(0);
        }

        init_tracing();
        let guard = ProfilerGuard::start();

        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .thread_name(|i| format!("rayon_thread_{}", i))
            .build_global()
        {
            tracing::warn!("rayon global pool already initialized: {e}");
        }
        tracing::info!(name, threads = args.threads, "starting");

        (args, guard)
    }

    pub fn kernel_parameters(&self) -> KernelParameters {
        KernelParameters {
            rows_per_task: self.rows_per_task,
            block_rows: self.block_rows,
            block_cols: self.block_cols,
        }
    }

    pub fn timing_parameters(&self) -> TimingParameters {
        TimingParameters {
            num_repeat: self.num_repeat,
            align: self.align,
            seed: self.seed,
        }
    }

    pub fn build_kernels(&self) -> Vec<Box<dyn WaveKernel>> {
        let params = self.kernel_parameters();
        self.kernels.iter().map(|k| k.build(&params)).collect()
    }
}

/// `RUST_LOG` style filtering, `info` when unset.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    // Ignore a second initialization, e.g. from tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Keeps the puffin server alive while profiling is enabled.
/// Dropping it flushes the profiler.
pub struct ProfilerGuard {
    #[cfg(feature = "profile-with-puffin")]
    server: Option<puffin_http::Server>,
}

impl ProfilerGuard {
    #[cfg(feature = "profile-with-puffin")]
    pub fn start() -> Self {
        let server_addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
        match puffin_http::Server::new(&server_addr) {
            Ok(server) => {
                tracing::info!(
                    "Run this to view profiling data:  puffin_viewer {server_addr}"
                );
                profiling::puffin::set_scopes_on(true);
                ProfilerGuard {
                    server: Some(server),
                }
            }
            Err(e) => {
                tracing::warn!("profiling server failed to start: {e}");
                ProfilerGuard { server: None }
            }
        }
    }

    #[cfg(not(feature = "profile-with-puffin"))]
    pub fn start() -> Self {
        ProfilerGuard {}
    }

    /// Mark the end of a profiling frame.
    pub fn finish_frame(&self) {
        profiling::finish_frame!();
    }
}

impl Drop for ProfilerGuard {
    fn drop(&mut self) {
        #[cfg(feature = "profile-with-puffin")]
        if let Some(server) = self.server.take() {
            tracing::info!("Flushing profiler");
            drop(server);
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["wave2d-timing"]).unwrap();
        assert_eq!(args.mode, Sweep::NumSteps);
        assert_eq!(args.kernels, KernelKind::all().to_vec());
        assert_eq!(args.num_steps, vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert_eq!(args.model_sizes.len(), 10);
        assert_eq!(args.model_sizes[9], 2000);
        assert_eq!(args.kernel_parameters(), KernelParameters::default());
        assert!(args.align.is_none());
    }

    #[test]
    fn lists_and_kernels() {
        let args = Args::try_parse_from([
            "wave2d-timing",
            "--mode",
            "model-size",
            "--kernels",
            "sequential,blocked",
            "--model-sizes",
            "64,128",
            "--block-cols",
            "32",
            "--align",
            "256",
        ])
        .unwrap();
        assert_eq!(args.mode, Sweep::ModelSize);
        assert_eq!(
            args.kernels,
            vec![KernelKind::Sequential, KernelKind::Blocked]
        );
        assert_eq!(args.model_sizes, vec![64, 128]);
        assert_eq!(args.timing_parameters().align, Some(256));
        let labels: Vec<String> =
            args.build_kernels().iter().map(|k| k.label()).collect();
        assert_eq!(labels, vec!["sequential", "blocked(16x32)"]);
    }
}
