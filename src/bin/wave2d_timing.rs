use wave2d_fd::cli::*;
use wave2d_fd::csv::*;
use wave2d_fd::timing::*;

fn run(args: &Args) -> Result<Vec<TimingRecord>, Box<dyn std::error::Error>> {
    let kernels = args.build_kernels();
    let params = args.timing_parameters();
    let records = match args.mode {
        Sweep::NumSteps => run_timing_num_steps(
            &kernels,
            &args.num_steps,
            args.model_size,
            &params,
        )?,
        Sweep::ModelSize => run_timing_model_size(
            &kernels,
            args.steps_for_size,
            &args.model_sizes,
            &params,
        )?,
    };

    match &args.output {
        Some(path) => write_csv(&records, path)?,
        None => write_records(&mut std::io::stdout().lock(), &records)?,
    }
    Ok(records)
}

fn main() {
    let (args, guard) = Args::cli_setup("wave2d_timing");

    let result = run(&args);
    guard.finish_frame();
    match result {
        Ok(records) => {
            tracing::info!(num_records = records.len(), "done");
        }
        Err(e) => {
            tracing::error!("{e}");
            drop(guard);
            std::process::exit(1);
        }
    }
}
