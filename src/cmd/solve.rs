use crate::reports;
use clap::Args;
use keypath::api;
use keypath::config::{BatchConfig, FailurePolicy, InputFormat, OutputFormat};
use keypath::loader;
use keypath::task::TaskOutcome;
use keypath::{KeyPathError, KpResult};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// Task file: a JSON array of records, or CSV with a header row.
    pub input: PathBuf,

    #[arg(short, long, value_enum, default_value_t = InputFormat::Auto)]
    pub format: InputFormat,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    #[command(flatten)]
    pub batch: BatchConfig,
}

pub fn run(args: SolveArgs) -> KpResult<()> {
    info!("📂 Loading Tasks: {}", args.input.display());
    let tasks = loader::load_tasks(&args.input, args.format)?;
    let results = api::solve_batch(&tasks, &args.batch)?;

    let outcomes: Vec<TaskOutcome> = match args.batch.policy {
        FailurePolicy::FailFast => results
            .into_iter()
            .enumerate()
            .map(|(index, r)| {
                r.map(TaskOutcome::Solved)
                    .map_err(|source| KeyPathError::Task {
                        index,
                        source: Box::new(source),
                    })
            })
            .collect::<KpResult<Vec<_>>>()?,
        FailurePolicy::Isolate => api::outcomes(&tasks, results),
    };

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string(&outcomes)?),
        OutputFormat::Pretty => println!("{}", serde_json::to_string_pretty(&outcomes)?),
        OutputFormat::Table => reports::print_results_table(&outcomes),
    }
    Ok(())
}
