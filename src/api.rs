use crate::config::BatchConfig;
use crate::error::{KeyPathError, KpResult};
use crate::task::{TaskFailure, TaskOutcome, TypingResult, TypingTask};
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// Service: solve a single task.
pub fn solve_task(task: &TypingTask) -> KpResult<TypingResult> {
    debug!(
        "Solving '{}' from '{}' on {} keys x {}",
        task.word,
        task.starting_focus,
        task.alphabet.chars().count(),
        task.row_length
    );
    task.solve()
}

/// Service: solve every task, one result per task, in input order.
///
/// Tasks share nothing, so they run on rayon unless `sequential` is set.
/// The outer error only covers failing to build a dedicated worker pool.
pub fn solve_batch(
    tasks: &[TypingTask],
    config: &BatchConfig,
) -> KpResult<Vec<KpResult<TypingResult>>> {
    info!("Solving batch of {} tasks", tasks.len());

    let results: Vec<KpResult<TypingResult>> = if config.sequential {
        tasks.iter().map(solve_task).collect()
    } else if let Some(threads) = config.threads {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| KeyPathError::InvalidConfiguration(e.to_string()))?;
        pool.install(|| tasks.par_iter().map(solve_task).collect())
    } else {
        tasks.par_iter().map(solve_task).collect()
    };

    let failed = results.iter().filter(|r| r.is_err()).count();
    info!(
        "Batch done: {} solved, {} failed",
        results.len() - failed,
        failed
    );
    Ok(results)
}

/// Service: solve every task, failing on the first task (in input order)
/// that errors.
pub fn solve_all(tasks: &[TypingTask], config: &BatchConfig) -> KpResult<Vec<TypingResult>> {
    solve_batch(tasks, config)?
        .into_iter()
        .enumerate()
        .map(|(index, r)| {
            r.map_err(|source| KeyPathError::Task {
                index,
                source: Box::new(source),
            })
        })
        .collect()
}

/// Pairs each task with its result, keeping failures as inline records.
pub fn outcomes(tasks: &[TypingTask], results: Vec<KpResult<TypingResult>>) -> Vec<TaskOutcome> {
    tasks
        .iter()
        .zip(results)
        .enumerate()
        .map(|(index, (task, result))| match result {
            Ok(solved) => TaskOutcome::Solved(solved),
            Err(e) => {
                warn!("Task #{} failed: {}", index, e);
                TaskOutcome::Failed(TaskFailure {
                    task: task.clone(),
                    error: e.to_string(),
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fail_fast_reports_first_index() {
        let tasks = vec![
            TypingTask::new("abcdef", 3, 'a', "b"),
            TypingTask::new("abcdef", 0, 'a', "b"),
            TypingTask::new("abcdef", 3, 'a', "z"),
        ];
        let err = solve_all(&tasks, &BatchConfig::sequential()).unwrap_err();
        match err {
            KeyPathError::Task { index, source } => {
                assert_eq!(index, 1);
                assert!(matches!(*source, KeyPathError::InvalidConfiguration(_)));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn isolate_keeps_successes() {
        let tasks = vec![
            TypingTask::new("abcdef", 3, 'a', "z"),
            TypingTask::new("abcdef", 3, 'a', "b"),
        ];
        let results = solve_batch(&tasks, &BatchConfig::default()).unwrap();
        let out = outcomes(&tasks, results);
        assert!(!out[0].is_solved());
        assert!(out[1].is_solved());
        assert_eq!(out[0].task(), &tasks[0]);
    }
}
