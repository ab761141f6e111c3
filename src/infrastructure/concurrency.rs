/// Concurrency management for TreeVec.
/// Configures the rayon pool used by batch encoding.

use anyhow::Result;

/// Initialize the global rayon thread pool.
///
/// With no explicit worker count, reserves ~50% of CPU capacity for the
/// host process (trainer, notebook kernel, etc.) feeding the pipeline.
pub fn init_thread_pool(workers: Option<usize>) -> Result<()> {
    let cores = num_cpus::get();
    let workers = workers.unwrap_or_else(|| std::cmp::max(1, cores / 2));

    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build_global()?;

    println!(
        "[TreeVec] Initialized thread pool: {} workers (system has {} cores)",
        workers, cores
    );

    Ok(())
}
