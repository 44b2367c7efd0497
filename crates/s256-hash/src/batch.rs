//! # Batch Hashing
//!
//! Blocks of a single message must be compressed in order, but independent
//! messages share nothing except the read-only constant tables. A batch is
//! split into contiguous chunks, one scoped thread per chunk, and results
//! are reassembled in input order.

use std::num::NonZeroUsize;
use std::thread;

use s256_core::{Digest, HashError};

use crate::hasher::hash;

/// Hash every input concurrently, returning digests in input order.
///
/// # Errors
///
/// Returns the first error in input order. Inputs after a failing input in
/// the same chunk are not hashed.
pub fn hash_batch<T>(inputs: &[T]) -> Result<Vec<Digest>, HashError>
where
    T: AsRef<[u8]> + Sync,
{
    if inputs.is_empty() {
        return Ok(Vec::new());
    }

    let workers = thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
        .min(inputs.len());
    let chunk_len = inputs.len().div_ceil(workers);
    tracing::debug!(inputs = inputs.len(), workers, "hashing batch");

    let chunks: Vec<Result<Vec<Digest>, HashError>> = thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .chunks(chunk_len)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|input| hash(input.as_ref()))
                        .collect::<Result<Vec<_>, _>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    });

    let mut digests = Vec::with_capacity(inputs.len());
    for chunk in chunks {
        digests.extend(chunk?);
    }
    Ok(digests)
}
