//! Threshold-based parallel dispatch for per-pixel work
//!
//! Small images are processed sequentially, since spinning up rayon tasks
//! for a handful of pixels costs more than the work itself.

use rayon::prelude::*;

use super::PARALLEL_THRESHOLD;

/// Parallel for-each over mutable chunks with automatic threshold-based dispatch.
///
/// # Arguments
/// * `data` - The mutable slice to process
/// * `chunk_size` - Size of each chunk (3 for RGB pixels)
/// * `f` - Function to apply to each chunk
///
/// # Example
/// ```ignore
/// parallel_for_each_chunk_mut(&mut data, 3, |pixel| {
///     pixel[0] = scale_channel(pixel[0], r);
/// });
/// ```
pub(crate) fn parallel_for_each_chunk_mut<T, F>(data: &mut [T], chunk_size: usize, f: F)
where
    T: Send + Sync,
    F: Fn(&mut [T]) + Sync,
{
    let num_elements = data.len() / chunk_size;

    if num_elements >= PARALLEL_THRESHOLD {
        data.par_chunks_exact_mut(chunk_size).for_each(&f);
    } else {
        for chunk in data.chunks_exact_mut(chunk_size) {
            f(chunk);
        }
    }
}
