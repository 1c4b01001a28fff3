//! Upload progress reporting

/// Narrow callback interface for upload progress.
///
/// Invoked synchronously from within the sequential upload pipeline.
/// `file_index` is the 1-based position of the file in the original
/// submission list, not the remaining queue length.
pub trait UploadProgress {
    fn on_progress(&mut self, bytes_sent: u64, total_bytes: u64, file_index: usize);
}

impl<F> UploadProgress for F
where
    F: FnMut(u64, u64, usize),
{
    fn on_progress(&mut self, bytes_sent: u64, total_bytes: u64, file_index: usize) {
        self(bytes_sent, total_bytes, file_index)
    }
}

/// Reporter that discards progress events.
pub struct NoProgress;

impl UploadProgress for NoProgress {
    fn on_progress(&mut self, _bytes_sent: u64, _total_bytes: u64, _file_index: usize) {}
}
