use super::Record;

/// Writes records to an output destination.
pub trait Recorder {
    /// Write a record to the [`Recorder`].
    fn write(&mut self, record: Record);

    /// Flushes buffered output. `episode` is the number of completed episodes.
    ///
    /// Does nothing in the default implementation.
    fn flush(&mut self, _episode: usize) {}
}
