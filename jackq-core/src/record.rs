//! Types and traits for recording training metrics.
//!
//! * [`Record`] - key-value container of [`RecordValue`]s
//! * [`Recorder`] - destination of records, written by the [`Trainer`](crate::Trainer)
//! * [`BufferedRecorder`] - keeps records in memory, useful for tests and displays
//! * [`NullRecorder`] - discards all records
//!
//! ```rust
//! use jackq_core::record::{Record, RecordValue};
//!
//! let mut record = Record::from_scalar("episode", 100.0);
//! record.insert("win_rate", RecordValue::Scalar(0.42));
//! record.insert("result", RecordValue::String("tie".to_string()));
//! assert_eq!(record.get_scalar("win_rate").unwrap(), 0.42);
//! ```
mod base;
mod buffered_recorder;
mod null_recorder;
mod recorder;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
