// SPDX-License-Identifier: Apache-2.0

use std::cmp::min;
use thiserror::Error;
use crate::{Cancelled, Errno, IoBuffer, Preempt, RawRead, ReadError, SCRATCH_SIZE};

/// A failed [`fill`](IoBuffer::fill). Staged bytes are intact in every
/// case.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum FillError {
	/// The descriptor read failed with an unclassified platform error.
	#[error("descriptor read failed ({0})")]
	Descriptor(Errno),
	/// The read produced more bytes than the free space covers at
	/// write-back, breaking the single-writer discipline. A defect in
	/// the caller or the reader, not a recoverable condition.
	#[error("buffer overrun during fill")]
	Overrun,
	/// The preemption checkpoint demanded unwinding.
	#[error("fill cancelled")]
	Cancelled,
}

impl From<Cancelled> for FillError {
	fn from(_: Cancelled) -> Self { Self::Cancelled }
}

impl IoBuffer {
	/// Reads once from `reader` into free space, retrying transient
	/// failures until the read produces a definitive result.
	///
	/// Each attempt reads through a transient stack scratch area, with
	/// a quota of at most [`SCRATCH_SIZE`] bytes bounded by
	/// [`remaining`](Self::remaining); a full buffer returns `Ok(0)`
	/// without touching the reader. Attempts that would block or are
	/// interrupted loop back through `preempt`, so the runtime can
	/// service signals or pause the caller between retries; a
	/// connection reset or timeout is reported as an ordinary end of
	/// stream instead of a failure.
	///
	/// Returns the number of bytes staged. 0 is definitive: end of
	/// stream, a reset treated as one, or a full buffer; "nothing
	/// available yet" is never surfaced, the fill blocks through it.
	pub fn fill(
		&mut self,
		reader: &mut impl RawRead,
		preempt: &mut impl Preempt
	) -> Result<usize, FillError> {
		let count = min(SCRATCH_SIZE, self.remaining());
		if count == 0 { return Ok(0) }

		let mut scratch = [0; SCRATCH_SIZE];
		let read = loop {
			match reader.read(&mut scratch[..count]) {
				Ok(read) => break read,
				// Treat as seeing end of stream.
				Err(ReadError::Reset | ReadError::TimedOut) => break 0,
				Err(ReadError::WouldBlock | ReadError::Interrupted) => preempt.poll()?,
				Err(ReadError::Other(errno)) => return Err(FillError::Descriptor(errno)),
			}
		};

		if read > 0 {
			// The reader may claim more than it was offered, and the
			// free space must still cover the claim at write-back.
			if read > count || read > self.remaining() {
				return Err(FillError::Overrun)
			}

			self.storage[self.used..self.used + read].copy_from_slice(&scratch[..read]);
			self.used += read;
		}

		Ok(read)
	}
}
