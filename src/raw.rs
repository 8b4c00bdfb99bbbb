// SPDX-License-Identifier: Apache-2.0

use std::result;
use amplify_derive::Display;
use thiserror::Error;

/// A raw platform error code, as retrieved after a failed native call.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq)]
#[display("errno {0}")]
pub struct Errno(pub i32);

/// A failed descriptor read, classified from the platform error code at
/// the [`RawRead`] boundary. Retry and abort decisions branch on these
/// variants; only [`Other`](Self::Other) still carries the raw code.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum ReadError {
	/// The peer reset the connection.
	#[error("connection reset")]
	Reset,
	/// The transport timed out.
	#[error("timed out")]
	TimedOut,
	/// No data is available on a non-blocking descriptor.
	#[error("would block")]
	WouldBlock,
	/// A signal arrived before any data did.
	#[error("interrupted")]
	Interrupted,
	/// Any other platform error, fatal to the operation in progress.
	#[error("read failed ({0})")]
	Other(Errno),
}

/// A readable endpoint behind an already-resolved descriptor.
///
/// Implementations wrap a native read call and last-error retrieval.
/// Descriptor lifecycle stays with the owning channel; an endpoint only
/// issues reads.
pub trait RawRead {
	/// Attempts to read up to `buf.len()` bytes, returning the count
	/// actually read. A count of 0 means end of stream.
	fn read(&mut self, buf: &mut [u8]) -> result::Result<usize, ReadError>;
}

/// Signalled through [`Preempt::poll`] when the owning runtime wants
/// the current unit of execution to unwind instead of resuming.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
#[error("cancelled at preemption checkpoint")]
pub struct Cancelled;

/// A cooperative-preemption checkpoint owned by the surrounding
/// runtime.
///
/// [`poll`](Self::poll) may block until it is safe to resume, letting
/// the runtime deliver signals or pause the caller. Returning an error
/// unwinds the operation sitting at the checkpoint; every checkpoint
/// sits before write-back, so buffer state is never torn.
pub trait Preempt {
	fn poll(&mut self) -> result::Result<(), Cancelled>;
}

impl<F: FnMut() -> result::Result<(), Cancelled>> Preempt for F {
	fn poll(&mut self) -> result::Result<(), Cancelled> { self() }
}

/// A no-op checkpoint for contexts without a scheduler.
#[derive(Copy, Clone, Debug, Default)]
pub struct Uninterruptible;

impl Preempt for Uninterruptible {
	fn poll(&mut self) -> result::Result<(), Cancelled> { Ok(()) }
}
