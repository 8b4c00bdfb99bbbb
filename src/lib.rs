// SPDX-License-Identifier: Apache-2.0

//! ## How it works
//!
//! Each logical IO channel owns one fixed-capacity [`IoBuffer`], a flat
//! byte region decoupling syscall granularity from the language-level
//! read/write API. Inbound bytes are *filled* into free space from a
//! descriptor; outbound bytes are *unshifted* into free space from a
//! source slice, staged until an external flush drains them. The buffer
//! is never resized; when an unshift does not fit, the accepted count is
//! truncated and the caller retries the remainder once space frees up.
//!
//! ### Filling
//!
//! [`fill`](IoBuffer::fill) reads through a transient stack scratch area
//! of [`SCRATCH_SIZE`] bytes, bounding each syscall independently of the
//! buffer's own capacity. The read is retried until it produces a
//! definitive result. Transient failures (would-block, interrupted) loop
//! back through the runtime's cooperative-preemption checkpoint, while
//! stream resets and timeouts collapse to an ordinary end-of-stream; any
//! other platform error aborts the fill. Error codes are classified into
//! [`ReadError`] at the [`RawRead`] boundary, so the retry logic itself
//! contains no platform constants.
//!
//! ### Collaborators
//!
//! The descriptor and the scheduler belong to the surrounding runtime.
//! Both reach the buffer as injected capabilities: [`RawRead`] wraps the
//! native read call for an already-resolved descriptor, and [`Preempt`]
//! is polled between retries so the runtime may pause the calling unit
//! of execution or demand that it unwind. [`Uninterruptible`] stands in
//! where no scheduler exists, and any [`std::io::Read`] can serve as a
//! descriptor through [`ReaderSource`].

mod buffer;
mod raw;
mod std_io;

pub use buffer::{FillError, IoBuffer};
pub use raw::{Cancelled, Errno, Preempt, RawRead, ReadError, Uninterruptible};
pub use std_io::ReaderSource;

cfg_if::cfg_if! {
	if #[cfg(unix)] {
		mod fd;
		pub use fd::FdReader;
	}
}

/// The storage capacity, in bytes, of buffers created with
/// [`IoBuffer::new`].
pub const BUFFER_SIZE: usize = 32768;

/// The size of the transient scratch area bounding each descriptor read
/// issued by [`fill`](IoBuffer::fill).
pub const SCRATCH_SIZE: usize = 8192;
