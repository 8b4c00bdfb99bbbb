// SPDX-License-Identifier: Apache-2.0

mod fill;

pub use fill::FillError;

use std::cmp::min;
use std::fmt;
use std::fmt::{Debug, Formatter};
use all_asserts::debug_assert_le;
use crate::BUFFER_SIZE;

/// A fixed-capacity byte region staging data between a descriptor and
/// the language-level read/write API.
///
/// One buffer belongs to one logical IO channel, created with the
/// channel and dropped with it. Inbound data lands in free space via
/// [`fill`](Self::fill); outbound data is staged via
/// [`unshift`](Self::unshift) until the channel's flush path drains it.
/// Storage is allocated once and never resized; every copy into it is
/// bounds-checked against the free space before it executes.
///
/// Access is single-writer by ownership: one fill or unshift in flight
/// at a time, enforced by `&mut self`.
pub struct IoBuffer {
	/// The fixed backing storage, exactly `total` bytes long.
	storage: Box<[u8]>,
	/// The capacity, immutable after creation.
	total: usize,
	/// The count of valid staged bytes, never exceeding `total`.
	used: usize,
	/// The read cursor into staged bytes, never exceeding `used`.
	/// Advanced by the consumer side only; fill and unshift leave it
	/// alone.
	start: usize,
	/// Whether every staged byte has been flushed to the descriptor.
	/// Cleared whenever new bytes are staged; set again only through
	/// [`mark_write_synced`](Self::mark_write_synced).
	write_synced: bool,
}

impl IoBuffer {
	/// Creates a buffer with the default [`BUFFER_SIZE`] capacity.
	pub fn new() -> Self { Self::with_capacity(BUFFER_SIZE) }

	/// Creates a buffer with exactly `capacity` bytes of storage, fixed
	/// for the buffer's lifetime.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			storage: vec![0; capacity].into_boxed_slice(),
			total: capacity,
			used: 0,
			start: 0,
			write_synced: true,
		}
	}

	/// Returns the capacity in bytes.
	pub fn total(&self) -> usize { self.total }
	/// Returns the count of staged bytes.
	pub fn used(&self) -> usize { self.used }
	/// Returns the read cursor into staged bytes.
	pub fn start(&self) -> usize { self.start }
	/// Returns the number of bytes that can be staged before the buffer
	/// is full.
	pub fn remaining(&self) -> usize { self.total - self.used }
	/// Returns `true` if no bytes are staged.
	pub fn is_empty(&self) -> bool { self.used == 0 }
	/// Returns `true` if no free space is left.
	pub fn is_full(&self) -> bool { self.used == self.total }
	/// Returns `true` if all staged bytes have been flushed to the
	/// descriptor.
	pub fn is_write_synced(&self) -> bool { self.write_synced }

	/// Records that the external flush path has written all staged
	/// bytes out to the descriptor.
	pub fn mark_write_synced(&mut self) { self.write_synced = true; }

	/// Copies as much of `bytes` as fits into free space, returning the
	/// accepted count. An oversized slice is truncated to
	/// [`remaining`](Self::remaining), never an error; the caller is
	/// expected to hold on to the rest.
	pub fn append(&mut self, bytes: &[u8]) -> usize {
		self.write_synced = false;
		let count = min(bytes.len(), self.remaining());
		self.storage[self.used..self.used + count].copy_from_slice(&bytes[..count]);
		self.used += count;
		debug_assert_le!(self.used, self.total);
		count
	}

	/// Copies the unconsumed tail of `source`, from `start_position` to
	/// its end, into free space. Returns the accepted count so the
	/// caller can advance its own cursor and unshift the remainder once
	/// space frees up. An offset at or past the end of `source` accepts
	/// nothing.
	pub fn unshift(&mut self, source: &[u8], start_position: usize) -> usize {
		self.write_synced = false;
		let unread = source.get(start_position..).unwrap_or_default();
		self.append(unread)
	}

	/// Borrows the staged bytes not yet consumed.
	pub fn readable(&self) -> &[u8] { &self.storage[self.start..self.used] }

	/// Returns `true` when every staged byte has been consumed.
	pub fn is_exhausted(&self) -> bool { self.start >= self.used }

	/// Advances the read cursor by at most `count` bytes, clamped at
	/// the staged count, and returns the new cursor. Consuming the last
	/// staged byte resets the cursor and the staged count to zero, so
	/// the whole capacity is writable again.
	pub fn consume(&mut self, count: usize) -> usize {
		self.start = min(self.start + count, self.used);
		if self.start == self.used {
			self.start = 0;
			self.used = 0;
		}
		debug_assert_le!(self.start, self.used);
		self.start
	}
}

impl Default for IoBuffer {
	fn default() -> Self { Self::new() }
}

impl Debug for IoBuffer {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("IoBuffer")
			.field("total", &self.total)
			.field("used", &self.used)
			.field("start", &self.start)
			.field("write_synced", &self.write_synced)
			.finish_non_exhaustive()
	}
}
