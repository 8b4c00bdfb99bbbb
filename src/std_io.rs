// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::io::Read;
use crate::{Errno, RawRead, ReadError};

/// A [`RawRead`] endpoint wrapping a std [`Read`]er, classifying its
/// errors the way the descriptor boundary classifies error codes.
///
/// Errors with no OS code behind them classify as
/// [`Other`](ReadError::Other) with a code of `-1`.
pub struct ReaderSource<R: Read>(R);

impl<R: Read> From<R> for ReaderSource<R> {
	fn from(reader: R) -> Self { Self(reader) }
}

impl<R: Read> ReaderSource<R> {
	/// Unwraps the inner reader.
	pub fn into_inner(self) -> R { self.0 }
}

impl<R: Read> RawRead for ReaderSource<R> {
	fn read(&mut self, buf: &mut [u8]) -> Result<usize, ReadError> {
		self.0.read(buf).map_err(classify)
	}
}

fn classify(error: io::Error) -> ReadError {
	match error.kind() {
		io::ErrorKind::ConnectionReset => ReadError::Reset,
		io::ErrorKind::TimedOut => ReadError::TimedOut,
		io::ErrorKind::WouldBlock => ReadError::WouldBlock,
		io::ErrorKind::Interrupted => ReadError::Interrupted,
		_ => ReadError::Other(Errno(error.raw_os_error().unwrap_or(-1))),
	}
}
