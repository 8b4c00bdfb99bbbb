// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::os::fd::RawFd;
use crate::{Errno, RawRead, ReadError};

/// A [`RawRead`] endpoint over an already-resolved raw descriptor.
///
/// Reads go straight through `read(2)`; a failed call retrieves the
/// thread's last OS error and classifies it. The owning channel opens
/// and closes the descriptor, this type only borrows the number.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FdReader {
	fd: RawFd,
}

impl FdReader {
	pub fn new(fd: RawFd) -> Self { Self { fd } }

	/// Returns the wrapped descriptor.
	pub fn fd(&self) -> RawFd { self.fd }
}

impl RawRead for FdReader {
	fn read(&mut self, buf: &mut [u8]) -> Result<usize, ReadError> {
		let read = unsafe {
			libc::read(self.fd, buf.as_mut_ptr().cast(), buf.len())
		};

		if read < 0 {
			let code = io::Error::last_os_error().raw_os_error().unwrap_or(0);
			Err(classify(Errno(code)))
		} else {
			Ok(read as usize)
		}
	}
}

fn classify(errno: Errno) -> ReadError {
	// EWOULDBLOCK aliases EAGAIN on most platforms, so it can't be a
	// second pattern arm.
	match errno.0 {
		libc::ECONNRESET => ReadError::Reset,
		libc::ETIMEDOUT => ReadError::TimedOut,
		libc::EINTR => ReadError::Interrupted,
		code if code == libc::EAGAIN || code == libc::EWOULDBLOCK => ReadError::WouldBlock,
		_ => ReadError::Other(errno),
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use super::classify;
	use crate::{Errno, ReadError};

	#[test]
	fn errno_classification() {
		assert_eq!(classify(Errno(libc::ECONNRESET)), ReadError::Reset);
		assert_eq!(classify(Errno(libc::ETIMEDOUT)), ReadError::TimedOut);
		assert_eq!(classify(Errno(libc::EAGAIN)), ReadError::WouldBlock);
		assert_eq!(classify(Errno(libc::EINTR)), ReadError::Interrupted);
		assert_eq!(classify(Errno(libc::EBADF)), ReadError::Other(Errno(libc::EBADF)));
	}
}
