// SPDX-License-Identifier: Apache-2.0

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use iostage::{IoBuffer, RawRead, ReadError, Uninterruptible};

/// A saturated source: every attempt fills the whole quota.
struct Zeroes;

impl RawRead for Zeroes {
	fn read(&mut self, buf: &mut [u8]) -> Result<usize, ReadError> {
		buf.fill(0);
		Ok(buf.len())
	}
}

fn fill(c: &mut Criterion) {
	c.bench_function("fill_to_capacity", |b| b.iter(|| {
		let mut buf = IoBuffer::new();
		let mut reader = Zeroes;
		while !buf.is_full() {
			black_box(buf.fill(&mut reader, &mut Uninterruptible).unwrap());
		}
		buf
	}));
}

fn unshift(c: &mut Criterion) {
	let data = [0x55; 8192];
	c.bench_function("unshift_to_capacity", |b| b.iter(|| {
		let mut buf = IoBuffer::new();
		while !buf.is_full() {
			black_box(buf.unshift(&data, 0));
		}
		buf
	}));
}

criterion_group!(benches, fill, unshift);
criterion_main!(benches);
