use core::ops::{Bound, Range, RangeBounds};

/// Converts `range` into a half-open range checked against an array of length `len`.
///
/// # Panics
///
/// Panics if the start exceeds the end or if the end exceeds `len`.
#[track_caller]
pub fn checked_range<R>(range: R, len: usize) -> Range<usize>
where
	R: RangeBounds<usize>,
{
	let start = match range.start_bound() {
		Bound::Included(&start) => start,
		Bound::Excluded(&start) => start
			.checked_add(1)
			.unwrap_or_else(|| start_index_overflow_fail()),
		Bound::Unbounded => 0,
	};
	let end = match range.end_bound() {
		Bound::Included(&end) => end
			.checked_add(1)
			.unwrap_or_else(|| end_index_overflow_fail()),
		Bound::Excluded(&end) => end,
		Bound::Unbounded => len,
	};
	if start > end {
		index_order_fail(start, end);
	}
	if end > len {
		end_index_len_fail(end, len);
	}
	start..end
}

#[cold]
#[track_caller]
fn index_order_fail(start: usize, end: usize) -> ! {
	panic!("range starts at {start} but ends at {end}");
}

#[cold]
#[track_caller]
fn end_index_len_fail(end: usize, len: usize) -> ! {
	panic!("range end index {end} out of range for array of length {len}");
}

#[cold]
#[track_caller]
fn start_index_overflow_fail() -> ! {
	panic!("attempted to index array from after maximum usize");
}

#[cold]
#[track_caller]
fn end_index_overflow_fail() -> ! {
	panic!("attempted to index array up to maximum usize");
}
