use core::ops::Range;

/// Maximum number of pending ranges.
///
/// Zones are scheduled smallest-first, so while a zone of length `m` is being worked on, at most
/// two larger siblings per level wait below it and each level shrinks the working length to at
/// most `m / 2`. That caps the pending entries well below two per bit of `usize`.
const CAPACITY: usize = 2 * usize::BITS as usize;

/// Fixed-capacity stack of closed ranges `[left, right]` still waiting to be partitioned.
///
/// Replaces recursion in the driver so that stack usage stays constant regardless of how unbalanced
/// the partitions are.
pub struct WorkList {
	ranges: [(usize, usize); CAPACITY],
	len: usize,
}

impl WorkList {
	/// Creates a work list holding the closed range `[left, right]` if it has at least 2 elements.
	pub fn new(left: usize, right: usize) -> Self {
		let mut work_list = Self {
			ranges: [(0, 0); CAPACITY],
			len: 0,
		};
		if left < right {
			work_list.push(left, right);
		}
		work_list
	}

	fn push(&mut self, left: usize, right: usize) {
		debug_assert!(self.len < CAPACITY, "work list overflow");
		self.ranges[self.len] = (left, right);
		self.len += 1;
	}

	/// Pops the most recently scheduled range.
	pub fn pop(&mut self) -> Option<(usize, usize)> {
		self.len = self.len.checked_sub(1)?;
		Some(self.ranges[self.len])
	}

	/// Schedules the half-open `zones` of a partitioned range, skipping zones with fewer than
	/// 2 elements. The shortest zone is popped first.
	pub fn schedule(&mut self, mut zones: [Range<usize>; 3]) {
		if zones[0].len() < zones[1].len() {
			zones.swap(0, 1);
		}
		if zones[1].len() < zones[2].len() {
			zones.swap(1, 2);
		}
		if zones[0].len() < zones[1].len() {
			zones.swap(0, 1);
		}
		for zone in zones {
			if zone.len() >= 2 {
				self.push(zone.start, zone.end - 1);
			}
		}
	}

	#[cfg(test)]
	fn len(&self) -> usize {
		self.len
	}
}
