use crate::{partition::partition, work_list::WorkList};
use core::mem;
use ndarray::{ArrayViewMut1, s};

/// Sorts `v` using dual-pivot quicksort with the range endpoints as pivots.
///
/// Each range is partitioned into the zones below, between, and above its two pivots, and the
/// zones with at least 2 elements are partitioned in turn. Pending zones live on a fixed-capacity
/// [`WorkList`], hence neither recursion nor allocation is involved.
pub fn dual_pivot_sort<T, F>(mut v: ArrayViewMut1<'_, T>, mut is_less: F)
where
	F: FnMut(&T, &T) -> bool,
{
	// Sorting has no meaningful behavior on zero-sized types.
	if mem::size_of::<T>() == 0 || v.len() < 2 {
		return;
	}

	let mut pending = WorkList::new(0, v.len() - 1);
	while let Some((left, right)) = pending.pop() {
		let (p1, p2) = partition(v.slice_mut(s![left..=right]), &mut is_less);
		let (p1, p2) = (left + p1, left + p2);
		pending.schedule([left..p1, p1 + 1..p2, p2 + 1..right + 1]);
	}
}
