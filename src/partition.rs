use core::cmp::Ordering::{self, Equal, Less};
use ndarray::{ArrayView1, ArrayViewMut1};

/// Partitions `v` around the values at its first and last index.
///
/// The two boundary values are ordered first so that `pivot1 <= pivot2`. Then every other element
/// is moved into one of three zones and both pivots are swapped into their final positions:
///
/// ```text
/// +---------------+--------+----------------------+--------+----------------+
/// |   < pivot1    | pivot1 | pivot1 ..= pivot2    | pivot2 |   >= pivot2    |
/// +---------------+--------+----------------------+--------+----------------+
///                     p1                              p2
/// ```
///
/// Returns `(p1, p2)` with `p1 < p2`. The pivots never leave indices `0` and `len - 1` while the
/// cursors classify the interior, hence they are compared in place and `T` needs no `Clone`.
///
/// # Panics
///
/// Panics if `v.len() < 2`.
pub fn partition<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F) -> (usize, usize)
where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	assert!(
		len >= 2,
		"dual-pivot partition requires at least 2 elements but the array has {len}"
	);

	let left = 0;
	let right = len - 1;

	if is_less(&v[right], &v[left]) {
		v.swap(left, right);
	}

	// Elements in `left + 1..lt` are less than pivot1, elements in `lt..cur` lie between the
	// pivots, elements in `gt + 1..right` are greater than or equal to pivot2, and `cur..=gt` is
	// still unclassified.
	let mut lt = left + 1;
	let mut gt = right - 1;
	let mut cur = left + 1;

	while cur <= gt {
		if is_less(&v[cur], &v[left]) {
			v.swap(cur, lt);
			lt += 1;
		} else if !is_less(&v[cur], &v[right]) {
			// Skip elements already greater than pivot2. Stop at `cur` so the scan never enters the
			// classified zone to the left of it.
			while cur < gt && is_less(&v[right], &v[gt]) {
				gt -= 1;
			}
			v.swap(cur, gt);
			gt -= 1;
			// The element just brought in from the right might belong to the left zone.
			if is_less(&v[cur], &v[left]) {
				v.swap(cur, lt);
				lt += 1;
			}
		}
		cur += 1;
	}

	lt -= 1;
	gt += 1;
	v.swap(left, lt);
	v.swap(right, gt);

	(lt, gt)
}

/// Checks whether each pair of adjacent elements compares as `Less` or `Equal`.
pub fn is_sorted<T, F>(v: ArrayView1<'_, T>, mut compare: F) -> bool
where
	F: FnMut(&T, &T) -> Option<Ordering>,
{
	v.iter()
		.zip(v.iter().skip(1))
		.all(|(a, b)| matches!(compare(a, b), Some(Less | Equal)))
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{is_sorted, partition};
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;

	fn check_zones(array: &Array1<u32>, p1: usize, p2: usize) {
		assert!(p1 < p2 && p2 < array.len());
		let (pivot1, pivot2) = (array[p1], array[p2]);
		assert!(pivot1 <= pivot2);
		for (i, &x) in array.iter().enumerate() {
			if i < p1 {
				assert!(x < pivot1, "{x} at {i} not less than pivot1 {pivot1}");
			} else if p1 < i && i < p2 {
				assert!(pivot1 <= x && x <= pivot2, "{x} at {i} not between pivots");
			} else if i > p2 {
				assert!(x >= pivot2, "{x} at {i} less than pivot2 {pivot2}");
			}
		}
	}

	#[quickcheck]
	fn partitioned(xs: Vec<u32>) {
		if xs.len() < 2 {
			return;
		}
		let (first, last) = (xs[0], xs[xs.len() - 1]);
		let mut multiset = xs.clone();
		multiset.sort_unstable();
		let mut array = Array1::from_vec(xs);
		let (p1, p2) = partition(array.view_mut(), &mut u32::lt);
		check_zones(&array, p1, p2);
		assert_eq!(array[p1], first.min(last));
		assert_eq!(array[p2], first.max(last));
		let mut after = array.to_vec();
		after.sort_unstable();
		assert_eq!(after, multiset);
	}

	#[quickcheck]
	fn partitioned_few_distinct(xs: Vec<u8>) {
		if xs.len() < 2 {
			return;
		}
		let mut array = xs.into_iter().map(|x| u32::from(x % 3)).collect::<Array1<u32>>();
		let (p1, p2) = partition(array.view_mut(), &mut u32::lt);
		check_zones(&array, p1, p2);
	}

	#[test]
	fn two_elements() {
		let mut array = arr1(&[9, 4]);
		assert_eq!(partition(array.view_mut(), &mut u32::lt), (0, 1));
		assert_eq!(array, arr1(&[4, 9]));

		let mut array = arr1(&[4, 4]);
		assert_eq!(partition(array.view_mut(), &mut u32::lt), (0, 1));
		assert_eq!(array, arr1(&[4, 4]));
	}

	#[test]
	fn all_equal() {
		let mut array = arr1(&[2, 2, 2, 2]);
		let (p1, p2) = partition(array.view_mut(), &mut u32::lt);
		assert_eq!((p1, p2), (0, 2));
		assert_eq!(array, arr1(&[2, 2, 2, 2]));
	}

	#[test]
	fn duplicates_of_pivot2_at_right_boundary() {
		let mut array = arr1(&[3, 1, 9, 9, 9, 9]);
		let (p1, p2) = partition(array.view_mut(), &mut u32::lt);
		assert_eq!((p1, p2), (1, 3));
		assert_eq!(array, arr1(&[1, 3, 9, 9, 9, 9]));
		check_zones(&array, p1, p2);
	}

	#[test]
	fn scan_stops_at_cursor() {
		// Letting the leftward scan reach `cur` would swap 7 back into the middle zone.
		let mut array = arr1(&[1, 5, 7, 6]);
		let (p1, p2) = partition(array.view_mut(), &mut u32::lt);
		assert_eq!((p1, p2), (0, 2));
		assert_eq!(array, arr1(&[1, 5, 6, 7]));
	}

	#[test]
	fn scan_skips_greater_elements() {
		let mut array = arr1(&[4, 9, 2, 12, 11, 6]);
		let (p1, p2) = partition(array.view_mut(), &mut u32::lt);
		assert_eq!((p1, p2), (1, 2));
		assert_eq!(array, arr1(&[2, 4, 6, 12, 11, 9]));
	}

	#[test]
	fn swapped_in_element_is_reclassified() {
		// 1 arrives at `cur` from the right and has to move on into the left zone.
		let mut array = arr1(&[5, 9, 7, 1, 8]);
		let (p1, p2) = partition(array.view_mut(), &mut u32::lt);
		assert_eq!((p1, p2), (1, 3));
		assert_eq!(array, arr1(&[1, 5, 7, 8, 9]));
	}

	#[test]
	#[should_panic(expected = "at least 2 elements")]
	fn single_element_panics() {
		let mut array = arr1(&[1]);
		partition(array.view_mut(), &mut u32::lt);
	}

	#[test]
	fn sortedness() {
		let empty: [u32; 0] = [];
		assert!(is_sorted(arr1(&empty).view(), |a, b| a.partial_cmp(b)));
		assert!(is_sorted(arr1(&[7]).view(), |a, b| a.partial_cmp(b)));
		assert!(is_sorted(arr1(&[1, 2, 2, 9]).view(), |a, b| a.partial_cmp(b)));
		assert!(!is_sorted(arr1(&[1, 3, 2]).view(), |a, b| a.partial_cmp(b)));
		assert!(!is_sorted(arr1(&[0.0, f32::NAN]).view(), |a, b| a.partial_cmp(b)));
	}
}
