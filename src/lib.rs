//! In-place [dual-pivot quicksort] for non-contiguous (sub)views into *n*-dimensional arrays.
//!
//! Every range is partitioned around the two values at its ends into three zones, which are then
//! sorted the same way. Works on any one-dimensional [`ndarray`] array or (sub)view with arbitrary
//! memory layout (e.g., a column of a row-major matrix) and on plain slices via
//! [`ArrayViewMut1::from`](ndarray::ArrayViewMut1).
//!
//! # Example
//!
//! ```
//! use ndarray_dual_pivot::{DualPivotExt, ndarray::arr2};
//!
//! // 2-dimensional array of 4 rows and 5 columns.
//! let mut v = arr2(&[[-5, 4, 1, -3,  2],   // row 0, axis 0
//!                    [ 8, 3, 2,  4,  8],   // row 1, axis 0
//!                    [38, 9, 3,  0,  3],   // row 2, axis 0
//!                    [ 4, 9, 0,  8, -1]]); // row 3, axis 0
//! //                    \     \       \
//! //                  column 0 \    column 4         axis 1
//! //                         column 2                axis 1
//!
//! // Mutable subview into the last column.
//! let mut column = v.column_mut(4);
//!
//! // Due to row-major memory layout, columns are non-contiguous
//! // and hence cannot be sorted by viewing them as mutable slices.
//! assert_eq!(column.as_slice_mut(), None);
//!
//! // Dual-pivot sorting only needs indexed access and swaps.
//! column.sort_unstable();
//!
//! assert!(v == arr2(&[[-5, 4, 1, -3, -1],
//!                     [ 8, 3, 2,  4,  2],
//!                     [38, 9, 3,  0,  3],
//!                     [ 4, 9, 0,  8,  8]]));
//! ```
//!
//! Slices are sorted through a mutable view:
//!
//! ```
//! use ndarray_dual_pivot::{DualPivotExt, ndarray::ArrayViewMut1};
//!
//! let mut v = [5, 3, 8, 1, 9, 2];
//! ArrayViewMut1::from(&mut v[..]).sort_unstable();
//! assert_eq!(v, [1, 2, 3, 5, 8, 9]);
//! ```
//!
//! # Current Implementation
//!
//! Complexities where *n* is the length of the (sub)view.
//!
//! | Resource | Complexity | Sorting (unstable)  |
//! |----------|------------|---------------------|
//! | Time     | Best       | *O*(*n*)            |
//! | Time     | Average    | *O*(*n* log *n*)    |
//! | Time     | Worst      | *O*(*n*^2)          |
//! | Space    | All        | *O*(1)              |
//!
//! Pending ranges are kept on a fixed-size stack of `2 * usize::BITS` entries instead of the call
//! stack, so no input recurses or allocates.
//!
//! [dual-pivot quicksort]: https://en.wikipedia.org/wiki/Quicksort#Multi-pivot_quicksort
//!
//! # Features
//!
//!   * `std` links the standard library. Enabled by `default`. Without it the crate is `no_std`
//!     and never allocates.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod dual_pivot_sort;
mod partition;
mod range;
mod work_list;

use crate::{
	dual_pivot_sort::dual_pivot_sort,
	partition::{is_sorted, partition},
	range::checked_range,
};
use core::{
	cmp::Ordering::{self, Less},
	ops::RangeBounds,
};
use ndarray::{ArrayBase, Data, DataMut, Ix1, s};

pub use ndarray;

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing in-place dual-pivot sorting and
/// partitioning.
///
/// The comparator functions taken by the `_by` methods must define a total ordering for the
/// elements in the array. If the ordering is not total, the order of the elements is unspecified,
/// but the array still ends up holding a permutation of its elements and the call still returns.
/// An order is a total order if it is (for all `a`, `b` and `c`):
///
/// * total and antisymmetric: exactly one of `a < b`, `a == b` or `a > b` is true, and
/// * transitive, `a < b` and `b < c` implies `a < c`. The same must hold for both `==` and `>`.
pub trait DualPivotExt<A, S>
where
	S: Data<Elem = A>,
{
	/// Sorts the array, but might not preserve the order of equal elements.
	///
	/// This sort is unstable (i.e., may reorder equal elements) and in-place
	/// (i.e., does not allocate).
	///
	/// # Current Implementation
	///
	/// The first and last element of a range serve as pivots. After ordering them, one pass
	/// moves every element less than the smaller pivot to the front, every element not less than
	/// the greater pivot to the back, and leaves the rest in between. Both pivots then land at their
	/// final positions and the three zones are sorted the same way, shortest zone first.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_dual_pivot::{DualPivotExt, ndarray::arr1};
	///
	/// let mut v = arr1(&[5, 3, 8, 1, 9, 2]);
	///
	/// v.sort_unstable();
	/// assert!(v == arr1(&[1, 2, 3, 5, 8, 9]));
	/// ```
	fn sort_unstable(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array with a comparator function, but might not preserve the order of equal
	/// elements.
	///
	/// This sort is unstable (i.e., may reorder equal elements) and in-place
	/// (i.e., does not allocate).
	///
	/// For example, while [`f64`] doesn't implement [`Ord`] because `NaN != NaN`, we can use
	/// `partial_cmp` as our sort function when we know the array doesn't contain a `NaN`.
	///
	/// ```
	/// use ndarray_dual_pivot::{DualPivotExt, ndarray::arr1};
	///
	/// let mut floats = arr1(&[5f64, 4.0, 1.0, 3.0, 2.0]);
	/// floats.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap());
	/// assert_eq!(floats, arr1(&[1.0, 2.0, 3.0, 4.0, 5.0]));
	/// ```
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_dual_pivot::{DualPivotExt, ndarray::arr1};
	///
	/// let mut v = arr1(&[5, 4, 1, 3, 2]);
	/// v.sort_unstable_by(|a, b| a.cmp(b));
	/// assert!(v == arr1(&[1, 2, 3, 4, 5]));
	///
	/// // reverse sorting
	/// v.sort_unstable_by(|a, b| b.cmp(a));
	/// assert!(v == arr1(&[5, 4, 3, 2, 1]));
	/// ```
	fn sort_unstable_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
	/// Sorts the array with a key extraction function, but might not preserve the order of equal
	/// elements.
	///
	/// This sort is unstable (i.e., may reorder equal elements) and in-place
	/// (i.e., does not allocate). The key function is called twice per comparison.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_dual_pivot::{DualPivotExt, ndarray::arr1};
	///
	/// let mut v = arr1(&[-5i32, 4, 1, -3, 2]);
	///
	/// v.sort_unstable_by_key(|k| k.abs());
	/// assert!(v == arr1(&[1, 2, -3, 4, -5]));
	/// ```
	fn sort_unstable_by_key<K, F>(&mut self, f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut;
	/// Sorts the elements within `range` and leaves all others untouched.
	///
	/// # Panics
	///
	/// Panics when the range starts after it ends or ends after `len()`.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_dual_pivot::{DualPivotExt, ndarray::arr1};
	///
	/// let mut v = arr1(&[9, 5, 3, 8, 1, 0]);
	///
	/// v.sort_unstable_range(1..5);
	/// assert!(v == arr1(&[9, 1, 3, 5, 8, 0]));
	/// ```
	fn sort_unstable_range<R>(&mut self, range: R)
	where
		A: Ord,
		R: RangeBounds<usize>,
		S: DataMut;
	/// Sorts the elements within `range` with a comparator function and leaves all others
	/// untouched.
	///
	/// # Panics
	///
	/// Panics when the range starts after it ends or ends after `len()`.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_dual_pivot::{DualPivotExt, ndarray::arr1};
	///
	/// let mut v = arr1(&[0, 1, 2, 3, 4, 5]);
	///
	/// v.sort_unstable_range_by(2.., |a, b| b.cmp(a));
	/// assert!(v == arr1(&[0, 1, 5, 4, 3, 2]));
	/// ```
	fn sort_unstable_range_by<R, F>(&mut self, range: R, compare: F)
	where
		R: RangeBounds<usize>,
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;

	/// Partitions the array once around its first and last element and returns the final
	/// indices `(p1, p2)` of the smaller and the greater of the two.
	///
	/// Afterwards, with `pivot1 = self[p1]` and `pivot2 = self[p2]`, all elements before `p1` are
	/// less than `pivot1`, all elements between `p1` and `p2` lie within `pivot1..=pivot2`, and all
	/// elements after `p2` are greater than or equal to `pivot2`. It holds `p1 < p2`.
	///
	/// This is a single step of [`sort_unstable`](DualPivotExt::sort_unstable).
	///
	/// # Panics
	///
	/// Panics when `len() < 2`.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_dual_pivot::{DualPivotExt, ndarray::arr1};
	///
	/// let mut v = arr1(&[6, 2, 9, 1, 7, 4]);
	///
	/// let (p1, p2) = v.partition_dual_pivot();
	/// assert_eq!((p1, p2), (2, 3));
	/// assert!(v == arr1(&[1, 2, 4, 6, 7, 9]));
	/// ```
	fn partition_dual_pivot(&mut self) -> (usize, usize)
	where
		A: Ord,
		S: DataMut;
	/// Partitions the array once around its first and last element with a comparator function.
	///
	/// See [`partition_dual_pivot`](DualPivotExt::partition_dual_pivot).
	///
	/// # Panics
	///
	/// Panics when `len() < 2`.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_dual_pivot::{DualPivotExt, ndarray::arr1};
	///
	/// let mut v = arr1(&[3, 8, 5, 9]);
	///
	/// let (p1, p2) = v.partition_dual_pivot_by(|a, b| b.cmp(a));
	/// assert_eq!((p1, p2), (0, 3));
	/// assert!(v == arr1(&[9, 8, 5, 3]));
	/// ```
	fn partition_dual_pivot_by<F>(&mut self, compare: F) -> (usize, usize)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;

	/// Checks if the elements of this array are sorted.
	///
	/// That is, for each element `a` and its following element `b`, `a <= b` must hold. If the
	/// array yields exactly zero or one element, `true` is returned.
	///
	/// Note that if `Self::Item` is only `PartialOrd`, but not `Ord`, the above definition
	/// implies that this function returns `false` if any two consecutive items are not
	/// comparable.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_dual_pivot::{DualPivotExt, ndarray::arr1};
	///
	/// let empty: [i32; 0] = [];
	///
	/// assert!(arr1(&[1, 2, 2, 9]).is_sorted());
	/// assert!(!arr1(&[1, 3, 2, 4]).is_sorted());
	/// assert!(arr1(&[0]).is_sorted());
	/// assert!(arr1(&empty).is_sorted());
	/// assert!(!arr1(&[0.0, 1.0, f32::NAN]).is_sorted());
	/// ```
	#[must_use]
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd;
	/// Checks if the elements of this array are sorted using the given comparator function.
	///
	/// Instead of using `PartialOrd::partial_cmp`, this function uses the given `compare`
	/// function to determine the ordering of two elements. Apart from that, it's equivalent to
	/// [`is_sorted`]; see its documentation for more information.
	///
	/// [`is_sorted`]: DualPivotExt::is_sorted
	#[must_use]
	fn is_sorted_by<F>(&self, compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Option<Ordering>;
	/// Checks if the elements of this array are sorted using the given key extraction function.
	///
	/// Instead of comparing the array's elements directly, this function compares the keys of the
	/// elements, as determined by `f`. Apart from that, it's equivalent to [`is_sorted`]; see its
	/// documentation for more information.
	///
	/// [`is_sorted`]: DualPivotExt::is_sorted
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_dual_pivot::{DualPivotExt, ndarray::arr1};
	///
	/// assert!(arr1(&["c", "bb", "aaa"]).is_sorted_by_key(|s| s.len()));
	/// assert!(!arr1(&[-2i32, -1, 0, 3]).is_sorted_by_key(|n| n.abs()));
	/// ```
	#[must_use]
	fn is_sorted_by_key<F, K>(&self, f: F) -> bool
	where
		F: FnMut(&A) -> K,
		K: PartialOrd;
}

impl<A, S> DualPivotExt<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[inline]
	fn sort_unstable(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		dual_pivot_sort(self.view_mut(), A::lt);
	}
	#[inline]
	fn sort_unstable_by<F>(&mut self, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		dual_pivot_sort(self.view_mut(), |a: &A, b: &A| compare(a, b) == Less);
	}
	#[inline]
	fn sort_unstable_by_key<K, F>(&mut self, mut f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut,
	{
		dual_pivot_sort(self.view_mut(), |a: &A, b: &A| f(a).lt(&f(b)));
	}
	#[inline]
	#[track_caller]
	fn sort_unstable_range<R>(&mut self, range: R)
	where
		A: Ord,
		R: RangeBounds<usize>,
		S: DataMut,
	{
		let range = checked_range(range, self.len());
		dual_pivot_sort(self.slice_mut(s![range]), A::lt);
	}
	#[inline]
	#[track_caller]
	fn sort_unstable_range_by<R, F>(&mut self, range: R, mut compare: F)
	where
		R: RangeBounds<usize>,
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		let range = checked_range(range, self.len());
		dual_pivot_sort(self.slice_mut(s![range]), |a: &A, b: &A| {
			compare(a, b) == Less
		});
	}

	#[inline]
	#[track_caller]
	fn partition_dual_pivot(&mut self) -> (usize, usize)
	where
		A: Ord,
		S: DataMut,
	{
		partition(self.view_mut(), &mut A::lt)
	}
	#[inline]
	#[track_caller]
	fn partition_dual_pivot_by<F>(&mut self, mut compare: F) -> (usize, usize)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		partition(self.view_mut(), &mut |a: &A, b: &A| compare(a, b) == Less)
	}

	#[inline]
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd,
	{
		is_sorted(self.view(), |a, b| a.partial_cmp(b))
	}
	#[inline]
	fn is_sorted_by<F>(&self, compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Option<Ordering>,
	{
		is_sorted(self.view(), compare)
	}
	#[inline]
	fn is_sorted_by_key<F, K>(&self, mut f: F) -> bool
	where
		F: FnMut(&A) -> K,
		K: PartialOrd,
	{
		is_sorted(self.view(), |a, b| f(a).partial_cmp(&f(b)))
	}
}
