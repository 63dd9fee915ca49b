//! Turns an item count into a plan of whole packs.
//!
//! The target quantity is the item count rounded up to a multiple of the smallest
//! pack size. That target is then filled greedily, largest pack first.
//!
//! Greedy filling minimizes the pack count only for canonical size systems such as
//! the default `{250, 500, 1000, 2000, 5000}`. For `{1, 3, 4}` and 6 items it ships
//! `4 + 1 + 1` where `3 + 3` would use one pack less.

use crate::error::PackingError;
use packhub_domain::packs::{AllocationPlan, PackSize};
use std::collections::BTreeSet;
use tracing::debug;

/// Computes the allocation plan for `item_count` against `sizes`.
///
/// `sizes` is only read; order and duplicates do not matter. The plan holds one entry
/// per distinct size, zero for sizes that are not used. A non-positive `item_count`
/// yields an all-zero plan.
///
/// Each size takes `floor(remaining / size)` packs, largest first. That pass can strand
/// items when a size is not a multiple of the smallest one (`{250, 300}` for 500 takes
/// one 300 and leaves 200). Only then the plan is recomputed with a stepped fill,
/// which always ships exactly the rounded target.
///
/// # Errors
/// [`PackingError::EmptySizeSet`] if `sizes` is empty.
///
/// # Examples
/// ```rust
/// use packhub_domain::packs::PackSize;
/// use packhub_packing::allocate;
///
/// let sizes: Vec<PackSize> = [250, 500, 1000].into_iter().filter_map(PackSize::new).collect();
/// let plan = allocate(&sizes, 251).unwrap();
///
/// assert_eq!(plan.count(sizes[1]), Some(1));
/// assert_eq!(plan.total_items(), 500);
/// ```
pub fn allocate(sizes: &[PackSize], item_count: i64) -> Result<AllocationPlan, PackingError> {
    let sizes: BTreeSet<PackSize> = sizes.iter().copied().collect();
    let Some(smallest) = sizes.first().map(|size| u64::from(size.get())) else {
        return Err(PackingError::EmptySizeSet);
    };

    let mut plan = AllocationPlan::zeroed(sizes.iter().copied());
    let requested = match u64::try_from(item_count) {
        Ok(0) | Err(_) => return Ok(plan),
        Ok(requested) => requested,
    };

    // requested <= i64::MAX and smallest <= u32::MAX, so this cannot overflow u64.
    let target = requested.div_ceil(smallest) * smallest;

    let mut remaining = target;
    for size in sizes.iter().rev() {
        let items = u64::from(size.get());
        let packs = remaining / items;
        if packs > 0 {
            plan.set(*size, packs);
            remaining -= packs * items;
        }
    }

    if remaining > 0 {
        debug!(item_count, target, remaining, "Greedy pass left items over, using stepped fill");
        plan = stepped_fill(&sizes, smallest, target);
    }

    debug!(
        item_count,
        target,
        packs = plan.total_packs(),
        "Allocated packs"
    );
    Ok(plan)
}

/// Largest-first fill where each size is taken in multiples of `smallest / gcd(size, smallest)`
/// packs. The remainder stays a multiple of `smallest`, so the smallest size absorbs it.
fn stepped_fill(sizes: &BTreeSet<PackSize>, smallest: u64, target: u64) -> AllocationPlan {
    let mut plan = AllocationPlan::zeroed(sizes.iter().copied());
    let mut remaining = target;
    for size in sizes.iter().rev() {
        let items = u64::from(size.get());
        let step = smallest / gcd(items, smallest);
        let packs = remaining / items / step * step;
        if packs > 0 {
            plan.set(*size, packs);
            remaining -= packs * items;
        }
    }
    plan
}

const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(values: &[u32]) -> Vec<PackSize> {
        values.iter().copied().filter_map(PackSize::new).collect()
    }

    fn counts(plan: &AllocationPlan) -> Vec<(u32, u64)> {
        plan.iter().map(|(size, count)| (size.get(), *count)).collect()
    }

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(250, 500), 250);
        assert_eq!(gcd(300, 250), 50);
        assert_eq!(gcd(7, 5), 1);
    }

    #[test]
    fn empty_size_set_is_rejected() {
        assert_eq!(allocate(&[], 10), Err(PackingError::EmptySizeSet));
    }

    #[test]
    fn negative_count_ships_nothing() {
        let plan = allocate(&sizes(&[250, 500]), -5).unwrap();
        assert_eq!(counts(&plan), vec![(250, 0), (500, 0)]);
    }

    #[test]
    fn greedy_is_not_pack_count_optimal_for_non_canonical_sets() {
        let plan = allocate(&sizes(&[1, 3, 4]), 6).unwrap();
        assert_eq!(counts(&plan), vec![(1, 2), (3, 0), (4, 1)]);
        assert_eq!(plan.total_packs(), 3);
    }

    #[test]
    fn sizes_not_divisible_by_smallest_still_ship_the_target() {
        // Plain greedy would take one 300 and strand 200 items.
        let plan = allocate(&sizes(&[250, 300]), 500).unwrap();
        assert_eq!(counts(&plan), vec![(250, 2), (300, 0)]);
        assert_eq!(plan.total_items(), 500);
    }

    #[test]
    fn plain_greedy_wins_when_it_reaches_the_target() {
        let plan = allocate(&sizes(&[100, 150, 250]), 400).unwrap();
        assert_eq!(counts(&plan), vec![(100, 0), (150, 1), (250, 1)]);
        assert_eq!(plan.total_packs(), 2);
    }

    #[test]
    fn stepped_fill_keeps_remainder_on_the_smallest_grid() {
        let set: BTreeSet<PackSize> = sizes(&[250, 300]).into_iter().collect();
        let plan = stepped_fill(&set, 250, 1500);
        assert_eq!(counts(&plan), vec![(250, 0), (300, 5)]);
    }

    #[test]
    fn duplicates_and_order_in_input_do_not_matter() {
        let a = allocate(&sizes(&[5000, 250, 250, 1000]), 7001).unwrap();
        let b = allocate(&sizes(&[250, 1000, 5000]), 7001).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn largest_item_count_does_not_overflow() {
        let plan = allocate(&sizes(&[u32::MAX]), i64::MAX).unwrap();
        assert!(plan.total_items() >= i64::MAX.unsigned_abs());
    }
}
