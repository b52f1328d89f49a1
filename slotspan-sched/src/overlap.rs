use slotspan_core::models::TimeSlot;

/// Compute the pairwise intersection of two slot sequences.
///
/// Every slot of `lhs` (outer, in sequence order) is intersected with every
/// slot of `rhs` (inner, in sequence order), so the result always holds
/// exactly `lhs.len() * rhs.len()` slots. No filtering is applied: a pair of
/// disjoint slots yields an inverted result (`end < start`) and a pair that
/// merely touches yields a zero-length one (`end == start`). Use
/// [`filter_genuine`] to keep only real overlaps.
///
/// # Examples
///
/// ```
/// use slotspan_core::TimeSlot;
/// use slotspan_core::utils::parse_timestamp;
/// use slotspan_sched::{filter_genuine, pairwise_overlap};
///
/// let ts = |text| parse_timestamp(text).unwrap();
/// let morning = vec![TimeSlot::new(ts("2020-01-01 10:00:00"), ts("2020-01-01 11:00:00"))];
/// let midday = vec![TimeSlot::new(ts("2020-01-01 11:00:00"), ts("2020-01-01 12:00:00"))];
///
/// // the shared 11:00 boundary comes back as a zero-length touch...
/// let overlaps = pairwise_overlap(&morning, &midday);
/// assert_eq!(overlaps.len(), 1);
/// assert_eq!(overlaps[0].start, overlaps[0].end);
///
/// // ...which the explicit filter removes
/// assert_eq!(filter_genuine(overlaps), vec![]);
/// ```
pub fn pairwise_overlap(lhs: &[TimeSlot], rhs: &[TimeSlot]) -> Vec<TimeSlot> {
    let mut overlaps = Vec::with_capacity(lhs.len() * rhs.len());
    for a in lhs {
        for b in rhs {
            overlaps.push(a.intersect(b));
        }
    }
    overlaps
}

/// Keep only slots with strictly positive duration.
///
/// The policy half of [`pairwise_overlap`]: drops the inverted and zero-length
/// results so only genuine overlaps remain, preserving order.
pub fn filter_genuine(overlaps: Vec<TimeSlot>) -> Vec<TimeSlot> {
    overlaps.into_iter().filter(|s| s.is_genuine()).collect()
}
