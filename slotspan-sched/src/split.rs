use chrono::{NaiveDateTime, TimeDelta};

use slotspan_core::ScheduleError;
use slotspan_core::models::TimeSlot;

/// Divide the span `[start, end]` into `count` equal-length slots separated by
/// `gap` of idle time.
///
/// The per-slot length is `d = T/count − gap×(count−1)/count` where
/// `T = end − start`, so the first slot begins at `start` and, when the
/// division is exact, the last slot ends at `end`. `TimeDelta` arithmetic is
/// nanosecond-resolution, so integer-second inputs do not visibly drift.
///
/// A negative `gap` is accepted and makes consecutive slots overlap; that is
/// the caller's responsibility.
///
/// # Errors
///
/// Fails with [`ScheduleError::InvalidSlotCount`] when `count == 0` or when it
/// exceeds `i32::MAX`, and with [`ScheduleError::EndNotAfterStart`] when
/// `end <= start`. Validation happens before any slot arithmetic.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use slotspan_core::utils::parse_timestamp;
/// use slotspan_sched::split_range;
///
/// let slots = split_range(
///     parse_timestamp("2010-01-12 10:30:00").unwrap(),
///     parse_timestamp("2010-01-12 10:45:00").unwrap(),
///     2,
///     TimeDelta::seconds(60),
/// ).unwrap();
///
/// assert_eq!(slots[0].to_string(), "2010-01-12 10:30:00\t2010-01-12 10:37:00");
/// assert_eq!(slots[1].to_string(), "2010-01-12 10:38:00\t2010-01-12 10:45:00");
/// ```
pub fn split_range(
    start: NaiveDateTime,
    end: NaiveDateTime,
    count: u32,
    gap: TimeDelta,
) -> Result<Vec<TimeSlot>, ScheduleError> {
    // TimeDelta scaling is i32, so oversized counts are rejected along with zero
    let count = match i32::try_from(count) {
        Ok(count) if count > 0 => count,
        _ => return Err(ScheduleError::InvalidSlotCount(count)),
    };
    if end <= start {
        return Err(ScheduleError::EndNotAfterStart { start, end });
    }

    let total = end - start;
    let slot_len = total / count - (gap * (count - 1)) / count;

    let mut slots = Vec::with_capacity(count as usize);
    for i in 0..count {
        let slot_start = start + (slot_len + gap) * i;
        slots.push(TimeSlot::new(slot_start, slot_start + slot_len));
    }

    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use slotspan_core::utils::{format_timestamp, parse_timestamp};

    fn ts(text: &str) -> NaiveDateTime {
        parse_timestamp(text).unwrap()
    }

    #[rstest]
    fn test_whole_window_is_one_slot() {
        let slots = split_range(
            ts("2010-01-12 10:00:00"),
            ts("2010-01-12 12:00:00"),
            1,
            TimeDelta::zero(),
        )
        .unwrap();

        assert_eq!(
            slots,
            vec![TimeSlot::new(
                ts("2010-01-12 10:00:00"),
                ts("2010-01-12 12:00:00"),
            )]
        );
    }

    #[rstest]
    fn test_split_with_gap() {
        let slots = split_range(
            ts("2010-01-12 10:30:00"),
            ts("2010-01-12 10:45:00"),
            2,
            TimeDelta::seconds(60),
        )
        .unwrap();

        assert_eq!(
            slots,
            vec![
                TimeSlot::new(ts("2010-01-12 10:30:00"), ts("2010-01-12 10:37:00")),
                TimeSlot::new(ts("2010-01-12 10:38:00"), ts("2010-01-12 10:45:00")),
            ]
        );
    }

    #[rstest]
    #[case(1, 0)]
    #[case(3, 0)]
    #[case(3, 60)]
    #[case(7, 45)]
    #[case(12, 1)]
    fn test_slot_count(#[case] count: u32, #[case] gap_s: i64) {
        let slots = split_range(
            ts("2020-01-01 08:00:00"),
            ts("2020-01-01 17:00:00"),
            count,
            TimeDelta::seconds(gap_s),
        )
        .unwrap();

        assert_eq!(slots.len(), count as usize);
    }

    #[rstest]
    #[case(1, 0)]
    #[case(2, 60)]
    #[case(3, 60)]
    #[case(5, 30)]
    fn test_slots_plus_gaps_cover_the_span(#[case] count: u32, #[case] gap_s: i64) {
        let start = ts("2020-01-01 10:00:00");
        let end = ts("2020-01-01 10:30:00");
        let gap = TimeDelta::seconds(gap_s);

        let slots = split_range(start, end, count, gap).unwrap();

        let slot_time = slots
            .iter()
            .fold(TimeDelta::zero(), |acc, s| acc + s.duration());
        let covered = slot_time + gap * (count as i32 - 1);
        assert_eq!(covered, end - start);
    }

    #[rstest]
    fn test_slots_are_chronological_and_gap_separated() {
        let gap = TimeDelta::seconds(60);
        let slots = split_range(
            ts("2020-01-01 10:00:00"),
            ts("2020-01-01 10:32:00"),
            3,
            gap,
        )
        .unwrap();

        for pair in slots.windows(2) {
            assert_eq!(pair[1].start - pair[0].end, gap);
        }
        assert_eq!(slots.iter().all(|s| s.is_genuine()), true);
    }

    #[rstest]
    fn test_last_slot_ends_at_window_end() {
        let slots = split_range(
            ts("2020-01-01 10:00:00"),
            ts("2020-01-01 10:30:00"),
            3,
            TimeDelta::seconds(60),
        )
        .unwrap();

        assert_eq!(
            format_timestamp(slots.last().unwrap().end),
            "2020-01-01 10:30:00"
        );
    }

    #[rstest]
    fn test_negative_gap_overlaps_slots() {
        let slots = split_range(
            ts("2020-01-01 10:00:00"),
            ts("2020-01-01 11:00:00"),
            2,
            TimeDelta::seconds(-600),
        )
        .unwrap();

        assert_eq!(slots.len(), 2);
        assert!(slots[1].start < slots[0].end);
    }

    #[rstest]
    fn test_backwards_range_is_rejected() {
        let err = split_range(
            ts("2020-01-01 12:00:00"),
            ts("2020-01-01 10:00:00"),
            1,
            TimeDelta::zero(),
        )
        .unwrap_err();

        assert!(matches!(err, ScheduleError::EndNotAfterStart { .. }));
        assert_eq!(
            err.to_string(),
            "end time (2020-01-01 10:00:00) must be after start time (2020-01-01 12:00:00)"
        );
    }

    #[rstest]
    fn test_empty_range_is_rejected() {
        let at = ts("2020-01-01 10:00:00");
        let err = split_range(at, at, 1, TimeDelta::zero()).unwrap_err();

        assert!(matches!(err, ScheduleError::EndNotAfterStart { .. }));
    }

    #[rstest]
    fn test_zero_count_is_rejected() {
        let err = split_range(
            ts("2020-01-01 10:00:00"),
            ts("2020-01-01 11:00:00"),
            0,
            TimeDelta::zero(),
        )
        .unwrap_err();

        assert!(matches!(err, ScheduleError::InvalidSlotCount(0)));
    }

    #[rstest]
    #[case(i32::MAX as u32 + 1)]
    #[case(u32::MAX)]
    fn test_oversized_count_is_rejected(#[case] count: u32) {
        let err = split_range(
            ts("2020-01-01 10:00:00"),
            ts("2020-01-01 11:00:00"),
            count,
            TimeDelta::zero(),
        )
        .unwrap_err();

        assert!(matches!(err, ScheduleError::InvalidSlotCount(c) if c == count));
    }
}
