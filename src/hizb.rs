//! Structural-unit numbering: 60 hizbs of 4 quarters each.
//!
//! The 240 quarter-units partition the text independently of chapter
//! boundaries and are used for reading plans and structured navigation.
//! Only the numbering lives here; the verse ranges belong to the dataset.

use serde::Serialize;

/// Number of hizbs.
pub const HIZB_COUNT: u8 = 60;

/// Quarters per hizb.
pub const QUARTERS_PER_HIZB: u8 = 4;

/// Total quarter-units across the whole text.
pub const HIZB_QUARTER_COUNT: u16 = HIZB_COUNT as u16 * QUARTERS_PER_HIZB as u16;

/// One quarter-unit, addressed as (hizb 1..=60, quarter 1..=4).
///
/// Ordering is lexicographic on (hizb, quarter), which matches reading
/// order: the quarter cycles 1→4 before the hizb increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct HizbQuarter {
    hizb: u8,
    quarter: u8,
}

impl HizbQuarter {
    /// Parse a (hizb, quarter) pair. (1, 1) is the first unit and (60, 4)
    /// the last; anything outside those ranges is rejected.
    pub fn from_numbers(hizb: u8, quarter: u8) -> Option<Self> {
        if hizb == 0 || hizb > HIZB_COUNT || quarter == 0 || quarter > QUARTERS_PER_HIZB {
            return None;
        }
        Some(Self { hizb, quarter })
    }

    /// All 240 quarter-units in reading order.
    pub fn all() -> impl Iterator<Item = HizbQuarter> {
        (1..=HIZB_COUNT).flat_map(|hizb| {
            (1..=QUARTERS_PER_HIZB).map(move |quarter| HizbQuarter { hizb, quarter })
        })
    }

    pub fn hizb(self) -> u8 {
        self.hizb
    }

    pub fn quarter(self) -> u8 {
        self.quarter
    }

    /// Overall position in reading order, 1..=240.
    pub fn index(self) -> u16 {
        (u16::from(self.hizb) - 1) * u16::from(QUARTERS_PER_HIZB) + u16::from(self.quarter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last_units() {
        let first = HizbQuarter::from_numbers(1, 1).unwrap();
        assert_eq!(first.index(), 1);

        let last = HizbQuarter::from_numbers(60, 4).unwrap();
        assert_eq!(last.index(), HIZB_QUARTER_COUNT);
    }

    #[test]
    fn invalid_pairs_are_rejected() {
        assert!(HizbQuarter::from_numbers(0, 1).is_none());
        assert!(HizbQuarter::from_numbers(61, 1).is_none());
        assert!(HizbQuarter::from_numbers(1, 0).is_none());
        assert!(HizbQuarter::from_numbers(1, 5).is_none());
    }

    #[test]
    fn all_enumerates_in_strictly_increasing_reading_order() {
        let units: Vec<HizbQuarter> = HizbQuarter::all().collect();
        assert_eq!(units.len(), usize::from(HIZB_QUARTER_COUNT));

        for window in units.windows(2) {
            assert!(window[0] < window[1]);
            // Quarter cycles 1..=4 before the hizb increments.
            if window[0].quarter() < QUARTERS_PER_HIZB {
                assert_eq!(window[1].hizb(), window[0].hizb());
                assert_eq!(window[1].quarter(), window[0].quarter() + 1);
            } else {
                assert_eq!(window[1].hizb(), window[0].hizb() + 1);
                assert_eq!(window[1].quarter(), 1);
            }
        }

        for (i, unit) in units.iter().enumerate() {
            assert_eq!(usize::from(unit.index()), i + 1);
        }
    }
}
