//! Lunar phase from wall-clock time.
//!
//! The position within the synodic month is measured from a fixed new moon
//! and split into eight named ranges. New Moon straddles the 0/1 boundary.

use chrono::{DateTime, Utc};

/// Mean length of the lunar cycle between successive new moons, in days
pub const SYNODIC_MONTH_DAYS: f64 = 29.530588853;

/// 2024-01-11T00:00:00Z, a new moon, in Unix milliseconds
const REFERENCE_NEW_MOON_MS: i64 = 1_704_931_200_000;

const MS_PER_DAY: f64 = 86_400_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
    /// No range matched
    Unknown,
}

impl MoonPhase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
            Self::Unknown => "Unknown",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::NewMoon => "🌑",
            Self::WaxingCrescent => "🌒",
            Self::FirstQuarter => "🌓",
            Self::WaxingGibbous => "🌔",
            Self::FullMoon => "🌕",
            Self::WaningGibbous => "🌖",
            Self::LastQuarter => "🌗",
            Self::WaningCrescent => "🌘",
            Self::Unknown => "🌙",
        }
    }
}

/// `[start, end)` over the normalized cycle position. `start > end` wraps.
const PHASE_RANGES: [(MoonPhase, f64, f64); 8] = [
    (MoonPhase::NewMoon, 0.97, 0.03),
    (MoonPhase::WaxingCrescent, 0.03, 0.22),
    (MoonPhase::FirstQuarter, 0.22, 0.28),
    (MoonPhase::WaxingGibbous, 0.28, 0.47),
    (MoonPhase::FullMoon, 0.47, 0.53),
    (MoonPhase::WaningGibbous, 0.53, 0.72),
    (MoonPhase::LastQuarter, 0.72, 0.78),
    (MoonPhase::WaningCrescent, 0.78, 0.97),
];

fn in_range(start: f64, end: f64, value: f64) -> bool {
    if start > end {
        value >= start || value < end
    } else {
        value >= start && value < end
    }
}

/// Named phase for a normalized position in the cycle.
pub fn phase_for_position(position: f64) -> MoonPhase {
    PHASE_RANGES
        .iter()
        .find(|(_, start, end)| in_range(*start, *end, position))
        .map(|(phase, _, _)| *phase)
        .unwrap_or(MoonPhase::Unknown)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPhaseInfo {
    pub phase: MoonPhase,
    /// Position in the cycle as a whole percentage, 0..=99
    pub percentage: u8,
    /// Days since the last new moon, one decimal place
    pub days_in_cycle: f64,
}

impl MoonPhaseInfo {
    pub fn unknown() -> Self {
        Self {
            phase: MoonPhase::Unknown,
            percentage: 0,
            days_in_cycle: 0.0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.phase.name()
    }

    pub fn emoji(&self) -> &'static str {
        self.phase.emoji()
    }
}

/// Moon phase at the given instant.
pub fn moon_phase_at(at: DateTime<Utc>) -> MoonPhaseInfo {
    let days_since_reference =
        (at.timestamp_millis() - REFERENCE_NEW_MOON_MS) as f64 / MS_PER_DAY;
    let cycle_day = days_since_reference.rem_euclid(SYNODIC_MONTH_DAYS);

    let mut position = cycle_day / SYNODIC_MONTH_DAYS;
    // rem_euclid can round a tiny negative remainder up to the full period
    if position >= 1.0 {
        position = 0.0;
    }

    let phase = phase_for_position(position);
    if phase == MoonPhase::Unknown {
        return MoonPhaseInfo::unknown();
    }

    MoonPhaseInfo {
        phase,
        percentage: cycle_percentage(position),
        days_in_cycle: (position * SYNODIC_MONTH_DAYS * 10.0).round() / 10.0,
    }
}

/// Moon phase right now.
pub fn current_moon_phase() -> MoonPhaseInfo {
    moon_phase_at(Utc::now())
}

/// Whole percentage through the cycle; a position that rounds up to 100 has
/// wrapped back to the new moon.
fn cycle_percentage(position: f64) -> u8 {
    let percentage = (position * 100.0).round() as u8;
    if percentage >= 100 {
        0
    } else {
        percentage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 11, 0, 0, 0).unwrap()
    }

    fn cycle() -> Duration {
        Duration::milliseconds((SYNODIC_MONTH_DAYS * MS_PER_DAY).round() as i64)
    }

    #[test]
    fn test_reference_constant_matches_date() {
        assert_eq!(reference().timestamp_millis(), REFERENCE_NEW_MOON_MS);
    }

    #[test]
    fn test_reference_instant_is_new_moon() {
        let info = moon_phase_at(reference());
        assert_eq!(info.phase, MoonPhase::NewMoon);
        assert_eq!(info.percentage, 0);
        assert_eq!(info.days_in_cycle, 0.0);
        assert_eq!(info.emoji(), "🌑");
    }

    #[test]
    fn test_half_cycle_is_full_moon() {
        let half = Duration::milliseconds((SYNODIC_MONTH_DAYS * MS_PER_DAY / 2.0) as i64);
        let info = moon_phase_at(reference() + half);
        assert_eq!(info.phase, MoonPhase::FullMoon);
        assert_eq!(info.percentage, 50);
        assert_eq!(info.days_in_cycle, 14.8);
    }

    #[test]
    fn test_instant_before_reference_wraps_forward() {
        // One day before the reference is late in the previous cycle
        let info = moon_phase_at(reference() - Duration::days(1));
        assert_eq!(info.phase, MoonPhase::WaningCrescent);
        assert_eq!(info.days_in_cycle, 28.5);
        assert_eq!(info.percentage, 97);
    }

    #[test]
    fn test_new_moon_wraps_around_zero() {
        assert_eq!(phase_for_position(0.0), MoonPhase::NewMoon);
        assert_eq!(phase_for_position(0.01), MoonPhase::NewMoon);
        assert_eq!(phase_for_position(0.0299), MoonPhase::NewMoon);
        assert_eq!(phase_for_position(0.97), MoonPhase::NewMoon);
        assert_eq!(phase_for_position(0.999), MoonPhase::NewMoon);
    }

    #[test]
    fn test_literal_thresholds_are_kept() {
        assert_eq!(phase_for_position(0.96999), MoonPhase::WaningCrescent);
        assert_eq!(phase_for_position(0.03), MoonPhase::WaxingCrescent);
    }

    #[test]
    fn test_range_starts_are_inclusive() {
        let expected = [
            (0.22, MoonPhase::FirstQuarter),
            (0.28, MoonPhase::WaxingGibbous),
            (0.47, MoonPhase::FullMoon),
            (0.53, MoonPhase::WaningGibbous),
            (0.72, MoonPhase::LastQuarter),
            (0.78, MoonPhase::WaningCrescent),
        ];
        for (position, phase) in expected {
            assert_eq!(phase_for_position(position), phase, "position {}", position);
        }
    }

    #[test]
    fn test_out_of_domain_position_is_unknown() {
        assert_eq!(phase_for_position(f64::NAN), MoonPhase::Unknown);
    }

    #[test]
    fn test_percentage_never_reaches_hundred() {
        assert_eq!(cycle_percentage(0.996), 0);
        assert_eq!(cycle_percentage(0.994), 99);
    }

    #[test]
    fn test_results_stay_in_bounds_across_many_instants() {
        let start = reference() - Duration::days(400);
        for step in 0..2000 {
            let at = start + Duration::minutes(step * 431);
            let info = moon_phase_at(at);
            assert_ne!(info.phase, MoonPhase::Unknown, "at {}", at);
            assert!(info.percentage < 100, "at {}", at);
            assert!(info.days_in_cycle >= 0.0 && info.days_in_cycle < SYNODIC_MONTH_DAYS);
        }
    }

    #[test]
    fn test_phase_is_periodic() {
        for offset_hours in [5, 90, 200, 333, 500, 650] {
            let at = reference() + Duration::hours(offset_hours);
            let now = moon_phase_at(at);
            let later = moon_phase_at(at + cycle());
            let much_later = moon_phase_at(at + cycle() * 12);
            assert_eq!(now.phase, later.phase);
            assert_eq!(now.phase, much_later.phase);
            assert!((now.days_in_cycle - later.days_in_cycle).abs() <= 0.1);
        }
    }

    #[test]
    fn test_same_instant_is_reproducible() {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap();
        assert_eq!(moon_phase_at(at), moon_phase_at(at));
    }
}
