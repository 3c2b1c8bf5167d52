use crate::types::pitch::PitchClass;
use std::fmt;

/// Largest magnitude a shortest chromatic interval can have (the tritone)
pub const TRITONE: u8 = 6;

/// Direction of movement between two chord roots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    #[cfg_attr(feature = "serde", serde(rename = "+"))]
    Up,
    #[cfg_attr(feature = "serde", serde(rename = "-"))]
    Down,
}

impl Sign {
    pub fn symbol(self) -> char {
        match self {
            Sign::Up => '+',
            Sign::Down => '-',
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Shortest chromatic distance between two roots, tagged with its direction.
///
/// `magnitude` is always in 0..=6. A tritone is always reported as `+6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignedInterval {
    pub sign: Sign,
    pub magnitude: u8,
}

impl SignedInterval {
    pub fn up(magnitude: u8) -> Self {
        SignedInterval {
            sign: Sign::Up,
            magnitude,
        }
    }

    pub fn down(magnitude: u8) -> Self {
        SignedInterval {
            sign: Sign::Down,
            magnitude,
        }
    }

    /// Semitone offset, negative when descending
    pub fn semitones(self) -> i8 {
        match self.sign {
            Sign::Up => self.magnitude as i8,
            Sign::Down => -(self.magnitude as i8),
        }
    }
}

impl fmt::Display for SignedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign, self.magnitude)
    }
}

/// Signed interval from root `a` to the following root `b`
pub fn signed_interval(a: PitchClass, b: PitchClass) -> SignedInterval {
    let (a, b) = (a.value(), b.value());
    let up = (b + 12 - a) % 12;
    let down = (a + 12 - b) % 12;

    if up == TRITONE && down == TRITONE {
        SignedInterval::up(TRITONE)
    } else if up <= down {
        SignedInterval::up(if up > TRITONE { 12 - up } else { up })
    } else {
        SignedInterval::down(if down > TRITONE { 12 - down } else { down })
    }
}

/// Intervals between each adjacent pair of roots; one fewer than the input
pub fn compute_interval_sequence(roots: &[PitchClass]) -> Vec<SignedInterval> {
    roots
        .windows(2)
        .map(|pair| signed_interval(pair[0], pair[1]))
        .collect()
}

/// Count intervals by magnitude (0..=6), ignoring direction
pub fn frequency_by_magnitude(intervals: &[SignedInterval]) -> [usize; 7] {
    let mut counts = [0; 7];
    for interval in intervals {
        if let Some(slot) = counts.get_mut(interval.magnitude as usize) {
            *slot += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pitch::parse_roots;

    fn pc(value: u8) -> PitchClass {
        PitchClass::new(value).unwrap()
    }

    fn all_pitch_classes() -> impl Iterator<Item = PitchClass> {
        (0..12).map(pc)
    }

    #[test]
    fn test_magnitude_is_bounded() {
        for a in all_pitch_classes() {
            for b in all_pitch_classes() {
                assert!(signed_interval(a, b).magnitude <= TRITONE);
            }
        }
    }

    #[test]
    fn test_same_root_is_plus_zero() {
        for a in all_pitch_classes() {
            assert_eq!(signed_interval(a, a), SignedInterval::up(0));
        }
    }

    #[test]
    fn test_tritone_is_always_ascending() {
        assert_eq!(signed_interval(pc(0), pc(6)), SignedInterval::up(6));
        assert_eq!(signed_interval(pc(6), pc(0)), SignedInterval::up(6));
        assert_eq!(signed_interval(pc(11), pc(5)), SignedInterval::up(6));
    }

    #[test]
    fn test_non_tritone_symmetry() {
        for a in all_pitch_classes() {
            for b in all_pitch_classes() {
                let forward = signed_interval(a, b);
                let backward = signed_interval(b, a);
                if forward.magnitude == 0 || forward.magnitude == TRITONE {
                    continue;
                }
                assert_eq!(forward.magnitude, backward.magnitude);
                assert_ne!(forward.sign, backward.sign);
            }
        }
    }

    #[test]
    fn test_ii_v_i_sequence() {
        let roots = parse_roots(["Cmaj7", "Am7", "Dm7", "G7"]);
        assert_eq!(roots, vec![pc(0), pc(9), pc(2), pc(7)]);

        let intervals = compute_interval_sequence(&roots);
        assert_eq!(
            intervals,
            vec![
                SignedInterval::down(3),
                SignedInterval::up(5),
                SignedInterval::up(5)
            ]
        );
        assert_eq!(frequency_by_magnitude(&intervals), [0, 0, 0, 1, 0, 2, 0]);
    }

    #[test]
    fn test_fourth_is_not_a_tritone() {
        let roots = parse_roots(["F#7", "B7"]);
        assert_eq!(
            compute_interval_sequence(&roots),
            vec![SignedInterval::up(5)]
        );

        let roots = parse_roots(["C", "F#"]);
        assert_eq!(
            compute_interval_sequence(&roots),
            vec![SignedInterval::up(6)]
        );
    }

    #[test]
    fn test_short_sequences() {
        assert!(compute_interval_sequence(&[]).is_empty());
        assert!(compute_interval_sequence(&[pc(4)]).is_empty());
        assert_eq!(frequency_by_magnitude(&[]), [0; 7]);
    }

    #[test]
    fn test_display_and_semitones() {
        assert_eq!(SignedInterval::down(3).to_string(), "-3");
        assert_eq!(SignedInterval::up(6).to_string(), "+6");
        assert_eq!(SignedInterval::down(2).semitones(), -2);
        assert_eq!(SignedInterval::up(0).semitones(), 0);
    }
}
