//! Duration-driven beat selection and time distribution.

use crate::catalog::BeatType;

/// Shortest time any scene is given, in seconds.
pub const MIN_SCENE_SECONDS: f64 = 1.0;

const OPENING_WEIGHT: f64 = 0.8;
const CLOSING_WEIGHT: f64 = 0.7;
const MIDPOINT_WEIGHT: f64 = 1.3;
const DEFAULT_WEIGHT: f64 = 1.0;

/// (max duration inclusive, scene count); anything longer gets 12 scenes.
const SCENE_COUNT_BREAKPOINTS: [(u32, usize); 4] = [(15, 4), (30, 6), (60, 8), (90, 10)];
const MAX_SCENE_COUNT: usize = 12;

// Curated per bracket; not derivable from a rule.
const BEATS_4: [usize; 4] = [0, 2, 3, 9];
const BEATS_6: [usize; 6] = [0, 1, 2, 3, 7, 9];
const BEATS_8: [usize; 8] = [0, 1, 2, 3, 4, 7, 8, 9];
const BEATS_10: [usize; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
const BEATS_12: [usize; 12] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

/// Maps a requested duration to a target scene count.
pub fn scene_count_for_duration(duration_seconds: u32) -> usize {
    SCENE_COUNT_BREAKPOINTS
        .iter()
        .find(|(max, _)| duration_seconds <= *max)
        .map(|(_, count)| *count)
        .unwrap_or(MAX_SCENE_COUNT)
}

/// Beat catalog indices for a scene count, ascending.
///
/// The result is truncated to `count` but never extended past the bracket's
/// own table.
pub fn beat_indices_for_count(count: usize) -> &'static [usize] {
    let table: &'static [usize] = if count <= 4 {
        &BEATS_4
    } else if count <= 6 {
        &BEATS_6
    } else if count <= 8 {
        &BEATS_8
    } else if count <= 10 {
        &BEATS_10
    } else {
        &BEATS_12
    };
    &table[..count.min(table.len())]
}

/// Beat types selected for a requested duration, in catalog order.
pub fn select_beats(duration_seconds: u32) -> Vec<BeatType> {
    beat_indices_for_count(scene_count_for_duration(duration_seconds))
        .iter()
        .filter_map(|&index| BeatType::from_index(index))
        .collect()
}

/// Relative weight for the scene at `position` out of `count`.
///
/// First and last positions take precedence over the midpoint.
fn position_weight(position: usize, count: usize) -> f64 {
    if position == 0 {
        OPENING_WEIGHT
    } else if position == count - 1 {
        CLOSING_WEIGHT
    } else if position == count / 2 {
        MIDPOINT_WEIGHT
    } else {
        DEFAULT_WEIGHT
    }
}

/// Splits `total_seconds` across `count` scenes.
///
/// Each share is rounded to one decimal and floored at [`MIN_SCENE_SECONDS`],
/// so the sum may differ from the total by the accumulated rounding, or more
/// when the floor kicks in.
pub fn distribute_time(count: usize, total_seconds: u32) -> Vec<f64> {
    let weights: Vec<f64> = (0..count).map(|i| position_weight(i, count)).collect();
    let total_weight: f64 = weights.iter().sum();
    let total = f64::from(total_seconds);

    weights
        .iter()
        .map(|w| {
            let share = (w / total_weight) * total;
            round_tenths(share).max(MIN_SCENE_SECONDS)
        })
        .collect()
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_count_breakpoints() {
        assert_eq!(scene_count_for_duration(1), 4);
        assert_eq!(scene_count_for_duration(15), 4);
        assert_eq!(scene_count_for_duration(16), 6);
        assert_eq!(scene_count_for_duration(30), 6);
        assert_eq!(scene_count_for_duration(60), 8);
        assert_eq!(scene_count_for_duration(61), 10);
        assert_eq!(scene_count_for_duration(90), 10);
        assert_eq!(scene_count_for_duration(91), 12);
        assert_eq!(scene_count_for_duration(600), 12);
    }

    #[test]
    fn test_beat_tables() {
        assert_eq!(beat_indices_for_count(4), &[0, 2, 3, 9]);
        assert_eq!(beat_indices_for_count(6), &[0, 1, 2, 3, 7, 9]);
        assert_eq!(beat_indices_for_count(8), &[0, 1, 2, 3, 4, 7, 8, 9]);
        assert_eq!(beat_indices_for_count(10), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(beat_indices_for_count(12).len(), 12);
    }

    #[test]
    fn test_beat_tables_truncate_without_inventing() {
        assert_eq!(beat_indices_for_count(3), &[0, 2, 3]);
        assert_eq!(beat_indices_for_count(5), &[0, 1, 2, 3, 7]);
        assert_eq!(beat_indices_for_count(40).len(), 12);
        assert!(beat_indices_for_count(0).is_empty());
    }

    #[test]
    fn test_select_beats_short_spot() {
        assert_eq!(
            select_beats(15),
            vec![
                BeatType::Opening,
                BeatType::ProductReveal,
                BeatType::FeatureHighlight,
                BeatType::BrandLogo,
            ]
        );
    }

    #[test]
    fn test_distribute_time_weights() {
        // 30s over 6 scenes: weights 0.8, 1, 1, 1.3, 1, 0.7 (sum 5.8)
        let timings = distribute_time(6, 30);
        assert_eq!(timings, vec![4.1, 5.2, 5.2, 6.7, 5.2, 3.6]);
    }

    #[test]
    fn test_distribute_time_floor() {
        let timings = distribute_time(12, 3);
        assert_eq!(timings.len(), 12);
        assert!(timings.iter().all(|&t| t == MIN_SCENE_SECONDS));
    }

    #[test]
    fn test_distribute_time_edge_counts() {
        assert!(distribute_time(0, 30).is_empty());
        assert_eq!(distribute_time(1, 15), vec![15.0]);
        // Two scenes: opening and closing weights only
        assert_eq!(distribute_time(2, 15), vec![8.0, 7.0]);
    }
}
