//! Index-Bereich wiederholter Schnittlinien.

/// Ganzzahlige Vielfache von `step`, die `[min, max]` abdecken.
///
/// Enthält immer den Index 0 (die Basislinie selbst). Für nicht-positive oder
/// nicht-endliche Schrittweiten ist keine Unterteilung möglich: `[0]`.
pub fn index_range(min: f64, max: f64, step: f64) -> Vec<i64> {
    match bounds(min, max, step) {
        Some((lo, hi)) => (lo..=hi).collect(),
        None => vec![0],
    }
}

/// Anzahl der Indizes, die `index_range` liefern würde, ohne sie anzulegen.
pub fn index_count(min: f64, max: f64, step: f64) -> u64 {
    bounds(min, max, step).map_or(1, |(lo, hi)| hi.abs_diff(lo).saturating_add(1))
}

fn bounds(min: f64, max: f64, step: f64) -> Option<(i64, i64)> {
    if step <= 0.0 || !step.is_finite() || !min.is_finite() || !max.is_finite() {
        return None;
    }
    let lo = ((min / step).floor() as i64).min(0);
    let hi = ((max / step).ceil() as i64).max(0);
    Some((lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_step_yields_base_only() {
        assert_eq!(index_range(-5.0, 5.0, 0.0), vec![0]);
        assert_eq!(index_range(-5.0, 5.0, -1.0), vec![0]);
        assert_eq!(index_range(-5.0, 5.0, f64::NAN), vec![0]);
    }

    #[test]
    fn count_saturates_for_huge_extents() {
        assert_eq!(index_count(-1e20, 1e20, 1.0), u64::MAX);
    }

    #[test]
    fn positive_extent_starts_at_zero() {
        assert_eq!(index_range(0.0, 10.0, 2.0), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn extent_on_both_sides() {
        assert_eq!(index_range(-3.0, 4.5, 2.0), vec![-2, -1, 0, 1, 2, 3]);
    }

    #[test]
    fn extent_away_from_base_still_includes_zero() {
        assert_eq!(index_range(4.0, 9.0, 5.0), vec![0, 1, 2]);
        assert_eq!(index_range(-9.0, -4.0, 5.0), vec![-2, -1, 0]);
    }

    #[test]
    fn range_covers_and_includes_base() {
        let mins = [-17.3, -5.0, -0.1, 0.0, 2.5];
        let extents = [0.0, 0.3, 4.0, 11.9, 40.0];
        let steps = [0.25, 1.0, 3.3, 7.0, 100.0];
        for &min in &mins {
            for &extent in &extents {
                let max = min + extent;
                for &step in &steps {
                    let indices = index_range(min, max, step);
                    let lo = *indices.first().expect("nicht leer");
                    let hi = *indices.last().expect("nicht leer");
                    assert!(indices.contains(&0));
                    assert!(indices.windows(2).all(|w| w[1] == w[0] + 1));
                    assert!(lo as f64 * step <= min + 1e-9);
                    assert!(hi as f64 * step >= max - 1e-9);
                    assert_eq!(index_count(min, max, step), indices.len() as u64);
                }
            }
        }
    }
}
