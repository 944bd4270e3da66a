use crate::core::distance_metric::SequenceMetric;

/// Cumulative cost table for unconstrained Dynamic Time Warping.
///
/// The table is `(a.len() + 1) x (b.len() + 1)`. Row 0 and column 0 are the
/// boundary: every cell is `+inf` except `[0][0] = 0`. Cell `[i][j]` for
/// `i, j >= 1` aligns `a[i - 1]` with `b[j - 1]`:
///
/// `D[i][j] = (a[i-1] - b[j-1])^2 + min(D[i-1][j-1], D[i-1][j], D[i][j-1])`
pub fn dtw_table(a: &[f64], b: &[f64]) -> Vec<Vec<f64>> {
    let (n, m) = (a.len(), b.len());
    let mut table = vec![vec![f64::INFINITY; m + 1]; n + 1];
    table[0][0] = 0.0;

    for i in 1..=n {
        for j in 1..=m {
            let cost = (a[i - 1] - b[j - 1]) * (a[i - 1] - b[j - 1]);
            let best = table[i - 1][j - 1]
                .min(table[i - 1][j])
                .min(table[i][j - 1]);
            table[i][j] = cost + best;
        }
    }
    table
}

/// DTW distance: square root of the cumulative cost at the last cell.
///
/// No warping window and no length normalization. Two empty sequences are at
/// distance 0; an empty sequence is infinitely far from a non-empty one.
pub fn dtw_distance(a: &[f64], b: &[f64]) -> f64 {
    // Two rolling rows are enough for the final value.
    let m = b.len();
    let mut prev = vec![f64::INFINITY; m + 1];
    let mut curr = vec![f64::INFINITY; m + 1];
    prev[0] = 0.0;

    for &x in a {
        curr[0] = f64::INFINITY;
        for j in 1..=m {
            let cost = (x - b[j - 1]) * (x - b[j - 1]);
            curr[j] = cost + prev[j - 1].min(prev[j]).min(curr[j - 1]);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[m].sqrt()
}

/// Dynamic Time Warping distance metric.
#[derive(Debug, Clone)]
pub struct Dtw;

impl SequenceMetric for Dtw {
    fn name() -> &'static str {
        "dtw"
    }

    #[inline]
    fn distance(a: &[f64], b: &[f64]) -> f64 {
        dtw_distance(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_identical_sequences() {
        let a = vec![97.0, 99.0, 98.0, 98.0];
        assert_eq!(Dtw::distance(&a, &a), 0.0);
    }

    #[test]
    fn test_warping_absorbs_repeats() {
        // [1, 2, 3] aligns with [1, 2, 2, 2, 3] at zero cost
        let d = dtw_distance(&[1.0, 2.0, 3.0], &[1.0, 2.0, 2.0, 2.0, 3.0]);
        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_hand_computed() {
        // a = [0, 2], b = [1]
        // D[1][1] = 1 + 0 = 1
        // D[2][1] = 1 + min(inf, D[1][1], inf) = 2
        let d = dtw_distance(&[0.0, 2.0], &[1.0]);
        assert!((d - 2.0_f64.sqrt()).abs() < 1e-12, "Expected sqrt(2), got {d}");
    }

    #[test]
    fn test_table_boundary() {
        let t = dtw_table(&[1.0, 2.0], &[1.0, 2.0, 3.0]);
        assert_eq!(t.len(), 3);
        assert_eq!(t[0].len(), 4);
        assert_eq!(t[0][0], 0.0);
        assert!(t[0][1..].iter().all(|v| v.is_infinite()));
        assert!(t[1..].iter().all(|row| row[0].is_infinite()));
        // Rolling-row distance agrees with the full table
        let d = dtw_distance(&[1.0, 2.0], &[1.0, 2.0, 3.0]);
        assert_eq!(d, t[2][3].sqrt());
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(dtw_distance(&[], &[]), 0.0);
        assert!(dtw_distance(&[], &[1.0]).is_infinite());
        assert!(dtw_distance(&[1.0], &[]).is_infinite());
    }

    #[test]
    fn test_extending_both_preserves_prior_cells() {
        let a = vec![97.0, 100.0, 98.0];
        let b = vec![99.0, 97.0];
        let base = dtw_table(&a, &b);

        let mut a_ext = a.clone();
        let mut b_ext = b.clone();
        a_ext.push(101.0);
        b_ext.push(101.0);
        let ext = dtw_table(&a_ext, &b_ext);

        for i in 0..=a.len() {
            for j in 0..=b.len() {
                assert!(
                    ext[i][j] >= base[i][j],
                    "Cell ({i},{j}) decreased: {} -> {}",
                    base[i][j],
                    ext[i][j]
                );
            }
        }
        // The equal trailing element aligns at zero extra cost
        let last = ext[a_ext.len()][b_ext.len()];
        assert!(last <= base[a.len()][b.len()]);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = [97.0, 101.0, 99.0];
        let b = [98.0, 98.0, 100.0, 97.0];
        assert_eq!(dtw_distance(&a, &b), dtw_distance(&b, &a));
    }
}
