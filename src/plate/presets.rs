//! Layouts of the ErgoDox left half.

use crate::layout::MatrixLayout;

/// Main 5x6 key well. The last row only holds the three middle keys.
#[must_use]
pub fn ergodox_left_primary() -> MatrixLayout {
    MatrixLayout::from_bits(&[
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[1, 1, 1, 1, 1, 1],
        &[0, 0, 1, 1, 1, 0],
    ])
    .with_column_offsets(vec![0.0, -4.0, 14.0, 5.0, -6.0, -5.0])
}

/// 2x2 thumb cluster.
#[must_use]
pub fn ergodox_left_thumb() -> MatrixLayout {
    MatrixLayout::from_bits(&[&[1, 1], &[1, 1]])
        .with_column_offsets(vec![0.0, -2.0])
        .with_row_offsets(vec![0.0, 6.0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_shape() {
        let layout = ergodox_left_primary();
        assert_eq!(layout.mask.len(), 5);
        assert!(layout.mask.iter().all(|row| row.len() == 6));
        assert_eq!(layout.mask[4], vec![false, false, true, true, true, false]);
    }

    #[test]
    fn thumb_shape() {
        let layout = ergodox_left_thumb();
        assert_eq!(layout.mask, vec![vec![true; 2]; 2]);
        assert_eq!(layout.row_offsets, vec![0.0, 6.0]);
    }
}
