//! Run-length encoding of grid lines into nonogram clues.

/// A maximal run of equal-colored cells along one row or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub color: u8,
    pub len: usize,
}

impl Run {
    pub const fn new(color: u8, len: usize) -> Self {
        Self { color, len }
    }
}

/// Encode a line of binary cells into color runs.
///
/// The scan starts from an implicit `(0, 0)` state, so a line opening with a
/// dark cell produces a leading zero-length off-run, and the final run is
/// always pushed. An empty line encodes as `[(0, 0)]`.
///
/// ```
/// use nonogram_core::rle::{encode_run, Run};
///
/// assert_eq!(
///     encode_run(&[0, 0, 1, 1, 1, 0]),
///     vec![Run::new(0, 2), Run::new(1, 3), Run::new(0, 1)]
/// );
/// assert_eq!(encode_run(&[]), vec![Run::new(0, 0)]);
/// ```
pub fn encode_run(cells: &[u8]) -> Vec<Run> {
    let mut encoding = Vec::new();
    let mut current_color = 0u8;
    let mut current_len = 0usize;

    for &cell in cells {
        if cell != current_color {
            encoding.push(Run::new(current_color, current_len));
            current_color = cell;
            current_len = 0;
        }
        current_len += 1;
    }

    encoding.push(Run::new(current_color, current_len));
    encoding
}

/// Reduce an encoding to the nonogram clue for its line: the lengths of the
/// dark runs, in order. Zero-length entries can only appear at the head
/// (the encoder's implicit starting run); they are stripped rather than
/// emitted as a bogus clue. An all-light line clues as the empty sequence.
pub fn clue_sequence(runs: &[Run]) -> Vec<usize> {
    let mut clues: Vec<usize> = runs
        .iter()
        .filter(|run| run.color == 1)
        .map(|run| run.len)
        .collect();

    while clues.first() == Some(&0) {
        clues.remove(0);
    }

    clues
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expand an encoding back into cells.
    fn decode(runs: &[Run]) -> Vec<u8> {
        runs.iter()
            .flat_map(|run| std::iter::repeat(run.color).take(run.len))
            .collect()
    }

    #[test]
    fn encodes_the_reference_line() {
        assert_eq!(
            encode_run(&[0, 0, 1, 1, 1, 0]),
            vec![Run::new(0, 2), Run::new(1, 3), Run::new(0, 1)]
        );
    }

    #[test]
    fn empty_line_yields_single_empty_run() {
        assert_eq!(encode_run(&[]), vec![Run::new(0, 0)]);
    }

    #[test]
    fn line_opening_dark_gets_leading_empty_off_run() {
        assert_eq!(
            encode_run(&[1, 1, 0]),
            vec![Run::new(0, 0), Run::new(1, 2), Run::new(0, 1)]
        );
    }

    #[test]
    fn round_trips_through_decode() {
        for cells in [
            vec![],
            vec![0],
            vec![1],
            vec![0, 0, 1, 1, 1, 0],
            vec![1, 0, 1, 0, 1],
            vec![0, 0, 0, 0],
            vec![1, 1, 1, 1],
        ] {
            assert_eq!(decode(&encode_run(&cells)), cells, "cells {cells:?}");
        }
    }

    #[test]
    fn clue_keeps_dark_lengths_in_order() {
        let runs = encode_run(&[1, 0, 1, 1, 0, 1, 1, 1]);
        assert_eq!(clue_sequence(&runs), vec![1, 2, 3]);
    }

    #[test]
    fn reference_clue() {
        assert_eq!(
            clue_sequence(&[Run::new(0, 2), Run::new(1, 3), Run::new(0, 1)]),
            vec![3]
        );
    }

    #[test]
    fn all_light_line_clues_empty() {
        assert_eq!(clue_sequence(&[Run::new(0, 5)]), Vec::<usize>::new());
    }

    #[test]
    fn leading_zero_length_entries_are_stripped() {
        assert_eq!(
            clue_sequence(&[Run::new(1, 0), Run::new(0, 3), Run::new(1, 2)]),
            vec![2]
        );
        assert_eq!(
            clue_sequence(&[Run::new(1, 0), Run::new(1, 0)]),
            Vec::<usize>::new()
        );
    }
}
