//! Grid layout partitioning.
//!
//! The product grid renders complete rows in a uniform grid and the trailing
//! incomplete row centred on its own, so the last row never looks ragged.

use crate::error::ExplorerError;

/// Viewport breakpoints as `(min_width, columns)`, widest first.
const BREAKPOINTS: [(u32, usize); 3] = [(1280, 4), (1024, 3), (640, 2)];

/// Number of grid columns for a viewport width in CSS pixels.
pub fn column_count_for_width(width: u32) -> usize {
    BREAKPOINTS
        .iter()
        .find(|(min_width, _)| width >= *min_width)
        .map(|(_, columns)| *columns)
        .unwrap_or(1)
}

/// A list split into complete rows and a trailing partial row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowPartition<'a, T> {
    pub columns: usize,
    pub full_rows: &'a [T],
    pub remainder: &'a [T],
}

impl<'a, T> RowPartition<'a, T> {
    /// Iterate the complete rows, `columns` items each.
    pub fn rows(&self) -> std::slice::Chunks<'a, T> {
        self.full_rows.chunks(self.columns)
    }

    pub fn has_remainder(&self) -> bool {
        !self.remainder.is_empty()
    }
}

/// Split `items` into `floor(len / columns) * columns` leading items and the rest.
pub fn partition<T>(items: &[T], columns: usize) -> Result<RowPartition<'_, T>, ExplorerError> {
    if columns == 0 {
        return Err(ExplorerError::InvalidColumnCount(columns));
    }

    let full = items.len() / columns * columns;
    let (full_rows, remainder) = items.split_at(full);

    Ok(RowPartition {
        columns,
        full_rows,
        remainder,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints() {
        assert_eq!(column_count_for_width(1920), 4);
        assert_eq!(column_count_for_width(1280), 4);
        assert_eq!(column_count_for_width(1279), 3);
        assert_eq!(column_count_for_width(1024), 3);
        assert_eq!(column_count_for_width(800), 2);
        assert_eq!(column_count_for_width(640), 2);
        assert_eq!(column_count_for_width(639), 1);
        assert_eq!(column_count_for_width(0), 1);
    }

    #[test]
    fn test_partition_with_remainder() {
        let items: Vec<u32> = (0..10).collect();
        let split = partition(&items, 4).unwrap();
        assert_eq!(split.full_rows.len(), 8);
        assert_eq!(split.remainder, &[8, 9]);
        assert_eq!(split.rows().count(), 2);
        assert!(split.has_remainder());
    }

    #[test]
    fn test_partition_exact_fit() {
        let items: Vec<u32> = (0..9).collect();
        let split = partition(&items, 3).unwrap();
        assert_eq!(split.full_rows.len(), 9);
        assert!(split.remainder.is_empty());
    }

    #[test]
    fn test_partition_fewer_than_one_row() {
        let items = [1, 2];
        let split = partition(&items, 4).unwrap();
        assert!(split.full_rows.is_empty());
        assert_eq!(split.remainder, &[1, 2]);
    }

    #[test]
    fn test_partition_single_column() {
        let items = [1, 2, 3];
        let split = partition(&items, 1).unwrap();
        assert_eq!(split.full_rows, &[1, 2, 3]);
        assert!(split.remainder.is_empty());
    }

    #[test]
    fn test_partition_zero_columns_rejected() {
        let items = [1];
        assert_eq!(
            partition(&items, 0).unwrap_err(),
            ExplorerError::InvalidColumnCount(0)
        );
    }
}
