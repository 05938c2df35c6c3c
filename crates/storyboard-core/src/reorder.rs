//! Pure list edits
//!
//! Both functions take a borrowed slice and return a fresh vector. Callers
//! replace their list wholesale with the result.

/// Move the item at `from` so it ends up at `to`.
///
/// This is a move, not a swap: every item between the two positions shifts
/// by one slot toward `from`. Out-of-range indices return an unchanged copy.
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = items.to_vec();
    if from >= out.len() || to >= out.len() || from == to {
        return out;
    }
    let item = out.remove(from);
    out.insert(to, item);
    out
}

/// Drop the item at `index`, keeping the relative order of the rest.
pub fn remove_at<T: Clone>(items: &[T], index: usize) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_forward_shifts_intermediates_back() {
        assert_eq!(array_move(&["a", "b", "c"], 0, 2), vec!["b", "c", "a"]);
    }

    #[test]
    fn move_backward_shifts_intermediates_forward() {
        assert_eq!(array_move(&["a", "b", "c", "d"], 3, 1), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn move_is_not_a_swap() {
        let moved = array_move(&[1, 2, 3, 4, 5], 0, 3);
        assert_eq!(moved, vec![2, 3, 4, 1, 5]);
    }

    #[test]
    fn move_out_of_range_is_identity() {
        assert_eq!(array_move(&[1, 2], 0, 5), vec![1, 2]);
        assert_eq!(array_move(&[1, 2], 7, 0), vec![1, 2]);
        assert_eq!(array_move::<u8>(&[], 0, 0), Vec::<u8>::new());
    }

    #[test]
    fn remove_middle() {
        assert_eq!(remove_at(&["a", "b", "c"], 1), vec!["a", "c"]);
    }

    #[test]
    fn remove_out_of_range_keeps_everything() {
        assert_eq!(remove_at(&["a", "b"], 2), vec!["a", "b"]);
    }
}
