use crate::errors::HgrError;

/// most_common returns the id with the highest occurrence count in the
/// sequence. Ties are broken by first occurrence: ids are grouped in the
/// order they first appear, groups are counted, and among groups tied at
/// the maximum count the earliest-seen id wins.
///
/// # Arguments
/// * `ids` - ordered, non-empty sequence of gesture class ids
///
/// # Returns
/// * `Result<i32, HgrError>`
pub fn most_common(ids: &[i32]) -> Result<i32, HgrError> {
    if ids.is_empty() {
        return Err(HgrError::EmptyHistory);
    }

    // (id, count) pairs in first-seen order; histories are short, a linear
    // scan beats hashing here.
    let mut groups: Vec<(i32, usize)> = Vec::new();
    for &id in ids {
        match groups.iter_mut().find(|(group_id, _)| *group_id == id) {
            Some(group) => group.1 += 1,
            None => groups.push((id, 1)),
        }
    }

    let mut best = 0;
    for index in 1..groups.len() {
        if groups[index].1 > groups[best].1 {
            best = index;
        }
    }

    Ok(groups[best].0)
}

#[cfg(test)]
mod tests {
    use crate::errors::HgrError;
    use crate::utils::voting::most_common;

    #[test]
    fn test_strict_majority() {
        assert_eq!(most_common(&[3, 3, 3, 1, 1]).unwrap(), 3);
    }

    #[test]
    fn test_tie_broken_by_first_occurrence() {
        // 2 and 1 both occur twice; 2 appeared first.
        assert_eq!(most_common(&[2, 1, 2, 1]).unwrap(), 2);
        assert_eq!(most_common(&[1, 2, 1, 2]).unwrap(), 1);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(most_common(&[7]).unwrap(), 7);
    }

    #[test]
    fn test_late_majority_overtakes_early_id() {
        assert_eq!(most_common(&[0, 4, 4, 4]).unwrap(), 4);
    }

    #[test]
    fn test_empty_history_is_an_error() {
        assert_eq!(most_common(&[]).unwrap_err(), HgrError::EmptyHistory);
    }
}
