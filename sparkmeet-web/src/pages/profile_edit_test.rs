//! Tests for the profile edit form's interest slots.

#[cfg(test)]
mod tests {
    use crate::pages::profile_edit::apply_interest_pick;

    fn picks(ids: &[&str]) -> Vec<String> {
        ids.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn pick_fills_the_chosen_slot() {
        let mut interests = picks(&["i1"]);
        apply_interest_pick(&mut interests, 1, "i2".to_string());
        assert_eq!(interests, picks(&["i1", "i2"]));
    }

    /// An interest already held by another slot is ignored, so the update
    /// payload never carries the same id twice.
    #[test]
    fn duplicate_pick_is_ignored() {
        let mut interests = picks(&["i1", "i2"]);
        apply_interest_pick(&mut interests, 2, "i1".to_string());
        assert_eq!(interests, picks(&["i1", "i2"]));
    }

    #[test]
    fn empty_pick_clears_the_slot() {
        let mut interests = picks(&["i1", "i2"]);
        apply_interest_pick(&mut interests, 0, String::new());
        assert_eq!(interests, picks(&["i2"]));
    }

    #[test]
    fn out_of_range_slot_changes_nothing() {
        let mut interests = picks(&["i1"]);
        apply_interest_pick(&mut interests, 9, "i2".to_string());
        assert_eq!(interests, picks(&["i1"]));
    }
}
