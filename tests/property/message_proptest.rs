//! Property-based tests for submission validation
//!
//! Uses proptest to generate random inputs and verify properties

use proptest::prelude::*;
use souvenir::shared::message::{
    truncate_chars, RawSubmission, COMMENTAIRE_MAX_CHARS, FILIAIRE_MAX_CHARS, PRENOM_MAX_CHARS,
};
use souvenir::shared::SharedError;

proptest! {
    #[test]
    fn test_valid_fields_respect_limits(
        prenom in "\\PC{1,80}",
        filiaire in "\\PC{1,200}",
        commentaire in "\\PC{1,2500}",
    ) {
        let raw = RawSubmission::new(prenom.clone(), filiaire.clone(), commentaire.clone());
        match raw.validate() {
            Ok(submission) => {
                prop_assert!(submission.prenom().chars().count() <= PRENOM_MAX_CHARS);
                prop_assert!(submission.filiaire().chars().count() <= FILIAIRE_MAX_CHARS);
                prop_assert!(submission.commentaire().chars().count() <= COMMENTAIRE_MAX_CHARS);
                prop_assert!(prenom.trim().starts_with(submission.prenom()));
                prop_assert!(commentaire.trim().starts_with(submission.commentaire()));
            }
            Err(SharedError::MissingFields { .. }) => {
                prop_assert!(
                    prenom.trim().is_empty()
                        || filiaire.trim().is_empty()
                        || commentaire.trim().is_empty()
                );
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_blank_field_is_always_rejected(
        blank in "[ \\t\\n\\r]{0,10}",
        other in "[a-z]{1,10}",
        position in 0usize..3,
    ) {
        let raw = match position {
            0 => RawSubmission::new(blank, other.clone(), other),
            1 => RawSubmission::new(other.clone(), blank, other),
            _ => RawSubmission::new(other.clone(), other, blank),
        };
        let rejected = matches!(raw.validate(), Err(SharedError::MissingFields { .. }));
        prop_assert!(rejected);
    }

    #[test]
    fn test_truncate_chars_is_prefix(value in "\\PC*", max in 0usize..100) {
        let truncated = truncate_chars(&value, max);
        prop_assert!(value.starts_with(&truncated));
        prop_assert_eq!(truncated.chars().count(), value.chars().count().min(max));
    }
}
