/**
 * Chat Message Data Structures
 *
 * This module defines the guestbook message as it is stored and displayed,
 * the raw submission accepted from clients, and the validation rules that
 * turn one into the other.
 *
 * Every submission goes through `RawSubmission::validate`, whichever entry
 * point it came from, so the JSON API and the form endpoint apply exactly
 * the same trimming and truncation.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Maximum length of `prenom`, in characters
pub const PRENOM_MAX_CHARS: usize = 50;

/// Maximum length of `filiaire`, in characters
pub const FILIAIRE_MAX_CHARS: usize = 120;

/// Maximum length of `commentaire`, in characters
pub const COMMENTAIRE_MAX_CHARS: usize = 2000;

/// A stored guestbook message
///
/// Rows are never updated once written; they are only created by a
/// submission or removed by the retention trim.
///
/// # Fields
/// * `id` - Store-assigned identifier, increasing with every insert
/// * `prenom` - Submitter's first name
/// * `filiaire` - Submitter's field of study
/// * `commentaire` - Comment body
/// * `created_at` - Insertion time (UTC), the ordering key of the feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: i64,
    pub prenom: String,
    pub filiaire: String,
    pub commentaire: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// The three display fields, as pushed to live viewers
    pub fn payload(&self) -> ChatPayload {
        ChatPayload {
            prenom: self.prenom.clone(),
            filiaire: self.filiaire.clone(),
            commentaire: self.commentaire.clone(),
        }
    }
}

/// Display fields of a message, without store metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatPayload {
    pub prenom: String,
    pub filiaire: String,
    pub commentaire: String,
}

/// A submission exactly as received from a client
///
/// Every field is optional so that a missing key, an explicit `null` and an
/// empty string all reach validation the same way.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawSubmission {
    #[serde(default)]
    pub prenom: Option<String>,
    #[serde(default)]
    pub filiaire: Option<String>,
    #[serde(default)]
    pub commentaire: Option<String>,
}

impl RawSubmission {
    /// Build a raw submission from three field values
    pub fn new(
        prenom: impl Into<String>,
        filiaire: impl Into<String>,
        commentaire: impl Into<String>,
    ) -> Self {
        Self {
            prenom: Some(prenom.into()),
            filiaire: Some(filiaire.into()),
            commentaire: Some(commentaire.into()),
        }
    }

    /// Trim, check and truncate the three fields
    ///
    /// # Errors
    ///
    /// `SharedError::MissingFields` listing every field that is absent or
    /// blank once surrounding whitespace is removed.
    pub fn validate(&self) -> Result<Submission, SharedError> {
        let prenom = trimmed(&self.prenom);
        let filiaire = trimmed(&self.filiaire);
        let commentaire = trimmed(&self.commentaire);

        let missing: Vec<String> = [
            ("prenom", prenom),
            ("filiaire", filiaire),
            ("commentaire", commentaire),
        ]
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name.to_string())
        .collect();

        if !missing.is_empty() {
            return Err(SharedError::missing_fields(missing));
        }

        Ok(Submission {
            prenom: truncate_chars(prenom, PRENOM_MAX_CHARS),
            filiaire: truncate_chars(filiaire, FILIAIRE_MAX_CHARS),
            commentaire: truncate_chars(commentaire, COMMENTAIRE_MAX_CHARS),
        })
    }
}

/// A validated submission, ready to be stored
///
/// Only `RawSubmission::validate` builds one, so holding a `Submission`
/// means the fields are non-empty, trimmed and within their limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    prenom: String,
    filiaire: String,
    commentaire: String,
}

impl Submission {
    pub fn prenom(&self) -> &str {
        &self.prenom
    }

    pub fn filiaire(&self) -> &str {
        &self.filiaire
    }

    pub fn commentaire(&self) -> &str {
        &self.commentaire
    }
}

fn trimmed(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or_default()
}

/// Keep at most `max_chars` characters of `value`
///
/// Counts Unicode scalar values, so a multi-byte character is never cut in half.
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((byte_index, _)) => value[..byte_index].to_string(),
        None => value.to_string(),
    }
}
