//! Translation of database constraint violations into client-facing outcomes.
//!
//! PostgreSQL reports integrity failures with SQLSTATE codes in class `23`.
//! [`translate`] decides, per constraint class and per request verb, whether a
//! failure is the client's fault (bad request / conflict) or the server's, and
//! which part of the database report is shown to the caller.

use std::fmt;

/// SQLSTATE for `not_null_violation`.
pub const NOT_NULL_VIOLATION: &str = "23502";
/// SQLSTATE for `foreign_key_violation`.
pub const FOREIGN_KEY_VIOLATION: &str = "23503";
/// SQLSTATE for `unique_violation`.
pub const UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE for `check_violation`.
pub const CHECK_VIOLATION: &str = "23514";

/// The integrity constraint classes the translator distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    NotNull,
    ForeignKey,
    Unique,
    Check,
}

impl ConstraintKind {
    /// Classify a SQLSTATE code. Returns `None` for anything that is not one
    /// of the four handled integrity violations.
    pub fn from_sqlstate(code: &str) -> Option<Self> {
        match code {
            NOT_NULL_VIOLATION => Some(Self::NotNull),
            FOREIGN_KEY_VIOLATION => Some(Self::ForeignKey),
            UNIQUE_VIOLATION => Some(Self::Unique),
            CHECK_VIOLATION => Some(Self::Check),
            _ => None,
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotNull => "not null constraint violation",
            Self::ForeignKey => "foreign key violation",
            Self::Unique => "unique constraint violation",
            Self::Check => "check constraint violation",
        };
        f.write_str(name)
    }
}

/// What the failed request was trying to do, derived from its HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Create,
    Update,
    Delete,
    Read,
}

/// A structured database error report, borrowed from the driver's error.
#[derive(Debug, Clone, Copy, Default)]
pub struct DbFailure<'a> {
    pub code: Option<&'a str>,
    pub message: &'a str,
    pub detail: Option<&'a str>,
    pub hint: Option<&'a str>,
}

/// Outcome class of a translated failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    BadRequest,
    Conflict,
    Internal,
}

/// A translated failure: outcome class, the constraint class if any, and the
/// message body returned to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub outcome: Outcome,
    pub kind: Option<ConstraintKind>,
    pub message: String,
}

impl Translation {
    fn new(outcome: Outcome, kind: Option<ConstraintKind>, message: String) -> Self {
        Self {
            outcome,
            kind,
            message,
        }
    }
}

/// Translate a database failure raised while serving a request of `verb`.
pub fn translate(failure: &DbFailure<'_>, verb: Verb) -> Translation {
    let detail = failure.detail.unwrap_or_default();
    let kind = failure.code.and_then(ConstraintKind::from_sqlstate);

    match kind {
        Some(ConstraintKind::NotNull) => Translation::new(
            Outcome::BadRequest,
            kind,
            format!("Some required data was left out:\n\n{}", failure.message),
        ),
        Some(ConstraintKind::ForeignKey) => {
            let lead = match verb {
                Verb::Create => {
                    "This resource can't be created because a referenced id does not exist"
                }
                Verb::Update => {
                    "This resource can't be modified because a referenced id does not exist"
                }
                Verb::Delete => {
                    "This resource can't be deleted because another record refers to it"
                }
                Verb::Read => {
                    return Translation::new(
                        Outcome::Internal,
                        kind,
                        format!("{} (SQLSTATE {FOREIGN_KEY_VIOLATION})", failure.message),
                    );
                }
            };
            Translation::new(Outcome::Conflict, kind, format!("{lead}:\n\n{detail}"))
        }
        Some(ConstraintKind::Unique) => Translation::new(
            Outcome::Conflict,
            kind,
            format!(
                "This record contains duplicated data that conflicts with what is already in the database:\n\n{detail}"
            ),
        ),
        Some(ConstraintKind::Check) => Translation::new(
            Outcome::Conflict,
            kind,
            format!(
                "This record contains inconsistent or out-of-range data:\n\n{}",
                failure.message
            ),
        ),
        // TODO: stop forwarding raw driver text once clients no longer rely on it.
        None => {
            let mut message = failure.message.to_string();
            for extra in [failure.detail, failure.hint].into_iter().flatten() {
                if !extra.is_empty() {
                    message.push_str("\n\n");
                    message.push_str(extra);
                }
            }
            Translation::new(Outcome::Internal, None, message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn failure<'a>(code: &'a str, message: &'a str, detail: Option<&'a str>) -> DbFailure<'a> {
        DbFailure {
            code: Some(code),
            message,
            detail,
            hint: None,
        }
    }

    #[test]
    fn classifies_known_codes() {
        assert_eq!(
            ConstraintKind::from_sqlstate("23502"),
            Some(ConstraintKind::NotNull)
        );
        assert_eq!(
            ConstraintKind::from_sqlstate("23503"),
            Some(ConstraintKind::ForeignKey)
        );
        assert_eq!(
            ConstraintKind::from_sqlstate("23505"),
            Some(ConstraintKind::Unique)
        );
        assert_eq!(
            ConstraintKind::from_sqlstate("23514"),
            Some(ConstraintKind::Check)
        );
        assert_eq!(ConstraintKind::from_sqlstate("42P01"), None);
    }

    #[test]
    fn not_null_is_bad_request_with_message() {
        let t = translate(
            &failure(
                "23502",
                "null value in column \"camera_id\" violates not-null constraint",
                None,
            ),
            Verb::Create,
        );
        assert_eq!(t.outcome, Outcome::BadRequest);
        assert_eq!(
            t.message,
            "Some required data was left out:\n\nnull value in column \"camera_id\" violates not-null constraint"
        );
    }

    #[test]
    fn foreign_key_message_depends_on_verb() {
        let f = failure(
            "23503",
            "fk violation",
            Some("Key (location_id)=(9) is not present in table \"locations\"."),
        );

        let create = translate(&f, Verb::Create);
        assert_eq!(create.outcome, Outcome::Conflict);
        assert!(create.message.starts_with("This resource can't be created"));
        assert!(create.message.ends_with("is not present in table \"locations\"."));

        let update = translate(&f, Verb::Update);
        assert_eq!(update.outcome, Outcome::Conflict);
        assert!(update.message.starts_with("This resource can't be modified"));

        let delete = translate(&f, Verb::Delete);
        assert_eq!(delete.outcome, Outcome::Conflict);
        assert!(delete
            .message
            .starts_with("This resource can't be deleted because another record refers to it"));
    }

    #[test]
    fn foreign_key_on_read_is_internal() {
        let t = translate(&failure("23503", "fk violation", None), Verb::Read);
        assert_matches!(
            t,
            Translation {
                outcome: Outcome::Internal,
                kind: Some(ConstraintKind::ForeignKey),
                ..
            }
        );
        assert_eq!(t.message, "fk violation (SQLSTATE 23503)");
    }

    #[test]
    fn unique_uses_detail_and_check_uses_message() {
        let unique = translate(
            &failure(
                "23505",
                "duplicate key",
                Some("Key (name)=(Plant A) already exists."),
            ),
            Verb::Create,
        );
        assert_eq!(unique.outcome, Outcome::Conflict);
        assert!(unique.message.ends_with("Key (name)=(Plant A) already exists."));

        let check = translate(
            &failure(
                "23514",
                "new row violates check constraint \"camera_detections_counts_check\"",
                Some("Failing row contains (...)."),
            ),
            Verb::Update,
        );
        assert_eq!(check.outcome, Outcome::Conflict);
        assert!(check
            .message
            .ends_with("violates check constraint \"camera_detections_counts_check\""));
    }

    #[test]
    fn unclassified_concatenates_message_detail_and_hint() {
        let t = translate(
            &DbFailure {
                code: Some("22P02"),
                message: "invalid input value for enum direction: \"up\"",
                detail: Some("some detail"),
                hint: Some("some hint"),
            },
            Verb::Create,
        );
        assert_eq!(t.outcome, Outcome::Internal);
        assert_eq!(t.kind, None);
        assert_eq!(
            t.message,
            "invalid input value for enum direction: \"up\"\n\nsome detail\n\nsome hint"
        );
    }

    #[test]
    fn unclassified_without_extras_is_bare_message() {
        let t = translate(
            &DbFailure {
                code: None,
                message: "connection reset",
                ..DbFailure::default()
            },
            Verb::Read,
        );
        assert_eq!(t.message, "connection reset");
    }
}
