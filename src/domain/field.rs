//! Field - Built-in constraints of text fields
//!
//! The same checks a browser runs for `required` and `type="email"` inputs
//! before a form's submit handler is allowed to run.

use validator::ValidateEmail;

/// Kind of value a field holds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
}

/// Why a value failed its field's constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// Required field left empty
    ValueMissing,
    /// Value does not match the field kind
    TypeMismatch(FieldKind),
}

impl ConstraintViolation {
    /// Translation key of the standard prompt for this violation
    pub fn message_key(&self) -> &'static str {
        match self {
            ConstraintViolation::ValueMissing => "field.value_missing",
            ConstraintViolation::TypeMismatch(FieldKind::Email) => "field.email_mismatch",
            ConstraintViolation::TypeMismatch(FieldKind::Text) => "field.type_mismatch",
        }
    }
}

/// Constraint attached to a field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldConstraint {
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldConstraint {
    /// A required email field
    pub fn required_email() -> Self {
        Self {
            kind: FieldKind::Email,
            required: true,
        }
    }

    /// Check `value` against the constraint
    pub fn check(&self, value: &str) -> Result<(), ConstraintViolation> {
        let value = value.trim();
        if value.is_empty() {
            return if self.required {
                Err(ConstraintViolation::ValueMissing)
            } else {
                Ok(())
            };
        }

        match self.kind {
            FieldKind::Text => Ok(()),
            FieldKind::Email if value.validate_email() => Ok(()),
            FieldKind::Email => Err(ConstraintViolation::TypeMismatch(FieldKind::Email)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    #[test]
    fn empty_required_field_is_missing() {
        let constraint = FieldConstraint::required_email();
        assert_eq!(constraint.check("   "), Err(ConstraintViolation::ValueMissing));
    }

    #[test]
    fn empty_optional_field_passes() {
        let constraint = FieldConstraint {
            kind: FieldKind::Email,
            required: false,
        };
        assert_ok!(constraint.check(""));
    }

    #[test]
    fn email_without_at_symbol_is_rejected() {
        let constraint = FieldConstraint::required_email();
        for value in ["personexample.com", "person", "@example.com", "person@"] {
            assert_err!(constraint.check(value), "{value} should be rejected");
        }
    }

    #[test]
    fn well_formed_email_passes() {
        let constraint = FieldConstraint::required_email();
        assert_ok!(constraint.check("person@example.com"));
        assert_ok!(constraint.check("ursula_le_guin@gmail.com"));
    }

    #[test]
    fn text_fields_accept_anything_non_empty() {
        assert_ok!(FieldConstraint::default().check("no @ here"));
    }
}
