//! Schema validation for profile drafts.
//!
//! Every field has exactly one [`Rule`] in [`FIELD_RULES`]. Validation checks
//! all of them and collects one error per failing field instead of stopping
//! at the first.

use std::fmt;

use url::Url;

use super::draft::ProfileDraft;
use super::model::{EmployeeBucket, ProfileField, ProfileFormData};

/// Message for unset or empty required values.
const REQUIRED_MESSAGE: &str = "Required";

/// Message for values that do not parse as a URL.
const INVALID_URL_MESSAGE: &str = "Invalid url";

/// Literal values accepted by `employeeCompt`.
const EMPLOYEE_BUCKETS: &[&str] = &["1-10", "10-100", "100-500", "1000+"];

/// A single field that failed its constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationError {
    /// The field that failed.
    pub field: ProfileField,
    /// Message shown next to the field.
    pub message: String,
}

impl FieldValidationError {
    /// Creates a new validation error for `field`.
    pub fn new(field: ProfileField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.id(), self.message)
    }
}

impl std::error::Error for FieldValidationError {}

/// Constraint attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Must be set and not empty. Whitespace counts as content.
    NonEmpty,
    /// Must be an absolute URL.
    Url,
    /// Must equal one of the listed literals exactly.
    OneOf(&'static [&'static str]),
}

impl Rule {
    /// Checks a single value against this rule.
    ///
    /// # Returns
    ///
    /// `Ok(())` when the value satisfies the rule, otherwise the message to
    /// show next to the field.
    pub fn check(self, value: Option<&str>) -> Result<(), String> {
        let value = match value {
            Some(v) => v,
            None => return Err(REQUIRED_MESSAGE.to_string()),
        };

        match self {
            Rule::NonEmpty => {
                if value.is_empty() {
                    Err(REQUIRED_MESSAGE.to_string())
                } else {
                    Ok(())
                }
            }
            Rule::Url => {
                if is_well_formed_url(value) {
                    Ok(())
                } else {
                    Err(INVALID_URL_MESSAGE.to_string())
                }
            }
            Rule::OneOf(options) => {
                if options.contains(&value) {
                    Ok(())
                } else {
                    let expected: Vec<String> =
                        options.iter().map(|o| format!("'{}'", o)).collect();
                    Err(format!(
                        "Invalid enum value. Expected {}, received '{}'",
                        expected.join(" | "),
                        value
                    ))
                }
            }
        }
    }
}

/// The validator table: one rule per field, in form order.
pub const FIELD_RULES: [(ProfileField, Rule); 11] = [
    (ProfileField::UserAvatar, Rule::Url),
    (ProfileField::CompanyName, Rule::NonEmpty),
    (ProfileField::CompanyWebsite, Rule::Url),
    (ProfileField::CompanyLinkedin, Rule::Url),
    (ProfileField::CompanyIndustry, Rule::NonEmpty),
    (ProfileField::EmployeeCompt, Rule::OneOf(EMPLOYEE_BUCKETS)),
    (ProfileField::CompanyDescription, Rule::NonEmpty),
    (ProfileField::CompanyGoals, Rule::NonEmpty),
    (ProfileField::Headquarters, Rule::NonEmpty),
    (ProfileField::FoundingRound, Rule::NonEmpty),
    (ProfileField::Faqs, Rule::NonEmpty),
];

/// Returns the rule for `field`.
pub fn rule_for(field: ProfileField) -> Rule {
    FIELD_RULES
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, rule)| *rule)
        .unwrap_or(Rule::NonEmpty)
}

/// Checks a single field of a draft.
pub fn validate_field(
    draft: &ProfileDraft,
    field: ProfileField,
) -> Result<(), FieldValidationError> {
    rule_for(field)
        .check(draft.get(field))
        .map_err(|message| FieldValidationError::new(field, message))
}

/// Validates a whole draft.
///
/// # Returns
///
/// The validated profile, or one error per failing field in form order.
pub fn validate(draft: &ProfileDraft) -> Result<ProfileFormData, Vec<FieldValidationError>> {
    let errors: Vec<FieldValidationError> = FIELD_RULES
        .iter()
        .filter_map(|(field, rule)| {
            rule.check(draft.get(*field))
                .err()
                .map(|message| FieldValidationError::new(*field, message))
        })
        .collect();

    if !errors.is_empty() {
        return Err(errors);
    }

    let text = |field: ProfileField| draft.get(field).unwrap_or_default().to_string();
    let employee_compt = draft
        .get(ProfileField::EmployeeCompt)
        .and_then(EmployeeBucket::parse)
        .ok_or_else(|| {
            vec![FieldValidationError::new(
                ProfileField::EmployeeCompt,
                REQUIRED_MESSAGE,
            )]
        })?;

    Ok(ProfileFormData {
        user_avatar: text(ProfileField::UserAvatar),
        company_name: text(ProfileField::CompanyName),
        company_website: text(ProfileField::CompanyWebsite),
        company_linkedin: text(ProfileField::CompanyLinkedin),
        company_industry: text(ProfileField::CompanyIndustry),
        company_description: text(ProfileField::CompanyDescription),
        employee_compt,
        company_goals: text(ProfileField::CompanyGoals),
        headquarters: text(ProfileField::Headquarters),
        founding_round: text(ProfileField::FoundingRound),
        faqs: text(ProfileField::Faqs),
    })
}

/// True when `value` parses as an absolute URL.
fn is_well_formed_url(value: &str) -> bool {
    if value.trim().is_empty() {
        return false;
    }
    Url::parse(value).is_ok()
}
