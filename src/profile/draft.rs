//! The in-progress form state.

use std::fs;
use std::path::Path;

use log::trace;
use serde::{Deserialize, Serialize};

use super::model::{EmployeeBucket, ProfileField, ProfileFormData};
use crate::error::SettingsError;

/// What the user has typed so far, possibly invalid.
///
/// A draft is never edited in place by the page: every edit produces a new
/// draft through [`ProfileDraft::with_value`]. Unset fields are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProfileDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    company_website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    company_linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    company_industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    company_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    employee_compt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    company_goals: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    headquarters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    founding_round: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    faqs: Option<String>,
}

impl Default for ProfileDraft {
    /// The draft a freshly mounted page starts with: everything unset except
    /// the headcount bucket, which starts on the first choice so the
    /// highlighted button and the stored value agree.
    fn default() -> Self {
        Self::empty().with_value(
            ProfileField::EmployeeCompt,
            EmployeeBucket::default().as_str(),
        )
    }
}

impl ProfileDraft {
    /// A draft with every field unset.
    pub fn empty() -> Self {
        Self {
            user_avatar: None,
            company_name: None,
            company_website: None,
            company_linkedin: None,
            company_industry: None,
            company_description: None,
            employee_compt: None,
            company_goals: None,
            headquarters: None,
            founding_round: None,
            faqs: None,
        }
    }

    /// Current value of `field`, `None` when never set.
    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Returns a copy of this draft in which only `field` changed.
    pub fn with_value(&self, field: ProfileField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        *next.slot_mut(field) = Some(value.into());
        next
    }

    /// Returns a copy of this draft with `field` unset again.
    pub fn without_value(&self, field: ProfileField) -> Self {
        let mut next = self.clone();
        *next.slot_mut(field) = None;
        next
    }

    /// Number of fields holding a value.
    pub fn filled_count(&self) -> usize {
        ProfileField::ALL
            .iter()
            .filter(|f| self.get(**f).is_some())
            .count()
    }

    /// Parses a draft from a (possibly partial) JSON object keyed by the
    /// form's field names.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a draft from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, SettingsError> {
        trace!("Loading draft from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    fn slot(&self, field: ProfileField) -> &Option<String> {
        match field {
            ProfileField::UserAvatar => &self.user_avatar,
            ProfileField::CompanyName => &self.company_name,
            ProfileField::CompanyWebsite => &self.company_website,
            ProfileField::CompanyLinkedin => &self.company_linkedin,
            ProfileField::CompanyIndustry => &self.company_industry,
            ProfileField::EmployeeCompt => &self.employee_compt,
            ProfileField::CompanyDescription => &self.company_description,
            ProfileField::CompanyGoals => &self.company_goals,
            ProfileField::Headquarters => &self.headquarters,
            ProfileField::FoundingRound => &self.founding_round,
            ProfileField::Faqs => &self.faqs,
        }
    }

    fn slot_mut(&mut self, field: ProfileField) -> &mut Option<String> {
        match field {
            ProfileField::UserAvatar => &mut self.user_avatar,
            ProfileField::CompanyName => &mut self.company_name,
            ProfileField::CompanyWebsite => &mut self.company_website,
            ProfileField::CompanyLinkedin => &mut self.company_linkedin,
            ProfileField::CompanyIndustry => &mut self.company_industry,
            ProfileField::EmployeeCompt => &mut self.employee_compt,
            ProfileField::CompanyDescription => &mut self.company_description,
            ProfileField::CompanyGoals => &mut self.company_goals,
            ProfileField::Headquarters => &mut self.headquarters,
            ProfileField::FoundingRound => &mut self.founding_round,
            ProfileField::Faqs => &mut self.faqs,
        }
    }
}

impl From<&ProfileFormData> for ProfileDraft {
    fn from(profile: &ProfileFormData) -> Self {
        ProfileField::ALL
            .into_iter()
            .fold(Self::empty(), |draft, field| {
                draft.with_value(field, profile.value_of(field))
            })
    }
}
