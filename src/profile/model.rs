//! Profile data model: the validated record, the headcount buckets and the
//! per-field metadata used by validation and rendering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::sections::Section;

/// Placeholder shown in empty text inputs.
pub const INPUT_PLACEHOLDER: &str = "Type something...";

/// A fully validated company profile.
///
/// Instances only come out of [`validate`](super::validate), so every field
/// satisfies its constraint. Serialises with the camelCase keys of the form
/// schema (`userAvatar`, `companyName`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFormData {
    /// URL of the user's avatar image.
    pub user_avatar: String,
    /// Company name.
    pub company_name: String,
    /// URL of the company website.
    pub company_website: String,
    /// URL of the company LinkedIn page.
    pub company_linkedin: String,
    /// Industry the company works in.
    pub company_industry: String,
    /// Free-form company description.
    pub company_description: String,
    /// Headcount bucket.
    pub employee_compt: EmployeeBucket,
    /// Company goals.
    pub company_goals: String,
    /// Headquarters location.
    pub headquarters: String,
    /// Latest founding round.
    pub founding_round: String,
    /// Frequently asked questions.
    pub faqs: String,
}

impl ProfileFormData {
    /// Returns the value of `field` as it appears in the form.
    pub fn value_of(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::UserAvatar => &self.user_avatar,
            ProfileField::CompanyName => &self.company_name,
            ProfileField::CompanyWebsite => &self.company_website,
            ProfileField::CompanyLinkedin => &self.company_linkedin,
            ProfileField::CompanyIndustry => &self.company_industry,
            ProfileField::EmployeeCompt => self.employee_compt.as_str(),
            ProfileField::CompanyDescription => &self.company_description,
            ProfileField::CompanyGoals => &self.company_goals,
            ProfileField::Headquarters => &self.headquarters,
            ProfileField::FoundingRound => &self.founding_round,
            ProfileField::Faqs => &self.faqs,
        }
    }
}

/// Headcount bucket for the `employeeCompt` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EmployeeBucket {
    /// 1 to 10 employees. Selected when the page mounts.
    #[default]
    #[serde(rename = "1-10")]
    OneToTen,
    /// 10 to 100 employees.
    #[serde(rename = "10-100")]
    TenToHundred,
    /// 100 to 500 employees.
    #[serde(rename = "100-500")]
    HundredToFiveHundred,
    /// More than 1000 employees.
    #[serde(rename = "1000+")]
    ThousandPlus,
}

impl EmployeeBucket {
    /// All buckets in display order.
    pub const ALL: [EmployeeBucket; 4] = [
        EmployeeBucket::OneToTen,
        EmployeeBucket::TenToHundred,
        EmployeeBucket::HundredToFiveHundred,
        EmployeeBucket::ThousandPlus,
    ];

    /// The literal value stored in the form.
    pub fn as_str(self) -> &'static str {
        match self {
            EmployeeBucket::OneToTen => "1-10",
            EmployeeBucket::TenToHundred => "10-100",
            EmployeeBucket::HundredToFiveHundred => "100-500",
            EmployeeBucket::ThousandPlus => "1000+",
        }
    }

    /// Parses one of the four literal values. Anything else, including
    /// differently spaced variants, is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.as_str() == value)
    }

    /// Position of this bucket in [`EmployeeBucket::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|b| *b == self).unwrap_or(0)
    }

    /// The bucket after this one, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The bucket before this one, wrapping around.
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl FromStr for EmployeeBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown employee bucket '{}'", s))
    }
}

impl fmt::Display for EmployeeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a field is entered on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, must not be empty.
    Text,
    /// Text that must be a well-formed URL.
    Url,
    /// Single choice among [`EmployeeBucket::ALL`].
    Choice,
    /// Avatar picker; the stored value is a URL.
    Avatar,
}

/// Identifies one field of the profile form.
///
/// Variants are declared in form order, so sorting by `ProfileField` sorts
/// by position on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProfileField {
    UserAvatar,
    CompanyName,
    CompanyWebsite,
    CompanyLinkedin,
    CompanyIndustry,
    EmployeeCompt,
    CompanyDescription,
    CompanyGoals,
    Headquarters,
    FoundingRound,
    Faqs,
}

impl ProfileField {
    /// Every field in form order.
    pub const ALL: [ProfileField; 11] = [
        ProfileField::UserAvatar,
        ProfileField::CompanyName,
        ProfileField::CompanyWebsite,
        ProfileField::CompanyLinkedin,
        ProfileField::CompanyIndustry,
        ProfileField::EmployeeCompt,
        ProfileField::CompanyDescription,
        ProfileField::CompanyGoals,
        ProfileField::Headquarters,
        ProfileField::FoundingRound,
        ProfileField::Faqs,
    ];

    /// Wire name of the field, as used in JSON payloads.
    pub fn id(self) -> &'static str {
        match self {
            ProfileField::UserAvatar => "userAvatar",
            ProfileField::CompanyName => "companyName",
            ProfileField::CompanyWebsite => "companyWebsite",
            ProfileField::CompanyLinkedin => "companyLinkedin",
            ProfileField::CompanyIndustry => "companyIndustry",
            ProfileField::EmployeeCompt => "employeeCompt",
            ProfileField::CompanyDescription => "companyDescription",
            ProfileField::CompanyGoals => "companyGoals",
            ProfileField::Headquarters => "headquarters",
            ProfileField::FoundingRound => "foundingRound",
            ProfileField::Faqs => "faqs",
        }
    }

    /// Looks a field up by its wire name.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }

    /// Label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            ProfileField::UserAvatar => "Avatar",
            ProfileField::CompanyName => "Company name",
            ProfileField::CompanyWebsite => "Company website",
            ProfileField::CompanyLinkedin => "Company LinkedIn",
            ProfileField::CompanyIndustry => "Company industry",
            ProfileField::EmployeeCompt => "Employee count",
            ProfileField::CompanyDescription => "Company description",
            ProfileField::CompanyGoals => "Company goals",
            ProfileField::Headquarters => "Headquarters",
            ProfileField::FoundingRound => "Founding round",
            ProfileField::Faqs => "FAQs",
        }
    }

    /// Help text shown under the input, if any.
    pub fn description(self) -> Option<&'static str> {
        match self {
            ProfileField::CompanyDescription => Some("Your detailed company description."),
            ProfileField::UserAvatar => Some("Or drag and drop (SVG, PNG, JPG)"),
            _ => None,
        }
    }

    /// How the field is entered.
    pub fn kind(self) -> FieldKind {
        match self {
            ProfileField::UserAvatar => FieldKind::Avatar,
            ProfileField::CompanyWebsite | ProfileField::CompanyLinkedin => FieldKind::Url,
            ProfileField::EmployeeCompt => FieldKind::Choice,
            _ => FieldKind::Text,
        }
    }

    /// The page section the field is rendered in.
    pub fn section(self) -> Section {
        match self {
            ProfileField::UserAvatar => Section::YourProfile,
            _ => Section::CompanyInfo,
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_parse_only_accepts_literals() {
        assert_eq!(EmployeeBucket::parse("1-10"), Some(EmployeeBucket::OneToTen));
        assert_eq!(
            EmployeeBucket::parse("1000+"),
            Some(EmployeeBucket::ThousandPlus)
        );
        assert_eq!(EmployeeBucket::parse("50-100"), None);
        assert_eq!(EmployeeBucket::parse(" 1-10"), None);
        assert_eq!(EmployeeBucket::parse(""), None);
    }

    #[test]
    fn test_bucket_from_str() {
        assert_eq!("100-500".parse::<EmployeeBucket>(), Ok(EmployeeBucket::HundredToFiveHundred));
        assert!("500+".parse::<EmployeeBucket>().is_err());
    }

    #[test]
    fn test_bucket_cycling_wraps() {
        assert_eq!(EmployeeBucket::ThousandPlus.next(), EmployeeBucket::OneToTen);
        assert_eq!(EmployeeBucket::OneToTen.prev(), EmployeeBucket::ThousandPlus);
        assert_eq!(EmployeeBucket::OneToTen.next(), EmployeeBucket::TenToHundred);
    }

    #[test]
    fn test_bucket_serde_uses_literals() {
        let json = serde_json::to_string(&EmployeeBucket::HundredToFiveHundred).unwrap();
        assert_eq!(json, "\"100-500\"");
        let bucket: EmployeeBucket = serde_json::from_str("\"10-100\"").unwrap();
        assert_eq!(bucket, EmployeeBucket::TenToHundred);
    }

    #[test]
    fn test_field_ids_round_trip() {
        for field in ProfileField::ALL {
            assert_eq!(ProfileField::from_id(field.id()), Some(field));
        }
        assert_eq!(ProfileField::from_id("companyname"), None);
    }

    #[test]
    fn test_field_order_matches_declaration() {
        let mut sorted = ProfileField::ALL;
        sorted.sort();
        assert_eq!(sorted, ProfileField::ALL);
    }

    #[test]
    fn test_profile_serialises_with_form_keys() {
        let profile = ProfileFormData {
            user_avatar: "https://img.example.com/a.png".to_string(),
            company_name: "Acme".to_string(),
            company_website: "https://acme.io".to_string(),
            company_linkedin: "https://linkedin.com/acme".to_string(),
            company_industry: "Tech".to_string(),
            company_description: "We build things".to_string(),
            employee_compt: EmployeeBucket::TenToHundred,
            company_goals: "Grow".to_string(),
            headquarters: "NYC".to_string(),
            founding_round: "Seed".to_string(),
            faqs: "None".to_string(),
        };

        let value = serde_json::to_value(&profile).unwrap();
        for field in ProfileField::ALL {
            assert_eq!(
                value[field.id()].as_str(),
                Some(profile.value_of(field)),
                "key {}",
                field.id()
            );
        }
    }
}
