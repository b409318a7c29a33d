//! Page sections and their navigation anchors.

use super::model::ProfileField;

/// A section of the settings page, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    YourProfile,
    CompanyInfo,
    MessageSeats,
    DoNotContact,
    Integrations,
}

impl Section {
    /// The fixed navigation order.
    pub const ALL: [Section; 5] = [
        Section::YourProfile,
        Section::CompanyInfo,
        Section::MessageSeats,
        Section::DoNotContact,
        Section::Integrations,
    ];

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Section::YourProfile => "Your profile",
            Section::CompanyInfo => "Company Info",
            Section::MessageSeats => "Message Seats",
            Section::DoNotContact => "Do not contact",
            Section::Integrations => "Integrations",
        }
    }

    /// In-page anchor of the section, `#` followed by the label verbatim.
    pub fn anchor(self) -> String {
        format!("#{}", self.label())
    }

    /// Resolves an anchor produced by [`Section::anchor`].
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let label = anchor.strip_prefix('#')?;
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Position in [`Section::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Fields rendered in this section, in form order.
    pub fn fields(self) -> Vec<ProfileField> {
        ProfileField::ALL
            .into_iter()
            .filter(|f| f.section() == self)
            .collect()
    }
}
