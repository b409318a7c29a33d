//! The settings page: draft ownership, the submit cycle and the view model
//! the front end renders.

use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, trace};

use super::avatar::{AvatarUploader, ACCEPTED_MIME_TYPES};
use super::draft::ProfileDraft;
use super::handler::SubmitHandler;
use super::model::{EmployeeBucket, FieldKind, ProfileField, ProfileFormData, INPUT_PLACEHOLDER};
use super::sections::Section;
use super::validation::{validate, FieldValidationError};
use crate::error::SettingsError;

/// Title rendered at the top of the page.
pub const PAGE_TITLE: &str = "Settings";

/// Where the page is in its submit cycle.
///
/// `Editing → Validating → (Submitted | Invalid)`, and back to `Editing` on
/// the next edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePhase {
    /// The user is changing fields.
    Editing,
    /// A submit is being checked against the schema.
    Validating,
    /// The last submit passed and was handed to the submit handler.
    Submitted,
    /// The last submit failed validation.
    Invalid,
}

/// Result of a submit attempt that did not hit an I/O failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The profile passed validation and was forwarded.
    Submitted(ProfileFormData),
    /// Validation failed; nothing was forwarded.
    Invalid(Vec<FieldValidationError>),
}

/// One entry of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub section: Section,
    pub label: &'static str,
    pub anchor: String,
}

/// One of the headcount buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceView {
    pub bucket: EmployeeBucket,
    pub active: bool,
}

/// Everything needed to draw one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: ProfileField,
    pub label: &'static str,
    /// Current draft value, empty when unset.
    pub value: String,
    pub placeholder: &'static str,
    pub description: Option<&'static str>,
    /// Error recorded by the last submit, if any.
    pub error: Option<String>,
    /// Headcount buttons; empty for non-choice fields.
    pub choices: Vec<ChoiceView>,
    /// MIME filter of the file picker; empty for non-avatar fields.
    pub accept: Vec<&'static str>,
}

/// The rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub title: &'static str,
    pub navigation: Vec<NavItem>,
    pub fields: Vec<FieldView>,
    pub phase: PagePhase,
}

impl PageView {
    /// Field views belonging to `section`, in form order.
    pub fn fields_in(&self, section: Section) -> impl Iterator<Item = &FieldView> {
        self.fields
            .iter()
            .filter(move |view| view.field.section() == section)
    }

    /// The view of a single field.
    pub fn field(&self, field: ProfileField) -> Option<&FieldView> {
        self.fields.iter().find(|view| view.field == field)
    }
}

/// The company profile settings page.
///
/// Owns the draft for as long as the page is shown. Edits replace the draft
/// wholesale; validation only runs on [`SettingsPage::on_submit`].
#[derive(Debug)]
pub struct SettingsPage<H: SubmitHandler> {
    draft: ProfileDraft,
    initial_draft: ProfileDraft,
    errors: BTreeMap<ProfileField, FieldValidationError>,
    phase: PagePhase,
    submit_count: usize,
    handler: H,
}

impl<H: SubmitHandler> SettingsPage<H> {
    /// Mounts a page with the default draft.
    pub fn new(handler: H) -> Self {
        Self::with_draft(ProfileDraft::default(), handler)
    }

    /// Mounts a page prefilled with `draft`.
    pub fn with_draft(draft: ProfileDraft, handler: H) -> Self {
        Self {
            initial_draft: draft.clone(),
            draft,
            errors: BTreeMap::new(),
            phase: PagePhase::Editing,
            submit_count: 0,
            handler,
        }
    }

    /// The current draft.
    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    /// Current phase of the submit cycle.
    pub fn phase(&self) -> PagePhase {
        self.phase
    }

    /// Number of profiles forwarded to the handler so far.
    pub fn submit_count(&self) -> usize {
        self.submit_count
    }

    /// Errors recorded by the last submit, in form order.
    pub fn errors(&self) -> Vec<&FieldValidationError> {
        self.errors.values().collect()
    }

    /// Error recorded for `field` by the last submit.
    pub fn error_for(&self, field: ProfileField) -> Option<&FieldValidationError> {
        self.errors.get(&field)
    }

    /// The submit handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutable access to the submit handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Records a new value for `field`.
    ///
    /// Nothing is validated here, and errors recorded by an earlier submit
    /// stay as they are until the next submit.
    pub fn on_field_change(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        trace!("{} changed to {:?}", field, value);
        self.draft = self.draft.with_value(field, value);
        self.phase = PagePhase::Editing;
    }

    /// Makes `bucket` the single active headcount bucket.
    pub fn select_employee_bucket(&mut self, bucket: EmployeeBucket) {
        self.on_field_change(ProfileField::EmployeeCompt, bucket.as_str());
    }

    /// The active headcount bucket, if the draft holds one of the literals.
    pub fn selected_employee_bucket(&self) -> Option<EmployeeBucket> {
        self.draft
            .get(ProfileField::EmployeeCompt)
            .and_then(EmployeeBucket::parse)
    }

    /// Hands the picked file to `uploader` and stores the returned URL as the
    /// avatar.
    pub fn attach_avatar(
        &mut self,
        path: &Path,
        uploader: &dyn AvatarUploader,
    ) -> Result<(), SettingsError> {
        let url = uploader.upload_avatar(path)?;
        debug!("Avatar attached from {}", path.display());
        self.on_field_change(ProfileField::UserAvatar, url.as_str());
        Ok(())
    }

    /// Clears the avatar, the "Remove" button next to the preview.
    pub fn remove_avatar(&mut self) {
        debug!("Avatar removed");
        self.draft = self.draft.without_value(ProfileField::UserAvatar);
        self.phase = PagePhase::Editing;
    }

    /// Throws away all edits since the page was mounted.
    pub fn reset(&mut self) {
        self.draft = self.initial_draft.clone();
        self.errors.clear();
        self.phase = PagePhase::Editing;
    }

    /// Validates the whole draft and, when it passes, forwards it to the
    /// submit handler exactly once.
    ///
    /// Validation failures are not errors: they are recorded per field and
    /// returned as [`SubmitOutcome::Invalid`].
    ///
    /// # Errors
    ///
    /// Returns the handler's error if forwarding fails. The draft is kept and
    /// the page goes back to editing.
    pub fn on_submit(&mut self) -> Result<SubmitOutcome, SettingsError> {
        self.phase = PagePhase::Validating;

        match validate(&self.draft) {
            Ok(profile) => {
                self.errors.clear();
                if let Err(e) = self.handler.submit(&profile) {
                    debug!("Submit handler failed: {}", e);
                    self.phase = PagePhase::Editing;
                    return Err(e);
                }
                self.submit_count += 1;
                self.phase = PagePhase::Submitted;
                Ok(SubmitOutcome::Submitted(profile))
            }
            Err(errors) => {
                debug!("Submit blocked by {} invalid field(s)", errors.len());
                self.errors = errors
                    .iter()
                    .map(|e| (e.field, e.clone()))
                    .collect();
                self.phase = PagePhase::Invalid;
                Ok(SubmitOutcome::Invalid(errors))
            }
        }
    }

    /// Builds the view model: navigation plus one view per field.
    pub fn render(&self) -> PageView {
        let navigation = Section::ALL
            .into_iter()
            .map(|section| NavItem {
                section,
                label: section.label(),
                anchor: section.anchor(),
            })
            .collect();

        let active_bucket = self.selected_employee_bucket();
        let fields = ProfileField::ALL
            .into_iter()
            .map(|field| {
                let kind = field.kind();
                FieldView {
                    field,
                    label: field.label(),
                    value: self.draft.get(field).unwrap_or_default().to_string(),
                    placeholder: INPUT_PLACEHOLDER,
                    description: field.description(),
                    error: self.errors.get(&field).map(|e| e.message.clone()),
                    choices: if kind == FieldKind::Choice {
                        EmployeeBucket::ALL
                            .into_iter()
                            .map(|bucket| ChoiceView {
                                bucket,
                                active: Some(bucket) == active_bucket,
                            })
                            .collect()
                    } else {
                        Vec::new()
                    },
                    accept: if kind == FieldKind::Avatar {
                        ACCEPTED_MIME_TYPES.to_vec()
                    } else {
                        Vec::new()
                    },
                }
            })
            .collect();

        PageView {
            title: PAGE_TITLE,
            navigation,
            fields,
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Handler that remembers everything it was given.
    #[derive(Debug, Default)]
    struct RecordingHandler {
        received: Vec<ProfileFormData>,
        fail: bool,
    }

    impl SubmitHandler for RecordingHandler {
        fn submit(&mut self, profile: &ProfileFormData) -> Result<(), SettingsError> {
            if self.fail {
                return Err(SettingsError::Io(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "closed",
                )));
            }
            self.received.push(profile.clone());
            Ok(())
        }
    }

    fn fill_acme<H: SubmitHandler>(page: &mut SettingsPage<H>) {
        page.on_field_change(ProfileField::CompanyName, "Acme");
        page.on_field_change(ProfileField::CompanyWebsite, "https://acme.io");
        page.on_field_change(ProfileField::CompanyLinkedin, "https://linkedin.com/acme");
        page.on_field_change(ProfileField::CompanyIndustry, "Tech");
        page.on_field_change(ProfileField::CompanyDescription, "We build things");
        page.select_employee_bucket(EmployeeBucket::TenToHundred);
        page.on_field_change(ProfileField::CompanyGoals, "Grow");
        page.on_field_change(ProfileField::Headquarters, "NYC");
        page.on_field_change(ProfileField::FoundingRound, "Seed");
        page.on_field_change(ProfileField::Faqs, "None");
        page.on_field_change(ProfileField::UserAvatar, "https://img.example.com/a.png");
    }

    #[test]
    fn test_acme_submit_forwards_same_object() {
        let mut page = SettingsPage::new(RecordingHandler::default());
        fill_acme(&mut page);

        let outcome = page.on_submit().unwrap();

        let received = &page.handler().received;
        assert_eq!(received.len(), 1);
        assert_eq!(outcome, SubmitOutcome::Submitted(received[0].clone()));
        assert_eq!(received[0].company_name, "Acme");
        assert_eq!(received[0].company_linkedin, "https://linkedin.com/acme");
        assert_eq!(received[0].employee_compt, EmployeeBucket::TenToHundred);
        assert_eq!(page.phase(), PagePhase::Submitted);
        assert_eq!(page.submit_count(), 1);
        assert!(page.errors().is_empty());
    }

    #[test]
    fn test_invalid_submit_does_not_forward() {
        let mut page = SettingsPage::new(RecordingHandler::default());
        fill_acme(&mut page);
        page.on_field_change(ProfileField::CompanyName, "");

        let outcome = page.on_submit().unwrap();

        assert!(matches!(outcome, SubmitOutcome::Invalid(ref e) if e.len() == 1));
        assert!(page.handler().received.is_empty());
        assert_eq!(page.phase(), PagePhase::Invalid);
        assert_eq!(
            page.error_for(ProfileField::CompanyName).map(|e| e.message.as_str()),
            Some("Required")
        );
    }

    #[test]
    fn test_edit_after_failed_submit_keeps_other_state() {
        let mut page = SettingsPage::new(RecordingHandler::default());
        page.on_field_change(ProfileField::CompanyWebsite, "nope");
        page.on_submit().unwrap();
        let errors_before: Vec<FieldValidationError> =
            page.errors().into_iter().cloned().collect();
        let draft_before = page.draft().clone();

        page.on_field_change(ProfileField::CompanyName, "Acme");

        assert_eq!(page.phase(), PagePhase::Editing);
        let errors_after: Vec<FieldValidationError> =
            page.errors().into_iter().cloned().collect();
        assert_eq!(errors_after, errors_before);
        for field in ProfileField::ALL {
            if field != ProfileField::CompanyName {
                assert_eq!(page.draft().get(field), draft_before.get(field));
            }
        }
        assert_eq!(page.draft().get(ProfileField::CompanyName), Some("Acme"));
    }

    #[test]
    fn test_successful_resubmit_clears_errors() {
        let mut page = SettingsPage::new(RecordingHandler::default());
        page.on_submit().unwrap();
        assert!(!page.errors().is_empty());

        fill_acme(&mut page);
        page.on_submit().unwrap();

        assert!(page.errors().is_empty());
        assert_eq!(page.handler().received.len(), 1);
    }

    #[test]
    fn test_form_stays_usable_after_submit() {
        let mut page = SettingsPage::new(RecordingHandler::default());
        fill_acme(&mut page);
        page.on_submit().unwrap();
        page.on_field_change(ProfileField::Faqs, "Some");
        page.on_submit().unwrap();

        let received = &page.handler().received;
        assert_eq!(received.len(), 2);
        assert_eq!(received[1].faqs, "Some");
    }

    #[test]
    fn test_handler_failure_is_returned() {
        let mut page = SettingsPage::new(RecordingHandler {
            fail: true,
            ..Default::default()
        });
        fill_acme(&mut page);

        let result = page.on_submit();

        assert!(matches!(result, Err(SettingsError::Io(_))));
        assert_eq!(page.phase(), PagePhase::Editing);
        assert_eq!(page.submit_count(), 0);
    }

    #[test]
    fn test_default_bucket_is_real_value() {
        let page = SettingsPage::new(RecordingHandler::default());
        let view = page.render();
        let choices = &view.field(ProfileField::EmployeeCompt).unwrap().choices;

        assert_eq!(choices.iter().filter(|c| c.active).count(), 1);
        assert!(choices[0].active);
        assert_eq!(page.draft().get(ProfileField::EmployeeCompt), Some("1-10"));
    }

    #[test]
    fn test_selecting_bucket_moves_highlight() {
        let mut page = SettingsPage::new(RecordingHandler::default());
        page.select_employee_bucket(EmployeeBucket::ThousandPlus);

        let view = page.render();
        let active: Vec<EmployeeBucket> = view
            .field(ProfileField::EmployeeCompt)
            .unwrap()
            .choices
            .iter()
            .filter(|c| c.active)
            .map(|c| c.bucket)
            .collect();
        assert_eq!(active, vec![EmployeeBucket::ThousandPlus]);
    }

    #[test]
    fn test_render_navigation_and_fields() {
        let page = SettingsPage::new(RecordingHandler::default());
        let view = page.render();

        assert_eq!(view.title, "Settings");
        assert_eq!(view.navigation.len(), 5);
        assert_eq!(view.navigation[1].anchor, "#Company Info");
        assert_eq!(view.fields.len(), ProfileField::ALL.len());
        assert_eq!(view.fields_in(Section::CompanyInfo).count(), 10);
        assert_eq!(
            view.field(ProfileField::UserAvatar).unwrap().accept,
            vec!["image/png", "image/jpeg", "image/*"]
        );
        assert_eq!(
            view.field(ProfileField::CompanyDescription).unwrap().description,
            Some("Your detailed company description.")
        );
    }

    #[test]
    fn test_render_shows_errors_next_to_fields() {
        let mut page = SettingsPage::new(RecordingHandler::default());
        page.on_field_change(ProfileField::CompanyLinkedin, "linkedin");
        page.on_submit().unwrap();

        let view = page.render();
        assert_eq!(
            view.field(ProfileField::CompanyLinkedin).unwrap().error.as_deref(),
            Some("Invalid url")
        );
        assert!(view.field(ProfileField::EmployeeCompt).unwrap().error.is_none());
    }

    #[test]
    fn test_reset_restores_mounted_draft() {
        let initial = ProfileDraft::default().with_value(ProfileField::CompanyName, "Initial");
        let mut page = SettingsPage::with_draft(initial.clone(), RecordingHandler::default());
        page.on_field_change(ProfileField::CompanyName, "Changed");
        page.on_submit().unwrap();

        page.reset();

        assert_eq!(page.draft(), &initial);
        assert!(page.errors().is_empty());
        assert_eq!(page.phase(), PagePhase::Editing);
    }

    #[test]
    fn test_attach_avatar_stores_uploaded_url() {
        struct FixedUploader;
        impl AvatarUploader for FixedUploader {
            fn upload_avatar(&self, _path: &Path) -> Result<url::Url, SettingsError> {
                Ok(url::Url::parse("https://cdn.example.com/me.png").unwrap())
            }
        }

        let mut page = SettingsPage::new(RecordingHandler::default());
        page.attach_avatar(Path::new("me.png"), &FixedUploader).unwrap();

        assert_eq!(
            page.draft().get(ProfileField::UserAvatar),
            Some("https://cdn.example.com/me.png")
        );
    }

    #[test]
    fn test_remove_avatar_clears_only_avatar() {
        let mut page = SettingsPage::new(RecordingHandler::default());
        fill_acme(&mut page);
        page.on_submit().unwrap();
        let before = page.draft().clone();

        page.remove_avatar();

        assert_eq!(page.draft().get(ProfileField::UserAvatar), None);
        assert_eq!(page.phase(), PagePhase::Editing);
        assert_eq!(
            page.draft(),
            &before.without_value(ProfileField::UserAvatar)
        );

        let outcome = page.on_submit().unwrap();
        assert!(matches!(outcome, SubmitOutcome::Invalid(ref e)
            if e.len() == 1 && e[0].field == ProfileField::UserAvatar && e[0].message == "Required"));
    }
}
