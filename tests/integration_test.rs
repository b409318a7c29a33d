use profile_settings::cli::run_check;
use profile_settings::profile::{
    ConsoleSubmitHandler, EmployeeBucket, FnSubmitHandler, PagePhase, ProfileDraft, ProfileField,
    ProfileFormData, SettingsPage, SubmitOutcome,
};

fn acme_profile() -> ProfileFormData {
    ProfileFormData {
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
    }
}

// Fills the page field by field, the way a user would.
#[test]
fn acme_scenario_submits_once() {
    let mut received = Vec::new();
    {
        let handler = FnSubmitHandler::new(|p: &ProfileFormData| {
            received.push(p.clone());
            Ok(())
        });
        let mut page = SettingsPage::new(handler);
        let profile = acme_profile();
        for field in ProfileField::ALL {
            page.on_field_change(field, profile.value_of(field));
        }
        assert_eq!(
            page.selected_employee_bucket(),
            Some(EmployeeBucket::TenToHundred)
        );

        let outcome = page.on_submit().unwrap();
        assert_eq!(outcome, SubmitOutcome::Submitted(acme_profile()));
        assert_eq!(page.phase(), PagePhase::Submitted);
        assert_eq!(page.submit_count(), 1);
    }
    assert_eq!(received, vec![acme_profile()]);
}

#[test]
fn fixing_an_error_needs_another_submit() {
    let mut page = SettingsPage::new(ConsoleSubmitHandler::new(Vec::new()));
    let profile = acme_profile();
    for field in ProfileField::ALL {
        page.on_field_change(field, profile.value_of(field));
    }
    page.on_field_change(ProfileField::CompanyLinkedin, "not-a-url");

    assert!(matches!(page.on_submit().unwrap(), SubmitOutcome::Invalid(_)));
    page.on_field_change(ProfileField::CompanyLinkedin, "https://linkedin.com/acme");
    assert!(page.error_for(ProfileField::CompanyLinkedin).is_some());
    assert!(page.handler().writer().is_empty());

    assert!(matches!(
        page.on_submit().unwrap(),
        SubmitOutcome::Submitted(_)
    ));
    assert!(page.errors().is_empty());
    assert_eq!(page.handler().writer().iter().filter(|b| **b == b'\n').count(), 1);
}

#[test]
fn whitespace_headquarters_is_submitted_as_is() {
    let mut page = SettingsPage::new(ConsoleSubmitHandler::new(Vec::new()));
    let profile = acme_profile();
    for field in ProfileField::ALL {
        page.on_field_change(field, profile.value_of(field));
    }
    page.on_field_change(ProfileField::Headquarters, " ");

    match page.on_submit().unwrap() {
        SubmitOutcome::Submitted(submitted) => assert_eq!(submitted.headquarters, " "),
        other => panic!("expected a submission, got {:?}", other),
    }
}

#[test]
fn check_mode_accepts_draft_file_contents() {
    let json = serde_json::to_string(&acme_profile()).unwrap();
    let draft = ProfileDraft::from_json_str(&json).unwrap();

    let mut out = Vec::new();
    let mut submitted = Vec::new();
    let ok = run_check(draft, ConsoleSubmitHandler::new(&mut submitted), &mut out).unwrap();

    assert!(ok);
    let line = String::from_utf8(submitted).unwrap();
    let echoed: ProfileFormData = serde_json::from_str(line.trim()).unwrap();
    assert_eq!(echoed, acme_profile());
}

#[test]
fn check_mode_lists_missing_fields() {
    let mut out = Vec::new();
    let ok = run_check(
        ProfileDraft::default(),
        ConsoleSubmitHandler::new(Vec::new()),
        &mut out,
    )
    .unwrap();

    assert!(!ok);
    let report = String::from_utf8(out).unwrap();
    // Every field but the defaulted headcount is required.
    assert_eq!(report.lines().count(), 10);
    assert!(report.lines().all(|l| l.ends_with(": Required")));
    assert!(!report.contains("employeeCompt"));
}

#[test]
fn unknown_draft_keys_are_rejected() {
    assert!(ProfileDraft::from_json_str(r#"{"companyNmae":"Acme"}"#).is_err());
}
