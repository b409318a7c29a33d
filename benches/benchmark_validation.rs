use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use profile_settings::profile::{validate, ProfileDraft, ProfileField};

fn acme_draft() -> ProfileDraft {
    ProfileDraft::default()
        .with_value(ProfileField::UserAvatar, "https://img.example.com/a.png")
        .with_value(ProfileField::CompanyName, "Acme")
        .with_value(ProfileField::CompanyWebsite, "https://acme.io")
        .with_value(ProfileField::CompanyLinkedin, "https://linkedin.com/acme")
        .with_value(ProfileField::CompanyIndustry, "Tech")
        .with_value(ProfileField::CompanyDescription, "We build things")
        .with_value(ProfileField::CompanyGoals, "Grow")
        .with_value(ProfileField::Headquarters, "NYC")
        .with_value(ProfileField::FoundingRound, "Seed")
        .with_value(ProfileField::Faqs, "None")
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let valid = acme_draft();
    c.bench_function("validate complete draft", |b| {
        b.iter(|| validate(black_box(&valid)))
    });

    let empty = ProfileDraft::default();
    c.bench_function("validate empty draft", |b| {
        b.iter(|| validate(black_box(&empty)))
    });

    c.bench_function("edit draft field", |b| {
        b.iter(|| valid.with_value(black_box(ProfileField::Headquarters), black_box("Berlin")))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
