//! The company profile form.
//!
//! This module provides everything behind the settings page except drawing
//! it:
//!
//! - The validated record and per-field metadata ([`model`])
//! - The immutable in-progress draft ([`draft`])
//! - The validator table and validation function ([`validation`])
//! - Page sections for navigation ([`sections`])
//! - Avatar file handling ([`avatar`])
//! - Submit handlers ([`handler`])
//! - The page itself with its submit cycle ([`page`])

pub mod avatar;
pub mod draft;
pub mod handler;
pub mod model;
pub mod page;
pub mod sections;
pub mod validation;

pub use avatar::{AvatarUploader, LocalFileUploader, ACCEPTED_MIME_TYPES};
pub use draft::ProfileDraft;
pub use handler::{ConsoleSubmitHandler, DiagnosticSink, FnSubmitHandler, SubmitHandler};
pub use model::{EmployeeBucket, FieldKind, ProfileField, ProfileFormData};
pub use page::{FieldView, PagePhase, PageView, SettingsPage, SubmitOutcome};
pub use sections::Section;
pub use validation::{validate, validate_field, FieldValidationError, Rule, FIELD_RULES};
