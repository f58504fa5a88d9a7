//! Signup domain: record aggregate, validation schema, step partition, and
//! the wizard controller that ties them together.

pub mod field;
pub mod record;
pub mod schema;
pub mod steps;
pub mod wizard;

pub use field::{Field, UnknownField};
pub use record::{FieldValue, Preference, SignupRecord};
pub use schema::{Schema, ValidationErrors, Validator};
pub use steps::SignupStep;
pub use wizard::{
    SignupWizard, Submission, SubmissionError, SubmitOutcome, Submitter, GENERIC_FAILURE,
};
