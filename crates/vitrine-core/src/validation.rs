// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Local form validation.
//
// Every form is checked before it leaves the device so the user gets an
// immediate, specific message instead of a server round-trip.  Messages are
// the exact text shown in the UI.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, VitrineError};
use crate::types::{
    CareerApplication, EnquiryForm, LoginIdentifier, MAX_RESUME_BYTES, QuotationRequest, Resume,
    UserProfile,
};

/// Ten-digit Indian mobile number starting with 6-9.
static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9]\d{9}$").expect("static regex"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex"));

/// Looser check used by the careers form.
static LOOSE_EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("static regex"));

/// Whether `email` looks like a deliverable address.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Whether `number` is a valid mobile number.
pub fn is_valid_mobile(number: &str) -> bool {
    MOBILE_RE.is_match(number)
}

impl LoginIdentifier {
    /// Classify and validate what the user typed into the login box.
    ///
    /// Anything containing `@` is treated as an email address and passed
    /// through unchecked; everything else must be a mobile number.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(VitrineError::validation(
                "Please enter your email or mobile number",
            ));
        }
        if input.contains('@') {
            return Ok(Self::Email(input.to_owned()));
        }
        if !is_valid_mobile(input) {
            return Err(VitrineError::validation("Invalid mobile number format"));
        }
        Ok(Self::Mobile(input.to_owned()))
    }
}

impl EnquiryForm {
    pub fn validate(&self) -> Result<()> {
        if self.subject.is_empty() || self.query.is_empty() {
            return Err(VitrineError::validation("Please fill in all fields."));
        }
        Ok(())
    }
}

impl QuotationRequest {
    /// Check fields in on-screen order; the first problem wins.
    pub fn validate(&self) -> Result<()> {
        if self.client_kind.is_none() {
            return Err(VitrineError::validation("Please select who you are."));
        }
        if self.client_description.trim().is_empty() {
            return Err(VitrineError::validation("Please describe who you are."));
        }
        if self.products.is_empty() {
            return Err(VitrineError::validation(
                "Please select at least one service.",
            ));
        }
        if self.product_description.trim().is_empty() {
            return Err(VitrineError::validation(
                "Please describe the product/service.",
            ));
        }
        if self.email.trim().is_empty() {
            return Err(VitrineError::validation("Please enter your email."));
        }
        if !is_valid_email(&self.email) {
            return Err(VitrineError::validation(
                "Please enter a valid email address.",
            ));
        }
        Ok(())
    }
}

impl CareerApplication {
    /// Validate the application.  A malformed email is reported on its own;
    /// otherwise every missing field is listed in a single message.
    pub fn validate(&self) -> Result<()> {
        if !self.email.is_empty() && !LOOSE_EMAIL_RE.is_match(&self.email) {
            return Err(VitrineError::validation(
                "Please enter a valid email address",
            ));
        }

        let labels = [
            "Name",
            "Email",
            "Contact",
            "Address",
            "Experience",
            "Expected Salary",
            "Qualification",
            "Job Title",
            "Current Employer",
        ];
        let mut missing: Vec<&str> = self
            .text_fields()
            .iter()
            .zip(labels)
            .filter(|((_, value), _)| value.trim().is_empty())
            .map(|(_, label)| label)
            .collect();

        if self.resume.is_none() {
            missing.push("Resume");
        }

        if !missing.is_empty() {
            return Err(VitrineError::validation(format!(
                "Please complete: {}",
                missing.join(", ")
            )));
        }
        Ok(())
    }
}

impl Resume {
    /// Wrap picked file bytes, refusing anything over the size limit.
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        let size = bytes.len() as u64;
        if size > MAX_RESUME_BYTES {
            return Err(VitrineError::FileTooLarge {
                size,
                limit: MAX_RESUME_BYTES,
            });
        }
        Ok(Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        })
    }
}

impl UserProfile {
    pub fn validate_for_update(&self) -> Result<()> {
        if self.name.is_empty() || self.email.is_empty() || self.mobile_no.is_empty() {
            return Err(VitrineError::validation("Please fill all required fields"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClientKind, QuotationProduct};

    fn message(err: VitrineError) -> String {
        match err {
            VitrineError::Validation(m) => m,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn login_identifier_classification() {
        assert_eq!(
            LoginIdentifier::parse("asha@example.com").expect("email"),
            LoginIdentifier::Email("asha@example.com".into())
        );
        assert_eq!(
            LoginIdentifier::parse("9876543210").expect("mobile"),
            LoginIdentifier::Mobile("9876543210".into())
        );
        assert_eq!(
            message(LoginIdentifier::parse("5876543210").unwrap_err()),
            "Invalid mobile number format"
        );
        assert_eq!(
            message(LoginIdentifier::parse("98765").unwrap_err()),
            "Invalid mobile number format"
        );
        assert!(LoginIdentifier::parse("").is_err());
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
    }

    #[test]
    fn enquiry_needs_subject_and_query() {
        let mut form = EnquiryForm {
            subject: "Website".into(),
            ..Default::default()
        };
        assert!(form.validate().is_err());
        form.query = "How much?".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn quotation_reports_first_problem() {
        let mut req = QuotationRequest::default();
        assert_eq!(message(req.validate().unwrap_err()), "Please select who you are.");

        req.client_kind = Some(ClientKind::Firm);
        req.client_description = "Accounting firm".into();
        assert_eq!(
            message(req.validate().unwrap_err()),
            "Please select at least one service."
        );

        req.products = vec![QuotationProduct::Website];
        req.product_description = "Brochure site".into();
        req.email = "not-an-email".into();
        assert_eq!(
            message(req.validate().unwrap_err()),
            "Please enter a valid email address."
        );

        req.email = "owner@firm.in".into();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn career_lists_missing_fields() {
        let app = CareerApplication {
            name: "Ravi".into(),
            email: "ravi@mail.com".into(),
            contact: "9876543210".into(),
            address: "Pune".into(),
            experience: "2 years".into(),
            expected_salary: String::new(),
            qualification: "B.E.".into(),
            job_title: "Developer".into(),
            current_employer: "  ".into(),
            resume: None,
        };
        assert_eq!(
            message(app.validate().unwrap_err()),
            "Please complete: Expected Salary, Current Employer, Resume"
        );
    }

    #[test]
    fn career_bad_email_reported_alone() {
        let app = CareerApplication {
            email: "ravi at mail".into(),
            ..Default::default()
        };
        assert_eq!(
            message(app.validate().unwrap_err()),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn oversized_resume_rejected() {
        let bytes = vec![0u8; (MAX_RESUME_BYTES + 1) as usize];
        assert!(matches!(
            Resume::new("cv.pdf", "application/pdf", bytes),
            Err(VitrineError::FileTooLarge { .. })
        ));
        assert!(Resume::new("cv.pdf", "application/pdf", vec![1, 2, 3]).is_ok());
    }
}
