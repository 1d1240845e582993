//! OTP verification of a contact, and the signup wizard built from two of them.

use super::FlowError;

/// Verification state of one contact (an email address or a phone number).
///
/// `Unverified → CodeSent → Verified`. Editing the contact value drops back
/// to `Unverified` from any state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContactVerification {
    #[default]
    Unverified,
    /// An OTP was sent to `value`.
    CodeSent { value: String },
    /// `value` was confirmed by OTP.
    Verified { value: String },
}

impl ContactVerification {
    fn name(&self) -> &'static str {
        match self {
            ContactVerification::Unverified => "unverified",
            ContactVerification::CodeSent { .. } => "waiting for the code",
            ContactVerification::Verified { .. } => "verified",
        }
    }

    /// Record that an OTP went out. Resending to the same or a new value while
    /// waiting is allowed; a verified contact must be edited first.
    pub fn code_sent(&mut self, value: &str) -> Result<(), FlowError> {
        match self {
            ContactVerification::Verified { .. } => {
                Err(FlowError::out_of_order(self.name(), "send a code"))
            }
            _ => {
                *self = ContactVerification::CodeSent {
                    value: value.to_string(),
                };
                Ok(())
            }
        }
    }

    /// Record a successful OTP check. Only legal while waiting for the code.
    pub fn verified(&mut self) -> Result<(), FlowError> {
        match self {
            ContactVerification::CodeSent { value } => {
                let value = std::mem::take(value);
                *self = ContactVerification::Verified { value };
                Ok(())
            }
            _ => Err(FlowError::out_of_order(self.name(), "verify")),
        }
    }

    /// The user edited the contact field. Any progress for the old value is
    /// discarded unless the text is unchanged.
    pub fn edited(&mut self, new_value: &str) {
        let unchanged = self.value().is_some_and(|v| v == new_value);
        if !unchanged {
            *self = ContactVerification::Unverified;
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            ContactVerification::Unverified => None,
            ContactVerification::CodeSent { value } | ContactVerification::Verified { value } => {
                Some(value.as_str())
            }
        }
    }

    pub fn is_code_sent(&self) -> bool {
        matches!(self, ContactVerification::CodeSent { .. })
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, ContactVerification::Verified { .. })
    }
}

/// Where the signup wizard is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignupStep {
    VerifyEmail,
    VerifyPhone,
    Details,
    Complete,
}

impl SignupStep {
    pub fn title(self) -> &'static str {
        match self {
            SignupStep::VerifyEmail => "Verify your email",
            SignupStep::VerifyPhone => "Verify your phone",
            SignupStep::Details => "Complete your profile",
            SignupStep::Complete => "All set",
        }
    }

    /// 1-based position for the step indicator.
    pub fn number(self) -> usize {
        self as usize + 1
    }
}

/// Signup wizard: email, then phone, then the rest of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupProgress {
    pub email: ContactVerification,
    pub phone: ContactVerification,
    complete: bool,
}

impl SignupProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> SignupStep {
        if self.complete {
            SignupStep::Complete
        } else if !self.email.is_verified() {
            SignupStep::VerifyEmail
        } else if !self.phone.is_verified() {
            SignupStep::VerifyPhone
        } else {
            SignupStep::Details
        }
    }

    /// The phone field stays disabled until the email is verified.
    pub fn phone_unlocked(&self) -> bool {
        self.email.is_verified()
    }

    /// Name/password fields stay disabled until both contacts are verified.
    pub fn details_unlocked(&self) -> bool {
        self.email.is_verified() && self.phone.is_verified()
    }

    pub fn send_phone_code(&mut self, value: &str) -> Result<(), FlowError> {
        if !self.phone_unlocked() {
            return Err(FlowError::out_of_order("email is unverified", "send a phone code"));
        }
        self.phone.code_sent(value)
    }

    /// Registration succeeded.
    pub fn complete(&mut self) -> Result<(), FlowError> {
        match self.current_step() {
            SignupStep::Details => {
                self.complete = true;
                Ok(())
            }
            SignupStep::Complete => Err(FlowError::out_of_order("complete", "register")),
            _ => Err(FlowError::out_of_order("contacts are unverified", "register")),
        }
    }

    /// The email field changed. Re-verifying the email also re-locks the phone.
    pub fn email_edited(&mut self, value: &str) {
        if self.complete {
            return;
        }
        self.email.edited(value);
        if !self.email.is_verified() {
            self.phone = ContactVerification::Unverified;
        }
    }

    pub fn phone_edited(&mut self, value: &str) {
        if self.complete {
            return;
        }
        self.phone.edited(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_moves_forward_only() {
        let mut c = ContactVerification::default();

        // Cannot verify before a code is sent
        assert!(c.verified().is_err());
        assert_eq!(c, ContactVerification::Unverified);

        c.code_sent("a@b.co").unwrap();
        assert!(c.is_code_sent());

        // Resend while waiting stays in CodeSent
        c.code_sent("a@b.co").unwrap();
        assert!(c.is_code_sent());

        c.verified().unwrap();
        assert!(c.is_verified());
        assert_eq!(c.value(), Some("a@b.co"));

        // Verified twice is rejected, and so is a new code without editing
        assert!(c.verified().is_err());
        assert!(c.code_sent("a@b.co").is_err());
        assert!(c.is_verified());
    }

    #[test]
    fn test_editing_contact_resets() {
        let mut c = ContactVerification::default();
        c.code_sent("a@b.co").unwrap();
        c.verified().unwrap();

        // Same text keeps the verification
        c.edited("a@b.co");
        assert!(c.is_verified());

        c.edited("a@b.com");
        assert_eq!(c, ContactVerification::Unverified);
    }

    #[test]
    fn test_signup_unlocks_in_order() {
        let mut p = SignupProgress::new();
        assert_eq!(p.current_step(), SignupStep::VerifyEmail);
        assert!(!p.phone_unlocked());
        assert!(!p.details_unlocked());

        // Phone code cannot go out before the email is verified
        assert!(p.send_phone_code("9876543210").is_err());
        assert_eq!(p.phone, ContactVerification::Unverified);

        p.email.code_sent("a@b.co").unwrap();
        assert_eq!(p.current_step(), SignupStep::VerifyEmail);
        p.email.verified().unwrap();
        assert_eq!(p.current_step(), SignupStep::VerifyPhone);
        assert!(p.phone_unlocked());
        assert!(!p.details_unlocked());

        // Registering now is out of order
        assert!(p.complete().is_err());

        p.send_phone_code("9876543210").unwrap();
        p.phone.verified().unwrap();
        assert_eq!(p.current_step(), SignupStep::Details);
        assert!(p.details_unlocked());

        p.complete().unwrap();
        assert_eq!(p.current_step(), SignupStep::Complete);
        assert!(p.complete().is_err());
    }

    #[test]
    fn test_editing_email_relocks_phone() {
        let mut p = SignupProgress::new();
        p.email.code_sent("a@b.co").unwrap();
        p.email.verified().unwrap();
        p.send_phone_code("9876543210").unwrap();
        p.phone.verified().unwrap();
        assert!(p.details_unlocked());

        p.email_edited("other@b.co");
        assert_eq!(p.current_step(), SignupStep::VerifyEmail);
        assert!(!p.phone.is_verified());
        assert!(!p.details_unlocked());
    }

    #[test]
    fn test_editing_after_complete_is_ignored() {
        let mut p = SignupProgress::new();
        p.email.code_sent("a@b.co").unwrap();
        p.email.verified().unwrap();
        p.send_phone_code("9876543210").unwrap();
        p.phone.verified().unwrap();
        p.complete().unwrap();

        p.email_edited("x@y.co");
        p.phone_edited("9000000000");
        assert_eq!(p.current_step(), SignupStep::Complete);
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(SignupStep::VerifyEmail.number(), 1);
        assert_eq!(SignupStep::Details.number(), 3);
        assert!(SignupStep::VerifyPhone < SignupStep::Details);
    }
}
