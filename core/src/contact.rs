pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

pub const STATUS_CLASS: &str = "form-status";
pub const STATUS_SUCCESS_CLASS: &str = "success";
pub const STATUS_SENDING: &str = "Sending message...";
pub const STATUS_SENT: &str = "Message sent successfully! Thank you for contacting me.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn element_id(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    fn index(self) -> usize {
        match self {
            ContactField::Name => 0,
            ContactField::Email => 1,
            ContactField::Message => 2,
        }
    }
}

/// A failed field check. `Display` is the inline text shown under the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

impl FieldError {
    pub fn field(self) -> ContactField {
        match self {
            FieldError::NameRequired | FieldError::NameTooShort => ContactField::Name,
            FieldError::EmailRequired | FieldError::EmailInvalid => ContactField::Email,
            FieldError::MessageRequired | FieldError::MessageTooShort => ContactField::Message,
        }
    }
}

/// Whitespace as browsers see it in form values: the ECMAScript WhiteSpace
/// and LineTerminator sets. Narrower than `char::is_whitespace` (no U+0085)
/// and includes U+FEFF.
pub fn is_form_space(ch: char) -> bool {
    matches!(
        ch,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Length in UTF-16 code units, the unit the minimum lengths are written in.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn validate_field(field: ContactField, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim_matches(is_form_space);
    match field {
        ContactField::Name => {
            if value.is_empty() {
                Err(FieldError::NameRequired)
            } else if utf16_len(value) < NAME_MIN_CHARS {
                Err(FieldError::NameTooShort)
            } else {
                Ok(())
            }
        }
        ContactField::Email => {
            if value.is_empty() {
                Err(FieldError::EmailRequired)
            } else if !is_valid_email(value) {
                Err(FieldError::EmailInvalid)
            } else {
                Ok(())
            }
        }
        ContactField::Message => {
            if value.is_empty() {
                Err(FieldError::MessageRequired)
            } else if utf16_len(value) < MESSAGE_MIN_CHARS {
                Err(FieldError::MessageTooShort)
            } else {
                Ok(())
            }
        }
    }
}

/// `local@domain.tld` shape: exactly one `@`, no whitespace, a non-empty
/// local part, and a `.` inside the domain with text on both sides.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(is_form_space) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(idx, ch)| ch == '.' && idx > 0 && idx + 1 < domain.len())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactReport {
    errors: [Option<FieldError>; 3],
}

impl ContactReport {
    pub fn is_valid(&self) -> bool {
        self.errors.iter().all(Option::is_none)
    }

    pub fn error(&self, field: ContactField) -> Option<FieldError> {
        self.errors[field.index()]
    }

    pub fn failures(&self) -> impl Iterator<Item = FieldError> + '_ {
        self.errors.iter().flatten().copied()
    }
}

pub fn validate_contact(draft: &ContactDraft) -> ContactReport {
    let mut report = ContactReport::default();
    for field in ContactField::ALL {
        report.errors[field.index()] = validate_field(field, draft.value(field)).err();
    }
    report
}
