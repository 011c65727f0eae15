#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// How long the success acknowledgment stays visible before the form
/// returns to editing.
pub const ACK_RESET_MS: u32 = 3000;

/// Subjects selectable in the contact form.
///
/// The form's `<select>` also renders an empty-valued placeholder option,
/// which is disabled and never a valid selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Subject {
    Feedback,
    Bug,
    Feature,
}

impl Subject {
    pub const ALL: [Self; 3] = [Self::Feedback, Self::Bug, Self::Feature];

    pub fn value(self) -> &'static str {
        match self {
            Self::Feedback => "feedback",
            Self::Bug => "bug",
            Self::Feature => "feature",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Feedback => "Feedback",
            Self::Bug => "Bug Report",
            Self::Feature => "Feature Request",
        }
    }

    /// Parse a select value. The placeholder's empty value parses to `None`.
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "feedback" => Some(Self::Feedback),
            "bug" => Some(Self::Bug),
            "feature" => Some(Self::Feature),
            _ => None,
        }
    }
}

/// The four editable fields of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// Current field values, all initially empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    /// A field counts as missing only when it is the empty string.
    /// Whitespace-only input is accepted; there is no trimming.
    fn has_empty(&self) -> bool {
        self.name.is_empty()
            || self.email.is_empty()
            || self.subject.is_empty()
            || self.message.is_empty()
    }
}

/// Where the form is in its validate → submit → acknowledge → reset cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Editing,
    Error,
    Acknowledged,
}

/// Contact form state machine.
///
/// `Error` holds only while the last submit found an empty field and no
/// field has changed since. `Acknowledged` is transient: the fields reset
/// synchronously with the transition and the component schedules the
/// [`ACK_RESET_MS`] return to `Editing`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub fields: ContactFields,
    pub status: SubmitStatus,
}

impl ContactFormState {
    /// Apply a field edit. The value lands first; clearing a standing error
    /// comes second, so no keystroke is lost.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Subject => self.fields.subject = value,
            Field::Message => self.fields.message = value,
        }
        if self.status == SubmitStatus::Error {
            self.status = SubmitStatus::Editing;
        }
    }

    /// Apply a subject selection from the form's `<select>`.
    ///
    /// Only the enumerated subjects are storable; the placeholder (or any
    /// non-enumerated value) clears the subject, so it cannot sneak past
    /// validation. Clears a standing error like any other edit.
    pub fn select_subject(&mut self, selection: Option<Subject>) {
        let value = selection.map_or("", Subject::value);
        self.set_field(Field::Subject, value.to_owned());
    }

    /// Validate and submit.
    ///
    /// Any empty field rejects the attempt: status becomes `Error` and the
    /// entered values are retained. Otherwise the form acknowledges and the
    /// fields clear immediately — before the reset delay — so a submit
    /// inside the acknowledgment window can only fail validation.
    pub fn submit(&mut self) {
        if self.fields.has_empty() {
            self.status = SubmitStatus::Error;
        } else {
            self.fields = ContactFields::default();
            self.status = SubmitStatus::Acknowledged;
        }
    }

    /// Timer callback: end the acknowledgment window. No-op unless the form
    /// is still acknowledged.
    pub fn acknowledge_elapsed(&mut self) {
        if self.status == SubmitStatus::Acknowledged {
            self.status = SubmitStatus::Editing;
        }
    }
}
