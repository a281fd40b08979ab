//! Contact intake: validation and the `mailto:` handoff.

use crate::config::PageConfig;
use crate::error::{FolioError, FolioResult};
use crate::i18n;
use folio_types::Locale;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        })
    }
}

/// Raw form values as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Form values after trimming, all guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> FolioResult<ValidContact> {
        let required = |field: ContactField, value: &str| -> FolioResult<String> {
            let value = value.trim();
            if value.is_empty() {
                return Err(FolioError::MissingField(field));
            }
            Ok(value.to_owned())
        };
        Ok(ValidContact {
            name: required(ContactField::Name, &self.name)?,
            email: required(ContactField::Email, &self.email)?,
            message: required(ContactField::Message, &self.message)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailHandoff {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailHandoff {
    pub fn from_contact(contact: &ValidContact, config: &PageConfig, locale: Locale) -> Self {
        let (name_label, message_label) = i18n::mail_labels(locale);
        Self {
            recipient: config.recipient.clone(),
            subject: format!("{} – {}", config.subject_prefix, contact.name),
            body: format!(
                "{name_label}: {}\nEmail: {}\n\n{message_label}:\n{}",
                contact.name, contact.email, contact.message
            ),
        }
    }

    /// `mailto:` URL with subject and body percent-encoded component-wise.
    pub fn to_url(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

/// Validate and build the handoff URL in one step.
pub fn submit(form: &ContactForm, config: &PageConfig, locale: Locale) -> FolioResult<String> {
    let contact = form.validate()?;
    Ok(MailHandoff::from_contact(&contact, config, locale).to_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello".into(),
        }
    }

    #[test]
    fn handoff_carries_all_fields() -> anyhow::Result<()> {
        let contact = ada().validate()?;
        let handoff = MailHandoff::from_contact(&contact, &PageConfig::default(), Locale::It);
        assert!(handoff.subject.contains("Ada"));
        assert!(handoff.body.contains("Ada"));
        assert!(handoff.body.contains("ada@example.com"));
        assert!(handoff.body.contains("Hello"));

        let url = handoff.to_url();
        assert!(url.starts_with("mailto:andrea.cr790@gmail.com?subject="));
        assert!(url.contains(&*urlencoding::encode("ada@example.com")));
        assert!(url.contains("Ada"));
        assert!(url.contains("Hello"));
        assert!(!url.contains('\n'));
        assert!(!url.contains(' '));
        Ok(())
    }

    #[test]
    fn fields_are_trimmed() -> anyhow::Result<()> {
        let form = ContactForm {
            name: "  Ada ".into(),
            ..ada()
        };
        assert_eq!(form.validate()?.name, "Ada");
        Ok(())
    }

    #[test]
    fn any_blank_field_aborts() {
        let blanks = [
            (ContactForm { name: " ".into(), ..ada() }, ContactField::Name),
            (ContactForm { email: String::new(), ..ada() }, ContactField::Email),
            (ContactForm { message: "\n\t".into(), ..ada() }, ContactField::Message),
        ];
        for (form, field) in blanks {
            match submit(&form, &PageConfig::default(), Locale::It) {
                Err(FolioError::MissingField(missing)) => assert_eq!(missing, field),
                other => panic!("expected missing {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn english_body_labels() -> anyhow::Result<()> {
        let contact = ada().validate()?;
        let handoff = MailHandoff::from_contact(&contact, &PageConfig::default(), Locale::En);
        assert_eq!(handoff.body, "Name: Ada\nEmail: ada@example.com\n\nMessage:\nHello");
        Ok(())
    }
}
