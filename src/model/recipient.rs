use crate::utils::clean_text;

/// The institution a quotation is addressed to.
///
/// Fields are coerced to the document's printable encoding on construction, so the renderer
/// never sees characters it cannot draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipient {
    org: String,
    location: String,
    phone: String,
}

impl Recipient {
    pub fn new(
        org: impl AsRef<str>,
        location: impl AsRef<str>,
        phone: impl AsRef<str>,
    ) -> Self {
        Self {
            org: clean_text(org.as_ref()),
            location: clean_text(location.as_ref()),
            phone: clean_text(phone.as_ref()),
        }
    }

    pub fn org(&self) -> &str {
        &self.org
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_coerces_text() {
        let recipient = Recipient::new("St Mary\u{2013}College", "Hanamkonda", "98480 00000");
        assert_eq!(recipient.org(), "St Mary-College");
    }
}
