use qrforge_types::{ContentType, VcardFields};

use super::{Encode, Encoded, require_any};
use crate::Result;
use crate::escape::escape_vcard_field as esc;

impl Encode for VcardFields {
    const CONTENT_TYPE: ContentType = ContentType::Vcard;

    fn encode(&self) -> Result<Encoded> {
        let first = self.first_name.trim();
        let last = self.last_name.trim();
        let organization = self.organization.trim();

        require_any(
            Self::CONTENT_TYPE,
            &[
                ("firstName", first),
                ("lastName", last),
                ("organization", organization),
            ],
        )?;

        let full_name = [first, last]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let display = if full_name.is_empty() {
            organization.to_string()
        } else {
            full_name
        };

        let mut lines = vec![
            "BEGIN:VCARD".to_string(),
            "VERSION:3.0".to_string(),
            format!("N:{};{};;;", esc(last), esc(first)),
            format!("FN:{}", esc(&display)),
        ];

        let optional = [
            ("ORG", organization),
            ("TITLE", self.title.trim()),
            ("TEL;TYPE=WORK,VOICE", self.phone.trim()),
            ("TEL;TYPE=CELL", self.mobile.trim()),
            ("EMAIL", self.email.trim()),
            ("URL", self.website.trim()),
        ];
        for (property, value) in optional {
            if !value.is_empty() {
                lines.push(format!("{}:{}", property, esc(value)));
            }
        }

        let street = self.street.trim();
        let city = self.city.trim();
        let postal_code = self.postal_code.trim();
        let country = self.country.trim();
        if [street, city, postal_code, country].iter().any(|v| !v.is_empty()) {
            lines.push(format!(
                "ADR;TYPE=WORK:;;{};{};;{};{}",
                esc(street),
                esc(city),
                esc(postal_code),
                esc(country)
            ));
        }

        lines.push("END:VCARD".to_string());

        Ok(Encoded::new(lines.join("\n"), display))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EncodeError;

    #[test]
    fn test_organization_alone_is_enough() {
        let card = VcardFields {
            organization: "Acme, Inc.".to_string(),
            ..Default::default()
        };
        let encoded = card.encode().unwrap();
        assert_eq!(
            encoded.value,
            "BEGIN:VCARD\nVERSION:3.0\nN:;;;;\nFN:Acme\\, Inc.\nORG:Acme\\, Inc.\nEND:VCARD"
        );
        assert_eq!(encoded.label, "Acme, Inc.");
    }

    #[test]
    fn test_all_empty_rejected_naming_fields() {
        let err = VcardFields::default().encode().unwrap_err();
        assert_eq!(
            err,
            EncodeError::MissingAnyOf {
                content_type: ContentType::Vcard,
                fields: vec!["firstName", "lastName", "organization"],
            }
        );
    }

    #[test]
    fn test_address_line_only_when_address_given() {
        let mut card = VcardFields {
            first_name: "Ada".to_string(),
            ..Default::default()
        };
        assert!(!card.encode().unwrap().value.contains("ADR"));

        card.city = "London".to_string();
        assert!(
            card.encode()
                .unwrap()
                .value
                .contains("ADR;TYPE=WORK:;;;London;;;")
        );
    }
}
