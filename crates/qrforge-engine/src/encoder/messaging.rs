use qrforge_types::{
    ContentType, EmailFields, PhoneFields, SmsFields, WhatsappFields, WhatsappGroupFields,
    digits_only,
};

use super::{Encode, Encoded, encode_component, require};
use crate::url::normalize_url;
use crate::{EncodeError, Result};

const WHATSAPP_GROUP_BASE: &str = "https://chat.whatsapp.com/";

impl Encode for EmailFields {
    const CONTENT_TYPE: ContentType = ContentType::Email;

    fn encode(&self) -> Result<Encoded> {
        require(Self::CONTENT_TYPE, &[("to", &self.to)])?;

        let to = self.to.trim();
        let value = format!(
            "mailto:{}?subject={}&body={}",
            to,
            encode_component(&self.subject),
            encode_component(&self.body)
        );
        Ok(Encoded::new(value, to))
    }
}

impl Encode for SmsFields {
    const CONTENT_TYPE: ContentType = ContentType::Sms;

    fn encode(&self) -> Result<Encoded> {
        require(Self::CONTENT_TYPE, &[("phone", &self.phone)])?;

        let phone = self.phone.trim();
        Ok(Encoded::new(
            format!("SMSTO:{}:{}", phone, self.message),
            phone,
        ))
    }
}

impl Encode for WhatsappFields {
    const CONTENT_TYPE: ContentType = ContentType::Whatsapp;

    /// The label keeps the number as typed; only the link is stripped to digits.
    fn encode(&self) -> Result<Encoded> {
        require(Self::CONTENT_TYPE, &[("phone", &self.phone)])?;

        let digits = dialable(Self::CONTENT_TYPE, "phone", &self.phone)?;
        let value = format!(
            "https://wa.me/{}?text={}",
            digits,
            encode_component(&self.message)
        );
        Ok(Encoded::new(value, self.phone.trim()))
    }
}

impl Encode for WhatsappGroupFields {
    const CONTENT_TYPE: ContentType = ContentType::WhatsappGroup;

    fn encode(&self) -> Result<Encoded> {
        require(Self::CONTENT_TYPE, &[("invite", &self.invite)])?;

        let invite = self.invite.trim();
        let value = if invite.contains("://") || invite.starts_with("chat.whatsapp.com") {
            normalize_url(invite)
        } else {
            format!("{}{}", WHATSAPP_GROUP_BASE, invite)
        };
        Ok(Encoded::new(value, invite))
    }
}

impl Encode for PhoneFields {
    const CONTENT_TYPE: ContentType = ContentType::Phone;

    fn encode(&self) -> Result<Encoded> {
        require(Self::CONTENT_TYPE, &[("number", &self.number)])?;

        let digits = dialable(Self::CONTENT_TYPE, "number", &self.number)?;
        Ok(Encoded::new(format!("tel:{}", digits), self.number.trim()))
    }
}

fn dialable(content_type: ContentType, field: &'static str, value: &str) -> Result<String> {
    let digits = digits_only(value);
    if digits.is_empty() {
        return Err(EncodeError::Format {
            content_type,
            field,
            reason: format!("'{}' contains no digits", value.trim()),
        });
    }
    Ok(digits)
}
