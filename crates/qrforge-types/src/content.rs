use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Semantic category of the data encoded into a code.
///
/// Exactly one content type is active in a settings session. The serialized
/// identifiers are shared with persisted history and visible-type lists, so
/// they must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentType {
    Url,
    Wifi,
    Vcard,
    Vevent,
    Email,
    Sms,
    Geo,
    Whatsapp,
    WhatsappGroup,
    Phone,
    Pix,
    Appstore,
    MediaLink,
    Meeting,
    Menu,
    Coupon,
}

impl ContentType {
    /// Every content type in declaration order.
    pub const ALL: [ContentType; 16] = [
        ContentType::Url,
        ContentType::Wifi,
        ContentType::Vcard,
        ContentType::Vevent,
        ContentType::Email,
        ContentType::Sms,
        ContentType::Geo,
        ContentType::Whatsapp,
        ContentType::WhatsappGroup,
        ContentType::Phone,
        ContentType::Pix,
        ContentType::Appstore,
        ContentType::MediaLink,
        ContentType::Meeting,
        ContentType::Menu,
        ContentType::Coupon,
    ];

    /// Types exposed by a fresh installation.
    pub const DEFAULT_VISIBLE: [ContentType; 9] = [
        ContentType::Url,
        ContentType::Wifi,
        ContentType::Vcard,
        ContentType::Vevent,
        ContentType::Email,
        ContentType::Sms,
        ContentType::Geo,
        ContentType::Whatsapp,
        ContentType::Phone,
    ];

    /// Stable identifier, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Url => "url",
            ContentType::Wifi => "wifi",
            ContentType::Vcard => "vcard",
            ContentType::Vevent => "vevent",
            ContentType::Email => "email",
            ContentType::Sms => "sms",
            ContentType::Geo => "geo",
            ContentType::Whatsapp => "whatsapp",
            ContentType::WhatsappGroup => "whatsappGroup",
            ContentType::Phone => "phone",
            ContentType::Pix => "pix",
            ContentType::Appstore => "appstore",
            ContentType::MediaLink => "mediaLink",
            ContentType::Meeting => "meeting",
            ContentType::Menu => "menu",
            ContentType::Coupon => "coupon",
        }
    }

    pub fn default_visible() -> Vec<ContentType> {
        Self::DEFAULT_VISIBLE.to_vec()
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = Error;

    /// Accepts `whatsappGroup`, `whatsapp-group` and `WHATSAPP_GROUP` alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = fold_identifier(s);
        ContentType::ALL
            .into_iter()
            .find(|ty| fold_identifier(ty.as_str()) == wanted)
            .ok_or_else(|| Error::UnknownContentType(s.trim().to_string()))
    }
}

/// Lowercase and drop `-`/`_` so identifiers compare across naming styles.
pub fn fold_identifier(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_names_match_identifiers() {
        for ty in ContentType::ALL {
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.as_str()));
        }
    }

    #[test]
    fn test_from_str_accepts_naming_styles() {
        assert_eq!(
            "whatsapp-group".parse::<ContentType>().unwrap(),
            ContentType::WhatsappGroup
        );
        assert_eq!(
            "MEDIA_LINK".parse::<ContentType>().unwrap(),
            ContentType::MediaLink
        );
        assert_eq!(" vevent ".parse::<ContentType>().unwrap(), ContentType::Vevent);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "barcode".parse::<ContentType>().unwrap_err();
        assert_eq!(err, Error::UnknownContentType("barcode".to_string()));
    }

    #[test]
    fn test_default_visible_is_subset_of_all() {
        for ty in ContentType::default_visible() {
            assert!(ContentType::ALL.contains(&ty));
        }
    }
}
