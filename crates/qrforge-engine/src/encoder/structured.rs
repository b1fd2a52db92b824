//! Plain-text payloads with no standard scheme.
//!
//! Pipe-delimited records keep every slot, empty or not, so a reader can
//! split on unescaped `|` positionally. Inside a slot `\` and `|` are
//! backslash-escaped and line breaks become spaces, so a record header is
//! always a single line.

use qrforge_types::{ContentType, CouponFields, MeetingFields, MenuFields, PixFields};

use super::{Encode, Encoded, require, require_any};
use crate::Result;
use crate::url::normalize_url;

fn pipe_record(prefix: &str, slots: &[&str]) -> String {
    let slots: Vec<String> = slots.iter().map(|s| escape_slot(s)).collect();
    format!("{}:{}", prefix, slots.join("|"))
}

fn escape_slot(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.trim().chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '|' => out.push_str("\\|"),
            '\r' => {
                if chars.peek() != Some(&'\n') {
                    out.push(' ');
                }
            }
            '\n' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

impl Encode for PixFields {
    const CONTENT_TYPE: ContentType = ContentType::Pix;

    fn encode(&self) -> Result<Encoded> {
        require(Self::CONTENT_TYPE, &[("key", &self.key)])?;

        let value = pipe_record(
            "PIX",
            &[
                &self.key,
                &self.name,
                &self.city,
                &self.amount,
                &self.description,
            ],
        );
        Ok(Encoded::new(value, self.key.trim()))
    }
}

impl Encode for MeetingFields {
    const CONTENT_TYPE: ContentType = ContentType::Meeting;

    fn encode(&self) -> Result<Encoded> {
        require_any(
            Self::CONTENT_TYPE,
            &[("url", &self.url), ("meetingId", &self.meeting_id)],
        )?;

        let url = normalize_url(&self.url);
        let lines: Vec<String> = [
            ("Meeting", self.platform.trim()),
            ("Link", url.as_str()),
            ("ID", self.meeting_id.trim()),
            ("Passcode", self.passcode.trim()),
        ]
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{}: {}", k, v))
        .collect();

        let label = if url.is_empty() {
            self.meeting_id.trim().to_string()
        } else {
            url.clone()
        };
        Ok(Encoded::new(lines.join("\n"), label))
    }
}

impl Encode for MenuFields {
    const CONTENT_TYPE: ContentType = ContentType::Menu;

    fn encode(&self) -> Result<Encoded> {
        require(Self::CONTENT_TYPE, &[("restaurant", &self.restaurant)])?;

        let restaurant = self.restaurant.trim();
        let mut lines = vec![pipe_record("MENU", &[restaurant, &normalize_url(&self.url)])];
        lines.extend(
            self.items
                .lines()
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from),
        );
        Ok(Encoded::new(lines.join("\n"), restaurant))
    }
}

impl Encode for CouponFields {
    const CONTENT_TYPE: ContentType = ContentType::Coupon;

    fn encode(&self) -> Result<Encoded> {
        require(Self::CONTENT_TYPE, &[("code", &self.code)])?;

        let value = pipe_record(
            "COUPON",
            &[&self.code, &self.discount, &self.expiry, &self.description],
        );
        Ok(Encoded::new(value, self.code.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pix_keeps_empty_slots() {
        let fields = PixFields {
            key: "pix@example.com".to_string(),
            city: "Recife".to_string(),
            amount: "10.50".to_string(),
            ..Default::default()
        };
        let encoded = fields.encode().unwrap();
        assert_eq!(encoded.value, "PIX:pix@example.com||Recife|10.50|");
        assert_eq!(encoded.label, "pix@example.com");
    }

    #[test]
    fn test_pix_requires_key() {
        let err = PixFields::default().encode().unwrap_err();
        assert_eq!(err.fields(), vec!["key"]);
    }

    #[test]
    fn test_meeting_lines_only_when_set() {
        let fields = MeetingFields {
            platform: "Zoom".to_string(),
            meeting_id: "123 456 789".to_string(),
            ..Default::default()
        };
        let encoded = fields.encode().unwrap();
        assert_eq!(encoded.value, "Meeting: Zoom\nID: 123 456 789");
        assert_eq!(encoded.label, "123 456 789");
    }

    #[test]
    fn test_meeting_needs_link_or_id() {
        let fields = MeetingFields {
            platform: "Zoom".to_string(),
            passcode: "secret".to_string(),
            ..Default::default()
        };
        let err = fields.encode().unwrap_err();
        assert_eq!(err.fields(), vec!["url", "meetingId"]);
    }

    #[test]
    fn test_menu_skips_blank_items() {
        let fields = MenuFields {
            restaurant: "Casa".to_string(),
            url: "casa.example/menu".to_string(),
            items: "Soup\n\n  Bread  \n".to_string(),
        };
        assert_eq!(
            fields.encode().unwrap().value,
            "MENU:Casa|https://casa.example/menu\nSoup\nBread"
        );
    }

    #[test]
    fn test_delimiters_in_slots_are_escaped() {
        let fields = CouponFields {
            code: "A|B".to_string(),
            description: "line one\r\nline two".to_string(),
            discount: r"10\off".to_string(),
            ..Default::default()
        };
        assert_eq!(
            fields.encode().unwrap().value,
            r"COUPON:A\|B|10\\off||line one line two"
        );

        let menu = MenuFields {
            restaurant: "Fish|Chips\nBar".to_string(),
            items: "Cod".to_string(),
            ..Default::default()
        };
        assert_eq!(menu.encode().unwrap().value, "MENU:Fish\\|Chips Bar|\nCod");
    }

    #[test]
    fn test_coupon() {
        let fields = CouponFields {
            code: "SAVE10".to_string(),
            description: "Ten off".to_string(),
            discount: "10%".to_string(),
            expiry: "2025-01-31".to_string(),
        };
        assert_eq!(
            fields.encode().unwrap().value,
            "COUPON:SAVE10|10%|2025-01-31|Ten off"
        );
    }
}
