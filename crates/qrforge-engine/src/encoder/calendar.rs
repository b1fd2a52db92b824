use qrforge_types::{ContentType, VeventFields, is_blank};

use super::{Encode, Encoded, require};
use crate::datetime::format_timestamp;
use crate::escape::escape_vcard_field as esc;
use crate::{EncodeError, Result};

impl Encode for VeventFields {
    const CONTENT_TYPE: ContentType = ContentType::Vevent;

    /// End date and time fall back to the start values when left blank.
    fn encode(&self) -> Result<Encoded> {
        require(
            Self::CONTENT_TYPE,
            &[("summary", &self.summary), ("startDate", &self.start_date)],
        )?;

        let end_date = fallback(&self.end_date, &self.start_date);
        let end_time = fallback(&self.end_time, &self.start_time);

        let dtstart = format_timestamp(&self.start_date, &self.start_time, self.all_day)
            .ok_or_else(|| unparseable("startDate", &self.start_date))?;
        let dtend = format_timestamp(end_date, end_time, self.all_day)
            .ok_or_else(|| unparseable("endDate", end_date))?;

        let summary = self.summary.trim();
        let mut lines = vec![
            "BEGIN:VEVENT".to_string(),
            format!("SUMMARY:{}", esc(summary)),
        ];
        if !is_blank(&self.description) {
            lines.push(format!("DESCRIPTION:{}", esc(self.description.trim())));
        }
        if !is_blank(&self.location) {
            lines.push(format!("LOCATION:{}", esc(self.location.trim())));
        }
        lines.push(format!("DTSTART:{}", dtstart));
        lines.push(format!("DTEND:{}", dtend));
        lines.push("END:VEVENT".to_string());

        Ok(Encoded::new(lines.join("\n"), summary))
    }
}

fn fallback<'a>(value: &'a str, default: &'a str) -> &'a str {
    if is_blank(value) { default } else { value }
}

fn unparseable(field: &'static str, value: &str) -> EncodeError {
    EncodeError::Format {
        content_type: ContentType::Vevent,
        field,
        reason: format!("unparseable date '{}'", value.trim()),
    }
}
