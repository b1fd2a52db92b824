// Engine module - content encoding (escaping, timestamps, URL heuristics, per-type encoders)
// This layer sits between the field records (types) and the settings/history runtime

pub mod datetime;
pub mod encoder;
pub mod error;
pub mod escape;
pub mod url;

pub use datetime::format_timestamp;
pub use encoder::{Encode, Encoded};
pub use error::{EncodeError, Result};
pub use escape::{escape_vcard_field, escape_wifi_field};
pub use url::normalize_url;

use qrforge_types::ContentPayload;

// Façade API - the runtime should call this instead of reaching into encoder modules

/// Validate and encode one content payload into its final text.
pub fn encode(payload: &ContentPayload) -> Result<Encoded> {
    match payload {
        ContentPayload::Url(fields) => fields.encode(),
        ContentPayload::Wifi(fields) => fields.encode(),
        ContentPayload::Vcard(fields) => fields.encode(),
        ContentPayload::Vevent(fields) => fields.encode(),
        ContentPayload::Email(fields) => fields.encode(),
        ContentPayload::Sms(fields) => fields.encode(),
        ContentPayload::Geo(fields) => fields.encode(),
        ContentPayload::Whatsapp(fields) => fields.encode(),
        ContentPayload::WhatsappGroup(fields) => fields.encode(),
        ContentPayload::Phone(fields) => fields.encode(),
        ContentPayload::Pix(fields) => fields.encode(),
        ContentPayload::Appstore(fields) => fields.encode(),
        ContentPayload::MediaLink(fields) => fields.encode(),
        ContentPayload::Meeting(fields) => fields.encode(),
        ContentPayload::Menu(fields) => fields.encode(),
        ContentPayload::Coupon(fields) => fields.encode(),
    }
}
