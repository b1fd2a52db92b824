use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{ContentType, Error};

// ==========================================
// Per-type field records
// ==========================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UrlFields {
    pub text: String,
}

/// Authentication scheme advertised in a WiFi payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WifiEncryption {
    #[default]
    #[serde(rename = "WPA")]
    Wpa,
    #[serde(rename = "WEP")]
    Wep,
    #[serde(rename = "none")]
    None,
}

impl fmt::Display for WifiEncryption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WifiEncryption::Wpa => write!(f, "WPA"),
            WifiEncryption::Wep => write!(f, "WEP"),
            WifiEncryption::None => write!(f, "none"),
        }
    }
}

impl FromStr for WifiEncryption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wpa" | "wpa2" | "wpa3" => Ok(WifiEncryption::Wpa),
            "wep" => Ok(WifiEncryption::Wep),
            "none" | "nopass" | "open" | "" => Ok(WifiEncryption::None),
            _ => Err(Error::UnknownOption {
                kind: "wifi encryption",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WifiFields {
    pub ssid: String,
    pub password: String,
    pub encryption: WifiEncryption,
    pub hidden: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VcardFields {
    pub first_name: String,
    pub last_name: String,
    pub organization: String,
    pub title: String,
    pub phone: String,
    pub mobile: String,
    pub email: String,
    pub website: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VeventFields {
    pub summary: String,
    pub description: String,
    pub location: String,
    /// Calendar date, `YYYY-MM-DD`
    pub start_date: String,
    /// Wall-clock time, `HH:MM`
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub all_day: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailFields {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SmsFields {
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeoFields {
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WhatsappFields {
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WhatsappGroupFields {
    /// Invite code or full invite link
    pub invite: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhoneFields {
    pub number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PixFields {
    pub key: String,
    pub name: String,
    pub city: String,
    pub amount: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppstoreFields {
    pub app_name: String,
    pub ios_url: String,
    pub android_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaLinkFields {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeetingFields {
    pub platform: String,
    pub url: String,
    pub meeting_id: String,
    pub passcode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuFields {
    pub restaurant: String,
    pub url: String,
    /// One menu item per line
    pub items: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CouponFields {
    pub code: String,
    pub description: String,
    pub discount: String,
    pub expiry: String,
}

// ==========================================
// Discriminated union
// ==========================================

/// Field record of exactly one content type.
///
/// This is what an encoder consumes and what a history entry stores, so a
/// replay restores the fields of the entry's own type and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "fields", rename_all = "camelCase")]
pub enum ContentPayload {
    Url(UrlFields),
    Wifi(WifiFields),
    Vcard(VcardFields),
    Vevent(VeventFields),
    Email(EmailFields),
    Sms(SmsFields),
    Geo(GeoFields),
    Whatsapp(WhatsappFields),
    WhatsappGroup(WhatsappGroupFields),
    Phone(PhoneFields),
    Pix(PixFields),
    Appstore(AppstoreFields),
    MediaLink(MediaLinkFields),
    Meeting(MeetingFields),
    Menu(MenuFields),
    Coupon(CouponFields),
}

impl ContentPayload {
    pub fn content_type(&self) -> ContentType {
        match self {
            ContentPayload::Url(_) => ContentType::Url,
            ContentPayload::Wifi(_) => ContentType::Wifi,
            ContentPayload::Vcard(_) => ContentType::Vcard,
            ContentPayload::Vevent(_) => ContentType::Vevent,
            ContentPayload::Email(_) => ContentType::Email,
            ContentPayload::Sms(_) => ContentType::Sms,
            ContentPayload::Geo(_) => ContentType::Geo,
            ContentPayload::Whatsapp(_) => ContentType::Whatsapp,
            ContentPayload::WhatsappGroup(_) => ContentType::WhatsappGroup,
            ContentPayload::Phone(_) => ContentType::Phone,
            ContentPayload::Pix(_) => ContentType::Pix,
            ContentPayload::Appstore(_) => ContentType::Appstore,
            ContentPayload::MediaLink(_) => ContentType::MediaLink,
            ContentPayload::Meeting(_) => ContentType::Meeting,
            ContentPayload::Menu(_) => ContentType::Menu,
            ContentPayload::Coupon(_) => ContentType::Coupon,
        }
    }
}

/// Field records for every content type at once.
///
/// Inactive types keep their values so switching back and forth does not
/// lose input; only an explicit reset clears a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentFields {
    pub url: UrlFields,
    pub wifi: WifiFields,
    pub vcard: VcardFields,
    pub vevent: VeventFields,
    pub email: EmailFields,
    pub sms: SmsFields,
    pub geo: GeoFields,
    pub whatsapp: WhatsappFields,
    pub whatsapp_group: WhatsappGroupFields,
    pub phone: PhoneFields,
    pub pix: PixFields,
    pub appstore: AppstoreFields,
    pub media_link: MediaLinkFields,
    pub meeting: MeetingFields,
    pub menu: MenuFields,
    pub coupon: CouponFields,
}

impl ContentFields {
    /// Snapshot of one type's record.
    pub fn payload(&self, ty: ContentType) -> ContentPayload {
        match ty {
            ContentType::Url => ContentPayload::Url(self.url.clone()),
            ContentType::Wifi => ContentPayload::Wifi(self.wifi.clone()),
            ContentType::Vcard => ContentPayload::Vcard(self.vcard.clone()),
            ContentType::Vevent => ContentPayload::Vevent(self.vevent.clone()),
            ContentType::Email => ContentPayload::Email(self.email.clone()),
            ContentType::Sms => ContentPayload::Sms(self.sms.clone()),
            ContentType::Geo => ContentPayload::Geo(self.geo.clone()),
            ContentType::Whatsapp => ContentPayload::Whatsapp(self.whatsapp.clone()),
            ContentType::WhatsappGroup => {
                ContentPayload::WhatsappGroup(self.whatsapp_group.clone())
            }
            ContentType::Phone => ContentPayload::Phone(self.phone.clone()),
            ContentType::Pix => ContentPayload::Pix(self.pix.clone()),
            ContentType::Appstore => ContentPayload::Appstore(self.appstore.clone()),
            ContentType::MediaLink => ContentPayload::MediaLink(self.media_link.clone()),
            ContentType::Meeting => ContentPayload::Meeting(self.meeting.clone()),
            ContentType::Menu => ContentPayload::Menu(self.menu.clone()),
            ContentType::Coupon => ContentPayload::Coupon(self.coupon.clone()),
        }
    }

    /// Overwrite the record of the payload's own type; other types are untouched.
    pub fn store(&mut self, payload: ContentPayload) {
        match payload {
            ContentPayload::Url(f) => self.url = f,
            ContentPayload::Wifi(f) => self.wifi = f,
            ContentPayload::Vcard(f) => self.vcard = f,
            ContentPayload::Vevent(f) => self.vevent = f,
            ContentPayload::Email(f) => self.email = f,
            ContentPayload::Sms(f) => self.sms = f,
            ContentPayload::Geo(f) => self.geo = f,
            ContentPayload::Whatsapp(f) => self.whatsapp = f,
            ContentPayload::WhatsappGroup(f) => self.whatsapp_group = f,
            ContentPayload::Phone(f) => self.phone = f,
            ContentPayload::Pix(f) => self.pix = f,
            ContentPayload::Appstore(f) => self.appstore = f,
            ContentPayload::MediaLink(f) => self.media_link = f,
            ContentPayload::Meeting(f) => self.meeting = f,
            ContentPayload::Menu(f) => self.menu = f,
            ContentPayload::Coupon(f) => self.coupon = f,
        }
    }

    pub fn reset(&mut self, ty: ContentType) {
        self.store(ContentFields::default().payload(ty));
    }
}
