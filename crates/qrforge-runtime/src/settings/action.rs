//! Typed settings mutations.
//!
//! Every field of every content type has its own constructor, so the set of
//! editable fields is checked at compile time. String keys only exist at the
//! command-line boundary, through [`ContentEdit::parse`].

use qrforge_types::{
    AppstoreFields, ContentFields, ContentType, CouponFields, EmailFields, ErrorCorrectionLevel,
    FrameStyle, GeoFields, MediaLinkFields, MeetingFields, MenuFields, PhoneFields, PixFields,
    SmsFields, UrlFields, VcardFields, VeventFields, WhatsappFields, WhatsappGroupFields,
    WifiEncryption, WifiFields, fold_identifier,
};

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsAction {
    SelectType(ContentType),
    Content(ContentEdit),
    Appearance(AppearanceEdit),
}

impl From<ContentEdit> for SettingsAction {
    fn from(edit: ContentEdit) -> Self {
        SettingsAction::Content(edit)
    }
}

impl From<AppearanceEdit> for SettingsAction {
    fn from(edit: AppearanceEdit) -> Self {
        SettingsAction::Appearance(edit)
    }
}

/// Appearance options plus the enable toggles of the three customizations.
///
/// Image values are data URIs (see `read_image_data_uri`).
#[derive(Debug, Clone, PartialEq)]
pub enum AppearanceEdit {
    ForegroundColor(String),
    BackgroundColor(String),
    Size(u32),
    ErrorCorrection(ErrorCorrectionLevel),
    Margin(u32),
    LogoEnabled(bool),
    LogoImage(Option<String>),
    LogoSizeRatio(f32),
    LogoCutout(bool),
    BackgroundImageEnabled(bool),
    BackgroundImage(Option<String>),
    FrameEnabled(bool),
    FrameStyle(FrameStyle),
    FrameCaption(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEdit {
    Url(UrlEdit),
    Wifi(WifiEdit),
    Vcard(VcardEdit),
    Vevent(VeventEdit),
    Email(EmailEdit),
    Sms(SmsEdit),
    Geo(GeoEdit),
    Whatsapp(WhatsappEdit),
    WhatsappGroup(WhatsappGroupEdit),
    Phone(PhoneEdit),
    Pix(PixEdit),
    Appstore(AppstoreEdit),
    MediaLink(MediaLinkEdit),
    Meeting(MeetingEdit),
    Menu(MenuEdit),
    Coupon(CouponEdit),
}

impl ContentEdit {
    /// Build an edit from a `key=value` pair given on the command line.
    ///
    /// Keys are the camelCase field names; case, `-` and `_` are ignored.
    pub fn parse(content_type: ContentType, key: &str, value: &str) -> Result<Self> {
        let field = fold_identifier(key);
        let value = value.to_string();
        let edit = match content_type {
            ContentType::Url => ContentEdit::Url(match field.as_str() {
                "text" | "url" => UrlEdit::Text(value),
                _ => return Err(unknown_field(content_type, key)),
            }),
            ContentType::Wifi => ContentEdit::Wifi(match field.as_str() {
                "ssid" => WifiEdit::Ssid(value),
                "password" => WifiEdit::Password(value),
                "encryption" => WifiEdit::Encryption(value.parse()?),
                "hidden" => WifiEdit::Hidden(parse_bool(key, &value)?),
                _ => return Err(unknown_field(content_type, key)),
            }),
            ContentType::Vcard => ContentEdit::Vcard(match field.as_str() {
                "firstname" => VcardEdit::FirstName(value),
                "lastname" => VcardEdit::LastName(value),
                "organization" => VcardEdit::Organization(value),
                "title" => VcardEdit::Title(value),
                "phone" => VcardEdit::Phone(value),
                "mobile" => VcardEdit::Mobile(value),
                "email" => VcardEdit::Email(value),
                "website" => VcardEdit::Website(value),
                "street" => VcardEdit::Street(value),
                "city" => VcardEdit::City(value),
                "postalcode" => VcardEdit::PostalCode(value),
                "country" => VcardEdit::Country(value),
                _ => return Err(unknown_field(content_type, key)),
            }),
            ContentType::Vevent => ContentEdit::Vevent(match field.as_str() {
                "summary" => VeventEdit::Summary(value),
                "description" => VeventEdit::Description(value),
                "location" => VeventEdit::Location(value),
                "startdate" => VeventEdit::StartDate(value),
                "starttime" => VeventEdit::StartTime(value),
                "enddate" => VeventEdit::EndDate(value),
                "endtime" => VeventEdit::EndTime(value),
                "allday" => VeventEdit::AllDay(parse_bool(key, &value)?),
                _ => return Err(unknown_field(content_type, key)),
            }),
            ContentType::Email => ContentEdit::Email(match field.as_str() {
                "to" => EmailEdit::To(value),
                "subject" => EmailEdit::Subject(value),
                "body" => EmailEdit::Body(value),
                _ => return Err(unknown_field(content_type, key)),
            }),
            ContentType::Sms => ContentEdit::Sms(match field.as_str() {
                "phone" => SmsEdit::Phone(value),
                "message" => SmsEdit::Message(value),
                _ => return Err(unknown_field(content_type, key)),
            }),
            ContentType::Geo => ContentEdit::Geo(match field.as_str() {
                "latitude" | "lat" => GeoEdit::Latitude(value),
                "longitude" | "lon" | "lng" => GeoEdit::Longitude(value),
                _ => return Err(unknown_field(content_type, key)),
            }),
            ContentType::Whatsapp => ContentEdit::Whatsapp(match field.as_str() {
                "phone" => WhatsappEdit::Phone(value),
                "message" => WhatsappEdit::Message(value),
                _ => return Err(unknown_field(content_type, key)),
            }),
            ContentType::WhatsappGroup => ContentEdit::WhatsappGroup(match field.as_str() {
                "invite" => WhatsappGroupEdit::Invite(value),
                _ => return Err(unknown_field(content_type, key)),
            }),
            ContentType::Phone => ContentEdit::Phone(match field.as_str() {
                "number" => PhoneEdit::Number(value),
                _ => return Err(unknown_field(content_type, key)),
            }),
            ContentType::Pix => ContentEdit::Pix(match field.as_str() {
                "key" => PixEdit::Key(value),
                "name" => PixEdit::Name(value),
                "city" => PixEdit::City(value),
                "amount" => PixEdit::Amount(value),
                "description" => PixEdit::Description(value),
                _ => return Err(unknown_field(content_type, key)),
            }),
            ContentType::Appstore => ContentEdit::Appstore(match field.as_str() {
                "appname" => AppstoreEdit::AppName(value),
                "iosurl" => AppstoreEdit::IosUrl(value),
                "androidurl" => AppstoreEdit::AndroidUrl(value),
                _ => return Err(unknown_field(content_type, key)),
            }),
            ContentType::MediaLink => ContentEdit::MediaLink(match field.as_str() {
                "platform" => MediaLinkEdit::Platform(value),
                "url" => MediaLinkEdit::Url(value),
                _ => return Err(unknown_field(content_type, key)),
            }),
            ContentType::Meeting => ContentEdit::Meeting(match field.as_str() {
                "platform" => MeetingEdit::Platform(value),
                "url" => MeetingEdit::Url(value),
                "meetingid" => MeetingEdit::MeetingId(value),
                "passcode" => MeetingEdit::Passcode(value),
                _ => return Err(unknown_field(content_type, key)),
            }),
            ContentType::Menu => ContentEdit::Menu(match field.as_str() {
                "restaurant" => MenuEdit::Restaurant(value),
                "url" => MenuEdit::Url(value),
                "items" => MenuEdit::Items(value),
                _ => return Err(unknown_field(content_type, key)),
            }),
            ContentType::Coupon => ContentEdit::Coupon(match field.as_str() {
                "code" => CouponEdit::Code(value),
                "description" => CouponEdit::Description(value),
                "discount" => CouponEdit::Discount(value),
                "expiry" => CouponEdit::Expiry(value),
                _ => return Err(unknown_field(content_type, key)),
            }),
        };
        Ok(edit)
    }

    pub fn content_type(&self) -> ContentType {
        match self {
            ContentEdit::Url(_) => ContentType::Url,
            ContentEdit::Wifi(_) => ContentType::Wifi,
            ContentEdit::Vcard(_) => ContentType::Vcard,
            ContentEdit::Vevent(_) => ContentType::Vevent,
            ContentEdit::Email(_) => ContentType::Email,
            ContentEdit::Sms(_) => ContentType::Sms,
            ContentEdit::Geo(_) => ContentType::Geo,
            ContentEdit::Whatsapp(_) => ContentType::Whatsapp,
            ContentEdit::WhatsappGroup(_) => ContentType::WhatsappGroup,
            ContentEdit::Phone(_) => ContentType::Phone,
            ContentEdit::Pix(_) => ContentType::Pix,
            ContentEdit::Appstore(_) => ContentType::Appstore,
            ContentEdit::MediaLink(_) => ContentType::MediaLink,
            ContentEdit::Meeting(_) => ContentType::Meeting,
            ContentEdit::Menu(_) => ContentType::Menu,
            ContentEdit::Coupon(_) => ContentType::Coupon,
        }
    }

    pub(crate) fn apply(self, fields: &mut ContentFields) {
        match self {
            ContentEdit::Url(edit) => edit.apply(&mut fields.url),
            ContentEdit::Wifi(edit) => edit.apply(&mut fields.wifi),
            ContentEdit::Vcard(edit) => edit.apply(&mut fields.vcard),
            ContentEdit::Vevent(edit) => edit.apply(&mut fields.vevent),
            ContentEdit::Email(edit) => edit.apply(&mut fields.email),
            ContentEdit::Sms(edit) => edit.apply(&mut fields.sms),
            ContentEdit::Geo(edit) => edit.apply(&mut fields.geo),
            ContentEdit::Whatsapp(edit) => edit.apply(&mut fields.whatsapp),
            ContentEdit::WhatsappGroup(edit) => edit.apply(&mut fields.whatsapp_group),
            ContentEdit::Phone(edit) => edit.apply(&mut fields.phone),
            ContentEdit::Pix(edit) => edit.apply(&mut fields.pix),
            ContentEdit::Appstore(edit) => edit.apply(&mut fields.appstore),
            ContentEdit::MediaLink(edit) => edit.apply(&mut fields.media_link),
            ContentEdit::Meeting(edit) => edit.apply(&mut fields.meeting),
            ContentEdit::Menu(edit) => edit.apply(&mut fields.menu),
            ContentEdit::Coupon(edit) => edit.apply(&mut fields.coupon),
        }
    }
}

fn unknown_field(content_type: ContentType, key: &str) -> Error {
    Error::InvalidValue(format!("unknown field '{}' for {}", key, content_type))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" | "" => Ok(false),
        _ => Err(Error::InvalidValue(format!(
            "{} expects true or false, got '{}'",
            key, value
        ))),
    }
}

// ==========================================
// Per-type edits
// ==========================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlEdit {
    Text(String),
}

impl UrlEdit {
    fn apply(self, f: &mut UrlFields) {
        match self {
            UrlEdit::Text(v) => f.text = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WifiEdit {
    Ssid(String),
    Password(String),
    Encryption(WifiEncryption),
    Hidden(bool),
}

impl WifiEdit {
    fn apply(self, f: &mut WifiFields) {
        match self {
            WifiEdit::Ssid(v) => f.ssid = v,
            WifiEdit::Password(v) => f.password = v,
            WifiEdit::Encryption(v) => f.encryption = v,
            WifiEdit::Hidden(v) => f.hidden = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcardEdit {
    FirstName(String),
    LastName(String),
    Organization(String),
    Title(String),
    Phone(String),
    Mobile(String),
    Email(String),
    Website(String),
    Street(String),
    City(String),
    PostalCode(String),
    Country(String),
}

impl VcardEdit {
    fn apply(self, f: &mut VcardFields) {
        match self {
            VcardEdit::FirstName(v) => f.first_name = v,
            VcardEdit::LastName(v) => f.last_name = v,
            VcardEdit::Organization(v) => f.organization = v,
            VcardEdit::Title(v) => f.title = v,
            VcardEdit::Phone(v) => f.phone = v,
            VcardEdit::Mobile(v) => f.mobile = v,
            VcardEdit::Email(v) => f.email = v,
            VcardEdit::Website(v) => f.website = v,
            VcardEdit::Street(v) => f.street = v,
            VcardEdit::City(v) => f.city = v,
            VcardEdit::PostalCode(v) => f.postal_code = v,
            VcardEdit::Country(v) => f.country = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VeventEdit {
    Summary(String),
    Description(String),
    Location(String),
    StartDate(String),
    StartTime(String),
    EndDate(String),
    EndTime(String),
    AllDay(bool),
}

impl VeventEdit {
    fn apply(self, f: &mut VeventFields) {
        match self {
            VeventEdit::Summary(v) => f.summary = v,
            VeventEdit::Description(v) => f.description = v,
            VeventEdit::Location(v) => f.location = v,
            VeventEdit::StartDate(v) => f.start_date = v,
            VeventEdit::StartTime(v) => f.start_time = v,
            VeventEdit::EndDate(v) => f.end_date = v,
            VeventEdit::EndTime(v) => f.end_time = v,
            VeventEdit::AllDay(v) => f.all_day = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailEdit {
    To(String),
    Subject(String),
    Body(String),
}

impl EmailEdit {
    fn apply(self, f: &mut EmailFields) {
        match self {
            EmailEdit::To(v) => f.to = v,
            EmailEdit::Subject(v) => f.subject = v,
            EmailEdit::Body(v) => f.body = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmsEdit {
    Phone(String),
    Message(String),
}

impl SmsEdit {
    fn apply(self, f: &mut SmsFields) {
        match self {
            SmsEdit::Phone(v) => f.phone = v,
            SmsEdit::Message(v) => f.message = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeoEdit {
    Latitude(String),
    Longitude(String),
}

impl GeoEdit {
    fn apply(self, f: &mut GeoFields) {
        match self {
            GeoEdit::Latitude(v) => f.latitude = v,
            GeoEdit::Longitude(v) => f.longitude = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhatsappEdit {
    Phone(String),
    Message(String),
}

impl WhatsappEdit {
    fn apply(self, f: &mut WhatsappFields) {
        match self {
            WhatsappEdit::Phone(v) => f.phone = v,
            WhatsappEdit::Message(v) => f.message = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhatsappGroupEdit {
    Invite(String),
}

impl WhatsappGroupEdit {
    fn apply(self, f: &mut WhatsappGroupFields) {
        match self {
            WhatsappGroupEdit::Invite(v) => f.invite = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneEdit {
    Number(String),
}

impl PhoneEdit {
    fn apply(self, f: &mut PhoneFields) {
        match self {
            PhoneEdit::Number(v) => f.number = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixEdit {
    Key(String),
    Name(String),
    City(String),
    Amount(String),
    Description(String),
}

impl PixEdit {
    fn apply(self, f: &mut PixFields) {
        match self {
            PixEdit::Key(v) => f.key = v,
            PixEdit::Name(v) => f.name = v,
            PixEdit::City(v) => f.city = v,
            PixEdit::Amount(v) => f.amount = v,
            PixEdit::Description(v) => f.description = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppstoreEdit {
    AppName(String),
    IosUrl(String),
    AndroidUrl(String),
}

impl AppstoreEdit {
    fn apply(self, f: &mut AppstoreFields) {
        match self {
            AppstoreEdit::AppName(v) => f.app_name = v,
            AppstoreEdit::IosUrl(v) => f.ios_url = v,
            AppstoreEdit::AndroidUrl(v) => f.android_url = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaLinkEdit {
    Platform(String),
    Url(String),
}

impl MediaLinkEdit {
    fn apply(self, f: &mut MediaLinkFields) {
        match self {
            MediaLinkEdit::Platform(v) => f.platform = v,
            MediaLinkEdit::Url(v) => f.url = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeetingEdit {
    Platform(String),
    Url(String),
    MeetingId(String),
    Passcode(String),
}

impl MeetingEdit {
    fn apply(self, f: &mut MeetingFields) {
        match self {
            MeetingEdit::Platform(v) => f.platform = v,
            MeetingEdit::Url(v) => f.url = v,
            MeetingEdit::MeetingId(v) => f.meeting_id = v,
            MeetingEdit::Passcode(v) => f.passcode = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEdit {
    Restaurant(String),
    Url(String),
    Items(String),
}

impl MenuEdit {
    fn apply(self, f: &mut MenuFields) {
        match self {
            MenuEdit::Restaurant(v) => f.restaurant = v,
            MenuEdit::Url(v) => f.url = v,
            MenuEdit::Items(v) => f.items = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CouponEdit {
    Code(String),
    Description(String),
    Discount(String),
    Expiry(String),
}

impl CouponEdit {
    fn apply(self, f: &mut CouponFields) {
        match self {
            CouponEdit::Code(v) => f.code = v,
            CouponEdit::Description(v) => f.description = v,
            CouponEdit::Discount(v) => f.discount = v,
            CouponEdit::Expiry(v) => f.expiry = v,
        }
    }
}
