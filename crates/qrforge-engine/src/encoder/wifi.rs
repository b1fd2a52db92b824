use qrforge_types::{ContentType, WifiEncryption, WifiFields};

use super::{Encode, Encoded, require};
use crate::Result;
use crate::escape::escape_wifi_field;

impl Encode for WifiFields {
    const CONTENT_TYPE: ContentType = ContentType::Wifi;

    /// `WIFI:T:<enc>;S:<ssid>;[P:<password>;][H:true;];`
    fn encode(&self) -> Result<Encoded> {
        require(Self::CONTENT_TYPE, &[("ssid", &self.ssid)])?;

        let auth = match self.encryption {
            WifiEncryption::Wpa => "WPA",
            WifiEncryption::Wep => "WEP",
            WifiEncryption::None => "nopass",
        };

        let mut value = format!("WIFI:T:{};S:{};", auth, escape_wifi_field(&self.ssid));
        if self.encryption != WifiEncryption::None {
            value.push_str(&format!("P:{};", escape_wifi_field(&self.password)));
        }
        if self.hidden {
            value.push_str("H:true;");
        }
        value.push(';');

        Ok(Encoded::new(value, self.ssid.clone()))
    }
}
