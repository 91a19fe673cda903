use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level data object identifiers of a merchant-presented payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    PayloadFormatIndicator, // 00
    PointOfInitiation,      // 01
    MerchantAccountInfo,    // 29
    MerchantCategoryCode,   // 52
    TransactionCurrency,    // 53
    TransactionAmount,      // 54
    CountryCode,            // 58
    MerchantName,           // 59
    MerchantCity,           // 60
    PostalCode,             // 61
    AdditionalData,         // 62
    Crc,                    // 63
    /// Anything the codec does not model (other account templates, 64, RFU ids...)
    Other(u8),
}

impl Tag {
    /// Numeric id, 0..=99.
    pub const fn id(self) -> u8 {
        match self {
            Tag::PayloadFormatIndicator => 0,
            Tag::PointOfInitiation => 1,
            Tag::MerchantAccountInfo => 29,
            Tag::MerchantCategoryCode => 52,
            Tag::TransactionCurrency => 53,
            Tag::TransactionAmount => 54,
            Tag::CountryCode => 58,
            Tag::MerchantName => 59,
            Tag::MerchantCity => 60,
            Tag::PostalCode => 61,
            Tag::AdditionalData => 62,
            Tag::Crc => 63,
            Tag::Other(id) => id,
        }
    }
}

impl From<u8> for Tag {
    fn from(id: u8) -> Self {
        match id {
            0 => Tag::PayloadFormatIndicator,
            1 => Tag::PointOfInitiation,
            29 => Tag::MerchantAccountInfo,
            52 => Tag::MerchantCategoryCode,
            53 => Tag::TransactionCurrency,
            54 => Tag::TransactionAmount,
            58 => Tag::CountryCode,
            59 => Tag::MerchantName,
            60 => Tag::MerchantCity,
            61 => Tag::PostalCode,
            62 => Tag::AdditionalData,
            63 => Tag::Crc,
            other => Tag::Other(other),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.id())
    }
}

/// Sub-tags inside the merchant account information template (29).
pub mod merchant_account {
    pub const GLOBALLY_UNIQUE_ID: u8 = 0;
    pub const MERCHANT_ID: u8 = 1;
}

/// Sub-tags used by the mobile money additional data template (62).
pub mod additional_data {
    pub const PHONE_NUMBER: u8 = 1;
    pub const PROVIDER: u8 = 2;
}
