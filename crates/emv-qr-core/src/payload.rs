//! Модель данных платёжного EMV QR (Merchant-Presented Mode)
//!
//! Структура заполняется вызывающим кодом (или декодером из отсканированной
//! строки), проверяется через [`PaymentPayload::validate`] и затем кодируется.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tlv::{self, TlvField, TlvWriteError};

/// Версия формата (тег 00)
pub const PAYLOAD_FORMAT_INDICATOR: &str = "01";

/// Способ инициации платежа (тег 01)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointOfInitiation {
    /// "11" - статический QR, многократного использования
    Static,
    /// "12" - динамический QR, для одной транзакции
    Dynamic,
}

impl PointOfInitiation {
    pub fn code(self) -> &'static str {
        match self {
            PointOfInitiation::Static => "11",
            PointOfInitiation::Dynamic => "12",
        }
    }
}

impl FromStr for PointOfInitiation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "11" => Ok(PointOfInitiation::Static),
            "12" => Ok(PointOfInitiation::Dynamic),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for PointOfInitiation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Информация о счёте мерчанта (шаблон 29)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantAccountInfo {
    /// Глобальный идентификатор (подтег 00)
    pub guid: String,
    /// Идентификатор мерчанта (подтег 01)
    pub merchant_id: Option<String>,
}

impl MerchantAccountInfo {
    pub fn new(guid: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            merchant_id: None,
        }
    }
}

/// Ошибки структурной проверки перед кодированием
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidField {
    #[error("Merchant GUID is empty")]
    EmptyMerchantGuid,

    #[error("Merchant name is empty")]
    EmptyMerchantName,

    #[error("Merchant city is empty")]
    EmptyMerchantCity,

    #[error("Merchant category code must be 4 digits, got {0:?}")]
    MerchantCategoryCode(String),

    #[error("Currency code must be 3 digits, got {0:?}")]
    CurrencyCode(String),

    #[error("Country code must be 2 letters, got {0:?}")]
    CountryCode(String),

    #[error("Amount must not be negative, got {0}")]
    NegativeAmount(Decimal),
}

/// Платёжные данные EMV QR
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPayload {
    pub payload_format_indicator: String, // (00)
    pub point_of_initiation: PointOfInitiation, // (01)
    pub merchant_account: MerchantAccountInfo, // (29)
    pub merchant_category_code: String, // (52)
    pub currency_code: String, // (53)
    pub amount: Decimal, // (54), при кодировании округляется до 2 знаков
    pub country_code: String, // (58)
    pub merchant_name: String, // (59)
    pub merchant_city: String, // (60)
    pub postal_code: Option<String>, // (61)
    pub additional_data: Option<String>, // (62)
    pub crc: Option<String>, // (63), заполняется только декодером
    /// Теги, которые кодек не разбирает; порядок сохраняется
    pub unknown_fields: Vec<TlvField>,
}

impl Default for PaymentPayload {
    fn default() -> Self {
        Self {
            payload_format_indicator: PAYLOAD_FORMAT_INDICATOR.to_string(),
            point_of_initiation: PointOfInitiation::Dynamic,
            merchant_account: MerchantAccountInfo::default(),
            merchant_category_code: String::new(),
            currency_code: String::new(),
            amount: Decimal::ZERO,
            country_code: String::new(),
            merchant_name: String::new(),
            merchant_city: String::new(),
            postal_code: None,
            additional_data: None,
            crc: None,
            unknown_fields: Vec::new(),
        }
    }
}

impl PaymentPayload {
    /// Установка способа инициации
    pub fn with_initiation(mut self, method: PointOfInitiation) -> Self {
        self.point_of_initiation = method;
        self
    }

    /// Установка кода категории мерчанта (MCC)
    pub fn with_category(mut self, mcc: impl Into<String>) -> Self {
        self.merchant_category_code = mcc.into();
        self
    }

    /// Установка идентификатора мерчанта (подтег 01 шаблона 29)
    pub fn with_merchant_id(mut self, merchant_id: impl Into<String>) -> Self {
        self.merchant_account.merchant_id = Some(merchant_id.into());
        self
    }

    /// Установка почтового индекса (тег 61)
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    /// Установка дополнительных данных (тег 62) как готового блока
    pub fn with_additional_data(mut self, data: impl Into<String>) -> Self {
        self.additional_data = Some(data.into());
        self
    }

    /// Установка дополнительных данных из списка подтегов
    pub fn with_additional_fields<'a, I>(mut self, fields: I) -> Result<Self, TlvWriteError>
    where
        I: IntoIterator<Item = (u8, &'a str)>,
    {
        self.additional_data = Some(tlv::encode_fields(fields)?);
        Ok(self)
    }

    /// Разбор блока дополнительных данных (тег 62) на подтеги
    pub fn additional_data_fields(&self) -> Result<Vec<TlvField>, tlv::FramingError> {
        match &self.additional_data {
            Some(data) => tlv::decode_fields(data),
            None => Ok(Vec::new()),
        }
    }

    /// Структурная проверка перед кодированием
    pub fn validate(&self) -> Result<(), InvalidField> {
        if self.merchant_account.guid.is_empty() {
            return Err(InvalidField::EmptyMerchantGuid);
        }
        if self.merchant_name.is_empty() {
            return Err(InvalidField::EmptyMerchantName);
        }
        if self.merchant_city.is_empty() {
            return Err(InvalidField::EmptyMerchantCity);
        }
        if !is_ascii_digits(&self.merchant_category_code, 4) {
            return Err(InvalidField::MerchantCategoryCode(
                self.merchant_category_code.clone(),
            ));
        }
        if !is_ascii_digits(&self.currency_code, 3) {
            return Err(InvalidField::CurrencyCode(self.currency_code.clone()));
        }
        if !(self.country_code.len() == 2
            && self.country_code.bytes().all(|b| b.is_ascii_alphabetic()))
        {
            return Err(InvalidField::CountryCode(self.country_code.clone()));
        }
        if self.amount < Decimal::ZERO {
            return Err(InvalidField::NegativeAmount(self.amount));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

fn is_ascii_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PaymentPayload {
        PaymentPayload {
            merchant_account: MerchantAccountInfo::new("A000000677010111"),
            merchant_category_code: "5411".to_string(),
            currency_code: "952".to_string(),
            country_code: "SN".to_string(),
            merchant_name: "Test Shop".to_string(),
            merchant_city: "Dakar".to_string(),
            amount: Decimal::new(100000, 2),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_payload() {
        assert!(sample().is_valid());
        assert_eq!(sample().validate(), Ok(()));
    }

    #[test]
    fn test_each_rule() {
        let mut p = sample();
        p.merchant_account.guid.clear();
        assert_eq!(p.validate(), Err(InvalidField::EmptyMerchantGuid));

        let mut p = sample();
        p.merchant_name.clear();
        assert_eq!(p.validate(), Err(InvalidField::EmptyMerchantName));

        let mut p = sample();
        p.merchant_city.clear();
        assert_eq!(p.validate(), Err(InvalidField::EmptyMerchantCity));

        let p = sample().with_category("541");
        assert_eq!(
            p.validate(),
            Err(InvalidField::MerchantCategoryCode("541".to_string()))
        );

        let mut p = sample();
        p.currency_code = "95A".to_string();
        assert!(matches!(p.validate(), Err(InvalidField::CurrencyCode(_))));

        let mut p = sample();
        p.country_code = "SEN".to_string();
        assert!(matches!(p.validate(), Err(InvalidField::CountryCode(_))));

        let mut p = sample();
        p.amount = Decimal::new(-1, 2);
        assert!(!p.is_valid());
    }

    #[test]
    fn test_zero_amount_is_valid() {
        let mut p = sample();
        p.amount = Decimal::ZERO;
        assert!(p.is_valid());
    }

    #[test]
    fn test_point_of_initiation_codes() {
        assert_eq!("11".parse::<PointOfInitiation>(), Ok(PointOfInitiation::Static));
        assert_eq!("12".parse::<PointOfInitiation>(), Ok(PointOfInitiation::Dynamic));
        assert_eq!("13".parse::<PointOfInitiation>(), Err("13".to_string()));
        assert_eq!(PointOfInitiation::Static.to_string(), "11");
    }

    #[test]
    fn test_additional_fields() {
        let p = sample()
            .with_additional_fields([(1, "771234567"), (2, "Wave")])
            .unwrap();
        assert_eq!(p.additional_data.as_deref(), Some("01097712345670204Wave"));

        let fields = p.additional_data_fields().unwrap();
        assert_eq!(
            fields,
            vec![TlvField::new(1, "771234567"), TlvField::new(2, "Wave")]
        );
        assert!(sample().additional_data_fields().unwrap().is_empty());
    }
}
