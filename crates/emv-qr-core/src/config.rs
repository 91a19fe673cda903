//! Конфигурация значений по умолчанию для платёжных QR
//!
//! Загружается из JSON (например, из настроек приложения) и даёт готовые
//! заготовки платёжных данных для типовых мерчантов.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::payload::{MerchantAccountInfo, PaymentPayload, PointOfInitiation};
use crate::tag::additional_data;
use crate::tlv::TlvWriteError;

/// GUID по умолчанию для шаблона 29
pub const DEFAULT_MERCHANT_GUID: &str = "A000000677010111";

/// Ошибки конфигурации
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid defaults JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Значения по умолчанию для новых платёжных данных
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentDefaults {
    /// Глобальный идентификатор мерчанта (подтег 00 шаблона 29)
    pub merchant_guid: String,
    /// Код категории мерчанта (ISO 18245)
    pub merchant_category_code: String,
    /// Числовой код валюты (ISO 4217)
    pub currency_code: String,
    /// Код страны (ISO 3166-1 alpha-2)
    pub country_code: String,
    /// Способ инициации
    pub point_of_initiation: PointOfInitiation,
}

impl Default for PaymentDefaults {
    fn default() -> Self {
        Self {
            merchant_guid: DEFAULT_MERCHANT_GUID.to_string(),
            merchant_category_code: "5999".to_string(),
            currency_code: "952".to_string(),
            country_code: "SN".to_string(),
            point_of_initiation: PointOfInitiation::Dynamic,
        }
    }
}

impl PaymentDefaults {
    /// Загрузка из JSON; отсутствующие поля берутся по умолчанию
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let defaults: Self = serde_json::from_str(json)?;
        log::debug!("Loaded payment defaults: {:?}", defaults);
        Ok(defaults)
    }

    /// Значения по умолчанию для другой страны
    pub fn for_country(country_code: &str, currency_code: &str) -> Self {
        Self {
            country_code: country_code.to_string(),
            currency_code: currency_code.to_string(),
            ..Default::default()
        }
    }

    /// Общая заготовка платёжных данных
    pub fn payload(&self, merchant_name: &str, merchant_city: &str, amount: Decimal) -> PaymentPayload {
        PaymentPayload {
            point_of_initiation: self.point_of_initiation,
            merchant_account: MerchantAccountInfo::new(self.merchant_guid.as_str()),
            merchant_category_code: self.merchant_category_code.clone(),
            currency_code: self.currency_code.clone(),
            amount,
            country_code: self.country_code.clone(),
            merchant_name: merchant_name.to_string(),
            merchant_city: merchant_city.to_string(),
            ..Default::default()
        }
    }

    /// Розничная торговля: продуктовый магазин, статический QR
    pub fn retail(&self, merchant_name: &str, merchant_city: &str, amount: Decimal) -> PaymentPayload {
        self.payload(merchant_name, merchant_city, amount)
            .with_category("5411")
            .with_initiation(PointOfInitiation::Static)
    }

    /// Рестораны, статический QR
    pub fn restaurant(&self, merchant_name: &str, merchant_city: &str, amount: Decimal) -> PaymentPayload {
        self.payload(merchant_name, merchant_city, amount)
            .with_category("5812")
            .with_initiation(PointOfInitiation::Static)
    }

    /// Транспорт (такси), статический QR
    pub fn transportation(&self, merchant_name: &str, merchant_city: &str, amount: Decimal) -> PaymentPayload {
        self.payload(merchant_name, merchant_city, amount)
            .with_category("4121")
            .with_initiation(PointOfInitiation::Static)
    }

    /// Интернет-торговля, динамический QR
    pub fn ecommerce(&self, merchant_name: &str, merchant_city: &str, amount: Decimal) -> PaymentPayload {
        self.payload(merchant_name, merchant_city, amount)
            .with_category("5399")
            .with_initiation(PointOfInitiation::Dynamic)
    }

    /// Мобильные деньги: телефон и провайдер в дополнительных данных (тег 62)
    pub fn mobile_money(
        &self,
        merchant_name: &str,
        merchant_city: &str,
        amount: Decimal,
        phone_number: &str,
        provider: &str,
    ) -> Result<PaymentPayload, TlvWriteError> {
        self.payload(merchant_name, merchant_city, amount)
            .with_category("6012")
            .with_additional_fields([
                (additional_data::PHONE_NUMBER, phone_number),
                (additional_data::PROVIDER, provider),
            ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let defaults = PaymentDefaults::default();
        let payload = defaults.payload("Test Shop", "Dakar", Decimal::new(5000, 0));

        assert!(payload.is_valid());
        assert_eq!(payload.merchant_account.guid, DEFAULT_MERCHANT_GUID);
        assert_eq!(payload.currency_code, "952");
        assert_eq!(payload.country_code, "SN");
        assert_eq!(payload.merchant_category_code, "5999");
        assert_eq!(payload.point_of_initiation, PointOfInitiation::Dynamic);
    }

    #[test]
    fn test_from_json_partial() {
        let defaults = PaymentDefaults::from_json(
            r#"{"country_code": "CI", "point_of_initiation": "Static"}"#,
        )
        .unwrap();

        assert_eq!(defaults.country_code, "CI");
        assert_eq!(defaults.currency_code, "952");
        assert_eq!(defaults.point_of_initiation, PointOfInitiation::Static);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            PaymentDefaults::from_json("{not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_presets() {
        let defaults = PaymentDefaults::for_country("US", "840");
        let amount = Decimal::new(1999, 2);

        let retail = defaults.retail("Corner Market", "Boston", amount);
        assert_eq!(retail.merchant_category_code, "5411");
        assert_eq!(retail.point_of_initiation, PointOfInitiation::Static);
        assert_eq!(retail.currency_code, "840");

        assert_eq!(defaults.restaurant("Diner", "Boston", amount).merchant_category_code, "5812");
        assert_eq!(defaults.transportation("Cab", "Boston", amount).merchant_category_code, "4121");

        let shop = defaults.ecommerce("Web Shop", "Boston", amount);
        assert_eq!(shop.merchant_category_code, "5399");
        assert_eq!(shop.point_of_initiation, PointOfInitiation::Dynamic);
    }

    #[test]
    fn test_mobile_money() {
        let payload = PaymentDefaults::default()
            .mobile_money("Boutique", "Thiès", Decimal::new(2500, 0), "771234567", "Wave")
            .unwrap();

        assert_eq!(payload.merchant_category_code, "6012");
        assert_eq!(payload.additional_data.as_deref(), Some("01097712345670204Wave"));
        assert!(payload.is_valid());
    }
}
