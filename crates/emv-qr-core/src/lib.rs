//! EMV QR Core - кодек платёжных QR-кодов EMVCo (Merchant-Presented Mode)
//!
//! Библиотека для формирования и разбора платёжной строки:
//! - Кодирование платёжных данных в TLV-строку с контрольной суммой
//! - Декодирование отсканированной строки в структуру
//! - Проверка CRC-16/CCITT-FALSE (тег 63)
//! - Справочники валют и категорий мерчантов для отображения
//!
//! Построение изображения QR-кода остаётся за внешней библиотекой.

pub mod amount;
pub mod codes;
pub mod config;
pub mod crc;
pub mod emv;
pub mod payload;
pub mod summary;
pub mod tag;
pub mod tlv;

pub use config::{ConfigError, PaymentDefaults};
pub use crc::crc16_ccitt_false;
pub use emv::{validate_payload, verify_checksum, ChecksumError, DecodeError, EncodeError};
pub use payload::{InvalidField, MerchantAccountInfo, PaymentPayload, PointOfInitiation};
pub use summary::PaymentSummary;
pub use tag::Tag;
pub use tlv::{FramingError, TlvField, TlvReader, TlvWriteError};

pub use rust_decimal::Decimal;

use thiserror::Error;

/// Основные ошибки модуля
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmvQrError {
    #[error("Invalid payment data: {0}")]
    InvalidField(#[from] InvalidField),

    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Checksum error: {0}")]
    Checksum(#[from] ChecksumError),
}

impl PaymentPayload {
    /// Проверка структуры и кодирование
    pub fn encode_checked(&self) -> Result<String, EmvQrError> {
        self.validate()?;
        Ok(self.encode()?)
    }

    /// Проверка контрольной суммы и декодирование отсканированной строки
    pub fn parse(raw: &str) -> Result<Self, EmvQrError> {
        verify_checksum(raw)?;
        Ok(Self::decode(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_checked_rejects_invalid() {
        let payload = PaymentDefaults::default().payload("", "Dakar", Decimal::ONE);
        assert_eq!(
            payload.encode_checked(),
            Err(EmvQrError::InvalidField(InvalidField::EmptyMerchantName))
        );
    }

    #[test]
    fn test_parse_verifies_checksum() {
        let payload = PaymentDefaults::default().payload("Test", "Dakar", Decimal::new(1000, 0));
        let raw = payload.encode_checked().unwrap();

        let parsed = PaymentPayload::parse(&raw).unwrap();
        assert_eq!(parsed.merchant_name, "Test");

        let tampered = raw.replacen("Test", "Tost", 1);
        assert!(matches!(
            PaymentPayload::parse(&tampered),
            Err(EmvQrError::Checksum(ChecksumError::Mismatch { .. }))
        ));
    }
}
