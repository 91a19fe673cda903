use thiserror::Error;

use crate::amount::{self, AmountError};
use crate::crc;
use crate::payload::{MerchantAccountInfo, PaymentPayload};
use crate::tag::{merchant_account, Tag};
use crate::tlv::{self, FramingError, TlvReader, TlvWriteError, HEADER_LEN};

/// Length of the checksum value (tag 63)
pub const CRC_LEN: usize = 4;
/// Tag 63 header that precedes the checksum value
pub const CRC_HEADER: &str = "6304";

/// EMV Decoding Errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Malformed TLV framing: {0}")]
    MalformedFraming(#[from] FramingError),

    #[error("Malformed amount: {0}")]
    MalformedAmount(AmountError),

    #[error("Unknown point of initiation method: {0:?}")]
    UnknownInitiationMethod(String),
}

/// EMV Encoding Errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Cannot frame field: {0}")]
    Field(#[from] TlvWriteError),

    #[error("Cannot encode amount: {0}")]
    InvalidAmount(#[from] AmountError),

    #[error("Tag {0:02} is a modelled field and cannot be written as an unknown one")]
    ReservedTag(u8),
}

/// Checksum verification errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChecksumError {
    #[error("Missing Checksum (Tag 63)")]
    Missing,

    #[error("Cannot locate checksum: {0}")]
    Framing(#[from] FramingError),

    #[error("Invalid CRC: expected {expected}, got {actual}")]
    Mismatch { expected: String, actual: String },
}

impl PaymentPayload {
    /// Serializes the payload and appends its checksum.
    ///
    /// Fields are written in canonical order. Optional fields that are `Some` are
    /// written even when empty. The amount is rounded to 2 decimal places, so
    /// `12.345` comes back as `12.35`. The payload is not re-validated here;
    /// call [`PaymentPayload::validate`] first (or use [`PaymentPayload::encode_checked`]).
    pub fn encode(&self) -> Result<String, EncodeError> {
        let mut out = String::with_capacity(128);

        tlv::write_field(
            &mut out,
            Tag::PayloadFormatIndicator.id(),
            &self.payload_format_indicator,
        )?;
        tlv::write_field(
            &mut out,
            Tag::PointOfInitiation.id(),
            self.point_of_initiation.code(),
        )?;

        let account = encode_merchant_account(&self.merchant_account)?;
        tlv::write_field(&mut out, Tag::MerchantAccountInfo.id(), &account)?;

        tlv::write_field(
            &mut out,
            Tag::MerchantCategoryCode.id(),
            &self.merchant_category_code,
        )?;
        tlv::write_field(&mut out, Tag::TransactionCurrency.id(), &self.currency_code)?;

        let amount = amount::to_minor_units(self.amount)?;
        tlv::write_field(&mut out, Tag::TransactionAmount.id(), &amount)?;

        tlv::write_field(&mut out, Tag::CountryCode.id(), &self.country_code)?;
        tlv::write_field(&mut out, Tag::MerchantName.id(), &self.merchant_name)?;
        tlv::write_field(&mut out, Tag::MerchantCity.id(), &self.merchant_city)?;

        if let Some(postal_code) = &self.postal_code {
            tlv::write_field(&mut out, Tag::PostalCode.id(), postal_code)?;
        }
        if let Some(data) = &self.additional_data {
            tlv::write_field(&mut out, Tag::AdditionalData.id(), data)?;
        }
        for field in &self.unknown_fields {
            if !matches!(Tag::from(field.tag), Tag::Other(_)) {
                return Err(EncodeError::ReservedTag(field.tag));
            }
            tlv::write_field(&mut out, field.tag, &field.value)?;
        }

        out.push_str(CRC_HEADER);
        let checksum = crc::checksum_hex(out.as_bytes());
        out.push_str(&checksum);

        log::debug!("EMV: encoded {} chars, CRC {}", out.len(), checksum);
        Ok(out)
    }

    /// Decodes a payload without looking at its checksum.
    ///
    /// Fields may appear in any order; unknown tags are kept in `unknown_fields`.
    /// Use [`verify_checksum`] (or [`PaymentPayload::parse`]) to check integrity.
    pub fn decode(raw: &str) -> Result<Self, DecodeError> {
        let mut payload = PaymentPayload {
            payload_format_indicator: String::new(),
            ..Default::default()
        };

        for field in TlvReader::new(raw) {
            let field = field?;
            let value = field.value;

            match Tag::from(field.tag) {
                Tag::PayloadFormatIndicator => payload.payload_format_indicator = value.to_string(),
                Tag::PointOfInitiation => {
                    payload.point_of_initiation = value
                        .parse()
                        .map_err(DecodeError::UnknownInitiationMethod)?;
                }
                Tag::MerchantAccountInfo => {
                    payload.merchant_account = decode_merchant_account(value)?;
                }
                Tag::MerchantCategoryCode => payload.merchant_category_code = value.to_string(),
                Tag::TransactionCurrency => payload.currency_code = value.to_string(),
                Tag::TransactionAmount => {
                    payload.amount =
                        amount::parse_amount(value).map_err(DecodeError::MalformedAmount)?;
                }
                Tag::CountryCode => payload.country_code = value.to_string(),
                Tag::MerchantName => payload.merchant_name = value.to_string(),
                Tag::MerchantCity => payload.merchant_city = value.to_string(),
                Tag::PostalCode => payload.postal_code = Some(value.to_string()),
                Tag::AdditionalData => payload.additional_data = Some(value.to_string()),
                Tag::Crc => payload.crc = Some(value.to_string()),
                Tag::Other(id) => {
                    log::debug!("EMV: keeping unknown tag {:02} ({} chars)", id, value.len());
                    payload.unknown_fields.push(field.into());
                }
            }
        }

        Ok(payload)
    }
}

fn encode_merchant_account(account: &MerchantAccountInfo) -> Result<String, TlvWriteError> {
    let mut fields = vec![(merchant_account::GLOBALLY_UNIQUE_ID, account.guid.as_str())];
    if let Some(id) = &account.merchant_id {
        fields.push((merchant_account::MERCHANT_ID, id.as_str()));
    }
    tlv::encode_fields(fields)
}

fn decode_merchant_account(value: &str) -> Result<MerchantAccountInfo, FramingError> {
    let mut account = MerchantAccountInfo::default();
    for field in TlvReader::new(value) {
        let field = field?;
        match field.tag {
            merchant_account::GLOBALLY_UNIQUE_ID => account.guid = field.value.to_string(),
            merchant_account::MERCHANT_ID => account.merchant_id = Some(field.value.to_string()),
            other => log::debug!("EMV: skipping merchant account sub-tag {:02}", other),
        }
    }
    Ok(account)
}

/// Verifies the trailing checksum of a raw payload.
///
/// The checksum field is found by walking the TLV framing, so the bytes `6304`
/// inside another field's value are never mistaken for it. It must be the last
/// top-level field; the CRC covers everything up to and including its header.
pub fn verify_checksum(raw: &str) -> Result<(), ChecksumError> {
    let mut last = None;
    for field in TlvReader::new(raw) {
        last = Some(field?);
    }

    let field = last.ok_or(ChecksumError::Missing)?;
    if Tag::from(field.tag) != Tag::Crc || field.value.len() != CRC_LEN {
        return Err(ChecksumError::Missing);
    }

    let covered = &raw[..field.offset + HEADER_LEN];
    let expected = crc::checksum_hex(covered.as_bytes());

    if !field.value.eq_ignore_ascii_case(&expected) {
        log::warn!("EMV: CRC mismatch, expected {} got {}", expected, field.value);
        return Err(ChecksumError::Mismatch {
            expected,
            actual: field.value.to_string(),
        });
    }

    Ok(())
}

/// `true` iff the payload's framing is intact and its checksum matches.
pub fn validate_payload(raw: &str) -> bool {
    verify_checksum(raw).is_ok()
}
