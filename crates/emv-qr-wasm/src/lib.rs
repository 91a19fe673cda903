//! WASM bindings для платёжных EMV QR
//!
//! Предоставляет JavaScript API для формирования и проверки платёжных строк.
//! Изображение QR-кода строится на стороне JavaScript.

use emv_qr_core::{codes, Decimal, PaymentDefaults, PaymentPayload};
use std::str::FromStr;
use wasm_bindgen::prelude::*;

/// Инициализация panic hook и логирования в консоль
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();
    log::info!("EMV QR WASM module initialized");
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn parse_amount(amount: &str) -> Result<Decimal, JsError> {
    Decimal::from_str(amount.trim())
        .map_err(|e| JsError::new(&format!("Invalid amount {:?}: {}", amount, e)))
}

/// JavaScript-доступный кодек платёжных QR
#[wasm_bindgen]
pub struct WasmPaymentCodec {
    defaults: PaymentDefaults,
}

#[wasm_bindgen]
impl WasmPaymentCodec {
    /// Кодек со значениями по умолчанию
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            defaults: PaymentDefaults::default(),
        }
    }

    /// Кодек с пользовательскими значениями по умолчанию
    ///
    /// @param json - например `{"country_code": "CI", "currency_code": "952"}`
    #[wasm_bindgen(js_name = withDefaults)]
    pub fn with_defaults(json: &str) -> Result<WasmPaymentCodec, JsError> {
        let defaults = PaymentDefaults::from_json(json).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self { defaults })
    }

    /// Заготовка платёжных данных
    ///
    /// @param amount - десятичная сумма строкой, например "1500.00"
    /// @returns Object с полями PaymentPayload
    #[wasm_bindgen(js_name = createPayment)]
    pub fn create_payment(
        &self,
        merchant_name: &str,
        merchant_city: &str,
        amount: &str,
    ) -> Result<JsValue, JsError> {
        let payload = self
            .defaults
            .payload(merchant_name, merchant_city, parse_amount(amount)?);
        to_js(&payload)
    }

    /// Кодирование объекта PaymentPayload в строку для QR
    pub fn encode(&self, payload: JsValue) -> Result<String, JsError> {
        let payload: PaymentPayload = serde_wasm_bindgen::from_value(payload)
            .map_err(|e| JsError::new(&e.to_string()))?;
        payload.encode_checked().map_err(|e| JsError::new(&e.to_string()))
    }

    /// Быстрое формирование строки по названию, городу и сумме
    #[wasm_bindgen(js_name = encodePayment)]
    pub fn encode_payment(
        &self,
        merchant_name: &str,
        merchant_city: &str,
        amount: &str,
    ) -> Result<String, JsError> {
        self.defaults
            .payload(merchant_name, merchant_city, parse_amount(amount)?)
            .encode_checked()
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Разбор строки без проверки контрольной суммы
    pub fn decode(&self, raw: &str) -> Result<JsValue, JsError> {
        let payload = PaymentPayload::decode(raw).map_err(|e| JsError::new(&e.to_string()))?;
        to_js(&payload)
    }

    /// Проверка контрольной суммы и разбор строки
    pub fn parse(&self, raw: &str) -> Result<JsValue, JsError> {
        let payload = PaymentPayload::parse(raw).map_err(|e| JsError::new(&e.to_string()))?;
        to_js(&payload)
    }

    pub fn validate(&self, raw: &str) -> bool {
        emv_qr_core::validate_payload(raw)
    }

    /// Сводка для экрана подтверждения оплаты
    ///
    /// @returns PaymentSummary или ошибка, если строка повреждена
    pub fn summary(&self, raw: &str) -> Result<JsValue, JsError> {
        let payload = PaymentPayload::parse(raw).map_err(|e| JsError::new(&e.to_string()))?;
        to_js(&payload.summary())
    }
}

impl Default for WasmPaymentCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Проверка строки без создания кодека
#[wasm_bindgen(js_name = validatePayload)]
pub fn validate_payload(raw: &str) -> bool {
    emv_qr_core::validate_payload(raw)
}

/// "US Dollar (USD)" для "840"
#[wasm_bindgen(js_name = currencyDescription)]
pub fn currency_description(code: &str) -> String {
    codes::currency_description(code)
}

#[wasm_bindgen(js_name = merchantCategoryDescription)]
pub fn merchant_category_description(mcc: &str) -> String {
    codes::merchant_category_description(mcc).to_string()
}

/// Информация о версии
#[wasm_bindgen(js_name = version)]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_codec_creation() {
        let _codec = WasmPaymentCodec::new();
    }

    #[wasm_bindgen_test]
    fn test_encode_payment() {
        let codec = WasmPaymentCodec::new();
        let raw = codec.encode_payment("Test Shop", "Dakar", "1000.00").unwrap();
        assert!(raw.starts_with("000201"));
        assert!(codec.validate(&raw));
        assert!(validate_payload(&raw));
    }

    #[wasm_bindgen_test]
    fn test_object_round_trip() {
        let codec = WasmPaymentCodec::new();
        let object = codec.create_payment("Test Shop", "Dakar", "12.5").unwrap();
        let raw = codec.encode(object).unwrap();
        assert!(raw.contains("54041250"));
        assert!(codec.parse(&raw).is_ok());
        assert!(codec.summary(&raw).is_ok());
    }

    #[wasm_bindgen_test]
    fn test_custom_defaults() {
        let codec = WasmPaymentCodec::with_defaults(r#"{"country_code": "CI"}"#).unwrap();
        let raw = codec.encode_payment("Maquis", "Abidjan", "5000").unwrap();
        assert!(raw.contains("5802CI"));
    }

    #[wasm_bindgen_test]
    fn test_lookups() {
        assert_eq!(currency_description("840"), "US Dollar (USD)");
        assert!(!version().is_empty());
    }
}
