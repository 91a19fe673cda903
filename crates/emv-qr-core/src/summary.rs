//! Человекочитаемое представление платёжных данных
//!
//! Используется интерфейсом для показа содержимого QR до подтверждения оплаты.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codes;
use crate::payload::{PaymentPayload, PointOfInitiation};

/// Сводка по платежу
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSummary {
    /// "Название - Город"
    pub merchant: String,
    /// Описание категории мерчанта
    pub category: String,
    /// Описание валюты, например "US Dollar (USD)"
    pub currency: String,
    /// Буквенный код валюты (или числовой, если неизвестен)
    pub currency_alpha: String,
    /// Сумма с двумя знаками после запятой
    pub amount: String,
    /// Способ инициации
    pub initiation: PointOfInitiation,
    /// Идентификатор мерчанта, если указан
    pub merchant_id: Option<String>,
}

impl From<&PaymentPayload> for PaymentSummary {
    fn from(payload: &PaymentPayload) -> Self {
        Self {
            merchant: format!("{} - {}", payload.merchant_name, payload.merchant_city),
            category: codes::merchant_category_description(&payload.merchant_category_code)
                .to_string(),
            currency: codes::currency_description(&payload.currency_code),
            currency_alpha: codes::currency_alpha(&payload.currency_code),
            amount: format!("{:.2}", payload.amount),
            initiation: payload.point_of_initiation,
            merchant_id: payload.merchant_account.merchant_id.clone(),
        }
    }
}

impl PaymentPayload {
    /// Сводка для отображения
    pub fn summary(&self) -> PaymentSummary {
        PaymentSummary::from(self)
    }
}

impl fmt::Display for PaymentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} {} | {}",
            self.merchant, self.amount, self.currency_alpha, self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PaymentDefaults;
    use rust_decimal::Decimal;

    #[test]
    fn test_summary() {
        let payload = PaymentDefaults::default()
            .retail("Test Shop", "Dakar", Decimal::new(125, 1))
            .with_merchant_id("SHOP42");
        let summary = payload.summary();

        assert_eq!(summary.merchant, "Test Shop - Dakar");
        assert_eq!(summary.category, "Grocery Stores, Supermarkets");
        assert_eq!(summary.currency, "West African CFA Franc (XOF)");
        assert_eq!(summary.currency_alpha, "XOF");
        assert_eq!(summary.amount, "12.50");
        assert_eq!(summary.initiation, PointOfInitiation::Static);
        assert_eq!(summary.merchant_id.as_deref(), Some("SHOP42"));
        assert_eq!(
            summary.to_string(),
            "Test Shop - Dakar | 12.50 XOF | Grocery Stores, Supermarkets"
        );
    }

    #[test]
    fn test_unknown_codes() {
        let payload = PaymentPayload {
            merchant_category_code: "0001".to_string(),
            currency_code: "001".to_string(),
            ..Default::default()
        };
        let summary = payload.summary();
        assert_eq!(summary.category, "Unknown Category");
        assert_eq!(summary.currency, "Unknown Currency (001)");
        assert_eq!(summary.currency_alpha, "001");
        assert_eq!(summary.amount, "0.00");
    }
}
