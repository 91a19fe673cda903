//! Справочники для отображения: валюты ISO 4217 и коды категорий мерчантов ISO 18245
//!
//! Таблицы - константы времени компиляции, отсортированы по коду
//! и ищутся двоичным поиском. Никакого изменяемого глобального состояния.

use serde::Serialize;

/// Валюта ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    /// Числовой код (как в теге 53)
    pub numeric: &'static str,
    /// Буквенный код
    pub alpha: &'static str,
    pub name: &'static str,
}

/// (числовой код, буквенный код, название)
const CURRENCIES: &[(&str, &str, &str)] = &[
    ("012", "DZD", "Algerian Dinar"),
    ("032", "ARS", "Argentine Peso"),
    ("036", "AUD", "Australian Dollar"),
    ("044", "BSD", "Bahamian Dollar"),
    ("048", "BHD", "Bahraini Dinar"),
    ("050", "BDT", "Bangladeshi Taka"),
    ("051", "AMD", "Armenian Dram"),
    ("052", "BBD", "Barbadian Dollar"),
    ("060", "BMD", "Bermudian Dollar"),
    ("064", "BTN", "Bhutanese Ngultrum"),
    ("068", "BOB", "Bolivian Boliviano"),
    ("072", "BWP", "Botswana Pula"),
    ("084", "BZD", "Belize Dollar"),
    ("090", "SBD", "Solomon Islands Dollar"),
    ("096", "BND", "Brunei Dollar"),
    ("104", "MMK", "Myanmar Kyat"),
    ("108", "BIF", "Burundian Franc"),
    ("116", "KHR", "Cambodian Riel"),
    ("124", "CAD", "Canadian Dollar"),
    ("132", "CVE", "Cape Verdean Escudo"),
    ("136", "KYD", "Cayman Islands Dollar"),
    ("144", "LKR", "Sri Lankan Rupee"),
    ("152", "CLP", "Chilean Peso"),
    ("156", "CNY", "Chinese Yuan"),
    ("170", "COP", "Colombian Peso"),
    ("174", "KMF", "Comorian Franc"),
    ("188", "CRC", "Costa Rican Colón"),
    ("191", "HRK", "Croatian Kuna"),
    ("192", "CUP", "Cuban Peso"),
    ("203", "CZK", "Czech Koruna"),
    ("208", "DKK", "Danish Krone"),
    ("214", "DOP", "Dominican Peso"),
    ("222", "SVC", "Salvadoran Colón"),
    ("230", "ETB", "Ethiopian Birr"),
    ("232", "ERN", "Eritrean Nakfa"),
    ("238", "FKP", "Falkland Islands Pound"),
    ("242", "FJD", "Fijian Dollar"),
    ("262", "DJF", "Djiboutian Franc"),
    ("270", "GMD", "Gambian Dalasi"),
    ("292", "GIP", "Gibraltar Pound"),
    ("320", "GTQ", "Guatemalan Quetzal"),
    ("324", "GNF", "Guinean Franc"),
    ("328", "GYD", "Guyanese Dollar"),
    ("332", "HTG", "Haitian Gourde"),
    ("340", "HNL", "Honduran Lempira"),
    ("344", "HKD", "Hong Kong Dollar"),
    ("348", "HUF", "Hungarian Forint"),
    ("352", "ISK", "Icelandic Króna"),
    ("356", "INR", "Indian Rupee"),
    ("360", "IDR", "Indonesian Rupiah"),
    ("364", "IRR", "Iranian Rial"),
    ("368", "IQD", "Iraqi Dinar"),
    ("376", "ILS", "Israeli New Shekel"),
    ("388", "JMD", "Jamaican Dollar"),
    ("392", "JPY", "Japanese Yen"),
    ("398", "KZT", "Kazakhstani Tenge"),
    ("400", "JOD", "Jordanian Dinar"),
    ("404", "KES", "Kenyan Shilling"),
    ("408", "KPW", "North Korean Won"),
    ("410", "KRW", "South Korean Won"),
    ("414", "KWD", "Kuwaiti Dinar"),
    ("417", "KGS", "Kyrgyzstani Som"),
    ("418", "LAK", "Lao Kip"),
    ("422", "LBP", "Lebanese Pound"),
    ("426", "LSL", "Lesotho Loti"),
    ("430", "LRD", "Liberian Dollar"),
    ("434", "LYD", "Libyan Dinar"),
    ("446", "MOP", "Macanese Pataca"),
    ("454", "MWK", "Malawian Kwacha"),
    ("458", "MYR", "Malaysian Ringgit"),
    ("462", "MVR", "Maldivian Rufiyaa"),
    ("480", "MUR", "Mauritian Rupee"),
    ("484", "MXN", "Mexican Peso"),
    ("496", "MNT", "Mongolian Tögrög"),
    ("498", "MDL", "Moldovan Leu"),
    ("504", "MAD", "Moroccan Dirham"),
    ("512", "OMR", "Omani Rial"),
    ("516", "NAD", "Namibian Dollar"),
    ("524", "NPR", "Nepalese Rupee"),
    ("532", "ANG", "Netherlands Antillean Guilder"),
    ("533", "AWG", "Aruban Florin"),
    ("548", "VUV", "Vanuatu Vatu"),
    ("554", "NZD", "New Zealand Dollar"),
    ("558", "NIO", "Nicaraguan Córdoba"),
    ("566", "NGN", "Nigerian Naira"),
    ("578", "NOK", "Norwegian Krone"),
    ("586", "PKR", "Pakistani Rupee"),
    ("590", "PAB", "Panamanian Balboa"),
    ("598", "PGK", "Papua New Guinean Kina"),
    ("600", "PYG", "Paraguayan Guaraní"),
    ("604", "PEN", "Peruvian Sol"),
    ("608", "PHP", "Philippine Peso"),
    ("634", "QAR", "Qatari Riyal"),
    ("643", "RUB", "Russian Ruble"),
    ("646", "RWF", "Rwandan Franc"),
    ("654", "SHP", "Saint Helena Pound"),
    ("682", "SAR", "Saudi Riyal"),
    ("690", "SCR", "Seychellois Rupee"),
    ("694", "SLL", "Sierra Leonean Leone"),
    ("702", "SGD", "Singapore Dollar"),
    ("704", "VND", "Vietnamese Dong"),
    ("706", "SOS", "Somali Shilling"),
    ("710", "ZAR", "South African Rand"),
    ("728", "SSP", "South Sudanese Pound"),
    ("748", "SZL", "Swazi Lilangeni"),
    ("752", "SEK", "Swedish Krona"),
    ("756", "CHF", "Swiss Franc"),
    ("760", "SYP", "Syrian Pound"),
    ("764", "THB", "Thai Baht"),
    ("776", "TOP", "Tongan Paʻanga"),
    ("780", "TTD", "Trinidad and Tobago Dollar"),
    ("784", "AED", "UAE Dirham"),
    ("788", "TND", "Tunisian Dinar"),
    ("800", "UGX", "Ugandan Shilling"),
    ("807", "MKD", "Macedonian Denar"),
    ("818", "EGP", "Egyptian Pound"),
    ("826", "GBP", "British Pound"),
    ("834", "TZS", "Tanzanian Shilling"),
    ("840", "USD", "US Dollar"),
    ("858", "UYU", "Uruguayan Peso"),
    ("860", "UZS", "Uzbekistani Som"),
    ("882", "WST", "Samoan Tālā"),
    ("886", "YER", "Yemeni Rial"),
    ("901", "TWD", "New Taiwan Dollar"),
    ("925", "SLE", "Sierra Leonean Leone"),
    ("929", "MRU", "Mauritanian Ouguiya"),
    ("930", "STN", "São Tomé and Príncipe Dobra"),
    ("931", "CUC", "Cuban Convertible Peso"),
    ("932", "ZWL", "Zimbabwean Dollar"),
    ("933", "BYN", "Belarusian Ruble"),
    ("934", "TMT", "Turkmenistani Manat"),
    ("936", "GHS", "Ghanaian Cedi"),
    ("937", "VES", "Venezuelan Bolívar"),
    ("938", "SDG", "Sudanese Pound"),
    ("940", "UYI", "Uruguayan Peso"),
    ("941", "RSD", "Serbian Dinar"),
    ("943", "MZN", "Mozambican Metical"),
    ("944", "AZN", "Azerbaijani Manat"),
    ("946", "RON", "Romanian Leu"),
    ("947", "CHW", "Swiss Franc WIR"),
    ("948", "CHE", "Euro WIR"),
    ("949", "TRY", "Turkish Lira"),
    ("950", "XAF", "Central African CFA Franc"),
    ("951", "XCD", "East Caribbean Dollar"),
    ("952", "XOF", "West African CFA Franc"),
    ("953", "XPF", "CFP Franc"),
    ("960", "XDR", "Special Drawing Rights"),
    ("965", "XUA", "ADB Unit of Account"),
    ("967", "ZMW", "Zambian Kwacha"),
    ("968", "SRD", "Surinamese Dollar"),
    ("969", "MGA", "Malagasy Ariary"),
    ("971", "AFN", "Afghan Afghani"),
    ("972", "TJS", "Tajikistani Somoni"),
    ("973", "AOA", "Angolan Kwanza"),
    ("975", "BGN", "Bulgarian Lev"),
    ("976", "CDF", "Congolese Franc"),
    ("977", "BAM", "Bosnian Convertible Mark"),
    ("978", "EUR", "Euro"),
    ("979", "MXV", "Mexican Unidad de Inversion"),
    ("980", "UAH", "Ukrainian Hryvnia"),
    ("981", "GEL", "Georgian Lari"),
    ("984", "BOV", "Bolivian Mvdol"),
    ("985", "PLN", "Polish Złoty"),
    ("986", "BRL", "Brazilian Real"),
    ("990", "CLF", "Chilean Unidad de Fomento"),
    ("994", "VED", "Venezuelan Petro"),
    ("997", "USN", "US Dollar (Next day)"),
    ("999", "XXX", "No currency"),
];

/// (MCC, описание)
const MERCHANT_CATEGORIES: &[(&str, &str)] = &[
    ("4121", "Taxicabs and Limousines"),
    ("4511", "Airlines"),
    ("4722", "Travel Agencies and Tour Operators"),
    ("4789", "Transportation Services"),
    ("5399", "Miscellaneous General Merchandise, Internet Services"),
    ("5411", "Grocery Stores, Supermarkets"),
    ("5541", "Service Stations"),
    ("5812", "Eating Places, Restaurants"),
    ("5814", "Fast Food Restaurants"),
    ("5912", "Drug Stores and Pharmacies"),
    ("5999", "Other Services"),
    ("6011", "Financial Institutions - Automated Cash Disbursements"),
    ("6012", "Financial Institutions - Merchandise and Services"),
    ("6051", "Money Transfer"),
    ("7011", "Lodging - Hotels, Motels, Resorts"),
    ("7512", "Car Rental Agencies"),
    ("8011", "Doctors"),
    ("8062", "Hospitals"),
];

/// Поиск валюты по числовому коду
pub fn currency(code: &str) -> Option<Currency> {
    CURRENCIES
        .binary_search_by_key(&code, |&(numeric, _, _)| numeric)
        .ok()
        .map(|idx| {
            let (numeric, alpha, name) = CURRENCIES[idx];
            Currency {
                numeric,
                alpha,
                name,
            }
        })
}

/// Буквенный код валюты; неизвестный код возвращается как есть
pub fn currency_alpha(code: &str) -> String {
    currency(code)
        .map(|c| c.alpha.to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Описание валюты для отображения, например "West African CFA Franc (XOF)"
pub fn currency_description(code: &str) -> String {
    match currency(code) {
        Some(c) => format!("{} ({})", c.name, c.alpha),
        None => format!("Unknown Currency ({})", code),
    }
}

/// Описание категории мерчанта
pub fn merchant_category_description(mcc: &str) -> &'static str {
    MERCHANT_CATEGORIES
        .binary_search_by_key(&mcc, |&(code, _)| code)
        .map(|idx| MERCHANT_CATEGORIES[idx].1)
        .unwrap_or("Unknown Category")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_sorted() {
        assert!(CURRENCIES.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(MERCHANT_CATEGORIES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_currency_lookup() {
        assert!(currency_description("952").contains("XOF"));
        assert!(currency_description("840").contains("USD"));
        assert!(currency_description("978").contains("EUR"));
        assert!(currency_description("566").contains("NGN"));
        assert_eq!(currency_description("000"), "Unknown Currency (000)");

        let xof = currency("952").unwrap();
        assert_eq!(xof.alpha, "XOF");
        assert_eq!(xof.name, "West African CFA Franc");
    }

    #[test]
    fn test_currency_alpha() {
        assert_eq!(currency_alpha("643"), "RUB");
        assert_eq!(currency_alpha("156"), "CNY");
        assert_eq!(currency_alpha("123"), "123");
    }

    #[test]
    fn test_merchant_category() {
        assert_eq!(
            merchant_category_description("5411"),
            "Grocery Stores, Supermarkets"
        );
        assert_eq!(merchant_category_description("0000"), "Unknown Category");
    }
}
