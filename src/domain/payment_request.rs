use crate::domain::fields::{check_amount, check_text, is_identifier_char};
use crate::domain::{ParameterMap, RequestError};

/// Parameters every payment request must carry before submission.
pub const BASE_REQUIRED_FIELDS: [&str; 2] = ["PSPID", "currency"];

const SUPPORTED_CURRENCIES: [&str; 45] = [
    "AED", "ANG", "ARS", "AUD", "AWG", "BGN", "BRL", "BYR", "CAD", "CHF", "CNY",
    "CZK", "DKK", "EEK", "EGP", "EUR", "GBP", "GEL", "HKD", "HRK", "HUF", "ILS",
    "ISK", "JPY", "KRW", "LTL", "LVL", "MAD", "MXN", "NOK", "NZD", "PLN", "RON",
    "RUB", "SEK", "SGD", "SKK", "THB", "TRY", "UAH", "USD", "XAF", "XOF", "XPF",
    "ZAR",
];

const SUPPORTED_LANGUAGES: [&str; 22] = [
    "ar_AR", "cs_CZ", "zh_CN", "da_DK", "nl_BE", "nl_NL", "en_GB", "en_US",
    "fr_FR", "de_DE", "el_GR", "hu_HU", "it_IT", "ja_JP", "no_NO", "pl_PL",
    "pt_PT", "ru_RU", "sk_SK", "es_ES", "se_SE", "tr_TR",
];

/// Generic payment parameters shared by every gateway request.
#[derive(Debug, Clone, Default)]
pub struct PaymentRequest {
    parameters: ParameterMap,
    gateway_url: Option<String>,
}

impl PaymentRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parameters(&self) -> &ParameterMap {
        &self.parameters
    }

    pub fn into_parameters(self) -> ParameterMap {
        self.parameters
    }

    pub fn gateway_url(&self) -> Option<&str> {
        self.gateway_url.as_deref()
    }

    pub(crate) fn parameters_mut(&mut self) -> &mut ParameterMap {
        &mut self.parameters
    }

    pub fn set_gateway_url(&mut self, url: &str) -> Result<(), RequestError> {
        let is_http = url.starts_with("https://") || url.starts_with("http://");
        if !is_http || !validator::validate_url(url) {
            return Err(RequestError::invalid(
                "gateway url",
                format!("'{}' is not an absolute http(s) url", url),
            ));
        }
        self.gateway_url = Some(url.to_string());
        Ok(())
    }

    pub fn set_pspid(&mut self, pspid: &str) -> Result<(), RequestError> {
        if pspid.is_empty() {
            return Err(RequestError::invalid("PSPID", "can not be empty"));
        }
        check_text("PSPID", pspid, 30, is_identifier_char)?;
        self.parameters.insert("PSPID", pspid);
        Ok(())
    }

    pub fn set_order_id(&mut self, order_id: &str) -> Result<(), RequestError> {
        check_text("orderid", order_id, 30, is_identifier_char)?;
        self.parameters.insert("orderid", order_id);
        Ok(())
    }

    /// Amount in cents. One-off payments must charge something.
    pub fn set_amount(&mut self, amount: i64) -> Result<(), RequestError> {
        check_amount("amount", amount, false)?;
        self.parameters.insert("amount", amount);
        Ok(())
    }

    pub fn set_currency(&mut self, currency: &str) -> Result<(), RequestError> {
        if !SUPPORTED_CURRENCIES.contains(&currency) {
            return Err(RequestError::invalid(
                "currency",
                format!("'{}' is not a supported currency", currency),
            ));
        }
        self.parameters.insert("currency", currency);
        Ok(())
    }

    pub fn set_language(&mut self, language: &str) -> Result<(), RequestError> {
        if !SUPPORTED_LANGUAGES.contains(&language) {
            return Err(RequestError::invalid(
                "language",
                format!("'{}' is not a supported language", language),
            ));
        }
        self.parameters.insert("language", language);
        Ok(())
    }

    pub fn set_email(&mut self, email: &str) -> Result<(), RequestError> {
        check_text("EMAIL", email, 50, |_| true)?;
        if !validator::validate_email(email) {
            return Err(RequestError::invalid(
                "EMAIL",
                format!("'{}' is not a valid email address", email),
            ));
        }
        self.parameters.insert("EMAIL", email);
        Ok(())
    }

    pub fn set_customer_name(&mut self, name: &str) -> Result<(), RequestError> {
        check_text("CN", name, 35, |c| !c.is_control())?;
        self.parameters.insert("CN", name);
        Ok(())
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        if let Some(field) = self.parameters.first_missing(&BASE_REQUIRED_FIELDS) {
            return Err(RequestError::IncompleteState { field });
        }
        if self.gateway_url.is_none() {
            return Err(RequestError::IncompleteState {
                field: "gateway url",
            });
        }
        Ok(())
    }
}
