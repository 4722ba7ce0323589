use crate::domain::fields::{check_amount, check_text, is_identifier_char, is_text_char};
use crate::domain::{
    CalendarDate, ParameterMap, PaymentRequest, PeriodUnit, RequestError, MAX_AMOUNT,
};

/// Subscription parameters that must be present before submission.
pub const REQUIRED_FIELDS: [&str; 10] = [
    "SUBSCRIPTION_ID",
    "SUB_AMOUNT",
    "SUB_COM",
    "SUB_ORDERID",
    "SUB_PERIOD_UNIT",
    "SUB_PERIOD_NUMBER",
    "SUB_PERIOD_MOMENT",
    "SUB_STARTDATE",
    "SUB_ENDDATE",
    "SUB_STATUS",
];

/// A payment request that opens a recurring subscription on the gateway.
///
/// Each setter validates its input before storing it; a rejected value leaves
/// the parameters untouched. Call [`SubscriptionRequest::validate`] before
/// handing the parameters to a transport.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionRequest {
    base: PaymentRequest,
}

impl SubscriptionRequest {
    pub fn new(base: PaymentRequest) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &PaymentRequest {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut PaymentRequest {
        &mut self.base
    }

    pub fn parameters(&self) -> &ParameterMap {
        self.base.parameters()
    }

    pub fn into_parameters(self) -> ParameterMap {
        self.base.into_parameters()
    }

    fn store(&mut self) -> &mut ParameterMap {
        self.base.parameters_mut()
    }

    /// Initial charge in cents. Unlike one-off payments a subscription may be
    /// opened without charging anything up front.
    pub fn set_amount(&mut self, amount: i64) -> Result<(), RequestError> {
        check_amount("amount", amount, true)?;
        self.store().insert("amount", amount);
        Ok(())
    }

    pub fn set_subscription_id(&mut self, id: &str) -> Result<(), RequestError> {
        check_text("SUBSCRIPTION_ID", id, 50, is_identifier_char)?;
        self.store().insert("SUBSCRIPTION_ID", id);
        Ok(())
    }

    /// Amount charged on every period, in cents.
    pub fn set_subscription_amount(&mut self, amount: i64) -> Result<(), RequestError> {
        check_amount("SUB_AMOUNT", amount, false)?;
        self.store().insert("SUB_AMOUNT", amount);
        Ok(())
    }

    pub fn set_subscription_description(&mut self, description: &str) -> Result<(), RequestError> {
        check_text("SUB_COM", description, 100, is_text_char)?;
        self.store().insert("SUB_COM", description);
        Ok(())
    }

    pub fn set_subscription_order_id(&mut self, order_id: &str) -> Result<(), RequestError> {
        check_text("SUB_ORDERID", order_id, 40, is_identifier_char)?;
        self.store().insert("SUB_ORDERID", order_id);
        Ok(())
    }

    /// Schedule: every `interval` units, on day `moment` of the unit.
    ///
    /// The moment's upper bound depends on the unit, so the unit is resolved
    /// first. Nothing is stored unless all three values are valid.
    pub fn set_subscription_period(
        &mut self,
        unit: &str,
        interval: i64,
        moment: i64,
    ) -> Result<(), RequestError> {
        let unit = PeriodUnit::parse(unit)?;
        if interval < 0 {
            return Err(RequestError::invalid(
                "SUB_PERIOD_NUMBER",
                "must be zero or positive",
            ));
        }
        if interval >= MAX_AMOUNT {
            return Err(RequestError::invalid("SUB_PERIOD_NUMBER", "is too high"));
        }
        unit.check_moment(moment)?;

        let store = self.store();
        store.insert("SUB_PERIOD_UNIT", unit.as_str());
        store.insert("SUB_PERIOD_NUMBER", interval);
        store.insert("SUB_PERIOD_MOMENT", moment);
        Ok(())
    }

    pub fn set_subscription_startdate(&mut self, date: &impl CalendarDate) {
        self.store().insert("SUB_STARTDATE", date.to_gateway_format());
    }

    pub fn set_subscription_enddate(&mut self, date: &impl CalendarDate) {
        self.store().insert("SUB_ENDDATE", date.to_gateway_format());
    }

    /// 1 activates the subscription, 0 registers it as inactive.
    pub fn set_subscription_status(&mut self, status: i64) -> Result<(), RequestError> {
        if status != 0 && status != 1 {
            return Err(RequestError::invalid(
                "SUB_STATUS",
                format!("must be 0 or 1, got {}", status),
            ));
        }
        self.store().insert("SUB_STATUS", status);
        Ok(())
    }

    pub fn set_subscription_comment(&mut self, comment: &str) -> Result<(), RequestError> {
        check_text("SUB_COMMENT", comment, 200, is_text_char)?;
        self.store().insert("SUB_COMMENT", comment);
        Ok(())
    }

    #[tracing::instrument(name = "validate subscription request", skip(self))]
    pub fn validate(&self) -> Result<(), RequestError> {
        self.base.validate()?;
        if let Some(field) = self.parameters().first_missing(&REQUIRED_FIELDS) {
            tracing::debug!(field, "subscription request is incomplete");
            return Err(RequestError::IncompleteState { field });
        }
        Ok(())
    }
}
