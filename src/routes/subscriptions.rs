use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::configuration::GatewaySettings;
use crate::domain::{ParameterMap, PaymentRequest, RequestError, SubscriptionRequest};

#[derive(serde::Deserialize)]
pub struct SubscriptionForm {
    order_id: String,
    amount: i64,
    email: Option<String>,
    customer_name: Option<String>,
    subscription_id: String,
    subscription_amount: i64,
    description: String,
    subscription_order_id: String,
    period: PeriodForm,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: i64,
    comment: Option<String>,
}

#[derive(serde::Deserialize)]
pub struct PeriodForm {
    unit: String,
    interval: i64,
    moment: i64,
}

#[derive(serde::Serialize)]
struct PreparedSubscription<'a> {
    gateway_url: Option<&'a str>,
    parameters: &'a ParameterMap,
}

#[derive(thiserror::Error)]
pub enum SubscribeError {
    #[error(transparent)]
    ValidationError(#[from] RequestError),

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for SubscribeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SubscribeError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubscribeError::ValidationError(_) => StatusCode::BAD_REQUEST,
            SubscribeError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Dry run: builds and validates the gateway parameters without sending them.
#[tracing::instrument(
    name = "preparing a subscription request",
    skip(form, gateway),
    fields(
        request_id = %Uuid::new_v4(),
        subscription_id = %form.subscription_id,
    )
)]
pub async fn subscribe(
    form: web::Json<SubscriptionForm>,
    gateway: web::Data<GatewaySettings>,
) -> Result<HttpResponse, SubscribeError> {
    let base = gateway
        .payment_request()
        .context("gateway settings do not form a valid payment request")?;
    let request = build_subscription_request(base, &form)?;
    request.validate()?;

    tracing::info!("subscription request is ready for submission");
    Ok(HttpResponse::Ok().json(PreparedSubscription {
        gateway_url: request.base().gateway_url(),
        parameters: request.parameters(),
    }))
}

pub fn build_subscription_request(
    base: PaymentRequest,
    form: &SubscriptionForm,
) -> Result<SubscriptionRequest, RequestError> {
    let mut request = SubscriptionRequest::new(base);

    request.base_mut().set_order_id(&form.order_id)?;
    if let Some(email) = &form.email {
        request.base_mut().set_email(email)?;
    }
    if let Some(name) = &form.customer_name {
        request.base_mut().set_customer_name(name)?;
    }
    request.set_amount(form.amount)?;

    request.set_subscription_id(&form.subscription_id)?;
    request.set_subscription_amount(form.subscription_amount)?;
    request.set_subscription_description(&form.description)?;
    request.set_subscription_order_id(&form.subscription_order_id)?;
    request.set_subscription_period(
        &form.period.unit,
        form.period.interval,
        form.period.moment,
    )?;
    request.set_subscription_startdate(&form.start_date);
    request.set_subscription_enddate(&form.end_date);
    request.set_subscription_status(form.status)?;
    if let Some(comment) = &form.comment {
        request.set_subscription_comment(comment)?;
    }

    Ok(request)
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
