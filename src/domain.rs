mod calendar_date;
mod error;
mod fields;
mod parameter_map;
mod payment_request;
mod period;
mod subscription_request;

pub use calendar_date::CalendarDate;
pub use error::RequestError;
pub use fields::MAX_AMOUNT;
pub use parameter_map::{ParameterMap, ParameterValue};
pub use payment_request::{PaymentRequest, BASE_REQUIRED_FIELDS};
pub use period::PeriodUnit;
pub use subscription_request::{SubscriptionRequest, REQUIRED_FIELDS};
