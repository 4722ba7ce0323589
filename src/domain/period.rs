use crate::domain::RequestError;

/// Recurrence granularity of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodUnit {
    Daily,
    Weekly,
    Monthly,
}

impl PeriodUnit {
    pub fn parse(unit: &str) -> Result<PeriodUnit, RequestError> {
        match unit {
            "d" => Ok(PeriodUnit::Daily),
            "ww" => Ok(PeriodUnit::Weekly),
            "m" => Ok(PeriodUnit::Monthly),
            other => Err(RequestError::invalid(
                "SUB_PERIOD_UNIT",
                format!("'{}' is not one of d, ww or m", other),
            )),
        }
    }

    /// Gateway code for the unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodUnit::Daily => "d",
            PeriodUnit::Weekly => "ww",
            PeriodUnit::Monthly => "m",
        }
    }

    /// Highest moment the unit admits: day of week for weekly, day of month
    /// for monthly. Daily periods only need a positive moment.
    pub fn max_moment(&self) -> Option<i64> {
        match self {
            PeriodUnit::Daily => None,
            PeriodUnit::Weekly => Some(7),
            // every month has a 28th
            PeriodUnit::Monthly => Some(28),
        }
    }

    pub fn check_moment(&self, moment: i64) -> Result<(), RequestError> {
        if moment <= 0 {
            return Err(RequestError::invalid(
                "SUB_PERIOD_MOMENT",
                "must be a positive integer",
            ));
        }
        match self.max_moment() {
            Some(max) if moment > max => Err(RequestError::invalid(
                "SUB_PERIOD_MOMENT",
                format!("must be at most {} for unit '{}'", max, self.as_str()),
            )),
            _ => Ok(()),
        }
    }
}
