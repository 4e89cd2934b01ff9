//! Bus factor: resilience to losing contributors.

use super::MetricValue;
use crate::Result;
use crate::context::{Context, keys};

/// Contributor count at which the project is considered fully resilient.
const SATURATION: f64 = 5.0;

const SINGLE_MAINTAINER: f64 = 0.1;

pub fn score(context: &Context) -> Result<MetricValue> {
    let contributors = context.number(keys::GIT_CONTRIBUTORS)?.unwrap_or(1.0);

    let score = if contributors <= 1.0 {
        SINGLE_MAINTAINER
    } else {
        (contributors / SATURATION).clamp(SINGLE_MAINTAINER, 1.0)
    };

    Ok(MetricValue::Score(score))
}
