//! Piecewise-linear sub-score tables for the value factors.

/// One linear piece: applies while `x < upper`, valued
/// `max(floor, value + slope * (x - origin))`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Segment {
    pub upper: f64,
    pub origin: f64,
    pub value: f64,
    pub slope: f64,
    pub floor: f64,
}

impl Segment {
    const fn flat(upper: f64, value: f64) -> Self {
        Self {
            upper,
            origin: 0.0,
            value,
            slope: 0.0,
            floor: f64::NEG_INFINITY,
        }
    }

    const fn linear(upper: f64, origin: f64, value: f64, slope: f64) -> Self {
        Self {
            upper,
            origin,
            value,
            slope,
            floor: f64::NEG_INFINITY,
        }
    }

    const fn tail(origin: f64, value: f64, slope: f64, floor: f64) -> Self {
        Self {
            upper: f64::INFINITY,
            origin,
            value,
            slope,
            floor,
        }
    }

    fn eval(&self, x: f64) -> f64 {
        (self.value + self.slope * (x - self.origin)).max(self.floor)
    }
}

/// Ordered segment table; the final segment must be a tail.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScoreCurve {
    segments: &'static [Segment],
}

impl ScoreCurve {
    pub(crate) fn eval(&self, x: f64) -> f64 {
        if x.is_nan() {
            return self.segments.last().map(|segment| segment.floor).unwrap_or(0.0);
        }
        self.segments
            .iter()
            .find(|segment| x < segment.upper)
            .or_else(|| self.segments.last())
            .map(|segment| segment.eval(x))
            .unwrap_or(0.0)
    }
}

/// Dollars per bedroom: 15 below $250k, 10 at $350k, floor 5.
pub(crate) const PRICE_PER_BEDROOM: ScoreCurve = ScoreCurve {
    segments: &[
        Segment::flat(250_000.0, 15.0),
        Segment::linear(350_000.0, 250_000.0, 15.0, -5.0 / 100_000.0),
        Segment::tail(350_000.0, 10.0, -2.0 / 100_000.0, 5.0),
    ],
};

/// Percent difference from the suburb median price.
pub(crate) const PRICE_VS_MEDIAN: ScoreCurve = ScoreCurve {
    segments: &[
        Segment::flat(-15.0, 10.0),
        Segment::linear(0.0, 0.0, 10.0, 2.0 / 15.0),
        Segment::linear(15.0, 0.0, 8.0, -3.0 / 15.0),
        Segment::tail(15.0, 5.0, -3.0 / 20.0, 2.0),
    ],
};

/// Dollars per square metre of internal area: 10 below $3500, 6 at $5000, floor 2.
pub(crate) const PRICE_PER_SQM: ScoreCurve = ScoreCurve {
    segments: &[
        Segment::flat(3_500.0, 10.0),
        Segment::linear(5_000.0, 3_500.0, 10.0, -4.0 / 1_500.0),
        Segment::tail(5_000.0, 6.0, -2.0 / 1_000.0, 2.0),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn price_per_bedroom_breakpoints() {
        close(PRICE_PER_BEDROOM.eval(120_000.0), 15.0);
        close(PRICE_PER_BEDROOM.eval(250_000.0), 15.0);
        close(PRICE_PER_BEDROOM.eval(300_000.0), 12.5);
        close(PRICE_PER_BEDROOM.eval(350_000.0), 10.0);
        close(PRICE_PER_BEDROOM.eval(450_000.0), 8.0);
        close(PRICE_PER_BEDROOM.eval(600_000.0), 5.0);
        close(PRICE_PER_BEDROOM.eval(2_000_000.0), 5.0);
    }

    #[test]
    fn price_vs_median_breakpoints() {
        close(PRICE_VS_MEDIAN.eval(-40.0), 10.0);
        close(PRICE_VS_MEDIAN.eval(-15.0), 8.0);
        close(PRICE_VS_MEDIAN.eval(-7.5), 9.0);
        close(PRICE_VS_MEDIAN.eval(0.0), 8.0);
        close(PRICE_VS_MEDIAN.eval(7.5), 6.5);
        close(PRICE_VS_MEDIAN.eval(15.0), 5.0);
        close(PRICE_VS_MEDIAN.eval(35.0), 2.0);
        close(PRICE_VS_MEDIAN.eval(90.0), 2.0);
    }

    #[test]
    fn price_per_sqm_breakpoints() {
        close(PRICE_PER_SQM.eval(2_000.0), 10.0);
        close(PRICE_PER_SQM.eval(3_500.0), 10.0);
        close(PRICE_PER_SQM.eval(4_250.0), 8.0);
        close(PRICE_PER_SQM.eval(5_000.0), 6.0);
        close(PRICE_PER_SQM.eval(6_000.0), 4.0);
        close(PRICE_PER_SQM.eval(12_000.0), 2.0);
    }

    #[test]
    fn curves_stay_within_their_caps() {
        for step in 0..400 {
            let x = step as f64 * 10_000.0;
            let bedroom = PRICE_PER_BEDROOM.eval(x);
            assert!((5.0..=15.0).contains(&bedroom));
            let sqm = PRICE_PER_SQM.eval(x / 100.0);
            assert!((2.0..=10.0).contains(&sqm));
            let median = PRICE_VS_MEDIAN.eval(step as f64 - 200.0);
            assert!((2.0..=10.0).contains(&median));
        }
    }

    #[test]
    fn nan_input_scores_at_the_floor() {
        close(PRICE_PER_SQM.eval(f64::NAN), 2.0);
    }
}
