//! Sampling timer (Timer0) rate math.
//!
//! Timer0 counts at the prescaled system clock and fires its compare
//! interrupt every `counter_max + 1` counts. That interrupt is the sample
//! clock for the whole synth, so everything downstream (DCO tick rate,
//! output bandwidth) hangs off the numbers computed here.

use squawker_hw::specs::timer0;
use tracing::debug;

/// Interrupt (sample) rate for a given prescaler divisor and counter top
///
/// `rate = (system_clock_hz / divisor) / (counter_max + 1)`
pub fn interrupt_rate_hz(system_clock_hz: f64, divisor: u32, counter_max: u32) -> f64 {
    (system_clock_hz / divisor as f64) / (counter_max as f64 + 1.0)
}

/// Outcome of the prescaler search
#[derive(Debug, Clone, PartialEq)]
pub enum PrescalerSelection {
    /// First candidate divisor whose counter top fits the 8-bit counter
    Found {
        divisor: u32,
        counter_max: u8,
        rate_hz: f64,
    },
    /// No candidate fits. Carries the last candidate evaluated and the
    /// (out-of-range) counter top it would need, so the caller can decide
    /// whether to fall back or abort.
    NotFound {
        divisor: u32,
        counter_max: u32,
        rate_hz: f64,
    },
}

/// Pick the smallest prescaler divisor that reaches `desired_rate_hz`
/// within the 8-bit counter.
///
/// Candidates are tried in ascending order ([`timer0::PRESCALER_CANDIDATES`]);
/// for each, the ideal counter top is `system_clock_hz / divisor /
/// desired_rate_hz - 1`, rounded to the nearest integer (ties away from
/// zero, `f64::round`). The first candidate whose top fits is returned with
/// the rate recomputed from the rounded top, so the achieved rate can differ
/// slightly from the requested one.
pub fn select_prescaler(system_clock_hz: f64, desired_rate_hz: f64) -> PrescalerSelection {
    let mut last = (0u32, 0u32);

    for &divisor in timer0::PRESCALER_CANDIDATES.iter() {
        let timer_clk = system_clock_hz / divisor as f64;
        // A desired rate above the timer clock would round to a negative top;
        // clamp to zero, the shortest period the counter can produce.
        let counter_max = (timer_clk / desired_rate_hz - 1.0).round().max(0.0) as u32;
        debug!(
            "prescaler /{}: timer clock {:.1} Hz, counter top {}",
            divisor, timer_clk, counter_max
        );

        if counter_max <= timer0::COUNTER_TOP_LIMIT {
            return PrescalerSelection::Found {
                divisor,
                counter_max: counter_max as u8,
                rate_hz: interrupt_rate_hz(system_clock_hz, divisor, counter_max),
            };
        }

        last = (divisor, counter_max);
    }

    let (divisor, counter_max) = last;
    PrescalerSelection::NotFound {
        divisor,
        counter_max,
        rate_hz: interrupt_rate_hz(system_clock_hz, divisor, counter_max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn stock_settings_give_5khz() {
        let rate = interrupt_rate_hz(8e6, 8, 199);
        assert!((rate - 5000.0).abs() < 1e-9);
    }

    #[test]
    fn search_skips_divisors_that_overflow_the_counter() {
        // 8 MHz, 1 kHz target: /1 needs top 7999 and /8 needs top 999,
        // both past 255; /64 lands at top 124 and hits the rate exactly.
        match select_prescaler(8e6, 1e3) {
            PrescalerSelection::Found {
                divisor,
                counter_max,
                rate_hz,
            } => {
                assert_eq!(divisor, 64);
                assert_eq!(counter_max, 124);
                assert!((rate_hz - 1000.0).abs() < 1e-9);
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn search_reproduces_the_stock_settings() {
        match select_prescaler(8e6, 5e3) {
            PrescalerSelection::Found {
                divisor,
                counter_max,
                rate_hz,
            } => {
                assert_eq!(divisor, 8);
                assert_eq!(counter_max, 199);
                assert!((rate_hz - 5000.0).abs() < 1e-9);
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn search_reports_not_found_instead_of_overflowing() {
        // 1 Hz from 8 MHz: even /1024 would need a counter top of 7812.
        match select_prescaler(8e6, 1.0) {
            PrescalerSelection::NotFound {
                divisor,
                counter_max,
                ..
            } => {
                assert_eq!(divisor, 1024);
                assert_eq!(counter_max, 7812);
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn rate_decreases_with_counter_top(
            clock in 1e3..1e9f64,
            divisor in 1u32..=4096,
            counter_max in 0u32..=254,
        ) {
            prop_assert!(
                interrupt_rate_hz(clock, divisor, counter_max)
                    > interrupt_rate_hz(clock, divisor, counter_max + 1)
            );
        }

        #[test]
        fn rate_decreases_with_divisor(
            clock in 1e3..1e9f64,
            divisor in 1u32..=2048,
            counter_max in 0u32..=255,
        ) {
            prop_assert!(
                interrupt_rate_hz(clock, divisor, counter_max)
                    > interrupt_rate_hz(clock, divisor * 2, counter_max)
            );
        }
    }
}
