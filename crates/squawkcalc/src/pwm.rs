//! PWM carrier timer (Timer1) rate math.
//!
//! Timer1 runs off the PLL-multiplied fast clock so the PWM carrier sits far
//! above the audio band; the output filter only has to reject the carrier,
//! not the audio itself.

use squawker_hw::specs::clock;

/// Fast peripheral clock for a given system clock
///
/// The PLL multiplier is a hardware constant ([`clock::PLL_MULTIPLIER`]).
pub fn pll_clock_hz(system_clock_hz: f64) -> f64 {
    system_clock_hz * clock::PLL_MULTIPLIER
}

/// PWM carrier frequency for a given fast clock, divisor and counter top
///
/// `f_pwm = (pll_clock_hz / divisor) / (counter_top + 1)`
pub fn carrier_frequency_hz(pll_clock_hz: f64, divisor: u32, counter_top: u32) -> f64 {
    (pll_clock_hz / divisor as f64) / (counter_top as f64 + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_settings_give_250khz() {
        let f = carrier_frequency_hz(64e6, 1, 255);
        assert!((f - 250_000.0).abs() < 1e-9);
    }

    #[test]
    fn pll_multiplies_the_system_clock_by_eight() {
        assert!((pll_clock_hz(8e6) - 64e6).abs() < 1e-9);
    }
}
