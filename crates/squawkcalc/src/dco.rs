//! Phase-accumulator DCO math.
//!
//! The firmware oscillator is a phase accumulator stepped once per Timer0
//! interrupt: each tick adds `increment` to a `dco_bits`-wide register and
//! the waveform is read off the high bits. One full wrap of the accumulator
//! is one output cycle, so the output frequency is `increment / 2^dco_bits`
//! of the tick rate.

/// Output frequency for a per-tick phase increment
pub fn frequency_from_increment(increment: f64, tick_rate_hz: f64, dco_bits: u32) -> f64 {
    tick_rate_hz * increment / (1u64 << dco_bits) as f64
}

/// Per-tick phase increment that produces `frequency_hz`
///
/// Exact algebraic inverse of [`frequency_from_increment`]. No rounding is
/// applied; callers that need an integer increment for the accumulator
/// register round explicitly.
pub fn increment_from_frequency(frequency_hz: f64, tick_rate_hz: f64, dco_bits: u32) -> f64 {
    frequency_hz * (1u64 << dco_bits) as f64 / tick_rate_hz
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn full_scale_averaged_code_lands_near_2500hz() {
        // increment = 32 * 1023 at 5 kHz tick rate, 16-bit accumulator
        let f = frequency_from_increment(32736.0, 5000.0, 16);
        assert!((f - 2497.6).abs() < 0.1);
    }

    #[test]
    fn full_scale_raw_code_lands_near_78hz() {
        let f = frequency_from_increment(1023.0, 5000.0, 16);
        assert!((f - 78.1).abs() < 0.1);
    }

    #[test]
    fn one_increment_per_tick_is_one_cycle_per_wrap() {
        // increment 1 wraps the accumulator every 2^16 ticks
        let f = frequency_from_increment(1.0, 65536.0, 16);
        assert!((f - 1.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn increment_and_frequency_round_trip(
            frequency_hz in 1e-3..1e6f64,
            tick_rate_hz in 1.0..1e9f64,
            dco_bits in 1u32..=32,
        ) {
            let inc = increment_from_frequency(frequency_hz, tick_rate_hz, dco_bits);
            let back = frequency_from_increment(inc, tick_rate_hz, dco_bits);
            prop_assert!((back - frequency_hz).abs() / frequency_hz < 1e-9);
        }
    }
}
