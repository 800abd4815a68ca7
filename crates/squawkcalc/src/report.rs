//! Design summary: ties the timer, PWM and DCO math together.
//!
//! [`DesignConfig`] holds the input parameter set (defaults come from
//! `squawker-hw`), [`DesignReport`] the derived constants plus a
//! deterministic text rendering.

use crate::{dco, pwm, timer};
use squawker_hw::specs::{adc, clock, dco as dco_hw, timer0, timer1};
use tracing::info;

/// How the sampling-timer settings are obtained
#[derive(Debug, Clone, PartialEq)]
pub enum Timer0Mode {
    /// Use a fixed prescaler divisor and counter top
    Fixed { divisor: u32, counter_max: u8 },
    /// Search the prescaler taps for a desired sample rate
    Search { desired_rate_hz: f64 },
}

/// Input parameters for the design calculation
#[derive(Debug, Clone, PartialEq)]
pub struct DesignConfig {
    /// System oscillator frequency in Hz
    pub system_clock_hz: f64,
    /// Sampling-timer mode (fixed constants or prescaler search)
    pub timer0: Timer0Mode,
    /// Timer1 prescaler divisor
    pub timer1_divisor: u32,
    /// Timer1 counter top (OCR1C)
    pub pwm_counter_top: u8,
    /// Averaging gain applied to raw ADC codes
    pub adc_average_gain: u32,
    /// DCO phase accumulator width in bits
    pub dco_bits: u32,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            system_clock_hz: clock::SYSTEM_CLK_HZ,
            timer0: Timer0Mode::Fixed {
                divisor: timer0::DEFAULT_DIVISOR,
                counter_max: timer0::DEFAULT_COUNTER_MAX,
            },
            timer1_divisor: timer1::DIVISOR,
            pwm_counter_top: timer1::PWM_COUNTER_TOP,
            adc_average_gain: adc::AVERAGE_GAIN,
            dco_bits: dco_hw::PHASE_BITS,
        }
    }
}

/// Derived timing constants for one parameter set
#[derive(Debug, Clone, PartialEq)]
pub struct DesignReport {
    /// Timer0 prescaler divisor (fixed or selected by the search)
    pub timer0_divisor: u32,
    /// Timer0 counter top
    pub timer0_counter_max: u8,
    /// Timer0 interrupt (sample) rate in Hz
    pub interrupt_rate_hz: f64,
    /// Timer1 PWM carrier frequency in Hz
    pub pwm_frequency_hz: f64,
    /// Highest DCO output frequency (full-scale averaged ADC code)
    pub dco_frequency_max_hz: f64,
    /// Lowest DCO output frequency (full-scale raw ADC code)
    pub dco_frequency_min_hz: f64,
}

impl DesignReport {
    /// Compute every derived constant for `config`
    ///
    /// Errs when the prescaler search finds no divisor that keeps the
    /// counter top within 8 bits; the message names the last candidate and
    /// the top it would have needed.
    pub fn compute(config: &DesignConfig) -> Result<Self, String> {
        let (timer0_divisor, timer0_counter_max, interrupt_rate_hz) = match config.timer0 {
            Timer0Mode::Fixed {
                divisor,
                counter_max,
            } => {
                let rate_hz =
                    timer::interrupt_rate_hz(config.system_clock_hz, divisor, counter_max as u32);
                (divisor, counter_max, rate_hz)
            }
            Timer0Mode::Search { desired_rate_hz } => {
                match timer::select_prescaler(config.system_clock_hz, desired_rate_hz) {
                    timer::PrescalerSelection::Found {
                        divisor,
                        counter_max,
                        rate_hz,
                    } => {
                        info!(
                            "prescaler search: /{} top {} -> {:.1} Hz (requested {:.1} Hz)",
                            divisor, counter_max, rate_hz, desired_rate_hz
                        );
                        (divisor, counter_max, rate_hz)
                    }
                    timer::PrescalerSelection::NotFound {
                        divisor,
                        counter_max,
                        ..
                    } => {
                        return Err(format!(
                            "no Timer0 prescaler reaches {} Hz within the 8-bit counter \
                             (last candidate /{} would need counter top {})",
                            desired_rate_hz, divisor, counter_max
                        ));
                    }
                }
            }
        };

        let pll_clock_hz = pwm::pll_clock_hz(config.system_clock_hz);
        let pwm_frequency_hz = pwm::carrier_frequency_hz(
            pll_clock_hz,
            config.timer1_divisor,
            config.pwm_counter_top as u32,
        );

        // The DCO increment is the averaged ADC reading: at most
        // gain * full-scale, at least one full-scale raw code.
        let increment_max = (config.adc_average_gain * adc::MAX_CODE) as f64;
        let increment_min = adc::MAX_CODE as f64;

        Ok(Self {
            timer0_divisor,
            timer0_counter_max,
            interrupt_rate_hz,
            pwm_frequency_hz,
            dco_frequency_max_hz: dco::frequency_from_increment(
                increment_max,
                interrupt_rate_hz,
                config.dco_bits,
            ),
            dco_frequency_min_hz: dco::frequency_from_increment(
                increment_min,
                interrupt_rate_hz,
                config.dco_bits,
            ),
        })
    }

    /// Render the summary exactly as the CLI prints it
    ///
    /// One labeled value per line, frequencies with one decimal place.
    /// Byte-identical across runs for identical inputs.
    pub fn render(&self) -> String {
        format!(
            "Timer0 interrupt rate:\n\
             div = {div}, top = {top}\n\
             fs = {fs:.1}\n\
             \n\
             Timer1 PWM frequency:\n\
             f PWM = {pwm:.1}\n\
             \n\
             DCO frequencies:\n\
             f max: {fmax:.1}\n\
             f min: {fmin:.1}\n",
            div = self.timer0_divisor,
            top = self.timer0_counter_max,
            fs = self.interrupt_rate_hz,
            pwm = self.pwm_frequency_hz,
            fmax = self.dco_frequency_max_hz,
            fmin = self.dco_frequency_min_hz,
        )
    }
}
