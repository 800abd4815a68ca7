use crate::report::{DesignConfig, Timer0Mode};
use clap::Parser;
use squawker_hw::specs::{clock, timer0};

#[derive(Parser, Debug, Clone)]
pub struct Args {
    /// System oscillator frequency in Hz
    #[arg(long, default_value_t = clock::SYSTEM_CLK_HZ)]
    pub system_clock_hz: f64,

    /// Search the Timer0 prescaler taps for this sample rate instead of
    /// using the fixed divisor/counter top
    #[arg(long)]
    pub sample_rate_hz: Option<f64>,

    /// Timer0 prescaler divisor (fixed mode; one of 1, 8, 64, 256, 1024)
    #[arg(long)]
    pub timer0_divisor: Option<u32>,

    /// Timer0 counter top (fixed mode, 0-255)
    #[arg(long)]
    pub timer0_max: Option<u8>,

    /// Averaging gain applied to raw ADC codes
    #[arg(long)]
    pub adc_average_gain: Option<u32>,

    /// DCO phase accumulator width in bits (1-32)
    #[arg(long)]
    pub dco_bits: Option<u32>,
}

impl Args {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> Result<(), String> {
        if !(self.system_clock_hz > 0.0) {
            return Err("--system-clock-hz must be positive".to_string());
        }

        if let Some(rate) = self.sample_rate_hz {
            if !(rate > 0.0) {
                return Err("--sample-rate-hz must be positive".to_string());
            }
            if self.timer0_divisor.is_some() || self.timer0_max.is_some() {
                return Err(
                    "--timer0-divisor and --timer0-max are fixed-mode settings and cannot \
                     be combined with --sample-rate-hz"
                        .to_string(),
                );
            }
        }

        if let Some(divisor) = self.timer0_divisor
            && !timer0::PRESCALER_CANDIDATES.contains(&divisor)
        {
            return Err(format!(
                "--timer0-divisor must be one of {:?}",
                timer0::PRESCALER_CANDIDATES
            ));
        }

        if let Some(gain) = self.adc_average_gain
            && gain == 0
        {
            return Err("--adc-average-gain must be at least 1".to_string());
        }

        if let Some(bits) = self.dco_bits
            && !(1..=32).contains(&bits)
        {
            return Err("--dco-bits must be between 1 and 32".to_string());
        }

        Ok(())
    }

    /// Convert Args to DesignConfig
    pub fn to_design_config(&self) -> DesignConfig {
        let defaults = DesignConfig::default();

        let timer0 = match self.sample_rate_hz {
            Some(desired_rate_hz) => Timer0Mode::Search { desired_rate_hz },
            None => Timer0Mode::Fixed {
                divisor: self.timer0_divisor.unwrap_or(timer0::DEFAULT_DIVISOR),
                counter_max: self.timer0_max.unwrap_or(timer0::DEFAULT_COUNTER_MAX),
            },
        };

        DesignConfig {
            system_clock_hz: self.system_clock_hz,
            timer0,
            adc_average_gain: self.adc_average_gain.unwrap_or(defaults.adc_average_gain),
            dco_bits: self.dco_bits.unwrap_or(defaults.dco_bits),
            ..defaults
        }
    }
}
