/// System clock specifications
pub mod clock {
    /// Nominal system oscillator frequency (8 MHz)
    pub const SYSTEM_CLK_HZ: f64 = 8_000_000.0;

    /// Fixed multiplier of the on-chip PLL feeding the fast peripheral clock
    pub const PLL_MULTIPLIER: f64 = 8.0;

    /// PLL-multiplied peripheral clock (64 MHz)
    pub const PLL_CLK_HZ: f64 = SYSTEM_CLK_HZ * PLL_MULTIPLIER;
}

/// Timer0 (sampling timer) specifications
pub mod timer0 {
    /// Prescaler taps available on Timer0, in ascending order
    pub const PRESCALER_CANDIDATES: [u32; 5] = [1, 8, 64, 256, 1024];

    /// Default prescaler divisor (/8)
    pub const DEFAULT_DIVISOR: u32 = 8;

    /// Default compare top, giving a 5 kHz interrupt at 8 MHz / 8
    pub const DEFAULT_COUNTER_MAX: u8 = 199;

    /// Counter width in bits (8-bit timer)
    pub const COUNTER_BITS: u32 = 8;

    /// Largest counter top the hardware can hold
    pub const COUNTER_TOP_LIMIT: u32 = (1 << COUNTER_BITS) - 1; // 255
}

/// Timer1 (PWM carrier timer) specifications
pub mod timer1 {
    /// Prescaler divisor; Timer1 runs straight off the PLL clock
    pub const DIVISOR: u32 = 1;

    /// PWM counter top (OCR1C), fixed at the full 8-bit range
    pub const PWM_COUNTER_TOP: u8 = 255;
}

/// ADC specifications
pub mod adc {
    /// Converter resolution in bits
    pub const RESOLUTION_BITS: u32 = 10;

    /// Largest raw conversion code (10-bit full scale)
    pub const MAX_CODE: u32 = (1 << RESOLUTION_BITS) - 1; // 1023

    /// Oversampling/averaging gain the firmware applies to raw codes
    pub const AVERAGE_GAIN: u32 = 32;
}

/// DCO (phase-accumulator oscillator) specifications
pub mod dco {
    /// Phase accumulator width in bits
    pub const PHASE_BITS: u32 = 16;
}
