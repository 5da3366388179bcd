//! PCF85063A register controller
//!
//! The driver keeps no copy of the control registers. Every mutation is a
//! masked read-modify-write against the device, so state read back from the
//! chip is always the truth.
//!
//! ## States
//!
//! - Clock: **Running** (Control_1 STOP clear) or **Stopped** (STOP set)
//! - Timer: **Disarmed** or **Armed**; an armed timer becomes **Pending** when
//!   Timer_flag fires and stays there until software clears the flag by
//!   re-arming, cancelling or [`Pcf85063a::clear_pending_interrupt`].
//!
//! ## Concurrency
//!
//! Operations are blocking and not atomic across their bus transactions.
//! Callers sharing one device between contexts must serialize access, e.g.
//! with a `critical_section::Mutex<RefCell<Pcf85063a<_>>>`.

use embedded_hal::i2c::I2c;
use hal_abstractions::{Counter, CounterInfo, I2cBusConfig, I2cRegisterBus, RegisterBus};
use rtc_core::CalendarTime;

use crate::codec::{self, CodecError, RegisterImage};
use crate::config::{CapacitorLoad, ClockOutFrequency, Config, OffsetMode};
use crate::error::Error;
use crate::registers::{ctrl1, ctrl2, offset, reg, timer, DEFAULT_ADDRESS, TIME_REGISTER_COUNT};

/// Countdown timer source clock (Timer_mode TCF)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerClock {
    Hz4096,
    Hz64,
    Hz1,
    /// One tick per minute
    Hz1_60,
}

impl TimerClock {
    const fn bits(self) -> u8 {
        let freq = match self {
            Self::Hz4096 => timer::FREQ_4096_HZ,
            Self::Hz64 => timer::FREQ_64_HZ,
            Self::Hz1 => timer::FREQ_1_HZ,
            Self::Hz1_60 => timer::FREQ_1_60_HZ,
        };
        freq << timer::FREQ_SHIFT
    }
}

/// One bus transaction of a timer arm/disarm sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum TimerStep {
    /// Clear Control_2 TF
    ClearFlag,
    /// Load Timer_value
    LoadValue(u8),
    /// Select the clock and set TE and TIE in one write
    Enable(TimerClock),
    /// Clear TE, TIE and TI_TP in one write
    Disable,
}

/// PCF85063A real-time clock
pub struct Pcf85063a<B> {
    bus: B,
    config: Config,
}

impl<I2C: I2c> Pcf85063a<I2cRegisterBus<I2C>> {
    /// Driver on an I2C bus at the default address
    pub fn new_with_i2c(i2c: I2C) -> Self {
        let bus = I2cRegisterBus::new(
            i2c,
            I2cBusConfig {
                address: DEFAULT_ADDRESS,
            },
        );
        Self::new(bus)
    }
}

impl<B: RegisterBus> Pcf85063a<B> {
    /// Counter capabilities: one 8-bit alarm channel ticking at 1 Hz
    pub const INFO: CounterInfo = CounterInfo {
        max_top_value: 0xff,
        freq_hz: 1,
        channels: 1,
    };

    /// Create a driver with the default configuration
    pub fn new(bus: B) -> Self {
        Self::with_config(bus, Config::default())
    }

    /// Create a driver with a custom configuration
    pub fn with_config(bus: B, config: Config) -> Self {
        Self { bus, config }
    }

    /// Release the bus
    pub fn release(self) -> B {
        self.bus
    }

    /// Probe the device and apply the configuration
    ///
    /// Fails with [`Error::NotReady`] if the bus is not ready or the device
    /// does not answer a read of Control_1. There is no retry.
    pub fn init(&mut self) -> Result<(), Error<B::Error>> {
        if !self.bus.is_ready() {
            error!("PCF85063A bus not ready");
            return Err(Error::NotReady);
        }

        if self.bus.read_reg(reg::CTRL1).is_err() {
            error!("Failed to read from PCF85063A");
            return Err(Error::NotReady);
        }

        let config = self.config.clone();
        if let Some(load) = config.capacitor_load {
            self.set_capacitor_load(load)?;
        }
        if let Some(mode) = config.offset_mode {
            self.set_drift_offset_mode(mode)?;
        }
        if let Some(value) = config.offset_value {
            self.set_drift_offset_value(value)?;
        }

        info!("PCF85063A initialized");
        Ok(())
    }

    /// Read the current time
    ///
    /// Fails with [`Error::ClockIntegrity`] if the oscillator stopped since
    /// the time was last set.
    pub fn get_time(&mut self) -> Result<CalendarTime, Error<B::Error>> {
        let mut raw = [0u8; TIME_REGISTER_COUNT];
        self.bus.burst_read(reg::SECONDS, &mut raw).map_err(|e| {
            error!("Unable to get time");
            Error::Transport(e)
        })?;

        codec::decode(&RegisterImage(raw)).map_err(|e| {
            match e {
                CodecError::ClockIntegrity => warn!("Clock integrity error"),
            }
            Error::from(e)
        })
    }

    /// Set the time
    ///
    /// The time is validated before anything is written. Writing the seconds
    /// register also clears the oscillator-stop flag.
    pub fn set_time(&mut self, time: &CalendarTime) -> Result<(), Error<B::Error>> {
        time.validate()?;

        let image = codec::encode(time);
        self.bus
            .burst_write(reg::SECONDS, image.as_bytes())
            .map_err(|e| {
                error!("Unable to set time");
                Error::Transport(e)
            })
    }

    /// Start the clock (clear STOP)
    pub fn start(&mut self) -> Result<(), Error<B::Error>> {
        self.update(reg::CTRL1, ctrl1::STOP, 0).map_err(|e| {
            error!("Unable to start RTC");
            e
        })
    }

    /// Stop the clock (set STOP)
    pub fn stop(&mut self) -> Result<(), Error<B::Error>> {
        self.update(reg::CTRL1, ctrl1::STOP, ctrl1::STOP).map_err(|e| {
            error!("Unable to stop RTC");
            e
        })
    }

    /// Whether the clock is running
    pub fn is_running(&mut self) -> Result<bool, Error<B::Error>> {
        let value = self.read(reg::CTRL1)?;
        Ok(value & ctrl1::STOP == 0)
    }

    /// Arm the countdown timer to fire after `ticks` seconds
    ///
    /// The timer flag is cleared before the timer is enabled so a flag left
    /// over from an earlier expiry cannot raise the new interrupt. If a step
    /// fails the timer is in an unknown state; call
    /// [`cancel_alarm`](Self::cancel_alarm) before relying on it.
    pub fn set_alarm(&mut self, ticks: u8) -> Result<(), Error<B::Error>> {
        self.set_timer(ticks, TimerClock::Hz1)
    }

    /// Arm the countdown timer with an explicit source clock
    pub fn set_timer(&mut self, ticks: u8, clock: TimerClock) -> Result<(), Error<B::Error>> {
        self.run_timer_steps(&[
            TimerStep::ClearFlag,
            TimerStep::LoadValue(ticks),
            TimerStep::Enable(clock),
        ])
    }

    /// Disarm the countdown timer and clear its flag
    pub fn cancel_alarm(&mut self) -> Result<(), Error<B::Error>> {
        self.run_timer_steps(&[TimerStep::ClearFlag, TimerStep::Disable])
    }

    /// Whether the timer flag is set
    ///
    /// The flag is not cleared; acknowledge it with
    /// [`clear_pending_interrupt`](Self::clear_pending_interrupt).
    pub fn get_pending_interrupt(&mut self) -> Result<bool, Error<B::Error>> {
        let value = self.read(reg::CTRL2).map_err(|e| {
            error!("Unable to get RTC CTRL2 reg");
            e
        })?;
        Ok(value & ctrl2::TF != 0)
    }

    /// Clear the timer flag, leaving the timer armed
    pub fn clear_pending_interrupt(&mut self) -> Result<(), Error<B::Error>> {
        self.run_timer_steps(&[TimerStep::ClearFlag])
    }

    /// Select the offset correction cadence
    pub fn set_drift_offset_mode(&mut self, mode: OffsetMode) -> Result<(), Error<B::Error>> {
        let value = match mode {
            OffsetMode::Normal => 0,
            OffsetMode::Coarse => offset::MODE,
        };
        self.update(reg::OFFSET, offset::MODE, value).map_err(|e| {
            error!("Unable to set offset mode value");
            e
        })
    }

    /// Write the offset correction, a 7-bit two's complement step count
    ///
    /// Only the low seven bits of `value` are written; values outside
    /// -64..=63 wrap.
    pub fn set_drift_offset_value(&mut self, value: i8) -> Result<(), Error<B::Error>> {
        self.update(reg::OFFSET, offset::VALUE_MASK, value as u8).map_err(|e| {
            error!("Unable to set offset value");
            e
        })
    }

    /// Select the oscillator load capacitance
    pub fn set_capacitor_load(&mut self, load: CapacitorLoad) -> Result<(), Error<B::Error>> {
        let value = match load {
            CapacitorLoad::Low => 0,
            CapacitorLoad::High => ctrl1::CAP_SEL,
        };
        self.update(reg::CTRL1, ctrl1::CAP_SEL, value).map_err(|e| {
            error!("Unable to set capacitor value");
            e
        })
    }

    /// Select the CLKOUT frequency
    pub fn set_clock_out(&mut self, freq: ClockOutFrequency) -> Result<(), Error<B::Error>> {
        self.update(reg::CTRL2, ctrl2::COF_MASK, freq as u8).map_err(|e| {
            error!("Unable to set clock output frequency");
            e
        })
    }

    /// Read the free RAM byte
    pub fn read_ram(&mut self) -> Result<u8, Error<B::Error>> {
        self.read(reg::RAM_BYTE).map_err(|e| {
            error!("Unable to read RAM byte");
            e
        })
    }

    /// Write the free RAM byte
    pub fn write_ram(&mut self, value: u8) -> Result<(), Error<B::Error>> {
        self.bus.write_reg(reg::RAM_BYTE, value).map_err(|e| {
            error!("Unable to write RAM byte");
            Error::Transport(e)
        })
    }

    /// Run timer steps in order, stopping at the first failure
    ///
    /// Completed steps are not rolled back.
    fn run_timer_steps(&mut self, steps: &[TimerStep]) -> Result<(), Error<B::Error>> {
        for &step in steps {
            self.timer_step(step).map_err(|e| {
                error!("Timer step {} failed", step);
                e
            })?;
        }
        Ok(())
    }

    fn timer_step(&mut self, step: TimerStep) -> Result<(), Error<B::Error>> {
        match step {
            TimerStep::ClearFlag => self.update(reg::CTRL2, ctrl2::TF, 0),
            TimerStep::LoadValue(ticks) => self
                .bus
                .write_reg(reg::TIMER_VALUE, ticks)
                .map_err(Error::Transport),
            TimerStep::Enable(clock) => {
                let mode = clock.bits() | timer::EN | timer::INT_EN;
                debug!("mode {=u8:#x}", mode);
                self.update(
                    reg::TIMER_MODE,
                    timer::FREQ_MASK | timer::EN | timer::INT_EN,
                    mode,
                )
            }
            TimerStep::Disable => self.update(
                reg::TIMER_MODE,
                timer::EN | timer::INT_EN | timer::INT_TI_TP,
                0,
            ),
        }
    }

    fn read(&mut self, register: u8) -> Result<u8, Error<B::Error>> {
        self.bus.read_reg(register).map_err(Error::Transport)
    }

    fn update(&mut self, register: u8, mask: u8, value: u8) -> Result<(), Error<B::Error>> {
        self.bus
            .update_reg(register, mask, value)
            .map_err(Error::Transport)
    }
}

impl<B: RegisterBus> Counter for Pcf85063a<B> {
    type Error = Error<B::Error>;

    fn info(&self) -> CounterInfo {
        Self::INFO
    }

    fn start(&mut self) -> Result<(), Self::Error> {
        Pcf85063a::start(self)
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        Pcf85063a::stop(self)
    }

    fn set_alarm(&mut self, ticks: u8) -> Result<(), Self::Error> {
        Pcf85063a::set_alarm(self, ticks)
    }

    fn cancel_alarm(&mut self) -> Result<(), Self::Error> {
        Pcf85063a::cancel_alarm(self)
    }

    fn pending_interrupt(&mut self) -> Result<bool, Self::Error> {
        self.get_pending_interrupt()
    }
}
