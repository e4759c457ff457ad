#![no_std]

mod constants;

pub use constants::*;
use embedded_hal::i2c::I2c;
use num_traits::float::FloatCore;

/// Driver for the Holtek HT16K33 LED matrix controller.
pub struct Ht16k33<I2C> {
    i2c: Option<I2C>,
    address: u8,
}

impl<I2C, E> Ht16k33<I2C>
where
    I2C: I2c<Error = E>,
{
    /// Wraps an already-open bus at the default slave address (0x70).
    pub fn new(i2c: I2C) -> Self {
        Self::new_with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Wraps an already-open bus at an explicit slave address, for boards
    /// that strap the A0-A2 pins (0x70-0x77).
    pub fn new_with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c: Some(i2c),
            address,
        }
    }

    /// Releases the bus handle back to the caller. Every later operation
    /// fails with [`Ht16k33Error::NotConnected`]. Closing an already closed
    /// driver returns `None`.
    pub fn close(&mut self) -> Option<I2C> {
        self.i2c.take()
    }

    /// Turns the oscillator and the LED display on or off, in that order.
    ///
    /// The two commands are separate bus writes with no rollback: if the
    /// second write fails the oscillator may be left running with the
    /// display state unchanged.
    pub fn set_enabled(&mut self, enabled: bool) -> Result<(), Ht16k33Error<E>> {
        let oscillator_flag = if enabled {
            command::system_setup::OSCILLATOR_ON
        } else {
            command::system_setup::OSCILLATOR_OFF
        };
        self.write_command(command::SYSTEM_SETUP | oscillator_flag)?;

        let display_flag = if enabled {
            command::display_setup::DISPLAY_ON
        } else {
            command::display_setup::DISPLAY_OFF
        };
        self.write_command(command::DISPLAY_SETUP | display_flag)?;

        Ok(())
    }

    pub fn set_brightness(&mut self, value: u8) -> Result<(), Ht16k33Error<E>> {
        if value > MAX_BRIGHTNESS {
            return Err(Ht16k33Error::InvalidValue);
        }
        self.write_command(command::BRIGHTNESS | value)?;
        Ok(())
    }

    /// Sets brightness from a fraction in `[0.0, 1.0]`, rounded to the
    /// nearest step of the 4-bit duty range.
    pub fn set_brightness_fraction(&mut self, value: f32) -> Result<(), Ht16k33Error<E>> {
        let scaled = FloatCore::round(value * MAX_BRIGHTNESS as f32);
        if !(0.0..=MAX_BRIGHTNESS as f32).contains(&scaled) {
            return Err(Ht16k33Error::InvalidValue);
        }
        self.set_brightness(scaled as u8)
    }

    /// Writes 16 bits of row data for one column of the LED matrix.
    ///
    /// The display RAM keeps two row bytes per column, little-endian.
    /// `column` is not range-checked; columns past the 16-byte RAM are sent
    /// to the bus as-is and fail or wrap per the controller's behavior.
    pub fn write_column(&mut self, column: u8, data: u16) -> Result<(), Ht16k33Error<E>> {
        let [row_lo, row_hi] = data.to_le_bytes();
        let address = self.address;
        self.bus()?
            .write(address, &[column.wrapping_mul(COLUMN_STRIDE), row_lo, row_hi])?;
        Ok(())
    }

    fn write_command(&mut self, byte: u8) -> Result<(), Ht16k33Error<E>> {
        let address = self.address;
        self.bus()?.write(address, &[byte])?;
        Ok(())
    }

    fn bus(&mut self) -> Result<&mut I2C, Ht16k33Error<E>> {
        self.i2c.as_mut().ok_or(Ht16k33Error::NotConnected)
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Ht16k33Error<E> {
    I2cError(E),
    InvalidValue,
    NotConnected,
}

impl<E> From<E> for Ht16k33Error<E> {
    fn from(error: E) -> Self {
        Ht16k33Error::I2cError(error)
    }
}
