//! Glove hardware: bend sensors, finger buttons, and thumb buttons.
//!
//! # Pins
//!
//! | Function        | GPIO  | Description |
//! |-----------------|-------|-------------|
//! | I2C0 SDA        | 4     | Sensor bus  |
//! | I2C0 SCL        | 5     | Sensor bus  |
//! | Thumb buttons   | 10-13 | Active low, internal pull-up |

use defmt::{info, warn};
use embassy_rp::gpio::Input;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use glove_core::drivers::{FlexSensor, Pca9557, SampleRate, FLEX_ADDRESSES, PCA9557_ADDRESS};
use glove_core::{Glove, FINGER_COUNT, THUMB_BUTTONS};

/// Sample rate the bend sensors are set to; faster than the tick loop.
pub const FLEX_SAMPLE_RATE: SampleRate = SampleRate::Hz200;

/// Every input device on the glove.
pub struct Hand<I2C> {
    sensors: [Option<FlexSensor<I2C>>; FINGER_COUNT],
    expander: Option<Pca9557<I2C>>,
    thumbs: [Input<'static>; THUMB_BUTTONS],
}

impl<I2C: I2c> Hand<I2C> {
    /// Probe all devices. `bus` is called once per device and must return a
    /// handle to the shared sensor bus.
    ///
    /// Devices that do not respond are left out; a missing expander reads as
    /// no finger button pressed.
    pub fn probe<D: DelayNs>(
        mut bus: impl FnMut() -> I2C,
        delay: &mut D,
        thumbs: [Input<'static>; THUMB_BUTTONS],
    ) -> Self {
        let sensors = FLEX_ADDRESSES.map(|address| {
            let mut sensor = FlexSensor::new(bus(), address);
            match sensor.init(delay, FLEX_SAMPLE_RATE) {
                Ok(()) => Some(sensor),
                Err(_) => {
                    warn!("no flex sensor at {=u8:#x}", address);
                    None
                }
            }
        });

        let mut expander = Pca9557::new(bus(), PCA9557_ADDRESS);
        let expander = match expander.init_buttons() {
            Ok(()) => Some(expander),
            Err(_) => {
                warn!("no button expander at {=u8:#x}", PCA9557_ADDRESS);
                None
            }
        };

        info!(
            "{=usize} of {=usize} flex sensors found",
            sensors.iter().filter(|s| s.is_some()).count(),
            FINGER_COUNT
        );

        Self {
            sensors,
            expander,
            thumbs,
        }
    }

    /// Which fingers have a working sensor, for [`Glove::new`].
    #[must_use]
    pub fn sensors_present(&self) -> [bool; FINGER_COUNT] {
        core::array::from_fn(|i| self.sensors[i].is_some())
    }

    /// Read every input once and feed it to `glove`.
    pub fn sample(&mut self, glove: &mut Glove, now_ms: u64) {
        let mut mask = 0u32;
        for (bit, thumb) in self.thumbs.iter().enumerate() {
            if thumb.is_low() {
                mask |= 1 << bit;
            }
        }

        if let Some(expander) = self.expander.as_mut() {
            match expander.poll_buttons() {
                Ok(fingers) => mask |= u32::from(fingers) << THUMB_BUTTONS,
                Err(_) => warn!("button expander read failed"),
            }
        }
        glove.apply_buttons(mask);

        for (finger, sensor) in self.sensors.iter_mut().enumerate() {
            let Some(sensor) = sensor else { continue };
            match sensor.read_sample() {
                Ok(Some(degrees)) => {
                    glove.add_sample(finger, now_ms, degrees);
                }
                Ok(None) => {}
                Err(_) => warn!("flex sensor {=u8:#x} read failed", sensor.address()),
            }
        }
    }
}
