use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PinmapError, Result};

/// Physical size of a component in millimetres.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub const fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// The larger of length and width; the side matched against image pixels.
    pub fn long_side(&self) -> f64 {
        self.length.max(self.width)
    }
}

const BUILTIN: &[(&str, Dimensions)] = &[
    ("BMP280 Module", Dimensions::new(20.0, 18.0, 3.0)),
    ("A3144 Hall Effect Sensor Module", Dimensions::new(30.0, 20.0, 5.0)),
    ("CO2 Sensor Module (MH-Z19)", Dimensions::new(60.0, 40.0, 30.0)),
    ("UV Sensor Module (ML8511)", Dimensions::new(25.0, 20.0, 5.0)),
    ("buzzer", Dimensions::new(30.0, 30.0, 10.0)),
    ("Rtc Module", Dimensions::new(30.0, 15.0, 7.0)),
    ("RCWL-0516 Microwave Motion Sensor", Dimensions::new(46.0, 36.0, 8.0)),
    ("SX1278 LORA Module", Dimensions::new(49.0, 25.0, 13.0)),
    ("Flame Sensor Module", Dimensions::new(35.0, 30.0, 10.0)),
    ("Capacitive Touch Sensor Module (TTP223)", Dimensions::new(26.0, 18.0, 5.0)),
    ("PIR Motion Sensor", Dimensions::new(75.0, 55.0, 45.0)),
    ("MPU 6050", Dimensions::new(20.0, 15.0, 3.0)),
    ("KY-008 Laser Diode Module", Dimensions::new(25.0, 20.0, 10.0)),
    ("Stepper Motor Driver Module A4988", Dimensions::new(40.0, 25.0, 10.0)),
    ("OLED Display", Dimensions::new(50.0, 40.0, 3.0)),
    ("Sound Sensor Module (KY-038)", Dimensions::new(35.0, 30.0, 10.0)),
    ("SD card Module", Dimensions::new(25.0, 20.0, 7.0)),
    ("ov7670-camera-module", Dimensions::new(30.0, 30.0, 5.0)),
    ("Keypad Module", Dimensions::new(50.0, 50.0, 7.0)),
    ("L298 Motor Driver", Dimensions::new(50.0, 30.0, 10.0)),
    ("DS18B20 Waterproof Temperature Sensor", Dimensions::new(60.0, 10.0, 10.0)),
    ("Gas", Dimensions::new(45.0, 30.0, 10.0)),
    ("BME280 Temperature, Humidity, and Pressure Sensor", Dimensions::new(20.0, 18.0, 3.0)),
    ("AS608-Optical-Fingerprint-Sensor", Dimensions::new(60.0, 40.0, 18.0)),
    ("I2C LCD", Dimensions::new(80.0, 40.0, 15.0)),
    ("MPU9250 9-DOF IMU Module", Dimensions::new(30.0, 25.0, 5.0)),
    ("DHT22", Dimensions::new(50.0, 30.0, 10.0)),
    ("servo-SG90", Dimensions::new(22.0, 11.5, 31.0)),
    ("Gesture Sensor Module (APDS-9960)", Dimensions::new(23.0, 18.0, 5.0)),
    ("MAX30100 Sensor", Dimensions::new(30.0, 30.0, 7.0)),
    ("MAX7219 Dot Matrix Display Module", Dimensions::new(70.0, 70.0, 10.0)),
    ("HMC5883L", Dimensions::new(22.0, 18.0, 5.0)),
    ("RF Receiver Module (433 MHz)", Dimensions::new(35.0, 20.0, 10.0)),
    ("HX711 Load Cell Amp", Dimensions::new(44.0, 22.0, 8.0)),
    ("NEO 6M GPS Module", Dimensions::new(40.0, 30.0, 12.0)),
    ("NRF24L01+ Wireless Transceiver Module", Dimensions::new(50.0, 25.0, 6.0)),
    ("Soil Moisture Sensor Module", Dimensions::new(50.0, 20.0, 10.0)),
    ("KY-040 Rotary Encoder Module", Dimensions::new(25.0, 25.0, 10.0)),
    ("MAX6675 Thermocouple Temperature Sensor Module", Dimensions::new(40.0, 30.0, 10.0)),
    ("Relay", Dimensions::new(30.0, 30.0, 20.0)),
    ("RF Transmitter Module (433 MHz)", Dimensions::new(35.0, 20.0, 10.0)),
    ("LDR Light Sensor Module", Dimensions::new(35.0, 25.0, 5.0)),
    ("RFID RC522", Dimensions::new(40.0, 30.0, 10.0)),
    ("TCS3200 Color Detection Sensor Module", Dimensions::new(40.0, 30.0, 10.0)),
    ("HC-05 BT Module", Dimensions::new(32.0, 18.0, 7.0)),
    ("ADXL345 Accelerometer Module", Dimensions::new(30.0, 25.0, 5.0)),
    ("IR Receiver", Dimensions::new(25.0, 20.0, 10.0)),
    ("ultrasonic-SR04", Dimensions::new(45.0, 30.0, 15.0)),
    ("INA219 Current Sensor Module", Dimensions::new(35.0, 20.0, 8.0)),
    ("DFPlayer Mini MP3 Player Module", Dimensions::new(35.0, 25.0, 7.0)),
];

/// Component name to physical dimensions.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub components: BTreeMap<String, Dimensions>,
}

impl Catalog {
    /// The table of common hobby modules shipped with the tool.
    pub fn builtin() -> Self {
        Self {
            components: BUILTIN
                .iter()
                .map(|(name, dims)| (name.to_string(), *dims))
                .collect(),
        }
    }

    /// Parse a TOML table of the form `[components."Name"] length = .. width = .. height = ..`.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Built-in table extended (and overridden) by the entries in `path`.
    pub fn builtin_with_overrides(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let extra = Self::from_toml_str(&content)?;
        let mut catalog = Self::builtin();
        catalog.components.extend(extra.components);
        Ok(catalog)
    }

    pub fn get(&self, name: &str) -> Option<&Dimensions> {
        self.components.get(name)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Dimensions)> {
        self.components.iter()
    }

    /// Ratio that makes the image's long side match the component's long side
    /// at `px_per_mm`.
    pub fn scale_ratio(
        &self,
        name: &str,
        image_width: u32,
        image_height: u32,
        px_per_mm: f64,
    ) -> Result<f64> {
        let dims = self
            .get(name)
            .ok_or_else(|| PinmapError::UnknownComponent(name.to_string()))?;
        scale_ratio(dims, image_width, image_height, px_per_mm)
    }
}

/// `long_side_mm * px_per_mm / long_side_px`.
pub fn scale_ratio(
    dims: &Dimensions,
    image_width: u32,
    image_height: u32,
    px_per_mm: f64,
) -> Result<f64> {
    let image_px = image_width.max(image_height);
    if image_px == 0 {
        return Err(PinmapError::InvalidDimensions {
            width: image_width,
            height: image_height,
        });
    }
    let ratio = dims.long_side() * px_per_mm / image_px as f64;
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(PinmapError::InvalidScale(ratio));
    }
    Ok(ratio)
}
