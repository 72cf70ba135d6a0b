use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::annotation::Pin;
use crate::error::Result;

/// `{"pins": [...]}` as written by the pin mapper.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PinsDocument {
    pub pins: Vec<Pin>,
}

/// Full device description consumed by downstream tooling.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "digital-pins")]
    pub digital_pins: DigitalPins,
    #[serde(default)]
    pub specs: DeviceSpecs,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DigitalPins {
    pub id: Vec<String>,
    pub reloc: Vec<RelocPin>,
}

/// Pin position relative to the crop origin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RelocPin {
    pub id: String,
    pub points: [i64; 2],
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceSpecs {
    #[serde(default)]
    pub processor: String,
    #[serde(rename = "clockSpeed", default)]
    pub clock_speed: String,
    #[serde(default)]
    pub voltage: String,
}

/// Name, type and specs supplied by the user when exporting a device.
#[derive(Clone, Debug, Default)]
pub struct DeviceMeta {
    pub name: String,
    pub kind: String,
    pub specs: DeviceSpecs,
}

/// Serialize with four-space indentation.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only ever emits UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `value` as pretty JSON. The file is overwritten in place.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    fs::write(path, to_json_pretty(value)?)?;
    Ok(())
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
