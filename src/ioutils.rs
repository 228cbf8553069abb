use crate::constants::STDIN_INDICATOR;
use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// Parses prefilled answers; anything but a JSON object is a configuration error.
pub fn parse_string_to_json(buf: String) -> Result<Map<String, Value>> {
    if buf.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str(&buf)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::ConfigValidation(format!(
            "answers must be a JSON object, got: {other}"
        ))),
    }
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}

/// Resolves an `--answers` argument, reading stdin when it is `-`.
pub fn read_answers(arg: Option<&str>) -> Result<Map<String, Value>> {
    match arg {
        None => Ok(Map::new()),
        Some(STDIN_INDICATOR) => parse_string_to_json(read_from(std::io::stdin())?),
        Some(json) => parse_string_to_json(json.to_string()),
    }
}

/// Text form of a prefilled answer: strings as-is, other values as JSON.
pub fn answer_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
