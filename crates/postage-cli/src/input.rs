//! Parsing of `length,height,thickness,start_zip,end_zip` lines

use postage_common::{Dimensions, PostageError, PostageRequest, Result};

const FIELD_NAMES: [&str; 5] = ["length", "height", "thickness", "start zip", "end zip"];

/// Parse one comma-separated input line into a rating request
///
/// Zips are parsed as integers but not range-checked here; the engine only
/// looks at them for mailable pieces.
pub fn parse_line(line: &str) -> Result<PostageRequest> {
    let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    if fields.len() != FIELD_NAMES.len() {
        return Err(PostageError::Parse(format!(
            "expected {} comma-separated fields, got {}",
            FIELD_NAMES.len(),
            fields.len()
        )));
    }

    let length = parse_measure(fields[0], FIELD_NAMES[0])?;
    let height = parse_measure(fields[1], FIELD_NAMES[1])?;
    let thickness = parse_measure(fields[2], FIELD_NAMES[2])?;
    let start_zip = parse_zip(fields[3], FIELD_NAMES[3])?;
    let end_zip = parse_zip(fields[4], FIELD_NAMES[4])?;

    Ok(PostageRequest::new(
        Dimensions::new(length, height, thickness)?,
        start_zip,
        end_zip,
    ))
}

fn parse_measure(field: &str, name: &str) -> Result<f64> {
    field
        .parse()
        .map_err(|_| PostageError::Parse(format!("{} is not a number: {:?}", name, field)))
}

fn parse_zip(field: &str, name: &str) -> Result<i64> {
    field
        .parse()
        .map_err(|_| PostageError::Parse(format!("{} is not an integer: {:?}", name, field)))
}
