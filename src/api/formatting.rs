//! Text readouts and JSON frame output

use crate::api::frame::FrameOutput;
use crate::api::types::ApiResult;
use crate::processing::IssRecord;

/// Shown in place of a value that has not arrived yet
pub const PLACEHOLDER: &str = "—";

/// Altitude readout, e.g. `"408 km"`
pub fn altitude_text(record: Option<&IssRecord>) -> String {
    match record {
        Some(record) => format!("{:.0} km", record.altitude),
        None => PLACEHOLDER.to_string(),
    }
}

/// Velocity readout, e.g. `"27636 km/h"`
pub fn velocity_text(record: Option<&IssRecord>) -> String {
    match record {
        Some(record) => format!("{:.0} km/h", record.velocity),
        None => PLACEHOLDER.to_string(),
    }
}

/// Subpoint readout with hemisphere letters, e.g. `"51.50°N 0.13°W"`
pub fn subpoint_text(record: Option<&IssRecord>) -> String {
    match record {
        Some(record) => {
            let ns = if record.latitude >= 0.0 { 'N' } else { 'S' };
            let ew = if record.longitude >= 0.0 { 'E' } else { 'W' };
            format!(
                "{:.2}°{} {:.2}°{}",
                record.latitude.abs(),
                ns,
                record.longitude.abs(),
                ew
            )
        }
        None => PLACEHOLDER.to_string(),
    }
}

/// Single-line JSON for one frame
pub fn frame_to_json(frame: &FrameOutput) -> ApiResult<String> {
    Ok(serde_json::to_string(frame)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> IssRecord {
        let mut record = IssRecord::at(51.5, -0.127, 408.055);
        record.velocity = 27635.97;
        record
    }

    #[test]
    fn test_altitude_and_velocity_text() {
        let record = record();
        assert_eq!(altitude_text(Some(&record)), "408 km");
        assert_eq!(velocity_text(Some(&record)), "27636 km/h");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(altitude_text(None), "—");
        assert_eq!(velocity_text(None), "—");
        assert_eq!(subpoint_text(None), "—");
    }

    #[test]
    fn test_subpoint_text() {
        assert_eq!(subpoint_text(Some(&record())), "51.50°N 0.13°W");
        assert_eq!(subpoint_text(Some(&IssRecord::at(-33.9, 151.2, 400.0))), "33.90°S 151.20°E");
    }
}
