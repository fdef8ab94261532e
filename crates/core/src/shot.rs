//! Shot record reformatting.
//!
//! Raw shot records carry `duration` and every `datapoints` series in tenths.
//! [`format_datapoints`] walks an arbitrary JSON tree, rescales those values to
//! their true magnitude and thins the series for display.
//!
//! The transform is not idempotent: running it over already formatted data
//! divides by ten again and downsamples again. Apply it exactly once per raw
//! payload.

use serde_json::{Map, Number, Value};

/// Default interval at which series samples are kept.
pub const DEFAULT_DOWNSAMPLE: usize = 5;

/// Series dropped from `datapoints` output.
pub const EXCLUDED_SERIES: [&str; 5] = [
    "timeInShot",
    "weightFlow",
    "targetTemperature",
    "targetPumpFlow",
    "targetPressure",
];

const DATAPOINTS_KEY: &str = "datapoints";
const DURATION_KEY: &str = "duration";

/// Rescale and downsample every known tenths-encoded field in `value`.
///
/// Non-mapping values are returned unchanged. Inside a mapping:
/// - `datapoints` holding a mapping keeps only array series not listed in
///   [`EXCLUDED_SERIES`], each rescaled and reduced to indices `0, stride, 2*stride, ...`
/// - `duration` is rescaled
/// - any other key is recursed into
///
/// A `stride` of 0 is treated as 1.
pub fn format_datapoints(value: Value, stride: usize) -> Value {
    let Value::Object(map) = value else {
        return value;
    };

    let mut result = Map::with_capacity(map.len());
    for (key, value) in map {
        let formatted = match (key.as_str(), value) {
            (DATAPOINTS_KEY, Value::Object(series)) => {
                Value::Object(format_series(series, stride))
            }
            (DURATION_KEY, value) => rescale_tenths(value),
            (_, value) => format_datapoints(value, stride),
        };
        result.insert(key, formatted);
    }
    Value::Object(result)
}

/// Format a shot record as 2-space indented JSON.
pub fn format_shot(shot: Value, stride: usize) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&format_datapoints(shot, stride))
}

/// Whether `name` is a series dropped from formatted output.
pub fn is_excluded_series(name: &str) -> bool {
    EXCLUDED_SERIES.contains(&name)
}

fn format_series(series: Map<String, Value>, stride: usize) -> Map<String, Value> {
    let stride = stride.max(1);
    series
        .into_iter()
        .filter(|(name, _)| !is_excluded_series(name))
        .filter_map(|(name, samples)| match samples {
            Value::Array(samples) => {
                let thinned = samples
                    .into_iter()
                    .step_by(stride)
                    .map(rescale_tenths)
                    .collect();
                Some((name, Value::Array(thinned)))
            }
            _ => None,
        })
        .collect()
}

/// Divide a tenths-encoded number by 10, rounded to one decimal place.
///
/// Non-numeric values pass through untouched.
fn rescale_tenths(value: Value) -> Value {
    let Some(raw) = value.as_f64() else {
        return value;
    };
    match Number::from_f64(round_one_decimal(raw / 10.0)) {
        Some(scaled) => Value::Number(scaled),
        None => value,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rescale_and_downsample_example() {
        let raw = json!({
            "duration": 1234,
            "datapoints": {
                "pressure": [0, 10, 20, 30, 40, 50],
                "weightFlow": [1, 2, 3]
            }
        });

        let formatted = format_datapoints(raw, 5);

        assert_eq!(
            formatted,
            json!({
                "duration": 123.4,
                "datapoints": {
                    "pressure": [0.0, 5.0]
                }
            })
        );
    }

    #[test]
    fn test_rescale_rounds_to_one_decimal() {
        assert_eq!(rescale_tenths(json!(93)), json!(9.3));
        assert_eq!(rescale_tenths(json!(-15)), json!(-1.5));
        assert_eq!(rescale_tenths(json!(12.34)), json!(1.2));
        assert_eq!(rescale_tenths(json!(0)), json!(0.0));
    }

    #[test]
    fn test_rescale_leaves_non_numeric_values() {
        assert_eq!(rescale_tenths(json!("n/a")), json!("n/a"));
        assert_eq!(rescale_tenths(Value::Null), Value::Null);
    }

    #[test]
    fn test_downsample_keeps_every_nth_sample() {
        let samples: Vec<i64> = (0..12).map(|i| i * 10).collect();
        let formatted = format_datapoints(json!({ "datapoints": { "temperature": samples } }), 5);

        // indices 0, 5, 10 -> ceil(12 / 5) = 3 samples
        assert_eq!(
            formatted["datapoints"]["temperature"],
            json!([0.0, 5.0, 10.0])
        );
    }

    #[test]
    fn test_downsample_stride_one_keeps_everything() {
        let formatted = format_datapoints(json!({ "datapoints": { "pumpFlow": [1, 2, 3] } }), 1);
        assert_eq!(formatted["datapoints"]["pumpFlow"], json!([0.1, 0.2, 0.3]));
    }

    #[test]
    fn test_zero_stride_treated_as_one() {
        let formatted = format_datapoints(json!({ "datapoints": { "pumpFlow": [1, 2] } }), 0);
        assert_eq!(formatted["datapoints"]["pumpFlow"], json!([0.1, 0.2]));
    }

    #[test]
    fn test_excluded_series_are_dropped() {
        let raw = json!({
            "datapoints": {
                "timeInShot": [1, 2],
                "weightFlow": [1, 2],
                "targetTemperature": [930],
                "targetPumpFlow": [20],
                "targetPressure": [90],
                "shotWeight": [0, 5]
            }
        });

        let formatted = format_datapoints(raw, 5);
        let datapoints = formatted["datapoints"].as_object().unwrap();

        assert_eq!(datapoints.len(), 1);
        assert!(datapoints.contains_key("shotWeight"));
        for name in EXCLUDED_SERIES {
            assert!(!datapoints.contains_key(name), "{name} should be dropped");
        }
    }

    #[test]
    fn test_non_array_series_are_dropped() {
        let raw = json!({
            "datapoints": {
                "pressure": [10],
                "label": "not a series",
                "count": 3
            }
        });

        let formatted = format_datapoints(raw, 5);
        assert_eq!(formatted["datapoints"], json!({ "pressure": [1.0] }));
    }

    #[test]
    fn test_nested_records_are_walked() {
        let raw = json!({
            "id": 42,
            "profile": { "name": "Classic", "duration": 300 },
            "shots": [ { "duration": 100 } ],
            "inner": {
                "deeper": {
                    "datapoints": { "pressure": [90, 91] }
                }
            }
        });

        let formatted = format_datapoints(raw, 5);

        assert_eq!(formatted["id"], json!(42));
        assert_eq!(formatted["profile"]["name"], json!("Classic"));
        assert_eq!(formatted["profile"]["duration"], json!(30.0));
        // arrays are not walked
        assert_eq!(formatted["shots"], json!([{ "duration": 100 }]));
        assert_eq!(formatted["inner"]["deeper"]["datapoints"]["pressure"], json!([9.0]));
    }

    #[test]
    fn test_non_mapping_datapoints_recursed_like_any_key() {
        let formatted = format_datapoints(json!({ "datapoints": [10, 20] }), 5);
        assert_eq!(formatted, json!({ "datapoints": [10, 20] }));
    }

    #[test]
    fn test_non_mapping_input_is_unchanged() {
        assert_eq!(format_datapoints(json!([1, 2, 3]), 5), json!([1, 2, 3]));
        assert_eq!(format_datapoints(json!("shot"), 5), json!("shot"));
        assert_eq!(format_datapoints(json!(7), 5), json!(7));
    }

    #[test]
    fn test_formatting_twice_is_not_idempotent() {
        let raw = json!({
            "duration": 1000,
            "datapoints": { "pressure": (0..30).map(|i| i * 10).collect::<Vec<i64>>() }
        });

        let once = format_datapoints(raw, 5);
        let twice = format_datapoints(once.clone(), 5);

        assert_eq!(once["duration"], json!(100.0));
        assert_eq!(twice["duration"], json!(10.0));
        assert_eq!(once["datapoints"]["pressure"].as_array().unwrap().len(), 6);
        assert_eq!(twice["datapoints"]["pressure"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_format_shot_pretty_prints() {
        let text = format_shot(json!({ "duration": 250 }), 5).unwrap();
        assert_eq!(text, "{\n  \"duration\": 25.0\n}");
    }
}
