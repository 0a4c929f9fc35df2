// File: crates/numdiff/src/dataset.rs
// Summary: JSON dataset model for the derivative comparison, with fail-fast validation.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

pub const GRID_VIZ: &str = "grid_M_viz";
pub const DERIVATIVE_ANALYTIC: &str = "derivative_analytics";
pub const GRID_H: &str = "grid_h";
pub const DERIVATIVE_H: &str = "derivative_in_h";
pub const GRID_H2: &str = "grid_h_2";
pub const DERIVATIVE_H2: &str = "derivative_in_h_2";
pub const UPDATED_RUNGE: &str = "updated_runge";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("reading dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("dataset root is not a JSON object")]
    NotAnObject,
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}` is not an array of numbers")]
    InvalidField { field: &'static str },
    #[error("length mismatch: `{left}` has {left_len} values but `{right}` has {right_len}")]
    ShapeMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },
}

/// The seven sequences describing one differentiation experiment.
///
/// Read-only after load; paired sequences are guaranteed equal-length by
/// [`Dataset::validate`], which both `load` and `save` run.
#[derive(Clone, Debug, Serialize)]
pub struct Dataset {
    #[serde(rename = "grid_M_viz")]
    pub grid_viz: Vec<f64>,
    #[serde(rename = "derivative_analytics")]
    pub derivative_analytic: Vec<f64>,
    #[serde(rename = "grid_h")]
    pub grid_h: Vec<f64>,
    #[serde(rename = "derivative_in_h")]
    pub derivative_h: Vec<f64>,
    #[serde(rename = "grid_h_2")]
    pub grid_h2: Vec<f64>,
    #[serde(rename = "derivative_in_h_2")]
    pub derivative_h2: Vec<f64>,
    #[serde(rename = "updated_runge")]
    pub updated_runge: Vec<f64>,
}

impl Dataset {
    /// Load and validate a dataset from a JSON file.
    ///
    /// Failure taxonomy: [`DatasetError::Io`] (unreadable file),
    /// [`DatasetError::Parse`] (not valid JSON), [`DatasetError::MissingField`] /
    /// [`DatasetError::InvalidField`] (schema), [`DatasetError::ShapeMismatch`]
    /// (length invariant). Any failure happens before a single drawing call.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let value: serde_json::Value = serde_json::from_str(&text)?;
        let ds = Self::from_value(&value)?;
        ds.validate()?;
        log::debug!(
            "loaded dataset: {} viz nodes, {} coarse, {} fine",
            ds.grid_viz.len(),
            ds.grid_h.len(),
            ds.grid_h2.len()
        );
        Ok(ds)
    }

    /// Extract the seven named sequences from a parsed JSON document.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, DatasetError> {
        let obj = value.as_object().ok_or(DatasetError::NotAnObject)?;
        let field = |name: &'static str| -> Result<Vec<f64>, DatasetError> {
            let v = obj.get(name).ok_or(DatasetError::MissingField(name))?;
            let arr = v.as_array().ok_or(DatasetError::InvalidField { field: name })?;
            arr.iter()
                .map(|x| x.as_f64().ok_or(DatasetError::InvalidField { field: name }))
                .collect()
        };
        Ok(Self {
            grid_viz: field(GRID_VIZ)?,
            derivative_analytic: field(DERIVATIVE_ANALYTIC)?,
            grid_h: field(GRID_H)?,
            derivative_h: field(DERIVATIVE_H)?,
            grid_h2: field(GRID_H2)?,
            derivative_h2: field(DERIVATIVE_H2)?,
            updated_runge: field(UPDATED_RUNGE)?,
        })
    }

    /// Check the paired-length invariants, failing fast instead of letting a
    /// zip silently truncate at plot time.
    pub fn validate(&self) -> Result<(), DatasetError> {
        let pairs: [(&'static str, usize, &'static str, usize); 4] = [
            (GRID_VIZ, self.grid_viz.len(), DERIVATIVE_ANALYTIC, self.derivative_analytic.len()),
            (GRID_H, self.grid_h.len(), DERIVATIVE_H, self.derivative_h.len()),
            (GRID_H2, self.grid_h2.len(), DERIVATIVE_H2, self.derivative_h2.len()),
            (GRID_H2, self.grid_h2.len(), UPDATED_RUNGE, self.updated_runge.len()),
        ];
        for (left, left_len, right, right_len) in pairs {
            if left_len != right_len {
                return Err(DatasetError::ShapeMismatch { left, left_len, right, right_len });
            }
        }
        Ok(())
    }

    /// Validate and write the dataset as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DatasetError> {
        self.validate()?;
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = std::fs::File::create(path.as_ref())?;
        serde_json::to_writer(file, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_json() -> serde_json::Value {
        serde_json::json!({
            "grid_M_viz": [0, 1, 2],
            "derivative_analytics": [0, 1, 4],
            "grid_h": [0, 1, 2],
            "derivative_in_h": [0, 1, 4],
            "grid_h_2": [0, 1, 2],
            "derivative_in_h_2": [0, 1, 4],
            "updated_runge": [0, 1, 4]
        })
    }

    #[test]
    fn extracts_all_seven_fields() {
        let ds = Dataset::from_value(&scenario_json()).expect("well-formed");
        ds.validate().expect("valid lengths");
        assert_eq!(ds.grid_viz, vec![0.0, 1.0, 2.0]);
        assert_eq!(ds.updated_runge, vec![0.0, 1.0, 4.0]);
    }

    #[test]
    fn non_object_root_is_rejected() {
        for v in [serde_json::json!([1, 2, 3]), serde_json::json!(42), serde_json::json!(null)] {
            assert!(matches!(Dataset::from_value(&v), Err(DatasetError::NotAnObject)));
        }
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let mut v = scenario_json();
        v.as_object_mut().unwrap().remove("updated_runge");
        match Dataset::from_value(&v) {
            Err(DatasetError::MissingField(name)) => assert_eq!(name, UPDATED_RUNGE),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_array_is_invalid() {
        let mut v = scenario_json();
        v["grid_h"] = serde_json::json!(["a", "b"]);
        assert!(matches!(
            Dataset::from_value(&v),
            Err(DatasetError::InvalidField { field: GRID_H })
        ));
    }

    #[test]
    fn shape_mismatch_fails_fast() {
        let mut v = scenario_json();
        v["derivative_in_h"] = serde_json::json!([0, 1]);
        let ds = Dataset::from_value(&v).expect("fields present");
        match ds.validate() {
            Err(DatasetError::ShapeMismatch { left, left_len, right, right_len }) => {
                assert_eq!(left, GRID_H);
                assert_eq!(left_len, 3);
                assert_eq!(right, DERIVATIVE_H);
                assert_eq!(right_len, 2);
            }
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let err = Dataset::load("target/does_not_exist/data.json").unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }

    #[test]
    fn unparseable_file_surfaces_parse_error() {
        let dir = std::path::PathBuf::from("target/test_out");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("garbage.json");
        std::fs::write(&path, "not json at all {").unwrap();
        assert!(matches!(Dataset::load(&path), Err(DatasetError::Parse(_))));
    }

    #[test]
    fn save_then_load_round_trip() {
        let ds = Dataset::from_value(&scenario_json()).unwrap();
        let path = std::path::PathBuf::from("target/test_out/roundtrip.json");
        ds.save(&path).expect("save");
        let back = Dataset::load(&path).expect("load");
        assert_eq!(back.grid_h2, ds.grid_h2);
        assert_eq!(back.derivative_analytic, ds.derivative_analytic);
    }
}
