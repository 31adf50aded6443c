//! Camera resources as stored on disk.
//!
//! A resource is a JSON object naming its parameter kind in `type_name`,
//! with the kind's fields alongside:
//!
//! ```json
//! { "type_name": "ThirdPersonCameraParameter", "fov": 50.0, "vertical_offset": 2.5 }
//! ```
//!
//! Decoding into a [`CameraParameter`] happens when the camera component is
//! constructed, so an entity can carry a resource whose kind turns out to
//! be unknown.

use crate::prelude::*;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CameraError {
    #[error("invalid camera type `{0}`")]
    UnknownType(String),
    #[error("malformed {type_name} fields: {source}")]
    Malformed {
        type_name: String,
        source: serde_json::Error,
    },
    #[error("camera resource is not valid json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read camera resource {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Untyped camera resource, attached to an entity until a camera component is built from it.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraComponentRes {
    pub type_name: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl CameraComponentRes {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn from_json(source: &str) -> std::result::Result<Self, CameraError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> std::result::Result<Self, CameraError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| CameraError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let res = Self::from_json(&source)?;
        log::debug!("Loaded {} from {}", res.type_name, path.display());
        Ok(res)
    }

    /// Field of view shared by every parameter kind, readable even when the kind is unknown.
    pub fn fov(&self) -> f32 {
        self.fields
            .get("fov")
            .and_then(Value::as_f64)
            .map_or(DEFAULT_FOV, |fov| fov as f32)
    }

    pub fn decode(&self) -> std::result::Result<CameraParameter, CameraError> {
        let fields = Value::Object(self.fields.clone());
        let malformed = |source| CameraError::Malformed {
            type_name: self.type_name.clone(),
            source,
        };

        match self.type_name.as_str() {
            FirstPersonCameraParameter::TYPE_NAME => serde_json::from_value(fields)
                .map(CameraParameter::FirstPerson)
                .map_err(malformed),
            ThirdPersonCameraParameter::TYPE_NAME => serde_json::from_value(fields)
                .map(CameraParameter::ThirdPerson)
                .map_err(malformed),
            FreeCameraParameter::TYPE_NAME => serde_json::from_value(fields)
                .map(CameraParameter::Free)
                .map_err(malformed),
            other => Err(CameraError::UnknownType(other.to_string())),
        }
    }
}
