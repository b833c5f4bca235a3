use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

/// A ski-park condition record. Values are replaced wholesale on update, never mutated in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snowpark {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub is_open: bool,
    pub temperature_c: i32,
    pub snow_depth_cm: i32,
}

/// Create input. `name` and `location` are required; the rest default to `false`/`0`/`0`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSnowpark {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub is_open: Option<bool>,
    #[serde(default)]
    pub temperature_c: Option<i32>,
    #[serde(default)]
    pub snow_depth_cm: Option<i32>,
}

impl NewSnowpark {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self { name: Some(name.into()), location: Some(location.into()), ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        validate_label("name", self.name.as_deref())?;
        validate_label("location", self.location.as_deref())?;
        Ok(())
    }

    /// Validate and build the stored record under `id`.
    pub fn into_record(self, id: Uuid) -> Result<Snowpark, ModelError> {
        self.validate()?;
        Ok(Snowpark {
            id,
            name: self.name.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            is_open: self.is_open.unwrap_or(false),
            temperature_c: self.temperature_c.unwrap_or(0),
            snow_depth_cm: self.snow_depth_cm.unwrap_or(0),
        })
    }
}

/// Partial update. An absent (or `null`) field keeps the stored value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnowparkPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub is_open: Option<bool>,
    #[serde(default)]
    pub temperature_c: Option<i32>,
    #[serde(default)]
    pub snow_depth_cm: Option<i32>,
}

impl SnowparkPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.location.is_none()
            && self.is_open.is_none()
            && self.temperature_c.is_none()
            && self.snow_depth_cm.is_none()
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.is_empty() {
            return Err(ModelError::Validation("at least one field must be provided".into()));
        }
        if self.name.is_some() {
            validate_label("name", self.name.as_deref())?;
        }
        if self.location.is_some() {
            validate_label("location", self.location.as_deref())?;
        }
        Ok(())
    }

    /// Build the replacement record: present fields from the patch, the rest from `current`.
    pub fn apply(&self, current: &Snowpark) -> Snowpark {
        Snowpark {
            id: current.id,
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            location: self.location.clone().unwrap_or_else(|| current.location.clone()),
            is_open: self.is_open.unwrap_or(current.is_open),
            temperature_c: self.temperature_c.unwrap_or(current.temperature_c),
            snow_depth_cm: self.snow_depth_cm.unwrap_or(current.snow_depth_cm),
        }
    }
}

pub fn validate_label(field: &str, value: Option<&str>) -> Result<(), ModelError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        Some(_) => Err(ModelError::Validation(format!("{field} must not be empty"))),
        None => Err(ModelError::Validation(format!("{field} is required"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpine() -> Snowpark {
        Snowpark {
            id: Uuid::new_v4(),
            name: "Alpine".into(),
            location: "Valley".into(),
            is_open: true,
            temperature_c: -4,
            snow_depth_cm: 120,
        }
    }

    #[test]
    fn new_snowpark_defaults_optional_fields() {
        let id = Uuid::new_v4();
        let rec = NewSnowpark::new("A", "B").into_record(id).unwrap();
        assert_eq!(rec.id, id);
        assert_eq!(rec.name, "A");
        assert_eq!(rec.location, "B");
        assert!(!rec.is_open);
        assert_eq!(rec.temperature_c, 0);
        assert_eq!(rec.snow_depth_cm, 0);
    }

    #[test]
    fn new_snowpark_rejects_blank_or_missing_labels() {
        assert!(NewSnowpark::new("", "B").validate().is_err());
        assert!(NewSnowpark::new("   ", "B").validate().is_err());
        let missing_location = NewSnowpark { name: Some("A".into()), ..NewSnowpark::default() };
        assert_eq!(
            missing_location.validate(),
            Err(ModelError::Validation("location is required".into()))
        );
    }

    #[test]
    fn patch_keeps_untouched_fields() {
        let current = alpine();
        let patch = SnowparkPatch { temperature_c: Some(-10), ..SnowparkPatch::default() };
        let next = patch.apply(&current);
        assert_eq!(next, Snowpark { temperature_c: -10, ..current });
    }

    #[test]
    fn empty_patch_is_invalid() {
        let patch = SnowparkPatch::default();
        assert!(patch.is_empty());
        assert!(patch.validate().is_err());
    }

    #[test]
    fn patch_with_blank_name_is_invalid() {
        let patch = SnowparkPatch { name: Some(" ".into()), ..SnowparkPatch::default() };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn wire_format_is_camel_case() {
        let json = serde_json::to_value(alpine()).unwrap();
        assert_eq!(json["isOpen"], true);
        assert_eq!(json["temperatureC"], -4);
        assert_eq!(json["snowDepthCm"], 120);

        let patch: SnowparkPatch = serde_json::from_str(r#"{"snowDepthCm": 80, "name": null}"#).unwrap();
        assert_eq!(patch.snow_depth_cm, Some(80));
        assert_eq!(patch.name, None);
    }
}
