use std::collections::BTreeMap;

use crate::styles::StyleId;

/// Raw or clamped parameter value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Numeric parameter (integers are carried as whole floats).
    Number(f64),
    /// Toggle parameter.
    Bool(bool),
}

impl ParamValue {
    /// Numeric payload, if any.
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(v),
            Self::Bool(_) => None,
        }
    }

    /// Boolean payload, if any.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(b),
            Self::Number(_) => None,
        }
    }

    /// Parse a CLI literal: `true`/`false` or a number.
    pub fn parse_literal(s: &str) -> Option<Self> {
        match s.trim() {
            "true" => Some(Self::Bool(true)),
            "false" => Some(Self::Bool(false)),
            other => other.parse::<f64>().ok().map(Self::Number),
        }
    }
}

/// Declared type and range of one parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamKind {
    /// Integer, rounded then clamped into `[min, max]`.
    Int {
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
        /// Value used when the input is missing or unusable.
        default: i64,
    },
    /// Real number clamped into `[min, max]`.
    Float {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
        /// Value used when the input is missing or unusable.
        default: f64,
    },
    /// Toggle.
    Bool {
        /// Value used when the input is missing or unusable.
        default: bool,
    },
}

impl ParamKind {
    /// Default as a [`ParamValue`].
    pub fn default_value(self) -> ParamValue {
        match self {
            Self::Int { default, .. } => ParamValue::Number(default as f64),
            Self::Float { default, .. } => ParamValue::Number(default),
            Self::Bool { default } => ParamValue::Bool(default),
        }
    }

    fn clamp(self, raw: ParamValue) -> Option<ParamValue> {
        match (self, raw) {
            (Self::Int { min, max, .. }, ParamValue::Number(v)) if v.is_finite() => {
                Some(ParamValue::Number(v.round().clamp(min as f64, max as f64)))
            }
            (Self::Float { min, max, .. }, ParamValue::Number(v)) if v.is_finite() => {
                Some(ParamValue::Number(v.clamp(min, max)))
            }
            (Self::Bool { .. }, ParamValue::Bool(b)) => Some(ParamValue::Bool(b)),
            _ => None,
        }
    }
}

/// One declared style parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamSpec {
    /// Parameter key (snake_case).
    pub name: &'static str,
    /// Type, range and default.
    pub kind: ParamKind,
    /// The parameter is consulted only while the named toggle has the given value.
    pub depends_on: Option<(&'static str, bool)>,
}

impl ParamSpec {
    pub(crate) const fn int(name: &'static str, min: i64, max: i64, default: i64) -> Self {
        Self {
            name,
            kind: ParamKind::Int { min, max, default },
            depends_on: None,
        }
    }

    pub(crate) const fn float(name: &'static str, min: f64, max: f64, default: f64) -> Self {
        Self {
            name,
            kind: ParamKind::Float { min, max, default },
            depends_on: None,
        }
    }

    pub(crate) const fn toggle(name: &'static str, default: bool) -> Self {
        Self {
            name,
            kind: ParamKind::Bool { default },
            depends_on: None,
        }
    }

    pub(crate) const fn when(mut self, flag: &'static str, value: bool) -> Self {
        self.depends_on = Some((flag, value));
        self
    }
}

pub(crate) static ORB_TRAIL_SCHEMA: [ParamSpec; 10] = [
    ParamSpec::int("count", 3, 12, 7),
    ParamSpec::float("radius_pct", 0.06, 0.25, 0.14),
    ParamSpec::float("gamma", 1.0, 3.0, 1.75),
    ParamSpec::float("end_x", 0.60, 0.95, 0.84),
    ParamSpec::float("end_y", 0.60, 0.95, 0.84),
    ParamSpec::float("trail_scale", 0.5, 1.4, 0.9).when("manual_start", false),
    ParamSpec::float("curvature", -0.3, 0.3, 0.0),
    ParamSpec::toggle("manual_start", false),
    ParamSpec::float("start_x", -0.3, 0.6, -0.12).when("manual_start", true),
    ParamSpec::float("start_y", -0.3, 0.6, 0.28).when("manual_start", true),
];

pub(crate) static CORNER_STEPS_SCHEMA: [ParamSpec; 5] = [
    ParamSpec::int("steps", 3, 20, 8),
    ParamSpec::float("step_x", 0.02, 0.3, 0.11),
    ParamSpec::float("step_y", 0.02, 0.3, 0.08),
    ParamSpec::toggle("irregular", true),
    ParamSpec::float("irregular_amt", 0.0, 0.6, 0.30).when("irregular", true),
];

pub(crate) static ISO_CUBES_SCHEMA: [ParamSpec; 3] = [
    ParamSpec::int("cols", 3, 14, 6),
    ParamSpec::float("shade", 0.05, 0.5, 0.22),
    ParamSpec::int("variety", 1, 8, 3),
];

/// Clamped parameter set for one style.
///
/// Every declared parameter is present; values always lie inside their declared range.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct StyleParams {
    #[serde(skip)]
    schema: &'static [ParamSpec],
    values: BTreeMap<&'static str, ParamValue>,
}

impl StyleParams {
    /// Clamp caller input against the schema of `style`.
    pub fn clamp(style: StyleId, raw: &BTreeMap<String, ParamValue>) -> Self {
        Self::from_schema(style.schema(), raw)
    }

    /// Clamp caller input against `schema`. Never fails.
    pub fn from_schema(schema: &'static [ParamSpec], raw: &BTreeMap<String, ParamValue>) -> Self {
        for key in raw.keys() {
            if !schema.iter().any(|s| s.name == key.as_str()) {
                tracing::debug!(param = %key, "ignoring unknown style parameter");
            }
        }
        let values = schema
            .iter()
            .map(|spec| {
                let value = match raw.get(spec.name) {
                    None => spec.kind.default_value(),
                    Some(v) => spec.kind.clamp(*v).unwrap_or_else(|| {
                        tracing::warn!(param = spec.name, value = ?v, "unusable parameter value, using default");
                        spec.kind.default_value()
                    }),
                };
                (spec.name, value)
            })
            .collect();
        Self { schema, values }
    }

    /// Schema these values were clamped against.
    pub fn schema(&self) -> &'static [ParamSpec] {
        self.schema
    }

    /// Clamped value by name.
    pub fn get(&self, name: &str) -> Option<ParamValue> {
        self.values.get(name).copied()
    }

    /// Numeric value; `0.0` for undeclared names.
    pub fn get_f64(&self, name: &str) -> f64 {
        self.get(name).and_then(ParamValue::as_f64).unwrap_or(0.0)
    }

    /// Integer value as `usize` (negative clamps to zero).
    pub fn get_usize(&self, name: &str) -> usize {
        self.get_f64(name).max(0.0) as usize
    }

    /// Toggle value; `false` for undeclared names.
    pub fn get_bool(&self, name: &str) -> bool {
        self.get(name).and_then(ParamValue::as_bool).unwrap_or(false)
    }

    /// Whether `name` is consulted under the current toggles.
    pub fn is_active(&self, name: &str) -> bool {
        let Some(spec) = self.schema.iter().find(|s| s.name == name) else {
            return false;
        };
        match spec.depends_on {
            None => true,
            Some((flag, want)) => self.get_bool(flag) == want,
        }
    }

    /// Iterate clamped values in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, ParamValue)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/schema.rs"]
mod tests;
