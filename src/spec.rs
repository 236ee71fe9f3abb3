//! Configuration values as handed over by the parser. Nothing in here is
//! mutated after deserialisation; normalisation steps build new values.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{
    error::{missing, Result},
    param::{safe, Param},
    Map,
};

/// Name reported for currents that lack a `name` entry.
pub const UNNAMED: &str = "<unnamed>";

/// One entry of a neuron's current list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurrentSpec {
    /// Dispatch identifier; missing is an error at construction time.
    #[serde(default)]
    pub class: Option<String>,
    /// Everything else: name, g, E and mechanism specific entries.
    #[serde(flatten)]
    pub fields: Map<String, Param>,
}

impl CurrentSpec {
    pub fn new(class: &str) -> Self {
        CurrentSpec {
            class: Some(class.to_string()),
            fields: Map::new(),
        }
    }

    /// Builder used by tests and programmatic callers.
    pub fn with<P: Into<Param>>(mut self, field: &str, value: P) -> Self {
        self.fields.insert(field.to_string(), value.into());
        self
    }

    pub fn name(&self) -> Result<String> {
        self.fields
            .get("name")
            .map(|p| p.to_string())
            .ok_or_else(|| missing("name", UNNAMED))
    }

    /// Name for diagnostics, never fails.
    pub fn label(&self) -> String {
        self.name().unwrap_or_else(|_| UNNAMED.to_string())
    }

    pub fn get(&self, field: &str) -> Option<&Param> {
        self.fields.get(field)
    }

    pub fn require(&self, field: &str) -> Result<&Param> {
        self.get(field).ok_or_else(|| missing(field, self.label()))
    }

    /// Required field in its bracketed form
    pub fn safe(&self, field: &str) -> Result<String> {
        Ok(safe(self.require(field)?))
    }

    /// Optional field in its bracketed form, falling back to `default`.
    pub fn safe_or(&self, field: &str, default: &str) -> String {
        match self.get(field) {
            Some(p) => safe(p),
            None => safe(default),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Currents {
    #[serde(default)]
    pub defined: Option<Vec<CurrentSpec>>,
    /// Files holding further current lists. Gone once merged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included: Option<Vec<PathBuf>>,
}

/// Parameter block of one neuron
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuronSpec {
    pub area: Param,
    pub conductance: Param,
    #[serde(rename = "vClamp", default, skip_serializing_if = "Option::is_none")]
    pub v_clamp: Option<Param>,
    #[serde(default)]
    pub currents: Currents,
}

impl NeuronSpec {
    pub fn new<A: Into<Param>, C: Into<Param>>(area: A, conductance: C) -> Self {
        NeuronSpec {
            area: area.into(),
            conductance: conductance.into(),
            v_clamp: None,
            currents: Currents::default(),
        }
    }

    pub fn with_current(mut self, current: CurrentSpec) -> Self {
        self.currents.defined.get_or_insert_with(Vec::new).push(current);
        self
    }

    pub fn with_include<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.currents.included.get_or_insert_with(Vec::new).push(path.into());
        self
    }

    pub fn clamped(mut self, on: bool) -> Self {
        self.v_clamp = Some(Param::Flag(on));
        self
    }

    pub fn is_clamped(&self) -> bool {
        self.v_clamp.as_ref().map(Param::is_truthy).unwrap_or(false)
    }

    pub fn defined(&self) -> &[CurrentSpec] {
        self.currents.defined.as_deref().unwrap_or_default()
    }
}
