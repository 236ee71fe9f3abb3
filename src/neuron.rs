use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

use crate::{
    current::IonicCurrent,
    equation::{parse_block, Kind},
    error::{Error, Result},
    factory::Factory,
    param::safe,
    spec::{CurrentSpec, Currents, NeuronSpec},
    Set,
};

/// Externally driven stimulus current
pub const STIMULUS: &str = "I_stim";

/// Resolve `path` against `base` unless absolute.
fn locate(path: &Path, base: Option<&Path>) -> PathBuf {
    match base {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

fn load_included(neuron: &str, path: &Path) -> Result<Vec<CurrentSpec>> {
    let include_error = |what: String| Error::IncludeLoad {
        neuron: neuron.to_string(),
        path: path.to_path_buf(),
        what,
    };
    trace!("Reading included currents {:?}", path);
    let text = std::fs::read_to_string(path).map_err(|e| include_error(e.to_string()))?;
    let currents: Option<Vec<CurrentSpec>> =
        serde_yaml::from_str(&text).map_err(|e| include_error(e.to_string()))?;
    Ok(currents.unwrap_or_default())
}

/// Splice all included current lists into `defined` and drop `included`.
/// Includes are read completely before anything is merged, a failing file
/// leaves nothing half applied. Relative paths are taken against `base`.
pub fn merge_included(name: &str, spec: &NeuronSpec, base: Option<&Path>) -> Result<NeuronSpec> {
    let mut defined = spec.defined().to_vec();
    let mut extra = Vec::new();
    for path in spec.currents.included.iter().flatten() {
        let path = locate(path, base);
        let mut currents = load_included(name, &path)?;
        debug!(
            "Neuron '{}': {} current(s) included from {:?}",
            name,
            currents.len(),
            path
        );
        extra.append(&mut currents);
    }
    defined.append(&mut extra);
    Ok(NeuronSpec {
        currents: Currents {
            defined: Some(defined),
            included: None,
        },
        ..spec.clone()
    })
}

/// A cell with its membrane currents in declaration order
#[derive(Debug)]
pub struct Neuron {
    pub name: String,
    spec: NeuronSpec,
    currents: Vec<Box<dyn IonicCurrent>>,
    conductance: String,
}

impl Neuron {
    /// Build with the default current table, includes relative to the
    /// working directory.
    pub fn new(name: &str, spec: &NeuronSpec) -> Result<Self> {
        Self::with_factory(name, spec, &Factory::default(), None)
    }

    pub fn with_factory(
        name: &str,
        spec: &NeuronSpec,
        factory: &Factory,
        base: Option<&Path>,
    ) -> Result<Self> {
        let spec = merge_included(name, spec, base)?;
        let area = spec.area.to_string();
        let currents = spec
            .defined()
            .iter()
            .map(|c| factory.make_current(c, &area))
            .collect::<Result<Vec<_>>>()?;
        let conductance = safe(safe(&spec.conductance) + " * " + &safe(&area));
        trace!("Neuron '{}' has {} current(s)", name, currents.len());
        Ok(Neuron {
            name: name.to_string(),
            spec,
            currents,
            conductance,
        })
    }

    /// Parameter block after include resolution
    pub fn spec(&self) -> &NeuronSpec {
        &self.spec
    }

    pub fn currents(&self) -> &[Box<dyn IonicCurrent>] {
        &self.currents
    }

    pub fn conductance(&self) -> &str {
        &self.conductance
    }

    pub fn is_clamped(&self) -> bool {
        self.spec.is_clamped()
    }

    fn voltage(&self) -> String {
        if self.is_clamped() {
            return String::from("v : volt");
        }
        let mut dvdt = String::from("dv/dt = (");
        for current in &self.currents {
            dvdt.push_str(" - ");
            dvdt.push_str(current.name());
        }
        format!("{} + {}) / {} : volt", dvdt, STIMULUS, self.conductance)
    }

    /// Equation lines of the whole cell. A clamped cell keeps its current
    /// equations but has neither voltage dynamics nor stimulus.
    pub fn equations(&self) -> Vec<String> {
        let mut result = vec![self.voltage()];
        for current in &self.currents {
            result.extend(current.equations());
        }
        if !self.is_clamped() {
            result.push(format!("{} : amp", STIMULUS));
        }
        result
    }

    pub fn to_equations(&self) -> String {
        let result = self.equations().join("\n");
        if let Err(e) = self.check_duplicates(&result) {
            warn!("{}", e);
        }
        result
    }

    /// Report variables defined more than once in this cell's block.
    pub fn check_duplicates(&self, block: &str) -> Result<()> {
        let mut seen = Set::new();
        let mut twice = Set::new();
        for eq in parse_block(block)? {
            if !seen.insert(eq.variable.clone()) {
                twice.insert(eq.variable);
            }
        }
        if twice.is_empty() {
            Ok(())
        } else {
            Err(Error::Schema {
                what: format!(
                    "Neuron '{}' defines {} more than once",
                    self.name,
                    twice.into_iter().collect::<Vec<_>>().join(", ")
                ),
            })
        }
    }

    /// State variables per current, in declaration order
    pub fn state_variables(&self) -> Result<Vec<(String, Vec<String>)>> {
        let mut result = Vec::new();
        for current in &self.currents {
            let states = parse_block(&current.render())?
                .into_iter()
                .filter(|e| e.kind == Kind::Differential)
                .map(|e| e.variable)
                .collect();
            result.push((current.name().to_string(), states));
        }
        Ok(result)
    }
}
