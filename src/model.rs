use serde_yaml::Value;
use std::path::{Path, PathBuf};
use tracing::{info, trace};

use crate::{
    error::{schema_error, Error, Result},
    factory::Factory,
    neuron::Neuron,
    spec::NeuronSpec,
    Map,
};

/// All neurons of a parameter file, by name
#[derive(Debug)]
pub struct Model {
    neurons: Map<String, Neuron>,
}

impl Model {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file_with(path, &Factory::default())
    }

    /// Read a parameter file; included current files are looked up next to it.
    pub fn from_file_with<P: AsRef<Path>>(path: P, factory: &Factory) -> Result<Self> {
        let path = path.as_ref();
        let file_error = |what: String| Error::FileLoad {
            path: path.to_path_buf(),
            what,
        };
        trace!("Reading model file {:?}", path);
        let text = std::fs::read_to_string(path).map_err(|e| file_error(e.to_string()))?;
        let base = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(PathBuf::new);
        Self::parse(&text, factory, Some(&base)).map_err(|e| match e {
            Error::Parse { what } => Error::Parse {
                what: format!("{:?}: {}", path, what),
            },
            e => e,
        })
    }

    /// Parse model text; relative includes are taken from the working directory.
    pub fn from_yaml(text: &str) -> Result<Self> {
        Self::parse(text, &Factory::default(), None)
    }

    fn parse(text: &str, factory: &Factory, base: Option<&Path>) -> Result<Self> {
        let doc: Value = serde_yaml::from_str(text).map_err(|e| Error::Parse {
            what: e.to_string(),
        })?;
        let neurons = doc
            .get("neurons")
            .ok_or_else(|| schema_error("Missing top-level key 'neurons'"))?;
        let neurons = match neurons {
            Value::Mapping(m) => m.clone(),
            Value::Null => Default::default(),
            _ => {
                return Err(schema_error(
                    "'neurons' must be a mapping from name to parameters",
                ))
            }
        };

        let mut result = Map::new();
        for (name, params) in neurons {
            let name = match name {
                Value::String(s) => s,
                k => {
                    return Err(schema_error(format!(
                        "Neuron name must be a string, got {:?}",
                        k
                    )))
                }
            };
            let neuron = Self::neuron(&name, params, factory, base).map_err(|e| Error::Neuron {
                neuron: name.clone(),
                source: Box::new(e),
            })?;
            result.insert(name, neuron);
        }
        info!("Built model with {} neuron(s)", result.len());
        Ok(Model { neurons: result })
    }

    fn neuron(
        name: &str,
        params: Value,
        factory: &Factory,
        base: Option<&Path>,
    ) -> Result<Neuron> {
        let spec: NeuronSpec =
            serde_yaml::from_value(params).map_err(|e| schema_error(e.to_string()))?;
        Neuron::with_factory(name, &spec, factory, base)
    }

    pub fn neurons(&self) -> &Map<String, Neuron> {
        &self.neurons
    }

    pub fn get(&self, name: &str) -> Option<&Neuron> {
        self.neurons.get(name)
    }

    /// Equation text of every neuron
    pub fn to_equations(&self) -> Map<String, String> {
        self.neurons
            .iter()
            .map(|(k, n)| (k.clone(), n.to_equations()))
            .collect()
    }
}

/// File holding the equations of neuron `name` inside `dir`. The name is
/// used verbatim with `.eqs` appended and must not leave `dir`.
pub fn equations_path(dir: &Path, name: &str) -> Result<PathBuf> {
    let escapes = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(|c: char| c == '/' || c == '\\' || c == std::path::MAIN_SEPARATOR);
    if escapes {
        return Err(schema_error(format!(
            "Neuron name '{}' cannot be used as a file name",
            name
        )));
    }
    Ok(dir.join(format!("{}.eqs", name)))
}

/// Write one `<name>.eqs` per entry into `dir`. All names are checked
/// before the first file is written.
pub fn export(equations: &Map<String, String>, dir: &Path) -> Result<Vec<PathBuf>> {
    let paths = equations
        .keys()
        .map(|name| equations_path(dir, name))
        .collect::<Result<Vec<_>>>()?;
    std::fs::create_dir_all(dir)?;
    for (path, eq) in paths.iter().zip(equations.values()) {
        info!("Writing equations to {:?}", path);
        std::fs::write(path, eq)?;
    }
    Ok(paths)
}

/// Read `path` and render every neuron in it.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<Map<String, String>> {
    Ok(Model::from_file(path)?.to_equations())
}
