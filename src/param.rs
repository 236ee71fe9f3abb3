use serde::{Deserialize, Serialize};
use std::fmt;

/// Wrap a parameter in brackets so it can be spliced into products and
/// quotients without changing precedence. Every call adds one layer.
pub fn safe<T: fmt::Display>(value: T) -> String {
    format!("({})", value)
}

/// Scalar value of a configuration entry. Reals print with `{:?}` so they
/// stay float literals (`2.0`, `1e-20`). The YAML reader has already turned
/// an unquoted `1e-4` into a number, its exponent spelling is gone and it
/// prints as `0.0001`; quote the value to keep the text as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Param {
    Flag(bool),
    Int(i64),
    Real(f64),
    Text(String),
}

impl Param {
    pub fn is_truthy(&self) -> bool {
        match self {
            Param::Flag(b) => *b,
            Param::Int(i) => *i != 0,
            Param::Real(x) => *x != 0.0,
            Param::Text(s) => !s.is_empty(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Param::Text(s) = self {
            Some(s)
        } else {
            None
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Flag(b) => write!(f, "{}", b),
            Param::Int(i) => write!(f, "{}", i),
            Param::Real(x) => write!(f, "{:?}", x),
            Param::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Param {
    fn from(s: &str) -> Self {
        Param::Text(s.to_string())
    }
}

impl From<String> for Param {
    fn from(s: String) -> Self {
        Param::Text(s)
    }
}

impl From<f64> for Param {
    fn from(x: f64) -> Self {
        Param::Real(x)
    }
}

impl From<i64> for Param {
    fn from(i: i64) -> Self {
        Param::Int(i)
    }
}

impl From<i32> for Param {
    fn from(i: i32) -> Self {
        Param::Int(i.into())
    }
}

impl From<bool> for Param {
    fn from(b: bool) -> Self {
        Param::Flag(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_adds_one_layer_per_call() {
        assert_eq!(safe("x"), "(x)");
        assert_eq!(safe(safe("x")), "((x))");
        assert_eq!(safe(safe(safe(-54.3))), "(((-54.3)))");
    }

    #[test]
    fn wrapped_product_keeps_precedence() {
        // 1 + 2 * 3 must stay grouped when multiplied
        let g = safe(safe("1 + 2") + " * " + &safe("3"));
        assert_eq!(g, "((1 + 2) * (3))");
        assert_eq!(format!("{} * v", g), "((1 + 2) * (3)) * v");
    }

    #[test]
    fn display_of_scalars() {
        assert_eq!(Param::from(0.0003).to_string(), "0.0003");
        assert_eq!(Param::from(-54.3).to_string(), "-54.3");
        assert_eq!(Param::from(1).to_string(), "1");
        assert_eq!(Param::from(2.0).to_string(), "2.0");
        assert_eq!(Param::from(1.0e-20).to_string(), "1e-20");
        assert_eq!(Param::from(1e-4).to_string(), "0.0001");
        assert_eq!(Param::from("-63 * mV").to_string(), "-63 * mV");
    }

    #[test]
    fn truthiness() {
        assert!(Param::from(true).is_truthy());
        assert!(Param::from(1).is_truthy());
        assert!(Param::from("yes").is_truthy());
        assert!(!Param::from(false).is_truthy());
        assert!(!Param::from(0).is_truthy());
        assert!(!Param::from(0.0).is_truthy());
        assert!(!Param::from("").is_truthy());
    }

    #[test]
    fn scalars_from_yaml() {
        let ps: Vec<Param> =
            serde_yaml::from_str("[true, 3, 0.5, '1e-4', 20 * umetre ** 2]").unwrap();
        assert_eq!(
            ps,
            vec![
                Param::Flag(true),
                Param::Int(3),
                Param::Real(0.5),
                Param::Text(String::from("1e-4")),
                Param::Text(String::from("20 * umetre ** 2")),
            ]
        );
    }
}
