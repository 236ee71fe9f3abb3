use crate::error::{parse_error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// `dx/dt = expr : unit`
    Differential,
    /// `x = expr : unit`
    Subexpression,
    /// `x : unit`, value supplied from outside
    Parameter,
}

/// One line of an equation block, split but not interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    pub kind: Kind,
    pub variable: String,
    pub expr: Option<String>,
    pub unit: String,
}

impl Equation {
    pub fn parse(input: &str) -> Result<Self> {
        match parse::equation(input.trim()) {
            Ok(("", result)) => Ok(result),
            Ok((rest, _)) => Err(parse_error(format!(
                "Trailing input '{}' in equation '{}'",
                rest, input
            ))),
            Err(_) => Err(parse_error(format!("Could not parse equation '{}'", input))),
        }
    }
}

/// Parse a block line by line, skipping blank lines and `#` comments.
pub fn parse_block(input: &str) -> Result<Vec<Equation>> {
    input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(Equation::parse)
        .collect()
}

mod parse {
    use nom::{
        branch::alt,
        bytes::complete::{tag, take_until, take_while, take_while1},
        character::complete::{char, space0},
        combinator::{map, opt, rest},
        sequence::{delimited, preceded, tuple},
        IResult,
    };

    use super::{Equation, Kind};

    fn identifier(input: &str) -> IResult<&str, &str> {
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(input)
    }

    fn differential(input: &str) -> IResult<&str, (Kind, &str)> {
        map(delimited(char('d'), identifier, tag("/dt")), |v| {
            (Kind::Differential, v)
        })(input)
    }

    fn plain(input: &str) -> IResult<&str, (Kind, &str)> {
        map(identifier, |v| (Kind::Subexpression, v))(input)
    }

    fn unit(input: &str) -> IResult<&str, &str> {
        preceded(tuple((char(':'), space0)), rest)(input)
    }

    pub fn equation(input: &str) -> IResult<&str, Equation> {
        let (input, (kind, variable)) = alt((differential, plain))(input)?;
        let (input, _) = space0(input)?;
        let (input, expr) = opt(preceded(char('='), take_until(":")))(input)?;
        let (input, unit) = unit(input)?;
        let (input, _) = take_while(|c: char| c.is_whitespace())(input)?;
        let kind = match (kind, expr) {
            (Kind::Subexpression, None) => Kind::Parameter,
            (k, _) => k,
        };
        Ok((
            input,
            Equation {
                kind,
                variable: variable.to_string(),
                expr: expr.map(|e| e.trim().to_string()),
                unit: unit.trim().to_string(),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_line_forms() {
        assert_eq!(
            Equation::parse("dn/dt = alphan * (1 - n) - betan * n : 1").unwrap(),
            Equation {
                kind: Kind::Differential,
                variable: String::from("n"),
                expr: Some(String::from("alphan * (1 - n) - betan * n")),
                unit: String::from("1"),
            }
        );
        assert_eq!(
            Equation::parse("driveChannel = (-(1) * ICa / (cm ** 2)) : mole * meter ** -3 * Hz")
                .unwrap(),
            Equation {
                kind: Kind::Subexpression,
                variable: String::from("driveChannel"),
                expr: Some(String::from("(-(1) * ICa / (cm ** 2))")),
                unit: String::from("mole * meter ** -3 * Hz"),
            }
        );
        assert_eq!(
            Equation::parse("I_stim : amp").unwrap(),
            Equation {
                kind: Kind::Parameter,
                variable: String::from("I_stim"),
                expr: None,
                unit: String::from("amp"),
            }
        );
    }

    #[test]
    fn missing_unit_is_rejected() {
        assert!(Equation::parse("x = 1 + 2").is_err());
        assert!(Equation::parse("= 1 : 1").is_err());
    }

    #[test]
    fn blocks_skip_comments() {
        let eqs =
            parse_block("v : volt\n\n# nothing\n  dCa_i/dt = -Ca_i / tau : mole * meter**-3\n")
                .unwrap();
        assert_eq!(eqs.len(), 2);
        assert_eq!(eqs[1].variable, "Ca_i");
        assert_eq!(eqs[1].kind, Kind::Differential);
    }
}
