use schemata_core::Error;

use std::{fmt, str::FromStr};

/// Comparison used by a search [`Condition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Like,
    NotLike,
}

/// `attribute <operator> value`
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub attribute: String,
    pub op: Operator,
    pub value: String,
}

impl Condition {
    pub fn new(attribute: impl Into<String>, op: Operator, value: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            op,
            value: value.into(),
        }
    }
}

impl Operator {
    pub fn is_pattern(self) -> bool {
        matches!(self, Operator::Like | Operator::NotLike)
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<_> = s.split_whitespace().collect();

        Ok(match &words[..] {
            ["="] => Operator::Eq,
            ["<>"] | ["!="] => Operator::Ne,
            ["<"] => Operator::Lt,
            ["<="] => Operator::Le,
            [">"] => Operator::Gt,
            [">="] => Operator::Ge,
            [like] if like.eq_ignore_ascii_case("like") => Operator::Like,
            [not, like] if not.eq_ignore_ascii_case("not") && like.eq_ignore_ascii_case("like") => {
                Operator::NotLike
            }
            _ => return Err(Error::invalid_value("operator", s, "unsupported operator")),
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operator::Eq => "=",
            Operator::Ne => "<>",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("=".parse::<Operator>().unwrap(), Operator::Eq);
        assert_eq!("!=".parse::<Operator>().unwrap(), Operator::Ne);
        assert_eq!(" <> ".parse::<Operator>().unwrap(), Operator::Ne);
        assert_eq!(">=".parse::<Operator>().unwrap(), Operator::Ge);
        assert_eq!("like".parse::<Operator>().unwrap(), Operator::Like);
        assert_eq!("Not  LIKE".parse::<Operator>().unwrap(), Operator::NotLike);

        let err = "~".parse::<Operator>().unwrap_err();
        assert!(err.is_invalid_value());
    }

    #[test]
    fn display_parses_back() {
        for op in [
            Operator::Eq,
            Operator::Ne,
            Operator::Lt,
            Operator::Le,
            Operator::Gt,
            Operator::Ge,
            Operator::Like,
            Operator::NotLike,
        ] {
            assert_eq!(op.to_string().parse::<Operator>().unwrap(), op);
        }
    }
}
