//! Parameter expressions for parameterized gates.
//!
//! Gate angles are stored as small expression trees so a circuit can be
//! built against a symbol (`θ · t`) and bound to a number later.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::ops;

/// A symbolic or concrete gate parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterExpression {
    /// A literal value.
    Constant(f64),
    /// A named free parameter.
    Symbol(String),
    /// Negation.
    Neg(Box<ParameterExpression>),
    /// Sum.
    Add(Box<ParameterExpression>, Box<ParameterExpression>),
    /// Product.
    Mul(Box<ParameterExpression>, Box<ParameterExpression>),
    /// Quotient.
    Div(Box<ParameterExpression>, Box<ParameterExpression>),
}

impl ParameterExpression {
    /// Create a literal parameter.
    pub fn constant(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }

    /// Create a free parameter.
    pub fn symbol(name: impl Into<String>) -> Self {
        ParameterExpression::Symbol(name.into())
    }

    /// True if the expression still references a free parameter.
    pub fn is_symbolic(&self) -> bool {
        match self {
            ParameterExpression::Constant(_) => false,
            ParameterExpression::Symbol(_) => true,
            ParameterExpression::Neg(e) => e.is_symbolic(),
            ParameterExpression::Add(a, b)
            | ParameterExpression::Mul(a, b)
            | ParameterExpression::Div(a, b) => a.is_symbolic() || b.is_symbolic(),
        }
    }

    /// Evaluate to a number, or `None` if a symbol is still free or a
    /// division by zero occurs.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParameterExpression::Constant(v) => Some(*v),
            ParameterExpression::Symbol(_) => None,
            ParameterExpression::Neg(e) => e.as_f64().map(|v| -v),
            ParameterExpression::Add(a, b) => Some(a.as_f64()? + b.as_f64()?),
            ParameterExpression::Mul(a, b) => Some(a.as_f64()? * b.as_f64()?),
            ParameterExpression::Div(a, b) => {
                let divisor = b.as_f64()?;
                if divisor == 0.0 {
                    return None;
                }
                Some(a.as_f64()? / divisor)
            }
        }
    }

    /// Names of all free parameters, sorted.
    pub fn symbols(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        self.visit_symbols(&mut |name| {
            out.insert(name.to_string());
        });
        out
    }

    fn visit_symbols(&self, f: &mut impl FnMut(&str)) {
        match self {
            ParameterExpression::Constant(_) => {}
            ParameterExpression::Symbol(name) => f(name),
            ParameterExpression::Neg(e) => e.visit_symbols(f),
            ParameterExpression::Add(a, b)
            | ParameterExpression::Mul(a, b)
            | ParameterExpression::Div(a, b) => {
                a.visit_symbols(f);
                b.visit_symbols(f);
            }
        }
    }

    /// Replace every occurrence of `name` with `value`.
    ///
    /// The tree shape is kept; call [`fold`](Self::fold) to collapse it.
    #[must_use]
    pub fn bind(&self, name: &str, value: f64) -> Self {
        self.rewrite(&|leaf| match leaf {
            ParameterExpression::Symbol(n) if n == name => Some(ParameterExpression::Constant(value)),
            _ => None,
        })
    }

    /// Collapse every constant subtree into a single literal.
    #[must_use]
    pub fn fold(&self) -> Self {
        if let Some(v) = self.as_f64() {
            return ParameterExpression::Constant(v);
        }
        match self {
            ParameterExpression::Neg(e) => -e.fold(),
            ParameterExpression::Add(a, b) => a.fold() + b.fold(),
            ParameterExpression::Mul(a, b) => a.fold() * b.fold(),
            ParameterExpression::Div(a, b) => a.fold() / b.fold(),
            leaf => leaf.clone(),
        }
    }

    fn rewrite(&self, leaf_fn: &impl Fn(&Self) -> Option<Self>) -> Self {
        match self {
            ParameterExpression::Neg(e) => -e.rewrite(leaf_fn),
            ParameterExpression::Add(a, b) => a.rewrite(leaf_fn) + b.rewrite(leaf_fn),
            ParameterExpression::Mul(a, b) => a.rewrite(leaf_fn) * b.rewrite(leaf_fn),
            ParameterExpression::Div(a, b) => a.rewrite(leaf_fn) / b.rewrite(leaf_fn),
            leaf => leaf_fn(leaf).unwrap_or_else(|| leaf.clone()),
        }
    }
}

impl fmt::Display for ParameterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterExpression::Constant(v) => match f.precision() {
                Some(p) => write!(f, "{v:.p$}"),
                None => write!(f, "{v}"),
            },
            ParameterExpression::Symbol(name) => write!(f, "{name}"),
            ParameterExpression::Neg(e) => write!(f, "-({e})"),
            ParameterExpression::Add(a, b) => write!(f, "({a} + {b})"),
            ParameterExpression::Mul(a, b) => write!(f, "{a}*{b}"),
            ParameterExpression::Div(a, b) => write!(f, "{a}/{b}"),
        }
    }
}

impl From<f64> for ParameterExpression {
    fn from(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }
}

impl From<&ParameterExpression> for ParameterExpression {
    fn from(value: &ParameterExpression) -> Self {
        value.clone()
    }
}

impl ops::Neg for ParameterExpression {
    type Output = Self;

    fn neg(self) -> Self {
        ParameterExpression::Neg(Box::new(self))
    }
}

impl ops::Add for ParameterExpression {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        ParameterExpression::Add(Box::new(self), Box::new(rhs))
    }
}

impl ops::Mul for ParameterExpression {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        ParameterExpression::Mul(Box::new(self), Box::new(rhs))
    }
}

impl ops::Div for ParameterExpression {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        ParameterExpression::Div(Box::new(self), Box::new(rhs))
    }
}

impl ops::Mul<f64> for ParameterExpression {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self * ParameterExpression::Constant(rhs)
    }
}

impl ops::Div<f64> for ParameterExpression {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        self / ParameterExpression::Constant(rhs)
    }
}
