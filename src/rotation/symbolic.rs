//! Symbolic scalar expressions
//!
//! A small expression tree covering what the rotation formulas need:
//! numbers, named symbols, arithmetic, and the two trigonometric
//! functions. Expressions are serde-serializable so derived function
//! graphs can be persisted through the binary storage backend.

use std::collections::HashMap;
use std::fmt;
use std::ops;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when evaluating an expression
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolicError {
    #[error("no binding for symbol: {0}")]
    UnboundSymbol(String),
}

/// A symbolic scalar expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Numeric literal
    Num(f64),
    /// Named symbol, bound at evaluation time
    Sym(String),
    /// Negation
    Neg(Box<Expr>),
    /// Sum of two expressions
    Add(Box<Expr>, Box<Expr>),
    /// Difference of two expressions
    Sub(Box<Expr>, Box<Expr>),
    /// Product of two expressions
    Mul(Box<Expr>, Box<Expr>),
    /// Cosine
    Cos(Box<Expr>),
    /// Sine
    Sin(Box<Expr>),
}

impl Expr {
    /// Create a symbol expression
    pub fn sym(name: impl Into<String>) -> Self {
        Expr::Sym(name.into())
    }

    /// Create a numeric literal
    pub fn num(value: f64) -> Self {
        Expr::Num(value)
    }

    /// Cosine of this expression
    pub fn cos(&self) -> Self {
        Expr::Cos(Box::new(self.clone()))
    }

    /// Sine of this expression
    pub fn sin(&self) -> Self {
        Expr::Sin(Box::new(self.clone()))
    }

    /// Evaluate the expression with the given symbol bindings.
    ///
    /// # Errors
    ///
    /// [`SymbolicError::UnboundSymbol`] if a symbol has no entry in
    /// `bindings`.
    pub fn eval(&self, bindings: &HashMap<String, f64>) -> Result<f64, SymbolicError> {
        match self {
            Expr::Num(v) => Ok(*v),
            Expr::Sym(name) => bindings
                .get(name)
                .copied()
                .ok_or_else(|| SymbolicError::UnboundSymbol(name.clone())),
            Expr::Neg(inner) => Ok(-inner.eval(bindings)?),
            Expr::Add(a, b) => Ok(a.eval(bindings)? + b.eval(bindings)?),
            Expr::Sub(a, b) => Ok(a.eval(bindings)? - b.eval(bindings)?),
            Expr::Mul(a, b) => Ok(a.eval(bindings)? * b.eval(bindings)?),
            Expr::Cos(inner) => Ok(inner.eval(bindings)?.cos()),
            Expr::Sin(inner) => Ok(inner.eval(bindings)?.sin()),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(v) => write!(f, "{v}"),
            Expr::Sym(name) => write!(f, "{name}"),
            Expr::Neg(inner) => write!(f, "-{inner}"),
            Expr::Add(a, b) => write!(f, "({a} + {b})"),
            Expr::Sub(a, b) => write!(f, "({a} - {b})"),
            Expr::Mul(a, b) => write!(f, "({a} * {b})"),
            Expr::Cos(inner) => write!(f, "cos({inner})"),
            Expr::Sin(inner) => write!(f, "sin({inner})"),
        }
    }
}

impl ops::Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::Add(Box::new(self), Box::new(rhs))
    }
}

impl ops::Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::Sub(Box::new(self), Box::new(rhs))
    }
}

impl ops::Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::Mul(Box::new(self), Box::new(rhs))
    }
}

impl ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Neg(Box::new(self))
    }
}
