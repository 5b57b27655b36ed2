//! Provides tools for conventional circuit notation.
//!
//! A [`Circuit`] is an ordered list of [`GateApp`]s over a fixed number of
//! qubits. Gate names are plain tokens: nothing is checked against the
//! [registry][crate::gates] when a circuit is built or extended unless a strict
//! check ([`Circuit::validate`], [`Circuit::add_checked`]) is requested
//! explicitly.
//!
//! ```
//! # use qcirc_tools::circuit::*;
//! let mut circ = Circuit::empty(2);
//! circ.add(("H", vec![0]).into());
//! circ.add(("CNOT", vec![0, 1]).into());
//! circ.add(("RZ", vec![1], 0.5).into());
//! assert_eq!(
//!     circ.to_string(),
//!     "('H', [0])\n('CNOT', [0, 1])\n('RZ', [1], 0.5)\n",
//! );
//! ```

use std::fmt;
use itertools::Itertools;
use ndarray as nd;
use num_complex::Complex64 as C64;
use thiserror::Error;
use tracing::debug;
use crate::gates::{ self, GateError, GateSpec };

#[derive(Debug, Error)]
pub enum CircuitError {
    #[error("gate {0:?} acts on {1} qubit(s), but {2} were targeted")]
    QubitCount(String, usize, usize),

    #[error("gate {0:?} targets qubit {1}, but the circuit only has {2}")]
    QubitOutOfRange(String, usize, usize),

    #[error("gate {0:?} targets qubit {1} more than once")]
    DuplicateQubit(String, usize),

    #[error("gate {0:?} expects {1} parameter(s), but got {2}")]
    ParamCount(String, usize, usize),

    #[error("at gate {0}: {1}")]
    AtGate(usize, Box<CircuitError>),

    #[error("registry error: {0}")]
    Registry(#[from] GateError),
}
pub type CircuitResult<T> = Result<T, CircuitError>;
use CircuitError::*;

/// A single application of a named gate to an ordered list of qubits, with any
/// extra real parameters (e.g. a rotation angle) in positional order.
#[derive(Clone, Debug, PartialEq)]
pub struct GateApp {
    pub name: String,
    pub qubits: Vec<usize>,
    pub params: Vec<f64>,
}

impl GateApp {
    /// Create a new, parameter-free gate application.
    pub fn new<S>(name: S, qubits: Vec<usize>) -> Self
    where S: Into<String>
    {
        Self { name: name.into(), qubits, params: Vec::new() }
    }

    /// Create a new gate application with parameters.
    pub fn with_params<S>(name: S, qubits: Vec<usize>, params: Vec<f64>)
        -> Self
    where S: Into<String>
    {
        Self { name: name.into(), qubits, params }
    }

    /// Look up the gate's registry entry.
    pub fn spec(&self) -> CircuitResult<&'static GateSpec> {
        Ok(gates::lookup(&self.name)?)
    }

    /// Evaluate the gate's matrix from the registry using the held
    /// parameters.
    pub fn matrix(&self) -> CircuitResult<nd::Array2<C64>> {
        Ok(gates::matrix(&self.name, &self.params)?)
    }

    /// Check `self` against the registry and a circuit of `nqbits` qubits.
    ///
    /// The gate name must be registered, the number of qubits and parameters
    /// must match the gate, and all qubit indices must be distinct and less
    /// than `nqbits`.
    pub fn check(&self, nqbits: usize) -> CircuitResult<()> {
        let spec = self.spec()?;
        if spec.num_qubits() != self.qubits.len() {
            return Err(QubitCount(
                self.name.clone(), spec.num_qubits(), self.qubits.len()));
        }
        if let Some(&k) = self.qubits.iter().find(|k| **k >= nqbits) {
            return Err(QubitOutOfRange(self.name.clone(), k, nqbits));
        }
        if let Some(&k) = self.qubits.iter().duplicates().next() {
            return Err(DuplicateQubit(self.name.clone(), k));
        }
        if spec.num_params() != self.params.len() {
            return Err(ParamCount(
                self.name.clone(), spec.num_params(), self.params.len()));
        }
        Ok(())
    }
}

impl From<(&str, Vec<usize>)> for GateApp {
    fn from(tup: (&str, Vec<usize>)) -> Self { Self::new(tup.0, tup.1) }
}

impl From<(&str, Vec<usize>, f64)> for GateApp {
    fn from(tup: (&str, Vec<usize>, f64)) -> Self {
        Self::with_params(tup.0, tup.1, vec![tup.2])
    }
}

// shortest round-trip form with a signed, two-digit minimum exponent, e.g.
// `0.5`, `1.0`, `1e-05`, `2.5e+16`, `nan`, `-inf`
fn fmt_float(x: f64) -> String {
    if x.is_nan() { return "nan".to_string(); }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let repr = format!("{:?}", x);
    match repr.split_once('e') {
        Some((mant, exp)) => {
            let (sign, digits) =
                exp.strip_prefix('-')
                .map(|d| ('-', d))
                .unwrap_or(('+', exp));
            format!("{}e{}{:0>2}", mant, sign, digits)
        },
        None => repr,
    }
}

impl fmt::Display for GateApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "('{}', [{}]", self.name, self.qubits.iter().join(", "))?;
        for p in self.params.iter() {
            write!(f, ", {}", fmt_float(*p))?;
        }
        write!(f, ")")
    }
}

/// An ordered sequence of [`GateApp`]s on a fixed number of qubits.
///
/// Gates are held in execution order and can only be appended.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Circuit {
    nqbits: usize,
    gates: Vec<GateApp>,
}

impl Circuit {
    /// Create a new circuit from an initial list of gates, stored as-is.
    pub fn new(nqbits: usize, gates: Vec<GateApp>) -> Self {
        Self { nqbits, gates }
    }

    /// Create a new circuit with no gates.
    pub fn empty(nqbits: usize) -> Self { Self::new(nqbits, Vec::new()) }

    /// Return the number of qubits.
    pub fn nqbits(&self) -> usize { self.nqbits }

    /// Return the held gates in execution order.
    pub fn gates(&self) -> &[GateApp] { &self.gates }

    /// Return the number of gates.
    pub fn len(&self) -> usize { self.gates.len() }

    /// Return `true` if there are no gates.
    pub fn is_empty(&self) -> bool { self.gates.is_empty() }

    /// Iterate over the gates in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, GateApp> { self.gates.iter() }

    /// Append a gate to the end of the circuit without any checks.
    pub fn add(&mut self, gate: GateApp) { self.gates.push(gate); }

    /// Like [`add`][Self::add], but first [check][GateApp::check] the gate
    /// against the registry and this circuit's qubit count. Nothing is added
    /// on failure.
    pub fn add_checked(&mut self, gate: GateApp) -> CircuitResult<()> {
        gate.check(self.nqbits)?;
        self.gates.push(gate);
        Ok(())
    }

    /// [Check][GateApp::check] every gate, returning the first failure along
    /// with its position.
    pub fn validate(&self) -> CircuitResult<()> {
        self.gates.iter().enumerate()
            .try_for_each(|(k, gate)| {
                gate.check(self.nqbits)
                    .map_err(|err| {
                        debug!(index = k, gate = %gate, "invalid gate: {err}");
                        AtGate(k, Box::new(err))
                    })
            })
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a GateApp;
    type IntoIter = std::slice::Iter<'a, GateApp>;

    fn into_iter(self) -> Self::IntoIter { self.gates.iter() }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.gates.iter().try_for_each(|gate| writeln!(f, "{}", gate))
    }
}
