//! The fixed registry of standard gate matrices.
//!
//! Each entry is either a constant unitary ([`GateSpec::Const`]) or a
//! single-parameter rotation ([`GateSpec::Rot`]) producing a 2×2 unitary from
//! an angle in radians. Rotations follow the convention
//!
//! ```text
//! R_P(θ) = cos(θ/2) I – i sin(θ/2) P
//! ```
//!
//! for generator *P* ∈ {*X*, *Y*, *Z*}.
//!
//! ```
//! # use qcirc_tools::gates;
//! let h = gates::lookup("H").unwrap();
//! assert!(h.is_const());
//! assert!(gates::lookup("T").is_err());
//! ```

use ndarray as nd;
use num_complex::Complex64 as C64;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error)]
pub enum GateError {
    #[error("gate registry: no gate named {0:?}")]
    KeyNotFound(String),

    #[error("gate {name:?}: expected {expected} parameter(s), but got {got}")]
    ParamCount { name: String, expected: usize, got: usize },
}
pub type GateResult<T> = Result<T, GateError>;
use GateError::*;

/// Names of every gate in the registry, in definition order.
pub const GATE_NAMES: [&str; 10] =
    ["H", "CNOT", "X", "Y", "Z", "S", "Sdag", "RX", "RY", "RZ"];

/// Axis suffixes of the rotation gates; `"R" + axis` is always a registered
/// name.
pub const ROT_AXES: [&str; 3] = ["X", "Y", "Z"];

/// A registry entry.
#[derive(Clone, Debug)]
pub enum GateSpec {
    /// A fixed 2<sup>*k*</sup> × 2<sup>*k*</sup> unitary on *k* qubits.
    Const(nd::Array2<C64>),
    /// A one-qubit rotation parametrized by an angle in radians.
    Rot(fn(f64) -> nd::Array2<C64>),
}

impl GateSpec {
    /// Return `true` if `self` is `Const`.
    pub fn is_const(&self) -> bool { matches!(self, Self::Const(..)) }

    /// Return `true` if `self` is `Rot`.
    pub fn is_rot(&self) -> bool { matches!(self, Self::Rot(..)) }

    /// Return the number of qubits the gate acts on.
    pub fn num_qubits(&self) -> usize {
        match self {
            Self::Const(mat) => mat.nrows().trailing_zeros() as usize,
            Self::Rot(_) => 1,
        }
    }

    /// Return the number of real parameters the gate takes.
    pub fn num_params(&self) -> usize {
        match self {
            Self::Const(_) => 0,
            Self::Rot(_) => 1,
        }
    }

    /// Evaluate the gate to a matrix.
    ///
    /// Constant gates take no parameters and rotations take exactly one;
    /// anything else gives `None`.
    pub fn eval(&self, params: &[f64]) -> Option<nd::Array2<C64>> {
        match (self, params) {
            (Self::Const(mat), []) => Some(mat.clone()),
            (Self::Rot(f), [theta]) => Some(f(*theta)),
            _ => None,
        }
    }
}

static REGISTRY: Lazy<FxHashMap<&'static str, GateSpec>> = Lazy::new(|| {
    use GateSpec::*;
    let mut reg: FxHashMap<&'static str, GateSpec> = FxHashMap::default();
    reg.insert("H", Const(make_h()));
    reg.insert("CNOT", Const(make_cnot()));
    reg.insert("X", Const(make_x()));
    reg.insert("Y", Const(make_y()));
    reg.insert("Z", Const(make_z()));
    reg.insert("S", Const(make_s()));
    reg.insert("Sdag", Const(make_sdag()));
    reg.insert("RX", Rot(make_rx));
    reg.insert("RY", Rot(make_ry));
    reg.insert("RZ", Rot(make_rz));
    reg
});

/// Look up a gate by name.
pub fn lookup(name: &str) -> GateResult<&'static GateSpec> {
    REGISTRY.get(name)
        .ok_or_else(|| {
            trace!(name, "gate lookup miss");
            KeyNotFound(name.to_string())
        })
}

/// Look up a gate by name and evaluate it with `params`.
pub fn matrix(name: &str, params: &[f64]) -> GateResult<nd::Array2<C64>> {
    let spec = lookup(name)?;
    spec.eval(params)
        .ok_or_else(|| ParamCount {
            name: name.to_string(),
            expected: spec.num_params(),
            got: params.len(),
        })
}

/// Return `true` if `name` is registered.
pub fn contains(name: &str) -> bool { REGISTRY.contains_key(name) }

/// Iterate over all registry entries in definition order.
pub fn iter() -> impl Iterator<Item = (&'static str, &'static GateSpec)> {
    GATE_NAMES.into_iter().filter_map(|name| REGISTRY.get(name).map(|g| (name, g)))
}

/// Iterate over the names of all registered gates in definition order.
pub fn names() -> impl Iterator<Item = &'static str> {
    iter().map(|(name, _)| name)
}

/// Iterate over the names of the rotation gates.
pub fn rotation_names() -> impl Iterator<Item = &'static str> {
    iter().filter(|(_, g)| g.is_rot()).map(|(name, _)| name)
}

/// Return `true` if `mat` is square and `mat · mat† = I` element-wise to
/// within `tol`.
pub fn is_unitary(mat: &nd::Array2<C64>, tol: f64) -> bool {
    let (n, m) = mat.dim();
    if n != m { return false; }
    let dag = mat.t().mapv(|z| z.conj());
    let prod = mat.dot(&dag);
    prod.indexed_iter()
        .all(|((i, j), z)| {
            let target = if i == j { C64::from(1.0) } else { C64::from(0.0) };
            (*z - target).norm() < tol
        })
}

/// Make a Hadamard gate.
pub fn make_h() -> nd::Array2<C64> {
    let h = c!(std::f64::consts::FRAC_1_SQRT_2);
    nd::array![
        [h,  h],
        [h, -h],
    ]
}

/// Make a CNOT gate, controlled on the first qubit.
pub fn make_cnot() -> nd::Array2<C64> {
    let (o, l) = (c!(0.0), c!(1.0));
    nd::array![
        [l, o, o, o],
        [o, l, o, o],
        [o, o, o, l],
        [o, o, l, o],
    ]
}

/// Make a Pauli X gate.
pub fn make_x() -> nd::Array2<C64> {
    nd::array![
        [c!(0.0), c!(1.0)],
        [c!(1.0), c!(0.0)],
    ]
}

/// Make a Pauli Y gate.
pub fn make_y() -> nd::Array2<C64> {
    nd::array![
        [c!(0.0),   c!(i -1.0)],
        [c!(i 1.0), c!(0.0)   ],
    ]
}

/// Make a Pauli Z gate.
pub fn make_z() -> nd::Array2<C64> {
    nd::array![
        [c!(1.0), c!(0.0) ],
        [c!(0.0), c!(-1.0)],
    ]
}

/// Make an S gate.
pub fn make_s() -> nd::Array2<C64> {
    nd::array![
        [c!(1.0), c!(0.0)  ],
        [c!(0.0), c!(i 1.0)],
    ]
}

/// Make an S<sup>†</sup> gate.
pub fn make_sdag() -> nd::Array2<C64> {
    nd::array![
        [c!(1.0), c!(0.0)   ],
        [c!(0.0), c!(i -1.0)],
    ]
}

// cos(θ/2) I – i sin(θ/2) P
fn make_rot(theta: f64, generator: nd::Array2<C64>) -> nd::Array2<C64> {
    let (s, c) = (theta / 2.0).sin_cos();
    let id: nd::Array2<C64> = nd::Array2::eye(2);
    id.mapv(|z| z * c) - generator.mapv(|p| c!(i s) * p)
}

/// Make an X-rotation gate.
pub fn make_rx(theta: f64) -> nd::Array2<C64> { make_rot(theta, make_x()) }

/// Make a Y-rotation gate.
pub fn make_ry(theta: f64) -> nd::Array2<C64> { make_rot(theta, make_y()) }

/// Make a Z-rotation gate.
pub fn make_rz(theta: f64) -> nd::Array2<C64> { make_rot(theta, make_z()) }
