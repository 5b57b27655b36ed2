//! This package contains minimal tools for describing quantum circuits of
//! qubits in exercises, using the conventional [circuit notation][qcircuits].
//!
//! - [`gates`] holds a fixed registry of standard gate matrices, both constant
//! and rotation-parametrized.
//! - [`circuit`] provides a lightweight, append-only circuit container over a
//! fixed number of qubits.
//! - [`random`] generates random layered circuits for use as test inputs to
//! simulators.
//!
//! Simulation, visualization, and import/export of circuit formats are not
//! provided here.
//!
//! ```
//! use rand::{ SeedableRng, rngs::StdRng };
//! use qcirc_tools::{ circuit::Circuit, random::random_circuit_with };
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let circ: Circuit = random_circuit_with(3, 2, &mut rng);
//! assert!(circ.validate().is_ok());
//! for gate in circ.iter() {
//!     let mat = gate.matrix().unwrap();
//!     assert!(qcirc_tools::gates::is_unitary(&mat, 1e-9));
//! }
//! ```
//!
//! [qcircuits]: https://en.wikipedia.org/wiki/Quantum_circuit

pub extern crate num_complex;
/// Handy macro to create `num_complex::Complex64`s from more natural and
/// succinct syntax.
///
/// ```
/// use std::f64::consts::PI;
/// use num_complex::Complex64;
/// use qcirc_tools::c;
///
/// assert_eq!( c!(i (-1.0)),    Complex64::new(0.0, -1.0)      );
/// assert_eq!( c!(e PI),        Complex64::cis(PI)             );
/// assert_eq!( c!(1.0),         Complex64::new(1.0, 0.0)       );
/// assert_eq!( c!(1.0 + i 1.0), Complex64::new(1.0, 1.0)       );
/// assert_eq!( c!(1.0 - i 1.0), Complex64::new(1.0, -1.0)      );
/// assert_eq!( c!(1.0, 1.0),    Complex64::new(1.0, 1.0)       );
/// assert_eq!( c!(1.0, e PI),   Complex64::from_polar(1.0, PI) );
/// ```
#[macro_export]
macro_rules! c {
    ( i $im:expr )
        => { $crate::num_complex::Complex64::new(0.0, $im) };
    ( e $ph:expr )
        => { $crate::num_complex::Complex64::cis($ph) };
    ( $re:expr )
        => { $crate::num_complex::Complex64::new($re, 0.0) };
    ( $re:literal + i $im:literal )
        => { $crate::num_complex::Complex64::new($re, $im) };
    ( $re:literal - i $im:literal )
        => { $crate::num_complex::Complex64::new($re, -$im) };
    ( $r:expr, e $ph:expr )
        => { $crate::num_complex::Complex64::from_polar($r, $ph) };
    ( $re:expr, $im:expr )
        => { $crate::num_complex::Complex64::new($re, $im) };
}

pub mod gates;
pub mod circuit;
pub mod random;

pub use circuit::{ Circuit, CircuitError, CircuitResult, GateApp };
pub use gates::{ GateError, GateResult, GateSpec };
pub use random::{ random_circuit, random_circuit_with };
