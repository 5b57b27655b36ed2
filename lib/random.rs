//! Random layered circuits for generating test inputs.
//!
//! Each layer applies a random rotation to every qubit, followed by a
//! nearest-neighbor ladder of CNOTs. The ladder starts at qubit 0 on even
//! layers and at qubit 1 on odd layers, giving a brick-wall pattern across
//! layers:
//!
//! ```text
//! layer 0: R R R R   CNOT(0,1) CNOT(1,2) CNOT(2,3)
//! layer 1: R R R R             CNOT(1,2) CNOT(2,3)
//! ```

use std::f64::consts::TAU;
use rand::{ thread_rng, Rng };
use tracing::debug;
use crate::{
    circuit::{ Circuit, GateApp },
    gates::ROT_AXES,
};

/// Generate a random circuit on `nqbits` qubits with `nlayers` layers using
/// the thread-local generator.
///
/// See [`random_circuit_with`] for a reproducible version.
pub fn random_circuit(nqbits: usize, nlayers: usize) -> Circuit {
    random_circuit_with(nqbits, nlayers, &mut thread_rng())
}

/// Generate a random circuit on `nqbits` qubits with `nlayers` layers, drawing
/// from `rng`.
///
/// For every layer, each qubit in increasing order first draws a rotation axis
/// uniformly from *X*, *Y*, *Z* and then an angle uniformly from [0, 2π).
/// All rotation draws for a layer happen before its CNOTs are added, so a
/// seeded `rng` always produces the same circuit.
///
/// Layers too narrow for any CNOT (e.g. a single qubit, or two qubits on an
/// odd layer) simply get none.
///
/// ```
/// # use rand::{ SeedableRng, rngs::StdRng };
/// # use qcirc_tools::random::random_circuit_with;
/// let circ = random_circuit_with(4, 2, &mut StdRng::seed_from_u64(10546));
/// assert_eq!(circ.len(), 4 + 3 + 4 + 2);
/// ```
pub fn random_circuit_with<R>(nqbits: usize, nlayers: usize, rng: &mut R)
    -> Circuit
where R: Rng + ?Sized
{
    let mut circ = Circuit::empty(nqbits);
    for layer in 0..nlayers {
        let offs = layer % 2;
        for qb in 0..nqbits {
            let axis = ROT_AXES[rng.gen_range(0..ROT_AXES.len())];
            let angle = TAU * rng.gen::<f64>();
            circ.add(GateApp::with_params(
                format!("R{}", axis), vec![qb], vec![angle]));
        }
        for qb in 0..nqbits.saturating_sub(1 + offs) {
            circ.add(GateApp::new("CNOT", vec![qb + offs, qb + 1 + offs]));
        }
    }
    debug!(nqbits, nlayers, ngates = circ.len(), "generated random circuit");
    circ
}

#[cfg(test)]
mod test {
    use rand::{ SeedableRng, rngs::StdRng };
    use super::*;

    fn seeded(seed: u64) -> StdRng { StdRng::seed_from_u64(seed) }

    fn expected_len(nqbits: usize, nlayers: usize) -> usize {
        (0..nlayers)
            .map(|l| nqbits + nqbits.saturating_sub(1 + l % 2))
            .sum()
    }

    #[test]
    fn single_qubit() {
        let circ = random_circuit_with(1, 3, &mut seeded(0));
        assert_eq!(circ.len(), 3);
        assert!(circ.iter().all(|g| g.name != "CNOT"));
        assert!(circ.iter().all(|g| g.qubits == vec![0]));
    }

    #[test]
    fn four_qubits_two_layers() {
        let circ = random_circuit_with(4, 2, &mut seeded(1));
        assert_eq!(circ.len(), 13);
        let gates = circ.gates();
        let check_rot = |k: usize, qb: usize| {
            let g = &gates[k];
            assert!(["RX", "RY", "RZ"].contains(&g.name.as_str()));
            assert_eq!(g.qubits, vec![qb]);
            assert_eq!(g.params.len(), 1);
            assert!((0.0..TAU).contains(&g.params[0]));
        };
        let check_cnot = |k: usize, pair: [usize; 2]| {
            let g = &gates[k];
            assert_eq!(g.name, "CNOT");
            assert_eq!(g.qubits, pair.to_vec());
            assert!(g.params.is_empty());
        };
        (0..4).for_each(|qb| check_rot(qb, qb));
        check_cnot(4, [0, 1]);
        check_cnot(5, [1, 2]);
        check_cnot(6, [2, 3]);
        (0..4).for_each(|qb| check_rot(7 + qb, qb));
        check_cnot(11, [1, 2]);
        check_cnot(12, [2, 3]);
    }

    #[test]
    fn two_qubits_odd_layers_empty() {
        let circ = random_circuit_with(2, 4, &mut seeded(2));
        let cnots: Vec<&GateApp> =
            circ.iter().filter(|g| g.name == "CNOT").collect();
        assert_eq!(cnots.len(), 2);
        assert!(cnots.iter().all(|g| g.qubits == vec![0, 1]));
        assert_eq!(circ.len(), 2 + 1 + 2 + 0 + 2 + 1 + 2 + 0);
    }

    #[test]
    fn degenerate_sizes() {
        let circ = random_circuit_with(0, 5, &mut seeded(3));
        assert!(circ.is_empty());
        assert_eq!(circ.nqbits(), 0);
        let circ = random_circuit_with(6, 0, &mut seeded(3));
        assert!(circ.is_empty());
        assert_eq!(circ.nqbits(), 6);
    }

    #[test]
    fn gate_count() {
        for nqbits in 0..8 {
            for nlayers in 0..6 {
                let circ = random_circuit_with(nqbits, nlayers, &mut seeded(4));
                assert_eq!(circ.len(), expected_len(nqbits, nlayers));
            }
        }
    }

    #[test]
    fn deterministic_with_seed() {
        let a = random_circuit_with(5, 4, &mut seeded(12345));
        let b = random_circuit_with(5, 4, &mut seeded(12345));
        assert_eq!(a, b);
        for (ga, gb) in a.iter().zip(&b) {
            assert_eq!(ga.params.iter().map(|p| p.to_bits()).collect::<Vec<_>>(),
                       gb.params.iter().map(|p| p.to_bits()).collect::<Vec<_>>());
        }
        let c = random_circuit_with(5, 4, &mut seeded(54321));
        assert_ne!(a, c);
    }

    #[test]
    fn draw_order() {
        // replay the generator's draws by hand: axis then angle, per qubit
        let (nqbits, nlayers) = (3, 2);
        let circ = random_circuit_with(nqbits, nlayers, &mut seeded(99));
        let mut rng = seeded(99);
        let mut rots = circ.iter().filter(|g| g.name != "CNOT");
        for _ in 0..nlayers {
            for _ in 0..nqbits {
                let axis = ROT_AXES[rng.gen_range(0..ROT_AXES.len())];
                let angle = TAU * rng.gen::<f64>();
                let g = rots.next().unwrap();
                assert_eq!(g.name, format!("R{axis}"));
                assert_eq!(g.params, vec![angle]);
            }
        }
        assert!(rots.next().is_none());
    }

    #[test]
    fn generated_circuits_validate() {
        let mut rng = seeded(7);
        for nqbits in 1..7 {
            let circ = random_circuit_with(nqbits, 5, &mut rng);
            assert!(circ.validate().is_ok());
        }
    }

    #[test]
    fn thread_rng_shape() {
        let circ = random_circuit(4, 2);
        assert_eq!(circ.len(), 13);
        assert_eq!(circ.to_string().lines().count(), 13);
    }
}
