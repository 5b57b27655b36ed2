use rand::{ SeedableRng, rngs::StdRng };
use tracing_subscriber::EnvFilter;
use qcirc_tools::{ gates, random::random_circuit_with };

const NQBITS: usize = 4;
const NLAYERS: usize = 3;
const SEED: u64 = 10546;

// generate a seeded random circuit, check it against the gate registry, and
// print each gate alongside its matrix
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = StdRng::seed_from_u64(SEED);
    let circ = random_circuit_with(NQBITS, NLAYERS, &mut rng);
    circ.validate()?;
    print!("{}", circ);

    for gate in circ.iter() {
        let mat = gate.matrix()?;
        anyhow::ensure!(
            gates::is_unitary(&mat, 1e-9),
            "non-unitary matrix for {}", gate,
        );
        println!("{}:\n{:.3}", gate, mat);
    }
    Ok(())
}
