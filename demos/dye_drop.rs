// demos/dye_drop.rs

use rs_fluids::solver::{FluidSimulation, SolverConfig};
use rs_fluids::utils::FluidError;

const SHADES: &[u8] = b" .:-=+*#%@";

fn render(sim: &FluidSimulation, n: usize) {
    let density = sim.density();
    let width = n + 2;
    let mut frame = String::with_capacity(width * (width + 1));
    for y in 0..width {
        for x in 0..width {
            let value = density[x + width * y];
            let shade = ((value * (SHADES.len() - 1) as f64).round() as usize).min(SHADES.len() - 1);
            frame.push(SHADES[shade] as char);
        }
        frame.push('\n');
    }
    println!("{}", frame);
}

fn main() -> Result<(), FluidError> {
    env_logger::init();

    let n = 32;
    let config = SolverConfig::new(n, 0.0002, 1.0 / 60.0)?;
    let mut sim = FluidSimulation::new(config)?;

    let center = sim.ix(n / 2, n / 2);
    for frame in 0..240 {
        // Keep feeding dye at the center and stir it up and to the right.
        sim.add_density(center, 80.0)?;
        sim.add_velocity(center, 40.0, -90.0)?;
        sim.step();

        if frame % 60 == 0 {
            println!("frame {}", frame);
            render(&sim, n);
        }
    }

    let total: f64 = sim.density().iter().sum();
    println!("total dye after 240 frames: {:.3}", total);
    Ok(())
}
