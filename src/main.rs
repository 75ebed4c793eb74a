use orbfield::Simulation;

fn main() {
    if let Err(e) = Simulation::new().run() {
        eprintln!("orbfield: {}", e);
        std::process::exit(1);
    }
}
