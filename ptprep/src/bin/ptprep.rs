//! grafts a shuttle transit service onto a baseline MATSim network and
//! writes the three input files the simulation needs: the extended
//! network, the transit schedule, and the transit vehicle fleet.
use clap::Parser;
use ptprep::shuttle::app::ShuttleApp;

fn main() {
    env_logger::init();
    log::info!("starting ptprep at {}", chrono::Local::now().to_rfc3339());
    let args = ShuttleApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
