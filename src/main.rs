// src/main.rs

use clap::Parser;

use court_scene::cli::Args;
use court_scene::court_lib::CourtGeometryGenerator;

#[tokio::main]
async fn main() {
    court_scene::init_logging();
    let args = Args::parse();
    let config = args.court_config();

    if args.print_scene {
        match CourtGeometryGenerator::try_generate_court(&config) {
            Ok(scene) => {
                for shape in &scene {
                    println!("{}", shape);
                }
            }
            Err(err) => {
                log::error!("{}", err);
                std::process::exit(2);
            }
        }
        return;
    }

    if let Err(err) = court_scene::run(config).await {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
