use std::process;

use concordancia::{json, Config, Engine};

fn main() {
    env_logger::init();

    let config = match Config::from_args(std::env::args().collect()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            Config::print_help();
            process::exit(1);
        }
    };

    if config.show_help {
        Config::print_help();
        return;
    }

    let engine = match Engine::new(&config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error inicializando el motor: {}", e);
            process::exit(1);
        }
    };

    let Some(ref template) = config.template else {
        eprintln!("Error: No se proporcionó ninguna plantilla.");
        eprintln!();
        Config::print_help();
        process::exit(1);
    };

    let output = if config.export_json {
        engine
            .render_json(template)
            .and_then(|value| json::to_string(&value, false))
    } else {
        engine.render(template)
    };

    match output {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
