mod cli_options;

use log::{error, info};

use scene::{Scene, Screen};
use scene_parser::Parser;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let options = match cli_options::parse_args(args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}\nusage: {}", message, cli_options::CliOptions::message());
            std::process::exit(2);
        }
    };
    if options.show_help {
        println!("usage: {}", cli_options::CliOptions::message());
        return;
    }
    let scene_file = match options.scene_file {
        Some(file) => file,
        None => {
            eprintln!("No scene file given\nusage: {}", cli_options::CliOptions::message());
            std::process::exit(2);
        }
    };

    let mut parser = Parser::new();
    for (name, value) in options.constants.iter() {
        if let Err(e) = parser.set_constant(name, value) {
            error!("--define {}={}: {}", name, value, e);
            std::process::exit(2);
        }
    }

    let mut scene = Scene::new();
    if let Some((width, height)) = options.screen {
        scene.camera = scene.camera.with_screen(Screen {
            width,
            height,
            ..Screen::default()
        });
    }

    match parser.parse_into(&scene_file, &mut scene) {
        Ok(()) => {
            info!("{} parsed", scene_file);
            print!("{}", scene);
        }
        Err(e) => {
            eprintln!("{}: {}", scene_file, e);
            std::process::exit(1);
        }
    }
}
