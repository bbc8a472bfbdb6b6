use std::{env, process::ExitCode};

use log::{error, info};

use layer_stack::config::AppConfig;
use layer_stack::{DrawingRenderer, LogSink, NetworkError, RenderFormat, TextRenderer, Visualizer};

// Usage: layer-stack [CONFIG.json]
fn main() -> ExitCode {
    let config = match env::args().nth(1) {
        Some(path) => match AppConfig::load_json(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("layer-stack: {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => AppConfig::default(),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log.level))
        .init();

    match run(&config) {
        Ok(rendered) => {
            print!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            match e.downcast_ref::<NetworkError>() {
                Some(network_error) => {
                    eprintln!("layer-stack: {:?}: {network_error}", network_error.kind())
                }
                None => eprintln!("layer-stack: {e}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig) -> Result<String, Box<dyn std::error::Error>> {
    let spec = config.network_spec();
    info!("modeling network `{}` ({} declared layers)", spec.name, spec.layers.len());

    let network = spec.build(config.rule, &LogSink)?;

    let rendered = match config.render.format {
        RenderFormat::Text => {
            let text = Visualizer::new(TextRenderer, config.render.clone()).render(&network)?;
            format!("{}\n{text}", spec.name)
        }
        RenderFormat::Drawing => {
            let drawing = Visualizer::new(DrawingRenderer, config.render.clone()).render(&network)?;
            format!("{}\n", drawing.to_json()?)
        }
    };
    Ok(rendered)
}
