use clap::Parser;

use accessipilot::cli::commands::{
    cmd_audit, cmd_camera, cmd_delete, cmd_health, cmd_narrate, cmd_narrations,
};
use accessipilot::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve Gemini settings: CLI > config > defaults
    let endpoint = cli.gemini_endpoint.as_deref();
    let model = cli.gemini_model.as_deref();

    match cli.command {
        Commands::Audit {
            file,
            backend,
            narrate,
            voice,
        } => {
            let ok = cmd_audit(
                &file,
                &backend,
                narrate,
                voice.as_deref(),
                &config,
                endpoint,
                model,
                cli.verbose,
            )?;
            if !ok {
                std::process::exit(1);
            }
        }
        Commands::Camera {
            grab_command,
            backend,
            narrate,
            voice,
        } => {
            let ok = cmd_camera(
                grab_command.as_deref(),
                &backend,
                narrate,
                voice.as_deref(),
                &config,
                endpoint,
                model,
                cli.verbose,
            )?;
            if !ok {
                std::process::exit(1);
            }
        }
        Commands::Narrate { text, voice } => cmd_narrate(&text, voice.as_deref(), &config)?,
        Commands::Narrations => cmd_narrations(&config)?,
        Commands::Delete { id } => cmd_delete(&id, &config)?,
        Commands::Health => cmd_health(&config)?,
    }

    Ok(())
}
