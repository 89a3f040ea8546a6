use clap::Parser;
use triage::cli::{
    agents, assign, handle_completions, handle_config_init, tags, tickets, Cli, Commands,
    ConfigCommands,
};
use triage::config::TriageConfig;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Assign(args) => {
            let config = TriageConfig::load(Some(&args.config))
                .unwrap_or_else(|_| TriageConfig::default())
                .with_env_overrides();

            if let Err(e) = triage::logging::init_tracing(&config.logging) {
                eprintln!("Warning: Failed to initialize logging: {}", e);
            }

            match assign::run_assign(&args, &config) {
                Ok(output) => {
                    println!("{}", output);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
        Commands::Agents(args) => match agents::handle_agents(&args) {
            Ok(output) => {
                println!("{}", output);
                Ok(())
            }
            Err(e) => Err(e),
        },
        Commands::Tickets(args) => match tickets::handle_tickets(&args) {
            Ok(output) => {
                println!("{}", output);
                Ok(())
            }
            Err(e) => Err(e),
        },
        Commands::Tags(args) => {
            println!("{}", tags::handle_tags(&args));
            Ok(())
        }
        Commands::Config(ConfigCommands::Init(args)) => handle_config_init(&args),
        Commands::Completions(args) => {
            handle_completions(&args);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
