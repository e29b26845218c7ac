use clap::Parser;
use sticky_notes::cli::{
    handle_add, handle_delete, handle_edit, handle_init, handle_list, handle_path, Cli, Commands,
};
use sticky_notes::config::{init_data_dir, resolve_data_dir};
use sticky_notes::telemetry;

fn main() {
    let cli = Cli::parse();
    telemetry::init();

    let dir = match cli.command {
        Commands::Init => init_data_dir(cli.dir),
        _ => resolve_data_dir(cli.dir),
    };

    let result = match cli.command {
        Commands::Init => handle_init(&dir),
        Commands::List { json } => handle_list(&dir, json),
        Commands::Add { json } => handle_add(&dir, json),
        Commands::Edit {
            id,
            content,
            stdin,
            json,
        } => handle_edit(&dir, id, content, stdin, json),
        Commands::Delete { id, force } => handle_delete(&dir, id, force),
        Commands::Path => handle_path(&dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
