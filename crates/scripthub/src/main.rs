//! `shub` - CLI for scripthub
//!
//! This binary dispatches each verb to the registry and, for `run` and
//! `edit`, to an external process. Errors propagate here and exit the
//! process with a non-zero status.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use clap::Parser;

use scripthub::cli::{
    AddCommand, Cli, Command, EditCommand, ListCommand, PathCommand, PathSpecifier, RemoveCommand,
    RunCommand,
};
use scripthub::{init_logging, launch, Config, Registry, ScriptRecord, SetupOutcome};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;
    let registry = Registry::new(config.registry_path());

    // Execute the command
    match cli.command {
        Command::List(cmd) => handle_list(&registry, &cmd),
        Command::Edit(cmd) => handle_edit(&registry, &config, &cmd),
        Command::Add(cmd) => handle_add(&registry, cmd),
        Command::Remove(cmd) => handle_remove(&registry, &cmd),
        Command::Run(cmd) => handle_run(&registry, &cmd),
        Command::Path(cmd) => handle_path(&registry, &cmd),
        Command::Setup => handle_setup(&registry),
    }
}

fn handle_list(registry: &Registry, cmd: &ListCommand) -> anyhow::Result<()> {
    let records = registry.load_all()?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }
    for record in &records {
        print_record(record);
    }
    Ok(())
}

fn handle_add(registry: &Registry, cmd: AddCommand) -> anyhow::Result<()> {
    let record = ScriptRecord::new(cmd.name, cmd.executable, cmd.editable);
    let stored = registry.append(record)?;

    println!("Added script \"{}\"", stored.name);
    println!("Executable : {}", stored.executable.display());
    println!("Editable   : {}", stored.editable.display());
    Ok(())
}

fn handle_remove(registry: &Registry, cmd: &RemoveCommand) -> anyhow::Result<()> {
    let removed = registry.remove(&cmd.name)?;
    println!("Removed script \"{}\"", removed.name);
    Ok(())
}

fn handle_run(registry: &Registry, cmd: &RunCommand) -> anyhow::Result<()> {
    let record = registry.find(&cmd.name)?;
    launch::run_script(&record)?;
    Ok(())
}

fn handle_edit(registry: &Registry, config: &Config, cmd: &EditCommand) -> anyhow::Result<()> {
    let record = registry.find(&cmd.name)?;
    let editor = launch::choose_editor(&config.editor.fallback);
    launch::edit_file(&editor, &record.editable)?;
    Ok(())
}

fn handle_path(registry: &Registry, cmd: &PathCommand) -> anyhow::Result<()> {
    let record = registry.find(&cmd.name)?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }
    match cmd.specifier {
        Some(PathSpecifier::Executable) => println!("{}", record.executable.display()),
        Some(PathSpecifier::Editable) => println!("{}", record.editable.display()),
        None => {
            println!("Name       : {}", record.name);
            println!("Editable   : {}", record.editable.display());
            println!("Executable : {}", record.executable.display());
        }
    }
    Ok(())
}

fn handle_setup(registry: &Registry) -> anyhow::Result<()> {
    match registry.init()? {
        SetupOutcome::Created => {
            println!("Could not find scripts file. Generating one.");
            println!();
            println!("Generated scripts file at: {}", registry.path().display());
        }
        SetupOutcome::Existing(records) => {
            println!("Scripts file found. No setup needed");
            println!("Here are the scripts in your library: ");
            println!();
            for record in &records {
                print_record(record);
            }
        }
    }
    Ok(())
}

fn print_record(record: &ScriptRecord) {
    println!("Name       : {}", record.name);
    println!("Executable : {}", record.executable.display());
    println!("Editable   : {}", record.editable.display());
    println!("============");
}
