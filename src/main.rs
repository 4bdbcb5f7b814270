use clap::Parser;
use jekyll_helper::application::{ConfigService, NewEntryService, PublishDraftService};
use jekyll_helper::cli::{format_config, Cli, Commands};
use jekyll_helper::domain::EntryKind;
use jekyll_helper::error::JekyllError;
use jekyll_helper::infrastructure::workspace::absolutize;
use jekyll_helper::infrastructure::{
    Config, EditorSession, FileSystemWorkspace, TerminalPrompter, WalkDirSearch, WorkspaceProvider,
};
use std::path::{Path, PathBuf};

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), JekyllError> {
    match cli.command {
        Commands::NewPost {
            path,
            title,
            no_open,
        } => new_entry(EntryKind::Post, cli.workspaces, &path, title, !no_open),
        Commands::NewDraft {
            path,
            title,
            no_open,
        } => new_entry(EntryKind::Draft, cli.workspaces, &path, title, !no_open),
        Commands::Publish { draft } => {
            let draft = absolutize(&draft);
            let workspace = FileSystemWorkspace::resolve(cli.workspaces, &draft);
            let editor = editor_for(&workspace, &draft)?;

            let outcome = PublishDraftService::new(&editor).execute(&draft)?;
            println!("{}", outcome.message());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let cwd = std::env::current_dir()?;
            let workspace = FileSystemWorkspace::resolve(cli.workspaces, &cwd);
            let service = ConfigService::new(workspace.primary_root()?);

            if list {
                print!("{}", format_config(&service.list()?));
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: jekyll-helper config [--list | <key> [<value>]]");
                println!("Valid keys: template.path, editor");
            }
            Ok(())
        }
    }
}

fn new_entry(
    kind: EntryKind,
    workspaces: Vec<PathBuf>,
    path: &Path,
    title: Option<String>,
    open: bool,
) -> Result<(), JekyllError> {
    let target = absolutize(path);
    let workspace = FileSystemWorkspace::resolve(workspaces, &target);
    let editor = editor_for(&workspace, &target)?;
    let prompter = TerminalPrompter::stdio();

    let service = NewEntryService::new(&workspace, &WalkDirSearch, &prompter, &editor);
    let created = service.execute(kind, &target, title, open)?;
    println!("{}", created.display());
    Ok(())
}

/// Editor configured for the site containing `path`, or the default one
fn editor_for(workspace: &FileSystemWorkspace, path: &Path) -> Result<EditorSession, JekyllError> {
    let config = match workspace.root_containing(path) {
        Some(root) => Config::load_from_dir(root)?,
        None => Config::default(),
    };
    Ok(EditorSession::new(config.get_editor()))
}
