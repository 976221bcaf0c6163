// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use crate::application::{
    FolderManager, FolderRepository, NoteComposer, NoteFilter, NoteRepository, Popup, RecentNotes,
};
use crate::cli::args::{Args, Command, FolderCommand, NoteCommand};
use crate::cli::prompt::{Confirm, StdinConfirm};
use crate::domain::{CreateFolder, CreateNote, DomainError, UpdateFolder, UpdateNote};
use crate::infrastructure::{Config, FileStore, JsonRepository};
use crate::ports::{PdfExporter, TerminalPresenter};
use anyhow::Result;
use std::io::{self, Write};
use std::time::Instant;
use tracing::{debug, info, warn};

pub fn run(args: Args) -> Result<()> {
    let stdout = io::stdout();
    run_with(args, &mut StdinConfirm, &mut stdout.lock())
}

/// Execute one command against the store, asking `confirm` before
/// confirmation-gated deletes and writing user output to `out`.
pub fn run_with(args: Args, confirm: &mut dyn Confirm, out: &mut dyn Write) -> Result<()> {
    debug!(?args, "Starting notecase with arguments");

    // Initialize infrastructure
    let config = Config::discover(args.config.as_deref())?;
    let data_dir = config.data_dir(args.data_dir.as_deref())?;
    info!(?data_dir, "Using data directory");
    let repository = JsonRepository::new(FileStore::open(&data_dir)?);
    let popup = Popup::new(config.dismiss_after());

    // Initialize presentation
    let presenter = TerminalPresenter::new();

    match args.command {
        Command::Folder(command) => {
            let manager = FolderManager::new(repository).with_popup(popup);
            run_folder(command, manager, &presenter, confirm, out)
        }
        Command::Note(command) => {
            let ctx = NoteContext {
                config: &config,
                presenter: &presenter,
                popup,
            };
            run_note(command, repository, ctx, confirm, out)
        }
    }
}

struct NoteContext<'a> {
    config: &'a Config,
    presenter: &'a TerminalPresenter,
    popup: Popup,
}

fn report(popup: &Popup, out: &mut dyn Write) -> Result<()> {
    if let Some(message) = popup.message() {
        writeln!(out, "{message}")?;
    }
    Ok(())
}

fn run_folder<R: FolderRepository>(
    command: FolderCommand,
    mut manager: FolderManager<R>,
    presenter: &TerminalPresenter,
    confirm: &mut dyn Confirm,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        FolderCommand::Create { name, description } => {
            match manager.create(CreateFolder::new(name, description), Instant::now())? {
                Some(folder) => {
                    report(manager.popup(), out)?;
                    writeln!(out, "{}", presenter.folder_line(&folder))?;
                }
                None => warn!("Folder name is required, nothing created"),
            }
        }
        FolderCommand::List => {
            let folders = manager.list()?;
            writeln!(out, "{}", presenter.folder_list(&folders))?;
        }
        FolderCommand::Edit {
            id,
            name,
            description,
        } => {
            let request = UpdateFolder {
                id,
                name,
                description,
            };
            let folder = manager
                .update(&request, Instant::now())?
                .ok_or(DomainError::FolderNotFound(id))?;
            report(manager.popup(), out)?;
            writeln!(out, "{}", presenter.folder_line(&folder))?;
        }
        FolderCommand::Delete { id, yes } => {
            manager.request_delete(id)?;
            let prompt = manager.popup().message().unwrap_or_default().to_string();
            if yes || confirm.confirm(&prompt)? {
                manager.confirm_delete(Instant::now())?;
                report(manager.popup(), out)?;
            } else {
                manager.cancel_delete();
                writeln!(out, "Cancelled.")?;
            }
        }
    }
    Ok(())
}

fn run_note<R: NoteRepository + FolderRepository>(
    command: NoteCommand,
    repository: R,
    ctx: NoteContext<'_>,
    confirm: &mut dyn Confirm,
    out: &mut dyn Write,
) -> Result<()> {
    let NoteContext {
        config,
        presenter,
        popup,
    } = ctx;

    match command {
        NoteCommand::Create {
            title,
            content,
            folder,
        } => {
            let mut composer = NoteComposer::new(repository).with_popup(popup);
            let request = CreateNote {
                title,
                content,
                folder_id: folder,
            };
            match composer.create(request, Instant::now())? {
                Some(note) => {
                    report(composer.popup(), out)?;
                    writeln!(out, "{}\t{}", note.id, note.title)?;
                }
                None => warn!("Title and content are required, nothing created"),
            }
        }
        NoteCommand::List { search, folder } => {
            let mut recent = RecentNotes::new(repository);
            let filter = NoteFilter {
                search,
                folder_id: folder,
            };
            let views = recent.search(&filter)?;
            writeln!(out, "{}", presenter.note_list(&views))?;
        }
        NoteCommand::Show { id, json } => {
            let view = RecentNotes::new(repository).show(id)?;
            if json {
                writeln!(out, "{}", presenter.note_json(&view)?)?;
            } else {
                writeln!(out, "{}", presenter.note_detail(&view))?;
            }
        }
        NoteCommand::Edit {
            id,
            title,
            content,
            folder,
            no_folder,
        } => {
            let mut recent = RecentNotes::new(repository);
            let folder_id = match (folder, no_folder) {
                (_, true) => Some(None),
                (Some(folder_id), false) => Some(Some(folder_id)),
                (None, false) => None,
            };
            let request = UpdateNote {
                id,
                title,
                content,
                folder_id,
            };
            recent
                .update(&request)?
                .ok_or(DomainError::NoteNotFound(id))?;
            writeln!(out, "{}", presenter.note_summary(&recent.show(id)?))?;
        }
        NoteCommand::Delete { id, yes, force } => {
            let mut recent = RecentNotes::new(repository).with_popup(popup);
            if force {
                if !recent.delete_immediately(id)? {
                    return Err(DomainError::NoteNotFound(id).into());
                }
                writeln!(out, "Deleted note {id}.")?;
                return Ok(());
            }
            recent.request_delete(id)?;
            let prompt = recent.popup().message().unwrap_or_default().to_string();
            if yes || confirm.confirm(&prompt)? {
                recent.confirm_delete(Instant::now())?;
                report(recent.popup(), out)?;
            } else {
                recent.cancel_delete();
                writeln!(out, "Cancelled.")?;
            }
        }
        NoteCommand::Export { id, output } => {
            let view = RecentNotes::new(repository).show(id)?;
            let path = output.unwrap_or_else(|| {
                config
                    .export_dir()
                    .join(PdfExporter::file_name(&view.note.title))
            });
            let written = PdfExporter::new().export(&view, &path)?;
            writeln!(out, "Exported to {}", written.display())?;
        }
    }
    Ok(())
}
