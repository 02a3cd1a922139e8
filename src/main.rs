//! Markwright - markdown editing helpers for tables, tasks, and code blocks.
//!
//! # Usage
//!
//! ```bash
//! markwright notes.md add-row --line 12 --col 4
//! markwright notes.md toggle-task --line 3 --write
//! markwright notes.md code-block --line 7 --lang rust
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use markwright::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};
use markwright::editor::{Cursor, EditorContext, MemoryEditor, apply_edit};
use markwright::table::{Justify, TableAction, transform};
use markwright::{fence, tasks};

/// One editing action applied at the cursor.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    /// Insert a blank table column at the cursor
    AddColumn,
    /// Insert a blank table row below the cursor
    AddRow,
    /// Exchange the cursor's table column with a neighbor
    SwapColumn,
    /// Move the cursor's table row down
    SwapRow,
    /// Flip a checklist task between checked and unchecked
    ToggleTask,
    /// Turn the cursor line into an unchecked task
    MakeTask,
    /// Insert an empty fenced code block below the cursor
    CodeBlock,
}

/// Markdown editing helpers for tables, tasks, and code blocks
#[derive(Parser, Debug)]
#[command(name = "markwright", version, about, long_about = None)]
struct Cli {
    /// Markdown file to edit
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Action to apply at the cursor
    #[arg(value_enum)]
    action: Action,

    /// Cursor line (1-based)
    #[arg(short, long, default_value_t = 1)]
    line: usize,

    /// Cursor column (1-based)
    #[arg(short, long, default_value_t = 1)]
    col: usize,

    /// Language tag for inserted code blocks
    #[arg(long)]
    lang: Option<String>,

    /// Rewrite the file in place instead of printing to stdout
    #[arg(short, long)]
    write: bool,

    /// Table column justification
    #[arg(long, value_enum)]
    justify: Option<Justify>,

    /// Enable pipeline diagnostics
    #[arg(long)]
    debug: bool,

    /// Save the given flags as defaults and continue
    #[arg(long)]
    save: bool,

    /// Clear saved defaults and continue
    #[arg(long)]
    clear: bool,
}

impl Cli {
    fn flags(&self) -> ConfigFlags {
        ConfigFlags {
            debug: self.debug,
            write: self.write,
            justify: self.justify,
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);
    let config = effective.editor_config();

    if !cli.file.exists() {
        anyhow::bail!("File not found: {}", cli.file.display());
    }
    let text = fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;

    let mut editor = MemoryEditor::from_text(&text);
    editor.set_cursor(Cursor::at(
        cli.line.saturating_sub(1),
        cli.col.saturating_sub(1),
    ));
    let cursor = editor.cursor();
    let lines = editor.lines();

    let edit = match cli.action {
        Action::AddColumn => Some(transform(&lines, cursor, TableAction::AddColumn, &config)?),
        Action::AddRow => Some(transform(&lines, cursor, TableAction::AddRow, &config)?),
        Action::SwapColumn => Some(transform(&lines, cursor, TableAction::SwapColumn, &config)?),
        Action::SwapRow => Some(transform(&lines, cursor, TableAction::SwapRow, &config)?),
        Action::ToggleTask => tasks::toggle_at(&lines, cursor),
        Action::MakeTask => tasks::create_at(&lines, cursor),
        Action::CodeBlock => Some(fence::insert_fence(cursor, cli.lang.as_deref())),
    };

    if let Some(edit) = &edit {
        apply_edit(&mut editor, edit);
    } else {
        eprintln!("nothing to do on line {}", cli.line);
    }

    if effective.write {
        fs::write(&cli.file, editor.text())
            .with_context(|| format!("Failed to write {}", cli.file.display()))?;
    } else {
        print!("{}", editor.text());
    }
    Ok(())
}
