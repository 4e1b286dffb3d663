//! xtask - Build tasks for ignite-sessions
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man pages, COMMANDS.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, Command, CommandFactory, Parser, Subcommand};

use ignite_sessions::cli::Cli;

const BIN: &str = "ignite-sessions";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for ignite-sessions")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man pages
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            // Neither flag means both
            let gen_all = !man && !markdown;

            if gen_all || man {
                generate_man_pages(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

/// Visible subcommands of `cmd`
fn visible_subcommands(cmd: &Command) -> impl Iterator<Item = &Command> {
    cmd.get_subcommands().filter(|c| !c.is_hide_set())
}

/// Arguments worth documenting (everything but the built-in help/version flags)
fn documented_args(cmd: &Command) -> impl Iterator<Item = &Arg> {
    cmd.get_arguments().filter(|a| {
        let id = a.get_id().as_str();
        id != "help" && id != "version"
    })
}

/// `-s, --long` label for an option, `<NAME>` for a positional
fn arg_label(arg: &Arg) -> Option<String> {
    if arg.is_positional() {
        return Some(format!("<{}>", arg.get_id().as_str().to_uppercase()));
    }
    let long = arg.get_long().map(|l| format!("--{}", l));
    let short = arg.get_short().map(|s| format!("-{}", s));
    match (short, long) {
        (Some(s), Some(l)) => Some(format!("{}, {}", s, l)),
        (None, Some(l)) => Some(l),
        (Some(s), None) => Some(s),
        (None, None) => None,
    }
}

fn render_man(cmd: Command, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd).render(&mut buffer)?;
    fs::write(path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}

/// Generate man pages using clap_mangen
fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();
    render_man(cmd.clone(), &man_dir.join(format!("{}.1", BIN)))?;

    for subcommand in visible_subcommands(&cmd) {
        let name = subcommand.get_name();
        render_man(
            subcommand.clone(),
            &man_dir.join(format!("{}-{}.1", BIN, name)),
        )?;

        for nested in visible_subcommands(subcommand) {
            render_man(
                nested.clone(),
                &man_dir.join(format!("{}-{}-{}.1", BIN, name, nested.get_name())),
            )?;
        }
    }

    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

/// Append one command section: about, arguments and long description.
fn push_command_section(markdown: &mut String, heading: &str, cmd: &Command) {
    markdown.push_str(&format!("{} {}\n\n", heading, cmd.get_name()));
    if let Some(about) = cmd.get_about() {
        markdown.push_str(&format!("{}\n\n", about));
    }

    let args: Vec<_> = documented_args(cmd).collect();
    if !args.is_empty() {
        markdown.push_str("| Argument | Description |\n");
        markdown.push_str("|----------|-------------|\n");
        for arg in args {
            let Some(label) = arg_label(arg) else {
                continue;
            };
            let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
            markdown.push_str(&format!("| `{}` | {} |\n", label, help));
        }
        markdown.push('\n');
    }

    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str("```\n");
        markdown.push_str(&format!("{}\n", long_about));
        markdown.push_str("```\n\n");
    }
}

/// Generate COMMANDS.md markdown documentation
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::new();

    markdown.push_str(&format!("# {} Command Reference\n\n", BIN));
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");

    push_command_section(&mut markdown, "##", &cmd);
    markdown.push_str("---\n\n");

    for subcommand in visible_subcommands(&cmd) {
        push_command_section(&mut markdown, &format!("## {}", BIN), subcommand);
        for nested in visible_subcommands(subcommand) {
            push_command_section(
                &mut markdown,
                &format!("### {} {}", BIN, subcommand.get_name()),
                nested,
            );
        }
        markdown.push_str("---\n\n");
    }

    markdown.push_str("\n*Generated by `cargo xtask gen-docs`*\n");

    let output_path = output.join("COMMANDS.md");
    fs::write(&output_path, markdown)?;
    println!("Generated: {}", output_path.display());

    Ok(())
}
