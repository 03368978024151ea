use android_kotlin_fix::commands;
use clap::{Parser, Subcommand};
use colored::Colorize;

#[derive(Parser)]
#[command(name = "android-kotlin-fix")]
#[command(about = "Pin kotlin-stdlib in a Cordova Android build.gradle", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Project root to patch when no subcommand is given (hook runner form)
    root: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Inject the Kotlin resolution strategy into platforms/android/app/build.gradle
    Patch {
        /// Project root (defaults to current directory, as hook runners invoke it)
        #[arg(default_value = ".")]
        root: String,
        /// Show the change as a diff without writing it
        #[arg(long)]
        dry_run: bool,
    },
    /// Check whether the Kotlin resolution strategy is present, without writing
    Check {
        /// Project root (defaults to current directory)
        #[arg(default_value = ".")]
        root: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Patch { root, dry_run }) => commands::patch::execute(&root, dry_run),
        Some(Commands::Check { root }) => commands::check::execute(&root),
        None => commands::patch::execute(cli.root.as_deref().unwrap_or("."), false),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
