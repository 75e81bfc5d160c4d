use clap::Parser;
use nowplaying::{Cli, run, terminal};
use nowplaying_core::{Category, ColorTheme};

fn main() {
    // Reset SIGPIPE to default behavior to prevent panic on broken pipe
    // (e.g., when piping to `head` or `less` that exits early)
    #[cfg(unix)]
    reset_sigpipe();

    let cli = Cli::parse();
    let theme = ColorTheme::new(terminal::stderr_color_enabled(cli.color));

    if let Err(e) = run(cli) {
        let message = format!("Error: {:#}", e);
        eprintln!("{}", theme.style(&message, Category::Error));
        std::process::exit(1);
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
