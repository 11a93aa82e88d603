use clap::Parser;
use sigil::{Command, LineReader, ScriptedReader, Shell, Status};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

mod completer;

const PROMPT: &str = "[Sigil]$ ";
const HISTORY_FILE: &str = ".sigil_history";
const MAX_HISTORY: usize = 1000;

/// sigil - Interactive shell for local filesystem management
#[derive(Parser, Debug)]
#[command(name = "sigil", version, about)]
struct Args {
    /// Execute a single command line and exit; words after the command token
    /// answer its prompts in order (e.g. -c "mkfolder demo")
    #[arg(short = 'c')]
    command: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut shell = Shell::new()?;

    if let Some(line) = args.command {
        return run_one_shot(&mut shell, &line);
    }

    run_repl(&mut shell)
}

fn run_one_shot(shell: &mut Shell, line: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut words = line.split_whitespace().map(str::to_string);
    let token = words.next().unwrap_or_default();

    let Some(cmd) = Command::from_token(&token) else {
        eprintln!("sigil: invalid command '{}'", token);
        std::process::exit(1);
    };
    if cmd == Command::Exit {
        return Ok(());
    }

    let mut reader = ScriptedReader::new(words);
    match shell.execute(cmd, &mut reader) {
        Ok(msg) => {
            let msg = msg.trim_end_matches('\n');
            if !msg.is_empty() {
                println!("{}", msg);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("sigil: {}", e);
            std::process::exit(1);
        }
    }
}

/// Adapt the live rustyline editor into the dispatcher's line source, so
/// per-command prompts get the same editing and history behavior as the
/// command prompt itself.
struct ReplReader<'a> {
    rl: &'a mut rustyline::Editor<completer::SigilHelper, rustyline::history::DefaultHistory>,
}

impl LineReader for ReplReader<'_> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        use rustyline::error::ReadlineError;
        match self.rl.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(io::Error::new(io::ErrorKind::Other, e.to_string())),
        }
    }
}

fn run_repl(shell: &mut Shell) -> Result<(), Box<dyn std::error::Error>> {
    use rustyline::error::ReadlineError;
    use rustyline::{CompletionType, Config, Editor};

    let rl_config = Config::builder()
        .completion_type(CompletionType::List)
        .max_history_size(MAX_HISTORY)?
        .history_ignore_dups(true)?
        .history_ignore_space(true)
        .build();

    let cwd = Arc::new(RwLock::new(shell.cwd.clone()));
    let helper = completer::SigilHelper::new(cwd.clone());

    let mut rl = Editor::with_config(rl_config)?;
    rl.set_helper(Some(helper));

    let history_path = history_path();
    let _ = rl.load_history(&history_path);

    print_banner();
    println!("Type 'help' to see the available commands, 'exit' to quit.");
    println!();

    let mut stdout = io::stdout();

    loop {
        {
            let mut cwd_guard = cwd.write().unwrap();
            *cwd_guard = shell.cwd.clone();
        }

        match rl.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());

                let mut reader = ReplReader { rl: &mut rl };
                match shell.dispatch(&line, &mut reader, &mut stdout) {
                    Ok(Status::Running) => {}
                    Ok(Status::Terminated) => break,
                    Err(e) => {
                        eprintln!("sigil: {}", e);
                        break;
                    }
                }
                stdout.flush()?;
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("exit");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    let _ = rl.save_history(&history_path);

    Ok(())
}

fn history_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(HISTORY_FILE)
}

fn print_banner() {
    println!("           __");
    println!("   __,-~~/~    `---.");
    println!(" _/_,---(      ,    )");
    println!("/        \\    /    /");
    println!("~         `\\ /'   /");
    println!("            |    |");
    println!("            |    |");
    println!("            |    |");
    println!("            |    |");
    println!("            |    |");
    println!("           /     |");
    println!("          /      /");
    println!("         /      /");
    println!("        /     ,'  Sigil v{}", env!("CARGO_PKG_VERSION"));
    println!("       /     /");
    println!("      /    ,'");
    println!("     (    (");
    println!("      `.___'");
    println!();
}
