use clap::Parser;
use std::io::{IsTerminal, Read, Write};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, oneshot};

use portfolio_shell::content::{ContentSource, FileContentSource, SiteContent};
use portfolio_shell::interpreter::ShellOptions;
use portfolio_shell::style::{paint, strip_ansi, BOLD, DIM, GREEN, RED};
use portfolio_shell::terminal::{
    InputEvent, LineKind, RenderInstruction, RenderedLine, TerminalSession,
};

#[derive(Parser)]
#[command(name = "portfolio-shell")]
#[command(about = "A Unix-like shell over an in-memory portfolio filesystem")]
#[command(version)]
struct Cli {
    /// Execute the commands from command line argument
    #[arg(short = 'c')]
    script: Option<String>,

    /// Site content file (.json, .yaml, .yml or .toml); built-in sample if omitted
    #[arg(long = "content")]
    content: Option<String>,

    /// Starting directory within the portfolio filesystem
    #[arg(long = "cwd")]
    cwd: Option<String>,

    /// Output the rendered transcript as JSON
    #[arg(long = "json")]
    json: bool,

    /// Skip the banner and message of the day
    #[arg(long = "no-banner")]
    no_banner: bool,

    /// Script file to execute, one command line per line
    #[arg()]
    script_file: Option<String>,
}

enum Request {
    Start(oneshot::Sender<Vec<RenderInstruction>>),
    Prompt(oneshot::Sender<Vec<RenderInstruction>>),
    Event(InputEvent, oneshot::Sender<Vec<RenderInstruction>>),
}

/// Handle to the task that owns the session; all access goes through it.
struct SessionHandle {
    tx: mpsc::Sender<Request>,
}

impl SessionHandle {
    fn spawn(mut session: TerminalSession) -> Self {
        let (tx, mut rx) = mpsc::channel::<Request>(64);
        tokio::spawn(async move {
            while let Some(request) = rx.recv().await {
                let (reply, instructions) = match request {
                    Request::Start(reply) => (reply, session.start()),
                    Request::Prompt(reply) => (reply, vec![session.render_prompt()]),
                    Request::Event(event, reply) => (reply, session.handle_input_event(event)),
                };
                // The requester may have gone away; nothing to do then.
                let _ = reply.send(instructions);
            }
        });
        Self { tx }
    }

    async fn request<F>(&self, build: F) -> Vec<RenderInstruction>
    where
        F: FnOnce(oneshot::Sender<Vec<RenderInstruction>>) -> Request,
    {
        let (reply_tx, reply_rx) = oneshot::channel();
        if self.tx.send(build(reply_tx)).await.is_err() {
            return Vec::new();
        }
        reply_rx.await.unwrap_or_default()
    }

    async fn start(&self) -> Vec<RenderInstruction> {
        self.request(Request::Start).await
    }

    async fn prompt(&self) -> Vec<RenderInstruction> {
        self.request(Request::Prompt).await
    }

    /// Type `line` and press Enter; returns what the Enter produced.
    async fn submit_line(&self, line: &str) -> Vec<RenderInstruction> {
        let mut last = Vec::new();
        for event in InputEvent::line(line) {
            last = self.request(|reply| Request::Event(event, reply)).await;
        }
        last
    }
}

struct Renderer {
    ansi: bool,
    interactive: bool,
    json: bool,
    transcript: Vec<RenderedLine>,
}

impl Renderer {
    fn style_line(&self, line: &RenderedLine) -> String {
        if !self.ansi {
            return strip_ansi(&line.text);
        }
        match line.kind {
            LineKind::Error => paint(RED, &line.text),
            LineKind::Emphasized => paint(&format!("{}{}", GREEN, BOLD), &line.text),
            LineKind::Muted => paint(DIM, &line.text),
            LineKind::Input | LineKind::Output => line.text.clone(),
        }
    }

    /// Apply instructions; returns false once the session has exited.
    fn render(&mut self, instructions: &[RenderInstruction]) -> bool {
        let mut stdout = std::io::stdout().lock();
        for instruction in instructions {
            match instruction {
                RenderInstruction::AppendLines { lines } => {
                    for line in lines {
                        if self.json {
                            self.transcript.push(line.plain());
                        } else if !(self.interactive && line.kind == LineKind::Input) {
                            let _ = writeln!(stdout, "{}", self.style_line(line));
                        }
                    }
                }
                RenderInstruction::ClearScreen => {
                    if self.interactive && self.ansi {
                        let _ = write!(stdout, "\x1B[2J\x1B[H");
                    }
                }
                RenderInstruction::UpdatePrompt { prompt, .. } => {
                    if self.interactive {
                        let shown = if self.ansi { paint(BOLD, prompt) } else { prompt.clone() };
                        let _ = write!(stdout, "{}", shown);
                    }
                }
                RenderInstruction::Exit => return false,
            }
        }
        let _ = stdout.flush();
        true
    }
}

async fn load_content(path: Option<&str>) -> SiteContent {
    match path {
        Some(path) => match FileContentSource::new(path).load().await {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => SiteContent::sample(),
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let content = load_content(cli.content.as_deref()).await;
    let session = TerminalSession::new(
        &content,
        ShellOptions { cwd: cli.cwd.clone(), env: None },
    );
    let handle = SessionHandle::spawn(session);

    // Determine command source: -c, file, piped stdin, or an interactive terminal
    let script = if let Some(s) = cli.script.clone() {
        Some(s)
    } else if let Some(ref file) = cli.script_file {
        match std::fs::read_to_string(file) {
            Ok(content) => Some(content),
            Err(e) => {
                eprintln!("Error: Cannot read script file: {}: {}", file, e);
                std::process::exit(1);
            }
        }
    } else if !std::io::stdin().is_terminal() {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).unwrap_or_default();
        Some(buf)
    } else {
        None
    };

    let mut renderer = Renderer {
        ansi: std::io::stdout().is_terminal() && !cli.json,
        interactive: script.is_none(),
        json: cli.json,
        transcript: Vec::new(),
    };

    let opening = if cli.no_banner { handle.prompt().await } else { handle.start().await };
    renderer.render(&opening);

    match script {
        Some(script) => {
            for line in script.lines() {
                if !renderer.render(&handle.submit_line(line).await) {
                    break;
                }
            }
        }
        None => {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        if !renderer.render(&handle.submit_line(&line).await) {
                            break;
                        }
                    }
                    // EOF (Ctrl+D) or a read error ends the session.
                    Ok(None) | Err(_) => {
                        println!();
                        break;
                    }
                }
            }
        }
    }

    if cli.json {
        match serde_json::to_string_pretty(&renderer.transcript) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
