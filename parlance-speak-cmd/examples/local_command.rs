use clap::Parser;
use parlance::Speaker;
use parlance_speak_cmd::LocalCommand;

#[derive(Debug, Parser)]
struct Args {
    message: String,
    /// Program to run instead of the platform default.
    #[arg(long)]
    program: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), parlance::Error> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let speaker = match args.program {
        Some(program) => LocalCommand::with_program(program),
        None => LocalCommand::default(),
    };
    let wait = speaker.speak(&args.message)?;
    wait.await
}
