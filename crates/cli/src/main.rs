mod backend;
mod form;
mod table;

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use backend::{BackendClient, DEFAULT_BACKEND_URL};
use form::AdmissionsForm;

#[derive(Parser)]
#[command(name = "admissions-desk")]
#[command(about = "Admissions for Specific Patient")]
struct Cli {
    /// Base URL of the hospital aggregator
    #[arg(long, env = "HOSPITAL_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,
    /// Look up one patient and exit instead of prompting
    #[arg(long)]
    patient: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("admissions_desk=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let backend = BackendClient::new(&cli.backend_url)?;
    let mut form = AdmissionsForm::new();

    match cli.patient {
        Some(patient) => {
            if let Err(notice) = form.submit(&patient, &backend) {
                anyhow::bail!("{}", table::render_notice(&notice));
            }
            println!("{}", table::render_form(form.state()));
        }
        None => run_interactive(&mut form, &backend)?,
    }

    Ok(())
}

/// Prompts for patient ids until `exit`, Ctrl-D or a terminal error.
fn run_interactive(form: &mut AdmissionsForm, backend: &BackendClient) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!("{}", table::TITLE);
    println!("Please enter integer Patient ID e.g. 5 (type 'exit' to quit)\n");
    println!("{}", table::render_form(form.state()));

    loop {
        match rl.readline("Patient ID: ") {
            Ok(line) => {
                if matches!(line.trim(), "exit" | "quit") {
                    break;
                }
                if let Err(e) = rl.add_history_entry(line.as_str()) {
                    tracing::debug!("history entry not recorded: {}", e);
                }

                match form.submit(&line, backend) {
                    Ok(()) => println!("{}", table::render_form(form.state())),
                    Err(notice) => println!("{}\n", table::render_notice(&notice)),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Ctrl-C received. Type 'exit' to quit.");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
