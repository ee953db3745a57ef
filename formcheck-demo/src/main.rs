mod command;
mod render;

use std::fs::File;
use std::sync::Arc;

use formcheck::events;
use formcheck::prelude::*;
use log::{debug, info};
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};

use command::{Command, HELP};

#[derive(Debug, Error)]
enum DemoError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Scheduler(#[from] formcheck::scheduler::SchedulerError),
}

fn redraw(controller: &FormController<MemorySurface>) {
    let snapshot = controller.surface().snapshot();
    println!("{}\n", render::render(&snapshot, controller.phase()));
    controller.state().clear_dirty();
}

fn apply(controller: &FormController<MemorySurface>, command: Command) {
    let surface = controller.surface();
    match command {
        Command::Set { field, value } => surface.set_value(field, value),
        Command::Focus(field) => controller.on_field_focus(field),
        Command::Blur(field) => {
            controller.on_field_blur(field);
        }
        Command::Terms(accepted) => surface.set_terms(accepted),
        Command::Submit => {
            let result = controller.on_submit();
            if result.is_invalid() {
                println!("Please fix {} error(s).", result.errors().len());
            }
        }
        Command::Show => {}
        Command::Help => println!("{HELP}"),
        Command::Quit => {}
    }
}

async fn run() -> Result<(), DemoError> {
    let surface = Arc::new(MemorySurface::new());
    let (tx, mut rx) = events::channel();
    let controller = FormController::new(
        surface,
        Arc::new(TokioScheduler::new()?),
        FormConfig::default(),
    )
    .with_events(tx);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{HELP}\n");
    redraw(&controller);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => {
                        debug!("Command: {:?}", command);
                        apply(&controller, command);
                        redraw(&controller);
                    }
                    Err(e) => println!("{e}"),
                }
            }
            Some(event) = rx.recv() => match event {
                FormEvent::Submitted(submission) => {
                    println!("Registered {} <{}>", submission.full_name, submission.email);
                }
                FormEvent::Reset => {
                    println!("-- form reset --");
                    redraw(&controller);
                }
            },
        }
    }

    info!("Demo finished");
    Ok(())
}

#[tokio::main]
async fn main() {
    let log_file = File::create("formcheck-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
    }
}
