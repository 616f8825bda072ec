//! Interactive REPL mode

use std::io::{self, Write};

use console::style;

use fleet_registry::InMemoryFleetRegistry;

use crate::exec::{self, FleetCommand};

/// Interactive session over one in-memory registry.
///
/// State lives for the duration of the session; there is no persistence
/// between runs.
pub struct InteractiveCli {
    registry: InMemoryFleetRegistry,
    json: bool,
}

impl InteractiveCli {
    pub fn new(json: bool) -> Self {
        Self {
            registry: InMemoryFleetRegistry::new(),
            json,
        }
    }

    /// Run the interactive REPL.
    pub fn run(&mut self) -> anyhow::Result<()> {
        println!("Fleet Interactive Mode");
        println!("Type 'help' for commands, 'quit' to exit");
        println!();

        loop {
            print!("fleet> ");
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                break; // EOF
            }
            let input = input.trim();
            if input.is_empty() {
                continue;
            }

            match self.handle_line(input) {
                Ok(Outcome::Quit) => break,
                Ok(Outcome::Output(text)) => {
                    if !text.is_empty() {
                        println!("{text}");
                    }
                }
                Err(e) => println!("{} {e}", style("error:").red().bold()),
            }
        }

        Ok(())
    }

    fn handle_line(&self, line: &str) -> anyhow::Result<Outcome> {
        let command = exec::parse_line(line)?;
        if command == FleetCommand::Quit {
            return Ok(Outcome::Quit);
        }
        let output = exec::execute(&self.registry, &command, self.json)?;
        Ok(Outcome::Output(output))
    }
}

enum Outcome {
    Output(String),
    Quit,
}
