use std::io::{BufRead, Write};

use crate::{algorithms::Strategy, runner::SearchRunner};

const METHOD_PROMPT: &str = "Select search method (BFS, DFS, IDDFS, BEST_FIRST, A_STAR): ";

/// Prompt-driven loop: ask for two locations and a method, print the report,
/// repeat until the user declines or input ends.
pub struct Session<'a, R, W> {
    runner: SearchRunner<'a>,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(runner: SearchRunner<'a>, input: R, output: W) -> Self {
        Self {
            runner,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> eyre::Result<()> {
        loop {
            let Some(from) = self.prompt_location("Enter the start city: ")? else {
                break;
            };
            let Some(to) = self.prompt_location("Enter the end city: ")? else {
                break;
            };
            let Some(method) = self.prompt(METHOD_PROMPT)? else {
                break;
            };

            let Some(strategy) = Strategy::parse(&method) else {
                log::debug!("rejected search method {:?}", method);
                writeln!(self.output, "Invalid search method. Please try again.")?;
                continue;
            };

            let report = self.runner.run(&from, &to, strategy)?;
            writeln!(self.output, "{}", report)?;

            if !self.ask_again()? {
                writeln!(self.output, "SEE YA!")?;
                break;
            }
        }

        Ok(())
    }

    /// `None` once input is exhausted.
    fn prompt(&mut self, message: &str) -> eyre::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            log::debug!("input closed");
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    fn prompt_location(&mut self, message: &str) -> eyre::Result<Option<String>> {
        loop {
            let Some(name) = self.prompt(message)? else {
                return Ok(None);
            };

            if self.runner.graph().contains(&name) {
                return Ok(Some(name));
            }

            writeln!(self.output, "Invalid city name. Please enter a valid city.")?;
        }
    }

    fn ask_again(&mut self) -> eyre::Result<bool> {
        loop {
            let Some(choice) = self.prompt("Do you want to try another search method? (yes/no): ")?
            else {
                return Ok(false);
            };

            match choice.to_lowercase().as_str() {
                "yes" => return Ok(true),
                "no" => return Ok(false),
                _ => writeln!(self.output, "Invalid choice. Please enter 'yes' or 'no'.")?,
            }
        }
    }
}
