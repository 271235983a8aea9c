use crate::error::Result;
use crate::prune::{Choice, ConfirmationPrompt};
use std::io::{self, Write};

/// Interactive confirmation on stdin. Anything other than an explicit
/// yes, including EOF, counts as a dismissal.
pub struct StdinPrompt;

impl ConfirmationPrompt for StdinPrompt {
    fn confirm(&mut self, message: &str) -> Result<Choice> {
        println!("{}", message);
        print!("Proceed? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).ok();
        let input = input.trim().to_lowercase();

        if input == "y" || input == "yes" {
            Ok(Choice::Yes)
        } else {
            Ok(Choice::Cancel)
        }
    }
}
