use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

/// Answers accepted as "yes" at a confirmation prompt.
pub const AFFIRMATIVE_ANSWERS: &[&str] = &["s", "sim", "y", "yes"];

/// Source of operator answers.
pub trait Prompt {
    /// Show `question` and return the trimmed answer. End of input yields "".
    fn ask(&mut self, question: &str) -> Result<String>;

    /// Ask a yes/no question; anything but an affirmative answer is "no".
    fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(question)?;
        Ok(is_affirmative(&answer))
    }
}

/// Case-insensitive check against [`AFFIRMATIVE_ANSWERS`].
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    AFFIRMATIVE_ANSWERS.contains(&answer.as_str())
}

/// Line-oriented prompt over any reader/writer pair.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        self.input.read_line(&mut line).context("Failed to read answer")?;
        Ok(line.trim().to_string())
    }
}
