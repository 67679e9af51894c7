use std::io::{self, BufRead, Write};

use dialoguer::{theme::ColorfulTheme, Input};
use rustyline::{error::ReadlineError, DefaultEditor};

use super::CliError;

/// Source of user answers for the shell.
pub trait Prompter {
    /// Reads a menu selection. `None` means the input is exhausted.
    fn read_choice(&mut self, prompt: &str) -> Result<Option<String>, CliError>;

    /// Reads one free-form field value.
    fn read_field(&mut self, prompt: &str) -> Result<String, CliError>;
}

/// Terminal prompter: line editing for the menu, themed inputs for fields.
pub struct InteractivePrompter {
    editor: DefaultEditor,
    theme: ColorfulTheme,
}

impl InteractivePrompter {
    pub fn new() -> Result<Self, CliError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            theme: ColorfulTheme::default(),
        })
    }
}

impl Prompter for InteractivePrompter {
    fn read_choice(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        match self.editor.readline(&format!("{prompt}: ")) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    self.editor.add_history_entry(trimmed).ok();
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn read_field(&mut self, prompt: &str) -> Result<String, CliError> {
        prompt_text(&self.theme, prompt)
    }
}

/// Prompt the user for free-form text input. Empty answers are accepted.
pub fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, CliError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(CliError::from)
}

/// Line-oriented prompter for scripted sessions: echoes each prompt and reads
/// one answer per line.
pub struct ScriptPrompter {
    reader: Box<dyn BufRead>,
}

impl ScriptPrompter {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    fn next_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}: ")?;
        stdout.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            return Ok(None);
        }
        let value = line.trim_end_matches(['\r', '\n']).to_string();
        writeln!(stdout)?;
        Ok(Some(value))
    }
}

impl Prompter for ScriptPrompter {
    fn read_choice(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        self.next_line(prompt)
    }

    fn read_field(&mut self, prompt: &str) -> Result<String, CliError> {
        self.next_line(prompt)?
            .ok_or_else(|| CliError::Input(format!("no answer for `{prompt}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn script_prompter_reads_lines_in_order() {
        let mut prompter = ScriptPrompter::new(Cursor::new("1\r\nSalary\n\n"));
        assert_eq!(prompter.read_choice("Choose").unwrap().as_deref(), Some("1"));
        assert_eq!(prompter.read_field("Category").unwrap(), "Salary");
        assert_eq!(prompter.read_field("Description").unwrap(), "");
        assert_eq!(prompter.read_choice("Choose").unwrap(), None);
    }

    #[test]
    fn script_prompter_fails_when_field_input_runs_out() {
        let mut prompter = ScriptPrompter::new(Cursor::new(""));
        let err = prompter.read_field("Enter amount").unwrap_err();
        assert!(matches!(err, CliError::Input(_)));
    }
}
