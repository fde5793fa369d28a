use crate::app::form::PayrollForm;
use crate::config::Settings;
use crate::domain::ports::Presenter;
use crate::utils::error::{PayrollError, Result};
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  name <text>      set the employee name (optional)
  salary <amount>  set the gross monthly salary
  calc             calculate INSS, IR and net salary
  new              clear the form
  help             show this help
  exit             leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Name(String),
    Salary(String),
    Calculate,
    New,
    Help,
    Exit,
    Empty,
    Unknown(String),
}

impl FormCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "" => FormCommand::Empty,
            "name" => FormCommand::Name(rest.to_string()),
            "salary" => FormCommand::Salary(rest.to_string()),
            "calc" | "calculate" => FormCommand::Calculate,
            "new" | "reset" => FormCommand::New,
            "help" | "?" => FormCommand::Help,
            "exit" | "quit" => FormCommand::Exit,
            _ => FormCommand::Unknown(verb.to_string()),
        }
    }
}

/// Line-driven payroll form over any reader/writer pair.
pub struct FormSession<'a, R: BufRead, W: Write> {
    form: PayrollForm,
    settings: &'a Settings,
    presenter: Box<dyn Presenter>,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> FormSession<'a, R, W> {
    pub fn new(settings: &'a Settings, presenter: Box<dyn Presenter>, input: R, output: W) -> Self {
        Self {
            form: PayrollForm::new(),
            settings,
            presenter,
            input,
            output,
        }
    }

    /// Starts the session from already filled-in fields.
    pub fn with_form(mut self, form: PayrollForm) -> Self {
        self.form = form;
        self
    }

    pub fn form(&self) -> &PayrollForm {
        &self.form
    }

    /// Runs until `exit` or end of input. Input errors are reported and the
    /// session carries on; anything else ends it.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Nicaraguan payroll calculator. Type 'help' for commands.")?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            match FormCommand::parse(&line) {
                FormCommand::Exit => break,
                command => self.handle(command)?,
            }
        }

        tracing::debug!("form session closed");
        Ok(())
    }

    fn handle(&mut self, command: FormCommand) -> Result<()> {
        match command {
            FormCommand::Name(name) => self.form.set_name(name),
            FormCommand::Salary(salary) => self.form.set_salary(salary),
            FormCommand::Calculate => {
                let presenter = &self.presenter;
                let rendered = self
                    .form
                    .calculate(self.settings)
                    .and_then(|report| presenter.render(report));
                match rendered {
                    Ok(text) => writeln!(self.output, "{}", text)?,
                    Err(e) if e.is_recoverable() => self.report_input_error(&e)?,
                    Err(e) => return Err(e),
                }
            }
            FormCommand::New => {
                self.form.reset();
                let rendered = self.presenter.render_blank()?;
                writeln!(self.output, "{}", rendered)?;
            }
            FormCommand::Help => writeln!(self.output, "{}", HELP)?,
            FormCommand::Unknown(verb) => writeln!(
                self.output,
                "Unknown command '{}'. Type 'help' for commands.",
                verb
            )?,
            FormCommand::Empty | FormCommand::Exit => {}
        }
        Ok(())
    }

    fn report_input_error(&mut self, error: &PayrollError) -> Result<()> {
        tracing::warn!("rejected input: {}", error);
        writeln!(self.output, "❌ {}", error.user_friendly_message())?;
        writeln!(self.output, "💡 {}", error.recovery_suggestion())?;
        Ok(())
    }
}
