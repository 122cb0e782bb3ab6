//! Line-based terminal host for the wizard.
//!
//! Each screen is rendered from the session's state and every answer goes
//! back through the wizard's edit operations. Inside a section the fields are
//! asked one after another; an empty line keeps the current answer and
//! `:clear` empties a text answer.
//!
//! Remote saves run in the background. Their outcome is reported at the next
//! screen once known, and leaving waits for them only up to [`SYNC_GRACE`].

use std::{
    io::{BufRead, Write},
    mem,
    time::Duration,
};

use anyhow::Result;
use brief_core::{
    display::OperationStatus, BriefingSession, Field, FieldKind, IdentityField, Screen, SyncTask,
};
use log::{debug, warn};
use tokio::time::{timeout_at, Instant};

use crate::renderer::TerminalRenderer;

const HINT: &str = "Press Enter to keep an answer, :clear to empty a text answer, :back for the previous section or :quit to leave.";

/// Empties a text answer.
const CLEAR: &str = ":clear";

/// How long leaving the wizard waits for outstanding remote saves.
const SYNC_GRACE: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// What a single prompt produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reply {
    Answered,
    Back,
    Quit,
}

pub struct Interactive<'a, R, W> {
    session: &'a mut BriefingSession,
    renderer: &'a TerminalRenderer,
    input: R,
    output: W,
    pending: Vec<SyncTask>,
}

impl<'a, R: BufRead, W: Write> Interactive<'a, R, W> {
    pub fn new(
        session: &'a mut BriefingSession,
        renderer: &'a TerminalRenderer,
        input: R,
        output: W,
    ) -> Self {
        Self {
            session,
            renderer,
            input,
            output,
            pending: Vec::new(),
        }
    }

    /// Drives the wizard until the user quits or the input ends.
    pub async fn run(mut self) -> Result<()> {
        loop {
            self.report_sync().await?;
            let flow = match self.session.wizard().screen() {
                Screen::Intro => self.intro()?,
                Screen::Form { section } => self.form(section)?,
                Screen::Submit => self.review().await?,
                Screen::Success => self.success()?,
            };
            if flow == Flow::Quit {
                debug!("wizard left on {}", self.session.wizard().screen());
                return self.settle_sync().await;
            }
        }
    }

    fn intro(&mut self) -> Result<Flow> {
        let settings = self.session.settings().clone();
        let heading = format!("# {}\n", settings.title);
        write!(self.output, "{}", self.renderer.format(&heading))?;
        for line in [&settings.subtitle, &settings.description] {
            if !line.is_empty() {
                writeln!(self.output, "{line}")?;
            }
        }
        writeln!(self.output, "Estimated time: {}", settings.time_estimate)?;

        match self.prompt("Press Enter to begin, or :quit to leave: ")? {
            None => Ok(Flow::Quit),
            Some(line) if line == ":quit" => Ok(Flow::Quit),
            Some(_) => {
                self.session.wizard_mut().start()?;
                Ok(Flow::Continue)
            }
        }
    }

    fn form(&mut self, index: usize) -> Result<Flow> {
        let Some(section) = self.session.wizard().current_section().cloned() else {
            return Ok(Flow::Continue);
        };
        let total = self.session.wizard().schema().len();

        let heading = format!(
            "## {} {} ({}/{})\n",
            section.icon,
            section.title,
            index + 1,
            total
        );
        writeln!(self.output)?;
        write!(self.output, "{}", self.renderer.format(&heading))?;
        writeln!(self.output, "{HINT}")?;

        if index == 0 {
            for field in IdentityField::ALL {
                let reply = self.ask_identity(field)?;
                if reply != Reply::Answered {
                    return self.leave(reply);
                }
            }
        }

        for field in &section.fields {
            let reply = self.ask_field(field)?;
            if reply != Reply::Answered {
                return self.leave(reply);
            }
        }

        self.session.wizard_mut().next()?;
        Ok(Flow::Continue)
    }

    async fn review(&mut self) -> Result<Flow> {
        writeln!(self.output)?;
        write!(self.output, "{}", self.renderer.format("## Review\n"))?;
        writeln!(self.output, "{}", self.session.preview())?;
        writeln!(self.output)?;

        let Some(line) = self.prompt("Type 'confirm' to send or 'revise' to edit: ")? else {
            return Ok(Flow::Quit);
        };

        match line.as_str() {
            "confirm" | "c" => self.confirm().await,
            "revise" | "r" => {
                self.session.wizard_mut().revise()?;
                Ok(Flow::Continue)
            }
            ":quit" => Ok(Flow::Quit),
            other => {
                writeln!(self.output, "Unknown answer '{other}'.")?;
                Ok(Flow::Continue)
            }
        }
    }

    async fn confirm(&mut self) -> Result<Flow> {
        let submission = match self.session.confirm_submit() {
            Ok(submission) => submission,
            Err(e) => {
                let status = OperationStatus::failure(format!("Briefing not saved: {e}"));
                write!(self.output, "{status}")?;
                return Ok(Flow::Continue);
            }
        };

        let status = OperationStatus::success(format!(
            "Briefing {} saved",
            submission.briefing.id
        ));
        write!(self.output, "{status}")?;
        writeln!(self.output, "Send it with this link:")?;
        writeln!(self.output, "{}", submission.dispatch_url)?;

        self.pending.push(submission.sync);
        self.report_sync().await?;
        if !self.pending.is_empty() {
            writeln!(self.output, "Saving to the remote store in the background.")?;
        }
        Ok(Flow::Continue)
    }

    /// Prints the outcome of every remote save that has finished.
    async fn report_sync(&mut self) -> Result<()> {
        let (finished, running): (Vec<_>, Vec<_>) = mem::take(&mut self.pending)
            .into_iter()
            .partition(SyncTask::is_finished);
        self.pending = running;
        for task in finished {
            let outcome = task.outcome().await;
            write!(self.output, "{}", OperationStatus::from(&outcome))?;
        }
        Ok(())
    }

    /// Waits up to [`SYNC_GRACE`] for outstanding remote saves, then gives up
    /// on the rest.
    async fn settle_sync(&mut self) -> Result<()> {
        let deadline = Instant::now() + SYNC_GRACE;
        for task in mem::take(&mut self.pending) {
            let status = match timeout_at(deadline, task.outcome()).await {
                Ok(outcome) => OperationStatus::from(&outcome),
                Err(_) => {
                    warn!("remote save still running after {SYNC_GRACE:?}, abandoned");
                    OperationStatus::failure("remote sync still running, abandoned on exit")
                }
            };
            write!(self.output, "{status}")?;
        }
        Ok(())
    }

    fn success(&mut self) -> Result<Flow> {
        match self.prompt("Start a new briefing? [y/N]: ")? {
            Some(line) if line.eq_ignore_ascii_case("y") => {
                self.session.wizard_mut().start_new()?;
                Ok(Flow::Continue)
            }
            _ => Ok(Flow::Quit),
        }
    }

    fn leave(&mut self, reply: Reply) -> Result<Flow> {
        match reply {
            Reply::Back => {
                self.session.wizard_mut().back()?;
                Ok(Flow::Continue)
            }
            Reply::Quit => Ok(Flow::Quit),
            Reply::Answered => Ok(Flow::Continue),
        }
    }

    fn ask_identity(&mut self, field: IdentityField) -> Result<Reply> {
        let current = self.session.wizard().answers().identity(field).to_string();
        let Some(line) = self.prompt(&label_with_current(field.label(), &current))? else {
            return Ok(Reply::Quit);
        };
        if let Some(reply) = navigation(&line) {
            return Ok(reply);
        }
        if line == CLEAR {
            self.session.wizard_mut().set_identity(field, "")?;
        } else if !line.is_empty() {
            self.session.wizard_mut().set_identity(field, line)?;
        }
        Ok(Reply::Answered)
    }

    fn ask_field(&mut self, field: &Field) -> Result<Reply> {
        match &field.kind {
            FieldKind::Text | FieldKind::TextArea => self.ask_text(field),
            FieldKind::SingleChoice(options) => self.ask_single(field, options),
            FieldKind::MultiChoice(options) => self.ask_multi(field, options),
        }
    }

    fn ask_text(&mut self, field: &Field) -> Result<Reply> {
        let current = self.session.wizard().answers().text(&field.key).to_string();
        let Some(line) = self.prompt(&label_with_current(&field.label, &current))? else {
            return Ok(Reply::Quit);
        };
        if let Some(reply) = navigation(&line) {
            return Ok(reply);
        }
        if line == CLEAR {
            self.session.wizard_mut().set_text(&field.key, "")?;
        } else if !line.is_empty() {
            self.session.wizard_mut().set_text(&field.key, line)?;
        }
        Ok(Reply::Answered)
    }

    fn ask_single(&mut self, field: &Field, options: &[String]) -> Result<Reply> {
        writeln!(self.output, "{}", field.label)?;
        let current = self.session.wizard().answers().text(&field.key).to_string();
        for (i, option) in options.iter().enumerate() {
            let marker = if *option == current { "(*)" } else { "( )" };
            writeln!(self.output, "  {} {marker} {option}", i + 1)?;
        }

        loop {
            let Some(line) = self.prompt("Choose a number: ")? else {
                return Ok(Reply::Quit);
            };
            if let Some(reply) = navigation(&line) {
                return Ok(reply);
            }
            if line.is_empty() {
                return Ok(Reply::Answered);
            }
            match parse_choice(&line, options.len()) {
                Some(i) => {
                    self.session.wizard_mut().set_choice(&field.key, &options[i])?;
                    return Ok(Reply::Answered);
                }
                None => writeln!(
                    self.output,
                    "Please enter a number from 1 to {}.",
                    options.len()
                )?,
            }
        }
    }

    fn ask_multi(&mut self, field: &Field, options: &[String]) -> Result<Reply> {
        writeln!(self.output, "{}", field.label)?;
        let selected = self.session.wizard().answers().selections(&field.key).to_vec();
        for (i, option) in options.iter().enumerate() {
            let marker = if selected.contains(option) { "[x]" } else { "[ ]" };
            writeln!(self.output, "  {} {marker} {option}", i + 1)?;
        }

        loop {
            let Some(line) = self.prompt("Toggle numbers (comma separated): ")? else {
                return Ok(Reply::Quit);
            };
            if let Some(reply) = navigation(&line) {
                return Ok(reply);
            }
            if line.is_empty() {
                return Ok(Reply::Answered);
            }
            let picks: Option<Vec<usize>> = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|part| !part.is_empty())
                .map(|part| parse_choice(part, options.len()))
                .collect();
            match picks {
                Some(picks) => {
                    for i in picks {
                        self.session
                            .wizard_mut()
                            .toggle_choice(&field.key, &options[i])?;
                    }
                    return Ok(Reply::Answered);
                }
                None => writeln!(
                    self.output,
                    "Please enter numbers from 1 to {}.",
                    options.len()
                )?,
            }
        }
    }

    /// Prints `text` and reads one trimmed line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn navigation(line: &str) -> Option<Reply> {
    match line {
        ":back" => Some(Reply::Back),
        ":quit" => Some(Reply::Quit),
        _ => None,
    }
}

fn label_with_current(label: &str, current: &str) -> String {
    if current.is_empty() {
        format!("{label}: ")
    } else {
        format!("{label} [{current}]: ")
    }
}

/// Parses a 1-based option number into an index.
fn parse_choice(input: &str, count: usize) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=count).contains(n))
        .map(|n| n - 1)
}
