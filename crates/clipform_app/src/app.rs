use std::io::{self, BufRead, Write};
use std::time::Duration;

use clipform_core::{update, AppState, AppViewModel, Msg};

use crate::effects::EffectRunner;
use crate::ui;

const SETTLE_POLL: Duration = Duration::from_millis(100);

/// Message loop around the core: applies messages, runs effects, renders.
pub struct App<W: Write> {
    state: AppState,
    runner: EffectRunner,
    endpoint: String,
    out: W,
    last_frame: Vec<String>,
}

impl<W: Write> App<W> {
    pub fn new(runner: EffectRunner, endpoint: impl Into<String>, out: W) -> Self {
        Self {
            state: AppState::new(),
            runner,
            endpoint: endpoint.into(),
            out,
            last_frame: Vec::new(),
        }
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn dispatch_msg(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        self.runner.run(effects);
        if was_dirty {
            self.render()?;
        }
        Ok(())
    }

    pub fn fill_form(&mut self, source: String, start: String, end: String) -> io::Result<()> {
        self.dispatch_msg(Msg::SourceChanged(source))?;
        self.dispatch_msg(Msg::StartChanged(start))?;
        self.dispatch_msg(Msg::EndChanged(end))
    }

    /// Submits the form and blocks until the submission settles.
    ///
    /// There is no deadline of its own: a request the transport never
    /// settles keeps the form in its submitting state.
    pub fn submit_and_wait(&mut self) -> io::Result<()> {
        self.dispatch_msg(Msg::SubmitClicked)?;
        while let Some(job_id) = self.state.in_flight_job() {
            if let Some(msg) = self.runner.next_msg(job_id, SETTLE_POLL) {
                self.dispatch_msg(msg)?;
            }
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = ui::render::render(&self.state.view(), &self.endpoint);
        if frame != self.last_frame {
            for line in &frame {
                writeln!(self.out, "{line}")?;
            }
            self.out.flush()?;
            self.last_frame = frame;
        }
        Ok(())
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.out
    }
}

/// Fills the form from the command line and submits it once.
///
/// Returns whether the service produced a media reference.
pub fn run_once<W: Write>(
    app: &mut App<W>,
    source: String,
    start: String,
    end: String,
) -> io::Result<bool> {
    app.fill_form(source, start, end)?;
    app.submit_and_wait()?;
    Ok(app.view().media_ref.is_some())
}

/// Prompts for the fields, submits, and repeats until the user stops or
/// input runs out. The previous source URL is offered as the default.
pub fn run_interactive<W: Write, R: BufRead, P: Write>(
    app: &mut App<W>,
    prompter: &mut ui::prompt::Prompter<R, P>,
) -> io::Result<()> {
    loop {
        let previous = app.view().source_url;
        let Some(source) = prompter.ask_required("Source URL", Some(previous.as_str()))? else {
            return Ok(());
        };
        let Some(start) = prompter.ask("Start (seconds)", None)? else {
            return Ok(());
        };
        let Some(end) = prompter.ask("End (seconds)", None)? else {
            return Ok(());
        };

        app.fill_form(source, start, end)?;
        app.submit_and_wait()?;

        if !prompter.confirm("Process another video?")? {
            return Ok(());
        }
    }
}
