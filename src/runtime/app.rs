use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::commands::Cmd;
use crate::eval::{self, format_number, CalcError};
use crate::keymap::parse_line;
use crate::messages::Msg;
use crate::model::AppModel;
use crate::update::update;
use crate::view::{prompt, render, RenderOptions, ViewState};

/// Terminal application: owns the model and executes commands
pub struct App<W: Write> {
    model: AppModel,
    out: W,
    options: RenderOptions,
    /// Where `Cmd::SaveConfig` writes; `None` keeps preferences in memory
    config_path: Option<PathBuf>,
    should_exit: bool,
}

impl<W: Write> App<W> {
    pub fn new(model: AppModel, out: W, options: RenderOptions) -> Self {
        Self {
            model,
            out,
            options,
            config_path: None,
            should_exit: false,
        }
    }

    /// Persist theme changes to `path`
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Consume the app, returning the writer
    pub fn into_writer(self) -> W {
        self.out
    }

    /// Run one message through `update` and execute the resulting command
    ///
    /// Returns true if the view needs to be redrawn.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        match update(&mut self.model, msg) {
            Some(cmd) => self.process_cmd(cmd),
            None => false,
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) -> bool {
        match cmd {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::SaveConfig(config) => {
                match &self.config_path {
                    Some(path) => {
                        if let Err(e) = config.save_to(path) {
                            tracing::warn!("Failed to save config: {}", e);
                        }
                    }
                    None => tracing::debug!("Config persistence disabled, not saving"),
                }
                false
            }
            Cmd::Batch(cmds) => {
                let mut redraw = false;
                for cmd in cmds {
                    redraw |= self.process_cmd(cmd);
                }
                redraw
            }
            Cmd::Quit => {
                self.should_exit = true;
                false
            }
        }
    }

    /// Write the current view followed by the prompt
    pub fn draw(&mut self) -> Result<()> {
        let view = ViewState::from_model(&self.model);
        let text = render(&view, &self.model.theme, self.options);
        write!(
            self.out,
            "{}{}",
            text,
            prompt(&self.model.theme, self.options)
        )?;
        self.out.flush()?;
        Ok(())
    }

    /// Handle one line of input, redrawing if anything visible changed
    pub fn handle_line(&mut self, line: &str) -> Result<()> {
        let mut redraw = false;
        for msg in parse_line(line) {
            redraw |= self.dispatch(msg);
            if self.should_exit {
                return Ok(());
            }
        }
        if redraw {
            self.draw()?;
        } else {
            write!(self.out, "{}", prompt(&self.model.theme, self.options))?;
            self.out.flush()?;
        }
        Ok(())
    }

    /// Read lines until EOF or a quit command
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        self.draw()?;
        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            self.handle_line(&line)?;
            if self.should_exit {
                break;
            }
        }
        writeln!(self.out)?;
        Ok(())
    }
}

/// Evaluate a single expression with the commit rules, returning the
/// canonical result string
pub fn evaluate_once(expr: &str) -> std::result::Result<String, CalcError> {
    eval::commit(expr).map(format_number)
}
