//! Application state and the interactive turn loop

use std::io::{self, BufRead, Write};

use bg_core::action::Command;
use bg_core::{GameLoop, GameLoopResult, GameState};
use tracing::debug;

use crate::display;
use crate::input::{self, Meta, Parsed};
use crate::theme::Theme;

const HISTORY_LINES: usize = 20;

/// Line-based game session
pub struct App {
    game: GameLoop,
    theme: Theme,
    show_map: bool,
}

impl App {
    pub fn new(state: GameState, theme: Theme) -> Self {
        Self {
            game: GameLoop::new(state),
            theme,
            show_map: false,
        }
    }

    /// Print the mansion layout before the first turn
    pub fn with_map(mut self, show: bool) -> Self {
        self.show_map = show;
        self
    }

    pub fn game(&self) -> &GameLoop {
        &self.game
    }

    /// Play until the game ends or input runs out.
    ///
    /// End of input counts as quitting.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> io::Result<GameLoopResult> {
        writeln!(
            out,
            "{}",
            self.theme.bold("THE BOX GIRL - find a way out of the mansion.", self.theme.header)
        )?;
        writeln!(out, "Type 'help' for the list of commands.")?;
        if self.show_map {
            write!(out, "{}", self.game.state().mansion.render_ascii())?;
        }

        loop {
            writeln!(out)?;
            for line in display::room_lines(self.game.state(), &self.theme) {
                writeln!(out, "{line}")?;
            }
            writeln!(out)?;
            writeln!(out, "{}", self.theme.bold("YOUR TURN", self.theme.prompt))?;
            self.prompt(
                &mut out,
                "Choose action: [move] / [open box] / [put item] / [use item] / [inventory] / [whereami] / [help] / [quit]",
            )?;

            let command = match read_line(&mut input)? {
                Some(line) => match self.command_for(&line, &mut input, &mut out)? {
                    Some(command) => command,
                    None => continue,
                },
                None => Command::Quit,
            };

            let result = self.game.tick(command);
            self.flush_messages(&mut out)?;

            if result != GameLoopResult::Continue {
                for line in display::banner(&result, &self.theme) {
                    writeln!(out, "{line}")?;
                }
                out.flush()?;
                return Ok(result);
            }
        }
    }

    /// Turn a first line into a command, prompting for whatever is missing.
    ///
    /// `None` means a free request was handled and the turn continues.
    fn command_for<R: BufRead, W: Write>(
        &mut self,
        line: &str,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<Option<Command>> {
        let parsed = input::parse_line(line);
        debug!(?parsed, "parsed input");

        let command = match parsed {
            Parsed::Ready(command) => command,
            Parsed::Meta(meta) => {
                self.show_meta(meta, out)?;
                return Ok(None);
            }
            Parsed::NeedDirection => {
                self.prompt(out, "Enter movement direction (e.g.: NORTH, SOUTH, UP, DOWN):")?;
                match read_line(input)? {
                    Some(answer) => input::parse_direction(&answer),
                    None => Command::Quit,
                }
            }
            Parsed::NeedBox => {
                let room = self.game.state().mansion.room(self.game.state().player.room);
                if room.unopened_boxes().is_empty() {
                    return Ok(Some(Command::Invalid(
                        "All boxes in this room are already open.".to_string(),
                    )));
                }
                self.prompt(out, "Enter the ID of the box to open:")?;
                match read_line(input)? {
                    Some(answer) => input::open_command(&answer),
                    None => Command::Quit,
                }
            }
            Parsed::NeedPut => {
                self.show_items(out)?;
                self.prompt(out, "Enter the ID of the box to put the item into:")?;
                let Some(id) = read_line(input)? else {
                    return Ok(Some(Command::Quit));
                };
                self.prompt(out, "Enter the name of the item to put:")?;
                match read_line(input)? {
                    Some(name) => input::put_answers(&id, &name),
                    None => Command::Quit,
                }
            }
            Parsed::NeedItem => {
                if !self.show_items(out)? {
                    return Ok(Some(Command::UseItem(String::new())));
                }
                self.prompt(out, "Enter the name of the item to use:")?;
                match read_line(input)? {
                    Some(name) => Command::UseItem(name.trim().to_string()),
                    None => Command::Quit,
                }
            }
        };
        Ok(Some(command))
    }

    fn show_meta<W: Write>(&self, meta: Meta, out: &mut W) -> io::Result<()> {
        let state = self.game.state();
        match meta {
            Meta::Help => {
                for line in display::help_lines(&state.options) {
                    writeln!(out, "{line}")?;
                }
            }
            Meta::Map => write!(out, "{}", state.mansion.render_ascii())?,
            Meta::History => {
                let skip = state.message_history.len().saturating_sub(HISTORY_LINES);
                for msg in state.message_history.iter().skip(skip) {
                    writeln!(out, "{}", self.theme.paint(msg, self.theme.text_dim))?;
                }
            }
        }
        Ok(())
    }

    /// List carried items; false when there are none
    fn show_items<W: Write>(&self, out: &mut W) -> io::Result<bool> {
        let Some(lines) = display::item_lines(self.game.state()) else {
            return Ok(false);
        };
        for line in lines {
            writeln!(out, "{line}")?;
        }
        Ok(true)
    }

    fn prompt<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        writeln!(out, "{}", self.theme.paint(text, self.theme.prompt))?;
        out.flush()
    }

    fn flush_messages<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        for msg in self.game.state_mut().take_messages() {
            let color = display::message_color(&msg, &self.theme);
            writeln!(out, "{}", self.theme.paint(&msg, color))?;
        }
        Ok(())
    }
}

/// One line without its terminator, or `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
