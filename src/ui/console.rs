use std::io::{self, BufRead, Write};

use log::info;

use super::session::{Feedback, Session, Stage};
use super::text;
use crate::game::GameOutcome;

/// Line-oriented game loop: prints the board, prompts for a start and an end
/// square, and repeats until the game ends or input runs out.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut output: W,
    show_legal: bool,
) -> io::Result<Option<GameOutcome>> {
    if let Some(outcome) = session.state().outcome() {
        writeln!(output, "{}", session.describe(&Feedback::GameOver(outcome)))?;
        return Ok(Some(outcome));
    }
    writeln!(output, "Input moves as {}.", session.notation().hint())?;

    loop {
        let prompt = match session.stage() {
            Stage::Start => {
                writeln!(output)?;
                writeln!(
                    output,
                    "{}",
                    text::render(session.state(), session.notation(), show_legal)
                )?;
                "Start: "
            }
            Stage::End { .. } => "End: ",
        };
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            info!("input closed before the game ended");
            return Ok(None);
        }

        let feedback = session.submit(&line);
        writeln!(output, "{}", session.describe(&feedback))?;
        if let Feedback::GameOver(outcome) = feedback {
            return Ok(Some(outcome));
        }
    }
}
