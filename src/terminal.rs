use std::io::{self, BufRead, Write};
use crate::models::{Banner, RoundView};
use crate::services::figure::render_ascii;
use crate::services::round::LOSS_THRESHOLD;
use crate::session::Session;

const TITLE: &str = "HANGMAN F1";

fn render<W: Write>(out: &mut W, view: &RoundView) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "Hint: {}", view.hint)?;
    writeln!(out)?;
    writeln!(out, "{}", render_ascii(view.figure_index))?;
    writeln!(out)?;
    writeln!(out, "    {}", view.masked_word)?;
    writeln!(out)?;
    writeln!(out, "Wrong guesses: {}/{}", view.wrong_guesses, LOSS_THRESHOLD)?;
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Run an interactive session until the player quits or input ends
pub fn run<R: BufRead, W: Write>(session: &mut Session, mut input: R, out: &mut W) -> io::Result<()> {
    writeln!(out, "Type a letter and press Enter. 'quit' leaves the game.")?;

    loop {
        let view = session.view();
        render(out, &view)?;

        if view.guess_enabled {
            write!(out, "Try letter: ")?;
            out.flush()?;

            let Some(line) = read_line(&mut input)? else { break };
            if matches!(line.to_lowercase().as_str(), "quit" | "exit") {
                break;
            }
            // Rejected input is dropped without comment; the redraw shows nothing changed
            session.guess(&line);
            continue;
        }

        match view.banner {
            Some(Banner::Win) => writeln!(out, "You Win!")?,
            Some(Banner::Lose) => writeln!(out, "You Lose!")?,
            None => {}
        }
        if let Some(answer) = &view.answer {
            writeln!(out, "The word was {}.", answer)?;
        }

        write!(out, "Play again? [y/N]: ")?;
        out.flush()?;

        match read_line(&mut input)? {
            Some(line) if line.eq_ignore_ascii_case("y") || line.eq_ignore_ascii_case("yes") => {
                session.replay();
            }
            _ => break,
        }
    }

    writeln!(out)?;
    writeln!(out, "Goodbye!")?;
    Ok(())
}
