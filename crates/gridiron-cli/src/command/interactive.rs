use std::{
    io::{self, BufRead, Write},
    ops::RangeInclusive,
    path::Path,
};

use clap::Args;
use gridiron_analysis::session::{IndexKind, PlaybookSession};
use gridiron_engine::{GameClock, Situation};

use crate::{command::OutputArg, data, util::Output};

const EXIT: &str = "exit";

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct InteractiveArg {
    #[clap(flatten)]
    output: OutputArg,
}

pub(crate) fn run(corpus: &Path, arg: &InteractiveArg) -> anyhow::Result<()> {
    let plays = data::read_corpus(corpus)?;
    let mut session = PlaybookSession::new(plays).with_insights(arg.output.insights);
    let mut output = Output::from_output_path(arg.output.output.clone())?;
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());

    prompter.banner()?;
    while let Some(query) = prompter.read_query()? {
        log::info!("Analyzing {} plays...", session.plays().len());
        let recommendation = session.recommend(&query.situation, query.index);
        output.write_recommendation(&recommendation, arg.output.json)?;
    }
    prompter.say("Exiting program.")?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Query {
    index: IndexKind,
    situation: Situation,
}

/// Line-oriented prompts. `exit` or end of input at any prompt ends the session.
#[derive(Debug)]
struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R, W> Prompter<R, W>
where
    R: BufRead,
    W: Write,
{
    fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    fn banner(&mut self) -> io::Result<()> {
        self.say("\n==================== Welcome to the Gridiron Guru! ====================\n")?;
        self.say("Provide the quarter, down, yards to go, field position and time left,")?;
        self.say("and we will suggest the play most likely to move the chains or score.")?;
        self.say(&format!("(Input \"{EXIT}\" at any time to exit the program)\n"))
    }

    fn read_query(&mut self) -> anyhow::Result<Option<Query>> {
        let Some(index) = self.ask(
            "Input \"1\" to use the heap or \"2\" to use the bucket index below:",
            |text| number_in(text, 1..=2),
        )?
        else {
            return Ok(None);
        };
        let Some(quarter) = self.ask("Input the quarter as a number 1-4 below:", |text| {
            number_in(text, 1..=4)
        })?
        else {
            return Ok(None);
        };
        let Some(down) = self.ask(
            "Input current down as a number 1-4 (0 for a try after a touchdown) below:",
            |text| number_in(text, 0..=4),
        )?
        else {
            return Ok(None);
        };
        let Some(to_go) = self.ask("Input yards to go as a number 0-99 below:", |text| {
            number_in(text, 0..=99)
        })?
        else {
            return Ok(None);
        };
        let Some(yard_line) = self.ask(
            "Input current field position as a number 1-99 below:",
            |text| number_in(text, 1..=99),
        )?
        else {
            return Ok(None);
        };
        let Some(clock) = self.ask("Input time left in the quarter in mm:ss below:", |text| {
            text.parse::<GameClock>().map_err(|err| err.to_string())
        })?
        else {
            return Ok(None);
        };

        let index = if index == 1 {
            IndexKind::Heap
        } else {
            IndexKind::Buckets
        };
        let situation = Situation::new(quarter, down, to_go, yard_line, clock)?;
        Ok(Some(Query { index, situation }))
    }

    /// Re-prompts until `parse` accepts the answer.
    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> io::Result<Option<T>> {
        let mut line = String::new();
        loop {
            self.say(prompt)?;
            self.output.flush()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let answer = line.trim();
            if answer.eq_ignore_ascii_case(EXIT) {
                return Ok(None);
            }
            match parse(answer) {
                Ok(value) => return Ok(Some(value)),
                Err(message) => self.say(&format!("Invalid input: {message}"))?,
            }
        }
    }
}

fn number_in(text: &str, range: RangeInclusive<u8>) -> Result<u8, String> {
    text.parse::<u8>()
        .ok()
        .filter(|value| range.contains(value))
        .ok_or_else(|| {
            format!(
                "expected a number from {} to {}, got {text:?}",
                range.start(),
                range.end()
            )
        })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn prompter(input: &str) -> Prompter<Cursor<&[u8]>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes()), Vec::new())
    }

    fn transcript(prompter: &Prompter<Cursor<&[u8]>, Vec<u8>>) -> String {
        String::from_utf8(prompter.output.clone()).unwrap()
    }

    #[test]
    fn test_reads_complete_query() {
        let mut prompter = prompter("2\n3\n1\n10\n45\n12:00\n");
        let query = prompter.read_query().unwrap().unwrap();
        assert_eq!(query.index, IndexKind::Buckets);
        assert_eq!(
            query.situation,
            Situation::new(3, 1, 10, 45, GameClock::new(12, 0).unwrap()).unwrap()
        );
    }

    #[test]
    fn test_invalid_answers_reprompt() {
        let mut prompter = prompter("9\n1\nfive\n0\n5\n4\n2\n100\n7\n70\n15:30\n1:05\n");
        let query = prompter.read_query().unwrap().unwrap();
        assert_eq!(query.index, IndexKind::Heap);
        assert_eq!(query.situation.quarter(), 4);
        assert_eq!(query.situation.down(), 2);
        assert_eq!(query.situation.to_go(), 7);
        assert_eq!(query.situation.yard_line(), 70);
        assert_eq!(query.situation.clock(), GameClock::new(1, 5).unwrap());

        let transcript = transcript(&prompter);
        assert_eq!(transcript.matches("Invalid input").count(), 6);
        assert!(transcript.contains("expected a number from 1 to 2, got \"9\""));
    }

    #[test]
    fn test_exit_at_any_prompt_ends_session() {
        assert_eq!(prompter("exit\n").read_query().unwrap(), None);
        assert_eq!(prompter("1\n2\nEXIT\n").read_query().unwrap(), None);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        assert_eq!(prompter("1\n2\n3\n").read_query().unwrap(), None);
        assert_eq!(prompter("").read_query().unwrap(), None);
    }

    #[test]
    fn test_number_in_bounds() {
        assert_eq!(number_in("4", 0..=4), Ok(4));
        assert!(number_in("-1", 0..=4).is_err());
        assert!(number_in("", 0..=4).is_err());
        assert!(number_in("300", 0..=99).is_err());
    }
}
