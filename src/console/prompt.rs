//! Line-based prompting with the retry-or-return menu.

use crate::{
    core::input,
    entities::EntityKind,
    errors::Result,
};
use std::fmt::Display;
use std::io::{BufRead, Write};
use tracing::{debug, trace};

const TRY_AGAIN: &str = "1";
const RETURN_TO_MENU: &str = "2";

/// Reads answers from `reader` and writes questions and messages to `writer`.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    max_attempts: u32,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// `max_attempts` bounds how many invalid entries a single field accepts.
    pub fn new(reader: R, writer: W, max_attempts: u32) -> Self {
        Self {
            reader,
            writer,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Writes one line of output.
    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    /// Reads one line without its line ending. `None` means the input is exhausted.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).to_string();
        trace!(input = %trimmed, "Read console line");
        Ok(Some(trimmed))
    }

    /// Asks for an entity id. Malformed ids are not retried; they fail with `InvalidId`.
    pub fn ask_id(&mut self, question: &str, entity: EntityKind) -> Result<Option<i32>> {
        self.say(question)?;
        let Some(line) = self.read_line()? else {
            return Ok(None);
        };
        input::parse_id(entity, &line).map(Some)
    }

    /// Asks for a field until `parse` accepts the answer.
    ///
    /// After each invalid answer the user may try again or return to the menu.
    /// Returns `None` when the user returns to the menu, the attempt limit is reached,
    /// or the input ends.
    pub fn ask<T>(
        &mut self,
        question: &str,
        field: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<Option<T>> {
        self.say(question)?;
        for attempt in 1..=self.max_attempts {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) if e.is_invalid_input() => {
                    debug!(field, attempt, error = %e, "Rejected console input");
                    self.say(format!("ERROR: Incorrect {field} input!"))?;
                    if attempt == self.max_attempts {
                        self.say(format!(
                            "Too many incorrect {field} entries, returning to the menu."
                        ))?;
                        return Ok(None);
                    }
                    if !self.try_again(field)? {
                        return Ok(None);
                    }
                    self.say(format!("Enter the {field}:"))?;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(None)
    }

    /// Offers the retry menu; true means the user wants to enter the field again.
    fn try_again(&mut self, field: &str) -> Result<bool> {
        self.say(format!("1. Try entering the {field} again"))?;
        self.say("2. Return to the menu")?;
        loop {
            let Some(choice) = self.read_line()? else {
                return Ok(false);
            };
            match choice.trim() {
                TRY_AGAIN => return Ok(true),
                RETURN_TO_MENU => return Ok(false),
                _ => {
                    self.say(
                        "An unknown operation number has been entered! \
                         Number of existing operations in the range from 1 to 2",
                    )?;
                    self.say("Select operation (enter operation number):")?;
                }
            }
        }
    }

    /// Gives back the reader and the writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}


#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::errors::Error;
    use std::io::Cursor;

    fn prompter(script: &str, max_attempts: u32) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            max_attempts,
        )
    }

    fn output(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        let (_, written) = prompter.into_inner();
        String::from_utf8(written).unwrap()
    }

    #[test]
    fn test_ask_retries_after_invalid_input() {
        let mut p = prompter("abc\n1\n12.5\n", 5);
        let price = p.ask("Enter the price:", "price", input::parse_price).unwrap();
        assert_eq!(price, Some(12.5));

        let text = output(p);
        assert!(text.contains("ERROR: Incorrect price input!"));
        assert!(text.contains("1. Try entering the price again"));
        assert!(text.contains("Enter the price:"));
    }

    #[test]
    fn test_ask_return_to_menu() {
        let mut p = prompter("  \n2\n", 5);
        let name = p.ask("Enter name:", "name", input::validate_name).unwrap();
        assert_eq!(name, None);
    }

    #[test]
    fn test_ask_unknown_choice_is_reasked() {
        let mut p = prompter("x\n7\n1\n5\n", 5);
        let discount = p
            .ask("Enter discount:", "discount", input::parse_discount)
            .unwrap();
        assert_eq!(discount, Some(5));
        assert!(output(p).contains("in the range from 1 to 2"));
    }

    #[test]
    fn test_ask_gives_up_after_max_attempts() {
        let mut p = prompter("x\n1\ny\n1\n5\n", 2);
        let discount = p
            .ask("Enter discount:", "discount", input::parse_discount)
            .unwrap();
        assert_eq!(discount, None);
        assert!(output(p).contains("Too many incorrect discount entries"));
    }

    #[test]
    fn test_ask_stops_at_end_of_input() {
        let mut p = prompter("x\n", 5);
        let date = p.ask("Enter date:", "date", input::parse_date).unwrap();
        assert_eq!(date, None);
    }

    #[test]
    fn test_ask_id_is_not_retried() {
        let mut p = prompter("seven\n", 5);
        let result = p.ask_id("Enter visitor's ID:", EntityKind::Visitor);
        assert!(matches!(
            result,
            Err(Error::InvalidId {
                entity: EntityKind::Visitor,
                ..
            })
        ));
    }

    #[test]
    fn test_read_line_strips_line_endings() {
        let mut p = prompter("12\r\n", 5);
        assert_eq!(p.read_line().unwrap().as_deref(), Some("12"));
        assert_eq!(p.read_line().unwrap(), None);
    }
}
