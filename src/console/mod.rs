//! Interactive console front-end.
//!
//! A [`Console`] owns the database connection for the whole session, reads numbered
//! commands line by line and delegates every operation to the `core` layer. Any
//! operation error is printed and the menu loop continues; only console I/O failures
//! end the session early.

pub mod command;
pub mod prompt;
pub mod render;

pub use command::Command;
pub use prompt::Prompter;

use crate::{
    core::{exhibition, input, statistics, ticket, visitor},
    entities::EntityKind,
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

const NEXT_OPERATION: &str = "\nSelect next operation (0 - view the menu again):";
const UNKNOWN_OPERATION: &str = "An unknown operation number has been entered! \
                                 Number of existing operations in the range from 0 to 19";

/// Whether the menu loop keeps going after a command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Finish,
}

/// One interactive session over a reader and a writer.
pub struct Console<R, W> {
    db: DatabaseConnection,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Starts a session that owns `db` for its whole lifetime.
    pub fn new(db: DatabaseConnection, reader: R, writer: W, max_attempts: u32) -> Self {
        Self {
            db,
            prompter: Prompter::new(reader, writer, max_attempts),
        }
    }

    /// Runs the menu loop until the user finishes or the input ends.
    pub async fn run(&mut self) -> Result<()> {
        info!("Console session started");
        self.prompter.say(render::menu())?;
        loop {
            let Some(line) = self.prompter.read_line()? else {
                info!("Console input closed");
                break;
            };
            let Some(command) = Command::parse(&line) else {
                self.prompter.say(UNKNOWN_OPERATION)?;
                self.prompter.say(NEXT_OPERATION)?;
                continue;
            };

            match self.dispatch(command).await {
                Ok(Flow::Finish) => break,
                Ok(Flow::Continue) => {}
                Err(Error::Io(e)) => return Err(Error::Io(e)),
                Err(e) => {
                    warn!(?command, "Command failed: {}", e);
                    self.prompter.say(&e)?;
                }
            }
            self.prompter.say(NEXT_OPERATION)?;
        }
        info!("Console session finished");
        Ok(())
    }

    /// Releases the session, handing back the connection and the output.
    pub fn into_parts(self) -> (DatabaseConnection, W) {
        let (_, writer) = self.prompter.into_inner();
        (self.db, writer)
    }

    async fn dispatch(&mut self, command: Command) -> Result<Flow> {
        debug!(?command, "Dispatching console command");
        match command {
            Command::ViewMenu => self.prompter.say(render::menu())?,
            Command::AddExhibition => self.add_exhibition().await?,
            Command::AddTicket => self.add_ticket().await?,
            Command::AddVisitor => self.add_visitor().await?,
            Command::DeleteExhibition => self.delete(EntityKind::Exhibition).await?,
            Command::DeleteTicket => self.delete(EntityKind::Ticket).await?,
            Command::DeleteVisitor => self.delete(EntityKind::Visitor).await?,
            Command::EditExhibition => self.edit_exhibition().await?,
            Command::EditTicket => self.edit_ticket().await?,
            Command::EditVisitor => self.edit_visitor().await?,
            Command::GetExhibitionById => self.show(EntityKind::Exhibition).await?,
            Command::GetTicketById => self.show(EntityKind::Ticket).await?,
            Command::GetVisitorById => self.show(EntityKind::Visitor).await?,
            Command::CountSoldTickets => self.count_sold_tickets().await?,
            Command::CountUniqueExhibitions => self.count_unique_exhibitions().await?,
            Command::AverageDiscount => self.average_discount().await?,
            Command::ListExhibitions => {
                let exhibitions = exhibition::list_exhibitions(&self.db).await?;
                self.prompter.say("All exhibitions:")?;
                self.prompter.say(render::exhibitions_table(&exhibitions))?;
            }
            Command::ListTickets => {
                let tickets = ticket::list_tickets(&self.db).await?;
                self.prompter.say("All tickets:")?;
                self.prompter.say(render::tickets_table(&tickets))?;
            }
            Command::ListVisitors => {
                let visitors = visitor::list_visitors(&self.db).await?;
                self.prompter.say("All visitors:")?;
                self.prompter.say(render::visitors_table(&visitors))?;
            }
            Command::Finish => {
                self.prompter.say("Program finished.")?;
                return Ok(Flow::Finish);
            }
        }
        Ok(Flow::Continue)
    }

    fn ask_name(&mut self, question: &str) -> Result<Option<String>> {
        self.prompter.ask(question, "name", input::validate_name)
    }

    fn ask_date(&mut self, question: &str) -> Result<Option<chrono::DateTime<chrono::Utc>>> {
        self.prompter.ask(question, "date", input::parse_date)
    }

    fn ask_discount(&mut self, question: &str) -> Result<Option<i32>> {
        self.prompter.ask(question, "discount", input::parse_discount)
    }

    fn ask_price(&mut self, question: &str) -> Result<Option<f64>> {
        self.prompter.ask(question, "price", input::parse_price)
    }

    /// Asks for the id of an exhibition or visitor a ticket will reference and checks
    /// that it exists before any further field is requested.
    async fn ask_reference(&mut self, question: &str, entity: EntityKind) -> Result<Option<i32>> {
        let Some(id) = self.prompter.ask_id(question, entity)? else {
            return Ok(None);
        };
        let lookup = match entity {
            EntityKind::Exhibition => exhibition::get_exhibition(&self.db, id).await.map(drop),
            EntityKind::Visitor => visitor::get_visitor(&self.db, id).await.map(drop),
            EntityKind::Ticket => ticket::get_ticket(&self.db, id).await.map(drop),
        };
        if let Err(Error::NotFound { .. }) = lookup {
            self.prompter.say(match entity {
                EntityKind::Exhibition => "First, create an exhibition with that ID!",
                EntityKind::Visitor => "First, create a visitor with that ID!",
                EntityKind::Ticket => "First, sell a ticket with that ID!",
            })?;
        }
        lookup.map(|()| Some(id))
    }

    async fn add_exhibition(&mut self) -> Result<()> {
        let Some(name) = self.ask_name("Enter exhibition's name:")? else {
            return Ok(());
        };
        let Some(date) = self.ask_date("Enter exhibition's date (in format YYYY.MM.DD):")? else {
            return Ok(());
        };
        let created = exhibition::add_exhibition(&self.db, &name, date).await?;
        self.prompter
            .say(format!("Exhibition added with ID {}.", created.id))
    }

    async fn add_visitor(&mut self) -> Result<()> {
        let Some(name) = self.ask_name("Enter visitor's name:")? else {
            return Ok(());
        };
        let Some(discount) = self.ask_discount("Enter visitor's discount (from 0 to 100):")?
        else {
            return Ok(());
        };
        let created = visitor::add_visitor(&self.db, &name, discount).await?;
        self.prompter
            .say(format!("Visitor added with ID {}.", created.id))
    }

    async fn add_ticket(&mut self) -> Result<()> {
        let Some(exhibition_id) = self
            .ask_reference("Enter the exhibition ID of the ticket:", EntityKind::Exhibition)
            .await?
        else {
            return Ok(());
        };
        let Some(visitor_id) = self
            .ask_reference("Enter the visitor ID of the ticket:", EntityKind::Visitor)
            .await?
        else {
            return Ok(());
        };
        let Some(price) = self.ask_price("Enter the price of the ticket:")? else {
            return Ok(());
        };

        let sold = ticket::add_ticket(
            &self.db,
            ticket::TicketRequest {
                exhibition_id,
                visitor_id,
                price,
            },
        )
        .await?;
        self.prompter.say(format!(
            "Ticket added with ID {}. Price with discount - {}",
            sold.id,
            render::money(sold.price_with_discount)
        ))
    }

    async fn delete(&mut self, entity: EntityKind) -> Result<()> {
        let question = format!("Enter {}'s ID which you want to delete:", entity.noun());
        let Some(id) = self.prompter.ask_id(&question, entity)? else {
            return Ok(());
        };
        let existed = match entity {
            EntityKind::Exhibition => exhibition::delete_exhibition(&self.db, id).await?,
            EntityKind::Ticket => ticket::delete_ticket(&self.db, id).await?,
            EntityKind::Visitor => visitor::delete_visitor(&self.db, id).await?,
        };
        if existed {
            self.prompter.say(format!("{entity} deleted."))
        } else {
            self.prompter
                .say(format!("No {} with this ID.", entity.noun()))
        }
    }

    async fn edit_exhibition(&mut self) -> Result<()> {
        let Some(id) = self
            .prompter
            .ask_id("Enter exhibition's ID which you want to edit:", EntityKind::Exhibition)?
        else {
            return Ok(());
        };
        let current = exhibition::get_exhibition(&self.db, id).await?;

        self.prompter
            .say(format!("Current exhibition's name - {}", current.name))?;
        let Some(name) = self.ask_name("Enter new exhibition's name:")? else {
            return Ok(());
        };
        self.prompter.say(format!(
            "Current exhibition's date - {}",
            input::format_date(&current.date)
        ))?;
        let Some(date) = self.ask_date("Enter new exhibition's date (in format YYYY.MM.DD):")?
        else {
            return Ok(());
        };

        exhibition::edit_exhibition(&self.db, id, &name, date).await?;
        self.prompter.say("Exhibition updated.")
    }

    async fn edit_visitor(&mut self) -> Result<()> {
        let Some(id) = self
            .prompter
            .ask_id("Enter visitor's ID which you want to edit:", EntityKind::Visitor)?
        else {
            return Ok(());
        };
        let current = visitor::get_visitor(&self.db, id).await?;

        self.prompter
            .say(format!("Current visitor's name - {}", current.name))?;
        let Some(name) = self.ask_name("Enter new visitor's name:")? else {
            return Ok(());
        };
        self.prompter
            .say(format!("Current visitor's discount - {}%", current.discount))?;
        let Some(discount) = self.ask_discount("Enter new visitor's discount (from 0 to 100):")?
        else {
            return Ok(());
        };

        let updated = visitor::edit_visitor(&self.db, id, &name, discount).await?;
        self.prompter.say(format!(
            "Visitor updated. Repriced tickets: {}",
            updated.repriced_tickets
        ))
    }

    async fn edit_ticket(&mut self) -> Result<()> {
        let Some(id) = self
            .prompter
            .ask_id("Enter ticket's ID which you want to edit:", EntityKind::Ticket)?
        else {
            return Ok(());
        };
        let current = ticket::get_ticket(&self.db, id).await?;

        self.prompter
            .say(format!("Current ticket's visitor ID - {}", current.visitor_id))?;
        let Some(visitor_id) = self
            .ask_reference("Enter new ticket's visitor ID:", EntityKind::Visitor)
            .await?
        else {
            return Ok(());
        };
        self.prompter.say(format!(
            "Current ticket's exhibition ID - {}",
            current.exhibition_id
        ))?;
        let Some(exhibition_id) = self
            .ask_reference("Enter new ticket's exhibition ID:", EntityKind::Exhibition)
            .await?
        else {
            return Ok(());
        };
        self.prompter.say(format!(
            "Current ticket's price - {}",
            render::money(current.price)
        ))?;
        let Some(price) = self.ask_price("Enter new ticket's price:")? else {
            return Ok(());
        };

        let updated = ticket::edit_ticket(
            &self.db,
            id,
            ticket::TicketRequest {
                exhibition_id,
                visitor_id,
                price,
            },
        )
        .await?;
        self.prompter.say(format!(
            "Ticket updated. Price with discount - {}",
            render::money(updated.price_with_discount)
        ))
    }

    async fn show(&mut self, entity: EntityKind) -> Result<()> {
        let question = format!("Enter {}'s ID which you want to view:", entity.noun());
        let Some(id) = self.prompter.ask_id(&question, entity)? else {
            return Ok(());
        };
        let details = match entity {
            EntityKind::Exhibition => {
                render::exhibition_details(&exhibition::get_exhibition(&self.db, id).await?)
            }
            EntityKind::Ticket => render::ticket_details(&ticket::get_ticket(&self.db, id).await?),
            EntityKind::Visitor => {
                render::visitor_details(&visitor::get_visitor(&self.db, id).await?)
            }
        };
        self.prompter.say(details)
    }

    async fn count_sold_tickets(&mut self) -> Result<()> {
        let Some(id) = self.prompter.ask_id(
            "Enter exhibition's ID to count its sold tickets:",
            EntityKind::Exhibition,
        )?
        else {
            return Ok(());
        };
        let count = statistics::count_sold_tickets(&self.db, id).await?;
        self.prompter.say(format!("Count of sold tickets: {count}"))
    }

    async fn count_unique_exhibitions(&mut self) -> Result<()> {
        let Some(id) = self.prompter.ask_id(
            "Enter visitor's ID to count the exhibitions they visited:",
            EntityKind::Visitor,
        )?
        else {
            return Ok(());
        };
        let count = statistics::count_unique_exhibitions(&self.db, id).await?;
        self.prompter
            .say(format!("Count of unique exhibitions: {count}"))
    }

    async fn average_discount(&mut self) -> Result<()> {
        let Some(id) = self.prompter.ask_id(
            "Enter exhibition's ID to get the average discount of its visitors:",
            EntityKind::Exhibition,
        )?
        else {
            return Ok(());
        };
        match statistics::average_discount(&self.db, id).await? {
            Some(average) => self
                .prompter
                .say(format!("Average discount of visitors: {average:.2}%")),
            None => self.prompter.say("No tickets sold for this exhibition"),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;
    use std::io::Cursor;

    /// Runs a scripted session on `db` and returns the connection with everything printed.
    async fn run_session(
        db: DatabaseConnection,
        script: &str,
    ) -> Result<(DatabaseConnection, String)> {
        let mut console = Console::new(db, Cursor::new(script.as_bytes().to_vec()), Vec::new(), 3);
        console.run().await?;
        let (db, output) = console.into_parts();
        Ok((db, String::from_utf8_lossy(&output).into_owned()))
    }

    #[tokio::test]
    async fn test_session_sells_a_discounted_ticket() -> Result<()> {
        let db = setup_test_db().await?;
        let script = "1\nArt Now\n2024.05.01\n\
                      3\nAnna\n10\n\
                      2\n1\n1\n100\n\
                      17\n19\n";

        let (db, output) = run_session(db, script).await?;

        assert!(output.contains("Exhibition added with ID 1."));
        assert!(output.contains("Visitor added with ID 1."));
        assert!(output.contains("Ticket added with ID 1. Price with discount - 90.00"));
        assert!(output.contains("All tickets:"));
        assert!(output.contains("Program finished."));

        let tickets = ticket::list_tickets(&db).await?;
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].price_with_discount, 90.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_session_edit_visitor_reprices_tickets() -> Result<()> {
        let (db, _exhibition, visitor, sold) = setup_with_ticket().await?;
        let script = format!("9\n{}\nVisitor V\n20\n19\n", visitor.id);

        let (db, output) = run_session(db, &script).await?;

        assert!(output.contains("Current visitor's discount - 10%"));
        assert!(output.contains("Repriced tickets: 1"));
        let repriced = ticket::get_ticket(&db, sold.id).await?;
        assert_eq!(repriced.price_with_discount, 80.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_session_add_ticket_for_missing_visitor() -> Result<()> {
        let db = setup_test_db().await?;
        let exhibition = create_test_exhibition(&db, "Lonely").await?;
        let script = format!("2\n{}\n999\n19\n", exhibition.id);

        let (db, output) = run_session(db, &script).await?;

        assert!(output.contains("First, create a visitor with that ID!"));
        assert!(output.contains("ERROR: Visitor not found!"));
        assert!(ticket::list_tickets(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_session_delete_exhibition_removes_its_tickets() -> Result<()> {
        let (db, exhibition, _visitor, sold) = setup_with_ticket().await?;
        let script = format!("4\n{}\n11\n{}\n19\n", exhibition.id, sold.id);

        let (_db, output) = run_session(db, &script).await?;

        assert!(output.contains("Exhibition deleted."));
        assert!(output.contains("ERROR: Ticket not found!"));
        Ok(())
    }

    #[tokio::test]
    async fn test_session_unknown_commands_and_bad_ids_keep_running() -> Result<()> {
        let db = setup_test_db().await?;

        let (_db, output) = run_session(db, "42\nabc\n12\nseven\n18\n19\n").await?;

        assert_eq!(output.matches(UNKNOWN_OPERATION).count(), 2);
        assert!(output.contains("ERROR: Incorrect visitor ID"));
        assert!(output.contains("All visitors:"));
        assert!(output.contains("Program finished."));
        Ok(())
    }

    #[tokio::test]
    async fn test_session_invalid_discount_then_return_to_menu() -> Result<()> {
        let db = setup_test_db().await?;

        let (db, output) = run_session(db, "3\nBob\n150\n2\n19\n").await?;

        assert!(output.contains("ERROR: Incorrect discount input!"));
        assert!(visitor::list_visitors(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_session_statistics() -> Result<()> {
        let (db, exhibition, visitor, _sold) = setup_with_ticket().await?;
        let empty = create_test_exhibition(&db, "Empty").await?;
        let script = format!(
            "13\n{e}\n14\n{v}\n15\n{e}\n15\n{empty}\n19\n",
            e = exhibition.id,
            v = visitor.id,
            empty = empty.id
        );

        let (_db, output) = run_session(db, &script).await?;

        assert!(output.contains("Count of sold tickets: 1"));
        assert!(output.contains("Count of unique exhibitions: 1"));
        assert!(output.contains("Average discount of visitors: 10.00%"));
        assert!(output.contains("No tickets sold for this exhibition"));
        Ok(())
    }

    #[tokio::test]
    async fn test_session_ends_at_end_of_input() -> Result<()> {
        let db = setup_test_db().await?;

        let (_db, output) = run_session(db, "16\n").await?;

        assert!(output.contains("All exhibitions:"));
        assert!(!output.contains("Program finished."));
        Ok(())
    }

    #[tokio::test]
    async fn test_session_delete_missing_ids_is_not_an_error() -> Result<()> {
        let db = setup_test_db().await?;

        let (_db, output) = run_session(db, "6\n31\n5\n32\n19\n").await?;

        assert!(output.contains("No visitor with this ID."));
        assert!(output.contains("No ticket with this ID."));
        assert!(!output.contains("not found!"));
        Ok(())
    }

    #[tokio::test]
    async fn test_session_edit_ticket_asks_visitor_before_exhibition() -> Result<()> {
        let (db, exhibition, visitor, sold) = setup_with_ticket().await?;
        let richer = create_test_visitor(&db, "Patron", 50).await?;
        let script = format!(
            "8\n{}\n{}\n{}\n40\n19\n",
            sold.id, richer.id, exhibition.id
        );

        let (db, output) = run_session(db, &script).await?;

        let visitor_prompt = output.find("Current ticket's visitor ID").unwrap();
        let exhibition_prompt = output.find("Current ticket's exhibition ID").unwrap();
        assert!(visitor_prompt < exhibition_prompt);
        assert!(output.contains(&format!("Current ticket's visitor ID - {}", visitor.id)));

        let edited = ticket::get_ticket(&db, sold.id).await?;
        assert_eq!(edited.visitor_id, richer.id);
        assert_eq!(edited.price, 40.0);
        assert_eq!(edited.price_with_discount, 20.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_session_edit_ticket_checks_visitor_first() -> Result<()> {
        let (db, _exhibition, _visitor, sold) = setup_with_ticket().await?;
        let script = format!("8\n{}\n404\n19\n", sold.id);

        let (db, output) = run_session(db, &script).await?;

        assert!(output.contains("First, create a visitor with that ID!"));
        assert!(!output.contains("Current ticket's exhibition ID"));
        assert_eq!(ticket::get_ticket(&db, sold.id).await?, sold);
        Ok(())
    }
}
