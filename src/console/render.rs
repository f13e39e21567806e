//! Text rendering of the menu, single entities and entity tables.

use crate::{
    console::command::Command,
    core::input,
    entities::{exhibition, ticket, visitor},
};
use prettytable::{Table, row};

/// The full numbered menu, grouped into sections.
#[must_use]
pub fn menu() -> String {
    let mut text = String::from("MENU\n");
    for command in Command::ALL {
        if command == Command::ViewMenu {
            continue;
        }
        if command == Command::Finish {
            text.push('\n');
        }
        if let Some(section) = command.section() {
            text.push_str(&format!("\n{section}\n"));
        }
        text.push_str(&format!("{} - {}\n", command.number(), command.label()));
    }
    text.push_str("\nSelect operation (enter operation number):");
    text
}

/// Renders a price with two decimals.
#[must_use]
pub fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

/// One line per exhibition field.
pub fn exhibition_details(exhibition: &exhibition::Model) -> String {
    format!(
        "Information about exhibition ID - {}:\n\
         Exhibition's name - {}\n\
         Exhibition's date (YYYY.MM.DD) - {}",
        exhibition.id,
        exhibition.name,
        input::format_date(&exhibition.date)
    )
}

/// One line per visitor field.
pub fn visitor_details(visitor: &visitor::Model) -> String {
    format!(
        "Information about visitor ID - {}:\n\
         Visitor's name - {}\n\
         Visitor's discount - {}%",
        visitor.id, visitor.name, visitor.discount
    )
}

/// One line per ticket field, prices with two decimals.
pub fn ticket_details(ticket: &ticket::Model) -> String {
    format!(
        "Information about ticket ID - {}:\n\
         Ticket's exhibition ID - {}\n\
         Ticket's visitor ID - {}\n\
         Ticket's price - {}\n\
         Ticket's price with discount - {}",
        ticket.id,
        ticket.exhibition_id,
        ticket.visitor_id,
        money(ticket.price),
        money(ticket.price_with_discount)
    )
}

/// One row per exhibition, in the order given.
pub fn exhibitions_table(exhibitions: &[exhibition::Model]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["ID", "Name", "Date"]);
    for exhibition in exhibitions {
        table.add_row(row![
            exhibition.id,
            exhibition.name,
            input::format_date(&exhibition.date)
        ]);
    }
    table
}

/// One row per visitor, in the order given.
pub fn visitors_table(visitors: &[visitor::Model]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["ID", "Name", "Discount"]);
    for visitor in visitors {
        table.add_row(row![
            visitor.id,
            visitor.name,
            format!("{}%", visitor.discount)
        ]);
    }
    table
}

/// One row per ticket, in the order given.
pub fn tickets_table(tickets: &[ticket::Model]) -> Table {
    let mut table = Table::new();
    table.set_titles(row![
        "ID",
        "Exhibition ID",
        "Visitor ID",
        "Price",
        "Price with discount"
    ]);
    for ticket in tickets {
        table.add_row(row![
            ticket.id,
            ticket.exhibition_id,
            ticket.visitor_id,
            money(ticket.price),
            money(ticket.price_with_discount)
        ]);
    }
    table
}
