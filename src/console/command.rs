//! The numbered menu commands and their labels.

/// One entry of the numbered console menu.
///
/// The discriminant is the number the user types to select the command.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the menu again
    ViewMenu = 0,
    /// Create an exhibition
    AddExhibition = 1,
    /// Sell a ticket
    AddTicket = 2,
    /// Register a visitor
    AddVisitor = 3,
    /// Delete an exhibition and its tickets
    DeleteExhibition = 4,
    /// Delete one ticket
    DeleteTicket = 5,
    /// Delete a visitor and their tickets
    DeleteVisitor = 6,
    /// Replace an exhibition's fields
    EditExhibition = 7,
    /// Replace a ticket's fields
    EditTicket = 8,
    /// Replace a visitor's fields and reprice their tickets
    EditVisitor = 9,
    /// Show one exhibition
    GetExhibitionById = 10,
    /// Show one ticket
    GetTicketById = 11,
    /// Show one visitor
    GetVisitorById = 12,
    /// Count the tickets sold for an exhibition
    CountSoldTickets = 13,
    /// Count the distinct exhibitions a visitor holds tickets for
    CountUniqueExhibitions = 14,
    /// Average discount over an exhibition's tickets
    AverageDiscount = 15,
    /// Table of all exhibitions
    ListExhibitions = 16,
    /// Table of all tickets
    ListTickets = 17,
    /// Table of all visitors
    ListVisitors = 18,
    /// Leave the program
    Finish = 19,
}

impl Command {
    /// Every command, indexed by its menu number.
    pub const ALL: [Self; 20] = [
        Self::ViewMenu,
        Self::AddExhibition,
        Self::AddTicket,
        Self::AddVisitor,
        Self::DeleteExhibition,
        Self::DeleteTicket,
        Self::DeleteVisitor,
        Self::EditExhibition,
        Self::EditTicket,
        Self::EditVisitor,
        Self::GetExhibitionById,
        Self::GetTicketById,
        Self::GetVisitorById,
        Self::CountSoldTickets,
        Self::CountUniqueExhibitions,
        Self::AverageDiscount,
        Self::ListExhibitions,
        Self::ListTickets,
        Self::ListVisitors,
        Self::Finish,
    ];

    /// Parses a menu selection such as `"7"`. Anything else yields `None`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        Self::ALL.get(number).copied()
    }

    /// The number typed to select this command.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Text shown next to the number in the menu.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ViewMenu => "View the menu again",
            Self::AddExhibition => "Add exhibition",
            Self::AddTicket => "Add ticket",
            Self::AddVisitor => "Add visitor",
            Self::DeleteExhibition => "Delete exhibition",
            Self::DeleteTicket => "Delete ticket",
            Self::DeleteVisitor => "Delete visitor",
            Self::EditExhibition => "Edit exhibition",
            Self::EditTicket => "Edit ticket",
            Self::EditVisitor => "Edit visitor",
            Self::GetExhibitionById => "Get exhibition by ID",
            Self::GetTicketById => "Get ticket by ID",
            Self::GetVisitorById => "Get visitor by ID",
            Self::CountSoldTickets => "Get the count of tickets sold to the exhibition by ID",
            Self::CountUniqueExhibitions => {
                "Get the count of unique exhibitions visited by a visitor by ID"
            }
            Self::AverageDiscount => {
                "Get the average discount percentage visitors of exhibition by ID"
            }
            Self::ListExhibitions => "Output all exhibitions",
            Self::ListTickets => "Output all tickets",
            Self::ListVisitors => "Output all visitors",
            Self::Finish => "Finish program",
        }
    }

    /// Section heading printed before this command in the menu, if it opens a group.
    #[must_use]
    pub const fn section(self) -> Option<&'static str> {
        match self {
            Self::AddExhibition => Some("|ADD OPERATIONS|"),
            Self::DeleteExhibition => Some("|DELETE OPERATIONS|"),
            Self::EditExhibition => Some("|EDIT OPERATIONS|"),
            Self::GetExhibitionById => Some("|GET BY ID OPERATIONS|"),
            Self::CountSoldTickets => Some("|GET STATISTICS OPERATIONS|"),
            Self::ListExhibitions => Some("|OUTPUT OPERATIONS|"),
            _ => None,
        }
    }
}
