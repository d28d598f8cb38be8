/// The columns a timesheet is made of, in the order they are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Class,     // "Class"
    Date,      // "Date"
    StartTime, // "Start time"
    EndTime,   // "End time"
    Hour,      // "Hour"
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Class,
        Field::Date,
        Field::StartTime,
        Field::EndTime,
        Field::Hour,
    ];

    /// Header text expected in the sheet
    pub fn title(&self) -> &'static str {
        match self {
            Field::Class => "Class",
            Field::Date => "Date",
            Field::StartTime => "Start time",
            Field::EndTime => "End time",
            Field::Hour => "Hour",
        }
    }

    /// Case-insensitive header match, surrounding blanks ignored
    pub fn matches_title(&self, text: &str) -> bool {
        text.trim().eq_ignore_ascii_case(self.title())
    }
}
