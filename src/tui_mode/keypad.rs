pub const CLEAR_LABEL: &str = "CLR";
pub const CALCULATE_LABEL: &str = "=";

pub const LAYOUT: [[&str; 4]; 5] = [
    ["(", ")", "^", "/"],
    ["7", "8", "9", "*"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "+"],
    [CLEAR_LABEL, "0", ".", CALCULATE_LABEL],
];

#[derive(Debug, PartialEq, Eq)]
pub enum Button {
    /// Inserts its label at the cursor.
    Insert(&'static str),
    Clear,
    Calculate,
}

pub fn button(label: &str) -> Option<Button> {
    match label {
        CLEAR_LABEL => Some(Button::Clear),
        CALCULATE_LABEL => Some(Button::Calculate),
        _ => LAYOUT
            .iter()
            .flatten()
            .find(|&&key| key == label)
            .map(|&key| Button::Insert(key)),
    }
}
