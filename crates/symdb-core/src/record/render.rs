use super::{HEADER_SEPARATOR, ParsedRecord, SYMBOL_LINE_COUNT};

/// Placeholder for the type tokens of a member line, which parsing discards
const MEMBER_TYPE_PLACEHOLDER: &str = "?";

impl ParsedRecord {
    /// Whether rendering keeps every symbol in the symbol section
    ///
    /// Member lines are only classified correctly on re-parse when exactly
    /// [`SYMBOL_LINE_COUNT`] symbol lines precede them.
    pub fn is_renderable(&self) -> bool {
        self.structs.is_empty() || self.symbol_value_count() == SYMBOL_LINE_COUNT
    }

    /// Render back into the `info.txt` text format
    pub fn to_info_string(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}{}{}\n", self.os, HEADER_SEPARATOR, self.version()));

        for (name, values) in &self.symbols {
            for hex in values {
                out.push_str(&format!("{} {}\n", hex, name));
            }
        }

        for (member, values) in &self.structs {
            for hex in values {
                out.push_str(&format!("{} {} {}\n", hex, MEMBER_TYPE_PLACEHOLDER, member));
            }
        }

        out
    }
}
