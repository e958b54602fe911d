//! Identifier derivation for parameter names

use unicode_general_category::{GeneralCategory, get_general_category};

/// Converts a raw parameter name into a lower-camel identifier.
///
/// The name is split on whitespace, control and format characters, punctuation and symbols.
/// Letters, numbers and combining marks stay in their piece. Empty pieces are dropped, the
/// first piece is lower-cased and every following piece gets an upper-case first character
/// with the rest left as written.
///
/// ```
/// use endpoint_builder_path::camel_case;
///
/// assert_eq!(camel_case("team-id"), "teamId");
/// assert_eq!(camel_case("user_id"), "userId");
/// assert_eq!(camel_case("id"), "id");
/// ```
///
/// A name with no letters, numbers or marks yields an empty identifier.
#[must_use]
pub fn camel_case(raw: &str) -> String {
    let mut pieces = raw
        .split(is_separator)
        .filter(|piece| !piece.is_empty());

    let Some(first) = pieces.next() else {
        return String::new();
    };

    let mut identifier = first.to_lowercase();
    for piece in pieces {
        let mut characters = piece.chars();
        if let Some(head) = characters.next() {
            identifier.extend(head.to_uppercase());
            identifier.push_str(characters.as_str());
        }
    }
    identifier
}

fn is_separator(character: char) -> bool {
    use GeneralCategory::{
        ClosePunctuation, ConnectorPunctuation, Control, CurrencySymbol, DashPunctuation,
        FinalPunctuation, Format, InitialPunctuation, LineSeparator, MathSymbol, ModifierSymbol,
        OpenPunctuation, OtherPunctuation, OtherSymbol, ParagraphSeparator, SpaceSeparator,
    };

    matches!(
        get_general_category(character),
        SpaceSeparator
            | LineSeparator
            | ParagraphSeparator
            | Control
            | Format
            | ConnectorPunctuation
            | DashPunctuation
            | OpenPunctuation
            | ClosePunctuation
            | InitialPunctuation
            | FinalPunctuation
            | OtherPunctuation
            | MathSymbol
            | CurrencySymbol
            | ModifierSymbol
            | OtherSymbol
    )
}
