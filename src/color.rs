use crate::error::AppError;

pub const RED: u16 = 0;
pub const YELLOW: u16 = 12750;
pub const GREEN: u16 = 25500;
pub const AQUAMARINE: u16 = 35903;
pub const MAGENTA: u16 = 40604;
pub const BLUE: u16 = 46920;
pub const DARKRED: u16 = 47104;
pub const PURPLE: u16 = 53311;
pub const ORANGE: u16 = 53311;
pub const PINK: u16 = 56100;

/// Resolve a human color name to a bridge hue value. Matching is
/// case-insensitive over a fixed table; unknown names are an error the
/// caller decides how to treat.
pub fn resolve_color(name: &str) -> Result<u16, AppError> {
    match name.to_lowercase().as_str() {
        "red" => Ok(RED),
        "darkred" | "dark red" => Ok(DARKRED),
        "orange" => Ok(ORANGE),
        "yellow" => Ok(YELLOW),
        "green" => Ok(GREEN),
        "blue" => Ok(BLUE),
        "pink" => Ok(PINK),
        "aqua" | "aquamarine" => Ok(AQUAMARINE),
        "purple" => Ok(PURPLE),
        "magenta" => Ok(MAGENTA),
        other => Err(AppError::ColorNotFound(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(resolve_color("RED").unwrap(), resolve_color("red").unwrap());
        assert_eq!(resolve_color("Blue").unwrap(), BLUE);
    }

    #[test]
    fn aliases_share_a_hue() {
        assert_eq!(resolve_color("aqua").unwrap(), resolve_color("aquamarine").unwrap());
        assert_eq!(resolve_color("darkred").unwrap(), resolve_color("dark red").unwrap());
    }

    #[test]
    fn unknown_name_is_an_error() {
        match resolve_color("notacolor") {
            Err(AppError::ColorNotFound(name)) => assert_eq!(name, "notacolor"),
            other => panic!("expected ColorNotFound, got {:?}", other),
        }
    }
}
