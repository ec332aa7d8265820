//! WhatsApp hand-off link construction.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

/// Build a `wa.me` link that opens a chat with the estimate text prefilled.
///
/// The phone number is reduced to its digits, so `+52 1 55 1234 5678` and
/// `5215512345678` produce the same link.
pub fn handoff_link(phone: &str, text: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    let encoded = utf8_percent_encode(text, NON_ALPHANUMERIC);
    format!("https://wa.me/{digits}?text={encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_is_reduced_to_digits() {
        let link = handoff_link("+52 1 55 1234 5678", "hola");
        assert!(link.starts_with("https://wa.me/5215512345678?text="));
    }

    #[test]
    fn text_is_percent_encoded() {
        let link = handoff_link("5215512345678", "Hola Ambienta");
        assert_eq!(link, "https://wa.me/5215512345678?text=Hola%20Ambienta");
    }

    #[test]
    fn non_ascii_text_survives_encoding() {
        let link = handoff_link("5215512345678", "Cotización: baño");
        assert!(link.contains("Cotizaci%C3%B3n%3A%20ba%C3%B1o"));
    }
}
