//! Text to Morse code conversion.

/// Returns the Morse code for a single character, or `None` if the
/// character has no entry in the table. Keys are uppercase; a space
/// maps to the word separator `/`.
pub fn token(c: char) -> Option<&'static str> {
    let code = match c {
        'A' => ".-",
        'B' => "-...",
        'C' => "-.-.",
        'D' => "-..",
        'E' => ".",
        'F' => "..-.",
        'G' => "--.",
        'H' => "....",
        'I' => "..",
        'J' => ".---",
        'K' => "-.-",
        'L' => ".-..",
        'M' => "--",
        'N' => "-.",
        'O' => "---",
        'P' => ".--.",
        'Q' => "--.-",
        'R' => ".-.",
        'S' => "...",
        'T' => "-",
        'U' => "..-",
        'V' => "...-",
        'W' => ".--",
        'X' => "-..-",
        'Y' => "-.--",
        'Z' => "--..",
        '0' => "-----",
        '1' => ".----",
        '2' => "..---",
        '3' => "...--",
        '4' => "....-",
        '5' => ".....",
        '6' => "-....",
        '7' => "--...",
        '8' => "---..",
        '9' => "----.",
        '.' => ".-.-.-",
        ',' => "--..--",
        '?' => "..--..",
        ' ' => "/",
        _ => return None,
    };
    Some(code)
}

/// Encodes a full text into a space-delimited Morse string.
///
/// Each input character contributes exactly one token, in order:
/// its table code after ASCII uppercasing, or an empty token when
/// the character is unmapped. Empty input yields an empty string.
pub fn encode(text: &str) -> String {
    text.chars()
        .map(|c| token(c.to_ascii_uppercase()).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lookup() {
        assert_eq!(token('A'), Some(".-"));
        assert_eq!(token('0'), Some("-----"));
        assert_eq!(token('?'), Some("..--.."));
        assert_eq!(token(' '), Some("/"));
        assert_eq!(token('!'), None);
        // Lowercase keys are not in the table; callers uppercase first.
        assert_eq!(token('a'), None);
    }

    #[test]
    fn encodes_empty_input_to_empty_string() {
        assert_eq!(encode(""), "");
    }

    #[test]
    fn encodes_sos() {
        assert_eq!(encode("SOS"), "... --- ...");
    }

    #[test]
    fn uppercases_before_lookup() {
        assert_eq!(encode("sos"), encode("SOS"));
    }

    #[test]
    fn unmapped_characters_become_empty_tokens() {
        // 'H','I',space,'T','H','E','R','E','!' with '!' unmapped.
        assert_eq!(encode("Hi There!"), ".... .. / - .... . .-. . ");
    }

    #[test]
    fn one_token_per_input_character() {
        for text in ["hello world", "a?b,c.", "  ", "x!y!z"] {
            let morse = encode(text);
            let tokens = morse.split(' ').count();
            assert_eq!(tokens, text.chars().count(), "text: {text:?}");
        }
    }

    #[test]
    fn word_spaces_become_separators() {
        assert_eq!(encode("E E"), ". / .");
    }
}
