//! Command syntax highlighting
//!
//! Classifies the words of a command line into typed spans so the command
//! block can be colorized by any front end. Pure; never alters the text.

use regex::Regex;

/// Words highlighted as IOS keywords.
pub const HIGHLIGHT_KEYWORDS: &[&str] = &[
    "enable",
    "configure",
    "terminal",
    "router",
    "interface",
    "network",
    "area",
    "ip",
    "no",
    "shutdown",
    "exit",
    "end",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    IpAddress,
    Number,
    Keyword,
    CommandName,
    Plain,
}

/// One classified word of a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandToken {
    pub text: String,
    pub kind: TokenKind,
}

/// Tokenize one command line. Classification precedence per word: IP
/// literal, number, keyword, then leading command name.
pub fn highlight_line(line: &str) -> Vec<CommandToken> {
    let ip = Regex::new(r"^(?:\d{1,3}\.){3}\d{1,3}(?:/\d{1,2})?$").unwrap();

    line.split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            let kind = if ip.is_match(word) {
                TokenKind::IpAddress
            } else if word.chars().all(|c| c.is_ascii_digit()) {
                TokenKind::Number
            } else if HIGHLIGHT_KEYWORDS
                .iter()
                .any(|kw| word.eq_ignore_ascii_case(kw))
            {
                TokenKind::Keyword
            } else if i == 0 {
                TokenKind::CommandName
            } else {
                TokenKind::Plain
            };
            CommandToken {
                text: word.to_string(),
                kind,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<TokenKind> {
        highlight_line(line).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_ip_address_wins_over_number() {
        assert_eq!(
            kinds("ip address 192.168.1.1 255.255.255.0"),
            vec![
                TokenKind::Keyword,
                TokenKind::Plain,
                TokenKind::IpAddress,
                TokenKind::IpAddress,
            ]
        );
    }

    #[test]
    fn test_leading_keyword_stays_keyword() {
        // "router" is in the keyword list even at position 0
        assert_eq!(
            kinds("router ospf 1"),
            vec![TokenKind::Keyword, TokenKind::Plain, TokenKind::Number]
        );
    }

    #[test]
    fn test_unknown_first_word_is_command_name() {
        assert_eq!(
            kinds("switchport mode access"),
            vec![TokenKind::CommandName, TokenKind::Plain, TokenKind::Plain]
        );
    }

    #[test]
    fn test_text_is_never_altered() {
        let line = "no shutdown";
        let joined = highlight_line(line)
            .iter()
            .map(|t| t.text.clone())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(joined, line);
    }
}
