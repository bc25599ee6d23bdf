//! Configuration command recognition
//!
//! A line is judged to be an IOS command by a fixed keyword-prefix heuristic,
//! not a grammar. False positives and negatives are expected; the contract is
//! determinism and the exact keyword list below.

/// Keywords a command line may start with, case-insensitively.
pub const COMMAND_KEYWORDS: &[&str] = &[
    "enable",
    "configure",
    "terminal",
    "interface",
    "ip",
    "router",
    "network",
    "area",
    "hostname",
    "vlan",
    "switchport",
    "access-list",
    "permit",
    "deny",
    "shutdown",
    "no shutdown",
    "exit",
    "end",
    "show",
    "debug",
    "copy",
    "write",
    "erase",
    "reload",
];

/// Check whether a trimmed line is a configuration command.
pub fn is_config_command(line: &str) -> bool {
    let lower = line.to_lowercase();
    COMMAND_KEYWORDS.iter().any(|kw| lower.starts_with(kw))
}

/// Extract all command lines from normalized text, in order. Empty lines and
/// `#`/`//` comments are filtered before classification.
pub fn extract_commands(text: &str) -> Vec<String> {
    let commands: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with("//"))
        .filter(|line| is_config_command(line))
        .map(str::to_string)
        .collect();

    tracing::debug!(command_count = commands.len(), "Commands extracted");
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizes_keyword_prefixes() {
        assert!(is_config_command("enable"));
        assert!(is_config_command("Router ospf 1"));
        assert!(is_config_command("ip address 192.168.1.1 255.255.255.0"));
        assert!(is_config_command("no shutdown"));
    }

    #[test]
    fn test_rejects_prose() {
        assert!(!is_config_command("First, connect to the device"));
        assert!(!is_config_command("This enables OSPF on the router"));
    }

    #[test]
    fn test_same_line_same_verdict() {
        let line = "switchport mode access";
        assert_eq!(is_config_command(line), is_config_command(line));
    }

    #[test]
    fn test_extraction_skips_comments_and_blanks() {
        let text = "# setup\n\nenable\n// privileged\nconfigure terminal";
        assert_eq!(extract_commands(text), vec!["enable", "configure terminal"]);
    }
}
