//! Command table.
//!
//! Canonical commands, their aliases, and the rule that builds each response.
//! The table is static; the dispatcher only ever reads it.

/// Response-building rule for a canonical command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandRule {
    About,
    Projects,
    Project,
    Resume,
    Contact,
    Clear,
    Help,
    Theme,
    Hello,
    Sudo,
    Matrix,
    Goodbye,
}

/// Definition of a command.
#[derive(Debug, Clone)]
pub struct Command {
    /// Canonical name (lowercase).
    pub name: &'static str,
    /// Usage shown in listings, e.g. "project <name>".
    pub usage: &'static str,
    /// Short description shown by `help`.
    pub description: &'static str,
    /// Wording in the welcome banner; `None` keeps the command out of it.
    pub banner: Option<&'static str>,
    /// Offered by tab completion.
    pub completable: bool,
    pub rule: CommandRule,
}

impl Command {
    /// Returns the aliases that resolve to this command.
    pub fn aliases(&self) -> Vec<&'static str> {
        ALIASES
            .iter()
            .filter(|(_, canonical)| *canonical == self.name)
            .map(|(alias, _)| *alias)
            .collect()
    }
}

/// Available commands, in listing order.
pub const COMMANDS: &[Command] = &[
    Command {
        name: "about",
        usage: "about",
        description: "Show developer bio",
        banner: Some("Show developer bio"),
        completable: true,
        rule: CommandRule::About,
    },
    Command {
        name: "projects",
        usage: "projects",
        description: "List all projects",
        banner: Some("List all projects"),
        completable: true,
        rule: CommandRule::Projects,
    },
    Command {
        name: "project",
        usage: "project <name>",
        description: "Show details of a project",
        banner: Some("Show project details"),
        completable: true,
        rule: CommandRule::Project,
    },
    Command {
        name: "resume",
        usage: "resume",
        description: "Download/view resume",
        banner: Some("Download/view resume"),
        completable: true,
        rule: CommandRule::Resume,
    },
    Command {
        name: "contact",
        usage: "contact",
        description: "Developer's contact info",
        banner: Some("Developer's contact info"),
        completable: true,
        rule: CommandRule::Contact,
    },
    Command {
        name: "clear",
        usage: "clear",
        description: "Clear terminal",
        banner: Some("Reset the terminal"),
        completable: true,
        rule: CommandRule::Clear,
    },
    Command {
        name: "help",
        usage: "help",
        description: "Show this help message",
        banner: Some("Show all commands"),
        completable: true,
        rule: CommandRule::Help,
    },
    Command {
        name: "theme",
        usage: "theme dark|light",
        description: "Switch UI theme",
        banner: Some("Toggle theme"),
        completable: true,
        rule: CommandRule::Theme,
    },
    Command {
        name: "hello",
        usage: "hello",
        description: "Greet the user",
        banner: None,
        completable: false,
        rule: CommandRule::Hello,
    },
    Command {
        name: "sudo",
        usage: "sudo",
        description: "Try to run a command as root (spoof)",
        banner: None,
        completable: true,
        rule: CommandRule::Sudo,
    },
    Command {
        name: "matrix",
        usage: "matrix",
        description: "A fun Easter egg",
        banner: None,
        completable: true,
        rule: CommandRule::Matrix,
    },
    Command {
        name: "goodbye",
        usage: "goodbye",
        description: "Say bye to the user",
        banner: None,
        completable: false,
        rule: CommandRule::Goodbye,
    },
];

/// Alternate names (alias, canonical).
pub const ALIASES: &[(&str, &str)] = &[
    ("ls", "projects"),
    ("cv", "resume"),
    ("mail", "contact"),
    ("info", "about"),
];

/// Maps an alias to its canonical name; other names pass through unchanged.
pub fn resolve_alias(name: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map_or(name, |(_, canonical)| *canonical)
}

/// Looks up a canonical command by exact name.
pub fn find_command(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|command| command.name == name)
}

/// Returns completable command names starting with `prefix`, in table order.
///
/// The prefix is compared as typed (no lowercasing) and aliases are never
/// offered.
pub fn complete(prefix: &str) -> Vec<&'static str> {
    COMMANDS
        .iter()
        .filter(|command| command.completable && command.name.starts_with(prefix))
        .map(|command| command.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(name: &str) -> &'static Command {
        find_command(name).unwrap()
    }

    #[test]
    fn test_resolve_alias() {
        assert_eq!(resolve_alias("ls"), "projects");
        assert_eq!(resolve_alias("cv"), "resume");
        assert_eq!(resolve_alias("mail"), "contact");
        assert_eq!(resolve_alias("info"), "about");
        assert_eq!(resolve_alias("help"), "help");
        assert_eq!(resolve_alias("bogus"), "bogus");
    }

    #[test]
    fn test_every_alias_targets_a_command() {
        for (alias, canonical) in ALIASES {
            assert!(find_command(canonical).is_some(), "{alias} -> {canonical}");
            assert!(find_command(alias).is_none(), "{alias} shadows a command");
        }
    }

    #[test]
    fn test_command_names_are_lowercase_and_unique() {
        for (idx, cmd) in COMMANDS.iter().enumerate() {
            assert_eq!(cmd.name, cmd.name.to_lowercase());
            assert!(
                COMMANDS[idx + 1..].iter().all(|other| other.name != cmd.name),
                "duplicate command {}",
                cmd.name
            );
        }
    }

    #[test]
    fn test_complete_multiple_matches_in_table_order() {
        assert_eq!(complete("pro"), vec!["projects", "project"]);
    }

    #[test]
    fn test_complete_unique_prefix() {
        assert_eq!(complete("hel"), vec!["help"]);
        assert_eq!(complete("th"), vec!["theme"]);
    }

    #[test]
    fn test_complete_skips_aliases_and_small_talk() {
        assert!(complete("ls").is_empty());
        assert!(complete("cv").is_empty());
        assert!(complete("good").is_empty());
        assert!(!complete("h").contains(&"hello"));
    }

    #[test]
    fn test_complete_easter_eggs() {
        assert_eq!(complete("ma"), vec!["matrix"]);
        assert_eq!(complete("su"), vec!["sudo"]);
    }

    #[test]
    fn test_complete_is_case_sensitive() {
        assert!(complete("HEL").is_empty());
    }

    #[test]
    fn test_complete_empty_prefix_offers_every_completable() {
        assert_eq!(
            complete(""),
            vec![
                "about", "projects", "project", "resume", "contact", "clear", "help", "theme",
                "sudo", "matrix",
            ]
        );
    }

    #[test]
    fn test_command_aliases() {
        assert_eq!(command("projects").aliases(), vec!["ls"]);
        assert_eq!(command("about").aliases(), vec!["info"]);
        assert!(command("theme").aliases().is_empty());
    }
}
