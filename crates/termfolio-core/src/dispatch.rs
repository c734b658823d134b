//! Command dispatcher.
//!
//! Parses a submitted line, resolves aliases, and builds the canned response
//! for the command. Dispatch never fails: unknown commands, bad theme
//! arguments and missing projects are ordinary replies.
//!
//! The dispatcher holds no mutable state. The `theme` command reports the
//! requested theme in [`Reply::set_theme`]; applying it is the caller's job.

use crate::commands::{self, COMMANDS, CommandRule};
use crate::content::{Content, Project};
use crate::output::{Inline, Link, Output};
use crate::theme::Theme;

/// A submitted line split into command name and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// First token, lowercased (before alias resolution).
    pub name: String,
    /// Remaining tokens, case preserved.
    pub args: Vec<String>,
}

impl ParsedCommand {
    /// Splits `input` on whitespace. Returns `None` for blank input.
    pub fn parse(input: &str) -> Option<Self> {
        let mut tokens = input.split_whitespace();
        let name = tokens.next()?.to_lowercase();
        let args = tokens.map(str::to_string).collect();
        Some(Self { name, args })
    }

    /// Canonical command name after alias resolution.
    pub fn canonical_name(&self) -> &str {
        commands::resolve_alias(&self.name)
    }
}

/// Result of dispatching one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub output: Output,
    /// Theme requested by the command, if any.
    pub set_theme: Option<Theme>,
}

impl Reply {
    fn output(output: Output) -> Self {
        Self {
            output,
            set_theme: None,
        }
    }
}

/// Maps commands to responses built from static text and [`Content`].
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    content: Content,
}

impl Dispatcher {
    pub fn new(content: Content) -> Self {
        Self { content }
    }

    /// Parses and dispatches a raw input line.
    pub fn dispatch(&self, input: &str) -> Reply {
        match ParsedCommand::parse(input) {
            Some(parsed) => self.dispatch_parsed(&parsed),
            None => Reply::output(Output::empty()),
        }
    }

    /// Dispatches an already parsed command.
    pub fn dispatch_parsed(&self, parsed: &ParsedCommand) -> Reply {
        let canonical = parsed.canonical_name();
        let Some(command) = commands::find_command(canonical) else {
            tracing::debug!(name = %parsed.name, "unknown command");
            return Reply::output(not_found(&parsed.name));
        };

        tracing::debug!(name = %parsed.name, canonical, "dispatching command");
        match command.rule {
            CommandRule::Help => Reply::output(help_output()),
            CommandRule::About => Reply::output(self.about()),
            CommandRule::Hello => Reply::output(Output::text(
                "Hello there! 👋 Welcome to my terminal portfolio!",
            )),
            CommandRule::Sudo => {
                Reply::output(Output::text("⛔ Permission denied: You are not root 😎"))
            }
            CommandRule::Theme => theme(&parsed.args),
            CommandRule::Projects => Reply::output(self.projects()),
            CommandRule::Project => Reply::output(self.project(&parsed.args)),
            CommandRule::Resume => Reply::output(Output::Link(Link::download(
                "Click here to download resume",
                self.content.profile.resume_url.clone(),
            ))),
            CommandRule::Contact => Reply::output(self.contact()),
            CommandRule::Matrix => {
                Reply::output(Output::text("Wake up, Neo... The Matrix has you. 🟩"))
            }
            CommandRule::Goodbye => Reply::output(Output::text(
                "In case I don't see you, good afternoon, good evening, and goodnight!",
            )),
            // The controller resets the transcript itself; nothing to show here.
            CommandRule::Clear => Reply::output(Output::empty()),
        }
    }

    fn about(&self) -> Output {
        let profile = &self.content.profile;
        let mut blocks = vec![Output::paragraph(vec![
            Inline::plain("Hello, I'm "),
            Inline::strong(profile.name.clone()),
            Inline::plain("."),
        ])];
        blocks.extend(profile.bio.iter().map(|paragraph| Output::text(paragraph.clone())));
        blocks.push(Output::paragraph(vec![
            Inline::plain("Type "),
            Inline::code("help"),
            Inline::plain(" to see what else you can do!"),
        ]));
        Output::Composite(blocks)
    }

    fn projects(&self) -> Output {
        let items = self.content.projects.iter().map(project_summary).collect();
        Output::Composite(vec![Output::text("My Projects:"), Output::List(items)])
    }

    fn project(&self, args: &[String]) -> Output {
        let name = args.join(" ");
        match self.content.find_project(&name) {
            Some(project) => Output::Composite(vec![
                Output::paragraph(vec![Inline::strong(project.name.clone())]),
                Output::text(project.description.clone()),
                Output::Link(Link::external("Project Link", project.url.clone())),
            ]),
            None => Output::text("Project not found."),
        }
    }

    fn contact(&self) -> Output {
        let contact = &self.content.contact;
        Output::Composite(vec![
            Output::paragraph(vec![
                Inline::plain("Email: "),
                Inline::Link(Link::mail(&contact.email)),
            ]),
            Output::paragraph(vec![
                Inline::plain("GitHub: "),
                Inline::Link(Link::external(contact.github.clone(), contact.github.clone())),
            ]),
            Output::paragraph(vec![
                Inline::plain("LinkedIn: "),
                Inline::Link(Link::external(
                    contact.linkedin.clone(),
                    contact.linkedin.clone(),
                )),
            ]),
        ])
    }
}

fn project_summary(project: &Project) -> Output {
    Output::Composite(vec![
        Output::paragraph(vec![
            Inline::strong(project.name.clone()),
            Inline::plain(format!(": {}", project.description)),
        ]),
        Output::Link(Link::external("[link]", project.url.clone())),
    ])
}

fn theme(args: &[String]) -> Reply {
    match args.first().and_then(|arg| Theme::from_arg(arg)) {
        Some(theme) => Reply {
            output: Output::paragraph(vec![
                Inline::plain("Theme switched to "),
                Inline::strong(theme.name()),
                Inline::plain("."),
            ]),
            set_theme: Some(theme),
        },
        None => Reply::output(Output::paragraph(vec![
            Inline::plain("Invalid theme. Use "),
            Inline::code("theme dark"),
            Inline::plain(" or "),
            Inline::code("theme light"),
            Inline::plain("."),
        ])),
    }
}

fn not_found(name: &str) -> Output {
    Output::paragraph(vec![
        Inline::plain("Command not found: "),
        Inline::strong(name),
    ])
}

fn command_line(usage: &str, description: &str) -> Output {
    Output::paragraph(vec![
        Inline::code(usage),
        Inline::plain(format!(" - {description}")),
    ])
}

/// Listing of every command with usage and description.
pub fn help_output() -> Output {
    let items = COMMANDS
        .iter()
        .map(|command| {
            let aliases = command.aliases();
            if aliases.is_empty() {
                command_line(command.usage, command.description)
            } else {
                let description = format!("{} (alias: {})", command.description, aliases.join(", "));
                command_line(command.usage, &description)
            }
        })
        .collect();
    Output::Composite(vec![Output::text("Available commands:"), Output::List(items)])
}

/// Banner shown when the session starts and after `clear`.
pub fn welcome_output() -> Output {
    let items = COMMANDS
        .iter()
        .filter_map(|command| {
            command
                .banner
                .map(|description| command_line(command.usage, description))
        })
        .collect();
    Output::Composite(vec![
        Output::text("👋 Welcome to my terminal portfolio!"),
        Output::text("Here are some commands you can try:"),
        Output::List(items),
    ])
}

/// Listing shown when tab completion is ambiguous.
pub fn completion_output(matches: &[&str]) -> Output {
    Output::Composite(vec![
        Output::text("Available matches:"),
        Output::List(matches.iter().map(|name| Output::text(*name)).collect()),
    ])
}
