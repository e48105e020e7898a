use chrono::prelude::*;

use super::command::{CommandRes, Executable};

const HELP_TEXT: &str = r#"Available commands:
    cat      print a file (try 'cat skills.txt')
    clear    clear the terminal screen
    date     print the current date and time
    echo     display a line of text
    git      show repository status
    help     show this help
    history  show command history
    ls       list directory contents
    uptime   how long this site has been running
    whoami   who you are talking to
"#;

/// The simulated filesystem: a flat file table plus one directory.
static FILES: [(&str, &str); 2] = [
    (
        "skills.txt",
        "React, TypeScript, Node.js, MongoDB, PostgreSQL, Python",
    ),
    (
        "about.txt",
        "Software Engineering student at AAiT, currently an AI research intern at iCog Labs.",
    ),
];

const PROJECTS_DIR: &str = "projects";

static PROJECT_ENTRIES: [&str; 5] = ["fintrack/", "moodie/", "checkmate/", "scoutai/", "nextstop/"];

fn is_projects_dir(target: &str) -> bool {
    target == PROJECTS_DIR || target == "projects/"
}

pub struct HelpCommand;

impl Executable for HelpCommand {
    fn execute(&self, _args: Vec<&str>) -> CommandRes {
        CommandRes::Output(HELP_TEXT.to_string())
    }
}

pub struct WhoAmICommand;

impl Executable for WhoAmICommand {
    fn execute(&self, args: Vec<&str>) -> CommandRes {
        if !args.is_empty() {
            return CommandRes::Err("usage: whoami".to_string());
        }
        CommandRes::Output("bethe-bayou\nSoftware Engineer | Full-Stack Developer".to_string())
    }
}

pub struct CatCommand;

impl Executable for CatCommand {
    fn execute(&self, args: Vec<&str>) -> CommandRes {
        let Some(target) = args.first() else {
            return CommandRes::Err("cat: missing file operand".to_string());
        };
        if is_projects_dir(target) {
            return CommandRes::Err(format!("cat: {target}: Is a directory"));
        }
        match FILES.iter().find(|(name, _)| name == target) {
            Some((_, content)) => CommandRes::Output((*content).to_string()),
            None => CommandRes::Err(format!("cat: {target}: No such file or directory")),
        }
    }
}

pub struct LsCommand;

impl Executable for LsCommand {
    fn execute(&self, args: Vec<&str>) -> CommandRes {
        let Some(target) = args.first() else {
            let mut entries = FILES.iter().map(|(name, _)| *name).collect::<Vec<_>>();
            entries.push("projects/");
            entries.sort();
            return CommandRes::Output(entries.join("  "));
        };
        if is_projects_dir(target) {
            return CommandRes::Output(PROJECT_ENTRIES.join("\n"));
        }
        if FILES.iter().any(|(name, _)| name == target) {
            return CommandRes::Output((*target).to_string());
        }
        CommandRes::Err(format!(
            "ls: cannot access '{target}': No such file or directory"
        ))
    }
}

pub struct GitCommand;

impl Executable for GitCommand {
    fn execute(&self, args: Vec<&str>) -> CommandRes {
        match args.first() {
            None => CommandRes::Err("usage: git <command>".to_string()),
            Some(&"status") => CommandRes::Output(
                "On branch: main\nLatest commit: Always learning, always building".to_string(),
            ),
            Some(other) => CommandRes::Err(format!("git: '{other}' is not a git command.")),
        }
    }
}

pub struct EchoCommand;

impl Executable for EchoCommand {
    fn execute(&self, args: Vec<&str>) -> CommandRes {
        let message = args
            .iter()
            .map(|s| s.replace('"', ""))
            .collect::<Vec<_>>()
            .join(" ");
        if message.contains("$(") {
            return CommandRes::Err("echo: command substitution not supported".to_string());
        }
        CommandRes::Output(message)
    }
}

pub struct DateCommand;

impl Executable for DateCommand {
    fn execute(&self, args: Vec<&str>) -> CommandRes {
        if !args.is_empty() {
            return CommandRes::Err("date: too many arguments".to_string());
        }
        CommandRes::Output(Local::now().format("%a %b %e %H:%M:%S %Y").to_string())
    }
}

pub struct UptimeCommand;

impl UptimeCommand {
    fn since_build(&self) -> String {
        let now = Local::now();
        let current_time = now.format("%H:%M:%S").to_string();

        // BUILD_TIME is stamped by build.rs
        let build_time = match DateTime::parse_from_rfc3339(env!("BUILD_TIME")) {
            Ok(dt) => dt.with_timezone(&Local),
            Err(_) => now - chrono::Duration::days(7),
        };

        let uptime = now.signed_duration_since(build_time);
        format!(
            "{current_time} up {} days, {}:{:02}, load average: 0.08, 0.12, 0.15",
            uptime.num_days(),
            uptime.num_hours() % 24,
            uptime.num_minutes() % 60,
        )
    }
}

impl Executable for UptimeCommand {
    fn execute(&self, _args: Vec<&str>) -> CommandRes {
        CommandRes::Output(self.since_build())
    }
}

pub struct SudoCommand;

impl Executable for SudoCommand {
    fn execute(&self, _args: Vec<&str>) -> CommandRes {
        CommandRes::Err(
            "bethe-bayou is not in the sudoers file. This incident will be reported.".to_string(),
        )
    }
}

pub struct UnknownCommand {
    name: String,
}

impl UnknownCommand {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

impl Executable for UnknownCommand {
    fn execute(&self, _args: Vec<&str>) -> CommandRes {
        CommandRes::Err(format!(
            "Command not found: {}\nType 'help' for available commands.",
            self.name
        ))
    }
}

/// History needs read access to terminal state, so the terminal rebuilds it
/// with the current entries before executing.
pub struct HistoryCommand<'a> {
    entries: &'a [String],
}

impl<'a> HistoryCommand<'a> {
    pub fn new(entries: &'a [String]) -> Self {
        Self { entries }
    }

    pub fn execute(&self, args: Vec<&str>) -> CommandRes {
        if !args.is_empty() {
            return CommandRes::Err("usage: history [-c]".to_string());
        }
        let listing = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{:>5}  {entry}", i + 1))
            .collect::<Vec<_>>()
            .join("\n");
        CommandRes::Output(listing)
    }
}

