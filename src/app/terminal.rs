mod command;
mod tools;

pub use command::CommandRes;

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use leptos::{either::Either, ev::KeyboardEvent, html, prelude::*};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::mode::use_dev_mode;

use command::{Cmd, Executable};
use tools::{
    CatCommand, DateCommand, EchoCommand, GitCommand, HelpCommand, HistoryCommand, LsCommand,
    SudoCommand, UnknownCommand, UptimeCommand, WhoAmICommand,
};

static HISTORY_SIZE: usize = 1000;

/// Scripted playback for normal mode; developer mode gets free input.
static DEMO_SCRIPT: [&str; 6] = [
    "whoami",
    "cat skills.txt",
    "ls projects/",
    "git status",
    "echo $PATH",
    "date",
];

pub struct Terminal {
    history: VecDeque<String>,
    env_vars: HashMap<String, String>,
    commands: HashMap<Cmd, Box<dyn Executable>>,
}

impl Terminal {
    pub fn new(history: Option<VecDeque<String>>) -> Self {
        let history = history.unwrap_or_default();
        let mut env_vars = HashMap::new();
        env_vars.insert("USER".to_string(), "bethe-bayou".to_string());
        env_vars.insert("HOME".to_string(), "/home/bethe".to_string());
        env_vars.insert(
            "PATH".to_string(),
            "/usr/bin:/usr/local/bin:/opt/homebrew/bin".to_string(),
        );
        env_vars.insert("VERSION".to_string(), env!("CARGO_PKG_VERSION").to_string());

        let mut terminal = Self {
            history,
            env_vars,
            commands: HashMap::new(),
        };
        terminal.initialize_commands();
        terminal
    }

    fn initialize_commands(&mut self) {
        self.commands.insert(Cmd::Help, Box::new(HelpCommand));
        self.commands.insert(Cmd::WhoAmI, Box::new(WhoAmICommand));
        self.commands.insert(Cmd::Cat, Box::new(CatCommand));
        self.commands.insert(Cmd::Ls, Box::new(LsCommand));
        self.commands.insert(Cmd::Git, Box::new(GitCommand));
        self.commands.insert(Cmd::Echo, Box::new(EchoCommand));
        self.commands.insert(Cmd::Date, Box::new(DateCommand));
        self.commands.insert(Cmd::Uptime, Box::new(UptimeCommand));
        self.commands.insert(Cmd::Sudo, Box::new(SudoCommand));
        // clear, history, and unknown commands are handled in handle_command
    }

    #[cfg(feature = "hydrate")]
    pub fn set_history(&mut self, history: VecDeque<String>) {
        self.history = history;
    }

    #[cfg(feature = "hydrate")]
    pub fn history(&self) -> VecDeque<String> {
        self.history.clone()
    }

    fn expand_env_vars(&self, input: &str) -> String {
        let mut result = input.to_string();

        while let Some(start) = result.find('$') {
            let remaining = &result[start + 1..];
            let end = remaining
                .find(|c: char| !c.is_alphanumeric() && c != '_')
                .unwrap_or(remaining.len());
            let var_name = &remaining[..end];
            if var_name.is_empty() {
                break;
            }

            let var_ref = format!("${var_name}");
            let value = self
                .env_vars
                .get(var_name)
                .cloned()
                // unknown variables expand to nothing
                .unwrap_or_default();
            result = result.replace(&var_ref, &value);
        }
        result
    }

    pub fn handle_command(&mut self, input: &str) -> CommandRes {
        if input.trim().is_empty() {
            return CommandRes::Nothing;
        }
        self.history.push_back(input.to_string());
        if self.history.len() > HISTORY_SIZE {
            self.history.pop_front();
        }

        let expanded = self.expand_env_vars(input);
        let mut parts = expanded.split_whitespace();
        let cmd_text = if let Some(word) = parts.next() {
            word
        } else {
            unreachable!("Should have returned early if empty");
        };
        let cmd = Cmd::from(cmd_text);

        if let Some(command) = self.commands.get(&cmd) {
            return command.execute(parts.collect());
        }

        match cmd {
            Cmd::Clear => CommandRes::Clear,
            // The history -c flag requires mutable access to clear the
            // terminal's entry list, which cannot be provided through the
            // immutable Executable trait interface, so history runs here.
            Cmd::History => {
                let args: Vec<&str> = parts.collect();
                if args.len() == 1 && args[0] == "-c" {
                    self.history.clear();
                    return CommandRes::Output("history cleared".to_string());
                }
                self.history.make_contiguous();
                HistoryCommand::new(self.history.as_slices().0).execute(args)
            }
            _ => UnknownCommand::new(cmd_text.to_string()).execute(parts.collect()),
        }
    }

    pub fn handle_start_hist(&self, input: &str) -> Vec<String> {
        if input.trim().is_empty() {
            self.history.iter().cloned().collect()
        } else {
            self.history
                .iter()
                .filter(|s| s.starts_with(input))
                .cloned()
                .collect()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Input,
    Output,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TerminalLine {
    kind: LineKind,
    text: String,
}

#[derive(Debug, Clone)]
struct HistState {
    original: String,
    opts: Arc<Vec<String>>,
    index: usize,
}

#[component]
pub fn InteractiveTerminal() -> impl IntoView {
    let is_dev = use_dev_mode();
    let terminal = StoredValue::new(Arc::new(Mutex::new(Terminal::new(None))));
    let (lines, set_lines) = signal(Vec::<TerminalLine>::new());
    let (demo_step, set_demo_step) = signal(0usize);
    let (hist_state, set_hist_state) = signal(None::<HistState>);
    let input_ref = NodeRef::<html::Input>::new();

    #[cfg(feature = "hydrate")]
    let (cmd_history, set_cmd_history, _) =
        use_local_storage::<Vec<String>, JsonSerdeWasmCodec>("terminal_history");

    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| {
            let history = cmd_history.get_untracked();
            terminal.with_value(|t| {
                t.lock()
                    .expect("should be able to unlock terminal")
                    .set_history(history.into());
            });
        },
        true,
    );

    let run_command = move |input: String| {
        let res = terminal.with_value(|t| {
            t.lock()
                .expect("should be able to unlock terminal")
                .handle_command(&input)
        });
        match res {
            CommandRes::Clear => set_lines.update(|l| l.clear()),
            res => set_lines.update(|l| {
                l.push(TerminalLine {
                    kind: LineKind::Input,
                    text: input,
                });
                match res {
                    CommandRes::Output(s) => l.push(TerminalLine {
                        kind: LineKind::Output,
                        text: s,
                    }),
                    CommandRes::Err(s) => l.push(TerminalLine {
                        kind: LineKind::Error,
                        text: s,
                    }),
                    CommandRes::Clear | CommandRes::Nothing => {}
                }
            }),
        }

        #[cfg(feature = "hydrate")]
        terminal.with_value(|t| {
            set_cmd_history.set(
                t.lock()
                    .expect("should be able to unlock terminal")
                    .history()
                    .into_iter()
                    .collect(),
            );
        });
    };

    let run_demo = move |_| {
        let step = demo_step.get_untracked();
        run_command(DEMO_SCRIPT[step].to_string());
        set_demo_step.set((step + 1) % DEMO_SCRIPT.len());
    };

    let keydown_handler = move |ev: KeyboardEvent| {
        let el = if let Some(el) = input_ref.get_untracked() {
            el
        } else {
            return;
        };
        match ev.key().as_ref() {
            "ArrowUp" => {
                ev.prevent_default();
                let HistState {
                    original,
                    opts,
                    index,
                } = hist_state.get_untracked().unwrap_or_else(|| {
                    let original = el.value();
                    let opts = terminal.with_value(|t| {
                        t.lock()
                            .expect("should be able to unlock terminal")
                            .handle_start_hist(&original)
                    });
                    let index = opts.len();
                    HistState {
                        original,
                        opts: opts.into(),
                        index,
                    }
                });
                if index == 0 {
                    set_hist_state.set(Some(HistState {
                        original,
                        opts,
                        index,
                    }));
                    return;
                }
                let index = index - 1;
                el.set_value(&opts[index]);
                set_hist_state.set(Some(HistState {
                    original,
                    opts,
                    index,
                }));
            }
            "ArrowDown" => {
                let Some(HistState {
                    original,
                    opts,
                    index,
                }) = hist_state.get_untracked()
                else {
                    return;
                };
                ev.prevent_default();
                let index = index + 1;
                if index >= opts.len() {
                    el.set_value(&original);
                    set_hist_state.set(None);
                    return;
                }
                el.set_value(&opts[index]);
                set_hist_state.set(Some(HistState {
                    original,
                    opts,
                    index,
                }));
            }
            _ => {
                if hist_state.get_untracked().is_some() {
                    set_hist_state.set(None);
                }
            }
        }
    };

    view! {
        <section id="terminal" class="py-6">
            <div class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto">
                    <div class="text-center mb-6">
                        <h2 class="text-2xl font-bold mb-2 uppercase tracking-wider">"Terminal"</h2>
                        <p class="text-sm text-muted">
                            {move || {
                                if is_dev.get() {
                                    "Full shell access - type 'help' for commands"
                                } else {
                                    "A peek at my command line"
                                }
                            }}
                        </p>
                    </div>

                    <div class="border-2 border-foreground/30 bg-background font-mono text-sm rounded-lg dev-mode:rounded-none overflow-hidden">
                        <div class="flex items-center gap-2 px-4 py-2 bg-foreground/10 border-b-2 border-foreground/20">
                            <span class="w-3 h-3 rounded-full bg-red inline-block"></span>
                            <span class="w-3 h-3 rounded-full bg-yellow inline-block"></span>
                            <span class="w-3 h-3 rounded-full bg-green inline-block"></span>
                            <span class="ml-2 text-xs text-muted">"bethe@portfolio: ~"</span>
                        </div>

                        <div class="p-4 max-h-80 overflow-y-auto space-y-1">
                            {move || {
                                lines
                                    .get()
                                    .into_iter()
                                    .map(|line| match line.kind {
                                        LineKind::Input => {
                                            view! {
                                                <div>
                                                    <span class="text-green">"$ "</span>
                                                    {line.text}
                                                </div>
                                            }
                                                .into_any()
                                        }
                                        LineKind::Output => {
                                            view! {
                                                <pre class="whitespace-pre-wrap">{line.text}</pre>
                                            }
                                                .into_any()
                                        }
                                        LineKind::Error => {
                                            view! {
                                                <pre class="whitespace-pre-wrap text-red">
                                                    {line.text}
                                                </pre>
                                            }
                                                .into_any()
                                        }
                                    })
                                    .collect_view()
                            }}
                            {move || {
                                lines
                                    .get()
                                    .is_empty()
                                    .then(|| {
                                        view! {
                                            <div class="text-muted">
                                                {if is_dev.get() {
                                                    format!(
                                                        "Type a command below to get started ({} available).",
                                                        Cmd::all().len(),
                                                    )
                                                } else {
                                                    "Press run to replay a session.".to_string()
                                                }}
                                            </div>
                                        }
                                    })
                            }}
                        </div>

                        <div class="border-t-2 border-foreground/20 p-3">
                            {move || {
                                if is_dev.get() {
                                    Either::Left(
                                        view! {
                                            <form on:submit=move |ev| {
                                                ev.prevent_default();
                                                let el = if let Some(el) = input_ref.get_untracked() {
                                                    el
                                                } else {
                                                    return;
                                                };
                                                run_command(el.value());
                                                el.set_value("");
                                                set_hist_state.set(None);
                                            }>
                                                <div class="flex items-center gap-2">
                                                    <span class="text-green">"$"</span>
                                                    <input
                                                        node_ref=input_ref
                                                        on:keydown=keydown_handler
                                                        type="text"
                                                        placeholder="Type a command (try 'help')"
                                                        autocapitalize="none"
                                                        class="flex-1 bg-transparent focus:outline-none"
                                                    />
                                                </div>
                                            </form>
                                        },
                                    )
                                } else {
                                    Either::Right(
                                        view! {
                                            <div class="flex items-center justify-between">
                                                <span class="text-xs text-muted">
                                                    {move || {
                                                        format!(
                                                            "next: {}",
                                                            DEMO_SCRIPT[demo_step.get()],
                                                        )
                                                    }}
                                                </span>
                                                <button
                                                    class="px-3 py-1.5 text-xs border border-foreground/30 rounded-md hover:bg-foreground hover:text-background transition-colors"
                                                    on:click=run_demo
                                                >
                                                    "▶ Run"
                                                </button>
                                            </div>
                                        },
                                    )
                                }
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whoami_reports_the_owner() {
        let mut terminal = Terminal::new(None);
        let res = terminal.handle_command("whoami");
        assert_eq!(
            res,
            CommandRes::Output(
                "bethe-bayou\nSoftware Engineer | Full-Stack Developer".to_string()
            )
        );
    }

    #[test]
    fn cat_prints_known_files() {
        let mut terminal = Terminal::new(None);
        let res = terminal.handle_command("cat skills.txt");
        match res {
            CommandRes::Output(text) => assert!(text.contains("TypeScript")),
            other => panic!("expected output, got {other:?}"),
        }
    }

    #[test]
    fn cat_rejects_directories_and_missing_files() {
        let mut terminal = Terminal::new(None);

        let dir = terminal.handle_command("cat projects/");
        assert!(dir.is_error());
        match dir {
            CommandRes::Err(text) => assert!(text.contains("Is a directory")),
            other => panic!("expected error, got {other:?}"),
        }

        let missing = terminal.handle_command("cat nonexistent.txt");
        assert!(missing.is_error());
        match missing {
            CommandRes::Err(text) => assert!(text.contains("No such file or directory")),
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn ls_lists_the_projects_directory() {
        let mut terminal = Terminal::new(None);
        let res = terminal.handle_command("ls projects/");
        match res {
            CommandRes::Output(text) => {
                assert!(text.contains("fintrack/"));
                assert!(text.contains("scoutai/"));
            }
            other => panic!("expected output, got {other:?}"),
        }

        let root = terminal.handle_command("ls");
        match root {
            CommandRes::Output(text) => {
                assert!(text.contains("skills.txt"));
                assert!(text.contains("projects/"));
            }
            other => panic!("expected output, got {other:?}"),
        }
    }

    #[test]
    fn git_status_reports_the_branch() {
        let mut terminal = Terminal::new(None);
        let res = terminal.handle_command("git status");
        match res {
            CommandRes::Output(text) => assert!(text.contains("On branch: main")),
            other => panic!("expected output, got {other:?}"),
        }

        let bad = terminal.handle_command("git push");
        assert!(bad.is_error());
    }

    #[test]
    fn echo_expands_environment_variables() {
        let mut terminal = Terminal::new(None);

        let path = terminal.handle_command("echo $PATH");
        assert_eq!(
            path,
            CommandRes::Output("/usr/bin:/usr/local/bin:/opt/homebrew/bin".to_string())
        );

        let user = terminal.handle_command("echo hello $USER");
        assert_eq!(user, CommandRes::Output("hello bethe-bayou".to_string()));

        // unknown variables expand to nothing
        let unknown = terminal.handle_command("echo $DOES_NOT_EXIST");
        assert_eq!(unknown, CommandRes::Output("".to_string()));
    }

    #[test]
    fn unknown_commands_suggest_help() {
        let mut terminal = Terminal::new(None);
        let res = terminal.handle_command("frobnicate");
        assert!(res.is_error());
        match res {
            CommandRes::Err(text) => {
                assert!(text.contains("Command not found: frobnicate"));
                assert!(text.contains("help"));
            }
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn sudo_is_denied() {
        let mut terminal = Terminal::new(None);
        let res = terminal.handle_command("sudo rm -rf /");
        assert!(res.is_error());
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let mut terminal = Terminal::new(None);
        assert_eq!(terminal.handle_command("   "), CommandRes::Nothing);
        assert!(terminal.handle_start_hist("").is_empty());
    }

    #[test]
    fn clear_resets_the_screen_not_the_history() {
        let mut terminal = Terminal::new(None);
        terminal.handle_command("whoami");
        assert_eq!(terminal.handle_command("clear"), CommandRes::Clear);
        // both commands are still in history
        assert_eq!(terminal.handle_start_hist("").len(), 2);
    }

    #[test]
    fn history_lists_and_clears_entries() {
        let mut terminal = Terminal::new(None);
        terminal.handle_command("whoami");
        terminal.handle_command("date");

        let listing = terminal.handle_command("history");
        match listing {
            CommandRes::Output(text) => {
                assert!(text.contains("whoami"));
                assert!(text.contains("date"));
            }
            other => panic!("expected output, got {other:?}"),
        }

        let cleared = terminal.handle_command("history -c");
        assert_eq!(cleared, CommandRes::Output("history cleared".to_string()));
        assert!(terminal.handle_start_hist("").is_empty());
    }

    #[test]
    fn history_is_bounded() {
        let mut terminal = Terminal::new(None);
        for i in 0..(HISTORY_SIZE + 25) {
            terminal.handle_command(&format!("echo {i}"));
        }
        let history = terminal.handle_start_hist("");
        assert_eq!(history.len(), HISTORY_SIZE);
        // oldest entries were dropped first
        assert_eq!(history[0], "echo 25");
    }

    #[test]
    fn history_prefix_search_filters_entries() {
        let mut terminal = Terminal::new(None);
        terminal.handle_command("git status");
        terminal.handle_command("whoami");
        terminal.handle_command("git log");

        let matches = terminal.handle_start_hist("git");
        assert_eq!(matches, vec!["git status".to_string(), "git log".to_string()]);
    }

    #[test]
    fn every_demo_command_succeeds() {
        let mut terminal = Terminal::new(None);
        for input in DEMO_SCRIPT {
            let res = terminal.handle_command(input);
            assert!(!res.is_error(), "demo command {input:?} failed: {res:?}");
        }
    }

    #[test]
    fn every_listed_command_is_dispatchable() {
        let mut terminal = Terminal::new(None);
        for name in Cmd::all() {
            // bare git prints usage; everything else must resolve
            if name == "git" {
                continue;
            }
            let res = terminal.handle_command(name);
            match res {
                CommandRes::Err(text) => {
                    assert!(
                        !text.contains("Command not found"),
                        "{name} fell through to unknown handling"
                    );
                }
                _ => {}
            }
        }
    }
}
