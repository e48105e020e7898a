use leptos::{either::Either, prelude::*};
use leptos_use::{use_clipboard, UseClipboardReturn};

use crate::mode::use_dev_mode;

struct CodeSnippet {
    title: &'static str,
    description: &'static str,
    language: &'static str,
    code: &'static str,
}

static SNIPPETS: [CodeSnippet; 4] = [
    CodeSnippet {
        title: "Efficient API Handler",
        description: "Type-safe API wrapper with error handling",
        language: "typescript",
        code: r#"async function fetchData<T>(url: string): Promise<T> {
  const response = await fetch(url);
  if (!response.ok) {
    throw new Error(`HTTP error! status: ${response.status}`);
  }
  return response.json();
}"#,
    },
    CodeSnippet {
        title: "Custom React Hook",
        description: "Reusable state management hook",
        language: "typescript",
        code: r#"function useLocalStorage<T>(key: string, initial: T) {
  const [stored, setStored] = useState<T>(() => {
    const item = localStorage.getItem(key);
    return item ? JSON.parse(item) : initial;
  });

  const setValue = (value: T) => {
    setStored(value);
    localStorage.setItem(key, JSON.stringify(value));
  };

  return [stored, setValue] as const;
}"#,
    },
    CodeSnippet {
        title: "Express Middleware",
        description: "Error handling middleware for Node.js",
        language: "javascript",
        code: r#"const errorHandler = (err, req, res, next) => {
  const statusCode = err.statusCode || 500;
  res.status(statusCode).json({
    success: false,
    message: err.message,
    ...(process.env.NODE_ENV === 'development' && { stack: err.stack })
  });
};"#,
    },
    CodeSnippet {
        title: "MongoDB Query Helper",
        description: "Optimized database query function",
        language: "javascript",
        code: r#"const findPaginated = async (model, filter, page = 1, limit = 20) => {
  const [items, total] = await Promise.all([
    model.find(filter).skip((page - 1) * limit).limit(limit).lean(),
    model.countDocuments(filter)
  ]);
  return { items, total, pages: Math.ceil(total / limit) };
};"#,
    },
];

fn file_extension(language: &str) -> &'static str {
    match language {
        "typescript" => "ts",
        "javascript" => "js",
        "rust" => "rs",
        _ => "txt",
    }
}

#[component]
pub fn CodeSnippets() -> impl IntoView {
    let is_dev = use_dev_mode();

    view! {
        <section id="snippets" class="py-6">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    {move || {
                        if is_dev.get() {
                            Either::Left(view! { <SnippetEditor /> })
                        } else {
                            Either::Right(view! { <SnippetCards /> })
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SnippetCards() -> impl IntoView {
    let UseClipboardReturn { copy, copied, .. } = use_clipboard();
    let (copied_index, set_copied_index) = signal(None::<usize>);
    // "Copied!" sticks to the one snippet that was copied until the clipboard
    // signal resets.
    let just_copied = move |i: usize| copied.get() && copied_index.get() == Some(i);

    view! {
        <div class="text-center mb-6">
            <h2 class="text-2xl font-bold mb-2 uppercase tracking-wider">"Code Snippets"</h2>
            <p class="text-sm text-muted">"Reusable patterns from my projects"</p>
        </div>

        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            {SNIPPETS
                .iter()
                .enumerate()
                .map(|(i, snippet)| {
                    let copy = copy.clone();
                    view! {
                        <div class="border-2 border-muted/30 rounded-lg bg-card overflow-hidden">
                            <div class="p-4 border-b border-muted/20 flex items-start justify-between gap-2">
                                <div>
                                    <h3 class="text-lg font-semibold">{snippet.title}</h3>
                                    <p class="text-xs text-muted">{snippet.description}</p>
                                </div>
                                <button
                                    class="text-xs px-2 py-1 border border-muted/40 rounded-md hover:bg-foreground hover:text-background transition-colors whitespace-nowrap"
                                    on:click=move |_| {
                                        copy(snippet.code);
                                        set_copied_index.set(Some(i));
                                    }
                                >
                                    {move || if just_copied(i) { "Copied!" } else { "Copy" }}
                                </button>
                            </div>
                            <pre class="p-4 text-xs overflow-x-auto bg-background/60">
                                <code>{snippet.code}</code>
                            </pre>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn SnippetEditor() -> impl IntoView {
    let UseClipboardReturn { copy, copied, .. } = use_clipboard();
    let (selected, set_selected) = signal(0usize);
    let (copied_index, set_copied_index) = signal(None::<usize>);
    let just_copied = move |i: usize| copied.get() && copied_index.get() == Some(i);

    view! {
        <div class="mb-4 border-2 border-foreground/20 p-3 bg-background font-mono text-xs">
            <span class="text-green">"$"</span>
            <span class="ml-2">"vim snippets/"</span>
        </div>

        <div class="border-2 border-foreground/30 bg-background font-mono">
            <div class="flex flex-wrap border-b-2 border-foreground/20">
                {SNIPPETS
                    .iter()
                    .enumerate()
                    .map(|(i, snippet)| {
                        view! {
                            <button
                                class=move || {
                                    if selected.get() == i {
                                        "px-3 py-2 text-xs bg-foreground text-background"
                                    } else {
                                        "px-3 py-2 text-xs hover:bg-foreground/10"
                                    }
                                }
                                on:click=move |_| set_selected.set(i)
                            >
                                {format!(
                                    "{}.{}",
                                    snippet.title.to_lowercase().replace(' ', "_"),
                                    file_extension(snippet.language),
                                )}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                let i = selected.get();
                let snippet = &SNIPPETS[i];
                let copy = copy.clone();
                view! {
                    <div class="flex items-center justify-between px-4 py-2 border-b border-foreground/10 text-xs">
                        <span class="text-muted">{snippet.description}</span>
                        <button
                            class="px-2 py-1 border border-foreground/30 hover:bg-foreground hover:text-background transition-colors"
                            on:click=move |_| {
                                copy(snippet.code);
                                set_copied_index.set(Some(i));
                            }
                        >
                            {move || if just_copied(i) { "[copied]" } else { "[copy]" }}
                        </button>
                    </div>
                    <pre class="p-4 text-xs overflow-x-auto leading-relaxed">
                        {snippet
                            .code
                            .lines()
                            .enumerate()
                            .map(|(n, line)| {
                                view! {
                                    <div>
                                        <span class="text-muted select-none inline-block w-8 text-right mr-3">
                                            {n + 1}
                                        </span>
                                        <code>{line}</code>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </pre>
                    <div class="px-4 py-2 border-t-2 border-foreground/10 text-xs text-muted flex justify-between">
                        <span>{snippet.language}</span>
                        <span>{format!("{} lines", snippet.code.lines().count())}</span>
                    </div>
                }
            }}
        </div>
    }
}
