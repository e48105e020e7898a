use leptos::{either::EitherOf4, html, prelude::*, task::spawn_local};
use leptos_use::{use_clipboard, UseClipboardReturn};

use crate::email::{
    send_contact_email, ContactMessage, EmailConfig, EmailError, CONTACT_EMAIL, CONTACT_PHONE,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum SubmitStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[component]
pub fn Contact() -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (status, set_status) = signal(SubmitStatus::Idle);

    let UseClipboardReturn { copy, copied, .. } = use_clipboard();
    let (copied_label, set_copied_label) = signal(None::<&'static str>);
    let just_copied = move |label: &'static str| copied.get() && copied_label.get() == Some(label);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == SubmitStatus::Sending {
            return;
        }
        let (Some(name_el), Some(email_el), Some(message_el)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };
        let msg = ContactMessage {
            from_name: name_el.value(),
            reply_to: email_el.value(),
            message: message_el.value(),
        };
        set_status.set(SubmitStatus::Sending);
        spawn_local(async move {
            match send_contact_email(EmailConfig::site(), &msg).await {
                Ok(()) => {
                    name_el.set_value("");
                    email_el.set_value("");
                    message_el.set_value("");
                    set_status.set(SubmitStatus::Sent);
                }
                Err(e @ EmailError::NotConfigured) => {
                    set_status.set(SubmitStatus::Failed(e.to_string()));
                }
                Err(EmailError::Send(detail)) => {
                    set_status.set(SubmitStatus::Failed(detail));
                }
            }
        });
    };

    view! {
        <footer id="contact" class="py-20 bg-card border-t border-muted/30">
            <div class="container mx-auto px-6">
                <div class="max-w-2xl mx-auto">
                    <h2 class="text-2xl font-medium mb-8 text-center uppercase tracking-wider">
                        "Contact Me"
                    </h2>

                    <div class="space-y-4 mb-8 text-center text-sm">
                        <p>
                            "Email: "
                            <a href=format!("mailto:{CONTACT_EMAIL}") class="hover:underline">
                                {CONTACT_EMAIL}
                            </a>
                            <button
                                class="ml-2 text-xs hover:opacity-70 transition-opacity"
                                title="Copy Email"
                                on:click={
                                    let copy = copy.clone();
                                    move |_| {
                                        copy(CONTACT_EMAIL);
                                        set_copied_label.set(Some("email"));
                                    }
                                }
                            >
                                {move || if just_copied("email") { "✓" } else { "⧉" }}
                            </button>
                            " | Phone: "
                            <a href=format!("tel:{CONTACT_PHONE}") class="hover:underline">
                                {CONTACT_PHONE}
                            </a>
                            <button
                                class="ml-2 text-xs hover:opacity-70 transition-opacity"
                                title="Copy Phone"
                                on:click={
                                    let copy = copy.clone();
                                    move |_| {
                                        copy(CONTACT_PHONE);
                                        set_copied_label.set(Some("phone"));
                                    }
                                }
                            >
                                {move || if just_copied("phone") { "✓" } else { "⧉" }}
                            </button>
                        </p>
                        <p class="text-muted">"Address: Addis Ababa, Ethiopia"</p>
                    </div>

                    <form class="space-y-4 max-w-xl mx-auto" on:submit=submit>
                        <input
                            node_ref=name_ref
                            placeholder="Your Name"
                            required
                            class="w-full px-4 py-2 rounded-md dev-mode:rounded-none border border-muted/40 bg-background focus:outline-none focus:ring-2 focus:ring-foreground/40"
                        />
                        <input
                            node_ref=email_ref
                            type="email"
                            placeholder="Your Email"
                            required
                            class="w-full px-4 py-2 rounded-md dev-mode:rounded-none border border-muted/40 bg-background focus:outline-none focus:ring-2 focus:ring-foreground/40"
                        />
                        <textarea
                            node_ref=message_ref
                            placeholder="Your Message"
                            required
                            rows=6
                            class="w-full px-4 py-2 rounded-md dev-mode:rounded-none border border-muted/40 bg-background resize-none focus:outline-none focus:ring-2 focus:ring-foreground/40"
                        ></textarea>
                        <button
                            type="submit"
                            prop:disabled=move || status.get() == SubmitStatus::Sending
                            class="w-full py-2 bg-foreground text-background rounded-md dev-mode:rounded-none hover:opacity-90 transition-opacity disabled:opacity-50"
                        >
                            {move || {
                                if status.get() == SubmitStatus::Sending {
                                    "Sending..."
                                } else {
                                    "Send"
                                }
                            }}
                        </button>
                    </form>

                    <div class="mt-4 text-center text-sm min-h-6">
                        {move || match status.get() {
                            SubmitStatus::Idle => EitherOf4::A(()),
                            SubmitStatus::Sending => {
                                EitherOf4::B(view! { <span class="text-muted">"Sending your message..."</span> })
                            }
                            SubmitStatus::Sent => {
                                EitherOf4::C(
                                    view! {
                                        <span class="text-green">
                                            "Message sent! I'll get back to you soon."
                                        </span>
                                    },
                                )
                            }
                            SubmitStatus::Failed(detail) => {
                                EitherOf4::D(view! { <span class="text-red">{detail}</span> })
                            }
                        }}
                    </div>

                    <div class="text-center mt-12 text-xs text-muted">
                        <p>"© 2025 Bethe Bayou. All rights reserved."</p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
