use leptos::prelude::*;

use crate::mode::use_dev_mode;

const PROFILE_IMAGE: &str = "/images/profile.jpg";
const DEV_MODE_IMAGE: &str = "/images/profile-dev.jpg";

const BIO: &str = "I'm a Software Engineering student at Addis Ababa University, \
specializing in building backend services, database systems, RESTful APIs, and \
efficient data layers using Node.js, Express, PostgreSQL, and MongoDB. I also \
develop clean, responsive frontends with modern frameworks, delivering reliable \
and well-structured software solutions. Currently, I'm contributing to an AI \
Research and Development project at iCog Labs. I enjoy exploring new technologies \
and applying them to solve real-world problems. My goal is to create software \
that is not only functional but also meaningful and impactful.";

const RESUME_URL: &str =
    "https://drive.google.com/file/d/1G6Oy6_xe8ISf73onA3d1STxED3fLGX0m/view?usp=sharing";

struct SocialLink {
    label: &'static str,
    href: &'static str,
    glyph: &'static str,
}

static SOCIAL_LINKS: [SocialLink; 6] = [
    SocialLink {
        label: "Instagram",
        href: "https://www.instagram.com/bethe.19",
        glyph: "devicon-instagram-plain",
    },
    SocialLink {
        label: "Facebook",
        href: "https://www.facebook.com/bethe19",
        glyph: "devicon-facebook-plain",
    },
    SocialLink {
        label: "WhatsApp",
        href: "https://wa.me/251920420134",
        glyph: "extra-phone",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/bethe-bayou",
        glyph: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "Telegram",
        href: "https://t.me/bethe19",
        glyph: "extra-send",
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/bethe19",
        glyph: "devicon-github-plain",
    },
];

#[component]
pub fn Hero() -> impl IntoView {
    let is_dev = use_dev_mode();
    // Only the portrait swaps with the mode; the rest of this section varies
    // through dev-mode: classes in the stylesheet.
    let current_image = move || {
        if is_dev.get() {
            DEV_MODE_IMAGE
        } else {
            PROFILE_IMAGE
        }
    };

    view! {
        <section id="about" class="pt-16">
            <div class="container mx-auto px-6 py-6">
                <div class="max-w-6xl mx-auto">
                    <div class="bg-card border-2 border-muted/30 rounded-lg dev-mode:rounded-none p-6 md:p-8 transition-all duration-300 hover:scale-[1.01] dev-mode:hover:border-foreground/40">
                        <div class="flex flex-col md:flex-row items-center md:items-start gap-8">
                            <div class="flex-shrink-0">
                                <img
                                    src=current_image
                                    alt="Bethe Bayou"
                                    loading="lazy"
                                    class="w-48 md:w-52 h-auto rounded-md dev-mode:rounded-none transition-transform duration-300 hover:scale-105 border-2 border-transparent dev-mode:border-foreground/10"
                                />
                            </div>

                            <div class="flex-1 space-y-4">
                                <div>
                                    <h1 class="text-3xl md:text-4xl font-bold mb-2 dev-mode:tracking-tight">
                                        "Hi, I'm Bethe Bayou"
                                    </h1>
                                    <p class="text-base text-muted leading-relaxed text-justify">
                                        {BIO}
                                    </p>
                                </div>

                                <div class="flex flex-wrap gap-3 pt-2">
                                    <a
                                        href="#contact"
                                        class="px-4 py-2 bg-background text-foreground hover:bg-foreground hover:text-background border border-muted/40 rounded-md dev-mode:rounded-none dev-mode:border-2 transition-all duration-300"
                                    >
                                        "Get in touch"
                                    </a>
                                    <a
                                        href=RESUME_URL
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="px-4 py-2 bg-background text-foreground hover:bg-foreground hover:text-background border border-muted/40 rounded-md dev-mode:rounded-none dev-mode:border-2 transition-all duration-300"
                                    >
                                        "Resume"
                                    </a>
                                </div>
                            </div>

                            <div class="flex md:flex-col gap-4 flex-wrap justify-center">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="text-foreground hover:text-muted text-2xl transition-all duration-300 dev-mode:hover:scale-110"
                                                aria-label=link.label
                                            >
                                                <i class=link.glyph></i>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
