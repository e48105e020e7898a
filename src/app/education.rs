use leptos::prelude::*;

// This section has no dedicated developer-mode branch; the dev-mode: classes
// in the stylesheet restyle it when the root marker flips.
#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id="education" class="py-6">
            <div class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto space-y-12">
                    <div class="space-y-6">
                        <div>
                            <h2 class="text-2xl font-bold uppercase tracking-wider mb-2">
                                "Education"
                            </h2>
                            <p class="text-sm text-muted">"Academic background and qualifications"</p>
                        </div>

                        <div class="relative border border-muted/30 rounded-md dev-mode:rounded-none p-8 bg-card dev-mode:border-2 dev-mode:hover:border-foreground/40 transition-all duration-300">
                            <h3 class="text-xl font-semibold mb-2">
                                "Addis Ababa Institute of Technology (AAiT) B.Sc. in Software Engineering"
                            </h3>
                            <p class="text-sm text-muted mb-3">
                                <strong>"Relevant Coursework: "</strong>
                                "Data Structures, Algorithms, Database Systems, Web Development, Object-Oriented Programming, Software Engineering Principles"
                            </p>
                            <p class="text-sm text-muted">"Expected Graduation: 2028"</p>
                        </div>
                    </div>

                    <div class="space-y-6">
                        <div>
                            <h2 class="text-2xl font-bold uppercase tracking-wider mb-2">
                                "Experience"
                            </h2>
                            <p class="text-sm text-muted">"Professional work and contributions"</p>
                        </div>

                        <div class="relative border border-muted/30 rounded-md dev-mode:rounded-none p-8 bg-card space-y-6 dev-mode:border-2 dev-mode:hover:border-foreground/40 transition-all duration-300">
                            <div>
                                <h3 class="text-xl font-semibold mb-2">"Full-Stack Developer"</h3>
                                <p class="text-sm text-muted mb-3">
                                    <strong>"Role: "</strong>
                                    "Freelance Full-Stack Developer"
                                </p>
                                <p class="text-sm text-muted mb-2">
                                    <strong>"Duration: "</strong>
                                    "2024 - Present"
                                </p>
                                <p class="text-sm text-muted mb-2">
                                    <strong>"Technologies: "</strong>
                                    "HTML, CSS, JavaScript, React, Node.js, Express, PostgreSQL, MongoDB, Vercel"
                                </p>
                                <p class="text-sm text-muted">
                                    <strong>"Description: "</strong>
                                    "Developing full-stack web applications for clients, building responsive user interfaces, creating RESTful APIs, integrating third-party services, and deploying applications to production. Specializing in modern web technologies and delivering scalable solutions."
                                </p>
                            </div>

                            <hr class="border-muted/30" />

                            <div>
                                <h3 class="text-xl font-semibold mb-2">
                                    "AI Research Intern — iCog Labs"
                                </h3>
                                <p class="text-sm text-muted mb-3">"October 2025 - Present"</p>
                                <p class="text-sm text-muted mb-2">
                                    "Assisting the Pattern Miner Hyperon Team in AI research and development using the Meta language."
                                </p>
                                <p class="text-sm text-muted">
                                    "Supporting experiments in pattern recognition and knowledge representation."
                                </p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
