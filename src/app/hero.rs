use leptos::prelude::*;

use crate::portfolio::PROFILE;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="relative py-20 md:py-32 px-4 overflow-hidden">
            <div class="container mx-auto flex flex-col-reverse md:flex-row items-center gap-12">
                <div class="flex-1 space-y-6">
                    <span class="inline-block px-3 py-1 text-sm rounded-full bg-green-500/20 text-green-700 border border-green-500/30">
                        "✨ Available for work"
                    </span>
                    <div>
                        <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold tracking-tight">
                            {PROFILE.first_names}
                        </h1>
                        <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold tracking-tight text-primary mt-2">
                            {PROFILE.last_names}
                        </h2>
                    </div>
                    <h3 class="text-xl md:text-2xl font-semibold text-muted-foreground">
                        {PROFILE.headline}
                    </h3>
                    <p class="text-lg text-muted-foreground max-w-md">{PROFILE.tagline}</p>
                    <div class="flex flex-wrap gap-3">
                        <a
                            href="#contact"
                            class="px-4 py-2 rounded-md text-white bg-gradient-to-r from-purple-600 to-blue-600 hover:from-purple-700 hover:to-blue-700"
                        >
                            "Contact me"
                        </a>
                        <a
                            href="#projects"
                            class="px-4 py-2 rounded-md border border-purple-500/30 hover:bg-purple-500/5"
                        >
                            "View projects"
                        </a>
                        <a
                            href=PROFILE.cv_path
                            download=PROFILE.cv_filename
                            class="px-4 py-2 rounded-md border border-purple-500/30 hover:bg-purple-500/5"
                        >
                            "Download CV"
                        </a>
                    </div>
                    <div class="flex gap-4 text-2xl">
                        <a href=PROFILE.github target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                            <i class="devicon-github-plain" />
                        </a>
                        <a
                            href=PROFILE.linkedin
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="LinkedIn"
                        >
                            <i class="devicon-linkedin-plain" />
                        </a>
                        <a href=PROFILE.mailto() aria-label="Email">
                            "✉"
                        </a>
                    </div>
                </div>
                <div class="flex-shrink-0">
                    <img
                        src=PROFILE.photo
                        alt=PROFILE.full_name()
                        width="320"
                        height="320"
                        class="rounded-full border-4 border-purple-500/30 object-cover w-64 h-64 md:w-80 md:h-80"
                    />
                </div>
            </div>
        </section>
    }
}
