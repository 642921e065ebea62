use leptos::{ev, prelude::*};

use crate::portfolio::PROFILE;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    let to_top = move |_: ev::MouseEvent| {
        window().scroll_to_with_x_and_y(0.0, 0.0);
    };

    view! {
        <footer class="w-full border-t py-6 md:py-8 relative">
            <div class="container mx-auto px-4 flex flex-col md:flex-row items-center justify-between gap-4 md:gap-0">
                <div class="flex items-center space-x-2">
                    <span class="font-medium">{PROFILE.brand}</span>
                </div>
                <p class="text-sm text-muted-foreground text-center md:text-left">
                    {format!("© {BUILD_YEAR} {}. All rights reserved.", PROFILE.brand)}
                </p>
                <div class="flex items-center gap-4 text-xl">
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
            <button
                class="absolute right-4 bottom-4 rounded-full border w-9 h-9"
                aria-label="Back to top"
                on:click=to_top
            >
                "↑"
            </button>
        </footer>
    }
}
