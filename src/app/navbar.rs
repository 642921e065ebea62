use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::navigation::{active_section, is_scrolled, SectionBox, HOME, NAV_ITEMS};
use crate::portfolio::PROFILE;

fn measure(id: &str) -> Option<SectionBox> {
    let el = document().get_element_by_id(id)?;
    let rect = el.get_bounding_client_rect();
    Some(SectionBox {
        top: rect.top(),
        bottom: rect.bottom(),
    })
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let (menu_open, set_menu_open) = signal(false);
    let (active, set_active) = signal(HOME);

    Effect::watch(
        move || scroll_y.get(),
        move |y, _, _| {
            if let Some(id) = active_section(*y, measure) {
                set_active(id);
            }
        },
        false,
    );

    let link_class = move |id: &'static str| {
        move || {
            if active() == id {
                "text-sm font-medium text-purple-600 border-b-2 border-purple-600"
            } else {
                "text-sm font-medium hover:text-purple-600"
            }
        }
    };

    view! {
        <header class=move || {
            if is_scrolled(scroll_y.get()) {
                "sticky top-0 z-50 w-full bg-background/95 backdrop-blur border-b"
            } else {
                "sticky top-0 z-50 w-full bg-transparent"
            }
        }>
            <div class="container mx-auto flex h-16 items-center justify-between px-4">
                <a href="#" class="flex items-center space-x-2">
                    <i class="devicon-csharp-plain text-purple-600 text-2xl" />
                    <span class="font-bold text-xl">{PROFILE.brand}</span>
                </a>
                <nav class="hidden md:flex gap-6">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <a href=item.href class=link_class(item.id)>
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="flex items-center gap-4">
                    <a
                        href="#contact"
                        class="hidden md:flex bg-purple-600 hover:bg-purple-700 text-white px-4 py-2 rounded-md"
                    >
                        "Contact me"
                    </a>
                    <button
                        class="md:hidden border rounded-md px-3 py-2"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                </div>
            </div>
            <Show when=menu_open>
                <nav class="md:hidden flex flex-col gap-4 px-6 pb-6">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href
                                    class=link_class(item.id)
                                    on:click=move |_| set_menu_open(false)
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href="#contact"
                        class="mt-2 w-full text-center bg-purple-600 hover:bg-purple-700 text-white px-4 py-2 rounded-md"
                        on:click=move |_| set_menu_open(false)
                    >
                        "Contact me"
                    </a>
                </nav>
            </Show>
        </header>
    }
}
