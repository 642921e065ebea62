mod contact;
mod footer;
mod hero;
mod navbar;
mod sections;

pub use contact::send_contact_message;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use contact::ContactSection;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use sections::{AboutSection, EducationSection, ExperienceSection, ProjectsSection, SkillsSection};

use crate::portfolio::PROFILE;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=PROFILE.headline />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="min-h-screen bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.brand) />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// The whole site is one scrolling page; sections are reached by anchor.
#[component]
fn Portfolio() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen flex flex-col relative">
            <Navbar />
            <Hero />
            <AboutSection />
            <SkillsSection />
            <ProjectsSection />
            <ExperienceSection />
            <EducationSection />
            <ContactSection />
            <Footer />
        </div>
    }
}
