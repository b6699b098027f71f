//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::session::SessionClient;
use crate::pages::{courses::CoursesPage, home::HomePage, lesson::LessonPage};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session signal and its provider client, then sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let client = SessionClient::new(session);
    provide_context(session);
    provide_context(client);

    client.refresh();

    view! {
        <Stylesheet id="leptos" href="/pkg/dotcodeschool.css"/>
        <Title text="dotcodeschool"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("courses") view=CoursesPage/>
                <Route
                    path=(
                        StaticSegment("courses"),
                        ParamSegment("course_id"),
                        StaticSegment("lessons"),
                        ParamSegment("lesson_id"),
                        StaticSegment("chapters"),
                        ParamSegment("chapter_id"),
                    )
                    view=LessonPage
                />
            </Routes>
        </Router>
    }
}
