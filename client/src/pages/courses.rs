//! Course catalog page. Uses the signed-in navbar variant.

#[cfg(test)]
#[path = "courses_test.rs"]
mod courses_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::types::CourseSummary;
use crate::pages::home::marketing_links;

/// Route of a course's first chapter, if it has one.
fn first_chapter_href(course: &CourseSummary) -> Option<String> {
    let lesson = course.lessons.first()?;
    if lesson.chapters.is_empty() {
        return None;
    }
    Some(format!("/courses/{}/lessons/{}/chapters/1", course.id, lesson.id))
}

#[component]
pub fn CoursesPage() -> impl IntoView {
    let courses = RwSignal::new(None::<Vec<CourseSummary>>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let list = crate::net::api::fetch_courses().await.unwrap_or_default();
        courses.set(Some(list));
    });

    view! {
        <Navbar nav_links=marketing_links() cta=false/>
        <main class="courses-page">
            <h1>"Courses"</h1>
            <Show
                when=move || courses.get().is_some()
                fallback=move || view! { <p>"Loading courses..."</p> }
            >
                <ul class="courses-page__list">
                    {move || {
                        courses
                            .get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|course| {
                                let href = first_chapter_href(&course).unwrap_or_else(|| "#".to_owned());
                                view! {
                                    <li class="courses-page__item">
                                        <a href=href>{course.title}</a>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </main>
    }
}
