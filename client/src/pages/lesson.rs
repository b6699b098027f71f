//! Lesson chapter page with the lesson-interface navbar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route segments identify the chapter; the chapter list and repository URL
//! come from the catalog API. Until that answer arrives the navbar renders
//! with the empty lesson placeholder. Visiting a chapter queues an
//! `attempted` progress record for the background sync.

#[cfg(test)]
#[path = "lesson_test.rs"]
mod lesson_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::navbar::Navbar;
use crate::net::types::{ProgressStatus, ProgressUpdate};
use crate::state::lesson::LessonContext;
use crate::util::pending_updates::record_progress;

/// Route identifiers of the chapter being viewed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ChapterRoute {
    course_id: String,
    lesson_id: String,
    chapter_id: String,
}

impl ChapterRoute {
    fn is_complete(&self) -> bool {
        !self.course_id.is_empty() && !self.lesson_id.is_empty() && !self.chapter_id.is_empty()
    }

    fn attempted(&self) -> ProgressUpdate {
        ProgressUpdate {
            course_id: self.course_id.clone(),
            lesson_id: self.lesson_id.clone(),
            chapter_id: self.chapter_id.clone(),
            status: ProgressStatus::Attempted,
        }
    }
}

fn chapter_heading(lesson: Option<&LessonContext>) -> String {
    lesson
        .and_then(LessonContext::current_chapter_title)
        .map_or_else(|| "Loading chapter...".to_owned(), str::to_owned)
}

#[component]
pub fn LessonPage() -> impl IntoView {
    let params = use_params_map();
    let route = Memo::new(move |_| {
        let map = params.read();
        ChapterRoute {
            course_id: map.get("course_id").unwrap_or_default(),
            lesson_id: map.get("lesson_id").unwrap_or_default(),
            chapter_id: map.get("chapter_id").unwrap_or_default(),
        }
    });
    let lesson = RwSignal::new(None::<LessonContext>);

    Effect::new(move || {
        let current = route.get();
        if !current.is_complete() {
            return;
        }
        record_progress(current.attempted());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let next = crate::net::api::fetch_lesson(&current.course_id, &current.lesson_id)
                .await
                .map(|summary| LessonContext::from_summary(&current.chapter_id, summary));
            lesson.set(next);
        });
    });

    view! {
        <Navbar
            cta=false
            is_lesson_interface=true
            lesson_details=Signal::derive(move || lesson.get())
        />
        <main class="lesson-page">
            <h1>{move || chapter_heading(lesson.get().as_ref())}</h1>
        </main>
    }
}
