use super::*;

const SAMPLE: &str = r"
courses:
  - id: rust-state-machine
    title: Rust State Machine
    github_url: https://github.com/shawntabrizi/rust-state-machine
    lessons:
      - id: '1'
        title: Introduction
        chapters:
          - title: Welcome
          - title: Setup
      - id: '2'
        title: Balances
        chapters:
          - title: Pallet
  - id: empty-course
    title: Placeholder
    github_url: https://github.com/org/empty
";

#[test]
fn from_yaml_parses_courses_and_defaults_lessons() {
    let catalog = Catalog::from_yaml(SAMPLE).unwrap();
    assert_eq!(catalog.courses().len(), 2);
    assert_eq!(catalog.courses()[0].lessons.len(), 2);
    assert!(catalog.courses()[1].lessons.is_empty());
}

#[test]
fn empty_document_is_empty_catalog() {
    let catalog = Catalog::from_yaml("{}").unwrap();
    assert!(catalog.courses().is_empty());
}

#[test]
fn lesson_lookup_returns_course_repo_and_chapters() {
    let catalog = Catalog::from_yaml(SAMPLE).unwrap();
    let lesson = catalog.lesson("rust-state-machine", "1").unwrap();
    assert_eq!(lesson.course_id, "rust-state-machine");
    assert_eq!(lesson.lesson_id, "1");
    assert_eq!(lesson.github_url, "https://github.com/shawntabrizi/rust-state-machine");
    assert_eq!(
        lesson.chapters,
        vec![Chapter { title: "Welcome".to_owned() }, Chapter { title: "Setup".to_owned() }]
    );
}

#[test]
fn lesson_lookup_misses_unknown_ids() {
    let catalog = Catalog::from_yaml(SAMPLE).unwrap();
    assert_eq!(catalog.lesson("rust-state-machine", "9"), None);
    assert_eq!(catalog.lesson("nope", "1"), None);
}

#[test]
fn duplicate_course_ids_are_rejected() {
    let raw = "courses:\n  - {id: a, title: A, github_url: x}\n  - {id: a, title: B, github_url: y}\n";
    let err = Catalog::from_yaml(raw).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateCourse(ref id) if id == "a"));
}

#[test]
fn duplicate_lesson_ids_are_rejected() {
    let raw = "courses:\n  - id: a\n    title: A\n    github_url: x\n    lessons:\n      - {id: '1', title: One}\n      - {id: '1', title: Again}\n";
    let err = Catalog::from_yaml(raw).unwrap_err();
    assert_eq!(err.to_string(), "duplicate lesson id 1 in course a");
}

#[test]
fn malformed_yaml_is_parse_error() {
    let err = Catalog::from_yaml("courses: [").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn load_reports_missing_file_path() {
    let path = Path::new("/definitely/not/here/courses.yaml");
    let err = Catalog::load(path).unwrap_err();
    assert!(matches!(err, CatalogError::Read { .. }));
    assert!(err.to_string().contains("/definitely/not/here/courses.yaml"));
}
