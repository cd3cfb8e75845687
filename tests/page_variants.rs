//! End-to-end tests over the bundled page variants.

use infodeck::page::{Gesture, Page, PageError, PageView, Variant};
use infodeck::resources::{Activation, DirectoryPlatform, Resource};
use infodeck::validation::{ContentRulesBuilder, ContentViolation};
use std::fs;

#[test]
fn every_variant_mounts_with_initial_state() {
    for variant in Variant::ALL {
        let view = PageView::mount(variant.page().unwrap()).unwrap();

        assert_eq!(view.carousel().current_index(), 0, "{variant}");
        assert_eq!(view.accordion().unwrap().open_index(), None, "{variant}");
        assert!(view.carousel().history().is_empty());
    }
}

#[test]
fn student_walkthrough_carousel_wraps_both_ways() {
    let mut view = PageView::mount(Variant::StudentWalkthrough.page().unwrap()).unwrap();

    view.handle(Gesture::PreviousStep).unwrap();
    assert_eq!(view.current_step().title, "Aprenda com os resultados");

    view.handle(Gesture::NextStep).unwrap();
    assert_eq!(view.current_step().title, "Organize seus dados");

    let active: Vec<bool> = view.carousel().indicators().map(|(_, a)| a).collect();
    assert_eq!(active, vec![true, false, false, false, false]);
}

#[test]
fn remounting_starts_fresh() {
    let page = Variant::TeacherGuide.page().unwrap();

    let mut first = PageView::mount(page.clone()).unwrap();
    first.handle(Gesture::NextStep).unwrap();
    first.handle(Gesture::ToggleEntry(3)).unwrap();
    drop(first);

    let second = PageView::mount(page).unwrap();
    assert_eq!(second.carousel().current_index(), 0);
    assert!(!second.is_entry_open(3));
}

#[test]
fn teacher_guide_resources_reach_the_platform() {
    let dir = tempfile::tempdir().unwrap();
    let view = PageView::mount(Variant::TeacherGuide.page().unwrap()).unwrap();
    let mut platform = DirectoryPlatform::new(dir.path());

    let csv = view.activate("sample-csv", &mut platform).unwrap();
    let xlsx = view.activate("sample-xlsx", &mut platform).unwrap();
    let prompt = view.activate("prompt", &mut platform).unwrap();
    let manual = view.activate("manual", &mut platform).unwrap();

    assert_eq!(
        csv,
        Activation::Downloaded {
            filename: "exemplo-empresas.csv".into()
        }
    );
    assert_eq!(
        xlsx,
        Activation::Downloaded {
            filename: "exemplo-empresas.xlsx".into()
        }
    );
    assert!(matches!(prompt, Activation::Copied { chars } if chars > 0));
    assert_eq!(
        manual,
        Activation::Opened {
            href: "/manual-professor-bncc.pdf".into()
        }
    );

    let csv_file = fs::read_to_string(dir.path().join("exemplo-empresas.csv")).unwrap();
    let xlsx_file = fs::read_to_string(dir.path().join("exemplo-empresas.xlsx")).unwrap();
    assert_eq!(csv_file, xlsx_file);
    assert!(csv_file.contains("InnovaServ S.A.,95000,110000,125000"));

    assert!(platform
        .clipboard()
        .is_some_and(|text| text.starts_with("Analise esta planilha")));
    assert_eq!(
        platform.notifications(),
        ["Prompt copiado para a área de transferência!".to_string()]
    );
}

#[test]
fn page_files_load_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("student.toml");
    fs::write(&path, Variant::StudentWalkthrough.source()).unwrap();

    let page = Page::load(&path).unwrap();
    assert_eq!(page, Variant::StudentWalkthrough.page().unwrap());
}

#[test]
fn stricter_rules_reject_bundled_page() {
    let rules = ContentRulesBuilder::new().max_steps(5).build();
    let result = Page::from_toml_str_with(Variant::TeacherGuide.source(), &rules);

    match result {
        Err(PageError::InvalidContent { violations }) => {
            assert_eq!(
                violations,
                vec![ContentViolation::TooManySteps { max: 5, found: 6 }]
            );
        }
        other => panic!("expected invalid content, got {other:?}"),
    }
}

#[test]
fn every_resource_has_a_unique_id() {
    for variant in Variant::ALL {
        let page = variant.page().unwrap();
        let ids: Vec<&str> = page.resources.iter().map(Resource::id).collect();
        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len(), "{variant}");
    }
}
