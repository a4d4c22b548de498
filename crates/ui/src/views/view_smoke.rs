use dioxus::prelude::ReadableExt;
use services::QueryKey;

use crate::vm::{QuizIntent, QuizKey};

use super::test_harness::{FakeApi, ViewKind, setup_view_harness, setup_view_harness_with_api};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_chart() {
    let mut harness = setup_view_harness(ViewKind::Home, false);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Asl Chart"), "missing chart heading in {html}");
    assert!(html.contains("Introduction to ASL"), "missing lesson 1 in {html}");
    assert!(html.contains("Basic Conversations"), "missing lesson 2 in {html}");
    assert!(html.contains("Alphabet in ASL"), "missing exercise title in {html}");
    assert!(html.contains("Start quiz"), "missing quiz link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lessons_view_smoke_renders_user_and_lessons() {
    let mut harness = setup_view_harness(ViewKind::Lessons, true);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Lessons"), "missing heading in {html}");
    assert!(html.contains("Welcome sam!"), "missing welcome banner in {html}");
    assert!(html.contains("Colors"), "missing fetched lesson in {html}");
    assert!(harness.queries.contains(&QueryKey::LESSONS));
    assert!(harness.queries.contains(&QueryKey::ME));
}

#[tokio::test(flavor = "current_thread")]
async fn lessons_view_smoke_redirects_to_login_when_logged_out() {
    let mut harness = setup_view_harness(ViewKind::Lessons, false);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive();
    let html = harness.render();
    assert!(html.contains("login-page"), "not redirected to login: {html}");
    assert!(html.contains("Access token"), "missing login form in {html}");
    assert!(!html.contains("Welcome"), "unexpected welcome in {html}");
    assert!(!html.contains("lessons-page"), "unexpected lessons page in {html}");
    assert!(!harness.queries.contains(&QueryKey::LESSONS));
}

#[tokio::test(flavor = "current_thread")]
async fn lessons_view_smoke_offers_retry_on_failure() {
    let api = FakeApi {
        lessons: Err(()),
        ..FakeApi::default()
    };
    let mut harness = setup_view_harness_with_api(ViewKind::Lessons, true, api);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Retry"), "missing retry in {html}");
    assert!(!harness.queries.contains(&QueryKey::LESSONS));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_demo_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz("unknown-quiz".into()), true);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Demo Question Direction"), "missing direction in {html}");
    assert!(html.contains("Demo Question Subject"), "missing subject in {html}");
    assert!(html.contains("Check"), "missing check button in {html}");
    assert!(html.contains("Skip"), "missing skip button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_reveals_solution_after_wrong_answer() {
    let mut harness = setup_view_harness(ViewKind::Quiz("unknown-quiz".into()), true);
    harness.rebuild();
    let handles = harness.quiz_handles.clone().expect("quiz handles");
    let dispatch = handles.dispatch();

    harness.dom.in_runtime(|| {
        dispatch.call(QuizIntent::Select("B".into()));
        dispatch.call(QuizIntent::Check);
    });
    harness.drive();

    let html = harness.render();
    assert!(html.contains("Correct solution:"), "missing solution in {html}");
    assert!(html.contains("Next"), "missing next button in {html}");
    let vm = handles.vm();
    assert_eq!(harness.dom.in_runtime(|| vm.read().progress()), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_keyboard_answers_and_advances() {
    let mut harness = setup_view_harness(ViewKind::Quiz("unknown-quiz".into()), true);
    harness.rebuild();
    let handles = harness.quiz_handles.clone().expect("quiz handles");
    let dispatch = handles.dispatch();

    harness.dom.in_runtime(|| {
        dispatch.call(QuizIntent::Key(QuizKey::Digit(1)));
        dispatch.call(QuizIntent::Key(QuizKey::Enter));
    });
    harness.drive();

    let html = harness.render();
    assert!(html.contains("Nice job!"), "missing praise in {html}");
    assert!(html.contains("width: 20%"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_summary_after_five_correct_answers() {
    let mut harness = setup_view_harness(ViewKind::Quiz("unknown-quiz".into()), true);
    harness.rebuild();
    let handles = harness.quiz_handles.clone().expect("quiz handles");
    let dispatch = handles.dispatch();

    for _ in 0..5 {
        harness.dom.in_runtime(|| {
            dispatch.call(QuizIntent::Select("A".into()));
            dispatch.call(QuizIntent::Check);
            dispatch.call(QuizIntent::Next);
        });
        harness.drive();
    }

    let html = harness.render();
    assert!(html.contains("Lesson complete!"), "missing summary in {html}");
    assert!(html.contains("70"), "missing xp total in {html}");
    assert!(html.contains("Try Again"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Login, false);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Log in"), "missing login heading in {html}");
    assert!(html.contains("Access token"), "missing token field in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_restarts_when_the_slug_changes() {
    let mut harness = setup_view_harness(ViewKind::Quiz("unknown-quiz".into()), true);
    harness.rebuild();
    assert!(harness.render().contains("Demo Question Direction"));

    harness.switch_view(ViewKind::Quiz("alphabet-in-asl".into()));
    let html = harness.render();
    assert!(html.contains("Which word matches this sign:"), "quiz kept the old session: {html}");
    assert!(!html.contains("Demo Question Direction"), "stale demo question in {html}");
}
