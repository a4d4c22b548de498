use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::info;

use asl_core::catalog;
use asl_core::model::Lesson;
use services::{QueryCache, QueryKey, QuizSession};

use super::keyboard::quiz_key;
use super::scripts::{focus_script, play_sound_script};
use crate::context::{AppContext, use_auth};
use crate::routes::Route;
use crate::views::components::{Button, CompleteScreen, FeedbackMessage, ProgressBar, Redirect};
use crate::vm::{ChoiceStyle, QuestionState, QuizEffect, QuizIntent, QuizVm, Sound};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const CORRECT_SOUND: Asset = asset!("/assets/correct.wav");
const INCORRECT_SOUND: Asset = asset!("/assets/incorrect.wav");

const QUIZ_ROOT_ID: &str = "quiz-root";
const CORRECT_AUDIO_ID: &str = "quiz-sound-correct";
const INCORRECT_AUDIO_ID: &str = "quiz-sound-incorrect";

fn sound_element_id(sound: Sound) -> &'static str {
    match sound {
        Sound::Correct => CORRECT_AUDIO_ID,
        Sound::Incorrect => INCORRECT_AUDIO_ID,
    }
}

/// Scripts to run after a transition. The last one always refocuses the quiz
/// root, since the control that was clicked may now be disabled or unmounted
/// and key presses only reach the root while it holds focus.
fn transition_scripts(effect: Option<QuizEffect>) -> Vec<String> {
    let mut scripts = Vec::with_capacity(2);
    if let Some(QuizEffect::PlaySound(sound)) = effect {
        scripts.push(play_sound_script(sound_element_id(sound)));
    }
    scripts.push(focus_script(QUIZ_ROOT_ID));
    scripts
}

/// Finds the lesson behind a quiz slug, first in the built-in chart and then
/// among lessons already fetched from the API.
fn resolve_lesson(slug: &str, queries: &QueryCache) -> Option<Lesson> {
    catalog::find_lesson(slug).or_else(|| {
        queries
            .get::<Vec<Lesson>>(&QueryKey::LESSONS)
            .and_then(|lessons| lessons.iter().find(|lesson| lesson.matches_slug(slug)).cloned())
    })
}

fn new_vm(lesson: Option<&Lesson>) -> QuizVm {
    let session = lesson.map_or_else(QuizSession::demo, QuizSession::for_lesson);
    QuizVm::new(session)
}

#[component]
pub fn QuizView(slug: String) -> Element {
    let auth = use_auth();
    if !auth.logged_in() {
        return rsx! { Redirect { to: Route::Login {} } };
    }
    let key = slug.clone();
    rsx! { QuizPage { key: "{key}", slug } }
}

#[component]
fn QuizPage(slug: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let lesson = use_hook(|| resolve_lesson(&slug, &ctx.query_cache()));
    let mut vm = use_signal({
        let lesson = lesson.clone();
        move || new_vm(lesson.as_ref())
    });

    use_effect(move || {
        let _ = eval(&focus_script(QUIZ_ROOT_ID));
    });

    let dispatch = use_callback(move |intent: QuizIntent| {
        let effect = vm.write().dispatch(intent);
        for script in transition_scripts(effect) {
            let _ = eval(&script);
        }
        match effect {
            Some(QuizEffect::UpdateExperience { xp }) => {
                info!(xp, "Updating user experience");
            }
            Some(QuizEffect::NavigateBack) => navigator.go_back(),
            Some(QuizEffect::PlaySound(_)) | None => {}
        }
    });

    let restart = use_callback(move |()| {
        vm.set(new_vm(lesson.as_ref()));
        let _ = eval(&focus_script(QUIZ_ROOT_ID));
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    let on_key = move |evt: KeyboardEvent| {
        if let Some(key) = quiz_key(&evt.data.key()) {
            evt.prevent_default();
            dispatch.call(QuizIntent::Key(key));
        }
    };

    let state = vm.read();
    let question = state.question().clone();
    let question_state = state.question_state();
    let complete = state.is_complete();
    let progress = state.progress();
    let summary = state.summary();
    let can_check = state.can_check();
    let choices: Vec<(String, ChoiceStyle)> = question
        .choices
        .iter()
        .map(|choice| (choice.clone(), state.choice_style(choice)))
        .collect();
    drop(state);

    let footer_class = match question_state {
        Some(QuestionState::Correct) => "quiz-footer quiz-footer--correct",
        Some(QuestionState::Incorrect) => "quiz-footer quiz-footer--incorrect",
        None => "quiz-footer",
    };
    let next_class = match question_state {
        Some(QuestionState::Incorrect) => "btn-danger",
        _ => "btn-success",
    };
    let check_class = if can_check { "btn-success" } else { "btn-locked" };

    rsx! {
        audio { id: CORRECT_AUDIO_ID, src: CORRECT_SOUND, preload: "auto" }
        audio { id: INCORRECT_AUDIO_ID, src: INCORRECT_SOUND, preload: "auto" }
        div {
            id: QUIZ_ROOT_ID,
            class: "quiz-page",
            tabindex: "0",
            onkeydown: on_key,
            if let Some(summary) = summary {
                CompleteScreen { summary }
            } else {
                div { class: "quiz-header",
                    button {
                        class: "quiz-header__close",
                        r#type: "button",
                        aria_label: "Close quiz",
                        onclick: move |_| navigator.go_back(),
                        "✕"
                    }
                    ProgressBar { progress }
                }
                div { class: "quiz-main",
                    h1 { class: "quiz-question",
                        span { class: "quiz-question__direction", "{question.question_direction}" }
                        " "
                        span { class: "quiz-question__subject", "\"{question.question_subject}\"" }
                    }
                    div { class: "quiz-choices",
                        for (index, (choice, style)) in choices.into_iter().enumerate() {
                            ChoiceButton {
                                key: "{choice}",
                                position: index + 1,
                                choice,
                                style,
                                locked: question_state.is_some(),
                                on_intent: dispatch,
                            }
                        }
                    }
                }
            }
            div { class: "{footer_class}",
                if complete {
                    div { class: "quiz-actions",
                        Button { title: "Try Again", class: "btn-outline", onclick: move |_| restart.call(()) }
                        Button { title: "Continue", class: "btn-primary", onclick: move |_| navigator.go_back() }
                    }
                } else if let Some(question_state) = question_state {
                    div { class: "quiz-actions",
                        FeedbackMessage { question_state, answer: question.answer.clone() }
                        Button {
                            title: "Next",
                            class: next_class,
                            onclick: move |_| dispatch.call(QuizIntent::Next),
                        }
                    }
                } else {
                    div { class: "quiz-actions",
                        Button {
                            title: "Skip",
                            class: "btn-outline",
                            onclick: move |_| dispatch.call(QuizIntent::Skip),
                        }
                        Button {
                            title: "Check",
                            class: check_class,
                            disabled: !can_check,
                            onclick: move |_| dispatch.call(QuizIntent::Check),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ChoiceButton(
    position: usize,
    choice: String,
    style: ChoiceStyle,
    locked: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let selected = choice.clone();
    rsx! {
        button {
            id: "{position}",
            class: "{style.class()}",
            r#type: "button",
            disabled: locked,
            onclick: move |_| on_intent.call(QuizIntent::Select(selected.clone())),
            span { class: "quiz-choice__key", "{position}" }
            span { class: "quiz-choice__label", "{choice}" }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<QuizVm>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, vm: Signal<QuizVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<QuizVm> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
