pub(super) fn play_sound_script(element_id: &str) -> String {
    format!(
        r"(function() {{
            const audio = document.getElementById({element_id:?});
            if (!audio) return;
            audio.currentTime = 0;
            const played = audio.play();
            if (played && played.catch) played.catch(() => {{}});
        }})();",
    )
}

pub(super) fn focus_script(element_id: &str) -> String {
    format!("document.getElementById({element_id:?})?.focus();")
}
