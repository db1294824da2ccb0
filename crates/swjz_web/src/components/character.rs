//! Components for a single dictionary entry.

use leptos::prelude::*;
use swjz_api::response::{CharacterDetails, DuanNote, Variant};
use swjz_core::display::{self, present};

#[component]
pub fn CharacterView(character: CharacterDetails) -> impl IntoView {
    let field = |value: &Option<String>, placeholder: &'static str| {
        display::or_placeholder(value.as_deref(), placeholder).to_string()
    };
    let volume = field(&character.volume, display::DASH_PLACEHOLDER);
    let radical = field(&character.radical, display::DASH_PLACEHOLDER);
    let radical_section = present(character.radical.as_deref())
        .map(|r| format!(" ({r}部)"))
        .unwrap_or_default();
    let pinyin = field(&character.pinyin, display::DASH_PLACEHOLDER);
    let fanqie = field(&character.fanqie, display::PENDING_PLACEHOLDER);
    let hanviet = field(&character.hanviet, display::HANVIET_PLACEHOLDER);
    let meaning_vi = field(&character.meaning_vi, display::PENDING_PLACEHOLDER);
    let explanation = field(&character.explanation, display::PENDING_PLACEHOLDER);
    let original_text = explanation.clone();
    let wordhead = character.wordhead;
    let headword_box = wordhead.clone();

    view! {
        <div class="block has-text-link has-text-weight-bold">
            <div>
                <span>{format!("Quyển {volume}")}</span>
                " | "
                <span>{format!("Bộ {radical}{radical_section}")}</span>
                " | "
                <span class="has-text-grey">{format!("{pinyin} (pinyin)")}</span>
            </div>
            <div>
                <span class="has-text-grey mr-2">"Phiên thiết:"</span>
                <span class="has-text-dark">{fanqie}</span>
            </div>
        </div>
        <div class="block columns">
            <div class="column is-narrow">
                <div class="headword box">{headword_box}</div>
            </div>
            <div class="column">
                <h1 class="title">
                    {wordhead}
                    " "
                    <span class="has-text-grey is-size-5">{format!("({hanviet})")}</span>
                </h1>
                <p class="is-size-4">{explanation}</p>
            </div>
        </div>
        <div class="block">
            <h3 class="subtitle">"Triều Thanh · Đoàn Ngọc Tài《Thuyết văn giải tự chú giải》"</h3>
            <div class="box">
                <div class="block">
                    <span class="has-text-grey mr-2">"Nguyên văn:"</span>
                    <span class="is-size-5">{original_text}</span>
                </div>
                <DuanNotes notes=character.duan_notes/>
            </div>
        </div>
        <Variants variants=character.variants/>
        <div class="block columns">
            <div class="column">
                <div class="box">
                    <h3 class="subtitle is-6 has-text-grey">"Âm Hán Việt"</h3>
                    <p class="is-size-4 has-text-weight-bold">{hanviet}</p>
                </div>
            </div>
            <div class="column">
                <div class="box">
                    <h3 class="subtitle is-6 has-text-grey">"Dịch Nghĩa (Vietnamese)"</h3>
                    <p>{meaning_vi}</p>
                </div>
            </div>
        </div>
    }
}

/// Duan Yucai's annotations in their original order.
#[component]
pub fn DuanNotes(notes: Vec<DuanNote>) -> impl IntoView {
    if notes.is_empty() {
        return view! { <p class="has-text-grey is-italic">{display::NO_NOTES}</p> }.into_any();
    }

    let notes = notes
        .into_iter()
        .map(|note| match note {
            DuanNote::Plain(text) => view! { <p class="duan-note">{text}</p> }.into_any(),
            DuanNote::Annotated { note, explanation } => {
                let lead = present(explanation.as_deref())
                    .map(|explanation| view! { <span>{explanation.to_string()}</span> });
                let annotation = present(note.as_deref()).map(|note| {
                    view! { <span class="duan-annotation">{format!("↳ {note}")}</span> }
                });
                view! {
                    <div class="duan-note">
                        {lead}
                        {annotation}
                    </div>
                }
                .into_any()
            }
        })
        .collect_view();
    view! { <div class="content">{notes}</div> }.into_any()
}

/// Attested variant forms. Renders nothing if there are none.
#[component]
pub fn Variants(variants: Vec<Variant>) -> impl IntoView {
    if variants.is_empty() {
        return None;
    }

    let variants = variants
        .into_iter()
        .map(|variant| {
            let seal = variant
                .seal_character
                .map(|seal| view! { <span class="seal ml-2">{seal}</span> });
            view! {
                <li>
                    <span class="is-size-4 mr-2">{variant.wordhead}</span>
                    {seal}
                    <span>{variant.explanation}</span>
                </li>
            }
        })
        .collect_view();
    Some(view! {
        <div class="block">
            <h3 class="subtitle">"Dị thể"</h3>
            <ul>
                {variants}
            </ul>
        </div>
    })
}

#[cfg(all(test, feature = "ssr"))]
mod test {
    use super::*;

    fn render(view: impl FnOnce() -> AnyView) -> String {
        Owner::new().with(|| view().to_html())
    }

    fn character() -> CharacterDetails {
        CharacterDetails {
            id: 3,
            wordhead: "三".to_string(),
            pinyin: Some("sān".to_string()),
            radical: Some("三".to_string()),
            volume: Some("一上".to_string()),
            fanqie: None,
            explanation: Some("天地人之道也。".to_string()),
            hanviet: None,
            meaning_vi: None,
            duan_notes: vec![],
            variants: vec![],
        }
    }

    #[test]
    fn renders_both_note_shapes_in_order() {
        let notes = vec![
            DuanNote::Plain("first plain".to_string()),
            DuanNote::Annotated {
                note: Some("second note".to_string()),
                explanation: Some("second lead".to_string()),
            },
            DuanNote::Plain("third plain".to_string()),
        ];
        let html = render(move || view! { <DuanNotes notes/> }.into_any());

        let first = html.find("first plain").unwrap();
        let lead = html.find("second lead").unwrap();
        let note = html.find("↳ second note").unwrap();
        let third = html.find("third plain").unwrap();
        assert!(first < lead && lead < note && note < third, "{html}");
    }

    #[test]
    fn empty_notes_have_a_message() {
        let html = render(|| view! { <DuanNotes notes={Vec::new()}/> }.into_any());
        assert!(html.contains(display::NO_NOTES), "{html}");
    }

    #[test]
    fn missing_fields_render_placeholders() {
        let character = character();
        let html = render(move || view! { <CharacterView character/> }.into_any());
        assert!(html.contains(display::HANVIET_PLACEHOLDER), "{html}");
        assert!(html.contains(display::PENDING_PLACEHOLDER), "{html}");
        assert!(html.contains(display::NO_NOTES), "{html}");
        assert!(!html.contains("null"), "{html}");
        assert!(!html.contains("undefined"), "{html}");
    }

    #[test]
    fn renders_variants() {
        let mut character = character();
        character.variants = vec![Variant {
            wordhead: "弎".to_string(),
            explanation: "古文三从弋。".to_string(),
            seal_character: None,
        }];
        let html = render(move || view! { <CharacterView character/> }.into_any());
        assert!(html.contains("弎"), "{html}");
        assert!(html.contains("古文三从弋。"), "{html}");
    }
}
