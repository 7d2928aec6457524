/// End-to-end tests: utterance → intent → dispatcher → client → dialog text
mod common;

use common::{park, ScriptedSource, Step};
use parkvoice_core::nps::NpsError;
use parkvoice_core::states::STATE_CODES;
use parkvoice_core::{
    DialogCatalog, DialogId, Intent, IntentParser, NpsClient, ParkQuery, ParkSkill, Reply,
};
use std::sync::Arc;

fn skill_with(source: Arc<ScriptedSource>, key: &str) -> ParkSkill {
    let client = NpsClient::with_source(source, key).with_seed(1);
    ParkSkill::new(Arc::new(client))
}

#[tokio::test]
async fn every_known_state_queries_its_code() {
    let source = Arc::new(ScriptedSource::default());
    let client = NpsClient::with_source(source.clone(), "KEY");

    for (name, _) in STATE_CODES {
        assert_eq!(client.get_parks_by_state(name).await.unwrap(), None);
    }

    let queries = source.queries();
    assert_eq!(queries.len(), STATE_CODES.len());
    for ((key, query), (_, code)) in queries.iter().zip(STATE_CODES) {
        assert_eq!(key, "KEY");
        assert_eq!(query, &ParkQuery::by_state(code));
    }
}

#[tokio::test]
async fn unmapped_state_is_not_found_without_network() {
    let source = Arc::new(ScriptedSource::new(vec![Step::Fail(NpsError::Http(
        "should not be reached".into(),
    ))]));
    let mut skill = skill_with(source.clone(), "KEY");

    let intent = IntentParser::new()
        .parse("list the national parks in middle earth")
        .unwrap();
    let reply = skill.handle(intent).await;

    assert_eq!(
        reply,
        Reply::dialog_with(
            DialogId::NoParksFoundState,
            [("location", "middle earth".to_string())]
        )
    );
    assert!(source.queries().is_empty());
    assert!(!skill.client().call_error());
}

#[tokio::test]
async fn state_listing_renders_clean_names() {
    let source = Arc::new(ScriptedSource::new(vec![Step::Parks(vec![
        park("Denali National Park & Preserve", "AK", "National Park & Preserve"),
        park("Iditarod", "AK", "National Historic Trail"),
        park("Sitka", "AK", ""),
        park("Katmai National Park & Preserve", "AK", "National Park & Preserve"),
    ])]));
    let mut skill = skill_with(source, "KEY");

    let reply = skill
        .handle(Intent::ListParks {
            location: "alaska".into(),
        })
        .await;
    let text = DialogCatalog::new().render(&reply);

    assert_eq!(
        text,
        "The national parks in alaska are Denali National Park and Preserve Katmai National Park and Preserve"
    );
    assert!(!text.contains("Iditarod"));
    assert!(!text.contains("Sitka"));
}

#[tokio::test]
async fn missing_key_is_server_error() {
    let source = Arc::new(ScriptedSource::default());
    let mut skill = skill_with(source.clone(), "");

    let reply = skill
        .handle(Intent::WhereIsPark {
            park: "zion".into(),
        })
        .await;
    assert_eq!(reply, Reply::dialog(DialogId::ErrorCallingServer));
    assert!(source.queries().is_empty());

    skill.set_api_key("LIVE").await;
    let reply = skill
        .handle(Intent::WhereIsPark {
            park: "zion".into(),
        })
        .await;
    assert_eq!(
        reply,
        Reply::dialog_with(DialogId::NoParksFound, [("park", "zion".to_string())])
    );
    assert_eq!(source.queries()[0].0, "LIVE");
    assert_eq!(source.queries()[0].1, ParkQuery::search("zion"));
}

#[tokio::test]
async fn quiz_failure_on_second_fetch_speaks_server_error() {
    let source = Arc::new(ScriptedSource::new(vec![
        Step::Parks(vec![park("Acadia National Park", "ME", "National Park")]),
        Step::Fail(NpsError::Http("connection reset by peer".into())),
    ]));
    let mut skill = skill_with(source.clone(), "KEY");

    let first = skill.handle(Intent::StartQuiz).await;
    assert_eq!(
        first,
        Reply::dialog_with(
            DialogId::AskQuizQuestion,
            [
                ("location", "maine".to_string()),
                ("park", "Acadia National Park".to_string())
            ]
        )
        .expecting_response()
    );
    assert!(skill.awaiting_answer());
    assert!(!skill.client().call_error());

    let second = skill.handle(Intent::StartQuiz).await;
    assert_eq!(second, Reply::dialog(DialogId::ErrorCallingServer));
    assert_ne!(second.dialog_id(), Some(DialogId::NoParksFoundState));
    assert!(skill.client().call_error());
    assert!(!skill.awaiting_answer());

    // The failed generation left nothing to repeat
    let repeat = skill.handle(Intent::RepeatQuiz).await;
    assert_eq!(repeat, Reply::dialog(DialogId::QuizQuestionNone));
    assert_eq!(source.queries().len(), 2);
}

#[tokio::test]
async fn quiz_answer_routes_through_context() {
    let source = Arc::new(ScriptedSource::new(vec![Step::Parks(vec![park(
        "Death Valley National Park",
        "CA,NV",
        "National Park",
    )])]));
    let mut skill = skill_with(source, "KEY");
    let parser = IntentParser::new();
    let catalog = DialogCatalog::new();

    let ask = skill.handle(parser.parse("quiz me").unwrap()).await;
    assert_eq!(
        catalog.render(&ask),
        "What state is Death Valley National Park in?"
    );

    // While the quiz context is active the host sends the raw utterance
    assert!(skill.awaiting_answer());
    let reply = skill
        .handle(Intent::AnswerQuiz {
            utterance: "nevada".into(),
        })
        .await;
    assert_eq!(catalog.render(&reply), "That's right!");

    let again = skill.handle(parser.parse("repeat the question").unwrap()).await;
    assert_eq!(again, ask);

    let reply = skill
        .handle(Intent::AnswerQuiz {
            utterance: "arizona".into(),
        })
        .await;
    assert_eq!(
        catalog.render(&reply),
        "Sorry, Death Valley National Park is in california and nevada"
    );
}
