//! Integration tests for whole skill conversations.
//!
//! These tests drive the dispatcher the way the voice platform does:
//! 1. Each request is built as platform JSON
//! 2. The `sessionAttributes` of each response are threaded into the next request
//! 3. Analytics events are captured with the in-memory tracker

use serde_json::{json, Value};
use std::sync::Arc;

use metabolic_calculator::adapters::analytics::InMemoryAnalyticsTracker;
use metabolic_calculator::adapters::skill::{RequestEnvelope, SkillDispatcher};
use metabolic_calculator::application::HandleTurnHandler;
use metabolic_calculator::config::DisplayConfig;
use metabolic_calculator::domain::dialog::{DialogConfig, DialogEngine};
use metabolic_calculator::domain::metabolism::LightExerciseFormula;

const APP_ID: &str = "amzn1.ask.skill.metabolic";
const SESSION_ID: &str = "amzn1.echo-api.session.integration";

// =============================================================================
// Test Infrastructure
// =============================================================================

/// One simulated device talking to the skill.
struct Conversation {
    dispatcher: SkillDispatcher,
    tracker: Arc<InMemoryAnalyticsTracker>,
    attributes: Value,
    is_new: bool,
    display: bool,
    next_request: u32,
}

impl Conversation {
    fn new() -> Self {
        Self::with_config(DialogConfig::default())
    }

    fn with_config(config: DialogConfig) -> Self {
        let tracker = Arc::new(InMemoryAnalyticsTracker::new());
        let handler = HandleTurnHandler::new(DialogEngine::new(config), tracker.clone());
        let dispatcher =
            SkillDispatcher::new(handler, DisplayConfig::default()).with_application_id(APP_ID);
        Self {
            dispatcher,
            tracker,
            attributes: Value::Null,
            is_new: true,
            display: false,
            next_request: 1,
        }
    }

    fn on_display_device(mut self) -> Self {
        self.display = true;
        self
    }

    async fn send(&mut self, request: Value) -> Value {
        let interfaces = if self.display {
            json!({ "Display": {} })
        } else {
            json!({})
        };
        let envelope: RequestEnvelope = serde_json::from_value(json!({
            "version": "1.0",
            "session": {
                "new": self.is_new,
                "sessionId": SESSION_ID,
                "application": { "applicationId": APP_ID },
                "attributes": self.attributes
            },
            "context": {
                "System": { "device": { "supportedInterfaces": interfaces } }
            },
            "request": request
        }))
        .expect("request envelope should parse");

        let response = self
            .dispatcher
            .dispatch(envelope)
            .await
            .expect("dispatch should succeed");
        let body = serde_json::to_value(&response).unwrap();

        self.is_new = false;
        self.attributes = body["sessionAttributes"].clone();
        body
    }

    async fn launch(&mut self) -> Value {
        let id = self.request_id();
        self.send(json!({ "type": "LaunchRequest", "requestId": id }))
            .await
    }

    async fn say(&mut self, intent: &str, slots: &[(&str, Option<&str>)]) -> Value {
        let slots: serde_json::Map<String, Value> = slots
            .iter()
            .map(|(name, value)| {
                let slot = match value {
                    Some(v) => json!({ "name": name, "value": v }),
                    None => json!({ "name": name }),
                };
                (name.to_string(), slot)
            })
            .collect();
        let id = self.request_id();
        self.send(json!({
            "type": "IntentRequest",
            "requestId": id,
            "intent": { "name": intent, "slots": slots }
        }))
        .await
    }

    fn request_id(&mut self) -> String {
        let id = format!("amzn1.echo-api.request.{}", self.next_request);
        self.next_request += 1;
        id
    }

    async fn give_profile(&mut self) -> Value {
        self.say("weightEntry", &[("weight", Some("180"))]).await;
        self.say("ageEntry", &[("age", Some("40"))]).await;
        self.say("genderMale", &[]).await;
        self.say(
            "heightEntry",
            &[("heightFeet", Some("5")), ("heightInches", Some("10"))],
        )
        .await
    }
}

fn speech(body: &Value) -> &str {
    body["response"]["outputSpeech"]["text"]
        .as_str()
        .unwrap_or_default()
}

fn card(body: &Value) -> &str {
    body["response"]["card"]["content"]
        .as_str()
        .unwrap_or_default()
}

fn ends_session(body: &Value) -> bool {
    body["response"]["shouldEndSession"].as_bool().unwrap_or(false)
}

// =============================================================================
// Conversations
// =============================================================================

#[tokio::test]
async fn full_conversation_reaches_daily_intake() {
    let mut conversation = Conversation::new();

    let welcome = conversation.launch().await;
    assert!(speech(&welcome).starts_with("Welcome!"));
    assert!(!ends_session(&welcome));

    let after_weight = conversation
        .say("weightEntry", &[("weight", Some("180"))])
        .await;
    assert!(speech(&after_weight).starts_with("How old are you?"));

    let after_age = conversation.say("ageEntry", &[("age", Some("40"))]).await;
    assert_eq!(speech(&after_age), "Are you male or female?");

    let after_gender = conversation.say("genderMale", &[]).await;
    assert_eq!(speech(&after_gender), "How tall are you?");

    let bmr = conversation
        .say(
            "heightEntry",
            &[("heightFeet", Some("5")), ("heightInches", Some("10"))],
        )
        .await;
    assert_eq!(card(&bmr), "BMR: 1801 calories.");
    assert!(speech(&bmr).contains("40 year old male"));
    assert!(!ends_session(&bmr));
    assert_eq!(bmr["sessionAttributes"]["bmr"], 1801);

    let intake = conversation
        .say("activityLevel", &[("exerciseFrequency", Some("3"))])
        .await;
    assert_eq!(card(&intake), "Breakeven intake: 2792 calories.");
    assert!(speech(&intake).contains("931 per meal"));
    assert!(ends_session(&intake));

    assert_eq!(
        conversation.tracker.names(),
        vec![
            "Welcome Message",
            "Validate Entries",
            "Validate Entries",
            "Validate Entries",
            "BMR Calculated",
            "Calculate Daily Intake",
        ]
    );
}

#[tokio::test]
async fn measurements_accepted_in_any_order() {
    let mut conversation = Conversation::new();
    conversation.launch().await;

    conversation
        .say(
            "heightEntry",
            &[("heightFeet", Some("5")), ("heightInches", Some("10"))],
        )
        .await;
    conversation.say("genderMale", &[]).await;
    let ask_weight = conversation.say("ageEntry", &[("age", Some("40"))]).await;
    assert_eq!(speech(&ask_weight), "How much do you weigh?");

    let bmr = conversation
        .say("weightEntry", &[("weight", Some("180"))])
        .await;
    assert_eq!(card(&bmr), "BMR: 1801 calories.");
}

#[tokio::test]
async fn correction_after_bmr_recomputes_it() {
    let mut conversation = Conversation::new();
    conversation.launch().await;
    conversation.give_profile().await;

    let corrected = conversation
        .say("weightEntry", &[("weight", Some("200"))])
        .await;
    assert_eq!(card(&corrected), "BMR: 1925 calories.");
    assert!(speech(&corrected).contains("You weigh 200 pounds"));

    let intake = conversation.say("noExercise", &[]).await;
    // 1925 x 1.2
    assert_eq!(card(&intake), "Breakeven intake: 2310 calories.");
    assert!(ends_session(&intake));
}

#[tokio::test]
async fn ambiguous_and_missing_values_reprompt_without_losing_state() {
    let mut conversation = Conversation::new();
    conversation.launch().await;
    conversation
        .say("weightEntry", &[("weight", Some("180"))])
        .await;

    let ambiguous = conversation.say("ageEntry", &[("age", Some("?"))]).await;
    assert!(speech(&ambiguous).starts_with("Sorry, I didn't follow what age"));
    assert_eq!(card(&ambiguous), "No age provided");
    assert_eq!(ambiguous["sessionAttributes"]["weight"], 180.0);

    let missing = conversation.say("ageEntry", &[("age", None)]).await;
    assert!(speech(&missing).starts_with("No age provided"));
    assert!(!ends_session(&missing));

    let recovered = conversation.say("ageEntry", &[("age", Some("40"))]).await;
    assert_eq!(speech(&recovered), "Are you male or female?");

    let names = conversation.tracker.names();
    assert_eq!(names[2], "Invalid Age");
    assert_eq!(names[3], "Invalid Age");
}

#[tokio::test]
async fn exercise_before_profile_asks_for_next_measurement() {
    let mut conversation = Conversation::new();
    conversation.launch().await;

    let response = conversation
        .say("activityLevel", &[("exerciseFrequency", Some("3"))])
        .await;
    assert_eq!(speech(&response), "How much do you weigh?");
    assert!(!ends_session(&response));
}

#[tokio::test]
async fn missing_exercise_frequency_reprompts() {
    let mut conversation = Conversation::new();
    conversation.launch().await;
    conversation.give_profile().await;

    let response = conversation
        .say("activityLevel", &[("exerciseFrequency", None)])
        .await;
    assert!(speech(&response).starts_with("Sorry, I didn't get that."));
    assert!(!ends_session(&response));
    assert_eq!(response["sessionAttributes"]["bmr"], 1801);

    let intake = conversation
        .say("activityLevel", &[("exerciseFrequency", Some("6"))])
        .await;
    // 1801 x 1.725
    assert_eq!(card(&intake), "Breakeven intake: 3107 calories.");
}

#[tokio::test]
async fn sedentary_light_formula_is_configurable() {
    let mut conversation = Conversation::with_config(DialogConfig {
        light_exercise: LightExerciseFormula::Sedentary,
        meal_breakdown: false,
    });
    conversation.launch().await;
    conversation.give_profile().await;

    let intake = conversation
        .say("activityLevel", &[("exerciseFrequency", Some("1"))])
        .await;
    assert_eq!(card(&intake), "Breakeven intake: 2161 calories.");
    assert!(!speech(&intake).contains("per meal"));
}

#[tokio::test]
async fn start_over_clears_profile() {
    let mut conversation = Conversation::new();
    conversation.launch().await;
    conversation.give_profile().await;

    let restarted = conversation.say("AMAZON.StartOverIntent", &[]).await;
    assert!(speech(&restarted).starts_with("Welcome!"));
    assert_eq!(restarted["sessionAttributes"], json!({}));
}

#[tokio::test]
async fn help_keeps_collected_measurements() {
    let mut conversation = Conversation::new();
    conversation.launch().await;
    conversation
        .say("weightEntry", &[("weight", Some("180"))])
        .await;

    let help = conversation.say("AMAZON.HelpIntent", &[]).await;
    assert!(speech(&help).contains("Harris and Francis Gano Benedict"));
    assert_eq!(help["sessionAttributes"]["weight"], 180.0);
}

#[tokio::test]
async fn stop_ends_session() {
    let mut conversation = Conversation::new();
    conversation.launch().await;

    let goodbye = conversation.say("AMAZON.StopIntent", &[]).await;
    assert_eq!(
        speech(&goodbye),
        "Thank you for using the BMR Calculator. Have a nice day!"
    );
    assert!(ends_session(&goodbye));
    assert_eq!(conversation.tracker.names().last().unwrap(), "End Session");
}

#[tokio::test]
async fn display_device_receives_render_template() {
    let mut conversation = Conversation::new().on_display_device();

    let welcome = conversation.launch().await;
    let directive = &welcome["response"]["directives"][0];
    assert_eq!(directive["type"], "Display.RenderTemplate");
    assert_eq!(
        directive["template"]["textContent"]["primaryText"]["text"],
        "Getting Started"
    );
}

#[tokio::test]
async fn every_turn_is_tracked_against_the_session() {
    let mut conversation = Conversation::new();
    conversation.launch().await;
    conversation.give_profile().await;

    let events = conversation.tracker.events();
    assert_eq!(events.len(), 5);
    assert!(events
        .iter()
        .all(|e| e.conversation_id.as_str() == SESSION_ID));
    assert_eq!(
        events[4].metadata,
        Some(json!({ "bmr": 1801 }))
    );
}

#[tokio::test]
async fn help_restores_bmr_for_session_stored_without_it() {
    let mut conversation = Conversation::new();
    conversation.launch().await;
    conversation.attributes = json!({
        "weight": "180",
        "age": "40",
        "gender": "Male",
        "heightFeet": "5",
        "heightInches": "10"
    });

    let help = conversation.say("AMAZON.HelpIntent", &[]).await;
    assert_eq!(help["sessionAttributes"]["bmr"], 1801);

    let intake = conversation
        .say("activityLevel", &[("exerciseFrequency", Some("3"))])
        .await;
    assert_eq!(card(&intake), "Breakeven intake: 2792 calories.");
}
