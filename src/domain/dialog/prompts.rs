//! Spoken text for every reply the dialog can give.

use crate::domain::measurement::{Outcome, Slot};
use crate::domain::metabolism::{per_meal, ActivityLevel, BodyProfile};

use super::response::TurnResponse;

const WELCOME_TITLE: &str = "Welcome to the metabolic calculator";
const SLOT_TITLE: &str = "Welcome to Metabolic Calculator";
const PROGRESS_TITLE: &str = "Metabolic Counter";
const RESULT_TITLE: &str = "Metabolic Calculator";
const HELP_TITLE: &str = "Help";
const GOODBYE_TITLE: &str = "Thanks for using the BMR Calculator";

const PROGRESS_CARD: &str = "To generate BMR, need to provide gender, height, weight, and age.";

const EXERCISE_REPROMPT: &str = "Please let me know how often you exercise and I will generate \
     your recommended daily caloric intake.";

pub fn welcome() -> TurnResponse {
    TurnResponse::ask(
        WELCOME_TITLE,
        "Welcome! Please answer a few questions, to calculate your specific Basal metabolic \
         rate, as well as your recommended daily intake of calories to maintain your current \
         weight. If you're ready to get started, please let us know your personal measurements \
         by saying something like, I currently weigh 180 pounds.",
        "Getting Started",
        "If you're ready to get started, please begin by providing your weight.",
    )
}

pub fn help() -> TurnResponse {
    let speech = "There are several factors that influence your metabolism. Researchers have \
         found that gender, height, weight, and age all play a factor. A groundbreaking study by \
         James Arthur Harris and Francis Gano Benedict created a way of calculating humans Basal \
         metabolic rate as well as the closely related Recommended Daily Calorie Intake that \
         provides the breakeven level at which an individual will maintain their current weight. \
         This skill walks through the calculation by asking questions around these factors, then \
         providing the customized profile. To get started, just say something like, I weigh 170 \
         pounds, and the skill will work through the other questions.";
    TurnResponse::ask(
        HELP_TITLE,
        speech,
        speech,
        "Please tell me how much you weigh, and the skill will walk through the other necessary \
         data points for calculating your BMR.",
    )
}

pub fn goodbye() -> TurnResponse {
    let speech = "Thank you for using the BMR Calculator. Have a nice day!";
    TurnResponse::tell(GOODBYE_TITLE, speech, speech)
}

/// The fixed question for a slot still to be collected.
pub fn question(slot: Slot) -> TurnResponse {
    let (speech, reprompt) = match slot {
        Slot::Weight => (
            "How much do you weigh?",
            "Please provide your weight to calculate your BMR.",
        ),
        Slot::Age => (
            "How old are you? For example, say I am forty years old.",
            "Please provide your age in years to calculate your BMR.",
        ),
        Slot::Gender => (
            "Are you male or female?",
            "Please provide your gender to calculate your BMR.",
        ),
        Slot::Height => (
            "How tall are you?",
            "Please provide your height by saying your height.",
        ),
    };
    TurnResponse::ask(PROGRESS_TITLE, speech, PROGRESS_CARD, reprompt)
}

/// Re-prompt for a measurement turn that was not accepted.
pub fn rejection(slot: Slot, outcome: Outcome) -> TurnResponse {
    let ambiguous = matches!(outcome, Outcome::AmbiguousValue);
    let (speech, reprompt) = match slot {
        Slot::Weight => (
            if ambiguous {
                "Sorry, I didn't follow what weight you provided. Please try again."
            } else {
                "Sorry, I didn't hear you provide a weight. Can you please try again."
            },
            "Please provide your weight in pounds saying something like, I weigh 150 pounds.",
        ),
        Slot::Age => (
            if ambiguous {
                "Sorry, I didn't follow what age you provided. Please tell me how many years \
                 old you are."
            } else {
                "No age provided. Please make sure you include the word years in your response."
            },
            "I'm sorry, I didn't understand your answer. Please let me know how many years old \
             you are.",
        ),
        Slot::Height => (
            if ambiguous {
                "Sorry, I didn't follow what height you provided. Please tell me your height by \
                 saying something like, I am five feet and ten inches tall."
            } else {
                "Sorry, I didn't hear you correctly. Can you please tell me your height by saying \
                 something like, I am five feet and ten inches tall."
            },
            "Please provide me your height by saying something like, I am five feet and ten \
             inches tall.",
        ),
        Slot::Gender => (
            "Sorry, I didn't catch that. Are you male or female?",
            "Please provide your gender to calculate your BMR.",
        ),
    };
    TurnResponse::ask(
        SLOT_TITLE,
        speech,
        format!("No {} provided", slot.label()),
        reprompt,
    )
}

/// Reads back the profile with its BMR and asks about exercise.
pub fn bmr_summary(profile: &BodyProfile, bmr: i64) -> TurnResponse {
    let mut height = format!("{} feet", profile.height_feet);
    if let Some(inches) = profile.height_inches {
        height.push_str(&format!(" {} inches", inches));
    }
    let speech = format!(
        "Thank you for providing all the information I need. I have you as a {age} year old \
         {gender}. You weigh {weight} pounds, and are {height} tall. Based on the Harris \
         Benedict principle, your BMR is {bmr}. If any of these values are incorrect, just \
         reply with the updated information. If it is correct, let's convert this to your \
         daily recommended caloric intake. How often do you exercise? Either say I don't \
         exercise, or something like I exercise 2 days per week.",
        age = profile.age_years,
        gender = profile.gender.spoken(),
        weight = profile.weight_lb,
    );
    TurnResponse::ask(
        PROGRESS_TITLE,
        speech,
        format!("BMR: {} calories.", bmr),
        EXERCISE_REPROMPT,
    )
}

/// Asks about exercise once BMR is already known.
pub fn exercise_question(bmr: i64) -> TurnResponse {
    TurnResponse::ask(
        PROGRESS_TITLE,
        format!(
            "Your BMR is {}. How often do you exercise? Either say I don't exercise, or \
             something like I exercise 2 days per week.",
            bmr
        ),
        format!("BMR: {} calories.", bmr),
        EXERCISE_REPROMPT,
    )
}

pub fn missing_frequency() -> TurnResponse {
    TurnResponse::ask(
        RESULT_TITLE,
        "Sorry, I didn't get that. How often do you exercise?",
        "No exercise frequency provided",
        EXERCISE_REPROMPT,
    )
}

/// Final answer: the daily intake for the user's activity level.
pub fn intake_summary(level: ActivityLevel, dci: i64, meal_breakdown: bool) -> TurnResponse {
    let mut speech = format!(
        "Based on {}, the recommended daily calorie intake for you to maintain your current \
         weight is {} calories.",
        level.description(),
        dci
    );
    if meal_breakdown {
        speech.push_str(&format!(
            " If you split this evenly over three meals, it would be {} per meal.",
            per_meal(dci)
        ));
    }
    TurnResponse::tell(
        RESULT_TITLE,
        speech,
        format!("Breakeven intake: {} calories.", dci),
    )
}
