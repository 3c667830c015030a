use crate::models::{Location, UserProfile};

/// At most this many muscle groups are mentioned in the prompt
pub const MAX_TARGET_MUSCLES: usize = 3;

const GYM_EQUIPMENT: &str =
    "with access to a full gym (machines, barbells, dumbbells and cables)";
const HOME_EQUIPMENT: &str =
    "at home with minimal equipment (bodyweight, resistance bands, a pair of dumbbells)";

const WITH_CARDIO: &str = "Include cardio sessions in the weekly schedule.";
const WITHOUT_CARDIO: &str = "Do not include dedicated cardio sessions.";

/// Equipment phrase for a training location
pub fn equipment_description(location: Location) -> &'static str {
    match location {
        Location::Gym => GYM_EQUIPMENT,
        Location::Home => HOME_EQUIPMENT,
    }
}

/// Cardio instruction for the prompt
pub fn cardio_phrase(include_cardio: bool) -> &'static str {
    if include_cardio {
        WITH_CARDIO
    } else {
        WITHOUT_CARDIO
    }
}

/// First three target muscles joined with ", "
pub fn muscle_list(muscles: &[String]) -> String {
    muscles
        .iter()
        .take(MAX_TARGET_MUSCLES)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the text prompt sent to the generative model
pub fn build_prompt(profile: &UserProfile) -> String {
    format!(
        "You are a certified personal trainer. Create a weekly workout routine for a {gender} \
         who is {height:.0} cm tall and weighs {weight:.0} kg.\n\
         Primary goal: {goal}.\n\
         They can train {days} days per week for about {hours} hour(s) per session, {equipment}.\n\
         {cardio}\n\
         Focus on these muscle groups: {muscles}.\n\
         Lay the plan out day by day from Monday to Sunday, one day per heading. \
         For each training day list the exercises with sets and reps, and clearly mark rest days. \
         Keep it concise and do not include nutrition advice.",
        gender = profile.gender.as_str(),
        height = profile.height_cm,
        weight = profile.weight_kg,
        goal = profile.primary_goal.label(),
        days = profile.days_per_week,
        hours = format_hours(profile.hours_per_day),
        equipment = equipment_description(profile.location),
        cardio = cardio_phrase(profile.include_cardio),
        muscles = muscle_list(&profile.target_muscles),
    )
}

/// Up to two decimals with trailing zeros trimmed: 1.0 -> "1", 0.25 -> "0.25"
fn format_hours(hours: f64) -> String {
    let formatted = format!("{:.2}", hours);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, PrimaryGoal};

    fn create_test_profile() -> UserProfile {
        UserProfile {
            gender: Gender::Female,
            height_cm: 165.0,
            weight_kg: 60.0,
            primary_goal: PrimaryGoal::Other("improved endurance".to_string()),
            days_per_week: 3,
            hours_per_day: 1.5,
            location: Location::Home,
            include_cardio: true,
            target_muscles: vec![
                "chest".to_string(),
                "back".to_string(),
                "legs".to_string(),
                "arms".to_string(),
            ],
        }
    }

    #[test]
    fn test_muscle_list_truncates() {
        let profile = create_test_profile();
        assert_eq!(muscle_list(&profile.target_muscles), "chest, back, legs");
        assert_eq!(muscle_list(&["core".to_string()]), "core");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(1.0), "1");
        assert_eq!(format_hours(1.5), "1.5");
        assert_eq!(format_hours(0.25), "0.25");
        assert_eq!(format_hours(2.0), "2");
    }

    #[test]
    fn test_build_prompt() {
        let prompt = build_prompt(&create_test_profile());

        assert!(prompt.contains("for a female who is 165 cm tall and weighs 60 kg"));
        assert!(prompt.contains("Primary goal: improved endurance."));
        assert!(prompt.contains("3 days per week for about 1.5 hour(s)"));
        assert!(prompt.contains(HOME_EQUIPMENT));
        assert!(prompt.contains(WITH_CARDIO));
        assert!(prompt.contains("Focus on these muscle groups: chest, back, legs."));
        assert!(!prompt.contains("arms"));
    }

    #[test]
    fn test_gym_without_cardio() {
        let mut profile = create_test_profile();
        profile.location = Location::Gym;
        profile.include_cardio = false;

        let prompt = build_prompt(&profile);

        assert!(prompt.contains(GYM_EQUIPMENT));
        assert!(prompt.contains(WITHOUT_CARDIO));
    }
}
