use crate::attendee::{Attendee, Gender, LookingFor, PersonalityType};

/// An attendee without any onboarding answers.
pub fn attendee(id: &str, gender: Gender, age: u32) -> Attendee {
    Attendee {
        id: id.to_owned(),
        name: id.to_owned(),
        gender,
        age,
        job: "Engineering".to_owned(),
        is_first_time: false,
        trust_score: 5.0,
        personality_type: None,
        looking_for: None,
        ideal_weekend_activity: None,
        preferred_cuisine: None,
        purpose: None,
        relationship_priority: None,
    }
}

#[expect(clippy::too_many_arguments, reason = "fixture rows")]
fn onboarded(
    (id, name, gender, age, job): (&str, &str, Gender, u32, &str),
    is_first_time: bool,
    trust_score: f64,
    personality_type: PersonalityType,
    looking_for: LookingFor,
    ideal_weekend_activity: &str,
    preferred_cuisine: &str,
    purpose: &str,
) -> Attendee {
    Attendee {
        id: id.to_owned(),
        name: name.to_owned(),
        gender,
        age,
        job: job.to_owned(),
        is_first_time,
        trust_score,
        personality_type: Some(personality_type),
        looking_for: Some(looking_for),
        ideal_weekend_activity: Some(ideal_weekend_activity.to_owned()),
        preferred_cuisine: Some(preferred_cuisine.to_owned()),
        purpose: Some(purpose.to_owned()),
        relationship_priority: None,
    }
}

/// Three men and three women who went through onboarding.
pub fn mock_users() -> Vec<Attendee> {
    use Gender::{Female, Male};
    use PersonalityType::{Emotional, Rational};

    vec![
        onboarded(
            ("U001", "Nguyen Van A", Male, 28, "IT"),
            true,
            8.5,
            Rational,
            LookingFor::Female,
            "Going out with friends",
            "Japanese/Korean",
            "Serious dating",
        ),
        onboarded(
            ("U002", "Tran Thi B", Female, 25, "Marketing"),
            false,
            9.2,
            Emotional,
            LookingFor::Male,
            "Coffee and cake",
            "Vietnamese",
            "Friendship",
        ),
        onboarded(
            ("U003", "Le Minh C", Male, 30, "Finance"),
            true,
            7.8,
            Rational,
            LookingFor::Female,
            "Relaxing at home",
            "European",
            "New experiences",
        ),
        onboarded(
            ("U004", "Pham Thi D", Female, 27, "Design"),
            false,
            8.9,
            Emotional,
            LookingFor::Male,
            "Exploring new places",
            "Coffee and cake",
            "Serious dating",
        ),
        onboarded(
            ("U005", "Hoang Van E", Male, 32, "Business"),
            true,
            8.1,
            Rational,
            LookingFor::Open,
            "Sports",
            "Fast food",
            "Networking",
        ),
        onboarded(
            ("U006", "Vu Thi F", Female, 24, "IT"),
            false,
            9.0,
            Emotional,
            LookingFor::Male,
            "Books and movies",
            "Japanese/Korean",
            "Friendship",
        ),
    ]
}
