//! Static catalogue data for the built-in quiz flows.

use crate::domain::catalogue::{Catalogue, Question, QuizOption};
use crate::domain::category::{CategoryMetadata, CategoryTable};

use super::QuizDefinition;

#[derive(Debug, Clone, Copy)]
struct OptionSeed {
    text: &'static str,
    description: Option<&'static str>,
    scores: &'static [(&'static str, u32)],
}

#[derive(Debug, Clone, Copy)]
struct QuestionSeed {
    id: &'static str,
    prompt: &'static str,
    subtitle: Option<&'static str>,
    options: &'static [OptionSeed],
}

#[derive(Debug, Clone, Copy)]
struct CategorySeed {
    key: &'static str,
    name: &'static str,
    icon: &'static str,
    description: &'static str,
    features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
struct QuizSeed {
    id: &'static str,
    title: &'static str,
    questions: &'static [QuestionSeed],
    categories: &'static [CategorySeed],
}

const fn option(
    text: &'static str,
    description: Option<&'static str>,
    scores: &'static [(&'static str, u32)],
) -> OptionSeed {
    OptionSeed { text, description, scores }
}

const CREATIVE_TIERS: QuizSeed = QuizSeed {
    id: "creative-tiers",
    title: "Find your creative services tier",
    questions: &[
        QuestionSeed {
            id: "project-scope",
            prompt: "How big is the project you have in mind?",
            subtitle: Some("Pick the closest fit; you can refine it with us later."),
            options: &[
                option("A single asset", Some("One logo, one flyer, one post"), &[("starter", 3)]),
                option("A small campaign", None, &[("starter", 1), ("growth", 3)]),
                option("An ongoing content stream", None, &[("growth", 2), ("premium", 2)]),
                option("A full brand programme", Some("Identity, guidelines, rollout"), &[("premium", 4)]),
            ],
        },
        QuestionSeed {
            id: "budget",
            prompt: "What monthly budget are you working with?",
            subtitle: None,
            options: &[
                option("Under $500", None, &[("starter", 3)]),
                option("$500 to $2,000", None, &[("growth", 3)]),
                option("$2,000 to $5,000", None, &[("growth", 1), ("premium", 2)]),
                option("Over $5,000", None, &[("premium", 4)]),
            ],
        },
        QuestionSeed {
            id: "turnaround",
            prompt: "How quickly do you need deliverables?",
            subtitle: None,
            options: &[
                option("No rush", None, &[("starter", 2)]),
                option("Within two weeks", None, &[("starter", 1), ("growth", 2)]),
                option("Within days, every time", Some("Priority queue"), &[("premium", 3)]),
            ],
        },
        QuestionSeed {
            id: "collaboration",
            prompt: "How involved do you want our team to be?",
            subtitle: Some("From hands-off delivery to an embedded creative partner."),
            options: &[
                option("Just send me the files", None, &[("starter", 2)]),
                option("Regular check-ins", None, &[("growth", 3)]),
                option("A dedicated creative lead", None, &[("growth", 1), ("premium", 3)]),
            ],
        },
    ],
    categories: &[
        CategorySeed {
            key: "starter",
            name: "Starter",
            icon: "🌱",
            description: "Essential creative work for one-off needs.",
            features: &["2 revision rounds", "Standard turnaround", "Source files included"],
        },
        CategorySeed {
            key: "growth",
            name: "Growth",
            icon: "🚀",
            description: "Steady output for teams running regular campaigns.",
            features: &["Monthly content plan", "Bi-weekly check-ins", "Analytics summary"],
        },
        CategorySeed {
            key: "premium",
            name: "Premium",
            icon: "💎",
            description: "A dedicated creative partner for brand-level work.",
            features: &[
                "Dedicated creative lead",
                "Priority turnaround",
                "Unlimited revisions",
                "Brand guideline stewardship",
            ],
        },
    ],
};

const LANDING_SERVICES: QuizSeed = QuizSeed {
    id: "landing-services",
    title: "Which service fits your business?",
    questions: &[
        QuestionSeed {
            id: "main-goal",
            prompt: "What is your main goal right now?",
            subtitle: None,
            options: &[
                option("Look more professional online", None, &[("web-design", 3), ("branding", 1)]),
                option("Stand out from competitors", None, &[("branding", 3)]),
                option("Get more customers", None, &[("marketing", 3), ("web-design", 1)]),
                option("Offer customers an app", None, &[("app-development", 4)]),
            ],
        },
        QuestionSeed {
            id: "current-presence",
            prompt: "How would you describe your current online presence?",
            subtitle: None,
            options: &[
                option("We don't have a website", None, &[("web-design", 3)]),
                option("We have a site but it feels dated", None, &[("web-design", 2), ("branding", 2)]),
                option("Our site is fine but nobody visits", None, &[("marketing", 3)]),
                option("We need more than a website", None, &[("app-development", 3)]),
            ],
        },
        QuestionSeed {
            id: "brand-assets",
            prompt: "Do you have a logo and brand guidelines?",
            subtitle: None,
            options: &[
                option("Yes, and we love them", None, &[("marketing", 2)]),
                option("We have a logo, nothing else", None, &[("branding", 2), ("web-design", 1)]),
                option("Nothing yet", None, &[("branding", 3)]),
            ],
        },
        QuestionSeed {
            id: "timeframe",
            prompt: "When would you like to see results?",
            subtitle: Some("Helps us suggest where to start."),
            options: &[
                option("This month", None, &[("marketing", 2), ("web-design", 1)]),
                option("This quarter", None, &[("web-design", 2), ("branding", 1)]),
                option("We're planning for the year", None, &[("branding", 1), ("app-development", 2)]),
            ],
        },
    ],
    categories: &[
        CategorySeed {
            key: "web-design",
            name: "Web Design",
            icon: "🖥️",
            description: "Fast, responsive websites that turn visitors into customers.",
            features: &["Responsive layout", "SEO foundations", "Content management"],
        },
        CategorySeed {
            key: "branding",
            name: "Branding",
            icon: "🎨",
            description: "A distinctive identity that people remember.",
            features: &["Logo suite", "Colour and type system", "Brand guidelines"],
        },
        CategorySeed {
            key: "marketing",
            name: "Digital Marketing",
            icon: "📣",
            description: "Campaigns that bring the right people to your door.",
            features: &["Paid social", "Email campaigns", "Monthly reporting"],
        },
        CategorySeed {
            key: "app-development",
            name: "App Development",
            icon: "📱",
            description: "Mobile and web apps built around your customers.",
            features: &["iOS and Android", "Design prototypes", "Launch support"],
        },
    ],
};

const FESTIVAL_MATCH: QuizSeed = QuizSeed {
    id: "festival-match",
    title: "Discover the spiritual festival for you",
    questions: &[
        QuestionSeed {
            id: "energy",
            prompt: "What kind of energy are you drawn to?",
            subtitle: None,
            options: &[
                option("Music, colour and dancing", None, &[("celebration", 3)]),
                option("Stillness and silence", None, &[("contemplative", 3)]),
                option("Chanting and prayer", None, &[("devotional", 3)]),
                option("Sharing food with others", None, &[("community", 3)]),
            ],
        },
        QuestionSeed {
            id: "setting",
            prompt: "Where do you feel most at peace?",
            subtitle: None,
            options: &[
                option("In a crowd of thousands", None, &[("celebration", 2), ("community", 1)]),
                option("Alone in nature", None, &[("contemplative", 3)]),
                option("In a temple or shrine", None, &[("devotional", 2), ("contemplative", 1)]),
                option("At a long shared table", None, &[("community", 3)]),
            ],
        },
        QuestionSeed {
            id: "duration",
            prompt: "How long would you like to take part?",
            subtitle: Some("Some festivals last an evening, others a season."),
            options: &[
                option("One night", None, &[("celebration", 2)]),
                option("A weekend retreat", None, &[("contemplative", 2), ("community", 1)]),
                option("Several days of observance", None, &[("devotional", 3)]),
            ],
        },
        QuestionSeed {
            id: "intention",
            prompt: "What do you hope to take home?",
            subtitle: None,
            options: &[
                option("Joy", None, &[("celebration", 3)]),
                option("Clarity", None, &[("contemplative", 3)]),
                option("Faith", None, &[("devotional", 3)]),
                option("Belonging", None, &[("community", 3)]),
            ],
        },
    ],
    categories: &[
        CategorySeed {
            key: "celebration",
            name: "Festival of Colour",
            icon: "🎉",
            description: "Joyous, loud and communal celebrations of renewal.",
            features: &["Live music", "Colour rituals", "Street processions"],
        },
        CategorySeed {
            key: "contemplative",
            name: "Silent Retreat",
            icon: "🧘",
            description: "Quiet gatherings centred on meditation and reflection.",
            features: &["Guided meditation", "Nature walks", "Digital detox"],
        },
        CategorySeed {
            key: "devotional",
            name: "Festival of Lights",
            icon: "🪔",
            description: "Observances built around prayer, song and offering.",
            features: &["Temple ceremonies", "Devotional singing", "Lamp lighting"],
        },
        CategorySeed {
            key: "community",
            name: "Harvest Gathering",
            icon: "🌾",
            description: "Shared meals and gratitude with neighbours and strangers.",
            features: &["Communal feast", "Volunteer service", "Storytelling circles"],
        },
    ],
};

const WELLNESS_SYSTEMS: QuizSeed = QuizSeed {
    id: "wellness-systems",
    title: "Which body system needs your attention?",
    questions: &[
        QuestionSeed {
            id: "energy-levels",
            prompt: "How are your energy levels through the day?",
            subtitle: None,
            options: &[
                option("Steady", None, &[]),
                option("Crash after meals", None, &[("digestive", 3)]),
                option("Wired but tired", None, &[("nervous", 3)]),
                option("Low and slow to recover", None, &[("immune", 2), ("cardiovascular", 1)]),
            ],
        },
        QuestionSeed {
            id: "sleep",
            prompt: "How well do you sleep?",
            subtitle: None,
            options: &[
                option("Soundly", None, &[]),
                option("Hard to fall asleep", None, &[("nervous", 3)]),
                option("Wake up unrefreshed", None, &[("immune", 1), ("cardiovascular", 2)]),
            ],
        },
        QuestionSeed {
            id: "frequent-issue",
            prompt: "Which of these do you notice most often?",
            subtitle: Some("Choose the one that bothers you most."),
            options: &[
                option("Bloating or indigestion", None, &[("digestive", 4)]),
                option("Frequent colds", None, &[("immune", 4)]),
                option("Racing thoughts", None, &[("nervous", 4)]),
                option("Shortness of breath on stairs", None, &[("cardiovascular", 4)]),
            ],
        },
        QuestionSeed {
            id: "activity",
            prompt: "How active are you in a typical week?",
            subtitle: None,
            options: &[
                option("Very active", None, &[]),
                option("Some walking", None, &[("cardiovascular", 1)]),
                option("Mostly sitting", None, &[("cardiovascular", 2), ("digestive", 1)]),
            ],
        },
    ],
    categories: &[
        CategorySeed {
            key: "nervous",
            name: "Nervous System",
            icon: "🧠",
            description: "Support for stress, focus and restful sleep.",
            features: &["Breathwork sessions", "Sleep hygiene plan", "Adaptogen guide"],
        },
        CategorySeed {
            key: "digestive",
            name: "Digestive System",
            icon: "🥗",
            description: "Gut-friendly routines for steady energy.",
            features: &["Food diary review", "Fermented foods primer", "Meal timing plan"],
        },
        CategorySeed {
            key: "immune",
            name: "Immune System",
            icon: "🛡️",
            description: "Habits that help you bounce back faster.",
            features: &["Seasonal nutrition", "Recovery routines", "Vitamin D check-in"],
        },
        CategorySeed {
            key: "cardiovascular",
            name: "Cardiovascular System",
            icon: "❤️",
            description: "Heart-healthy movement and circulation support.",
            features: &["Walking programme", "Resting heart rate tracking", "Mobility sessions"],
        },
    ],
};

const QUIZ_SEEDS: &[QuizSeed] = &[CREATIVE_TIERS, LANDING_SERVICES, FESTIVAL_MATCH, WELLNESS_SYSTEMS];

fn build_option(seed: &OptionSeed) -> QuizOption {
    let mut option = QuizOption::new(seed.text);
    if let Some(description) = seed.description {
        option = option.with_description(description);
    }
    seed.scores.iter().fold(option, |option, (category, weight)| option.with_score(*category, *weight))
}

fn build_question(seed: &QuestionSeed) -> Question {
    let mut question = Question::new(seed.id, seed.prompt);
    if let Some(subtitle) = seed.subtitle {
        question = question.with_subtitle(subtitle);
    }
    seed.options.iter().map(build_option).fold(question, Question::with_option)
}

fn build_category(seed: &CategorySeed) -> CategoryMetadata {
    CategoryMetadata::new(seed.key, seed.name)
        .with_icon(seed.icon)
        .with_description(seed.description)
        .with_features(seed.features.iter().copied())
}

fn build_quiz(seed: &QuizSeed) -> QuizDefinition {
    QuizDefinition {
        id: seed.id.to_owned(),
        title: seed.title.to_owned(),
        catalogue: seed.questions.iter().map(build_question).collect::<Catalogue>(),
        categories: seed.categories.iter().map(build_category).collect::<CategoryTable>(),
    }
}

pub(super) fn builtin_quizzes() -> Vec<QuizDefinition> {
    QUIZ_SEEDS.iter().map(build_quiz).collect()
}

#[cfg(test)]
mod tests {
    use crate::domain::answers::Answers;
    use crate::recommend::compute_recommendations;

    use super::builtin_quizzes;

    fn quiz(id: &str) -> crate::quizzes::QuizDefinition {
        builtin_quizzes().into_iter().find(|quiz| quiz.id == id).expect("builtin quiz")
    }

    #[test]
    fn seeds_convert_to_owned_definitions() {
        let creative = quiz("creative-tiers");

        assert_eq!(creative.catalogue.len(), 4);
        assert_eq!(creative.categories.len(), 3);
        let scope = creative.catalogue.question("project-scope").expect("scope question");
        assert_eq!(scope.options[0].description.as_deref(), Some("One logo, one flyer, one post"));
        assert_eq!(scope.options[2].weight("growth"), 2);
    }

    #[test]
    fn festival_answers_pick_the_matching_archetype() {
        let festival = quiz("festival-match");
        let answers = Answers::new()
            .with("energy", 1)
            .with("setting", 1)
            .with("duration", 1)
            .with("intention", 1);

        let ranked = compute_recommendations(&festival.catalogue, &answers, 3);

        assert_eq!(ranked[0].category.as_str(), "contemplative");
        assert_eq!(ranked[0].score, 11);
        assert_eq!(ranked[1].category.as_str(), "community");
    }

    #[test]
    fn all_healthy_wellness_answers_recommend_nothing() {
        let wellness = quiz("wellness-systems");
        let answers = Answers::new().with("energy-levels", 0).with("sleep", 0).with("activity", 0);

        assert!(compute_recommendations(&wellness.catalogue, &answers, 3).is_empty());
    }
}
