use super::views::Recommendation;

pub(crate) struct CareerRole {
    pub title: &'static str,
    pub match_percent: u8,
    pub description: &'static str,
    pub requirements: &'static str,
}

pub(crate) struct LearningStage {
    pub level: &'static str,
    pub courses: [&'static str; 3],
    pub timeframe: &'static str,
}

pub(crate) struct NextStep {
    pub horizon: &'static str,
    pub action: &'static str,
}

pub(crate) static CAREER_ROLES: [CareerRole; 4] = [
    CareerRole {
        title: "Licensed Mental Health Counselor",
        match_percent: 85,
        description: "Providing individual and group therapy in clinical settings",
        requirements: "Master's degree, supervised clinical hours, state licensure",
    },
    CareerRole {
        title: "School Counselor",
        match_percent: 78,
        description: "Supporting student emotional and social development",
        requirements: "Master's in counseling, teaching credential (varies by state)",
    },
    CareerRole {
        title: "Substance Abuse Counselor",
        match_percent: 72,
        description: "Specialized treatment for addiction and recovery",
        requirements: "Bachelor's degree minimum, certification in addiction counseling",
    },
    CareerRole {
        title: "Crisis Intervention Specialist",
        match_percent: 80,
        description: "Emergency mental health support and crisis response",
        requirements: "Bachelor's degree, crisis intervention training",
    },
];

pub(crate) static LEARNING_PATH: [LearningStage; 3] = [
    LearningStage {
        level: "Beginner",
        courses: [
            "Introduction to Psychology",
            "Communication Skills",
            "Ethics in Counseling",
        ],
        timeframe: "3-6 months",
    },
    LearningStage {
        level: "Intermediate",
        courses: [
            "Counseling Techniques",
            "Abnormal Psychology",
            "Group Therapy Methods",
        ],
        timeframe: "6-12 months",
    },
    LearningStage {
        level: "Job-Ready",
        courses: [
            "Clinical Practicum",
            "Supervised Field Experience",
            "Licensure Preparation",
        ],
        timeframe: "12-24 months",
    },
];

pub(crate) static NEXT_STEPS: [NextStep; 4] = [
    NextStep {
        horizon: "Immediate",
        action: "Begin with introduction to psychology courses and communication skills training",
    },
    NextStep {
        horizon: "Short-term (3-6 months)",
        action: "Volunteer with mental health organizations to gain practical experience",
    },
    NextStep {
        horizon: "Medium-term (6-12 months)",
        action: "Enroll in formal counseling education program",
    },
    NextStep {
        horizon: "Long-term (1-2 years)",
        action: "Complete supervised clinical hours and pursue licensure",
    },
];

/// Showcase figures used in static mode regardless of the answers given.
pub(crate) mod fixed {
    use super::Recommendation;

    pub const OVERALL: f64 = 78.0;
    pub const CONFIDENCE: f64 = 85.0;
    pub const RECOMMENDATION: Recommendation = Recommendation::Yes;
    pub const PSYCHOMETRIC: f64 = 82.0;
    pub const TECHNICAL: f64 = 74.0;
    pub const WISCAR: [(&str, f64); 6] = [
        ("Will", 85.0),
        ("Interest", 90.0),
        ("Skill", 75.0),
        ("Cognitive", 80.0),
        ("Ability", 88.0),
        ("Real-World", 70.0),
    ];
}
