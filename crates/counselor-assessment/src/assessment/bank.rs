use super::domain::{ChoiceStyle, Question, QuestionFormat, ResponseMapping, SectionId};
use super::scoring::{self, ScoreMapping, ScoringRule};

/// Static ordered question list for one section, with its aggregation groups.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBank {
    section: SectionId,
    categories: Vec<&'static str>,
    rule: ScoringRule,
    overall_label: &'static str,
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn for_section(section: SectionId) -> Self {
        match section {
            SectionId::Psychometric => Self::psychometric(),
            SectionId::Technical => Self::technical(),
            SectionId::Wiscar => Self::wiscar(),
        }
    }

    pub fn psychometric() -> Self {
        Self {
            section: SectionId::Psychometric,
            categories: vec![
                "Interest Scale",
                "Personality Compatibility",
                "Cognitive Style",
                "Motivation",
            ],
            rule: ScoringRule::SelfReport,
            overall_label: "Overall",
            questions: psychometric_questions(),
        }
    }

    pub fn technical() -> Self {
        Self {
            section: SectionId::Technical,
            categories: vec![
                "General Aptitude",
                "Prerequisite Knowledge",
                "Domain-Specific",
            ],
            rule: ScoringRule::Graded,
            overall_label: "Overall",
            questions: technical_questions(),
        }
    }

    pub fn wiscar() -> Self {
        Self {
            section: SectionId::Wiscar,
            categories: vec![
                "Will",
                "Interest",
                "Skill",
                "Cognitive",
                "Ability",
                "Real-World",
            ],
            rule: ScoringRule::SelfReport,
            overall_label: "Overall Confidence",
            questions: wiscar_questions(),
        }
    }

    pub fn section(&self) -> SectionId {
        self.section
    }

    pub fn categories(&self) -> &[&'static str] {
        &self.categories
    }

    pub fn rule(&self) -> ScoringRule {
        self.rule
    }

    pub fn overall_label(&self) -> &'static str {
        self.overall_label
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn questions_in(&self, category: &str) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.category == category)
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn without_questions(mut self) -> Self {
        self.questions.clear();
        self
    }

    /// Full recomputation of the section's score mapping.
    pub fn score(&self, responses: &ResponseMapping) -> ScoreMapping {
        match self.rule {
            ScoringRule::SelfReport => scoring::aggregate(responses, self),
            ScoringRule::Graded => scoring::grade(responses, self),
        }
    }
}

fn psychometric_questions() -> Vec<Question> {
    vec![
        Question {
            id: "interest_1",
            text: "I am genuinely interested in understanding human behavior and mental processes",
            category: "Interest Scale",
            format: QuestionFormat::Likert,
        },
        Question {
            id: "interest_2",
            text: "I find myself naturally drawn to helping others work through their problems",
            category: "Interest Scale",
            format: QuestionFormat::Likert,
        },
        Question {
            id: "personality_1",
            text: "I remain calm and composed even in emotionally charged situations",
            category: "Personality Compatibility",
            format: QuestionFormat::Likert,
        },
        Question {
            id: "personality_2",
            text: "I am comfortable with ambiguous situations where there may not be clear answers",
            category: "Personality Compatibility",
            format: QuestionFormat::Likert,
        },
        Question {
            id: "cognitive_1",
            text: "I prefer working with people's emotional needs rather than technical problems",
            category: "Cognitive Style",
            format: QuestionFormat::Choice {
                style: ChoiceStyle::Binary,
                options: vec![
                    "Strongly prefer people-focused work",
                    "Strongly prefer technical work",
                ],
            },
        },
        Question {
            id: "motivation_1",
            text: "My primary motivation for considering mental health counseling is:",
            category: "Motivation",
            format: QuestionFormat::Choice {
                style: ChoiceStyle::Binary,
                options: vec![
                    "Making a meaningful impact on people's lives",
                    "Job security and stable career prospects",
                ],
            },
        },
    ]
}

fn technical_questions() -> Vec<Question> {
    vec![
        Question {
            id: "aptitude_1",
            text: "If a therapist sees 8 clients per day, 5 days a week, and each session is 50 minutes with a 10-minute break between sessions, how many total hours per week are dedicated to client sessions?",
            category: "General Aptitude",
            format: QuestionFormat::Graded {
                style: ChoiceStyle::MultipleChoice,
                options: vec!["33.3 hours", "40 hours", "30 hours", "36.7 hours"],
                correct: 0,
                explanation: "8 clients × 50 minutes × 5 days = 2000 minutes = 33.3 hours",
            },
        },
        Question {
            id: "knowledge_1",
            text: "The concept of 'transference' in therapy refers to:",
            category: "Prerequisite Knowledge",
            format: QuestionFormat::Graded {
                style: ChoiceStyle::MultipleChoice,
                options: vec![
                    "When a client transfers their feelings about someone else onto the therapist",
                    "When a therapist transfers their own feelings onto the client",
                    "The process of transferring treatment records between providers",
                    "Moving therapy sessions from one location to another",
                ],
                correct: 0,
                explanation: "Transference occurs when clients project feelings, attitudes, or desires from past relationships onto the therapist.",
            },
        },
        Question {
            id: "domain_1",
            text: "According to the APA Code of Ethics, what should a counselor do if they realize they lack competence to treat a client's specific condition?",
            category: "Domain-Specific",
            format: QuestionFormat::Graded {
                style: ChoiceStyle::MultipleChoice,
                options: vec![
                    "Continue treatment while researching the condition",
                    "Refer the client to a specialist or seek supervision/consultation",
                    "Terminate the therapeutic relationship immediately",
                    "Inform the client they cannot help and discharge them",
                ],
                correct: 1,
                explanation: "Ethical practice requires seeking appropriate supervision, consultation, or making referrals when lacking competence.",
            },
        },
        Question {
            id: "aptitude_2",
            text: "A pattern shows: 2, 6, 18, 54, ... What is the next number?",
            category: "General Aptitude",
            format: QuestionFormat::Graded {
                style: ChoiceStyle::MultipleChoice,
                options: vec!["108", "162", "216", "270"],
                correct: 1,
                explanation: "Each number is multiplied by 3: 2×3=6, 6×3=18, 18×3=54, 54×3=162",
            },
        },
        Question {
            id: "knowledge_2",
            text: "Cognitive Behavioral Therapy (CBT) primarily focuses on the relationship between thoughts, feelings, and behaviors.",
            category: "Prerequisite Knowledge",
            format: QuestionFormat::Graded {
                style: ChoiceStyle::TrueFalse,
                options: vec!["True", "False"],
                correct: 0,
                explanation: "CBT is based on the principle that thoughts, feelings, and behaviors are interconnected and influence each other.",
            },
        },
        Question {
            id: "domain_2",
            text: "Which therapeutic approach emphasizes the client's inherent capacity for growth and self-actualization?",
            category: "Domain-Specific",
            format: QuestionFormat::Graded {
                style: ChoiceStyle::MultipleChoice,
                options: vec![
                    "Psychoanalytic therapy",
                    "Humanistic/Person-centered therapy",
                    "Behavioral therapy",
                    "Cognitive therapy",
                ],
                correct: 1,
                explanation: "Humanistic therapy, developed by Carl Rogers, emphasizes the client's natural tendency toward growth and self-actualization.",
            },
        },
    ]
}

fn wiscar_questions() -> Vec<Question> {
    vec![
        Question {
            id: "will_1",
            text: "When I commit to helping someone, I persist even when progress is slow or difficult",
            category: "Will",
            format: QuestionFormat::Likert,
        },
        Question {
            id: "will_2",
            text: "I have demonstrated long-term commitment to challenging goals in the past",
            category: "Will",
            format: QuestionFormat::Likert,
        },
        Question {
            id: "interest_1",
            text: "How much time do you spend reading about mental health topics or watching related content?",
            category: "Interest",
            format: QuestionFormat::Scale,
        },
        Question {
            id: "interest_2",
            text: "I find myself naturally curious about what motivates people's behavior",
            category: "Interest",
            format: QuestionFormat::Likert,
        },
        Question {
            id: "skill_1",
            text: "People often come to me for advice when they're going through difficult times",
            category: "Skill",
            format: QuestionFormat::Likert,
        },
        Question {
            id: "skill_2",
            text: "Rate your current ability to listen empathetically without immediately offering solutions",
            category: "Skill",
            format: QuestionFormat::Scale,
        },
        Question {
            id: "cognitive_1",
            text: "When faced with a complex problem, I prefer to:",
            category: "Cognitive",
            format: QuestionFormat::Choice {
                style: ChoiceStyle::MultipleChoice,
                options: vec![
                    "Break it down into smaller, manageable parts",
                    "Look for patterns and underlying themes",
                    "Consider multiple perspectives before deciding",
                    "Trust my intuition and emotional understanding",
                ],
            },
        },
        Question {
            id: "cognitive_2",
            text: "I can effectively analyze complex emotional situations and identify key issues",
            category: "Cognitive",
            format: QuestionFormat::Likert,
        },
        Question {
            id: "ability_1",
            text: "I actively seek feedback on my interpersonal skills and am open to changing my approach",
            category: "Ability",
            format: QuestionFormat::Likert,
        },
        Question {
            id: "ability_2",
            text: "When I don't understand something, I persist in learning until I grasp the concept",
            category: "Ability",
            format: QuestionFormat::Likert,
        },
        Question {
            id: "realworld_1",
            text: "Which aspect of mental health counseling appeals to you most?",
            category: "Real-World",
            format: QuestionFormat::Choice {
                style: ChoiceStyle::MultipleChoice,
                options: vec![
                    "One-on-one therapy sessions helping individuals work through personal challenges",
                    "Crisis intervention and providing support during mental health emergencies",
                    "Group therapy and community mental health programs",
                    "Specialized treatment for specific conditions (addiction, trauma, etc.)",
                ],
            },
        },
        Question {
            id: "realworld_2",
            text: "I understand the day-to-day realities of working as a mental health counselor",
            category: "Real-World",
            format: QuestionFormat::Likert,
        },
    ]
}
