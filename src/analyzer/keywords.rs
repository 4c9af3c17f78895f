//! Curated keyword tables driving the persona analysis.
//!
//! All classification in this crate is literal substring matching against
//! these tables.  The tables are explicit configuration owned by the
//! analyzer rather than hidden constants, so tests can substitute alternate
//! tables.
//!
//! Order matters everywhere it is expressed as a sequence: demographic
//! lookups are first-match-wins, and frustration/goal categories emit their
//! sentences in table order.

/// One `(keyword, inferred value)` demographic entry.
///
/// Demographic tables are ordered sequences evaluated front to back; the
/// first keyword found as a substring wins.
pub type Indicator = (&'static str, &'static str);

/// Two disjoint keyword sets for the poles of a personality axis.
///
/// The axis score measures the share of pole-B occurrences, scaled to
/// `[0, 100]`, so pole B is the high end of the axis.
#[derive(Debug, Clone)]
pub struct AxisKeywords {
    /// Keywords signalling the low (score 0) pole.
    pub pole_a: Vec<&'static str>,
    /// Keywords signalling the high (score 100) pole.
    pub pole_b: Vec<&'static str>,
}

/// A characteristic label gated by a strict occurrence threshold.
#[derive(Debug, Clone)]
pub struct CharacteristicRule {
    /// Label emitted when the threshold is exceeded.
    pub label: &'static str,
    /// Keywords whose occurrence counts are summed.
    pub keywords: Vec<&'static str>,
    /// Inclusion requires strictly more than this many occurrences.
    pub threshold: usize,
}

/// A named motivation category scored by keyword frequency.
#[derive(Debug, Clone)]
pub struct MotivationCategory {
    /// Category name as it appears in the persona record.
    pub name: &'static str,
    /// Keywords whose occurrence counts are summed.
    pub keywords: Vec<&'static str>,
}

/// A frustration or goal category: any keyword match emits the sentence.
///
/// At most one sentence per category, no matter how many keywords match.
#[derive(Debug, Clone)]
pub struct CategoryRule {
    /// Category name, for diagnostics only.
    pub name: &'static str,
    /// Trigger keywords.
    pub keywords: Vec<&'static str>,
    /// Fixed sentence emitted on any match.
    pub sentence: &'static str,
}

/// The full keyword configuration for a [`PersonaAnalyzer`].
///
/// [`PersonaAnalyzer`]: crate::analyzer::PersonaAnalyzer
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Ordered age indicators, first match wins.
    pub age_indicators: Vec<Indicator>,
    /// Ordered location indicators, first match wins.
    pub location_indicators: Vec<Indicator>,
    /// Ordered occupation indicators, first match wins.
    pub occupation_indicators: Vec<Indicator>,
    /// Married-status indicators (highest priority relationship group).
    pub married_indicators: Vec<&'static str>,
    /// In-a-relationship indicators (middle priority).
    pub relationship_indicators: Vec<&'static str>,
    /// Single-status indicators (lowest priority).
    pub single_indicators: Vec<&'static str>,
    /// Introvert (pole A) vs. extrovert (pole B).
    pub introvert_extrovert: AxisKeywords,
    /// Intuition (pole A) vs. sensing (pole B).
    pub intuition_sensing: AxisKeywords,
    /// Feeling (pole A) vs. thinking (pole B).
    pub feeling_thinking: AxisKeywords,
    /// Perceiving (pole A) vs. judging (pole B).
    pub perceiving_judging: AxisKeywords,
    /// Threshold-gated characteristic labels.
    pub characteristics: Vec<CharacteristicRule>,
    /// Motivation categories, in report order.
    pub motivations: Vec<MotivationCategory>,
    /// Frustration categories, in evaluation order.
    pub frustrations: Vec<CategoryRule>,
    /// Goal categories, in evaluation order.
    pub goals: Vec<CategoryRule>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            age_indicators: vec![
                ("college", "20-22"),
                ("university", "18-25"),
                ("student", "18-25"),
                ("graduated", "22-30"),
                ("job", "25-35"),
                ("career", "25-40"),
                ("retirement", "60+"),
                ("kids", "28-45"),
                ("children", "28-45"),
                ("mortgage", "30-50"),
                ("marriage", "25-40"),
            ],
            location_indicators: vec![
                ("usa", "United States"),
                ("america", "United States"),
                ("us", "United States"),
                ("canada", "Canada"),
                ("uk", "United Kingdom"),
                ("britain", "United Kingdom"),
                ("australia", "Australia"),
                ("germany", "Germany"),
                ("france", "France"),
                ("europe", "Europe"),
            ],
            occupation_indicators: vec![
                ("software", "Software Developer"),
                ("programming", "Software Developer"),
                ("coding", "Software Developer"),
                ("developer", "Software Developer"),
                ("engineer", "Engineer"),
                ("teacher", "Teacher"),
                ("student", "Student"),
                ("doctor", "Healthcare Professional"),
                ("nurse", "Healthcare Professional"),
                ("manager", "Manager"),
                ("designer", "Designer"),
                ("marketing", "Marketing Professional"),
                ("sales", "Sales Professional"),
                ("finance", "Finance Professional"),
                ("lawyer", "Legal Professional"),
            ],
            married_indicators: vec!["wife", "husband", "married", "spouse"],
            relationship_indicators: vec!["girlfriend", "boyfriend", "dating"],
            single_indicators: vec!["single", "dating app"],
            introvert_extrovert: AxisKeywords {
                pole_a: vec!["alone", "quiet", "home", "reading", "solitude"],
                pole_b: vec!["party", "social", "friends", "meeting people", "networking"],
            },
            intuition_sensing: AxisKeywords {
                pole_a: vec!["future", "possibility", "theory", "concept", "idea"],
                pole_b: vec!["practical", "facts", "details", "experience", "reality"],
            },
            feeling_thinking: AxisKeywords {
                pole_a: vec!["feel", "emotion", "heart", "care", "empathy"],
                pole_b: vec!["logic", "rational", "analyze", "objective", "reason"],
            },
            perceiving_judging: AxisKeywords {
                pole_a: vec!["flexible", "spontaneous", "adapt", "open", "explore"],
                pole_b: vec!["plan", "organize", "schedule", "structure", "decide"],
            },
            characteristics: vec![
                CharacteristicRule {
                    label: "Helpful",
                    keywords: vec!["help", "advice", "suggest", "recommend", "try this"],
                    threshold: 5,
                },
                CharacteristicRule {
                    label: "Enthusiastic",
                    keywords: vec!["awesome", "amazing", "love", "excited", "!"],
                    threshold: 10,
                },
                CharacteristicRule {
                    label: "Analytical",
                    keywords: vec!["analysis", "data", "research", "study", "statistics"],
                    threshold: 3,
                },
                CharacteristicRule {
                    label: "Creative",
                    keywords: vec!["creative", "art", "design", "music", "write", "draw"],
                    threshold: 3,
                },
            ],
            motivations: vec![
                MotivationCategory {
                    name: "convenience",
                    keywords: vec!["easy", "quick", "fast", "convenient", "simple"],
                },
                MotivationCategory {
                    name: "wellness",
                    keywords: vec!["health", "fitness", "exercise", "diet", "wellness"],
                },
                MotivationCategory {
                    name: "speed",
                    keywords: vec!["fast", "quick", "rapid", "immediate", "instant"],
                },
                MotivationCategory {
                    name: "preferences",
                    keywords: vec!["prefer", "like", "favorite", "choice", "option"],
                },
                MotivationCategory {
                    name: "comfort",
                    keywords: vec!["comfort", "cozy", "relaxing", "peaceful", "calm"],
                },
                MotivationCategory {
                    name: "dietary_needs",
                    keywords: vec!["diet", "nutrition", "healthy", "organic", "vegan"],
                },
            ],
            frustrations: vec![
                CategoryRule {
                    name: "technology",
                    keywords: vec!["slow", "bug", "crash", "error", "broken"],
                    sentence: "Technology issues and software problems",
                },
                CategoryRule {
                    name: "time",
                    keywords: vec!["waste time", "too long", "waiting", "delay"],
                    sentence: "Time-wasting processes and delays",
                },
                CategoryRule {
                    name: "information",
                    keywords: vec!["confusing", "unclear", "hard to find", "missing info"],
                    sentence: "Lack of clear information or instructions",
                },
                CategoryRule {
                    name: "service",
                    keywords: vec!["poor service", "unhelpful", "rude", "disappointing"],
                    sentence: "Poor customer service experiences",
                },
            ],
            goals: vec![
                CategoryRule {
                    name: "health",
                    keywords: vec!["lose weight", "get fit", "healthy lifestyle", "exercise more"],
                    sentence: "Maintain a healthy lifestyle and fitness routine",
                },
                CategoryRule {
                    name: "career",
                    keywords: vec!["promotion", "new job", "career growth", "learn skills"],
                    sentence: "Advance career and develop professional skills",
                },
                CategoryRule {
                    name: "financial",
                    keywords: vec!["save money", "investment", "financial freedom", "budget"],
                    sentence: "Achieve financial stability and smart money management",
                },
                CategoryRule {
                    name: "education",
                    keywords: vec!["learn", "study", "course", "degree", "certification"],
                    sentence: "Continue learning and skill development",
                },
                CategoryRule {
                    name: "relationships",
                    keywords: vec!["meet people", "dating", "friends", "social"],
                    sentence: "Build meaningful relationships and social connections",
                },
                CategoryRule {
                    name: "lifestyle",
                    keywords: vec!["travel", "hobby", "experience", "adventure"],
                    sentence: "Explore new experiences and maintain work-life balance",
                },
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
