use crate::models::ScenarioRecommendation;

/// A keyword disjunction and the stack it selects.
#[derive(Debug)]
pub struct ScenarioRule {
    pub keywords: &'static [&'static str],
    pub recommendation: ScenarioRecommendation,
}

impl ScenarioRule {
    /// `lowered` must already be lowercase.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Priority order: cognitive, performance, hormonal, stress, cardiovascular,
/// fat loss.
pub static SCENARIO_RULES: [ScenarioRule; 6] = [
    ScenarioRule {
        keywords: &["focus", "concentration", "memory", "brain", "study", "mental clarity"],
        recommendation: ScenarioRecommendation {
            title: "Cognitive Enhancement Stack",
            description: "Optimized for focus, memory, and mental clarity",
            supplements: &["ALPHA GPC", "CAFFEINE", "L-THEANINE", "Choline"],
            reasoning: "Alpha GPC provides choline for acetylcholine production (memory & focus). Caffeine + L-Theanine creates calm alertness without jitters. Additional choline supports overall brain health.",
            color: "#007AFF",
        },
    },
    ScenarioRule {
        keywords: &["workout", "exercise", "performance", "energy", "endurance", "strength"],
        recommendation: ScenarioRecommendation {
            title: "Performance & Energy Stack",
            description: "Designed for enhanced workout performance and sustained energy",
            supplements: &["L-Citrulline", "Beetroot Extract", "CAFFEINE", "TAURINE", "Electrolytes"],
            reasoning: "L-Citrulline and Beetroot Extract boost nitric oxide for better blood flow and pumps. Caffeine provides energy and focus. Taurine supports muscle function. Electrolytes prevent cramping.",
            color: "#FF3B30",
        },
    },
    ScenarioRule {
        keywords: &["testosterone", "hormone", "libido", "vitality", "male health", "energy levels"],
        recommendation: ScenarioRecommendation {
            title: "Hormonal Optimization Stack",
            description: "Supports natural hormone production and male vitality",
            supplements: &["TONGKAT ALI", "MACA ROOT", "ZINC", "VITAMIN D3 (with K2)"],
            reasoning: "Tongkat Ali and Maca Root are adaptogens that support natural testosterone production. Zinc is crucial for hormone synthesis. Vitamin D3 with K2 optimizes hormone levels and bone health.",
            color: "#FF9500",
        },
    },
    ScenarioRule {
        keywords: &["stress", "anxiety", "sleep", "recovery", "calm", "relaxation"],
        recommendation: ScenarioRecommendation {
            title: "Stress & Recovery Stack",
            description: "Promotes relaxation, stress management, and recovery",
            supplements: &["L-THEANINE", "MACA ROOT", "Methylated B-Vitamins", "ZINC"],
            reasoning: "L-Theanine promotes calm focus and better sleep. Maca Root is an adaptogen for stress management. B-Vitamins support nervous system health. Zinc aids in recovery and immune function.",
            color: "#34C759",
        },
    },
    ScenarioRule {
        keywords: &["heart", "cardiovascular", "longevity", "anti-aging", "circulation", "blood pressure"],
        recommendation: ScenarioRecommendation {
            title: "Cardiovascular & Longevity Stack",
            description: "Supports heart health, circulation, and cellular longevity",
            supplements: &["CoQ10", "PQQ", "Beetroot Extract", "VITAMIN D3 (with K2)"],
            reasoning: "CoQ10 and PQQ support mitochondrial health and cellular energy. Beetroot Extract improves circulation and blood pressure. Vitamin D3 with K2 supports cardiovascular health and prevents arterial calcification.",
            color: "#FF9500",
        },
    },
    ScenarioRule {
        keywords: &["fat loss", "weight loss", "metabolism", "cutting", "lean", "burn fat"],
        recommendation: ScenarioRecommendation {
            title: "Fat Loss & Metabolism Stack",
            description: "Supports fat oxidation and metabolic enhancement",
            supplements: &["L-Carnitine", "CAFFEINE", "L-THEANINE", "Methylated B-Vitamins"],
            reasoning: "L-Carnitine transports fatty acids for energy production. Caffeine boosts metabolism and fat oxidation. L-Theanine prevents caffeine jitters. B-Vitamins support energy metabolism.",
            color: "#FF9500",
        },
    },
];

pub static DEFAULT_RECOMMENDATION: ScenarioRecommendation = ScenarioRecommendation {
    title: "General Health & Wellness Stack",
    description: "Foundational supplements for overall health optimization",
    supplements: &["VITAMIN D3 (with K2)", "Methylated B-Vitamins", "ZINC", "CoQ10"],
    reasoning: "Vitamin D3 with K2 for immune and bone health. B-Vitamins for energy metabolism. Zinc for immune function and hormone production. CoQ10 for cellular energy and antioxidant protection.",
    color: "#34C759",
};
