use crate::models::{BestTiming, SupplementRecord};

pub static SUPPLEMENTS: &[SupplementRecord] = &[
    SupplementRecord {
        name: "ALPHA GPC",
        category: "Cognitive Enhancement",
        description: "A highly bioavailable form of choline that crosses the blood-brain barrier effectively, supporting acetylcholine production for enhanced cognitive function.",
        benefits: &[
            "Enhanced focus and mental clarity",
            "Improved memory formation",
            "Increased power output in training",
            "Neuroprotective effects",
        ],
        dosage: "300-600mg daily",
        timing: "Morning or pre-workout",
        warnings: &["May cause headaches in sensitive individuals", "Start with lower dose"],
        stacks_with: &["Caffeine", "L-Theanine", "Cordyceps"],
        color: "#007AFF",
        best_timing: BestTiming::Morning,
    },
    SupplementRecord {
        name: "Beetroot Extract",
        category: "Performance",
        description: "Rich in nitrates that convert to nitric oxide, improving blood flow and oxygen delivery to muscles.",
        benefits: &[
            "Enhanced endurance performance",
            "Improved blood flow",
            "Lower blood pressure",
            "Increased exercise capacity",
        ],
        dosage: "500mg daily",
        timing: "2-3 hours before exercise",
        warnings: &[
            "May cause beeturia (pink/red urine)",
            "Can lower blood pressure significantly",
        ],
        stacks_with: &["L-Citrulline", "L-Arginine", "Cordyceps"],
        color: "#FF3B30",
        best_timing: BestTiming::PreWorkout,
    },
    SupplementRecord {
        name: "Beet Root Powder",
        category: "Performance",
        description: "Whole food source of nitrates, betalains, and antioxidants for cardiovascular and performance benefits.",
        benefits: &[
            "Natural nitric oxide boost",
            "Antioxidant support",
            "Liver detoxification",
            "Improved stamina",
        ],
        dosage: "5-10g daily",
        timing: "Morning or pre-workout",
        warnings: &[
            "May cause digestive upset in large doses",
            "Can stain teeth temporarily",
        ],
        stacks_with: &["Beetroot Extract", "Electrolytes", "Vitamin C"],
        color: "#FF3B30",
        best_timing: BestTiming::PreWorkout,
    },
    SupplementRecord {
        name: "Butea Superba",
        category: "Hormonal Support",
        description: "Traditional Thai herb known for supporting male hormonal health and vitality.",
        benefits: &[
            "Supports testosterone levels",
            "Enhanced libido",
            "Improved energy",
            "Mood support",
        ],
        dosage: "500mg daily",
        timing: "Morning with food",
        warnings: &[
            "Not for women",
            "May interact with blood thinners",
            "Consult healthcare provider",
        ],
        stacks_with: &["MACA ROOT", "TONGKAT ALI", "Zinc"],
        color: "#FF9500",
        best_timing: BestTiming::Morning,
    },
    SupplementRecord {
        name: "Black Ginger",
        category: "Performance",
        description: "Kaempferia parviflora extract that supports circulation, energy metabolism, and physical performance.",
        benefits: &[
            "Enhanced blood flow",
            "Improved exercise performance",
            "Metabolic support",
            "Anti-inflammatory effects",
        ],
        dosage: "100mg daily",
        timing: "With meals",
        warnings: &["May interact with blood thinners", "Start with lower dose"],
        stacks_with: &["Beetroot Extract", "L-Citrulline", "CoQ10"],
        color: "#8E8E93",
        best_timing: BestTiming::Anytime,
    },
    SupplementRecord {
        name: "CAFFEINE",
        category: "Stimulant",
        description: "The world's most studied nootropic and performance enhancer, blocking adenosine receptors to increase alertness.",
        benefits: &[
            "Increased alertness and focus",
            "Enhanced physical performance",
            "Improved fat oxidation",
            "Mood elevation",
        ],
        dosage: "100-200mg daily",
        timing: "Morning or pre-workout (avoid 6+ hours before bed)",
        warnings: &[
            "Can cause jitters, anxiety, insomnia",
            "Highly addictive",
            "Tolerance builds quickly",
        ],
        stacks_with: &["L-Theanine", "ALPHA GPC", "Taurine"],
        color: "#8B4513",
        best_timing: BestTiming::Morning,
    },
    SupplementRecord {
        name: "Choline",
        category: "Cognitive Enhancement",
        description: "Essential nutrient for brain health, neurotransmitter production, and cellular membrane integrity.",
        benefits: &[
            "Supports memory and cognition",
            "Liver health",
            "Cellular membrane function",
            "Neurotransmitter production",
        ],
        dosage: "500mg daily",
        timing: "With meals",
        warnings: &[
            "High doses may cause fishy body odor",
            "Can cause nausea on empty stomach",
        ],
        stacks_with: &["ALPHA GPC", "Methylated B-Vitamins", "Omega-3s"],
        color: "#007AFF",
        best_timing: BestTiming::Anytime,
    },
    SupplementRecord {
        name: "CoQ10",
        category: "Mitochondrial Support",
        description: "Coenzyme Q10 - Essential for cellular energy production and powerful antioxidant that supports mitochondrial health.",
        benefits: &[
            "Enhanced cellular energy",
            "Cardiovascular support",
            "Antioxidant protection",
            "Anti-aging effects",
        ],
        dosage: "100-200mg daily",
        timing: "With fats for better absorption",
        warnings: &["May interact with blood thinners", "Expensive supplement"],
        stacks_with: &["PQQ", "Vitamin E", "Fish Oil", "Magnesium"],
        color: "#FF9500",
        best_timing: BestTiming::Anytime,
    },
    SupplementRecord {
        name: "PQQ",
        category: "Mitochondrial Support",
        description: "Pyrroloquinoline quinone - Supports mitochondrial biogenesis and protects against oxidative stress.",
        benefits: &[
            "Mitochondrial biogenesis",
            "Neuroprotective effects",
            "Enhanced cognitive function",
            "Energy metabolism support",
        ],
        dosage: "10-20mg daily",
        timing: "With meals for better absorption",
        warnings: &["Limited long-term studies", "Expensive supplement"],
        stacks_with: &["CoQ10", "Alpha-lipoic acid", "Magnesium"],
        color: "#5856D6",
        best_timing: BestTiming::Anytime,
    },
    SupplementRecord {
        name: "Cordyceps",
        category: "Adaptogen",
        description: "Medicinal mushroom that supports energy, endurance, and respiratory function.",
        benefits: &[
            "Enhanced oxygen utilization",
            "Improved endurance",
            "Immune support",
            "Stress adaptation",
        ],
        dosage: "1g daily",
        timing: "Morning or pre-workout",
        warnings: &[
            "May interact with immunosuppressants",
            "Quality varies significantly between brands",
        ],
        stacks_with: &["ALPHA GPC", "Beetroot Extract", "Rhodiola"],
        color: "#8B4513",
        best_timing: BestTiming::Morning,
    },
    SupplementRecord {
        name: "Cyanidin 3 Glucoside",
        category: "Antioxidant",
        description: "Powerful anthocyanin antioxidant found in dark berries, supporting cardiovascular and metabolic health.",
        benefits: &[
            "Potent antioxidant effects",
            "Improved insulin sensitivity",
            "Cardiovascular protection",
            "Anti-inflammatory",
        ],
        dosage: "50mg daily",
        timing: "With meals",
        warnings: &["May interact with diabetes medications", "Limited human studies"],
        stacks_with: &["Vitamin C", "Quercetin", "Resveratrol"],
        color: "#5856D6",
        best_timing: BestTiming::Anytime,
    },
    SupplementRecord {
        name: "Electrolytes",
        category: "Hydration",
        description: "Essential minerals (sodium, potassium, magnesium) for proper hydration, muscle function, and nerve signaling.",
        benefits: &[
            "Optimal hydration",
            "Muscle function",
            "Prevents cramping",
            "Maintains blood pressure",
        ],
        dosage: "1 serving per workout or hot day",
        timing: "During/after exercise, hot weather",
        warnings: &["Excess sodium can raise blood pressure", "Balance is key"],
        stacks_with: &["Water", "Magnesium", "Vitamin D"],
        color: "#00C7BE",
        best_timing: BestTiming::PreWorkout,
    },
    SupplementRecord {
        name: "Goat Weed",
        category: "Hormonal Support",
        description: "Traditional herb (Epimedium) known for supporting circulation and male vitality.",
        benefits: &[
            "Supports circulation",
            "May enhance libido",
            "Bone health support",
            "Energy boost",
        ],
        dosage: "500mg daily",
        timing: "With meals",
        warnings: &[
            "May interact with heart medications",
            "Not for those with heart conditions",
        ],
        stacks_with: &["MACA ROOT", "Zinc", "L-Arginine"],
        color: "#34C759",
        best_timing: BestTiming::Anytime,
    },
    SupplementRecord {
        name: "Methylated B-Vitamins",
        category: "Essential Vitamins",
        description: "Pre-activated forms of B vitamins that bypass genetic methylation issues for optimal absorption.",
        benefits: &[
            "Enhanced energy metabolism",
            "Nervous system support",
            "DNA synthesis",
            "Mood regulation",
        ],
        dosage: "1 B-complex capsule daily",
        timing: "Morning with food",
        warnings: &["High doses may cause nausea", "Can turn urine bright yellow"],
        stacks_with: &["Magnesium", "Vitamin D", "Choline"],
        color: "#FF9500",
        best_timing: BestTiming::Morning,
    },
    SupplementRecord {
        name: "MACA ROOT",
        category: "Adaptogen",
        description: "Peruvian root vegetable that supports hormonal balance, energy, and stress adaptation.",
        benefits: &[
            "Hormonal balance",
            "Enhanced energy",
            "Improved mood",
            "Stress adaptation",
        ],
        dosage: "1.5g daily",
        timing: "Morning with food",
        warnings: &[
            "May affect hormone-sensitive conditions",
            "Start with lower doses",
        ],
        stacks_with: &["Ashwagandha", "TONGKAT ALI", "Zinc"],
        color: "#8B4513",
        best_timing: BestTiming::Morning,
    },
    SupplementRecord {
        name: "Shilajit",
        category: "Adaptogen",
        description: "Mineral-rich substance from the Himalayas containing fulvic acid and trace minerals for energy and vitality.",
        benefits: &[
            "Enhanced energy and stamina",
            "Mineral replenishment",
            "Cognitive support",
            "Anti-aging properties",
        ],
        dosage: "300mg daily",
        timing: "Morning on empty stomach",
        warnings: &[
            "Quality varies dramatically",
            "May contain heavy metals if not purified",
        ],
        stacks_with: &["CoQ10", "Magnesium", "Trace minerals"],
        color: "#8B4513",
        best_timing: BestTiming::Morning,
    },
    SupplementRecord {
        name: "Sodium Bicarbonate",
        category: "Performance",
        description: "Alkalizing agent that buffers lactic acid during high-intensity exercise.",
        benefits: &[
            "Improved high-intensity performance",
            "Reduced muscle fatigue",
            "Enhanced power output",
            "Alkalizing effects",
        ],
        dosage: "0.3g per kg body weight",
        timing: "2-3 hours before intense exercise only",
        warnings: &[
            "Can cause severe GI distress",
            "Practice timing and dosage",
            "Not for daily use",
        ],
        stacks_with: &["Electrolytes", "Beta-alanine", "Creatine"],
        color: "#00C7BE",
        best_timing: BestTiming::PreWorkout,
    },
    SupplementRecord {
        name: "TAURINE",
        category: "Performance",
        description: "Amino acid that supports cardiovascular function, muscle contraction, and cellular hydration.",
        benefits: &[
            "Improved exercise performance",
            "Cardiovascular support",
            "Enhanced hydration",
            "Antioxidant effects",
        ],
        dosage: "1g daily",
        timing: "Pre-workout or with meals",
        warnings: &["Generally very safe", "May interact with lithium"],
        stacks_with: &["Caffeine", "Magnesium", "Electrolytes"],
        color: "#007AFF",
        best_timing: BestTiming::PreWorkout,
    },
    SupplementRecord {
        name: "Theacrine",
        category: "Stimulant",
        description: "Caffeine-like compound that provides sustained energy without tolerance buildup or crash.",
        benefits: &[
            "Sustained energy",
            "No tolerance buildup",
            "Enhanced mood",
            "Improved focus",
        ],
        dosage: "100mg daily",
        timing: "Morning or pre-workout",
        warnings: &["Limited long-term studies", "May interact with stimulants"],
        stacks_with: &["Caffeine", "L-Theanine", "ALPHA GPC"],
        color: "#5856D6",
        best_timing: BestTiming::Morning,
    },
    SupplementRecord {
        name: "TONGKAT ALI",
        category: "Hormonal Support",
        description: "Southeast Asian herb known for supporting natural testosterone production and stress management.",
        benefits: &[
            "Supports testosterone levels",
            "Stress reduction",
            "Enhanced libido",
            "Improved body composition",
        ],
        dosage: "200mg daily",
        timing: "Morning with food",
        warnings: &[
            "May interact with diabetes medications",
            "Quality varies between sources",
        ],
        stacks_with: &["MACA ROOT", "Zinc", "Vitamin D"],
        color: "#FF9500",
        best_timing: BestTiming::Morning,
    },
    SupplementRecord {
        name: "ZINC",
        category: "Essential Mineral",
        description: "Essential mineral crucial for immune function, hormone production, and protein synthesis.",
        benefits: &[
            "Immune system support",
            "Hormone production",
            "Wound healing",
            "Protein synthesis",
        ],
        dosage: "15mg daily",
        timing: "On empty stomach or with food if GI upset",
        warnings: &[
            "Can cause nausea on empty stomach",
            "Interferes with copper absorption",
        ],
        stacks_with: &["Magnesium", "Vitamin D", "Copper (separate timing)"],
        color: "#8E8E93",
        best_timing: BestTiming::Evening,
    },
    SupplementRecord {
        name: "VITAMIN D3 (with K2)",
        category: "Essential Vitamins",
        description: "Vitamin D3 with K2 for optimal calcium metabolism and immune function.",
        benefits: &[
            "Immune system support",
            "Bone health",
            "Mood regulation",
            "Hormone optimization",
        ],
        dosage: "2,000-5,000 IU D3 + 100-200mcg K2 daily",
        timing: "With fats for absorption",
        warnings: &[
            "Monitor blood levels",
            "Can cause hypercalcemia",
            "Requires K2 for safety",
        ],
        stacks_with: &["Magnesium", "Omega-3s", "Zinc"],
        color: "#FF9500",
        best_timing: BestTiming::Anytime,
    },
    SupplementRecord {
        name: "Vitamin K2",
        category: "Essential Vitamins",
        description: "Fat-soluble vitamin essential for proper calcium metabolism and cardiovascular health.",
        benefits: &[
            "Proper calcium utilization",
            "Cardiovascular protection",
            "Bone health",
            "Dental health",
        ],
        dosage: "100mcg daily",
        timing: "With fats and Vitamin D",
        warnings: &[
            "May interact with blood thinners",
            "Essential when taking high-dose D3",
        ],
        stacks_with: &["Vitamin D3", "Magnesium", "Calcium"],
        color: "#34C759",
        best_timing: BestTiming::Anytime,
    },
    SupplementRecord {
        name: "Vitamin D",
        category: "Essential Vitamins",
        description: "Essential vitamin for bone health, immune function, and overall wellness.",
        benefits: &[
            "Bone health",
            "Immune system support",
            "Mood regulation",
            "Calcium absorption",
        ],
        dosage: "Adults (19-70): 600 IU daily, Adults (>70): 800 IU daily",
        timing: "With fats for better absorption",
        warnings: &[
            "Monitor blood levels with higher doses",
            "Can cause toxicity in excess",
        ],
        stacks_with: &["Vitamin K2", "Magnesium", "Calcium"],
        color: "#FF9500",
        best_timing: BestTiming::Anytime,
    },
    SupplementRecord {
        name: "Vitamin B1",
        category: "Essential Vitamins",
        description: "Thiamine, essential for energy metabolism and nervous system function.",
        benefits: &[
            "Energy metabolism",
            "Nervous system health",
            "Cognitive function",
            "Heart health",
        ],
        dosage: "100mg daily",
        timing: "Morning with food",
        warnings: &["Generally very safe", "High doses may cause imbalance"],
        stacks_with: &["B-Complex", "Magnesium", "Other B vitamins"],
        color: "#FF9500",
        best_timing: BestTiming::Morning,
    },
    SupplementRecord {
        name: "L-THEANINE",
        category: "Nootropic",
        description: "Amino acid from tea that promotes relaxation without sedation, perfect caffeine companion.",
        benefits: &[
            "Calm focus",
            "Reduces caffeine jitters",
            "Stress reduction",
            "Improved sleep quality",
        ],
        dosage: "200mg daily",
        timing: "With caffeine or evening",
        warnings: &["May lower blood pressure", "Very safe overall"],
        stacks_with: &["Caffeine", "Magnesium", "GABA"],
        color: "#34C759",
        best_timing: BestTiming::Evening,
    },
    SupplementRecord {
        name: "L-Arginine",
        category: "Performance",
        description: "Semi-essential amino acid that supports nitric oxide production and blood flow.",
        benefits: &[
            "Enhanced blood flow",
            "Improved exercise performance",
            "Wound healing",
            "Immune support",
        ],
        dosage: "3g daily",
        timing: "On empty stomach or pre-workout",
        warnings: &[
            "May interact with blood pressure medications",
            "Can cause GI upset",
        ],
        stacks_with: &["L-Citrulline", "Beetroot Extract", "Vitamin C"],
        color: "#007AFF",
        best_timing: BestTiming::PreWorkout,
    },
    SupplementRecord {
        name: "L-Citrulline",
        category: "Performance",
        description: "Amino acid that converts to arginine, providing superior and sustained nitric oxide support.",
        benefits: &[
            "Superior to L-Arginine",
            "Enhanced muscle pumps",
            "Reduced muscle soreness",
            "Improved endurance",
        ],
        dosage: "6g daily",
        timing: "Pre-workout on empty stomach",
        warnings: &["Generally very safe", "May lower blood pressure"],
        stacks_with: &["L-Arginine", "Beetroot Extract", "Caffeine"],
        color: "#007AFF",
        best_timing: BestTiming::PreWorkout,
    },
    SupplementRecord {
        name: "L-Carnitine",
        category: "Fat Metabolism",
        description: "Amino acid derivative that transports fatty acids into mitochondria for energy production.",
        benefits: &[
            "Enhanced fat oxidation",
            "Improved exercise recovery",
            "Cognitive support",
            "Heart health",
        ],
        dosage: "2g daily",
        timing: "Pre-workout or with meals",
        warnings: &[
            "May cause fishy body odor in some",
            "Can interact with thyroid medications",
        ],
        stacks_with: &["CoQ10", "Alpha-lipoic acid", "Omega-3s"],
        color: "#FF9500",
        best_timing: BestTiming::PreWorkout,
    },
];

/// Rules shown before the supplement tools unlock.
pub const COMMANDMENTS: [&str; 7] = [
    "Taking anything for too long increases the risk of imbalances or unexpected side effects",
    "Combining multiple supplements can create unexpected outcomes",
    "Everybody responds differently, sometimes oppositely. Just because it works for your friend doesn't mean it works for you",
    "Trust your intuition above all else, if you get bad vibes from a supplement, discontinue",
    "ALWAYS cycle. Take a few days off every week. Take a week off every month",
    "Implement supplements one at a time, gather data, then slowly add more",
    "Always start with the minimum effective dose",
];

/// Self-tracking routine, as (title, description).
pub const TRACKER_STEPS: [(&str, &str); 4] = [
    (
        "Gather a Strong Baseline",
        "How do you feel normally? What is your mood & energy like? Take a snapshot. Record videos of yourself to get more cues than just writing things down",
    ),
    (
        "Document Everything",
        "Keep a page open in your notes app. Lay out every supplement, dose, and time for each of them",
    ),
    (
        "Track Changes",
        "Any time you feel above or below baseline, jot it down: +1 energy, +3 mood, -2 focus, +5 anxiety",
    ),
    (
        "Review Weekly",
        "Avoid making assumptions until you gather at least a week's worth of data. Review every Sunday",
    ),
];
