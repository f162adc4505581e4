use super::{LocaleText, Triggers};
use crate::resolver::KeywordRule;

const KEYWORD_RULES: &[KeywordRule] = &[
    // Greetings
    KeywordRule::new(
        "hello",
        "Hello! I'm here to help you with your beauty routine. What would you like to know?",
    ),
    KeywordRule::new(
        "hi",
        "Hi there! Ready to create your perfect beauty routine? Ask me anything!",
    ),
    KeywordRule::new(
        "hey",
        "Hey! How can I help you with your L'Oréal products today?",
    ),
    // Products
    KeywordRule::new(
        "cleanser",
        "Cleansers remove dirt, oil, and makeup. For oily skin, try foaming cleansers like CeraVe Foaming Facial Cleanser. For dry skin, cream cleansers like CeraVe Hydrating Facial Cleanser work better.",
    ),
    KeywordRule::new(
        "moisturizer",
        "Moisturizers hydrate and protect your skin barrier. Look for ingredients like ceramides, hyaluronic acid, and niacinamide. Apply on damp skin for better absorption.",
    ),
    KeywordRule::new(
        "retinol",
        "Retinol helps with anti-aging and skin texture. Start slowly (2-3 times per week) and always use sunscreen during the day. The CeraVe Resurfacing Retinol Serum is great for beginners.",
    ),
    KeywordRule::new(
        "vitamin c",
        "Vitamin C brightens skin and provides antioxidant protection. Use in the morning before sunscreen. L'Oréal's Vitamin C serums are excellent for improving skin radiance.",
    ),
    KeywordRule::new(
        "sunscreen",
        "Sunscreen is the most important anti-aging product! Use at least SPF 30 daily. La Roche-Posay Anthelios provides excellent protection without a white cast.",
    ),
    // Skin types
    KeywordRule::new(
        "oily skin",
        "For oily skin, use gel or foaming cleansers, lightweight moisturizers, and oil-free products. CeraVe Foaming Cleanser and Maybelline Fit Me Foundation are great choices.",
    ),
    KeywordRule::new(
        "dry skin",
        "Dry skin needs gentle, hydrating products. Try cream cleansers, rich moisturizers with ceramides, and avoid over-exfoliating. CeraVe Hydrating Cleanser and Moisturizing Cream are perfect.",
    ),
    KeywordRule::new(
        "sensitive skin",
        "Sensitive skin requires fragrance-free, gentle formulas. Look for products with niacinamide and ceramides. La Roche-Posay and CeraVe are excellent sensitive skin brands.",
    ),
    KeywordRule::new(
        "acne",
        "For acne-prone skin, use salicylic acid or benzoyl peroxide products. La Roche-Posay Effaclar Duo is excellent for treating breakouts without over-drying.",
    ),
    // Routines
    KeywordRule::new(
        "morning routine",
        "A good morning routine: cleanser → vitamin C serum → moisturizer → sunscreen. Keep it simple but consistent!",
    ),
    KeywordRule::new(
        "evening routine",
        "Evening routine: cleanser → treatment (retinol/acids) → moisturizer → eye cream if needed. This is when your skin repairs itself.",
    ),
    KeywordRule::new(
        "how often",
        "Most products can be used daily, but start retinol 2-3x per week. Exfoliating products should be used 1-2x per week maximum.",
    ),
    // Hair
    KeywordRule::new(
        "hair",
        "For healthy hair, use sulfate-free shampoos, deep condition weekly, and protect from heat. L'Oréal Elvive and Kérastase offer excellent hair care solutions.",
    ),
    KeywordRule::new(
        "frizzy hair",
        "Combat frizz with moisturizing shampoos, leave-in treatments, and avoid over-washing. Garnier Fructis Sleek & Shine helps control frizz for up to 72 hours.",
    ),
    KeywordRule::new(
        "damaged hair",
        "Repair damage with protein-rich treatments and gentle handling. L'Oréal Elvive Total Repair 5 targets five signs of damage.",
    ),
    // Makeup
    KeywordRule::new(
        "foundation",
        "Choose foundation based on your skin type: matte for oily skin, hydrating for dry skin. L'Oréal and Maybelline offer great options for all skin types.",
    ),
    KeywordRule::new(
        "mascara",
        "For volume, try L'Oréal Voluminous. For length and separation, Maybelline Lash Sensational is perfect. Always remove gently with makeup remover.",
    ),
    KeywordRule::new(
        "lipstick",
        "YSL Rouge Volupté provides beautiful color with hydrating benefits. For everyday wear, choose MLBB (my lips but better) shades.",
    ),
    // Brands
    KeywordRule::new(
        "cerave",
        "CeraVe is developed with dermatologists and features ceramides, hyaluronic acid, and MVE technology for long-lasting hydration. Perfect for sensitive skin.",
    ),
    KeywordRule::new(
        "loreal",
        "L'Oréal Paris combines innovation with accessibility, offering high-performance products for skincare, haircare, and makeup at drugstore prices.",
    ),
    KeywordRule::new(
        "lancome",
        "Lancôme is luxury skincare and makeup with advanced anti-aging technology. Their Génifique serum and foundations are iconic.",
    ),
    KeywordRule::new(
        "maybelline",
        "Maybelline New York offers trendy, high-quality makeup at affordable prices. Great for experimenting with new looks!",
    ),
    // Ingredients
    KeywordRule::new(
        "hyaluronic acid",
        "Hyaluronic acid holds 1000x its weight in water! It plumps skin and reduces fine lines. Use on damp skin and seal with moisturizer.",
    ),
    KeywordRule::new(
        "niacinamide",
        "Niacinamide (Vitamin B3) reduces oil production, minimizes pores, and calms irritation. It's gentle enough for daily use.",
    ),
    KeywordRule::new(
        "ceramides",
        "Ceramides restore and maintain your skin barrier. They're essential for healthy, hydrated skin and are found in many CeraVe products.",
    ),
    // General advice
    KeywordRule::new(
        "routine order",
        "Skincare order: cleanser → toner → serum → moisturizer → sunscreen (AM) or night cream (PM). Thinnest to thickest consistency!",
    ),
    KeywordRule::new(
        "patch test",
        "Always patch test new products on your inner arm for 24-48 hours before applying to your face. Better safe than sorry!",
    ),
    KeywordRule::new(
        "results",
        "Most skincare products take 4-6 weeks to show results. Be patient and consistent with your routine!",
    ),
    // Troubleshooting
    KeywordRule::new(
        "breakout",
        "New breakouts could be purging (good with actives) or a reaction (bad). If it persists beyond 6 weeks, discontinue the product.",
    ),
    KeywordRule::new(
        "irritation",
        "If you experience irritation, stop using new products immediately. Stick to gentle, fragrance-free basics until skin calms down.",
    ),
    // Closing
    KeywordRule::new(
        "thanks",
        "You're welcome! I'm here whenever you need beauty advice. Your skin will thank you for taking such good care of it!",
    ),
    KeywordRule::new(
        "bye",
        "Goodbye! Remember to be consistent with your routine and protect your skin daily. You've got this! ✨",
    ),
];

pub(super) const TEXT: LocaleText = LocaleText {
    triggers: Triggers {
        routine: &["routine", "step", "order"],
        selection: &["selected", "products i chose"],
        usage_question: &["how", "use"],
        timing_question: &["when"],
        morning: &["morning"],
        evening: &["evening", "night"],
        order: &["order", "step"],
        frequency: &["how often", "frequency"],
    },
    keyword_rules: KEYWORD_RULES,
    fallbacks: &[
        "I'd love to help! Try asking about specific products, skin concerns, or routine steps. You can also select products above and generate a personalized routine.",
        "I'm here to help with your beauty routine! Ask me about skincare ingredients, product recommendations, or how to use your selected products.",
        "Let me assist you! I can answer questions about the L'Oréal brands, skincare routines, makeup application, or hair care. What would you like to know?",
        "I'm your personal beauty advisor! Feel free to ask about product ingredients, skin types, routine order, or any beauty concerns you have.",
    ],

    nothing_selected_answer: "You haven't selected any products yet! Browse through the categories above and click on products you'd like to include in your routine.",
    timing_answer: "Great question! The timing depends on your products. Generally, cleansers and treatments work well morning and night, while sunscreen is for daytime only. Generate your routine for specific timing!",

    no_routine_answer: "You haven't generated a routine yet! Select some products and click 'Generate Routine' to get started.",
    morning_header: "Here's your morning routine:",
    evening_header: "Here's your evening routine:",
    missing_morning_answer: "Your current routine doesn't include specific morning steps. Try adding a cleanser, moisturizer, or sunscreen!",
    missing_evening_answer: "Your current routine doesn't include specific evening steps. Try adding a gentle cleanser or night moisturizer!",
    order_answer: "The general rule is: cleanser → treatments (serums) → moisturizer → sunscreen (AM only). Your generated routine follows this optimal order!",
    frequency_answer: "Most products can be used daily, but start retinol 2-3x per week. Exfoliating products should be used 1-2x per week. Listen to your skin!",
    follow_up_pointer: "I can help you understand your routine better! Ask me about morning vs evening steps, product order, or how often to use specific products.",

    routine_title: "Your Personalized Beauty Routine",
    base_tips: &[
        "💡 Always patch test new products before full application",
        "💡 Consistency is key - stick to your routine for best results",
        "💡 Apply products with clean hands or tools",
    ],
    skincare_tip: "💡 For skincare, apply thinnest to thickest consistency",
    haircare_tip: "💡 Use lukewarm water when washing hair to prevent damage",
    multi_brand_tip: Some("💡 Your multi-brand routine combines the best of each product line"),
    tips_heading: "Pro Tips",

    welcome: "👋 Hi! I'm your L'Oréal beauty advisor. Select some products and click \"Generate Routine\" to get started, or ask me any questions about skincare, haircare, or makeup!",
    category_prompt: "Select a category to view products and start building your routine",
    empty_category: "No products found in this category.",
    no_products_selected: "No products selected yet",
    clear_all_label: "Clear All",
    generate_label: "Generate Routine",
    generate_rejected: "Please select at least one product before generating a routine!",
    generating: "Creating your personalized routine... ✨",
    routine_ready: "Your routine is ready! Feel free to ask me questions about any of these steps, timing, or how to use specific products. I'm here to help! 💄",
    language_changed: "Language changed to English. I can help you with beauty and skincare advice!",
    show_details_label: "Show Details",
};
