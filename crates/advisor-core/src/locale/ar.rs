use super::{LocaleText, Triggers};
use crate::resolver::KeywordRule;

const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule::new(
        "hello",
        "مرحباً! أنا هنا لمساعدتك في روتين الجمال. ماذا تريدين أن تعرفي؟",
    ),
    KeywordRule::new(
        "hi",
        "أهلاً! هل أنت مستعدة لإنشاء روتين الجمال المثالي؟ اسأليني أي شيء!",
    ),
    KeywordRule::new(
        "صباح",
        "روتين الصباح المثالي: منظف ← سيروم فيتامين سي ← مرطب ← واقي الشمس. ابقيه بسيطاً ولكن منتظماً!",
    ),
    KeywordRule::new(
        "مساء",
        "روتين المساء: منظف ← علاج (ريتينول/أحماض) ← مرطب ← كريم العينين عند الحاجة. هذا وقت إصلاح البشرة.",
    ),
    KeywordRule::new(
        "بشرة حساسة",
        "البشرة الحساسة تحتاج منتجات لطيفة خالية من العطور. ابحثي عن منتجات تحتوي على النياسيناميد والسيراميد.",
    ),
    KeywordRule::new(
        "حب الشباب",
        "للبشرة المعرضة لحب الشباب، استخدمي حمض الساليسيليك أو البنزويل بيروكسايد. منتجات لاروش بوزيه ممتازة لعلاج البثور.",
    ),
    KeywordRule::new(
        "مرطب",
        "المرطبات تحافظ على رطوبة البشرة وتحمي الحاجز الطبيعي. ابحثي عن مكونات مثل السيراميد وحمض الهيالورونيك.",
    ),
    KeywordRule::new(
        "شكرا",
        "على الرحب والسعة! أنا هنا كلما احتجت نصائح الجمال. بشرتك ستشكرك لاعتنائك الجيد بها!",
    ),
];

pub(super) const TEXT: LocaleText = LocaleText {
    triggers: Triggers {
        routine: &["روتين", "خطوة", "ترتيب"],
        selection: &["اخترت", "المنتجات المختارة"],
        usage_question: &["كيف", "استخدم"],
        timing_question: &["متى"],
        morning: &["صباح"],
        evening: &["مساء", "ليل"],
        order: &["ترتيب", "خطوة"],
        frequency: &["كم مرة"],
    },
    keyword_rules: KEYWORD_RULES,
    fallbacks: &[
        "أحب أن أساعدك! جربي السؤال عن منتجات محددة، مشاكل البشرة، أو خطوات الروتين.",
        "أنا هنا لمساعدتك في روتين الجمال! اسأليني عن مكونات العناية بالبشرة أو توصيات المنتجات.",
        "دعيني أساعدك! يمكنني الإجابة عن أسئلة حول علامات لوريال التجارية، روتين العناية بالبشرة، أو تطبيق المكياج.",
        "أنا مستشارة الجمال الشخصية! لا تترددي في السؤال عن مكونات المنتجات، أنواع البشرة، أو أي اهتمامات جمالية لديك.",
    ],

    nothing_selected_answer: "لم تختاري أي منتجات بعد! تصفحي الفئات أعلاه واختاري المنتجات التي تودين إضافتها إلى روتينك.",
    timing_answer: "سؤال رائع! التوقيت يعتمد على منتجاتك. بشكل عام، تعمل المنظفات والعلاجات جيداً صباحاً ومساءً، بينما واقي الشمس للنهار فقط. أنشئي روتينك لمعرفة التوقيت المحدد!",

    no_routine_answer: "لم تنشئي روتيناً بعد! اختاري بعض المنتجات واضغطي على \"إنشاء الروتين\" للبدء.",
    morning_header: "إليك روتين الصباح:",
    evening_header: "إليك روتين المساء:",
    missing_morning_answer: "روتينك الحالي لا يتضمن خطوات صباحية محددة. جربي إضافة منظف أو مرطب أو واقي شمس!",
    missing_evening_answer: "روتينك الحالي لا يتضمن خطوات مسائية محددة. جربي إضافة منظف لطيف أو مرطب ليلي!",
    order_answer: "القاعدة العامة: منظف ← علاجات (سيروم) ← مرطب ← واقي الشمس (صباحاً فقط). روتينك يتبع هذا الترتيب الأمثل!",
    frequency_answer: "يمكن استخدام معظم المنتجات يومياً، لكن ابدئي الريتينول 2-3 مرات أسبوعياً. استخدمي منتجات التقشير 1-2 مرة أسبوعياً فقط. استمعي لبشرتك!",
    follow_up_pointer: "يمكنني مساعدتك على فهم روتينك بشكل أفضل! اسأليني عن خطوات الصباح والمساء، أو ترتيب المنتجات، أو عدد مرات الاستخدام.",

    routine_title: "روتين الجمال الشخصي الخاص بك",
    base_tips: &[
        "💡 اختبري المنتجات الجديدة دائماً على منطقة صغيرة قبل الاستخدام الكامل",
        "💡 الانتظام هو المفتاح - التزمي بروتينك للحصول على أفضل النتائج",
        "💡 طبقي المنتجات بأيدي أو أدوات نظيفة",
    ],
    skincare_tip: "💡 للعناية بالبشرة، طبقي من الأرق إلى الأكثف قواماً",
    haircare_tip: "💡 استخدمي الماء الفاتر عند غسل الشعر لمنع التلف",
    multi_brand_tip: None,
    tips_heading: "نصائح احترافية",

    welcome: "👋 مرحباً! أنا مستشارة الجمال من لوريال. اختاري بعض المنتجات واضغطي على \"إنشاء الروتين\" للبدء، أو اسأليني عن العناية بالبشرة أو الشعر أو المكياج!",
    category_prompt: "اختاري فئة لعرض المنتجات والبدء في بناء روتينك",
    empty_category: "لا توجد منتجات في هذه الفئة.",
    no_products_selected: "لم يتم اختيار منتجات بعد",
    clear_all_label: "مسح الكل",
    generate_label: "إنشاء الروتين",
    generate_rejected: "يرجى اختيار منتج واحد على الأقل قبل إنشاء الروتين!",
    generating: "جاري إنشاء روتينك الشخصي... ✨",
    routine_ready: "روتينك جاهز! لا تترددي في سؤالي عن أي من هذه الخطوات أو التوقيت أو طريقة استخدام منتجات محددة. أنا هنا للمساعدة! 💄",
    language_changed: "تم تغيير اللغة إلى العربية. يمكنني مساعدتك في العناية بالجمال والبشرة!",
    show_details_label: "عرض التفاصيل",
};
