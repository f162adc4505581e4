//! Sentence templates that interpolate product data.

use crate::language::Language;
use crate::product::{Category, Product};
use crate::routine::{SectionKind, StepRole};

impl Language {
    /// Localized title of a routine section.
    pub fn section_title(self, kind: SectionKind) -> &'static str {
        match (self, kind) {
            (Language::English, SectionKind::Morning) => "Morning Routine",
            (Language::English, SectionKind::Evening) => "Evening Routine",
            (Language::English, SectionKind::Hair) => "Hair Care Routine",
            (Language::English, SectionKind::Makeup) => "Makeup Application",
            (Language::English, SectionKind::Special) => "Special Care & Finishing Touches",
            (Language::Arabic, SectionKind::Morning) => "روتين الصباح",
            (Language::Arabic, SectionKind::Evening) => "روتين المساء",
            (Language::Arabic, SectionKind::Hair) => "روتين العناية بالشعر",
            (Language::Arabic, SectionKind::Makeup) => "تطبيق المكياج",
            (Language::Arabic, SectionKind::Special) => "عناية خاصة ولمسات نهائية",
        }
    }

    /// Generic sentence for a non-empty section whose roles all missed.
    ///
    /// Special care has none: every category it admits is matched by a role.
    pub fn section_fallback(self, kind: SectionKind) -> Option<&'static str> {
        let sentence = match (self, kind) {
            (_, SectionKind::Special) => return None,
            (Language::English, SectionKind::Morning) => {
                "Apply your selected products in order: cleanser, treatments, moisturizer, and sunscreen."
            }
            (Language::English, SectionKind::Evening) => {
                "Follow a simple evening routine: cleanse thoroughly, apply treatments, and moisturize."
            }
            (Language::English, SectionKind::Hair) => {
                "Follow the basic routine: shampoo, condition, and style as needed."
            }
            (Language::English, SectionKind::Makeup) => {
                "Apply your makeup products in the traditional order: base, eyes, lips."
            }
            (Language::Arabic, SectionKind::Morning) => {
                "طبقي منتجاتك المختارة بالترتيب: منظف، علاجات، مرطب، وواقي الشمس."
            }
            (Language::Arabic, SectionKind::Evening) => {
                "اتبعي روتين مساء بسيط: نظفي جيداً، طبقي العلاجات، ورطبي."
            }
            (Language::Arabic, SectionKind::Hair) => {
                "اتبعي الروتين الأساسي: شامبو، بلسم، وصففي حسب الحاجة."
            }
            (Language::Arabic, SectionKind::Makeup) => {
                "طبقي منتجات المكياج بالترتيب التقليدي: قاعدة، عيون، شفاه."
            }
        };
        Some(sentence)
    }

    /// Instantiates the step sentence of a role for the matched product.
    pub fn step_sentence(self, role: StepRole, name: &str) -> String {
        match self {
            Language::English => english_step(role, name),
            Language::Arabic => arabic_step(role, name),
        }
    }

    /// Routine intro sentence.
    pub fn routine_intro(self, product_count: usize, brands: &[&str]) -> String {
        match self {
            Language::English => {
                let origin = if brands.len() > 1 {
                    format!("products from {}", brands.join(", "))
                } else {
                    format!("{} products", brands.first().copied().unwrap_or_default())
                };
                format!(
                    "I've created a personalized routine using {} carefully selected {}.",
                    product_count, origin
                )
            }
            Language::Arabic => format!(
                "لقد أنشأت روتيناً شخصياً باستخدام {} منتجات مختارة بعناية من {}.",
                product_count,
                brands.join("، ")
            ),
        }
    }

    /// Summary of the current selection, answering "what did I select".
    pub fn selection_summary(self, products: &[Product]) -> String {
        match self {
            Language::English => {
                let listed: Vec<String> = products
                    .iter()
                    .map(|p| format!("{} by {}", p.name, p.brand))
                    .collect();
                format!(
                    "You've selected {} products: {}. Click \"Generate Routine\" to get personalized recommendations!",
                    products.len(),
                    listed.join(", ")
                )
            }
            Language::Arabic => {
                let listed: Vec<String> = products
                    .iter()
                    .map(|p| format!("{} من {}", p.name, p.brand))
                    .collect();
                format!(
                    "لقد اخترت {} منتجات: {}. اضغطي على \"إنشاء الروتين\" للحصول على توصيات شخصية!",
                    products.len(),
                    listed.join("، ")
                )
            }
        }
    }

    /// Category-aware prompt for "how do I use ..." questions.
    pub fn usage_prompt(self, categories: &[Category]) -> String {
        let labels: Vec<&str> = categories.iter().map(|c| self.category_label(*c)).collect();
        match self {
            Language::English => format!(
                "Based on your selected {} products, I'd recommend generating your complete routine first. Click the \"Generate Routine\" button and I'll give you step-by-step instructions!",
                labels.join(" and ")
            ),
            Language::Arabic => format!(
                "بناءً على منتجات {} التي اخترتها، أنصحك بإنشاء روتينك الكامل أولاً. اضغطي على زر \"إنشاء الروتين\" وسأعطيك تعليمات خطوة بخطوة!",
                labels.join(" و ")
            ),
        }
    }

    /// Display label of a category for the filter control.
    pub fn category_label(self, category: Category) -> &'static str {
        match self {
            Language::English => category.as_str(),
            Language::Arabic => match category {
                Category::Cleanser => "منظف",
                Category::Moisturizer => "مرطب",
                Category::Skincare => "العناية بالبشرة",
                Category::Haircare => "العناية بالشعر",
                Category::HairStyling => "تصفيف الشعر",
                Category::HairColor => "صبغة الشعر",
                Category::Makeup => "مكياج",
                Category::Suncare => "الحماية من الشمس",
                Category::MensGrooming => "العناية بالرجل",
                Category::Fragrance => "عطور",
            },
        }
    }
}

fn english_step(role: StepRole, name: &str) -> String {
    match role {
        StepRole::MorningCleanser => format!(
            "Start with {} to gently cleanse your skin and remove any overnight buildup.",
            name
        ),
        StepRole::VitaminC => format!(
            "Apply {} to brighten and protect your skin with antioxidants.",
            name
        ),
        StepRole::DayMoisturizer => format!(
            "Follow with {} to hydrate and prep your skin for the day.",
            name
        ),
        StepRole::Spf => format!(
            "Finish with {} for essential UV protection. Never skip sunscreen!",
            name
        ),
        StepRole::EveningCleanser => format!(
            "Begin your evening routine with {} to remove makeup, dirt, and pollution from the day.",
            name
        ),
        StepRole::Retinol => format!(
            "Apply {} to promote cell renewal and reduce signs of aging. Start slowly if you're new to retinol.",
            name
        ),
        StepRole::NightMoisturizer => format!(
            "Seal in your treatments with {} for overnight hydration and repair.",
            name
        ),
        StepRole::EyeCare => format!(
            "Gently pat {} around the eye area to target specific concerns like dark circles or fine lines.",
            name
        ),
        StepRole::Shampoo => format!(
            "Wash your hair with {}, focusing on the scalp and roots.",
            name
        ),
        StepRole::Conditioner => format!(
            "Apply {} from mid-length to ends, leave for 2-3 minutes, then rinse thoroughly.",
            name
        ),
        StepRole::HairColor => format!(
            "For hair coloring, use {} following the included instructions for best results and hair health.",
            name
        ),
        StepRole::HairStyling => format!(
            "Style as desired and finish with {} to lock in your look.",
            name
        ),
        StepRole::Foundation => format!(
            "Create an even base with {}, blending outward from the center of your face.",
            name
        ),
        StepRole::Eyeshadow => format!(
            "Define your eyes with {}, blending colors for your desired look.",
            name
        ),
        StepRole::Mascara => format!(
            "Enhance your lashes with {}, applying from root to tip in zigzag motions.",
            name
        ),
        StepRole::Lipstick => format!(
            "Complete your look with {} for a beautiful finishing touch.",
            name
        ),
        StepRole::Suncare => format!(
            "Don't forget {} for additional sun protection, especially during outdoor activities.",
            name
        ),
        StepRole::MensGrooming => format!(
            "Apply {} after shaving to soothe and hydrate your skin.",
            name
        ),
        StepRole::Fragrance => format!(
            "Finish with a few spritzes of {} on pulse points for a signature scent.",
            name
        ),
    }
}

fn arabic_step(role: StepRole, name: &str) -> String {
    match role {
        StepRole::MorningCleanser => {
            format!("ابدئي بـ {} لتنظيف البشرة بلطف وإزالة تراكمات الليل.", name)
        }
        StepRole::VitaminC => {
            format!("طبقي {} لإشراق البشرة وحمايتها بمضادات الأكسدة.", name)
        }
        StepRole::DayMoisturizer => {
            format!("تابعي مع {} لترطيب البشرة وتحضيرها لليوم.", name)
        }
        StepRole::Spf => format!(
            "اختتمي مع {} للحماية الأساسية من الأشعة فوق البنفسجية. لا تتخطي واقي الشمس أبداً!",
            name
        ),
        StepRole::EveningCleanser => format!(
            "ابدئي روتين المساء مع {} لإزالة المكياج والأوساخ والتلوث من اليوم.",
            name
        ),
        StepRole::Retinol => format!(
            "طبقي {} لتعزيز تجديد الخلايا وتقليل علامات الشيخوخة. ابدئي ببطء إذا كنت جديدة على الريتينول.",
            name
        ),
        StepRole::NightMoisturizer => {
            format!("اختتمي علاجاتك مع {} للترطيب والإصلاح طوال الليل.", name)
        }
        StepRole::EyeCare => format!(
            "ربتي بلطف {} حول منطقة العين لاستهداف الهالات السوداء أو الخطوط الدقيقة.",
            name
        ),
        StepRole::Shampoo => {
            format!("اغسلي شعرك بـ {}، مع التركيز على فروة الرأس والجذور.", name)
        }
        StepRole::Conditioner => format!(
            "طبقي {} من المنتصف إلى الأطراف، اتركيه لمدة 2-3 دقائق، ثم اشطفيه جيداً.",
            name
        ),
        StepRole::HairColor => format!(
            "لصبغ الشعر، استخدمي {} باتباع التعليمات المرفقة للحصول على أفضل النتائج وصحة الشعر.",
            name
        ),
        StepRole::HairStyling => {
            format!("صففي شعرك كما تريدين واختتمي بـ {} لتثبيت إطلالتك.", name)
        }
        StepRole::Foundation => format!(
            "أنشئي قاعدة متساوية مع {}، امزجي للخارج من وسط الوجه.",
            name
        ),
        StepRole::Eyeshadow => format!(
            "حددي عينيك مع {}، وامزجي الألوان للحصول على الإطلالة التي تريدينها.",
            name
        ),
        StepRole::Mascara => format!(
            "عززي رموشك مع {}، طبقي من الجذر إلى الطرف بحركات متعرجة.",
            name
        ),
        StepRole::Lipstick => format!("أكملي إطلالتك مع {} للمسة نهائية جميلة.", name),
        StepRole::Suncare => format!(
            "لا تنسي {} لحماية إضافية من الشمس، خاصة أثناء الأنشطة الخارجية.",
            name
        ),
        StepRole::MensGrooming => {
            format!("طبق {} بعد الحلاقة لتهدئة البشرة وترطيبها.", name)
        }
        StepRole::Fragrance => format!(
            "اختتمي ببضع رشات من {} على نقاط النبض للحصول على عطر مميز.",
            name
        ),
    }
}
