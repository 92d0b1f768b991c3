//! Static care recommendations keyed by predicted condition label.
//!
//! The table is fixed at build time. Labels match the training-data class
//! names exactly and case-sensitively; a predicted label without an
//! authored entry resolves to `None`, which callers should render as a
//! neutral "no specific guidance available" message rather than an error.

use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

/// Authored guidance for one condition: skin care treatment, do's and
/// don'ts, and a diet plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationBundle {
    pub treatment: &'static str,
    pub dos_and_donts: &'static str,
    pub diet: &'static str,
}

lazy_static! {
    static ref RECOMMENDATIONS: HashMap<&'static str, RecommendationBundle> = {
        let mut table = HashMap::new();
        table.insert(
            "vitiligo",
            RecommendationBundle {
                treatment: "Vitiligo management uses topical corticosteroids to reduce \
                    inflammation and encourage repigmentation of the skin. Phototherapy such \
                    as UVB therapy can stimulate melanocytes to produce pigment in affected \
                    areas, and in more severe cases surgical options like skin grafting or \
                    melanocyte transplantation may be considered to restore pigmentation. \
                    Work closely with a dermatologist to determine the most suitable plan for \
                    the extent and progression of the condition.",
                dos_and_donts: "Do protect your skin from sun exposure with sunscreen and \
                    protective clothing to prevent sunburn in depigmented areas. Do consult a \
                    dermatologist for personalized treatment options, including topical \
                    corticosteroids, phototherapy, or surgical interventions. Do seek support \
                    from vitiligo support groups and counseling for any emotional impact. \
                    Don't use harsh chemicals or treatments that may aggravate the skin, and \
                    don't neglect regular skin checks for signs of skin cancer, especially in \
                    depigmented areas.",
                diet: "Include foods rich in antioxidants like fruits, vegetables, and green \
                    tea to combat oxidative stress, along with foods high in vitamins C, E, \
                    and D and minerals like copper and zinc known for their role in skin \
                    health. Foods with phenylalanine content such as dairy, meat, and soy may \
                    support repigmentation. Avoid trigger foods that may worsen autoimmune \
                    responses, and consult a nutritionist or dermatologist for a personalized \
                    plan.",
            },
        );
        table.insert(
            "Tinea Ringworm Candidiasis and other Fungal Infections",
            RecommendationBundle {
                treatment: "Candidiasis is a fungal infection, and treatment involves \
                    antifungal medication to eliminate the fungal overgrowth on the skin. \
                    Topical antifungal creams, ointments, or oral medication may be \
                    prescribed based on the severity and location of the infection. Proper \
                    hygiene, keeping the affected area clean and dry, and avoiding factors \
                    that promote fungal growth are also important; consult a healthcare \
                    provider for an accurate diagnosis and a plan tailored to your needs.",
                dos_and_donts: "Do practice good hygiene by keeping the affected areas clean \
                    and dry to prevent further fungal growth. Do wear loose-fitting, \
                    breathable clothing to promote airflow and reduce moisture. Do use \
                    antifungal medication as prescribed by a healthcare professional. Don't \
                    use harsh soaps or irritating products that can disrupt the natural \
                    balance of the skin, and don't scratch or aggravate the infected areas, \
                    which can spread the infection or damage the skin.",
                diet: "Focus on reducing foods that promote yeast growth: emphasize \
                    non-starchy vegetables, low-sugar fruits, lean protein, and healthy \
                    fats, with probiotic-rich foods like yogurt and kefir to support gut \
                    health. Anti-fungal foods such as garlic, coconut oil, and apple cider \
                    vinegar are known for their candida-fighting properties. Limit sugary \
                    foods, refined carbohydrates, and alcohol, and prioritize water intake to \
                    flush out toxins.",
            },
        );
        table.insert(
            "Melanoma Skin Cancer Nevi and Moles",
            RecommendationBundle {
                treatment: "Treatment for melanoma typically involves surgical removal of \
                    the tumor along with some surrounding healthy tissue to ensure complete \
                    excision. Depending on the stage and spread, additional therapies such as \
                    immunotherapy, targeted therapy, chemotherapy, or radiation therapy may \
                    be recommended to target any remaining cancer cells and reduce the risk \
                    of recurrence. Ongoing monitoring and regular skin checks are essential \
                    to detect recurrence or new skin cancers early.",
                dos_and_donts: "Do conduct regular skin self-exams and promptly report any \
                    changes in moles, skin, or overall health to a healthcare professional. \
                    Do protect the skin from excessive UV exposure with sunscreen, protective \
                    clothing, and shade during peak sun hours. Do follow the recommended \
                    follow-up care and surveillance schedule after treatment. Don't ignore \
                    unusual changes on the skin such as new moles or changes in existing \
                    ones, and don't disregard professional medical advice and timely \
                    screenings.",
                diet: "Emphasize a diet rich in fruits, vegetables, and whole grains for the \
                    vitamins, minerals, and antioxidants that support the immune system. \
                    Sources of omega-3 fatty acids such as fatty fish, flaxseeds, and \
                    walnuts may offer anti-inflammatory benefits, while excessive processed \
                    and red meats and sugary, high-fat foods are best avoided. A registered \
                    dietitian can tailor guidance around potential interactions with \
                    treatment.",
            },
        );
        table.insert(
            "Eczema Photos",
            RecommendationBundle {
                treatment: "Eczematous skin needs a tailored approach: topical treatments \
                    like corticosteroids or calcineurin inhibitors may be used cautiously to \
                    manage eczema while monitoring for any suspicious lesions. Regular skin \
                    checks by a dermatologist are essential to detect changes early, and \
                    where needed, options such as surgical excision, photodynamic therapy, or \
                    immune-based therapies might be considered in close collaboration \
                    between specialists.",
                dos_and_donts: "Do moisturize the skin regularly with a gentle, \
                    fragrance-free moisturizer to maintain hydration and reduce flare-ups. \
                    Do identify and avoid triggers such as certain soaps, detergents, and \
                    environmental allergens. Do use mild, non-irritating skincare products \
                    and laundry detergents. Don't scratch or rub the affected areas, which \
                    causes further damage and infection, and don't skip professional medical \
                    advice for personalized management.",
                diet: "Include foods rich in omega-3 fatty acids like fatty fish, flaxseeds, \
                    and walnuts for their anti-inflammatory properties, and fruits and \
                    vegetables high in antioxidants, such as berries and leafy greens, to \
                    support skin regeneration. Avoid potential trigger foods like dairy, \
                    gluten, and processed foods that may exacerbate flare-ups, and keep the \
                    skin hydrated from within by drinking enough water.",
            },
        );
        table
    };
}

/// Looks up the authored recommendation bundle for a predicted label.
///
/// Total over all inputs: unknown labels return `None`, never an error.
pub fn lookup(label: &str) -> Option<&'static RecommendationBundle> {
    RECOMMENDATIONS.get(label)
}

/// The labels that have authored content, in no particular order.
pub fn known_labels() -> impl Iterator<Item = &'static str> {
    RECOMMENDATIONS.keys().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_label() {
        let bundle = lookup("vitiligo").expect("vitiligo should have authored content");
        assert!(!bundle.treatment.is_empty());
        assert!(!bundle.dos_and_donts.is_empty());
        assert!(!bundle.diet.is_empty());
    }

    #[test]
    fn test_lookup_is_total() {
        assert!(lookup("unknown-disease-xyz").is_none());
        assert!(lookup("").is_none());
        // Matching is case-sensitive
        assert!(lookup("Vitiligo").is_none());
    }

    #[test]
    fn test_all_bundles_complete() {
        let mut count = 0;
        for label in known_labels() {
            let bundle = lookup(label).unwrap();
            assert!(!bundle.treatment.is_empty(), "empty treatment for {label}");
            assert!(!bundle.dos_and_donts.is_empty(), "empty dos/donts for {label}");
            assert!(!bundle.diet.is_empty(), "empty diet for {label}");
            count += 1;
        }
        assert_eq!(count, 4);
    }

    #[test]
    fn test_training_class_names_are_keys() {
        // Keys follow the training-data folder names, not the display names
        assert!(lookup("Tinea Ringworm Candidiasis and other Fungal Infections").is_some());
        assert!(lookup("Melanoma Skin Cancer Nevi and Moles").is_some());
        assert!(lookup("Eczema Photos").is_some());
        assert!(lookup("candidiasis").is_none());
        assert!(lookup("melanoma").is_none());
        assert!(lookup("eczema").is_none());
    }
}
