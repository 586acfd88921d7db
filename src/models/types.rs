//! Common domain type definitions
//!
//! This module contains the closed vocabularies shared across the domain
//! models: the sex of a person and the disease / cause-of-death
//! classification used by the record files.

/// Sex of an individual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
}

impl Sex {
    /// Parse the single-letter code used by the record files
    #[must_use]
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim() {
            "M" | "m" => Some(Self::Male),
            "F" | "f" => Some(Self::Female),
            _ => None,
        }
    }

    /// Single-letter wire code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

/// Disease or cause-of-death classification
///
/// Codes are grouped by system: cardiovascular 1xxx, neurological 21xx,
/// cancers 31xx, endocrine 41xx, congenital 51xx, immune 61xx, respiratory
/// 71xx, musculoskeletal 81xx, traumatic 90xx, neurodevelopmental 101xx,
/// other 11xxx, digestive 121xx, skin 131xx.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disease {
    // Cardiovascular diseases
    /// Heart attack
    HeartAttack,
    /// Stroke
    Stroke,
    /// Hypertension
    Hypertension,
    /// Hypercholesterolemia
    Hypercholesterolemia,
    /// Heart disease
    HeartDisease,

    // Neurological diseases
    /// Alzheimer's disease
    Alzheimers,
    /// Parkinson's disease
    Parkinsons,
    /// Dementia
    Dementia,
    /// Epilepsy
    Epilepsy,

    // Cancers
    /// Cancer, site unspecified
    Cancer,
    /// Lung cancer
    LungCancer,
    /// Melanoma
    Melanoma,
    /// Uterine cancer
    UterineCancer,
    /// Stomach cancer
    StomachCancer,
    /// Leukemia
    Leukemia,
    /// Breast cancer
    BreastCancer,
    /// Ovarian cancer
    OvarianCancer,
    /// Prostate cancer
    ProstateCancer,
    /// Liver cancer
    LiverCancer,
    /// Female cancer, site unspecified
    FemaleCancer,

    // Endocrine diseases
    /// Type 1 diabetes
    DiabetesType1,
    /// Type 2 diabetes
    DiabetesType2,
    /// Cystic fibrosis
    CysticFibrosis,
    /// Tay-Sachs disease
    TaySachs,

    // Congenital genetic abnormalities, not elsewhere classified
    /// Down syndrome
    DownSyndrome,

    // Immune disorders
    /// Lupus
    Lupus,
    /// Grave's disease
    GravesDisease,

    // Respiratory diseases
    /// Emphysema
    Emphysema,
    /// Asthma
    Asthma,

    // Musculoskeletal system
    /// Achondroplasia
    Achondroplasia,
    /// Fibromyalgia
    Fibromyalgia,
    /// Rheumatoid arthritis
    RheumatoidArthritis,
    /// Gout
    Gout,

    // Traumatic accidents
    /// Fire
    Fire,
    /// Suicide
    Suicide,
    /// Killed in action
    KilledInAction,
    /// Plane accident
    PlaneAccident,
    /// Accident, unspecified
    Accident,
    /// Car accident
    CarAccident,

    // Neurodevelopmental/behavioral diseases
    /// Autism
    Autism,

    // Other/unclassified
    /// Blood infection
    BloodInfection,
    /// Infection, unspecified
    Infection,
    /// Sudden infant death syndrome
    Sids,
    /// Migraines
    Migranes,

    // Digestive diseases
    /// Cirrhosis of the liver
    CirrhosisLiver,
    /// Crohn's disease
    CrohnsDisease,

    // Skin diseases
    /// Psoriasis
    Psoriasis,
}

impl Disease {
    /// Map a record-file label to its classification
    ///
    /// Matching is case-insensitive and accepts the aliases that occur in
    /// the data ("HTN", "High Cholesterol", "Seizures").
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let disease = match label.trim().to_lowercase().as_str() {
            "heart attack" => Self::HeartAttack,
            "stroke" => Self::Stroke,
            "hypertension" | "htn" => Self::Hypertension,
            "hypercholesterolemia" | "high cholesterol" => Self::Hypercholesterolemia,
            "heart disease" => Self::HeartDisease,
            "alzheimer's disease" => Self::Alzheimers,
            "parkinson's disease" => Self::Parkinsons,
            "dementia" => Self::Dementia,
            "epilepsy" | "seizures" => Self::Epilepsy,
            "cancer" => Self::Cancer,
            "lung cancer" => Self::LungCancer,
            "melanoma" => Self::Melanoma,
            "uterine cancer" => Self::UterineCancer,
            "stomach cancer" => Self::StomachCancer,
            "leukemia" => Self::Leukemia,
            "breast cancer" => Self::BreastCancer,
            "ovarian cancer" => Self::OvarianCancer,
            "prostate cancer" => Self::ProstateCancer,
            "liver cancer" => Self::LiverCancer,
            "female cancer" => Self::FemaleCancer,
            "type 1 diabetes" => Self::DiabetesType1,
            "type 2 diabetes" => Self::DiabetesType2,
            "cystic fibrosis" => Self::CysticFibrosis,
            "tay sachs disease" => Self::TaySachs,
            "down syndrome" => Self::DownSyndrome,
            "lupus" => Self::Lupus,
            "grave's disease" => Self::GravesDisease,
            "emphysema" => Self::Emphysema,
            "asthma" => Self::Asthma,
            "achondroplasia" => Self::Achondroplasia,
            "fibromyalgia" => Self::Fibromyalgia,
            "rheumatoid arthritis" => Self::RheumatoidArthritis,
            "gout" => Self::Gout,
            "fire" => Self::Fire,
            "suicide" => Self::Suicide,
            "killed in action" => Self::KilledInAction,
            "plane accident" => Self::PlaneAccident,
            "accident" => Self::Accident,
            "car accident" => Self::CarAccident,
            "autism" => Self::Autism,
            "blood infection" => Self::BloodInfection,
            "infection" => Self::Infection,
            "sids" => Self::Sids,
            "migranes" => Self::Migranes,
            "cirrhosis of the liver" => Self::CirrhosisLiver,
            "crohn's disease" => Self::CrohnsDisease,
            "psoriasis" => Self::Psoriasis,
            _ => return None,
        };
        Some(disease)
    }

    /// Grouped numeric classification code
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::HeartAttack => 1000,
            Self::Stroke => 1001,
            Self::Hypertension => 1100,
            Self::Hypercholesterolemia => 1101,
            Self::HeartDisease => 1102,
            Self::Alzheimers => 2100,
            Self::Parkinsons => 2101,
            Self::Dementia => 2102,
            Self::Epilepsy => 2103,
            Self::Cancer => 3100,
            Self::LungCancer => 3101,
            Self::Melanoma => 3102,
            Self::UterineCancer => 3103,
            Self::StomachCancer => 3104,
            Self::Leukemia => 3105,
            Self::BreastCancer => 3106,
            Self::OvarianCancer => 3107,
            Self::ProstateCancer => 3108,
            Self::LiverCancer => 3109,
            Self::FemaleCancer => 3110,
            Self::DiabetesType1 => 4100,
            Self::DiabetesType2 => 4101,
            Self::CysticFibrosis => 4102,
            Self::TaySachs => 4103,
            Self::DownSyndrome => 5100,
            Self::Lupus => 6100,
            Self::GravesDisease => 6101,
            Self::Emphysema => 7100,
            Self::Asthma => 7101,
            Self::Achondroplasia => 8100,
            Self::Fibromyalgia => 8101,
            Self::RheumatoidArthritis => 8102,
            Self::Gout => 8103,
            Self::Fire => 9000,
            Self::Suicide => 9001,
            Self::KilledInAction => 9002,
            Self::PlaneAccident => 9003,
            Self::Accident => 9004,
            Self::CarAccident => 9005,
            Self::Autism => 10100,
            Self::BloodInfection => 11000,
            Self::Infection => 11001,
            Self::Sids => 11002,
            Self::Migranes => 11100,
            Self::CirrhosisLiver => 12100,
            Self::CrohnsDisease => 12101,
            Self::Psoriasis => 13100,
        }
    }

    /// Canonical display label as it appears in the record files
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HeartAttack => "Heart Attack",
            Self::Stroke => "Stroke",
            Self::Hypertension => "Hypertension",
            Self::Hypercholesterolemia => "Hypercholesterolemia",
            Self::HeartDisease => "Heart Disease",
            Self::Alzheimers => "Alzheimer's Disease",
            Self::Parkinsons => "Parkinson's Disease",
            Self::Dementia => "Dementia",
            Self::Epilepsy => "Epilepsy",
            Self::Cancer => "Cancer",
            Self::LungCancer => "Lung Cancer",
            Self::Melanoma => "Melanoma",
            Self::UterineCancer => "Uterine Cancer",
            Self::StomachCancer => "Stomach Cancer",
            Self::Leukemia => "Leukemia",
            Self::BreastCancer => "Breast Cancer",
            Self::OvarianCancer => "Ovarian Cancer",
            Self::ProstateCancer => "Prostate Cancer",
            Self::LiverCancer => "Liver Cancer",
            Self::FemaleCancer => "Female Cancer",
            Self::DiabetesType1 => "Type 1 Diabetes",
            Self::DiabetesType2 => "Type 2 Diabetes",
            Self::CysticFibrosis => "Cystic Fibrosis",
            Self::TaySachs => "Tay Sachs Disease",
            Self::DownSyndrome => "Down Syndrome",
            Self::Lupus => "Lupus",
            Self::GravesDisease => "Grave's Disease",
            Self::Emphysema => "Emphysema",
            Self::Asthma => "Asthma",
            Self::Achondroplasia => "Achondroplasia",
            Self::Fibromyalgia => "Fibromyalgia",
            Self::RheumatoidArthritis => "Rheumatoid Arthritis",
            Self::Gout => "Gout",
            Self::Fire => "Fire",
            Self::Suicide => "Suicide",
            Self::KilledInAction => "Killed in Action",
            Self::PlaneAccident => "Plane Accident",
            Self::Accident => "Accident",
            Self::CarAccident => "Car Accident",
            Self::Autism => "Autism",
            Self::BloodInfection => "Blood Infection",
            Self::Infection => "Infection",
            Self::Sids => "SIDS",
            Self::Migranes => "Migranes",
            Self::CirrhosisLiver => "Cirrhosis of the Liver",
            Self::CrohnsDisease => "Crohn's Disease",
            Self::Psoriasis => "Psoriasis",
        }
    }
}
