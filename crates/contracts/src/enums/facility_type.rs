use serde::{Deserialize, Serialize};

/// Типы объектов каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilityType {
    Field,
    Coach,
    RepairShop,
    EquipmentShop,
}

impl FacilityType {
    /// Код, который ожидает REST API
    pub fn code(&self) -> &'static str {
        match self {
            FacilityType::Field => "field",
            FacilityType::Coach => "coach",
            FacilityType::RepairShop => "repair_shop",
            FacilityType::EquipmentShop => "equipment_shop",
        }
    }

    /// Сегмент URL
    pub fn slug(&self) -> &'static str {
        match self {
            FacilityType::Field => "terenuri",
            FacilityType::Coach => "antrenori",
            FacilityType::RepairShop => "magazine-reparatii",
            FacilityType::EquipmentShop => "magazine-articole",
        }
    }

    /// Заголовок раздела (множественное число)
    pub fn display_name(&self) -> &'static str {
        match self {
            FacilityType::Field => "Terenuri Sportive",
            FacilityType::Coach => "Antrenori",
            FacilityType::RepairShop => "Magazine Reparații",
            FacilityType::EquipmentShop => "Magazine Articole Sportive",
        }
    }

    /// Название одного объекта, для форм регистрации
    pub fn singular_name(&self) -> &'static str {
        match self {
            FacilityType::Field => "Teren sportiv",
            FacilityType::Coach => "Antrenor",
            FacilityType::RepairShop => "Magazin reparații",
            FacilityType::EquipmentShop => "Magazin articole sportive",
        }
    }

    /// (singular, plural) nouns used in "N ... disponibile" clauses
    pub fn count_nouns(&self) -> (&'static str, &'static str) {
        match self {
            FacilityType::Field => ("teren disponibil", "terenuri disponibile"),
            FacilityType::Coach => ("antrenor disponibil", "antrenori disponibili"),
            FacilityType::RepairShop => ("magazin de reparații", "magazine de reparații"),
            FacilityType::EquipmentShop => {
                ("magazin de articole sportive", "magazine de articole sportive")
            }
        }
    }

    /// Field and coach listings are filtered by sport, shops mostly are not.
    pub fn is_sport_specific(&self) -> bool {
        matches!(self, FacilityType::Field | FacilityType::Coach)
    }

    /// Получить все типы в порядке отображения
    pub fn all() -> [FacilityType; 4] {
        [
            FacilityType::Field,
            FacilityType::Coach,
            FacilityType::RepairShop,
            FacilityType::EquipmentShop,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "field" => Some(FacilityType::Field),
            "coach" => Some(FacilityType::Coach),
            "repair_shop" => Some(FacilityType::RepairShop),
            "equipment_shop" => Some(FacilityType::EquipmentShop),
            _ => None,
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.trim();
        Self::all().into_iter().find(|t| t.slug() == slug)
    }

    /// Accepts either the API code or the URL slug.
    pub fn parse(value: &str) -> Option<Self> {
        Self::from_code(value).or_else(|| Self::from_slug(value))
    }
}

impl std::fmt::Display for FacilityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
