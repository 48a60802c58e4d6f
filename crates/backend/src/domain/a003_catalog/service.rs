use contracts::domain::a003_catalog::aggregate::{City, Sport};
use contracts::shared::slug::comparison_key;

use crate::shared::directory::{DirectoryError, FacilityDirectory};

/// Города для фильтра, по алфавиту без учёта диакритики
pub async fn list_cities(directory: &dyn FacilityDirectory) -> Result<Vec<City>, DirectoryError> {
    let mut cities = directory.list_cities().await?;
    cities.sort_by_cached_key(|c| comparison_key(&c.name));
    cities.dedup_by(|a, b| comparison_key(&a.name) == comparison_key(&b.name));
    Ok(cities)
}

/// Виды спорта для фильтра, по алфавиту
pub async fn list_sports(directory: &dyn FacilityDirectory) -> Result<Vec<Sport>, DirectoryError> {
    let mut sports = directory.list_sports().await?;
    sports.sort_by_cached_key(|s| comparison_key(&s.name));
    sports.dedup_by(|a, b| a.slug() == b.slug());
    Ok(sports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::directory::memory::MemoryDirectory;

    fn city(id: i64, name: &str) -> City {
        City {
            id,
            name: name.into(),
            county: None,
        }
    }

    #[tokio::test]
    async fn test_cities_sorted_ignoring_diacritics() {
        let directory = MemoryDirectory {
            cities: vec![city(1, "Timișoara"), city(2, "Arad"), city(3, "Șimleu Silvaniei"), city(4, "Brașov")],
            ..Default::default()
        };
        let names: Vec<String> = list_cities(&directory)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["Arad", "Brașov", "Șimleu Silvaniei", "Timișoara"]);
    }

    #[tokio::test]
    async fn test_duplicate_sports_collapsed() {
        let directory = MemoryDirectory {
            sports: vec![
                Sport { id: 1, name: "Tenis".into(), slug: None },
                Sport { id: 2, name: "Fotbal".into(), slug: Some("fotbal".into()) },
                Sport { id: 3, name: "tenis".into(), slug: Some("tenis".into()) },
            ],
            ..Default::default()
        };
        let sports = list_sports(&directory).await.unwrap();
        assert_eq!(sports.len(), 2);
        assert_eq!(sports[0].slug(), "fotbal");
        assert_eq!(sports[1].slug(), "tenis");
    }
}
