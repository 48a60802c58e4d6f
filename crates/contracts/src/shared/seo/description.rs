use super::count::count_phrase;
use super::escape_html;
use super::titles::{h1_for, type_blurb, Labels};
use crate::domain::a001_facility::filter::Filter;
use crate::enums::facility_type::FacilityType;
use crate::shared::url_filters::{filter_to_path, REGISTRATION_PATH};

/// Related listing views for the "Vezi și" paragraph.
///
/// Other facility types for the same city/sport first, then the whole city,
/// then the same view nationwide, then everything.
pub fn related_filters(filter: &Filter) -> Vec<Filter> {
    let current = filter.canonical();
    let mut related: Vec<Filter> = Vec::new();

    let others: Vec<FacilityType> = FacilityType::all()
        .into_iter()
        .filter(|t| Some(*t) != current.facility_type)
        .collect();
    for other in others {
        let sport = if other.is_sport_specific() {
            current.sport.clone()
        } else {
            None
        };
        related.push(
            Filter {
                city: current.city.clone(),
                sport,
                facility_type: Some(other),
                repair_category: None,
            }
            .canonical(),
        );
    }

    if current.city.is_some() && (current.sport.is_some() || current.facility_type.is_some()) {
        related.push(Filter {
            city: current.city.clone(),
            ..Filter::default()
        });
        related.push(
            Filter {
                city: None,
                ..current.clone()
            }
            .canonical(),
        );
    }
    if !current.is_empty() {
        related.push(Filter::default());
    }

    let mut unique: Vec<Filter> = Vec::with_capacity(related.len());
    for f in related {
        if f != current && !unique.contains(&f) {
            unique.push(f);
        }
    }
    unique
}

/// Long description block: intro, cross-links, call to action.
pub fn generate_description_html(filter: &Filter, result_count: usize) -> String {
    let labels = Labels::of(filter);
    let scope = escape_html(&labels.scope());

    let intro = if result_count > 0 {
        format!(
            "Am găsit {}{}. {}",
            count_phrase(result_count, labels.facility_type),
            scope,
            type_blurb(labels.facility_type)
        )
    } else {
        let what = labels
            .type_label()
            .map(|t| escape_html(&t.to_lowercase()))
            .unwrap_or_else(|| "facilități sportive".to_string());
        format!(
            "Momentan nu avem {} listate{}. Lista se actualizează constant, revino în curând.",
            what, scope
        )
    };

    let links: Vec<String> = related_filters(filter)
        .iter()
        .map(|f| {
            format!(
                "<a href=\"{}\">{}</a>",
                escape_html(&filter_to_path(f)),
                escape_html(&h1_for(&Labels::of(f)))
            )
        })
        .collect();

    let mut html = format!("<p>{}</p>", intro);
    if !links.is_empty() {
        html.push_str(&format!("<p>Vezi și: {}.</p>", links.join(", ")));
    }
    html.push_str(&format!(
        "<p>Deții o bază sportivă sau oferi servicii sportive? \
         <a href=\"{}\">Înregistrează-te gratuit</a> și ajungi la mai mulți clienți.</p>",
        REGISTRATION_PATH
    ));
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_related_for_field_page() {
        let f = Filter::new()
            .with_city("Cluj-Napoca")
            .with_sport("tenis")
            .with_type(FacilityType::Field);
        let paths: Vec<String> = related_filters(&f).iter().map(filter_to_path).collect();
        assert_eq!(
            paths,
            vec![
                "/cluj-napoca/tenis/antrenori",
                "/cluj-napoca/magazine-reparatii",
                "/cluj-napoca/magazine-articole",
                "/cluj-napoca",
                "/tenis/terenuri",
                "/toate",
            ]
        );
    }

    #[test]
    fn test_related_for_all_page() {
        let paths: Vec<String> = related_filters(&Filter::new())
            .iter()
            .map(filter_to_path)
            .collect();
        assert_eq!(
            paths,
            vec!["/terenuri", "/antrenori", "/magazine-reparatii", "/magazine-articole"]
        );
    }

    #[test]
    fn test_related_never_contains_current_view() {
        let f = Filter::new().with_city("Iași");
        let related = related_filters(&f);
        assert!(!related.contains(&f));
        assert_eq!(related.last(), Some(&Filter::default()));
    }

    #[test]
    fn test_description_sections() {
        let f = Filter::new()
            .with_city("Cluj-Napoca")
            .with_sport("tenis")
            .with_type(FacilityType::Field);
        let html = generate_description_html(&f, 5);
        assert!(html.starts_with("<p>Am găsit 5 terenuri disponibile pentru Tenis în Cluj-Napoca."));
        assert!(html.contains(
            "<a href=\"/cluj-napoca/tenis/antrenori\">Antrenori Tenis în Cluj-Napoca</a>"
        ));
        assert!(html.contains("<a href=\"/inregistrare\">"));
        assert_eq!(html.matches("<p>").count(), 3);
    }

    #[test]
    fn test_description_without_results() {
        let html = generate_description_html(&Filter::new().with_type(FacilityType::Coach), 0);
        assert!(html.starts_with("<p>Momentan nu avem antrenori listate din toată România."));
    }

    #[test]
    fn test_description_escapes_labels() {
        let f = Filter::new().with_city("<b>Oraș</b>");
        let html = generate_description_html(&f, 0);
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;Oraș&lt;/b&gt;"));
    }

    #[test]
    fn test_description_links_for_city_without_slug() {
        let f = Filter::new().with_city("Москва").with_type(FacilityType::Field);
        let html = generate_description_html(&f, 0);
        assert!(!html.contains("href=\"//"));
        assert!(!html.contains("Москва"));
    }
}
