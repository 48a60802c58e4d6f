use super::{comparison_key, slugify, title_case_slug};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// (slug, canonical name)
pub static CITIES: &[(&str, &str)] = &[
    ("bucuresti", "București"),
    ("cluj-napoca", "Cluj-Napoca"),
    ("timisoara", "Timișoara"),
    ("iasi", "Iași"),
    ("constanta", "Constanța"),
    ("craiova", "Craiova"),
    ("brasov", "Brașov"),
    ("galati", "Galați"),
    ("ploiesti", "Ploiești"),
    ("oradea", "Oradea"),
    ("braila", "Brăila"),
    ("arad", "Arad"),
    ("pitesti", "Pitești"),
    ("sibiu", "Sibiu"),
    ("bacau", "Bacău"),
    ("targu-mures", "Târgu Mureș"),
    ("baia-mare", "Baia Mare"),
    ("buzau", "Buzău"),
    ("botosani", "Botoșani"),
    ("satu-mare", "Satu Mare"),
    ("ramnicu-valcea", "Râmnicu Vâlcea"),
    ("drobeta-turnu-severin", "Drobeta-Turnu Severin"),
    ("suceava", "Suceava"),
    ("piatra-neamt", "Piatra Neamț"),
    ("targu-jiu", "Târgu Jiu"),
    ("targoviste", "Târgoviște"),
    ("focsani", "Focșani"),
    ("bistrita", "Bistrița"),
    ("resita", "Reșița"),
    ("tulcea", "Tulcea"),
    ("calarasi", "Călărași"),
    ("giurgiu", "Giurgiu"),
    ("alba-iulia", "Alba Iulia"),
    ("deva", "Deva"),
    ("hunedoara", "Hunedoara"),
    ("zalau", "Zalău"),
    ("sfantu-gheorghe", "Sfântu Gheorghe"),
    ("barlad", "Bârlad"),
    ("vaslui", "Vaslui"),
    ("roman", "Roman"),
    ("turda", "Turda"),
    ("medias", "Mediaș"),
    ("slobozia", "Slobozia"),
    ("alexandria", "Alexandria"),
    ("voluntari", "Voluntari"),
    ("lugoj", "Lugoj"),
    ("medgidia", "Medgidia"),
    ("onesti", "Onești"),
    ("miercurea-ciuc", "Miercurea Ciuc"),
    ("sighetu-marmatiei", "Sighetu Marmației"),
    ("petrosani", "Petroșani"),
    ("mangalia", "Mangalia"),
    ("tecuci", "Tecuci"),
    ("ramnicu-sarat", "Râmnicu Sărat"),
    ("pascani", "Pașcani"),
    ("dej", "Dej"),
    ("reghin", "Reghin"),
    ("navodari", "Năvodari"),
    ("odorheiu-secuiesc", "Odorheiu Secuiesc"),
    ("campina", "Câmpina"),
    ("mioveni", "Mioveni"),
    ("campulung", "Câmpulung"),
    ("caracal", "Caracal"),
    ("sebes", "Sebeș"),
    ("fagaras", "Făgăraș"),
    ("fetesti", "Fetești"),
    ("curtea-de-arges", "Curtea de Argeș"),
    ("sighisoara", "Sighișoara"),
    ("borsa", "Borșa"),
    ("rosiorii-de-vede", "Roșiorii de Vede"),
    ("slatina", "Slatina"),
    ("dorohoi", "Dorohoi"),
    ("falticeni", "Fălticeni"),
    ("husi", "Huși"),
    ("turnu-magurele", "Turnu Măgurele"),
    ("caransebes", "Caransebeș"),
    ("radauti", "Rădăuți"),
    ("campia-turzii", "Câmpia Turzii"),
    ("vulcan", "Vulcan"),
    ("lupeni", "Lupeni"),
    ("tarnaveni", "Târnăveni"),
    ("aiud", "Aiud"),
    ("codlea", "Codlea"),
    ("sacele", "Săcele"),
    ("cugir", "Cugir"),
    ("popesti-leordeni", "Popești-Leordeni"),
    ("otopeni", "Otopeni"),
    ("pantelimon", "Pantelimon"),
    ("bragadiru", "Bragadiru"),
    ("chitila", "Chitila"),
    ("buftea", "Buftea"),
    ("mogosoaia", "Mogoșoaia"),
    ("floresti", "Florești"),
    ("baia-sprie", "Baia Sprie"),
    ("baile-herculane", "Băile Herculane"),
    ("sinaia", "Sinaia"),
    ("predeal", "Predeal"),
    ("eforie", "Eforie"),
    ("vatra-dornei", "Vatra Dornei"),
    ("moinesti", "Moinești"),
    ("comanesti", "Comănești"),
    ("gherla", "Gherla"),
    ("motru", "Motru"),
    ("orsova", "Orșova"),
    ("targu-neamt", "Târgu Neamț"),
    ("rasnov", "Râșnov"),
    ("zarnesti", "Zărnești"),
];

static SLUG_TO_NAME: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CITIES.iter().copied().collect());

static NAME_TO_SLUG: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    CITIES
        .iter()
        .map(|(slug, name)| (comparison_key(name), *slug))
        .collect()
});

/// "targu-mures" -> "Târgu Mureș"; unknown slugs are title-cased.
pub fn city_slug_to_name(slug: &str) -> String {
    let key = slug.trim().to_lowercase();
    match SLUG_TO_NAME.get(key.as_str()) {
        Some(name) => (*name).to_string(),
        None => title_case_slug(&key),
    }
}

/// "Târgu Mureș", "targu mures", "TÂRGU MUREȘ" -> "targu-mures".
pub fn city_name_to_slug(name: &str) -> String {
    match NAME_TO_SLUG.get(&comparison_key(name)) {
        Some(slug) => (*slug).to_string(),
        None => slugify(name),
    }
}

pub fn is_known_city_slug(slug: &str) -> bool {
    SLUG_TO_NAME.contains_key(slug)
}

/// Canonical names in dictionary order
pub fn all_city_names() -> Vec<&'static str> {
    CITIES.iter().map(|(_, name)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_cities() {
        assert_eq!(city_slug_to_name("iasi"), "Iași");
        assert_eq!(city_slug_to_name("cluj-napoca"), "Cluj-Napoca");
        assert_eq!(city_slug_to_name("IASI"), "Iași");
        assert_eq!(city_name_to_slug("Iași"), "iasi");
        assert_eq!(city_name_to_slug("iasi"), "iasi");
        assert_eq!(city_name_to_slug("  TÂRGU MUREȘ "), "targu-mures");
        assert_eq!(city_name_to_slug("Drobeta-Turnu Severin"), "drobeta-turnu-severin");
    }

    #[test]
    fn test_unknown_city_fallbacks() {
        assert_eq!(city_slug_to_name("baia-de-fier"), "Baia De Fier");
        assert_eq!(city_name_to_slug("Baia de Fier"), "baia-de-fier");
    }

    #[test]
    fn test_table_is_bijection() {
        let slugs: HashSet<_> = CITIES.iter().map(|(s, _)| *s).collect();
        let names: HashSet<_> = CITIES.iter().map(|(_, n)| comparison_key(n)).collect();
        assert_eq!(slugs.len(), CITIES.len());
        assert_eq!(names.len(), CITIES.len());
        assert!(CITIES.len() >= 100);
    }

    #[test]
    fn test_round_trip_every_city() {
        for (slug, name) in CITIES {
            assert_eq!(city_name_to_slug(name), *slug);
            assert_eq!(city_slug_to_name(&city_name_to_slug(name)), *name);
            // the dictionary slug agrees with the generic slugifier
            assert_eq!(slugify(name), *slug);
        }
    }
}
