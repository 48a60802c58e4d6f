use crate::enums::facility_type::FacilityType;

const GENERIC_NOUNS: (&str, &str) = ("facilitate disponibilă", "facilități disponibile");

/// "1 teren disponibil", "5 terenuri disponibile", "21 de terenuri disponibile".
///
/// Romanian inserts "de" after numbers whose last two digits are 00 or >= 20.
pub fn count_phrase(count: usize, facility_type: Option<FacilityType>) -> String {
    let (singular, plural) = facility_type
        .map(|t| t.count_nouns())
        .unwrap_or(GENERIC_NOUNS);

    if count == 1 {
        return format!("1 {}", singular);
    }

    let tail = count % 100;
    if count >= 20 && (tail == 0 || tail >= 20) {
        format!("{} de {}", count, plural)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_phrase() {
        let field = Some(FacilityType::Field);
        assert_eq!(count_phrase(1, field), "1 teren disponibil");
        assert_eq!(count_phrase(5, field), "5 terenuri disponibile");
        assert_eq!(count_phrase(19, field), "19 terenuri disponibile");
        assert_eq!(count_phrase(20, field), "20 de terenuri disponibile");
        assert_eq!(count_phrase(100, field), "100 de terenuri disponibile");
        assert_eq!(count_phrase(101, field), "101 terenuri disponibile");
        assert_eq!(count_phrase(121, field), "121 de terenuri disponibile");
        assert_eq!(count_phrase(3, None), "3 facilități disponibile");
        assert_eq!(
            count_phrase(2, Some(FacilityType::Coach)),
            "2 antrenori disponibili"
        );
    }
}
